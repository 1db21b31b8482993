//! Drawing capability a soft body renders through.

use crate::config::SimulationConfig;
use crate::float::Float;

/// Packed `0x00RRGGBB` colour.
pub type Color = u32;

pub const WHITE: Color = 0x00ff_ffff;
pub const RED: Color = 0x00ff_0000;
pub const BLACK: Color = 0x0000_0000;

/// A pixel target. Implementations must silently drop pixels that fall
/// outside the surface.
pub trait Surface {
    /// Rasterise a segment between two pixel coordinates, endpoints included.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color);

    /// Rasterise a filled disc centred on `(x, y)`.
    fn draw_filled_circle(&mut self, x: i32, y: i32, radius: i32, color: Color);
}

/// Colours and sizes used when drawing a body.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    pub spring_color: Color,
    pub particle_color: Color,
    pub point_radius: i32,
}

impl RenderStyle {
    /// White springs and red particles sized from the simulation config.
    pub fn from_config<F: Float>(config: &SimulationConfig<F>) -> Self {
        RenderStyle {
            point_radius: config.point_radius,
            ..Self::default()
        }
    }

    pub fn with_spring_color(mut self, color: Color) -> Self {
        self.spring_color = color;
        self
    }

    pub fn with_particle_color(mut self, color: Color) -> Self {
        self.particle_color = color;
        self
    }

    pub fn with_point_radius(mut self, radius: i32) -> Self {
        self.point_radius = radius;
        self
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            spring_color: WHITE,
            particle_color: RED,
            point_radius: 4,
        }
    }
}
