//! Software framebuffer with clipped line and disc rasterisation.

use crate::surface::{Color, Surface, BLACK};
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// A `width x height` grid of packed `0x00RRGGBB` pixels, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: AllocVec<Color>,
}

impl Framebuffer {
    /// A black framebuffer.
    pub fn new(width: usize, height: usize) -> Self {
        Framebuffer {
            width,
            height,
            pixels: vec![BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.iter_mut().for_each(|p| *p = color);
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Write one pixel; out-of-bounds writes are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Read one pixel, `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// The pixel buffer as native-endian bytes, e.g. for a texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels currently equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    fn max_x(&self) -> i32 {
        self.width.min(i32::MAX as usize) as i32 - 1
    }

    fn max_y(&self) -> i32 {
        self.height.min(i32::MAX as usize) as i32 - 1
    }
}

impl Surface for Framebuffer {
    /// Walk the major axis one pixel at a time and interpolate the minor one.
    ///
    /// The walk is limited to the visible span of the major axis so far-away
    /// endpoints cost nothing.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let dx = x2 as f64 - x1 as f64;
        let dy = y2 as f64 - y1 as f64;

        if dx == 0.0 && dy == 0.0 {
            self.put_pixel(x1, y1, color);
            return;
        }

        if dx.abs() > dy.abs() {
            let (sx, sy) = if x1 > x2 { (x2, y2) } else { (x1, y1) };
            let ex = if x1 > x2 { x1 } else { x2 };
            let slope = dy / dx;
            for i in sx.max(0)..=ex.min(self.max_x()) {
                let y = sy as f64 + (i as f64 - sx as f64) * slope;
                self.put_pixel(i, y as i32, color);
            }
        } else {
            let (sx, sy) = if y1 > y2 { (x2, y2) } else { (x1, y1) };
            let ey = if y1 > y2 { y1 } else { y2 };
            let slope = dx / dy;
            for i in sy.max(0)..=ey.min(self.max_y()) {
                let x = sx as f64 + (i as f64 - sy as f64) * slope;
                self.put_pixel(x as i32, i, color);
            }
        }
    }

    /// Plots every `(x + i, y + j)` with `i, j` in `[-r, r)` and `i² + j² < r²`.
    fn draw_filled_circle(&mut self, x: i32, y: i32, radius: i32, color: Color) {
        let r = radius as i64;
        for i in -r..r {
            for j in -r..r {
                if i * i + j * j < r * r {
                    let px = x as i64 + i;
                    let py = y as i64 + j;
                    if px >= i32::MIN as i64 && px <= i32::MAX as i64
                        && py >= i32::MIN as i64 && py <= i32::MAX as i64
                    {
                        self.put_pixel(px as i32, py as i32, color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RED, WHITE};

    #[test]
    fn out_of_bounds_pixels_are_dropped() {
        let mut fb = Framebuffer::new(4, 4);
        fb.put_pixel(-1, 0, WHITE);
        fb.put_pixel(0, 4, WHITE);
        fb.put_pixel(i32::MAX, i32::MIN, WHITE);
        assert_eq!(fb.count(WHITE), 0);
        assert_eq!(fb.pixel(4, 0), None);
    }

    #[test]
    fn horizontal_line_includes_endpoints() {
        let mut fb = Framebuffer::new(8, 8);
        fb.draw_line(5, 2, 1, 2, WHITE);
        for x in 1..=5 {
            assert_eq!(fb.pixel(x, 2), Some(WHITE), "x = {}", x);
        }
        assert_eq!(fb.count(WHITE), 5);
    }

    #[test]
    fn steep_line_walks_y() {
        let mut fb = Framebuffer::new(8, 8);
        fb.draw_line(0, 0, 2, 6, WHITE);
        assert_eq!(fb.count(WHITE), 7);
        assert_eq!(fb.pixel(0, 0), Some(WHITE));
        assert_eq!(fb.pixel(2, 6), Some(WHITE));
    }

    #[test]
    fn zero_length_line_is_a_point() {
        let mut fb = Framebuffer::new(8, 8);
        fb.draw_line(3, 3, 3, 3, WHITE);
        assert_eq!(fb.count(WHITE), 1);
        assert_eq!(fb.pixel(3, 3), Some(WHITE));
    }

    #[test]
    fn line_far_outside_is_clipped() {
        let mut fb = Framebuffer::new(8, 8);
        fb.draw_line(-1_000_000, 4, 1_000_000, 4, WHITE);
        assert_eq!(fb.count(WHITE), 8);
    }

    #[test]
    fn filled_circle_shape() {
        let mut fb = Framebuffer::new(16, 16);
        fb.draw_filled_circle(8, 8, 2, RED);
        // (i, j) in [-2, 2)^2 with i² + j² < 4
        assert_eq!(fb.count(RED), 9);
        assert_eq!(fb.pixel(8, 8), Some(RED));
        assert_eq!(fb.pixel(6, 8), Some(BLACK));
        assert_eq!(fb.pixel(10, 8), Some(BLACK));
    }

    #[test]
    fn bytes_view_matches_pixels() {
        let mut fb = Framebuffer::new(2, 1);
        fb.put_pixel(1, 0, 0x0011_2233);
        assert_eq!(fb.as_bytes().len(), 8);
        assert_eq!(&fb.as_bytes()[4..8], &0x0011_2233u32.to_ne_bytes());
    }
}
