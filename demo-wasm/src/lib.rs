use springmesh::{
    ChainConfig, Framebuffer, GridConfig, NoOpStepObserver, RenderStyle, SimulationConfig,
    SoftBody, Vec2,
};
use wasm_bindgen::prelude::*;

const WIDTH: usize = 512;
const HEIGHT: usize = 512;

/// Expand `0x00RRGGBB` pixels into the RGBA bytes `ImageData` expects.
///
/// `out` must hold four bytes per pixel.
fn write_rgba(frame: &Framebuffer, out: &mut [u8]) {
    for (&p, px) in frame.pixels().iter().zip(out.chunks_exact_mut(4)) {
        px[0] = (p >> 16) as u8;
        px[1] = (p >> 8) as u8;
        px[2] = p as u8;
        px[3] = 0xff;
    }
}

fn rgba_buffer() -> Vec<u8> {
    vec![0; WIDTH * HEIGHT * 4]
}

fn flat_positions(body: &SoftBody<f32>) -> Vec<f32> {
    let pos = body.positions();
    let mut out = Vec::with_capacity(pos.len() * 2);
    for p in &pos {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

// ---- Soft Body Demo ----

/// A grid body thrown across a 512x512 frame.
///
/// The page drives it from `requestAnimationFrame`: `step`, then `render`,
/// then wraps `pixels_ptr()`/`pixels_len()` of wasm memory in an `ImageData`.
/// The RGBA buffer is allocated once and rewritten every frame.
#[wasm_bindgen]
pub struct SoftBodyDemo {
    body: SoftBody<f32>,
    config: SimulationConfig<f32>,
    style: RenderStyle,
    frame: Framebuffer,
    rgba: Vec<u8>,
}

#[wasm_bindgen]
impl SoftBodyDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(cols: usize, rows: usize, spacing: f32, stiffness: f32) -> Result<SoftBodyDemo, JsValue> {
        let config = SimulationConfig::new().with_floor(HEIGHT as f32);
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut body = SoftBody::grid(
            Vec2::new(156.0, 30.0),
            GridConfig::new(cols, rows, spacing, stiffness),
        );
        if body.particle_count() > 0 {
            body.set_velocity(0, Vec2::new(1200.0, 0.0))
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
        }

        Ok(SoftBodyDemo {
            body,
            style: RenderStyle::from_config(&config),
            config,
            frame: Framebuffer::new(WIDTH, HEIGHT),
            rgba: rgba_buffer(),
        })
    }

    /// Run `steps` physics frames.
    pub fn step(&mut self, steps: usize) {
        for _ in 0..steps {
            self.body.step(&self.config, &mut NoOpStepObserver);
        }
    }

    /// Clear, draw the body, and refresh the RGBA buffer.
    pub fn render(&mut self) {
        self.frame.clear();
        self.body.render(&mut self.frame, &self.style);
        write_rgba(&self.frame, &mut self.rgba);
    }

    /// Start of the RGBA buffer in wasm linear memory.
    pub fn pixels_ptr(&self) -> *const u8 {
        self.rgba.as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.rgba.len()
    }

    /// Add velocity to one particle.
    pub fn kick(&mut self, index: usize, vx: f32, vy: f32) -> Result<(), JsValue> {
        let p = self
            .body
            .try_particle_mut(index)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        p.velocity += Vec2::new(vx, vy);
        Ok(())
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        flat_positions(&self.body)
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.body.kinetic_energy()
    }

    pub fn width(&self) -> usize {
        WIDTH
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }
}

// ---- Rope Demo ----

#[wasm_bindgen]
pub struct RopeDemo {
    chain: SoftBody<f32>,
    config: SimulationConfig<f32>,
    style: RenderStyle,
    frame: Framebuffer,
    rgba: Vec<u8>,
}

#[wasm_bindgen]
impl RopeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(segments: usize) -> Self {
        let chain = SoftBody::chain(
            Vec2::new(100.0f32, 50.0),
            ChainConfig::new(segments, 12.0, 80.0),
        );
        let config = SimulationConfig::new().with_floor(HEIGHT as f32);
        RopeDemo {
            chain,
            style: RenderStyle::from_config(&config).with_point_radius(2),
            config,
            frame: Framebuffer::new(WIDTH, HEIGHT),
            rgba: rgba_buffer(),
        }
    }

    pub fn step(&mut self, steps: usize) {
        for _ in 0..steps {
            self.chain.step(&self.config, &mut NoOpStepObserver);
        }
    }

    pub fn render(&mut self) {
        self.frame.clear();
        self.chain.render(&mut self.frame, &self.style);
        write_rgba(&self.frame, &mut self.rgba);
    }

    pub fn pixels_ptr(&self) -> *const u8 {
        self.rgba.as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.rgba.len()
    }

    pub fn positions(&self) -> Vec<f32> {
        flat_positions(&self.chain)
    }

    pub fn particle_count(&self) -> usize {
        self.chain.particle_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_expansion() {
        let mut frame = Framebuffer::new(1, 1);
        frame.put_pixel(0, 0, 0x0011_2233);
        let mut out = [0u8; 4];
        write_rgba(&frame, &mut out);
        assert_eq!(out, [0x11, 0x22, 0x33, 0xff]);
    }

    #[test]
    fn render_reuses_pixel_buffer() {
        let mut demo = RopeDemo::new(8);
        let ptr = demo.pixels_ptr();
        assert_eq!(demo.pixels_len(), WIDTH * HEIGHT * 4);

        demo.render();
        demo.step(10);
        demo.render();

        assert_eq!(demo.pixels_ptr(), ptr);
        assert_eq!(demo.pixels_len(), WIDTH * HEIGHT * 4);
        // Something was drawn, and every alpha byte is opaque.
        assert!(demo.rgba.chunks_exact(4).any(|px| px[..3] != [0, 0, 0]));
        assert!(demo.rgba.chunks_exact(4).all(|px| px[3] == 0xff));
    }
}
