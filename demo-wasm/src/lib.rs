use tatter::{Bounds, Cloth, ClothConfig, GridConfig, NoOpStepObserver};
use wasm_bindgen::prelude::*;

const SIDE: usize = 30;
const SPACING: f32 = 15.0;
/// Left corner, middle and right corner of the top row.
const PINS: [usize; 3] = [0, 14, 29];

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    cloth: Cloth<f32>,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        let grid = GridConfig::centered(width, height, SIDE, SPACING).with_pins(&PINS);
        ClothDemo {
            cloth: Cloth::with_config(grid, Bounds::new(width, height), ClothConfig::new()),
        }
    }

    /// Advance one animation frame.
    pub fn update(&mut self) {
        self.cloth.advance(&mut NoOpStepObserver);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.cloth.config_mut().gravity = gravity;
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.cloth.config_mut().friction = friction;
    }

    /// The "speed" slider: substeps per frame plus one.
    pub fn set_accuracy(&mut self, accuracy: usize) {
        self.cloth.config_mut().accuracy = accuracy;
    }

    /// Recolour the cloth. Colours are baked in at weave time, so this
    /// rebuilds the lattice (and re-pins it) before the next frame.
    pub fn set_color_range(&mut self, color_range: f32) {
        self.cloth.grid_config_mut().color_range = color_range;
        self.cloth.request_reset();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.cloth.set_bounds(Bounds::new(width, height));
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.cloth.node_count() * 2);
        for n in self.cloth.nodes() {
            out.push(n.pos.x);
            out.push(n.pos.y);
        }
        out
    }

    /// Node hues in degrees, for `hsla(hue, 100%, 50%, 1)` fills.
    pub fn hues(&self) -> Vec<f32> {
        self.cloth.nodes().iter().map(|n| n.hue).collect()
    }

    /// Returns flat [ax, ay, bx, by, ...] for every intact stick
    pub fn segments(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.cloth.stick_count() * 4);
        for (a, b) in self.cloth.segments() {
            out.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
        out
    }

    pub fn node_count(&self) -> usize {
        self.cloth.node_count()
    }

    pub fn broken_count(&self) -> usize {
        self.cloth.broken_count()
    }
}
