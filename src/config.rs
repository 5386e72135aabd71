// src/config.rs
use std::path::PathBuf;

/// Deepest fractal recursion accepted; 3^(d+1) growth keeps this small.
pub const MAX_FRACTAL_DEPTH: u32 = 8;

/// Coordinate space used to bound every random placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Canvas { width, height }
    }

    /// Extent along an axis, 0 for x and anything else for y.
    pub fn extent(&self, axis: usize) -> f64 {
        if axis == 0 {
            self.width
        } else {
            self.height
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(480.0, 480.0)
    }
}

/// Starting state of the recursive branch pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    pub origin: (f64, f64),
    pub size: f64,
    /// Radians
    pub angle: f64,
    pub decay: f64,
    pub max_depth: u32,
}

impl Default for FractalParams {
    fn default() -> Self {
        FractalParams {
            origin: (0.0, 0.0),
            size: 100.0,
            angle: 0.0,
            decay: 0.8,
            max_depth: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtConfig {
    pub canvas: Canvas,
    pub curve_count: usize,
    pub curve_segments: usize,
    pub grid_count: usize,
    pub grid_spacing: f64,
    pub blur_count: usize,
    pub blur_max_radius: f64,
    pub blur_max_stroke: f64,
    pub fractal: FractalParams,
    pub output_path: PathBuf,
}

impl Default for ArtConfig {
    fn default() -> Self {
        ArtConfig {
            canvas: Canvas::default(),
            curve_count: 40,
            curve_segments: 20,
            grid_count: 80,
            grid_spacing: 4.0,
            blur_count: 80,
            blur_max_radius: 200.0,
            blur_max_stroke: 3.0,
            fractal: FractalParams::default(),
            output_path: PathBuf::from("complicated.svg"),
        }
    }
}
