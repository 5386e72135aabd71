// src/utils.rs
use crate::config::Canvas;
use ndarray::{Array1, Array2};
use rand::Rng;

/// CSS `hsl()` colour string with the hue wrapped into 0..360
pub fn hsl(hue: u32, saturation: u8, lightness: u8) -> String {
    format!("hsl({}, {}%, {}%)", hue % 360, saturation, lightness)
}

/// Uniform sample in `[0, max)`, or 0 when the bound is not positive.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
    if max > 0.0 {
        rng.gen::<f64>() * max
    } else {
        0.0
    }
}

/// Sample `n` points uniformly over the canvas.
///
/// Row `i` is one point, column 0 holds x and column 1 holds y.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, n: usize, canvas: &Canvas) -> Array2<f64> {
    Array2::from_shape_fn((n, 2), |(_, axis)| uniform(rng, canvas.extent(axis)))
}

/// Positions of evenly spaced lines starting at 0
pub fn grid_offsets(count: usize, spacing: f64) -> Array1<f64> {
    Array1::from_shape_fn(count, |i| i as f64 * spacing)
}
