// src/pattern.rs
use crate::config::{Canvas, FractalParams, MAX_FRACTAL_DEPTH};
use crate::error::ArtError;
use crate::utils::*;
use ndarray::{s, Axis};
use rand::Rng;
use std::f64::consts::FRAC_PI_4;

/// Angle offsets of the three children spawned by every branch
const BRANCH_OFFSETS: [f64; 3] = [-FRAC_PI_4, 0.0, FRAC_PI_4];

/// One straight segment of the fractal, stored as a start point plus offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub depth: u32,
}

/// Random cubic Bézier paths spread over the canvas
pub fn generate_bezier_curves<R: Rng + ?Sized>(
    rng: &mut R,
    canvas: &Canvas,
    count: usize,
    segments: usize,
) -> String {
    (0..count)
        .map(|_| {
            // One start point followed by three control/end points per segment
            let points = random_points(rng, 1 + 3 * segments, canvas);

            let mut d = format!("M{} {}", points[[0, 0]], points[[0, 1]]);
            for seg in points.slice(s![1.., ..]).axis_chunks_iter(Axis(0), 3) {
                d.push_str(&format!(
                    "C{} {}, {} {}, {} {}",
                    seg[[0, 0]],
                    seg[[0, 1]],
                    seg[[1, 0]],
                    seg[[1, 1]],
                    seg[[2, 0]],
                    seg[[2, 1]]
                ));
            }
            format!(r#"<path d="{}" stroke="url(#grad1)"/>"#, d)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Crossing horizontal and vertical lines with hue cycling by index.
///
/// Deterministic: identical arguments always give an identical string.
pub fn generate_grid(canvas: &Canvas, count: usize, spacing: f64) -> String {
    let offsets = grid_offsets(count, spacing);
    let mut grid = Vec::with_capacity(count * 2);

    for (i, &offset) in offsets.iter().enumerate() {
        let hue = i as u32;
        grid.push(format!(
            r#"<path d="M0 {o} L{w} {o}" stroke="{c}"/>"#,
            o = offset,
            w = canvas.width,
            c = hsl(hue, 80, 50)
        ));
        grid.push(format!(
            r#"<path d="M{o} 0 L{o} {h}" stroke="{c}"/>"#,
            o = offset,
            h = canvas.height,
            c = hsl(hue + 180, 80, 50)
        ));
    }

    grid.join("\n")
}

/// Unfilled circles stroked with the radial gradient, later blurred as a group
pub fn generate_blur<R: Rng + ?Sized>(
    rng: &mut R,
    canvas: &Canvas,
    count: usize,
    max_radius: f64,
    max_stroke: f64,
) -> String {
    let centers = random_points(rng, count, canvas);

    centers
        .outer_iter()
        .map(|center| {
            let r = uniform(rng, max_radius);
            let stroke_width = uniform(rng, max_stroke);
            format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="url(#grad2)" stroke-width="{}"/>"#,
                center[0], center[1], r, stroke_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Number of segments a fractal of the given depth produces: (3^(d+1) - 1) / 2
pub fn branch_count(max_depth: u32) -> usize {
    (3usize.pow(max_depth + 1) - 1) / 2
}

/// Walk the branch tree depth-first and collect every segment.
///
/// Each branch spawns children at -45°, 0° and +45° from its own heading,
/// scaled by `decay`, until `max_depth` is exceeded.
pub fn fractal_branches(params: &FractalParams) -> Result<Vec<Branch>, ArtError> {
    if params.max_depth > MAX_FRACTAL_DEPTH {
        return Err(ArtError::DepthTooLarge {
            depth: params.max_depth,
            max: MAX_FRACTAL_DEPTH,
        });
    }

    let mut branches = Vec::with_capacity(branch_count(params.max_depth));
    let (x, y) = params.origin;
    draw_branch(&mut branches, params, x, y, params.size, params.angle, 0);
    Ok(branches)
}

fn draw_branch(
    branches: &mut Vec<Branch>,
    params: &FractalParams,
    x: f64,
    y: f64,
    size: f64,
    angle: f64,
    depth: u32,
) {
    if depth > params.max_depth {
        return;
    }

    let dx = size * angle.cos();
    let dy = size * angle.sin();
    branches.push(Branch { x, y, dx, dy, depth });

    for offset in BRANCH_OFFSETS {
        draw_branch(
            branches,
            params,
            x + dx,
            y + dy,
            size * params.decay,
            angle + offset,
            depth + 1,
        );
    }
}

pub fn render_branches(branches: &[Branch]) -> String {
    branches
        .iter()
        .map(|b| {
            format!(
                r#"<path d="M{} {} l{} {}" stroke="{}"/>"#,
                b.x,
                b.y,
                b.dx,
                b.dy,
                hsl(b.depth * 40, 70, 50)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn generate_fractal(params: &FractalParams) -> Result<String, ArtError> {
    let branches = fractal_branches(params)?;
    log::debug!("fractal: {} branches", branches.len());
    Ok(render_branches(&branches))
}
