// src/document.rs
use crate::config::{ArtConfig, Canvas};
use crate::error::ArtError;
use crate::pattern::*;
use rand::Rng;
use std::fs;
use std::path::Path;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// The four generated groups of markup, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragments {
    pub curves: String,
    pub grid: String,
    pub blur: String,
    pub fractal: String,
}

impl Fragments {
    pub fn generate<R: Rng + ?Sized>(config: &ArtConfig, rng: &mut R) -> Result<Self, ArtError> {
        let canvas = &config.canvas;

        log::info!("Generating curves...");
        let curves = generate_bezier_curves(rng, canvas, config.curve_count, config.curve_segments);

        log::info!("Generating grid...");
        let grid = generate_grid(canvas, config.grid_count, config.grid_spacing);

        log::info!("Generating blur circles...");
        let blur = generate_blur(
            rng,
            canvas,
            config.blur_count,
            config.blur_max_radius,
            config.blur_max_stroke,
        );

        log::info!("Generating fractal...");
        let fractal = generate_fractal(&config.fractal)?;

        log::debug!(
            "fragment sizes: curves={} grid={} blur={} fractal={}",
            curves.len(),
            grid.len(),
            blur.len(),
            fractal.len()
        );

        Ok(Fragments {
            curves,
            grid,
            blur,
            fractal,
        })
    }
}

/// Interpolate the fragments into the fixed filter/gradient/group template.
pub fn assemble_document(canvas: &Canvas, fragments: &Fragments) -> String {
    format!(
        r##"{decl}
<svg xmlns="http://www.w3.org/2000/svg"
     viewBox="0 0 {vw} {vh}"
     width="{w}" height="{h}">
  <filter id="noise">
    <feTurbulence type="fractalNoise" baseFrequency="0.8" numOctaves="10"/>
    <feDisplacementMap in="SourceGraphic" scale="25"/>
  </filter>

  <linearGradient id="grad1" gradientTransform="rotate(45)">
    <stop offset="0%" stop-color="#000"/>
    <stop offset="100%" stop-color="#fff"/>
  </linearGradient>

  <radialGradient id="grad2">
    <stop offset="0%" stop-color="#f00" stop-opacity="0.8"/>
    <stop offset="100%" stop-color="#00f" stop-opacity="0.2"/>
  </radialGradient>

  <g filter="url(#noise)" opacity="0.9">
    <g stroke-width="0.3" stroke-opacity="0.1">
      {curves}
    </g>

    <g transform="scale(2)" opacity="0.7">
      {grid}
    </g>

    <g filter="blur(5)">
      {blur}
    </g>

    <g transform="translate(960 540)">
      {fractal}
    </g>
  </g>

  <rect width="100%" height="100%" filter="url(#noise)" opacity="0.3"/>
</svg>"##,
        decl = XML_DECLARATION,
        vw = canvas.width / 16.0,
        vh = canvas.height / 16.0,
        w = canvas.width,
        h = canvas.height,
        curves = fragments.curves,
        grid = fragments.grid,
        blur = fragments.blur,
        fractal = fragments.fractal,
    )
}

/// Single synchronous write; no retry and no cleanup of a partial file.
pub fn write_document(path: &Path, svg: &str) -> Result<(), ArtError> {
    fs::write(path, svg).map_err(|source| ArtError::Write {
        path: path.to_path_buf(),
        source,
    })
}
