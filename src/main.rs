mod config;
mod document;
mod error;
mod pattern;
mod utils;

use config::ArtConfig;
use document::{assemble_document, write_document, Fragments};
use error::ArtError;

fn main() -> Result<(), ArtError> {
    env_logger::init();

    let config = ArtConfig::default();
    let mut rng = rand::thread_rng();

    let fragments = Fragments::generate(&config, &mut rng)?;
    let svg = assemble_document(&config.canvas, &fragments);

    log::info!("Saving {}...", config.output_path.display());
    write_document(&config.output_path, &svg)?;
    println!("Generated {}", config.output_path.display());
    Ok(())
}
