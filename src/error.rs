use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fractal depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: u32, max: u32 },
}
