//! Error types for rendering and output.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

/// Failures that abort a generation run.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A canvas could not be allocated at the requested size.
    #[error("cannot allocate a {width}x{height} canvas")]
    InvalidCanvas { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),

    /// The output directory could not be created.
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
