//! Error taxonomy for the conversion pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot open annotation document {}: {source}", path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("invalid annotation document {}: {source}", path.display())]
    ParseInput {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("annotation references unknown image id {image_id}")]
    MissingImage { image_id: i64 },

    #[error("image {image_id} ({file_name}) has zero width or height")]
    DegenerateImage { image_id: i64, file_name: String },

    #[error("cannot create output directory {}: {source}", path.display())]
    CreateOutputDir { path: PathBuf, source: io::Error },

    #[error("cannot append to label file {}: {source}", path.display())]
    WriteLabel { path: PathBuf, source: io::Error },
}

/// Result type for conversion operations.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
