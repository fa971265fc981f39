//! COCO to YOLO annotation converter
//!
//! This library converts COCO-style aggregate detection annotations into the
//! per-image YOLO label layout expected by object detection training
//! pipelines.

pub mod coco;
pub mod config;
pub mod conversion;
pub mod error;
pub mod io;
pub mod labels;
pub mod types;

// Re-export commonly used types and functions
pub use config::{Args, StemMode};
pub use error::{ConvertError, ConvertResult};
pub use labels::convert_dataset;
pub use types::ConvertStats;
