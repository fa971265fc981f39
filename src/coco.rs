//! COCO-style aggregate document model
//!
//! Only the fields the converter consumes are modeled here; everything else
//! a COCO export may carry (info, licenses, categories, per-annotation areas
//! and segmentation) is ignored during deserialization.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};

/// COCO image information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// COCO annotation information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    pub image_id: i64,
    pub category_id: i64,
    pub bbox: [f64; 4], // [x, y, width, height]
}

/// Aggregate annotation document: every image record plus every annotation
/// record for a dataset split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
}

/// Read and parse the aggregate document at `path`.
///
/// Parses directly from a buffered file stream instead of loading the raw
/// text into memory first. A missing or unreadable file and a document that
/// lacks the `images`/`annotations` shape both fail here, before any output
/// is produced.
pub fn load_dataset(path: &Path) -> ConvertResult<Dataset> {
    let file = File::open(path).map_err(|source| ConvertError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ConvertError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}
