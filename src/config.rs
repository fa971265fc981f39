use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments parser for converting COCO annotations to YOLO labels.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Path to the aggregate COCO JSON document
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Directory that receives the per-image label files
    #[arg(short = 'o', long = "output_dir")]
    pub output_dir: PathBuf,

    /// How the label-file stem is derived from an image file name
    #[arg(long = "stem_mode", value_enum, default_value = "extension")]
    pub stem_mode: StemMode,

    /// Skip annotations whose image reference is missing or zero-sized
    /// instead of aborting the run
    #[arg(long = "skip_invalid")]
    pub skip_invalid: bool,
}

// Enumeration for the label-file stem derivation
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum StemMode {
    /// Strip the final extension: photo.v2.jpg becomes photo.v2
    Extension,
    /// Truncate at the first dot: photo.v2.jpg becomes photo, matching the
    /// legacy converter's output paths
    FirstDot,
}
