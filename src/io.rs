//! Output-side file handling for label files.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};

/// Create the output directory (and any missing parents) if absent.
///
/// An existing directory is left untouched, label files included.
pub fn ensure_output_dir(path: &Path) -> ConvertResult<()> {
    fs::create_dir_all(path).map_err(|source| ConvertError::CreateOutputDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the label-file path for a stem inside the output directory.
///
/// The stem is sanitized and `.txt` is appended to it rather than swapped in,
/// so a stem like `photo.v2` maps to `photo.v2.txt`.
pub fn label_file_path(output_dir: &Path, stem: &str) -> PathBuf {
    let mut name = sanitize_filename::sanitize(stem);
    name.push_str(".txt");
    output_dir.join(name)
}

/// Append one label line to the file at `path`, creating it if needed.
///
/// The file is opened in append mode every time, so repeated runs over the
/// same output directory accumulate lines instead of replacing them.
pub fn append_label_line(path: &Path, line: &str) -> ConvertResult<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| ConvertError::WriteLabel {
            path: path.to_path_buf(),
            source,
        })?;
    file.write_all(line.as_bytes())
        .map_err(|source| ConvertError::WriteLabel {
            path: path.to_path_buf(),
            source,
        })
}
