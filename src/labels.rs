//! Dataset-level conversion pipeline.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use crate::coco::{self, Image};
use crate::config::Args;
use crate::conversion::{convert_bbox, derive_stem, format_label_line};
use crate::error::{ConvertError, ConvertResult};
use crate::io::{append_label_line, ensure_output_dir, label_file_path};
use crate::types::ConvertStats;

/// Convert the aggregate document named by `args` into per-image label files.
///
/// Annotations are processed strictly in document order, so every label file
/// receives its lines in the order the annotations appear in the input.
/// Existing label files are appended to, never truncated.
pub fn convert_dataset(args: &Args) -> ConvertResult<ConvertStats> {
    ensure_output_dir(&args.output_dir)?;

    let dataset = coco::load_dataset(&args.input)?;
    info!(
        "Loaded {} image records and {} annotations from {}",
        dataset.images.len(),
        dataset.annotations.len(),
        args.input.display()
    );

    // Index images by id before touching any annotation; duplicate ids
    // resolve to the last record.
    let image_index: HashMap<i64, &Image> = dataset
        .images
        .iter()
        .map(|image| (image.id, image))
        .collect();

    let mut stats = ConvertStats::new();
    stats.images_indexed = image_index.len();
    stats.annotations_total = dataset.annotations.len();

    let mut files_touched: HashSet<PathBuf> = HashSet::new();
    let pb = annotation_progress_bar(dataset.annotations.len() as u64);

    for annotation in &dataset.annotations {
        let image = match image_index.get(&annotation.image_id) {
            Some(image) => *image,
            None => {
                if args.skip_invalid {
                    warn!(
                        "Skipping annotation for unknown image id {}",
                        annotation.image_id
                    );
                    stats.skipped_missing_image += 1;
                    pb.inc(1);
                    continue;
                }
                return Err(ConvertError::MissingImage {
                    image_id: annotation.image_id,
                });
            }
        };

        if image.width == 0 || image.height == 0 {
            if args.skip_invalid {
                warn!(
                    "Skipping annotation for zero-sized image {} ({})",
                    image.id, image.file_name
                );
                stats.skipped_degenerate += 1;
                pb.inc(1);
                continue;
            }
            return Err(ConvertError::DegenerateImage {
                image_id: image.id,
                file_name: image.file_name.clone(),
            });
        }

        let yolo_bbox = convert_bbox((image.width, image.height), annotation.bbox);
        let line = format_label_line(annotation.category_id, yolo_bbox);
        let stem = derive_stem(&image.file_name, args.stem_mode);
        let path = label_file_path(&args.output_dir, stem);
        append_label_line(&path, &line)?;

        stats.lines_written += 1;
        files_touched.insert(path);
        pb.inc(1);
    }

    pb.finish_with_message("Annotation processing complete");

    stats.files_written = files_touched.len();
    stats.print_summary();
    Ok(stats)
}

/// Create a progress bar for the annotation pass
fn annotation_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [Annotations] [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .progress_chars("#>-"),
    );
    pb
}
