//! Pure per-annotation transforms: bbox normalization, label-line
//! formatting, and label-file stem derivation.

use crate::config::StemMode;

/// Convert a COCO bbox to the YOLO normalized center format.
///
/// `size` is the image (width, height) in pixels; `bbox` is `[x, y, width,
/// height]` with the top-left corner in absolute pixel coordinates. Returns
/// `(x_center, y_center, width, height)`, each scaled by the reciprocal of
/// the matching image dimension.
///
/// No clamping and no zero guards: a box extending past the image bounds
/// yields components outside [0, 1], and a zero-sized image yields infinite
/// or NaN components. Callers decide what to do with degenerate inputs.
pub fn convert_bbox(size: (u32, u32), bbox: [f64; 4]) -> (f64, f64, f64, f64) {
    let [x, y, width, height] = bbox;
    let dw = 1.0 / size.0 as f64;
    let dh = 1.0 / size.1 as f64;
    let x_center = (x + width / 2.0) * dw;
    let y_center = (y + height / 2.0) * dh;
    (x_center, y_center, width * dw, height * dh)
}

/// Format one label line: class id followed by the four normalized values.
///
/// Values are written in their natural decimal form, not a fixed precision,
/// so `0.25` stays `0.25`.
pub fn format_label_line(category_id: i64, bbox: (f64, f64, f64, f64)) -> String {
    let (x_center, y_center, width, height) = bbox;
    format!(
        "{} {} {} {} {}\n",
        category_id, x_center, y_center, width, height
    )
}

/// Derive the label-file stem from an image file name.
pub fn derive_stem(file_name: &str, mode: StemMode) -> &str {
    let cut = match mode {
        StemMode::Extension => file_name.rfind('.'),
        StemMode::FirstDot => file_name.find('.'),
    };
    match cut {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}
