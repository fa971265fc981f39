// Struct to hold conversion statistics
#[derive(Debug, Default, Clone)]
pub struct ConvertStats {
    pub images_indexed: usize,
    pub annotations_total: usize,
    pub lines_written: usize,
    pub files_written: usize,
    pub skipped_missing_image: usize,
    pub skipped_degenerate: usize,
}

impl ConvertStats {
    pub fn new() -> Self {
        Self {
            images_indexed: 0,
            annotations_total: 0,
            lines_written: 0,
            files_written: 0,
            skipped_missing_image: 0,
            skipped_degenerate: 0,
        }
    }

    pub fn print_summary(&self) {
        log::info!("=== Conversion Summary ===");
        log::info!("Images indexed: {}", self.images_indexed);
        log::info!("Annotations processed: {}", self.annotations_total);
        log::info!("Label lines written: {}", self.lines_written);
        log::info!("Label files touched: {}", self.files_written);

        let total_skipped = self.skipped_missing_image + self.skipped_degenerate;
        if total_skipped > 0 {
            log::warn!(
                "Total skipped annotations: {} (unknown image id: {}, zero-sized image: {})",
                total_skipped,
                self.skipped_missing_image,
                self.skipped_degenerate
            );
        }
    }
}
