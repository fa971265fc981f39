use clap::Parser;

use log::{error, info};

use coco2yolo::{convert_dataset, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if !args.input.exists() {
        error!(
            "The specified input document does not exist: {}",
            args.input.display()
        );
        std::process::exit(1);
    }

    info!("Starting the conversion process...");

    match convert_dataset(&args) {
        Ok(stats) => {
            info!(
                "Conversion complete. Wrote {} label lines across {} label files. YOLO label files are in: {}",
                stats.lines_written,
                stats.files_written,
                args.output_dir.display()
            );
        }
        Err(e) => {
            error!("Failed to convert dataset: {}", e);
            std::process::exit(1);
        }
    }
}
