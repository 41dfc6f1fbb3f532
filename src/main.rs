use clap::Parser;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use coco2yolo::{process_dataset, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let root = PathBuf::from(&args.source);
    if !root.exists() {
        error!(
            "The specified source directory does not exist: {}",
            args.source
        );
        std::process::exit(1);
    }

    let specs = match args.split_specs() {
        Ok(specs) => specs,
        Err(e) => {
            error!("Invalid --split argument: {}", e);
            std::process::exit(1);
        }
    };

    info!("images root path: {}", args.source);
    if let Some(dataset) = &args.dataset {
        info!("dataset name: {}", dataset);
    }
    info!(
        "split info: {:?}",
        specs
            .iter()
            .map(|spec| (spec.name.as_str(), spec.ratio))
            .collect::<Vec<_>>()
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Err(e) = process_dataset(&root, &args.coco, &specs, &mut rng) {
        error!("Failed to process dataset: {}", e);
        std::process::exit(1);
    }

    info!("Conversion process completed successfully.");
}
