//! COCO to YOLO format converter
//!
//! This library converts COCO bounding-box annotations to YOLO normalized
//! label files and partitions the dataset into named splits with per-split
//! image-path manifests.

pub mod coco;
pub mod config;
pub mod conversion;
pub mod dataset;
pub mod io;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use coco::{Category, CocoAnnotation, CocoFile, CocoImage};
pub use config::Args;
pub use conversion::{coco_to_yolo, convert_annotations, format_label_line};
pub use dataset::{process_dataset, split_records};
pub use io::{load_dataset, write_splits};
pub use types::{ImageRecord, SplitSpec, SplitSummary, YoloAnnotation};
