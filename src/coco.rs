//! COCO format data structures
//!
//! Serde structures for the subset of the COCO annotation schema consumed by
//! the converter. Unknown keys in the input document are ignored.

use serde::{Deserialize, Serialize};

/// COCO image metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocoImage {
    pub id: i64,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// COCO bounding-box annotation
///
/// The bbox is `[x_min, y_min, width, height]` in pixel units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocoAnnotation {
    pub image_id: i64,
    pub bbox: [f64; 4],
    pub category_id: i64,
}

/// COCO category information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// The COCO annotation document as read from `<root>/Annotations/<file>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocoFile {
    pub images: Vec<CocoImage>,
    pub annotations: Vec<CocoAnnotation>,
    pub image_nums: u64,
    pub categories: Vec<Category>,
}
