use serde::{Deserialize, Serialize};

// One annotation converted to YOLO form. All four geometric values are
// normalized to [0,1] for valid input geometry; no bounds checking is done,
// so out-of-range boxes pass through unflagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoloAnnotation {
    pub category_id: i64,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

// One image joined with its converted annotations. Immutable after loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: i64,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub annotations: Vec<YoloAnnotation>,
}

/// A named split and its nominal fraction of the dataset.
///
/// Splits travel as an ordered `Vec<SplitSpec>`; the last split absorbs
/// whatever the preceding ratios leave over, so the ratios are not required
/// to sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSpec {
    pub name: String,
    pub ratio: f64,
}

impl SplitSpec {
    pub fn new(name: impl Into<String>, ratio: f64) -> Self {
        Self {
            name: name.into(),
            ratio,
        }
    }
}

// Per-split counts reported after writing, in split order.
#[derive(Debug, Default, Clone)]
pub struct SplitSummary {
    pub counts: Vec<(String, usize)>,
}

impl SplitSummary {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn print_summary(&self, image_nums: u64, categories: &[crate::coco::Category]) {
        log::info!("total of splitting data:");
        for (name, count) in &self.counts {
            log::info!("    {}: {}", name, count);
        }
        log::info!("total of images: {}", image_nums);
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        log::info!("categories: {:?}", names);
    }
}
