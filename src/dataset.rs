use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;

use crate::io::{load_dataset, write_splits};
use crate::types::{ImageRecord, SplitSpec};

/// Shuffle the records and partition them into named splits.
///
/// Every split except the last receives `floor(total * ratio)` consecutive
/// records from the shuffled sequence; the last split receives everything
/// left over, whatever its nominal ratio says. Ratios summing to less than 1
/// therefore inflate the last split, and a ratio small enough to truncate to
/// zero yields an empty split. An empty spec list yields no splits at all.
///
/// The random source is injected so callers can pass a seeded rng for
/// reproducible partitions.
pub fn split_records<R: Rng>(
    mut records: Vec<ImageRecord>,
    specs: &[SplitSpec],
    rng: &mut R,
) -> Vec<(String, Vec<ImageRecord>)> {
    let Some((last, head)) = specs.split_last() else {
        return Vec::new();
    };

    records.shuffle(rng);

    let total = records.len();
    let mut splits = Vec::with_capacity(specs.len());
    for spec in head {
        let count = (total as f64 * spec.ratio).floor() as usize;
        // Oversized ratios are clamped to whatever is still unassigned
        let count = count.min(records.len());
        splits.push((spec.name.clone(), records.drain(0..count).collect()));
    }
    splits.push((last.name.clone(), records));

    splits
}

/// Run the full pipeline: load, split, write, report.
pub fn process_dataset<R: Rng>(
    root: &Path,
    coco_file: &str,
    specs: &[SplitSpec],
    rng: &mut R,
) -> Result<(), Box<dyn std::error::Error>> {
    let (records, image_nums, categories) = load_dataset(root, coco_file)?;
    info!("Read {} image records.", records.len());

    let splits = split_records(records, specs, rng);
    let summary = write_splits(root, &splits)?;

    summary.print_summary(image_nums, &categories);
    Ok(())
}
