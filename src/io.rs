use log::info;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::coco::{Category, CocoAnnotation, CocoFile};
use crate::conversion::{convert_annotations, format_label_line};
use crate::types::{ImageRecord, SplitSummary};
use crate::utils::create_progress_bar;

/// Read the COCO annotation file and join images with their annotations.
///
/// The annotation document is expected at `<root>/Annotations/<coco_file>`.
/// Annotations are grouped by image id first, then every image in the file
/// becomes one `ImageRecord` in input order; an image referenced by no
/// annotation gets an empty annotation list.
pub fn load_dataset(
    root: &Path,
    coco_file: &str,
) -> Result<(Vec<ImageRecord>, u64, Vec<Category>), Box<dyn std::error::Error>> {
    let annotation_path = root.join("Annotations").join(coco_file);

    let file = File::open(&annotation_path)
        .map_err(|e| format!("Failed to open {}: {}", annotation_path.display(), e))?;
    // Parse directly from the file stream instead of buffering the whole
    // document in memory first.
    let data: CocoFile = serde_json::from_reader(file)
        .map_err(|e| format!("Failed to parse {}: {}", annotation_path.display(), e))?;

    let mut annotations_by_image: HashMap<i64, Vec<CocoAnnotation>> = HashMap::new();
    for annotation in data.annotations {
        annotations_by_image
            .entry(annotation.image_id)
            .or_default()
            .push(annotation);
    }

    let records = data
        .images
        .iter()
        .map(|image| {
            let annotations = annotations_by_image
                .get(&image.id)
                .map(|raw| convert_annotations(image, raw))
                .unwrap_or_default();
            ImageRecord {
                id: image.id,
                file_name: image.file_name.clone(),
                width: image.width,
                height: image.height,
                annotations,
            }
        })
        .collect();

    Ok((records, data.image_nums, data.categories))
}

/// Write the path manifests and per-image label files for every split.
///
/// Creates `<root>/Links/` and `<root>/Labels/` if needed. Each split gets a
/// truncating rewrite of `<root>/Links/<split>.txt` with one absolute image
/// path per line; each image gets `<root>/Labels/<stem>.txt` with one YOLO
/// line per annotation. Image files themselves are never copied or moved.
pub fn write_splits(
    root: &Path,
    splits: &[(String, Vec<ImageRecord>)],
) -> std::io::Result<SplitSummary> {
    let links_dir = root.join("Links");
    let labels_dir = root.join("Labels");
    fs::create_dir_all(&links_dir)?;
    fs::create_dir_all(&labels_dir)?;

    let images_dir = root.join("Images");

    let mut summary = SplitSummary::default();
    for (name, records) in splits {
        let manifest_path = links_dir.join(name).with_extension("txt");
        let mut manifest = BufWriter::new(File::create(&manifest_path)?);

        let pb = create_progress_bar(records.len() as u64, name);
        for record in records {
            writeln!(manifest, "{}", images_dir.join(&record.file_name).display())?;
            write_label_file(&labels_dir, record)?;
            pb.inc(1);
        }
        manifest.flush()?;
        pb.finish();

        info!("path [ {} ]: [ {} ]", name, manifest_path.display());
        summary.counts.push((name.clone(), records.len()));
    }

    Ok(summary)
}

/// Write one image's label file, named by the sanitized filename stem
fn write_label_file(labels_dir: &Path, record: &ImageRecord) -> std::io::Result<()> {
    let stem = Path::new(&record.file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(record.file_name.as_str());
    let label_path = labels_dir
        .join(sanitize_filename::sanitize(stem))
        .with_extension("txt");

    let mut writer = BufWriter::new(File::create(&label_path)?);
    for annotation in &record.annotations {
        writeln!(writer, "{}", format_label_line(annotation))?;
    }
    writer.flush()
}
