use crate::coco::{CocoAnnotation, CocoImage};
use crate::types::YoloAnnotation;

/// Convert a COCO bounding box to YOLO's normalized representation.
///
/// The input bbox is `[x_min, y_min, width, height]` in pixel units; the
/// result is `(x_center, y_center, width, height)` with x-values divided by
/// the image width and y-values by the image height. Pure function, no
/// validation: degenerate image dimensions or out-of-range boxes produce
/// out-of-range output.
pub fn coco_to_yolo(bbox: [f64; 4], image_width: u32, image_height: u32) -> (f64, f64, f64, f64) {
    let [x_min, y_min, box_width, box_height] = bbox;
    let x_center = x_min + box_width / 2.0;
    let y_center = y_min + box_height / 2.0;

    (
        x_center / image_width as f64,
        y_center / image_height as f64,
        box_width / image_width as f64,
        box_height / image_height as f64,
    )
}

/// Convert all raw annotations of one image, preserving input order.
pub fn convert_annotations(image: &CocoImage, annotations: &[CocoAnnotation]) -> Vec<YoloAnnotation> {
    annotations
        .iter()
        .map(|annotation| {
            let (x_center, y_center, width, height) =
                coco_to_yolo(annotation.bbox, image.width, image.height);
            YoloAnnotation {
                category_id: annotation.category_id,
                x_center,
                y_center,
                width,
                height,
            }
        })
        .collect()
}

/// Format one annotation as a YOLO label line (no trailing newline).
pub fn format_label_line(annotation: &YoloAnnotation) -> String {
    format!(
        "{} {:.6} {:.6} {:.6} {:.6}",
        annotation.category_id,
        annotation.x_center,
        annotation.y_center,
        annotation.width,
        annotation.height
    )
}
