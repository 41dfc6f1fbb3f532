use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for one split, labeled with the split name
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}}",
                label
            ))
            .progress_chars("#>-"),
    );
    pb
}
