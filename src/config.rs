use clap::{ArgAction, Parser};
use std::str::FromStr;

use crate::types::SplitSpec;

/// Command-line arguments parser for converting COCO annotations to YOLO format.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Root directory of the dataset, containing Annotations/ and Images/
    #[arg(short = 's', long = "source")]
    pub source: String,

    /// COCO annotation filename, resolved under <source>/Annotations/
    #[arg(long = "coco")]
    pub coco: String,

    /// Name of the dataset (accepted for compatibility, unused downstream)
    #[arg(long = "dataset")]
    pub dataset: Option<String>,

    /// Named split and its rate, e.g. `--split train 0.7` (repeatable; order is preserved)
    #[arg(long = "split", num_args = 2, value_names = ["NAME", "RATE"], action = ArgAction::Append)]
    pub split: Vec<String>,

    /// Seed for random shuffling; omit for a fresh shuffle every run
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

impl Args {
    /// Extract the ordered list of split specs from the repeated --split pairs
    pub fn split_specs(&self) -> Result<Vec<SplitSpec>, String> {
        self.split
            .chunks(2)
            .map(|pair| {
                let name = pair[0].clone();
                let rate = pair
                    .get(1)
                    .ok_or_else(|| format!("--split {} is missing its rate", name))?;
                Ok(SplitSpec::new(name, validate_rate(rate)?))
            })
            .collect()
    }
}

// Validate that the rate is a fraction in (0.0, 1.0]
fn validate_rate(s: &str) -> Result<f64, String> {
    match f64::from_str(s) {
        Ok(val) if val > 0.0 && val <= 1.0 => Ok(val),
        _ => Err(format!(
            "RATE must be greater than 0.0 and at most 1.0, got '{}'",
            s
        )),
    }
}
