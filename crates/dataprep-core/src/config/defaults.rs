//! Default dataset parameters and their sanitization.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{Color, FailurePolicy, RotationFilter};

/// Largest rotation magnitude accepted from configuration, in degrees.
const MAX_ANGLE_LIMIT: i32 = 180;

/// Parameters shared by the normalization and augmentation drivers.
///
/// Every field has a default matching the layout the tool was built for:
/// an `Images/` training folder, 50x50 output, a 127-grey matte, and four
/// rotated copies per image within ±15 degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Dataset root used when no root is given on the command line
    pub train_folder: PathBuf,
    /// Normalized output width in pixels
    pub target_width: u32,
    /// Normalized output height in pixels
    pub target_height: u32,
    /// Exact background shade turned white before inversion
    pub grey_background: Color,
    /// Rotation angles are drawn from `[-max_angle, max_angle)`
    pub max_angle: i32,
    /// Rotated copies written per source image
    pub copies: u32,
    /// Prefix of augmented file names (`<prefix>000123.bmp`)
    pub filename_prefix: String,
    pub rotation_filter: RotationFilter,
    /// File names never treated as images (filesystem metadata artifacts)
    pub reserved_names: Vec<String>,
    /// Print a progress notice every N normalized images
    pub progress_interval: usize,
    pub failure_policy: FailurePolicy,
    /// Seed for the augmentation RNG; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Suppress progress and completion notices
    pub silent: bool,
}

impl DatasetConfig {
    pub(crate) fn sanitize(&mut self) {
        self.target_width = self.target_width.max(1);
        self.target_height = self.target_height.max(1);
        self.max_angle = self.max_angle.clamp(0, MAX_ANGLE_LIMIT);
        self.progress_interval = self.progress_interval.max(1);
        if self.filename_prefix.contains('/') || self.filename_prefix.contains('\\') {
            self.filename_prefix = default_prefix();
        }
    }

    /// Return a sanitized copy.
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    /// True when `name` is one of the reserved (non-image) file names.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_names.iter().any(|reserved| reserved == name)
    }
}

fn default_prefix() -> String {
    "bcc".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            train_folder: PathBuf::from("Images"),
            target_width: 50,
            target_height: 50,
            grey_background: Color::MID_GREY,
            max_angle: 15,
            copies: 4,
            filename_prefix: default_prefix(),
            rotation_filter: RotationFilter::Nearest,
            reserved_names: vec![".DS_Store".to_string()],
            progress_interval: 1000,
            failure_policy: FailurePolicy::Abort,
            seed: None,
            silent: false,
        }
    }
}
