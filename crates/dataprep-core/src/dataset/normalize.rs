//! In-place dataset normalization
//!
//! Every image is resized to a fixed size, its grey matte (if any) is turned
//! white, and black/white are swapped so the background becomes zero. The
//! result is written over the source file.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};

use super::report::{BatchKind, BatchReport};
use super::{class_label, list_class_dirs, list_class_images};
use crate::config::DatasetConfig;
use crate::decoders::decode_with_format;
use crate::exporters::overwrite_image;
use crate::models::Color;
use crate::transforms::{invert_colors, recolor_exact};
use crate::verbose_println;

/// Per-image normalization parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeSettings {
    pub width: u32,
    pub height: u32,
    /// Exact shade treated as background and turned white before inversion
    pub grey_background: Color,
}

impl Default for NormalizeSettings {
    fn default() -> Self {
        Self::from(&DatasetConfig::default())
    }
}

impl From<&DatasetConfig> for NormalizeSettings {
    fn from(config: &DatasetConfig) -> Self {
        Self {
            width: config.target_width,
            height: config.target_height,
            grey_background: config.grey_background,
        }
    }
}

/// Resize, whiten the grey matte, and invert one image.
///
/// Output is always exactly `width x height` single-channel luma, whatever
/// the input size or aspect ratio.
pub fn normalize_image(image: &DynamicImage, settings: &NormalizeSettings) -> GrayImage {
    let resized = image.resize_exact(settings.width, settings.height, FilterType::Nearest);
    let whitened = recolor_exact(&resized, settings.grey_background, Color::WHITE);
    invert_colors(&DynamicImage::ImageLuma8(whitened))
}

/// Normalize every image of the dataset at `root`, overwriting each source
/// file. **Irreversible**: no backup is kept, so run it on a copy if the
/// originals matter.
///
/// Files are rewritten in the format they were read as. Under
/// [`FailurePolicy::Abort`](crate::models::FailurePolicy::Abort) the first
/// failing file ends the run with its error; under `Continue` failures are
/// collected in the report. A missing or unreadable root is always an error.
/// `config` is sanitized before use, as loaded configs are.
pub fn normalize_dataset_in_place(
    root: &Path,
    config: &DatasetConfig,
) -> Result<BatchReport, String> {
    let config = &config.clone().sanitized();
    let settings = NormalizeSettings::from(config);
    let policy = config.failure_policy;
    let mut report = BatchReport::new(BatchKind::Normalize, root);

    verbose_println!(
        "[dataprep] Normalizing {} to {}x{} (grey background {})",
        root.display(),
        settings.width,
        settings.height,
        settings.grey_background
    );

    for class_dir in list_class_dirs(root)? {
        report.begin_class(class_label(&class_dir));

        let listing = list_class_images(&class_dir, config);
        let images = match report.check(policy, &class_dir, listing)? {
            Some(images) => images,
            None => continue,
        };

        for path in images {
            report.record_image();
            if report.images_found % config.progress_interval == 0 && !config.silent {
                println!("Processed {} images", report.images_found);
            }

            verbose_println!("  {}", path.display());
            let result = normalize_file(&path, &settings);
            if report.check(policy, &path, result)?.is_some() {
                report.record_written(path);
            }
        }
    }

    if !config.silent {
        println!(
            "Finished processing images, images found = {}",
            report.images_found
        );
    }

    Ok(report)
}

/// Normalize one file in place.
fn normalize_file(path: &Path, settings: &NormalizeSettings) -> Result<(), String> {
    let decoded = decode_with_format(path)?;
    let normalized = normalize_image(&decoded.image, settings);
    overwrite_image(&DynamicImage::ImageLuma8(normalized), path, decoded.format)
}
