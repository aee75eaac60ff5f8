//! Rotation augmentation
//!
//! Each source image yields a fixed number of copies rotated by random whole
//! degrees. Exposed corners are filled with the image's top-left pixel, on the
//! assumption that it shows the background. Copies are written next to the
//! sources under sequential names (`bcc000010.bmp`, `bcc000011.bmp`, ...).

use std::path::Path;

use image::DynamicImage;
use rand::Rng;

use super::report::{BatchKind, BatchReport};
use super::{class_label, list_class_dirs, list_class_images};
use crate::config::DatasetConfig;
use crate::decoders::decode_image;
use crate::exporters::{export_bmp, AUGMENTED_EXTENSION};
use crate::models::RotationFilter;
use crate::transforms::{rotate_with_rgba_fill, top_left_fill};
use crate::verbose_println;

/// Per-image augmentation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AugmentSettings {
    pub copies: u32,
    /// Angles are drawn from `[-max_angle, max_angle)` whole degrees
    pub max_angle: i32,
    pub filter: RotationFilter,
}

impl Default for AugmentSettings {
    fn default() -> Self {
        Self::from(&DatasetConfig::default())
    }
}

impl From<&DatasetConfig> for AugmentSettings {
    fn from(config: &DatasetConfig) -> Self {
        Self {
            copies: config.copies,
            max_angle: config.max_angle,
            filter: config.rotation_filter,
        }
    }
}

/// File name of the augmented image with sequence number `index`.
pub fn augmented_file_name(prefix: &str, index: u64) -> String {
    format!("{}{:06}.{}", prefix, index, AUGMENTED_EXTENSION)
}

/// Draw a rotation angle uniformly from `[-max_angle, max_angle)`.
fn sample_angle<R: Rng + ?Sized>(rng: &mut R, max_angle: i32) -> i32 {
    if max_angle <= 0 {
        return 0;
    }
    rng.gen_range(-max_angle..max_angle)
}

/// Produce `settings.copies` rotated variants of `image`, paired with the
/// angle each was rotated by.
pub fn augment_image<R: Rng + ?Sized>(
    image: &DynamicImage,
    settings: &AugmentSettings,
    rng: &mut R,
) -> Result<Vec<(i32, DynamicImage)>, String> {
    let fill = top_left_fill(image).ok_or_else(|| "Image has no pixels".to_string())?;

    (0..settings.copies)
        .map(|_| {
            let angle = sample_angle(&mut *rng, settings.max_angle);
            rotate_with_rgba_fill(image, angle as f64, fill, settings.filter)
                .map(|out| (angle, out))
        })
        .collect()
}

/// Write rotated copies of every image of the dataset at `root`.
///
/// In each class directory the sequence number starts at `prior_count` and
/// goes up by one per written file, so a class whose originals occupy
/// `0..prior_count` gets contiguous new names after them. The image list is
/// taken before anything is written; files from an earlier run are not
/// recognized and will be augmented again.
pub fn augment_dataset<R: Rng + ?Sized>(
    root: &Path,
    prior_count: u64,
    config: &DatasetConfig,
    rng: &mut R,
) -> Result<BatchReport, String> {
    let config = &config.clone().sanitized();
    let settings = AugmentSettings::from(config);
    let policy = config.failure_policy;
    let mut report = BatchReport::new(BatchKind::Augment, root);

    verbose_println!(
        "[dataprep] Augmenting {}: {} copies per image, angles in [-{}, {})",
        root.display(),
        settings.copies,
        settings.max_angle,
        settings.max_angle
    );

    for class_dir in list_class_dirs(root)? {
        report.begin_class(class_label(&class_dir));

        let listing = list_class_images(&class_dir, config);
        let images = match report.check(policy, &class_dir, listing)? {
            Some(images) => images,
            None => continue,
        };

        let mut next_index = prior_count;
        for path in images {
            report.record_image();

            let variants = decode_image(&path)
                .and_then(|image| augment_image(&image, &settings, &mut *rng));
            let variants = match report.check(policy, &path, variants)? {
                Some(variants) => variants,
                None => continue,
            };

            for (angle, rotated) in variants {
                let file_name = augmented_file_name(&config.filename_prefix, next_index);
                let output = class_dir.join(file_name);
                let saved = export_bmp(&rotated, &output);
                if report.check(policy, &output, saved)?.is_some() {
                    verbose_println!(
                        "  {} rotated {} deg -> {}",
                        path.display(),
                        angle,
                        output.display()
                    );
                    report.record_written(output);
                    next_index += 1;
                }
            }
        }

        if !config.silent {
            println!("Finished augmenting {}", class_dir.display());
        }
    }

    Ok(report)
}
