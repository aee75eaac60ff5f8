//! Dataset batch drivers
//!
//! A dataset is a root directory with one subdirectory per class label, each
//! holding that class's images:
//!
//! ```text
//! Images/
//!   cat/  0001.png 0002.png
//!   dog/  0001.png
//! ```
//!
//! Both drivers walk classes and images in lexicographic file-name order and
//! skip reserved metadata files such as `.DS_Store`.

mod augment;
mod normalize;
mod report;


pub use augment::{augment_dataset, augment_image, augmented_file_name, AugmentSettings};
pub use normalize::{normalize_dataset_in_place, normalize_image, NormalizeSettings};
pub use report::{BatchKind, BatchReport, ClassSummary, FileFailure};

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DatasetConfig;

/// List the class directories under `root`, sorted by name.
///
/// Plain files at the root are ignored.
pub fn list_class_dirs(root: &Path) -> Result<Vec<PathBuf>, String> {
    if !root.is_dir() {
        return Err(format!("Dataset root is not a directory: {}", root.display()));
    }

    let mut classes = sorted_entries(root)?;
    classes.retain(|path| path.is_dir());
    Ok(classes)
}

/// List the image files of one class directory, sorted by name.
///
/// Reserved names from `config` and nested directories are skipped.
pub fn list_class_images(class_dir: &Path, config: &DatasetConfig) -> Result<Vec<PathBuf>, String> {
    let mut images = sorted_entries(class_dir)?;
    images.retain(|path| {
        let reserved = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| config.is_reserved(name))
            .unwrap_or(false);
        !reserved && path.is_file()
    });
    Ok(images)
}

/// Class label of a class directory (its file name).
pub fn class_label(class_dir: &Path) -> String {
    class_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| class_dir.display().to_string())
}

/// Read a directory and sort its entries by file name.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    let mut named: Vec<(OsString, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        named.push((entry.file_name(), entry.path()));
    }

    named.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(named.into_iter().map(|(_, path)| path).collect())
}
