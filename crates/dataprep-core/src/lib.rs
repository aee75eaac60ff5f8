//! Dataprep Core Library
//!
//! Image transforms and batch drivers that prepare a folder-per-class image
//! dataset for classification: fixed-size greyscale normalization with
//! black/white inversion, and rotation-based augmentation.

pub mod config;
pub mod dataset;
pub mod decoders;
pub mod exporters;
pub mod models;
pub mod transforms;

// Re-export commonly used types
pub use config::{load_config, ConfigHandle, DatasetConfig};
pub use dataset::{
    augment_dataset, augment_image, augmented_file_name, normalize_dataset_in_place,
    normalize_image, AugmentSettings, BatchKind, BatchReport, NormalizeSettings,
};
pub use models::{Color, FailurePolicy, MaskMode, RotationFilter};
pub use transforms::{
    invert_colors, recolor_exact, rotate_with_fill, rotate_with_rgba_fill, top_left_fill,
};
