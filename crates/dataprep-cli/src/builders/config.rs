//! DatasetConfig builder: config file values overlaid with CLI flags.

use std::path::{Path, PathBuf};

use dataprep_core::config::{load_config, ConfigHandle, DatasetConfig};
use dataprep_core::models::{Color, FailurePolicy, RotationFilter};

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub grey: Option<Color>,
    pub copies: Option<u32>,
    pub max_angle: Option<i32>,
    pub prefix: Option<String>,
    pub filter: Option<RotationFilter>,
    pub seed: Option<u64>,
    /// `--continue-on-error`; only ever switches the policy on
    pub continue_on_error: bool,
    /// `--silent`; only ever switches notices off
    pub silent: bool,
}

/// Apply `overrides` on top of `base` and sanitize the result.
pub fn apply_overrides(base: DatasetConfig, overrides: &ConfigOverrides) -> DatasetConfig {
    let mut config = base;

    if let Some(width) = overrides.width {
        config.target_width = width;
    }
    if let Some(height) = overrides.height {
        config.target_height = height;
    }
    if let Some(grey) = overrides.grey {
        config.grey_background = grey;
    }
    if let Some(copies) = overrides.copies {
        config.copies = copies;
    }
    if let Some(max_angle) = overrides.max_angle {
        config.max_angle = max_angle;
    }
    if let Some(prefix) = &overrides.prefix {
        config.filename_prefix = prefix.clone();
    }
    if let Some(filter) = overrides.filter {
        config.rotation_filter = filter;
    }
    if overrides.seed.is_some() {
        config.seed = overrides.seed;
    }
    if overrides.continue_on_error {
        config.failure_policy = FailurePolicy::Continue;
    }
    if overrides.silent {
        config.silent = true;
    }

    config.sanitized()
}

/// Load the config (searching the usual locations unless `config_path` is
/// given) and apply the CLI overrides.
///
/// Returns the handle alongside the effective config so callers can log
/// where the base values came from.
pub fn build_dataset_config(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> (ConfigHandle, DatasetConfig) {
    let handle = load_config(config_path);
    let config = apply_overrides(handle.config.clone(), overrides);
    (handle, config)
}

/// Dataset root: the positional argument when given, else `train_folder`.
pub fn resolve_root(root: Option<PathBuf>, config: &DatasetConfig) -> PathBuf {
    root.unwrap_or_else(|| config.train_folder.clone())
}
