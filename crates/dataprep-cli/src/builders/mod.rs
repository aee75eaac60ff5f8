//! Builder functions for CLI options.

mod config;
mod rng;

pub use config::{apply_overrides, build_dataset_config, resolve_root, ConfigOverrides};
pub use rng::build_rng;
