//! Shared utilities for dataprep-cli
//!
//! Argument parsing, config building and run summaries used by the
//! `dataprep` subcommands.

pub mod builders;
pub mod parsers;
pub mod summary;

// Re-export commonly used items at the crate root for convenience
pub use builders::{
    apply_overrides, build_dataset_config, build_rng, resolve_root, ConfigOverrides,
};
pub use parsers::{parse_color, parse_filter};
pub use summary::{finish, print_summary, write_report};
