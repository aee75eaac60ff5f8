use std::path::PathBuf;
use std::time::Instant;

use dataprep_cli::{
    build_dataset_config, finish, parse_color, print_summary, resolve_root, write_report,
    ConfigOverrides,
};

/// Normalize a dataset in place: resize, whiten the grey matte, invert.
#[allow(clippy::too_many_arguments)]
pub fn cmd_normalize(
    root: Option<PathBuf>,
    config_path: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
    grey: Option<String>,
    continue_on_error: bool,
    report_path: Option<PathBuf>,
    verbose: bool,
    silent: bool,
) -> Result<(), String> {
    let start = Instant::now();

    // Set verbose mode for core library
    dataprep_core::config::set_verbose(verbose);

    let overrides = ConfigOverrides {
        width,
        height,
        grey: grey.as_deref().map(parse_color).transpose()?,
        continue_on_error,
        silent,
        ..ConfigOverrides::default()
    };
    let (handle, config) = build_dataset_config(config_path.as_deref(), &overrides);
    handle.log_usage();

    let root = resolve_root(root, &config);
    if !config.silent {
        println!(
            "Normalizing {} to {}x{} (overwrites files in place)",
            root.display(),
            config.target_width,
            config.target_height
        );
    }

    let report = dataprep_core::normalize_dataset_in_place(&root, &config)?;

    print_summary(&report, start.elapsed(), config.silent);
    if let Some(path) = report_path {
        write_report(&report, &path)?;
        if !config.silent {
            println!("Report written to {}", path.display());
        }
    }

    finish(&report)
}
