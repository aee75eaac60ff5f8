use std::path::PathBuf;
use std::time::Instant;

use dataprep_cli::{
    build_dataset_config, build_rng, finish, parse_filter, print_summary, resolve_root,
    write_report, ConfigOverrides,
};

/// Write rotated copies of every image in a dataset.
#[allow(clippy::too_many_arguments)]
pub fn cmd_augment(
    root: Option<PathBuf>,
    prior_count: u64,
    config_path: Option<PathBuf>,
    copies: Option<u32>,
    max_angle: Option<i32>,
    seed: Option<u64>,
    prefix: Option<String>,
    filter: Option<String>,
    continue_on_error: bool,
    report_path: Option<PathBuf>,
    verbose: bool,
    silent: bool,
) -> Result<(), String> {
    let start = Instant::now();

    // Set verbose mode for core library
    dataprep_core::config::set_verbose(verbose);

    let overrides = ConfigOverrides {
        copies,
        max_angle,
        seed,
        prefix,
        filter: parse_filter(filter.as_deref())?,
        continue_on_error,
        silent,
        ..ConfigOverrides::default()
    };
    let (handle, config) = build_dataset_config(config_path.as_deref(), &overrides);
    handle.log_usage();

    let root = resolve_root(root, &config);
    if !config.silent {
        println!(
            "Augmenting {}: {} copies per image, numbering from {}",
            root.display(),
            config.copies,
            prior_count
        );
        if let Some(seed) = config.seed {
            println!("Using seed {}", seed);
        }
    }

    let mut rng = build_rng(config.seed);
    let report = dataprep_core::augment_dataset(&root, prior_count, &config, &mut rng)?;

    print_summary(&report, start.elapsed(), config.silent);
    if let Some(path) = report_path {
        write_report(&report, &path)?;
        if !config.silent {
            println!("Report written to {}", path.display());
        }
    }

    finish(&report)
}
