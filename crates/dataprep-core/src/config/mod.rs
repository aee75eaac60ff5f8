//! Dataset configuration management.
//!
//! This module provides configuration loading, global verbose flag management,
//! and the dataset configuration type passed to both batch drivers.

mod defaults;


pub use defaults::DatasetConfig;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Environment variable that points at a config file.
pub const CONFIG_ENV_VAR: &str = "DATAPREP_CONFIG";

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["dataprep.yml", "dataprep.yaml"];

/// Loaded configuration, where it came from, and anything that went wrong
/// while looking for it.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    pub config: DatasetConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl ConfigHandle {
    fn with_config(config: DatasetConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }

    /// Print config source and warnings (only in verbose mode).
    pub fn log_usage(&self) {
        if !is_verbose() {
            return;
        }
        if let Some(source) = &self.source {
            eprintln!("[dataprep] Loaded config from {}", source.display());
        } else {
            eprintln!("[dataprep] Using built-in dataset defaults");
        }

        for warning in &self.warnings {
            eprintln!("[dataprep] Config warning: {}", warning);
        }
    }
}

/// Parse a YAML document into a sanitized config.
pub fn parse_config(contents: &str) -> Result<DatasetConfig, String> {
    serde_yaml::from_str::<DatasetConfig>(contents)
        .map(DatasetConfig::sanitized)
        .map_err(|e| format!("Failed to parse config YAML: {}", e))
}

/// Serialize a config to YAML, e.g. for `dataprep init`.
pub fn config_to_yaml(config: &DatasetConfig) -> Result<String, String> {
    serde_yaml::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// The first candidate that exists and parses wins. Read or parse failures
/// are collected as warnings and the search continues; when nothing loads
/// the built-in defaults are used.
pub fn load_config(custom_path: Option<&Path>) -> ConfigHandle {
    let mut warnings = Vec::new();

    if let Some(path) = custom_path {
        if !path.is_file() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
    }

    for candidate in get_config_candidates(custom_path) {
        if !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match parse_config(&contents) {
                Ok(config) => {
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return ConfigHandle::with_config(config, Some(source), warnings);
                }
                Err(err) => warnings.push(format!("{} ({})", err, candidate.display())),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No config found; using built-in defaults.".to_string());
    ConfigHandle::with_config(DatasetConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("dataprep").join(name));
        }
    }

    candidates
}
