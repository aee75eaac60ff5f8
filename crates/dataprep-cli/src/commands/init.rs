use std::path::PathBuf;

use dataprep_core::config::{config_to_yaml, DatasetConfig};

/// Default file written by `dataprep init`; found by the config search when
/// run from the same directory.
const DEFAULT_CONFIG_FILE: &str = "dataprep.yml";

/// Write a config file holding every default value.
///
/// Safe to run multiple times - won't overwrite an existing file unless
/// `force` is true.
pub fn cmd_init(output: Option<PathBuf>, force: bool) -> Result<(), String> {
    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if path.exists() && !force {
        println!(
            "Skipped: {} (already exists, use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let yaml = config_to_yaml(&DatasetConfig::default())?;
    std::fs::write(&path, yaml)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

    println!("Wrote default config: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataprep_core::config::parse_config;

    #[test]
    fn test_init_writes_parseable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("dataprep.yml");

        cmd_init(Some(path.clone()), false).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parse_config(&contents).unwrap(), DatasetConfig::default());
    }

    #[test]
    fn test_init_skips_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataprep.yml");
        std::fs::write(&path, "copies: 9\n").unwrap();

        cmd_init(Some(path.clone()), false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "copies: 9\n");

        cmd_init(Some(path.clone()), true).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parse_config(&contents).unwrap().copies, 4);
    }
}
