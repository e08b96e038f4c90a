//! # CLI Configuration
//!
//! Resolves where the cost table lives and how prices are printed.
//!
//! Cost table path, first match wins:
//!
//! 1. `--table <path>` on the command line.
//! 2. The `PARCEL_COST_TABLE` environment variable (read by clap into the
//!    same flag).
//! 3. `cost_table` in the YAML file given by `--config`. Relative paths
//!    resolve against the directory holding that file.
//! 4. [`DEFAULT_COST_TABLE`], relative to the working directory.
//!
//! ```yaml
//! cost_table: data/shipping_costs.csv
//! currency_symbol: "€"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming the cost table file.
pub const COST_TABLE_ENV: &str = "PARCEL_COST_TABLE";

/// Cost table path used when nothing else is configured.
pub const DEFAULT_COST_TABLE: &str = "data/shipping_costs.csv";

/// Currency symbol appended to human-readable prices.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// On-disk shape of the `--config` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to the cost table file.
    #[serde(default)]
    pub cost_table: Option<PathBuf>,
    /// Currency symbol for human output.
    #[serde(default)]
    pub currency_symbol: Option<String>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Cost table file to load.
    pub cost_table: PathBuf,
    /// Currency symbol for human output.
    pub currency_symbol: String,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Path given to `--config`.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid YAML or has unknown keys.
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        /// Path given to `--config`.
        path: PathBuf,
        /// The YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigFile {
    /// Read and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Settings {
    /// Combine the `--table` flag (already merged with the environment by
    /// clap) with the optional `--config` file.
    pub fn resolve(table: Option<&Path>, config: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match config {
            Some(path) => {
                tracing::debug!(config = %path.display(), "reading config file");
                ConfigFile::load(path)?
            }
            None => ConfigFile::default(),
        };

        let cost_table = match (table, file.cost_table) {
            (Some(flag), _) => flag.to_path_buf(),
            (None, Some(from_file)) => relative_to_config(&from_file, config),
            (None, None) => PathBuf::from(DEFAULT_COST_TABLE),
        };

        let settings = Self {
            cost_table,
            currency_symbol: file
                .currency_symbol
                .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
        };
        tracing::debug!(cost_table = %settings.cost_table.display(), "resolved settings");
        Ok(settings)
    }
}

fn relative_to_config(path: &Path, config: Option<&Path>) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match config.and_then(Path::parent) {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flag_or_config() {
        let settings = Settings::resolve(None, None).unwrap();
        assert_eq!(settings.cost_table, PathBuf::from(DEFAULT_COST_TABLE));
        assert_eq!(settings.currency_symbol, "€");
    }

    #[test]
    fn flag_wins_over_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("parcel.yaml");
        std::fs::write(&config, "cost_table: from_config.csv\n").unwrap();

        let settings =
            Settings::resolve(Some(Path::new("/srv/flag.csv")), Some(&config)).unwrap();
        assert_eq!(settings.cost_table, PathBuf::from("/srv/flag.csv"));
    }

    #[test]
    fn config_path_is_relative_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("parcel.yaml");
        std::fs::write(&config, "cost_table: prices/costs.csv\ncurrency_symbol: EUR\n").unwrap();

        let settings = Settings::resolve(None, Some(&config)).unwrap();
        assert_eq!(settings.cost_table, dir.path().join("prices/costs.csv"));
        assert_eq!(settings.currency_symbol, "EUR");
    }

    #[test]
    fn absolute_config_path_kept() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("parcel.yaml");
        std::fs::write(&config, "cost_table: /etc/parcel/costs.csv\n").unwrap();

        let settings = Settings::resolve(None, Some(&config)).unwrap();
        assert_eq!(settings.cost_table, PathBuf::from("/etc/parcel/costs.csv"));
    }

    #[test]
    fn empty_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("parcel.yaml");
        std::fs::write(&config, "").unwrap();

        let settings = Settings::resolve(None, Some(&config)).unwrap();
        assert_eq!(settings.cost_table, PathBuf::from(DEFAULT_COST_TABLE));
    }

    #[test]
    fn unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("parcel.yaml");
        std::fs::write(&config, "cost_tabel: typo.csv\n").unwrap();

        let err = Settings::resolve(None, Some(&config)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_config_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::resolve(None, Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
