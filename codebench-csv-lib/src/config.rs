//! Configuration file handling

use crate::Result;
use crate::export::WriteMode;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Name of the configuration file looked up in the base directory
pub const CONFIG_FILE_NAME: &str = "codebench.toml";

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory receiving the CSV tables
    #[serde(default = "default_output_dir")]
    pub output_dir: Utf8PathBuf,

    /// Write mode of the runs table
    #[serde(default = "default_runs_mode")]
    pub runs_mode: WriteMode,

    /// Write mode of every other table
    #[serde(default = "default_tables_mode")]
    pub tables_mode: WriteMode,
}

fn default_output_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("csv")
}

const fn default_runs_mode() -> WriteMode {
    WriteMode::Append
}

const fn default_tables_mode() -> WriteMode {
    WriteMode::Overwrite
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// An explicit path must exist. Without one, `codebench.toml` is looked up in `base_dir`
    /// and defaults are used when it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory is empty
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_str().trim().is_empty() {
            bail!("output_dir must not be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn temp_root(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.output_dir, "csv");
        assert_eq!(config.runs_mode, WriteMode::Append);
        assert_eq!(config.tables_mode, WriteMode::Overwrite);
    }

    #[test]
    fn test_empty_document_uses_field_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_rejects_empty_output_dir() {
        let config = Config {
            output_dir: Utf8PathBuf::from("  "),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(toml::from_str::<Config>("output_dir = \"out\"\ncolumns = 3\n").is_err());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(toml::from_str::<Config>("runs_mode = \"merge\"\n").is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_save_default_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let root = temp_root(&tmp);
        let output_path = root.join("custom.toml");
        Config::save_default(&output_path).unwrap();
        let loaded = Config::load(&root, Some(&output_path)).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_from_base_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let root = temp_root(&tmp);
        fs::write(root.join(CONFIG_FILE_NAME), "output_dir = \"dataset\"\nruns_mode = \"overwrite\"\n").unwrap();

        let config = Config::load(&root, None).unwrap();
        assert_eq!(config.output_dir, "dataset");
        assert_eq!(config.runs_mode, WriteMode::Overwrite);
        assert_eq!(config.tables_mode, WriteMode::Overwrite);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_missing_config_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load(&temp_root(&tmp), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_missing_explicit_path_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let root = temp_root(&tmp);
        let missing = root.join("nope.toml");
        assert!(Config::load(&root, Some(&missing)).is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_rejects_empty_output_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let root = temp_root(&tmp);
        fs::write(root.join(CONFIG_FILE_NAME), "output_dir = \"\"\n").unwrap();
        assert!(Config::load(&root, None).is_err());
    }
}
