//! # Configuration
//!
//! Settings live in `config.json` inside the OS config directory
//! (`directories::ProjectDirs`). A missing file means defaults.
//!
//! ## Where the cards live
//!
//! Resolved in priority order:
//! 1. `--dir` on the command line
//! 2. `CARDFILE_DIR` environment variable
//! 3. `cards_dir` in `config.json`
//! 4. `<data dir>/cards`
//!
//! The library itself never resolves paths; [`crate::store::fs::FileStore`]
//! is handed a directory and uses nothing else.

use crate::error::{CardError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const CARDS_SUBDIR: &str = "cards";

pub const CARDS_DIR_ENV: &str = "CARDFILE_DIR";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CardsConfig {
    /// Directory holding the card files.
    #[serde(default)]
    pub cards_dir: Option<PathBuf>,

    /// Log level for the CLI (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default)]
    pub log_level: Option<String>,
}

impl CardsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CardError::Io)?;
        let config: CardsConfig =
            serde_json::from_str(&content).map_err(CardError::Serialization)?;
        Ok(config)
    }

    /// Picks the cards directory from the sources above, highest priority first.
    pub fn resolve_cards_dir(
        &self,
        flag: Option<PathBuf>,
        env: Option<PathBuf>,
        data_dir: Option<&Path>,
    ) -> Result<PathBuf> {
        flag.or(env)
            .or_else(|| self.cards_dir.clone())
            .or_else(|| data_dir.map(|d| d.join(CARDS_SUBDIR)))
            .ok_or_else(|| {
                CardError::Config(format!(
                    "no cards directory: pass --dir or set {}",
                    CARDS_DIR_ENV
                ))
            })
    }
}

/// OS-specific config and data locations, if the platform has any.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "cardfile", "cardfile")
}

/// `CARDFILE_DIR`, ignoring an empty value.
pub fn cards_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(CARDS_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CardsConfig::load(dir.path()).unwrap();
        assert_eq!(config, CardsConfig::default());
    }

    #[test]
    fn loads_settings_from_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "cards_dir": "/srv/cards", "log_level": "debug" }"#,
        )
        .unwrap();

        let loaded = CardsConfig::load(dir.path()).unwrap();
        assert_eq!(
            loaded,
            CardsConfig {
                cards_dir: Some(PathBuf::from("/srv/cards")),
                log_level: Some("debug".to_string()),
            }
        );
    }

    #[test]
    fn unset_keys_are_optional() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();
        assert_eq!(CardsConfig::load(dir.path()).unwrap(), CardsConfig::default());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            CardsConfig::load(dir.path()),
            Err(CardError::Serialization(_))
        ));
    }

    #[test]
    fn resolution_order() {
        let config = CardsConfig {
            cards_dir: Some(PathBuf::from("/from/config")),
            log_level: None,
        };
        let data = Path::new("/data");

        let flag = config
            .resolve_cards_dir(
                Some("/from/flag".into()),
                Some("/from/env".into()),
                Some(data),
            )
            .unwrap();
        assert_eq!(flag, PathBuf::from("/from/flag"));

        let env = config
            .resolve_cards_dir(None, Some("/from/env".into()), Some(data))
            .unwrap();
        assert_eq!(env, PathBuf::from("/from/env"));

        let from_config = config.resolve_cards_dir(None, None, Some(data)).unwrap();
        assert_eq!(from_config, PathBuf::from("/from/config"));

        let fallback = CardsConfig::default()
            .resolve_cards_dir(None, None, Some(data))
            .unwrap();
        assert_eq!(fallback, PathBuf::from("/data/cards"));
    }

    #[test]
    fn no_source_is_a_config_error() {
        let err = CardsConfig::default()
            .resolve_cards_dir(None, None, None)
            .unwrap_err();
        assert!(matches!(err, CardError::Config(_)));
    }
}
