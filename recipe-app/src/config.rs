//! Shell configuration, read from an optional TOML file.
//!
//! ```toml
//! save_delay_ms = 1500
//! login_delay_ms = 1500
//! narrow_viewport_px = 768
//! log_level = "info"
//! log_file = "recipe.log"
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Artificial delay of the simulated recipe save.
    pub save_delay_ms: u64,
    /// Artificial delay before a login succeeds.
    pub login_delay_ms: u64,
    /// Viewports narrower than this close the sidebar after a menu pick.
    pub narrow_viewport_px: u32,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Append log records to this file as well as stdout.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            save_delay_ms: 1500,
            login_delay_ms: 1500,
            narrow_viewport_px: 768,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Loads `path`, or returns defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file; using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_the_recipe_screen() {
        let config = AppConfig::default();

        assert_eq!(config.save_delay(), Duration::from_millis(1500));
        assert_eq!(config.login_delay(), Duration::from_millis(1500));
        assert_eq!(config.narrow_viewport_px, 768);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = AppConfig::from_toml_str("save_delay_ms = 10\nlog_level = \"debug\"").unwrap();

        assert_eq!(config.save_delay_ms, 10);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.login_delay_ms, 1500);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppConfig::from_toml_str("save_delay = 10").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load(Path::new("/definitely/not/here/recipe.toml")).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn malformed_file_reports_path() {
        let path = std::env::temp_dir().join(format!("recipe-config-{}.toml", std::process::id()));
        fs::write(&path, "save_delay_ms = \"soon\"").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("recipe-config-"));
    }
}
