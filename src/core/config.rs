//! Application configuration management
//!
//! Handles loading application settings including:
//! - Docker binary and polling cadence
//! - Whether stopped containers are listed
//! - Log file location

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{CtopError, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Docker executable used for listing containers and sampling stats
    #[serde(default = "default_docker_bin")]
    pub docker_bin: String,

    /// Interval between docker samples in seconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Include stopped containers in the grid
    #[serde(default)]
    pub show_all: bool,

    /// Where tracing output is written while the TUI owns the terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_docker_bin() -> String {
    "docker".to_string()
}

fn default_poll_interval() -> u64 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docker_bin: default_docker_bin(),
            poll_interval_secs: default_poll_interval(),
            show_all: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Resolve the log file, falling back to the platform cache directory
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            project_dirs()
                .ok()
                .map(|dirs| dirs.cache_dir().join("ctop.log"))
        })
    }

    fn validate(&self) -> Result<()> {
        if self.poll_interval_secs == 0 {
            return Err(CtopError::Config(
                "poll_interval_secs must be at least 1".into(),
            ));
        }
        if self.docker_bin.trim().is_empty() {
            return Err(CtopError::Config("docker_bin must not be empty".into()));
        }
        Ok(())
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "ctop-rs", "ctop-rs")
        .ok_or_else(|| CtopError::Config("Could not determine config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.docker_bin, "docker");
        assert_eq!(config.poll_interval_secs, 2);
        assert!(!config.show_all);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_all = true").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(config.show_all);
        assert_eq!(config.poll_interval_secs, 2);
        assert_eq!(config.docker_bin, "docker");
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "poll_interval_secs = 0").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, CtopError::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_toml_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_all = = true").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, CtopError::Toml(_)));
    }

    #[test]
    fn test_to_toml_round_trips_fields() {
        let config = Config {
            docker_bin: "podman".into(),
            poll_interval_secs: 5,
            show_all: true,
            log_file: Some(PathBuf::from("/tmp/ctop.log")),
        };
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("docker_bin = \"podman\""));
        assert!(rendered.contains("poll_interval_secs = 5"));
        assert!(rendered.contains("log_file = \"/tmp/ctop.log\""));
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("/var/log/ctop.log")),
            ..Config::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/var/log/ctop.log")));
    }
}
