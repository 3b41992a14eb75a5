//! Configuration management module.
//!
//! This module handles loading and saving the configuration file that holds
//! the task service location, theme preference and notification timing.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/taskdeck";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub theme_name: String,
    pub seed_on_empty: bool,
    pub notification_secs: u64,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_theme_name")]
    theme_name: String,
    #[serde(default = "default_seed_on_empty")]
    seed_on_empty: bool,
    #[serde(default = "default_notification_secs")]
    notification_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_theme_name() -> String {
    "dark".to_string()
}

fn default_seed_on_empty() -> bool {
    true
}

fn default_notification_secs() -> u64 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values.
    ///
    pub fn new() -> Config {
        Config {
            base_url: default_base_url(),
            theme_name: default_theme_name(),
            seed_on_empty: default_seed_on_empty(),
            notification_secs: default_notification_secs(),
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided or
    /// the default directory otherwise. A missing file is created with the
    /// current values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(FILE_NAME);
        self.file_path = Some(file_path.clone());

        if !file_path.exists() {
            info!("Creating configuration file at {}...", file_path.display());
            return self.save();
        }

        debug!("Loading configuration from {}...", file_path.display());
        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            source: e,
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.base_url = data.base_url;
        self.theme_name = data.theme_name;
        self.seed_on_empty = data.seed_on_empty;
        self.notification_secs = data.notification_secs;
        self.validate()?;
        Ok(())
    }

    /// Replace the service location for this run only.
    ///
    pub fn override_base_url(&mut self, base_url: &str) -> AppResult<()> {
        self.base_url = base_url.to_string();
        self.validate()
    }

    /// Serialize the configuration and write it to the disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            base_url: self.base_url.clone(),
            theme_name: self.theme_name.clone(),
            seed_on_empty: self.seed_on_empty,
            notification_secs: self.notification_secs,
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        let save_failed = |e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        };
        let mut file = fs::File::create(file_path).map_err(save_failed)?;
        write!(file, "{}", content).map_err(save_failed)?;
        file.flush().map_err(save_failed)?;
        Ok(())
    }

    /// Return the location of the loaded configuration file, if any.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    fn validate(&self) -> AppResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                message: format!("'{}' must start with http:// or https://", self.base_url),
            }
            .into());
        }
        if self.notification_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "notification_secs",
                message: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("taskdeck-config-{}", rand::random::<u64>()))
    }

    #[test]
    fn load_creates_missing_file_with_defaults() {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        let file_path = dir.join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));
        let contents = fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("http://localhost:8000"));
        assert_eq!(config.theme_name, "dark");
        assert!(config.seed_on_empty);
        assert_eq!(config.notification_secs, 3);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_reads_existing_file_and_fills_defaults() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "base_url: http://tasks.internal:9000\nseed_on_empty: false\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.base_url, "http://tasks.internal:9000");
        assert!(!config.seed_on_empty);
        assert_eq!(config.theme_name, "dark");
        assert_eq!(config.notification_secs, 3);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "notification_secs: [oops").unwrap();

        let mut config = Config::new();
        let err = config.load(dir.to_str()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::DeserializationFailed(_))
        ));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_rejects_invalid_values() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "notification_secs: 0\n").unwrap();

        let mut config = Config::new();
        let err = config.load(dir.to_str()).unwrap_err();
        assert!(err.to_string().contains("notification_secs"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn override_base_url_validates_scheme() {
        let mut config = Config::new();
        config.override_base_url("https://example.com").unwrap();
        assert_eq!(config.base_url, "https://example.com");
        assert!(config.override_base_url("example.com").is_err());
    }

    #[test]
    fn save_without_path_fails() {
        let err = Config::new().save().unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::FilePathNotSet)));
    }
}
