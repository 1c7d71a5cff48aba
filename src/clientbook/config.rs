use crate::error::{ClientbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "clientes.json";

/// Configuration for clientbook, stored as config.json in the user config dir
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientbookConfig {
    /// Where the registry is stored. Relative paths resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Copy an unreadable data file aside before it gets overwritten
    #[serde(default)]
    pub backup_corrupt: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for ClientbookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            backup_corrupt: false,
        }
    }
}

impl ClientbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ClientbookError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            ClientbookError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Like [`load`](Self::load), but an unreadable file yields the defaults
    /// together with the error that caused the fallback.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> (Self, Option<ClientbookError>) {
        match Self::load(config_dir) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ClientbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ClientbookError::Serialization)?;
        fs::write(config_path, content).map_err(ClientbookError::Io)?;
        Ok(())
    }

    /// Command-line override for the data file
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ClientbookConfig::default();
        assert_eq!(config.data_file, PathBuf::from("clientes.json"));
        assert!(!config.backup_corrupt);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ClientbookConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, ClientbookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("clientbook");

        let config = ClientbookConfig {
            data_file: PathBuf::from("/srv/clients.json"),
            backup_corrupt: true,
        };
        config.save(&config_dir).unwrap();

        let loaded = ClientbookConfig::load(&config_dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"backup_corrupt": true}"#).unwrap();

        let loaded = ClientbookConfig::load(dir.path()).unwrap();
        assert!(loaded.backup_corrupt);
        assert_eq!(loaded.data_file, PathBuf::from("clientes.json"));
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "nope").unwrap();

        assert!(matches!(
            ClientbookConfig::load(dir.path()),
            Err(ClientbookError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"backup_corrupt": "yes"}"#).unwrap();

        let (config, err) = ClientbookConfig::load_or_default(dir.path());
        assert_eq!(config, ClientbookConfig::default());
        assert!(matches!(err, Some(ClientbookError::Config(_))));

        let (_, err) = ClientbookConfig::load_or_default(dir.path().join("absent"));
        assert!(err.is_none());
    }

    #[test]
    fn test_data_file_override() {
        let config = ClientbookConfig::default().with_data_file(Some("other.json".into()));
        assert_eq!(config.data_file, PathBuf::from("other.json"));

        let config = ClientbookConfig::default().with_data_file(None);
        assert_eq!(config.data_file, PathBuf::from("clientes.json"));
    }
}
