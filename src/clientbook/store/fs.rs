use super::DataStore;
use crate::error::{ClientbookError, Result};
use crate::model::Registry;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn tmp_file(&self) -> PathBuf {
        let mut name = self
            .data_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.data_file.with_file_name(name)
    }

    fn backup_file(&self) -> PathBuf {
        let mut name = self
            .data_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".corrupt-{}", Utc::now().format("%Y%m%dT%H%M%S")));
        self.data_file.with_file_name(name)
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent).map_err(ClientbookError::Io)
            }
            _ => Ok(()),
        }
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Registry>> {
        if !self.data_file.exists() {
            tracing::debug!(path = %self.data_file.display(), "no data file yet");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.data_file).map_err(ClientbookError::Io)?;
        let registry: Registry =
            serde_json::from_str(&content).map_err(ClientbookError::Serialization)?;
        tracing::debug!(
            path = %self.data_file.display(),
            clients = registry.len(),
            next_id = registry.next_id,
            "loaded data file"
        );
        Ok(Some(registry))
    }

    fn save(&mut self, registry: &Registry) -> Result<()> {
        self.ensure_parent()?;
        let content =
            serde_json::to_string_pretty(registry).map_err(ClientbookError::Serialization)?;

        // Write to a temp file first so a failed write leaves the old store intact
        let tmp_file = self.tmp_file();
        fs::write(&tmp_file, content).map_err(ClientbookError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ClientbookError::Io(e));
        }

        tracing::debug!(
            path = %self.data_file.display(),
            clients = registry.len(),
            "saved data file"
        );
        Ok(())
    }

    fn backup_corrupt(&mut self) -> Result<Option<PathBuf>> {
        if !self.data_file.exists() {
            return Ok(None);
        }
        let backup = self.backup_file();
        fs::copy(&self.data_file, &backup).map_err(ClientbookError::Io)?;
        Ok(Some(backup))
    }
}
