use super::DataStore;
use crate::error::{ClientbookError, Result};
use crate::model::Registry;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<Registry>,
    corrupt: bool,
    fail_writes: bool,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `registry`.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            saved: Some(registry),
            ..Self::default()
        }
    }

    /// A store whose contents cannot be parsed.
    pub fn corrupt() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn saved(&self) -> Option<&Registry> {
        self.saved.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Registry>> {
        if self.corrupt {
            return Err(ClientbookError::Store("corrupt in-memory store".to_string()));
        }
        Ok(self.saved.clone())
    }

    fn save(&mut self, registry: &Registry) -> Result<()> {
        if self.fail_writes {
            return Err(ClientbookError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "write refused",
            )));
        }
        self.saved = Some(registry.clone());
        self.corrupt = false;
        self.save_count += 1;
        Ok(())
    }

    fn backup_corrupt(&mut self) -> Result<Option<PathBuf>> {
        if self.corrupt {
            Ok(Some(PathBuf::from("memory.corrupt")))
        } else {
            Ok(None)
        }
    }
}
