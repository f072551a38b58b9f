use std::fs;
use std::path::PathBuf;

use crate::core::Session;
use crate::error::StoreError;

use super::SessionStore;

/// Sessions kept as one pretty-printed JSON array
pub(crate) struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl SessionStore for JsonFileStore {
    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }

    fn load(&self) -> Result<Vec<Session>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn save_all(&self, sessions: &[Session]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(sessions).map_err(|source| StoreError::Json {
            path: self.path.display().to_string(),
            source,
        })?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}
