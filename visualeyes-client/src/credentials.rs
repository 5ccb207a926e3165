//! API-key persistence: one plaintext settings file per installation.
//!
//! No client-side validation of the key; the service's 401 on first use is
//! the validity oracle.

use std::path::{Path, PathBuf};

use tracing::debug;

use visualeyes_core::config::VisualEyesConfig;
use visualeyes_core::constants::SETTINGS_FILENAME;
use visualeyes_core::errors::CredentialError;

/// Reads and writes the single persisted API key.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// A store rooted at the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(SETTINGS_FILENAME),
        }
    }

    /// A store rooted at the configured data directory.
    pub fn from_config(config: &VisualEyesConfig) -> Self {
        Self::new(config.data_dir())
    }

    /// The settings file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted key, or `None` when no settings file exists yet.
    pub fn get(&self) -> Result<Option<String>, CredentialError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents.trim_end_matches('\n').to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CredentialError::Io {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Persist a key, creating the settings file (and its directory) when
    /// absent and overwriting the whole contents otherwise.
    pub fn set(&self, key: &str) -> Result<(), CredentialError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| CredentialError::Io {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        std::fs::write(&self.path, key).map_err(|e| CredentialError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %self.path.display(), "api key stored");
        Ok(())
    }
}

/// One pass through the key-entry dialog. The previously stored key is
/// snapshotted at open time and threaded through the session explicitly;
/// nothing is written until [`submit`](KeyEntrySession::submit).
#[derive(Debug)]
pub struct KeyEntrySession {
    previous: Option<String>,
}

impl KeyEntrySession {
    /// Open the session, snapshotting the stored key for display.
    pub fn open(store: &FileCredentialStore) -> Result<Self, CredentialError> {
        Ok(Self {
            previous: store.get()?,
        })
    }

    /// The key that was stored when the session opened, for prefilling the
    /// entry field.
    pub fn previous_key(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Persist the newly entered key and end the session.
    pub fn submit(self, store: &FileCredentialStore, new_key: &str) -> Result<(), CredentialError> {
        store.set(new_key)
    }

    /// End the session without touching the store.
    pub fn cancel(self) {}
}
