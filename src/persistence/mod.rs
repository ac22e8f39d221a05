//! Save/load persistence with integrity verification
//!
//! Features:
//! - Canonical JSON payload (sorted keys, compact)
//! - SHA-256 integrity tag on the first line
//! - Atomic replace (tmp → save)
//! - Corruption detection and field-level recovery
//!
//! Persistence is best-effort: nothing here ever fails the caller. Errors are
//! logged and the game carries on with whatever it already has.

pub mod envelope;
pub mod validation;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::skins::SkinCatalog;

/// Reasons a save could not be written or read
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("save file is empty or has no tag line")]
    Empty,
    #[error("integrity tag does not match payload")]
    TagMismatch,
    #[error("malformed payload: {0}")]
    Malformed(String),
    #[error("could not encode progress: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persisted player progress
///
/// Fields are declared in key order so the serialized form is canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Best run score
    pub best: u64,
    /// Spendable coins
    pub coins: u64,
    /// Selected skin index
    pub current: usize,
    /// Ownership flags aligned with the skin catalog
    pub owned: Vec<bool>,
}

impl ProgressRecord {
    /// Fresh-install record for a catalog
    pub fn fresh(catalog: &SkinCatalog) -> Self {
        Self {
            best: 0,
            coins: 0,
            current: catalog.selected_index(),
            owned: catalog.owned_flags(),
        }
    }

    /// Canonical payload text
    pub fn to_payload(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// File-backed progress store
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a record; failures are logged and dropped
    pub fn save(&self, record: &ProgressRecord) {
        match self.try_save(record) {
            Ok(()) => log::info!(
                "Progress saved ({} coins, best {})",
                record.coins,
                record.best
            ),
            Err(e) => log::warn!("Could not save progress to {}: {}", self.path.display(), e),
        }
    }

    /// Read the saved record, keeping `defaults` for anything missing or
    /// invalid
    pub fn load(&self, defaults: ProgressRecord) -> ProgressRecord {
        if !self.path.exists() {
            log::info!("No save at {}, starting fresh", self.path.display());
            return defaults;
        }

        match self.try_load() {
            Ok(payload) => {
                let record = validation::adopt(&payload, defaults);
                log::info!(
                    "Loaded progress ({} coins, best {})",
                    record.coins,
                    record.best
                );
                record
            }
            Err(e) => {
                log::warn!("Ignoring save file {}: {}", self.path.display(), e);
                defaults
            }
        }
    }

    fn try_save(&self, record: &ProgressRecord) -> Result<(), PersistError> {
        let sealed = envelope::seal(&record.to_payload()?);
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, sealed)?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn try_load(&self) -> Result<serde_json::Value, PersistError> {
        let bytes = std::fs::read(&self.path)?;
        let payload = envelope::open(&bytes)?;
        let value: serde_json::Value = serde_json::from_slice(payload)
            .map_err(|e| PersistError::Malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(PersistError::Malformed("not a JSON object".to_string()));
        }
        Ok(value)
    }
}
