//! # kartu-store
//!
//! Persistence collaborator: named, timestamped `CardConfig` snapshots
//! in a small local store. The store keeps the ten most recent
//! projects, newest first; saving an eleventh evicts the oldest. The
//! rendering core never touches this crate — it only accepts a
//! `CardConfig` in and exposes one out.
//!
//! ## Storage layout
//!
//! One JSON document on disk holding the full project list. At this
//! capacity (10 snapshots of a few KB each) a single-file read/write
//! per operation is the honest cost model — no log, no index.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use kartu_core::config::CardConfig;

/// Maximum number of retained snapshots; the oldest is evicted first.
pub const STORE_CAPACITY: usize = 10;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("no project with id {0}")]
    NotFound(Uuid),
}

/// One saved snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedProject {
    pub id: Uuid,
    pub name: String,
    pub config: CardConfig,
    /// Unix timestamp (seconds) supplied by the caller at save time.
    pub timestamp: u64,
}

/// File-backed project store.
pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    /// Open a store at `path`. The file is created lazily on first
    /// save; a missing file reads as an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All snapshots, newest first.
    pub fn list(&self) -> Result<Vec<SavedProject>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Save a snapshot at the head of the list, evicting beyond
    /// capacity. Returns the stored record.
    pub fn save(
        &self,
        name: impl Into<String>,
        config: &CardConfig,
        timestamp: u64,
    ) -> Result<SavedProject, StoreError> {
        let project = SavedProject {
            id: Uuid::new_v4(),
            name: name.into(),
            config: config.clone(),
            timestamp,
        };

        let mut projects = self.list()?;
        projects.insert(0, project.clone());
        if projects.len() > STORE_CAPACITY {
            let evicted = projects.split_off(STORE_CAPACITY);
            for old in &evicted {
                log::info!("evicting project {:?} ({})", old.name, old.id);
            }
        }
        self.write(&projects)?;

        log::debug!("saved project {:?} ({})", project.name, project.id);
        Ok(project)
    }

    /// Load one snapshot's config by id.
    pub fn load(&self, id: Uuid) -> Result<CardConfig, StoreError> {
        self.list()?
            .into_iter()
            .find(|p| p.id == id)
            .map(|p| p.config)
            .ok_or(StoreError::NotFound(id))
    }

    /// Delete one snapshot by id.
    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut projects = self.list()?;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(StoreError::NotFound(id));
        }
        self.write(&projects)
    }

    fn write(&self, projects: &[SavedProject]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec_pretty(projects)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

// ===================================================================
// Tests
// ===================================================================
