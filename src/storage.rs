//! Uploaded-artifact persistence
//!
//! Each uploaded artifact is written under
//! `{field}-{unix_millis}-{random}{.ext}` with the original extension
//! preserved. Uniqueness is probabilistic by contract; the store does not
//! strengthen it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).context("Failed to create upload directory")?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist `bytes` under a fresh name and return the full path.
    pub fn save(&self, field: &str, original_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(Self::stored_name(field, original_name));
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Stored uploaded artifact: {}", path.display());
        Ok(path)
    }

    fn stored_name(field: &str, original_name: &str) -> String {
        let ext = Path::new(original_name)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let millis = chrono::Utc::now().timestamp_millis();
        let disambiguator = uuid::Uuid::new_v4().as_u128() % 1_000_000_000;
        format!("{field}-{millis}-{disambiguator}{ext}")
    }
}
