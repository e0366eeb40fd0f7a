//! Per-user artifact storage.
//!
//! One current artifact per user, plus a timestamped backup of every write.
//! Paths are formed from parsed [`UserId`]s only; no caller-supplied string
//! ever becomes a path segment.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;
use viewsmith_core::UserId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Flat-file store rooted at one directory:
///
/// ```text
/// <root>/components/user/<user_id>.html   current artifact
/// <root>/backups/<user_id>/<user_id>_<stamp>.html
/// ```
#[derive(Debug, Clone)]
pub struct ComponentStore {
    root: PathBuf,
}

impl ComponentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn component_path(&self, user_id: UserId) -> PathBuf {
        self.root
            .join("components")
            .join("user")
            .join(format!("{user_id}.html"))
    }

    fn backup_dir(&self, user_id: UserId) -> PathBuf {
        self.root.join("backups").join(user_id.to_string())
    }

    /// The user's current artifact, or `None` if nothing was generated yet.
    pub async fn load(&self, user_id: UserId) -> Result<Option<String>, StoreError> {
        let path = self.component_path(user_id);
        match fs::read_to_string(&path).await {
            Ok(markup) => Ok(Some(markup)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    /// Replace the user's artifact and keep a backup of the new content.
    pub async fn save(&self, user_id: UserId, markup: &str) -> Result<(), StoreError> {
        let path = self.component_path(user_id);
        write_with_parents(&path, markup).await?;

        let backup = self.fresh_backup_path(user_id).await?;
        write_with_parents(&backup, markup).await?;

        tracing::info!(%user_id, backup = %backup.display(), "artifact stored");
        Ok(())
    }

    /// Backups are stamped to the second; a same-second rewrite gets a
    /// counter suffix so no backup ever overwrites another.
    async fn fresh_backup_path(&self, user_id: UserId) -> Result<PathBuf, StoreError> {
        let dir = self.backup_dir(user_id);
        let stamp = Utc::now().format("%Y%m%d_%H%M%S");

        let mut candidate = dir.join(format!("{user_id}_{stamp}.html"));
        let mut n = 1u32;
        while fs::try_exists(&candidate)
            .await
            .map_err(|e| StoreError::io(&candidate, e))?
        {
            n += 1;
            candidate = dir.join(format!("{user_id}_{stamp}_{n}.html"));
        }
        Ok(candidate)
    }
}

async fn write_with_parents(path: &Path, contents: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StoreError::io(parent, e))?;
    }
    fs::write(path, contents)
        .await
        .map_err(|e| StoreError::io(path, e))
}
