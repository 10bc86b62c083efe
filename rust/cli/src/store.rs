//! Durable best-score storage.
//!
//! The game persists exactly one value across sessions: the best score,
//! kept as a tiny JSON document under a per-user data directory (or any
//! path the user points at). Reads never fail the game: a missing or
//! corrupt file simply means no best score is on record yet.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;

/// On-disk layout: `{"highscore": 14}`.
#[derive(Debug, Serialize, Deserialize)]
struct StoreDoc {
    highscore: u32,
}

/// File-backed store holding the persisted best score.
///
/// Reads and writes are synchronous and unlocked; the game is the only
/// writer within a run.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored best score, or `None` when the file is missing, unreadable
    /// or not the expected document.
    pub fn load(&self) -> Option<u32> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str::<StoreDoc>(&content)
            .ok()
            .map(|doc| doc.highscore)
    }

    /// Overwrite the stored best score, creating parent directories as
    /// needed.
    pub fn save(&self, best: u32) -> Result<(), CliError> {
        ensure_parent_dir(&self.path).map_err(CliError::Store)?;
        let doc = StoreDoc { highscore: best };
        let json = serde_json::to_string(&doc)
            .map_err(|e| CliError::Store(format!("Failed to serialize best score: {}", e)))?;
        fs::write(&self.path, json + "\n")?;
        Ok(())
    }

    /// Remove the stored best score. Removing an absent file is not an
    /// error.
    pub fn clear(&self) -> Result<(), CliError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Default per-user store location, e.g. `~/.local/share/hilo/highscore.json`
/// on Linux.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hilo")
        .join("highscore.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = HighScoreStore::at(dir.path().join("highscore.json"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = HighScoreStore::at(dir.path().join("highscore.json"));
        store.save(14).unwrap();
        assert_eq!(store.load(), Some(14));

        store.save(15).unwrap();
        assert_eq!(store.load(), Some(15));
    }

    #[test]
    fn test_save_creates_missing_parent_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep").join("nested").join("highscore.json");
        let store = HighScoreStore::at(&nested);
        store.save(7).unwrap();
        assert_eq!(store.load(), Some(7));
    }

    #[test]
    fn test_corrupt_content_reads_as_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = HighScoreStore::at(&path);
        assert_eq!(store.load(), None);

        // wrong shape is also treated as absent
        std::fs::write(&path, r#"{"highscore": "fourteen"}"#).unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_removes_file_and_tolerates_absence() {
        let dir = tempdir().unwrap();
        let store = HighScoreStore::at(dir.path().join("highscore.json"));
        store.save(9).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), None);
        // clearing again is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_store_doc_uses_the_highscore_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        let store = HighScoreStore::at(&path);
        store.save(12).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"highscore\":12"));
    }
}
