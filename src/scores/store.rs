use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Storage port for the persisted high score
///
/// A single value survives process restarts. Loading is permissive: a
/// missing or malformed record reads as zero rather than failing.
pub trait HighScoreStore {
    fn load(&self) -> u32;
    fn save(&mut self, score: u32) -> Result<()>;
}

/// File-backed store holding the high score as a decimal string
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        fs::write(&self.path, score.to_string())
            .with_context(|| format!("Failed to write high score to {:?}", self.path))
    }
}
