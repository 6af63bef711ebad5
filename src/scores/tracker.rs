use super::store::HighScoreStore;
use anyhow::Result;

/// Bridges the in-game score to the persisted high score
///
/// This is the only write path to persisted state: the high score is loaded
/// once at startup and written back immediately whenever the current score
/// strictly exceeds it.
pub struct HighScoreTracker {
    high_score: u32,
    store: Box<dyn HighScoreStore>,
}

impl HighScoreTracker {
    pub fn new(store: Box<dyn HighScoreStore>) -> Self {
        let high_score = store.load();
        Self { high_score, store }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Record the current score; updates and persists the high score iff it
    /// was strictly exceeded. Returns whether a new high was set.
    pub fn record(&mut self, score: u32) -> Result<bool> {
        if score <= self.high_score {
            return Ok(false);
        }

        self.high_score = score;
        self.store.save(score)?;
        Ok(true)
    }
}
