//! Persisted high score
//!
//! A single integer, read once at startup and written when a round beats it.
//! Storage problems never reach the player: reads fall back to 0, and an
//! unreachable store or a failed write turns persistence off for the rest of
//! the session. Corrupt data is simply overwritten by the next high score.

use thiserror::Error;

/// Errors surfaced by score store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed high score data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the high score lives
pub trait ScoreStore {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<u64>, StoreError>;

    fn save(&mut self, score: u64) -> Result<(), StoreError>;
}

/// In-memory store (tests, or when no file should be touched)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u64>,
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u64>, StoreError> {
        Ok(self.value)
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        self.value = Some(score);
        Ok(())
    }
}

/// The in-memory best score plus an optional backing store
pub struct HighScore {
    best: u64,
    store: Option<Box<dyn ScoreStore>>,
}

impl Default for HighScore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl HighScore {
    /// Load the best score from `store`; unreadable data counts as 0
    pub fn load(store: Box<dyn ScoreStore>) -> Self {
        let best = match store.load() {
            Ok(Some(score)) => {
                log::info!("Loaded high score {}", score);
                score
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(StoreError::Io(e)) => {
                log::warn!("High score storage unavailable, persistence disabled: {}", e);
                return Self::in_memory();
            }
            Err(e) => {
                log::warn!("Ignoring unreadable high score: {}", e);
                0
            }
        };
        Self {
            best,
            store: Some(store),
        }
    }

    /// No persistence at all
    pub fn in_memory() -> Self {
        Self {
            best: 0,
            store: None,
        }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn persistence_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Record a finished round. Returns true if it set a new high score.
    pub fn submit(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;

        if let Some(store) = self.store.as_mut() {
            match store.save(score) {
                Ok(()) => log::info!("High score saved ({})", score),
                Err(e) => {
                    log::warn!("Failed to save high score, persistence disabled: {}", e);
                    self.store = None;
                }
            }
        }
        true
    }
}
