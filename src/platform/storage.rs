//! File-backed high score storage
//!
//! The file holds a small JSON object: `{"hiscore": 1234}`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::highscores::{ScoreStore, StoreError};

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    #[serde(default)]
    hiscore: u64,
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<Option<u64>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let file: HighScoreFile = serde_json::from_str(&json)?;
        Ok(Some(file.hiscore))
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        let json = serde_json::to_string(&HighScoreFile { hiscore: score })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
