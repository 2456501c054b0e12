//! Best-episode leaderboard
//!
//! Keeps the top episodes of demo runs, persisted as JSON. Only results are
//! stored here, never simulation state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, read_json, write_json};

/// Maximum number of episodes to keep
pub const MAX_ENTRIES: usize = 10;

/// A single finished episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Obstacles passed
    pub score: u64,
    /// Ticks survived
    pub ticks: u64,
    /// Sum of rewards over the episode
    pub total_reward: f32,
    /// Seed the episode was reset with
    pub seed: u64,
    /// Policy that played it
    pub policy: String,
}

/// Leaderboard sorted by score, then by ticks survived (both descending)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub entries: Vec<EpisodeRecord>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn beats(a: &EpisodeRecord, b: &EpisodeRecord) -> bool {
        (a.score, a.ticks) > (b.score, b.ticks)
    }

    /// Check if an episode would make the board
    pub fn qualifies(&self, record: &EpisodeRecord) -> bool {
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        self.entries
            .last()
            .map(|e| Self::beats(record, e))
            .unwrap_or(true)
    }

    /// Insert an episode if it qualifies
    /// Returns the rank achieved (1-indexed) or None if it didn't
    pub fn add(&mut self, record: EpisodeRecord) -> Option<usize> {
        if !self.qualifies(&record) {
            return None;
        }

        let pos = self.entries.iter().position(|e| Self::beats(&record, e));
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, record);
                i + 1
            }
            None => {
                self.entries.push(record);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<&EpisodeRecord> {
        self.entries.first()
    }

    /// Load a board from JSON; a missing file is an empty board
    pub fn load_from(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            log::info!("No scoreboard at {}, starting fresh", path.display());
            return Ok(Self::new());
        }
        let board: Self = read_json(path)?;
        log::info!("Loaded {} scoreboard entries", board.entries.len());
        Ok(board)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), StorageError> {
        write_json(path, self)?;
        log::info!("Scoreboard saved ({} entries)", self.entries.len());
        Ok(())
    }
}
