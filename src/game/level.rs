use log::debug;
use std::time::Duration;

use crate::constants::{LEVEL_TIME_SECS, MAX_LEVEL};

/// What happened when a level was cleared.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LevelOutcome {
    Advanced,
    GameCompleted,
}

/// Tracks progression through the fixed sequence of levels.
#[derive(Debug)]
pub struct LevelManager {
    current: u32,
    completed: bool,
}

impl LevelManager {
    pub fn new() -> Self {
        Self {
            current: 1,
            completed: false,
        }
    }

    /// Restore progression from saved state. Out-of-range levels clamp back
    /// into the valid range; a save past the last level means the game was
    /// finished.
    pub fn from_save(level: u32, completed: bool) -> Self {
        let mut manager = Self {
            current: level.clamp(1, MAX_LEVEL),
            completed,
        };
        if level > MAX_LEVEL {
            manager.completed = true;
        }
        manager
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last(&self) -> bool {
        self.current == MAX_LEVEL
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(LEVEL_TIME_SECS)
    }

    /// Record the current level as cleared and move on.
    pub fn complete_level(&mut self) -> LevelOutcome {
        if self.current == MAX_LEVEL {
            debug!("last level {} cleared, game completed", self.current);
            self.completed = true;
            LevelOutcome::GameCompleted
        } else {
            self.current += 1;
            debug!("advanced to level {}", self.current);
            LevelOutcome::Advanced
        }
    }

    /// Back to square one (time over, or an explicit restart).
    pub fn reset(&mut self) {
        debug!("progress reset to level 1");
        self.current = 1;
        self.completed = false;
    }

    /// Development override from the command line.
    pub fn set_current(&mut self, level: u32) {
        self.current = level.clamp(1, MAX_LEVEL);
    }
}

impl Default for LevelManager {
    fn default() -> Self {
        Self::new()
    }
}
