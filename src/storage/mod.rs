//! Storage module for persisted state and configuration.

pub mod config;
pub mod database;
pub mod schema;

pub use config::{AppConfig, CompanionSettings, ProgressionSettings, StorageSettings, StreakSettings};
pub use database::{Database, DatabaseError, SqliteStore};

use crate::engine::EngagementSnapshot;

/// Where engagement state is loaded from and saved to.
pub trait StateStore {
    /// Load the last saved snapshot, if any.
    fn load(&self) -> Result<Option<EngagementSnapshot>, DatabaseError>;

    /// Persist a snapshot, replacing the previous one.
    fn save(&mut self, snapshot: &EngagementSnapshot) -> Result<(), DatabaseError>;
}

/// In-memory store (for testing).
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Option<EngagementSnapshot>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` was called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<EngagementSnapshot>, DatabaseError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &EngagementSnapshot) -> Result<(), DatabaseError> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }
}
