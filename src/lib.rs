//! FlowSense - Diabetes Self-Care Engagement Engine
//!
//! Gamified progression for daily diabetes self-care: XP and levels,
//! logging streaks, quests, achievements, a virtual companion with a coin
//! economy, a rewards store, personal goals, an onboarding survey and a
//! care circle. All state lives in one [`engine::EngagementTracker`] and is
//! persisted as a snapshot in SQLite.

pub mod achievements;
pub mod companion;
pub mod engine;
pub mod goals;
pub mod onboarding;
pub mod progression;
pub mod quests;
pub mod rewards;
pub mod social;
pub mod storage;
pub mod streaks;

// Re-export commonly used types
pub use engine::{Action, EngagementError, EngagementTracker, Outcome};
pub use progression::ProgressionState;
pub use storage::config::AppConfig;
pub use storage::SqliteStore;
