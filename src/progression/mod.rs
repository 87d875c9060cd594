//! Experience points and leveling.
//!
//! Holds the user's level, XP toward the next level, and the level-up
//! threshold. Health-logging actions and quest payouts feed XP in through
//! [`ProgressionState::award_xp`].

pub mod ledger;

// Re-exports for convenience
pub use ledger::{LevelUp, LevelingPolicy, ProgressionError, ProgressionState};
