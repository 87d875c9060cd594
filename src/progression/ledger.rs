//! XP ledger with level rollover.

use serde::{Deserialize, Serialize};

/// Default XP needed to leave level 1.
pub const DEFAULT_FIRST_LEVEL_XP: u32 = 1000;

/// Default amount the threshold grows by on every level-up.
pub const DEFAULT_LEVEL_INCREMENT: u32 = 1000;

/// How many level-ups a single award may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelingPolicy {
    /// At most one level-up per award; leftover XP stays above the threshold
    /// until [`ProgressionState::normalize`] is called.
    #[default]
    SingleStep,
    /// Keep rolling over until XP is below the threshold.
    Rollover,
}

/// Level and XP for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionState {
    /// Current level (starts at 1)
    pub level: u32,
    /// XP earned toward the next level
    pub current_xp: u32,
    /// XP required to reach the next level
    pub next_level_xp: u32,
    /// Threshold growth per level-up
    pub level_increment: u32,
    /// Rollover behaviour for awards
    pub policy: LevelingPolicy,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            level: 1,
            current_xp: 0,
            next_level_xp: DEFAULT_FIRST_LEVEL_XP,
            level_increment: DEFAULT_LEVEL_INCREMENT,
            policy: LevelingPolicy::SingleStep,
        }
    }
}

/// Result of an XP award.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// Level before the award
    pub from_level: u32,
    /// Level after the award
    pub to_level: u32,
    /// XP that was added
    pub xp_awarded: u32,
}

impl LevelUp {
    /// Number of levels gained.
    pub fn levels_gained(&self) -> u32 {
        self.to_level - self.from_level
    }

    /// Whether the award changed the level.
    pub fn leveled_up(&self) -> bool {
        self.to_level > self.from_level
    }
}

impl ProgressionState {
    /// Create a state at an explicit position, e.g. when seeding a session.
    pub fn new(level: u32, current_xp: u32, next_level_xp: u32) -> Self {
        Self {
            level: level.max(1),
            current_xp,
            next_level_xp: next_level_xp.max(1),
            ..Default::default()
        }
    }

    /// Builder-style override of the leveling policy.
    pub fn with_policy(mut self, policy: LevelingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder-style override of the per-level threshold growth.
    pub fn with_increment(mut self, increment: u32) -> Self {
        self.level_increment = increment;
        self
    }

    /// Add XP and apply level-ups according to the policy.
    pub fn award_xp(&mut self, amount: u32, reason: &str) -> LevelUp {
        let from_level = self.level;
        self.current_xp = self.current_xp.saturating_add(amount);
        tracing::debug!("Awarded {} XP ({})", amount, reason);

        match self.policy {
            LevelingPolicy::SingleStep => {
                self.roll_once();
            }
            LevelingPolicy::Rollover => while self.roll_once() {},
        }

        if self.level > from_level {
            tracing::info!(
                "Level up: {} -> {} ({} XP toward {})",
                from_level,
                self.level,
                self.current_xp,
                self.next_level_xp
            );
        }

        LevelUp {
            from_level,
            to_level: self.level,
            xp_awarded: amount,
        }
    }

    /// Apply any rollovers still pending after a single-step award.
    ///
    /// Returns the number of levels gained.
    pub fn normalize(&mut self) -> u32 {
        let from_level = self.level;
        while self.roll_once() {}
        self.level - from_level
    }

    /// Deduct XP for a purchase. The level never goes down.
    pub fn spend_xp(&mut self, cost: u32) -> Result<(), ProgressionError> {
        if self.current_xp < cost {
            return Err(ProgressionError::InsufficientXp {
                needed: cost,
                available: self.current_xp,
            });
        }
        self.current_xp -= cost;
        Ok(())
    }

    /// Check the fields a restored state must satisfy before it is used.
    ///
    /// A zero threshold would let rollover level up forever.
    pub fn validate(&self) -> Result<(), ProgressionError> {
        if self.level == 0 {
            return Err(ProgressionError::InvalidState(
                "level must be at least 1".to_string(),
            ));
        }
        if self.next_level_xp == 0 {
            return Err(ProgressionError::InvalidState(
                "next_level_xp must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `current_xp < next_level_xp` holds.
    pub fn is_normalized(&self) -> bool {
        self.current_xp < self.next_level_xp
    }

    /// XP still needed for the next level.
    pub fn xp_to_next_level(&self) -> u32 {
        self.next_level_xp.saturating_sub(self.current_xp)
    }

    /// Progress toward the next level (0-100).
    pub fn progress_percent(&self) -> f32 {
        (self.current_xp as f32 / self.next_level_xp as f32 * 100.0).min(100.0)
    }

    fn roll_once(&mut self) -> bool {
        if self.current_xp < self.next_level_xp {
            return false;
        }
        self.current_xp -= self.next_level_xp;
        self.level += 1;
        self.next_level_xp = self.next_level_xp.saturating_add(self.level_increment);
        true
    }
}

/// Progression errors.
#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    #[error("Not enough XP: need {needed}, have {available}")]
    InsufficientXp { needed: u32, available: u32 },

    #[error("Invalid progression state: {0}")]
    InvalidState(String),
}
