//! Quest type definitions.

use serde::{Deserialize, Serialize};

/// Time horizon a quest belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestBucket {
    Daily,
    Weekly,
    Monthly,
    /// Shared with the care circle
    Team,
}

impl QuestBucket {
    pub fn all() -> &'static [QuestBucket] {
        &[
            QuestBucket::Daily,
            QuestBucket::Weekly,
            QuestBucket::Monthly,
            QuestBucket::Team,
        ]
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            QuestBucket::Daily => "Daily",
            QuestBucket::Weekly => "Weekly",
            QuestBucket::Monthly => "Monthly",
            QuestBucket::Team => "Team",
        }
    }
}

impl std::fmt::Display for QuestBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Extra payout granted on completion, on top of XP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestReward {
    /// Cosmetic item for the companion
    Cosmetic { item: String },
    /// Achievement badge awarded immediately
    Badge { achievement_id: String },
}

impl QuestReward {
    /// Short description for the quest card.
    pub fn describe(&self) -> String {
        match self {
            QuestReward::Cosmetic { item } => format!("Unlocks {}", item),
            QuestReward::Badge { achievement_id } => format!("Earns badge '{}'", achievement_id),
        }
    }
}

/// A bounded progress task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    /// Stable catalog key
    pub id: String,
    /// Display title
    pub title: String,
    /// What the user has to do
    pub description: String,
    pub bucket: QuestBucket,
    /// Steps done so far
    pub progress: u32,
    /// Steps required
    pub total: u32,
    pub completed: bool,
    /// XP paid once on completion
    pub xp_reward: u32,
    /// Optional extra payout
    pub reward: Option<QuestReward>,
}

impl Quest {
    /// Create a new quest with zero progress.
    pub fn new(id: &str, title: &str, description: &str, bucket: QuestBucket, total: u32, xp_reward: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            bucket,
            progress: 0,
            total: total.max(1),
            completed: false,
            xp_reward,
            reward: None,
        }
    }

    /// Attach an extra completion reward.
    pub fn with_reward(mut self, reward: QuestReward) -> Self {
        self.reward = Some(reward);
        self
    }

    /// Progress percentage (0-100).
    pub fn percent(&self) -> f32 {
        (self.progress as f32 / self.total as f32 * 100.0).min(100.0)
    }

    /// Steps left until completion.
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.progress)
    }
}

/// Payout produced the moment a quest completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestCompletion {
    pub quest_id: String,
    pub title: String,
    pub xp_reward: u32,
    pub reward: Option<QuestReward>,
}

/// Result of advancing a quest.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestAdvance {
    /// Quest state after the call
    pub quest: Quest,
    /// Present only on the call that completed the quest
    pub completion: Option<QuestCompletion>,
}

impl QuestAdvance {
    /// Whether this call completed the quest.
    pub fn completed_now(&self) -> bool {
        self.completion.is_some()
    }
}

/// Quest errors.
#[derive(Debug, thiserror::Error)]
pub enum QuestError {
    #[error("Quest not found: {0}")]
    NotFound(String),

    #[error("Duplicate quest id: {0}")]
    DuplicateId(String),
}
