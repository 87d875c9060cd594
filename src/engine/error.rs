use thiserror::Error;

use crate::achievements::AchievementError;
use crate::companion::CompanionError;
use crate::goals::GoalError;
use crate::onboarding::SurveyError;
use crate::progression::ProgressionError;
use crate::quests::QuestError;
use crate::rewards::RewardError;
use crate::social::CircleError;
use crate::storage::DatabaseError;

/// Any error an engagement operation can produce.
#[derive(Debug, Error)]
pub enum EngagementError {
    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error(transparent)]
    Quest(#[from] QuestError),

    #[error(transparent)]
    Achievement(#[from] AchievementError),

    #[error(transparent)]
    Companion(#[from] CompanionError),

    #[error(transparent)]
    Reward(#[from] RewardError),

    #[error(transparent)]
    Goal(#[from] GoalError),

    #[error(transparent)]
    Circle(#[from] CircleError),

    #[error(transparent)]
    Survey(#[from] SurveyError),

    #[error(transparent)]
    Storage(#[from] DatabaseError),

    #[error("Unsupported snapshot version {0}")]
    SnapshotVersion(u32),
}

impl EngagementError {
    /// Whether the error is a short balance the user can fix by earning more.
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(
            self,
            EngagementError::Progression(ProgressionError::InsufficientXp { .. })
                | EngagementError::Companion(CompanionError::InsufficientCoins { .. })
                | EngagementError::Reward(RewardError::InsufficientBalance { .. })
        )
    }
}
