//! Serializable copy of all engagement state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::achievements::AchievementRegistry;
use crate::companion::{CompanionState, StoreItem};
use crate::goals::GoalBook;
use crate::onboarding::SurveyData;
use crate::progression::ProgressionState;
use crate::quests::QuestRegistry;
use crate::rewards::RewardCatalog;
use crate::social::CareCircle;
use crate::streaks::StreakBook;

/// Snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Everything needed to restore an [`super::EngagementTracker`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementSnapshot {
    pub version: u32,
    pub progression: ProgressionState,
    pub streaks: StreakBook,
    pub quests: QuestRegistry,
    pub achievements: AchievementRegistry,
    pub companion: CompanionState,
    pub store_items: Vec<StoreItem>,
    pub rewards: RewardCatalog,
    pub goals: GoalBook,
    pub circle: CareCircle,
    pub unlocked_cosmetics: Vec<String>,
    pub survey: Option<SurveyData>,
    pub saved_at: DateTime<Utc>,
}
