//! Actions the UI dispatches and the outcomes they produce.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::companion::{CompanionAction, Mood, StatDelta};
use crate::progression::LevelUp;
use crate::quests::QuestAdvance;
use crate::rewards::Redemption;
use crate::streaks::StreakCategory;

/// A state change requested by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    AwardXp { amount: u32, reason: String },
    AdvanceQuest { quest_id: String, delta: u32 },
    Companion { action: CompanionAction },
    Purchase { item_id: String },
    EarnCoins { amount: u32, reason: String },
    LogActivity { category: StreakCategory, date: NaiveDate },
    CheckAchievement { achievement_id: String, value: f64 },
    RedeemReward { reward_id: String },
}

impl Action {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::AwardXp { .. } => "award_xp",
            Action::AdvanceQuest { .. } => "advance_quest",
            Action::Companion { .. } => "companion",
            Action::Purchase { .. } => "purchase",
            Action::EarnCoins { .. } => "earn_coins",
            Action::LogActivity { .. } => "log_activity",
            Action::CheckAchievement { .. } => "check_achievement",
            Action::RedeemReward { .. } => "redeem_reward",
        }
    }
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    XpAwarded(LevelUp),
    QuestAdvanced {
        advance: QuestAdvance,
        /// Present when the advance completed the quest
        level_up: Option<LevelUp>,
    },
    CompanionUpdated {
        action: CompanionAction,
        mood: Mood,
    },
    Purchased {
        item_id: String,
        delta: StatDelta,
    },
    CoinsEarned {
        balance: u32,
    },
    ActivityLogged {
        category: StreakCategory,
        streak_days: u32,
    },
    AchievementChecked {
        achievement_id: String,
        earned_now: bool,
    },
    RewardRedeemed(Redemption),
}
