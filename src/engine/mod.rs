//! Engagement tracker: the single owner of all progression state.
//!
//! The UI turns every user event into an [`Action`] and dispatches it here.
//! The tracker mutates the relevant component, chains follow-up effects
//! (quest completion pays XP and rewards) and returns an [`Outcome`].

pub mod action;
pub mod error;
pub mod snapshot;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::achievements::AchievementRegistry;
use crate::companion::{store, CompanionAction, CompanionError, CompanionState, StatDelta, StoreItem};
use crate::goals::GoalBook;
use crate::onboarding::{SurveyData, SurveyError, SurveyHandoff};
use crate::progression::{LevelUp, ProgressionState};
use crate::quests::{QuestAdvance, QuestRegistry, QuestReward};
use crate::rewards::{Currency, Redemption, RewardCatalog};
use crate::social::{CareCircle, CircleMember, CircleNotifier, LogNotifier, PrivacySettings, PrivacyUpdate, Relationship};
use crate::storage::{AppConfig, StateStore};
use crate::streaks::{StreakBook, StreakCategory};

pub use action::{Action, Outcome};
pub use error::EngagementError;
pub use snapshot::{EngagementSnapshot, SNAPSHOT_VERSION};

/// Owns and mutates all engagement state for one user.
pub struct EngagementTracker<R: Rng = StdRng> {
    progression: ProgressionState,
    streaks: StreakBook,
    quests: QuestRegistry,
    achievements: AchievementRegistry,
    companion: CompanionState,
    store_items: Vec<StoreItem>,
    rewards: RewardCatalog,
    goals: GoalBook,
    circle: CareCircle,
    unlocked_cosmetics: Vec<String>,
    survey: Option<SurveyData>,
    notifier: Box<dyn CircleNotifier>,
    rng: R,
}

impl EngagementTracker<StdRng> {
    /// Fresh tracker from configuration with an entropy-seeded RNG.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Fresh tracker with default configuration and a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(&AppConfig::default(), StdRng::seed_from_u64(seed))
    }

    /// Restore from the store, or start fresh if it is empty.
    pub fn load_or_new<S: StateStore + ?Sized>(
        store: &S,
        config: &AppConfig,
    ) -> Result<Self, EngagementError> {
        match store.load()? {
            Some(snapshot) => {
                tracing::info!(
                    "Restored engagement state saved at {}",
                    snapshot.saved_at.to_rfc3339()
                );
                Self::from_snapshot(snapshot, StdRng::from_entropy())
            }
            None => {
                tracing::info!("No saved engagement state, starting fresh");
                Ok(Self::new(config))
            }
        }
    }
}

impl<R: Rng> EngagementTracker<R> {
    /// Fresh tracker from configuration with a caller-supplied RNG.
    pub fn with_rng(config: &AppConfig, rng: R) -> Self {
        Self {
            progression: config.progression.initial_state(),
            streaks: StreakBook::new(config.streaks.reset),
            quests: QuestRegistry::default(),
            achievements: AchievementRegistry::default(),
            companion: config.companion.initial_state(),
            store_items: store::default_items(),
            rewards: RewardCatalog::default(),
            goals: GoalBook::new(),
            circle: CareCircle::new(),
            unlocked_cosmetics: Vec::new(),
            survey: None,
            notifier: Box::new(LogNotifier),
            rng,
        }
    }

    /// Restore from a snapshot.
    pub fn from_snapshot(snapshot: EngagementSnapshot, rng: R) -> Result<Self, EngagementError> {
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(EngagementError::SnapshotVersion(snapshot.version));
        }
        snapshot.progression.validate()?;

        let mut companion = snapshot.companion;
        if companion.clamp_gauges() {
            tracing::warn!("Stored companion gauges were out of range, clamped to 100");
        }

        Ok(Self {
            progression: snapshot.progression,
            streaks: snapshot.streaks,
            quests: snapshot.quests,
            achievements: snapshot.achievements,
            companion,
            store_items: snapshot.store_items,
            rewards: snapshot.rewards,
            goals: snapshot.goals,
            circle: snapshot.circle,
            unlocked_cosmetics: snapshot.unlocked_cosmetics,
            survey: snapshot.survey,
            notifier: Box::new(LogNotifier),
            rng,
        })
    }

    /// Replace the care-circle notifier.
    pub fn with_notifier(mut self, notifier: Box<dyn CircleNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Replace the seeded companion (e.g. with mock values for a demo).
    pub fn with_companion(mut self, companion: CompanionState) -> Self {
        self.companion = companion;
        self
    }

    /// Replace the starting progression.
    pub fn with_progression(mut self, progression: ProgressionState) -> Self {
        self.progression = progression;
        self
    }

    /// Replace the quest registry.
    pub fn with_quests(mut self, quests: QuestRegistry) -> Self {
        self.quests = quests;
        self
    }

    /// Capture all state for persistence.
    pub fn snapshot(&self) -> EngagementSnapshot {
        EngagementSnapshot {
            version: SNAPSHOT_VERSION,
            progression: self.progression.clone(),
            streaks: self.streaks.clone(),
            quests: self.quests.clone(),
            achievements: self.achievements.clone(),
            companion: self.companion.clone(),
            store_items: self.store_items.clone(),
            rewards: self.rewards.clone(),
            goals: self.goals.clone(),
            circle: self.circle.clone(),
            unlocked_cosmetics: self.unlocked_cosmetics.clone(),
            survey: self.survey.clone(),
            saved_at: chrono::Utc::now(),
        }
    }

    /// Persist the current state.
    pub fn save_to<S: StateStore + ?Sized>(&self, store: &mut S) -> Result<(), EngagementError> {
        store.save(&self.snapshot())?;
        Ok(())
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, EngagementError> {
        tracing::debug!("Dispatching {}", action.name());

        match action {
            Action::AwardXp { amount, reason } => {
                Ok(Outcome::XpAwarded(self.award_xp(amount, &reason)))
            }
            Action::AdvanceQuest { quest_id, delta } => {
                let (advance, level_up) = self.advance_quest(&quest_id, delta)?;
                Ok(Outcome::QuestAdvanced { advance, level_up })
            }
            Action::Companion { action } => {
                self.companion.perform(action)?;
                Ok(Outcome::CompanionUpdated {
                    action,
                    mood: self.companion.mood(),
                })
            }
            Action::Purchase { item_id } => {
                let delta = self.purchase(&item_id)?;
                Ok(Outcome::Purchased { item_id, delta })
            }
            Action::EarnCoins { amount, reason } => Ok(Outcome::CoinsEarned {
                balance: self.earn_coins(amount, &reason),
            }),
            Action::LogActivity { category, date } => Ok(Outcome::ActivityLogged {
                category,
                streak_days: self.log_activity(category, date),
            }),
            Action::CheckAchievement {
                achievement_id,
                value,
            } => {
                let earned_now = self.check_achievement(&achievement_id, value)?;
                Ok(Outcome::AchievementChecked {
                    achievement_id,
                    earned_now,
                })
            }
            Action::RedeemReward { reward_id } => {
                Ok(Outcome::RewardRedeemed(self.redeem_reward(&reward_id)?))
            }
        }
    }

    // ========== Named operations ==========

    /// Award XP and apply level-ups.
    pub fn award_xp(&mut self, amount: u32, reason: &str) -> LevelUp {
        self.progression.award_xp(amount, reason)
    }

    /// Advance a quest; completion pays XP and any extra reward once.
    pub fn advance_quest(
        &mut self,
        quest_id: &str,
        delta: u32,
    ) -> Result<(QuestAdvance, Option<LevelUp>), EngagementError> {
        let advance = self.quests.advance(quest_id, delta)?;

        let level_up = match &advance.completion {
            Some(completion) => {
                let level_up = self
                    .progression
                    .award_xp(completion.xp_reward, &completion.title);
                if let Some(reward) = &completion.reward {
                    self.apply_quest_reward(reward);
                }
                Some(level_up)
            }
            None => None,
        };

        Ok((advance, level_up))
    }

    /// Feed the companion.
    pub fn feed(&mut self) -> Result<(), EngagementError> {
        Ok(self.companion.perform(CompanionAction::Feed)?)
    }

    /// Play with the companion.
    pub fn play(&mut self) -> Result<(), EngagementError> {
        Ok(self.companion.perform(CompanionAction::Play)?)
    }

    /// Care for the companion.
    pub fn care(&mut self) -> Result<(), EngagementError> {
        Ok(self.companion.perform(CompanionAction::Care)?)
    }

    /// Buy an item from the companion store.
    pub fn purchase(&mut self, item_id: &str) -> Result<StatDelta, EngagementError> {
        let item = store::find_item(&self.store_items, item_id)
            .ok_or_else(|| CompanionError::ItemNotFound(item_id.to_string()))?;
        Ok(self.companion.purchase(item, &mut self.rng)?)
    }

    /// Add coins to the companion's balance. Returns the new balance.
    pub fn earn_coins(&mut self, amount: u32, reason: &str) -> u32 {
        self.companion.earn_coins(amount);
        tracing::debug!("Earned {} coins ({})", amount, reason);
        self.companion.coins
    }

    /// Record a qualifying log for a streak category.
    pub fn log_activity(&mut self, category: StreakCategory, date: NaiveDate) -> u32 {
        self.streaks.record(category, date)
    }

    /// Update a threshold achievement. Returns `true` on the call that earns it.
    pub fn check_achievement(&mut self, id: &str, value: f64) -> Result<bool, EngagementError> {
        Ok(self.achievements.check_and_award(id, value)?)
    }

    /// Redeem a reward against XP or coins.
    pub fn redeem_reward(&mut self, reward_id: &str) -> Result<Redemption, EngagementError> {
        let currency = self.rewards.get(reward_id)?.currency;
        let balance = match currency {
            Currency::Xp => &mut self.progression.current_xp,
            Currency::Coins => &mut self.companion.coins,
        };
        Ok(self.rewards.redeem(reward_id, balance)?)
    }

    /// Merge a partial privacy update.
    pub fn update_privacy_settings(&mut self, update: &PrivacyUpdate) -> &PrivacySettings {
        self.circle
            .update_privacy_settings(update, self.notifier.as_mut())
    }

    /// Invite someone to the care circle.
    pub fn invite_member(
        &mut self,
        email: &str,
        relationship: Relationship,
    ) -> Result<&CircleMember, EngagementError> {
        Ok(self
            .circle
            .invite_member(email, relationship, self.notifier.as_mut())?)
    }

    /// Mark an invited member as having accepted.
    pub fn accept_member(&mut self, email: &str) -> Result<&CircleMember, EngagementError> {
        Ok(self.circle.accept_member(email)?)
    }

    /// Join a team challenge.
    pub fn join_challenge(&mut self, challenge_id: &str) -> Result<(), EngagementError> {
        if self.quests.get(challenge_id).is_none() {
            tracing::debug!("Joining challenge {} not in the local quest catalog", challenge_id);
        }
        Ok(self
            .circle
            .join_challenge(challenge_id, self.notifier.as_mut())?)
    }

    fn apply_quest_reward(&mut self, reward: &QuestReward) {
        match reward {
            QuestReward::Cosmetic { item } => {
                if !self.unlocked_cosmetics.contains(item) {
                    tracing::info!("Unlocked cosmetic: {}", item);
                    self.unlocked_cosmetics.push(item.clone());
                }
            }
            QuestReward::Badge { achievement_id } => {
                if let Err(e) = self.achievements.award(achievement_id) {
                    tracing::warn!("Quest badge could not be awarded: {}", e);
                }
            }
        }
    }

    // ========== Read access ==========

    pub fn progression(&self) -> &ProgressionState {
        &self.progression
    }

    pub fn progression_mut(&mut self) -> &mut ProgressionState {
        &mut self.progression
    }

    pub fn streaks(&self) -> &StreakBook {
        &self.streaks
    }

    pub fn streaks_mut(&mut self) -> &mut StreakBook {
        &mut self.streaks
    }

    pub fn quests(&self) -> &QuestRegistry {
        &self.quests
    }

    pub fn achievements(&self) -> &AchievementRegistry {
        &self.achievements
    }

    pub fn achievements_mut(&mut self) -> &mut AchievementRegistry {
        &mut self.achievements
    }

    pub fn companion(&self) -> &CompanionState {
        &self.companion
    }

    pub fn store_items(&self) -> &[StoreItem] {
        &self.store_items
    }

    pub fn rewards(&self) -> &RewardCatalog {
        &self.rewards
    }

    pub fn goals(&self) -> &GoalBook {
        &self.goals
    }

    pub fn goals_mut(&mut self) -> &mut GoalBook {
        &mut self.goals
    }

    pub fn circle(&self) -> &CareCircle {
        &self.circle
    }

    pub fn unlocked_cosmetics(&self) -> &[String] {
        &self.unlocked_cosmetics
    }

    pub fn survey(&self) -> Option<&SurveyData> {
        self.survey.as_ref()
    }

    /// One-line status for logs and the CLI.
    pub fn summary(&self) -> String {
        let streak = self
            .streaks
            .longest_current()
            .map(|s| format!("{} {}d", s.category.as_str(), s.days))
            .unwrap_or_else(|| "none".to_string());

        format!(
            "level {} ({}/{} XP), {} coins, companion {} ({}), best streak {}, quests {}/{}, badges {}/{}",
            self.progression.level,
            self.progression.current_xp,
            self.progression.next_level_xp,
            self.companion.coins,
            self.companion.name,
            self.companion.mood(),
            streak,
            self.quests.completed_count(),
            self.quests.quests().len(),
            self.achievements.earned_count(),
            self.achievements.achievements().len(),
        )
    }
}

impl<R: Rng> SurveyHandoff for EngagementTracker<R> {
    fn on_complete(&mut self, data: &SurveyData) -> Result<(), SurveyError> {
        if let Err(e) = data.validate() {
            return Err(SurveyError::Handoff(format!("rejected incomplete survey: {}", e)));
        }
        if let Some(name) = &data.name {
            tracing::info!("Survey received for {}", name);
        }
        self.survey = Some(data.clone());
        Ok(())
    }
}
