//! Quest and challenge registry.
//!
//! Quests are bounded progress tasks grouped into daily, weekly, monthly
//! and team buckets. Completion is terminal and pays out exactly once.

pub mod catalog;
pub mod types;

use serde::{Deserialize, Serialize};

pub use types::{Quest, QuestAdvance, QuestBucket, QuestCompletion, QuestError, QuestReward};

/// Registry of quests and their progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestRegistry {
    quests: Vec<Quest>,
}

impl Default for QuestRegistry {
    fn default() -> Self {
        Self {
            quests: catalog::default_quests(),
        }
    }
}

impl QuestRegistry {
    /// Create a registry from an explicit list of quests.
    pub fn from_quests(quests: Vec<Quest>) -> Result<Self, QuestError> {
        let mut registry = Self { quests: Vec::new() };
        for quest in quests {
            registry.insert(quest)?;
        }
        Ok(registry)
    }

    /// Add a quest to the registry.
    pub fn insert(&mut self, quest: Quest) -> Result<(), QuestError> {
        if self.quests.iter().any(|q| q.id == quest.id) {
            return Err(QuestError::DuplicateId(quest.id));
        }
        self.quests.push(quest);
        Ok(())
    }

    /// Get a quest by id.
    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    /// All quests.
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Quests in one bucket.
    pub fn by_bucket(&self, bucket: QuestBucket) -> Vec<&Quest> {
        self.quests.iter().filter(|q| q.bucket == bucket).collect()
    }

    /// Advance a quest by `delta` steps.
    ///
    /// Progress is clamped to the quest total. The call that reaches the total
    /// marks the quest complete and carries its payout; any later call is a
    /// no-op with no payout.
    pub fn advance(&mut self, id: &str, delta: u32) -> Result<QuestAdvance, QuestError> {
        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| QuestError::NotFound(id.to_string()))?;

        if quest.completed {
            return Ok(QuestAdvance {
                quest: quest.clone(),
                completion: None,
            });
        }

        quest.progress = quest.progress.saturating_add(delta).min(quest.total);

        let completion = if quest.progress >= quest.total {
            quest.completed = true;
            tracing::info!("Quest completed: {} (+{} XP)", quest.title, quest.xp_reward);
            Some(QuestCompletion {
                quest_id: quest.id.clone(),
                title: quest.title.clone(),
                xp_reward: quest.xp_reward,
                reward: quest.reward.clone(),
            })
        } else {
            None
        };

        Ok(QuestAdvance {
            quest: quest.clone(),
            completion,
        })
    }

    /// Number of completed quests.
    pub fn completed_count(&self) -> usize {
        self.quests.iter().filter(|q| q.completed).count()
    }

    /// Total XP still available from incomplete quests.
    pub fn pending_xp(&self) -> u32 {
        self.quests
            .iter()
            .filter(|q| !q.completed)
            .map(|q| q.xp_reward)
            .sum()
    }
}
