//! Reward catalog redeemable against XP or coins.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Balance a reward is paid from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Xp,
    Coins,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Xp => write!(f, "XP"),
            Currency::Coins => write!(f, "coins"),
        }
    }
}

/// Whether a reward can be redeemed more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    /// Used up on redemption; can be bought again
    Consumable,
    /// Permanent unlock; owned at most once
    Unlock,
}

/// A redeemable reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub name: String,
    pub cost: u32,
    pub currency: Currency,
    pub kind: RewardKind,
    pub effect_description: String,
}

impl Reward {
    pub fn new(
        id: &str,
        name: &str,
        cost: u32,
        currency: Currency,
        kind: RewardKind,
        effect_description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            cost,
            currency,
            kind,
            effect_description: effect_description.to_string(),
        }
    }
}

/// Successful redemption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redemption {
    pub reward_id: String,
    pub cost: u32,
    pub currency: Currency,
    /// Balance left after paying
    pub remaining: u32,
}

/// Rewards on offer plus the unlocks the user already owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardCatalog {
    rewards: Vec<Reward>,
    owned: BTreeSet<String>,
}

impl Default for RewardCatalog {
    fn default() -> Self {
        Self::new(default_rewards())
    }
}

impl RewardCatalog {
    pub fn new(rewards: Vec<Reward>) -> Self {
        Self {
            rewards,
            owned: BTreeSet::new(),
        }
    }

    /// All rewards.
    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    /// Get a reward by id.
    pub fn get(&self, id: &str) -> Result<&Reward, RewardError> {
        self.rewards
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RewardError::NotFound(id.to_string()))
    }

    /// Whether an unlock is already owned.
    pub fn is_owned(&self, id: &str) -> bool {
        self.owned.contains(id)
    }

    /// Ids of owned unlocks.
    pub fn owned(&self) -> impl Iterator<Item = &str> {
        self.owned.iter().map(String::as_str)
    }

    /// Redeem a reward, paying from `balance`.
    ///
    /// The caller passes the balance matching the reward's currency. On
    /// failure neither the balance nor the owned set changes.
    pub fn redeem(&mut self, id: &str, balance: &mut u32) -> Result<Redemption, RewardError> {
        let reward = self.get(id)?.clone();

        if reward.kind == RewardKind::Unlock && self.owned.contains(&reward.id) {
            return Err(RewardError::AlreadyOwned(reward.id));
        }

        if *balance < reward.cost {
            tracing::warn!(
                "Cannot redeem {}: needs {} {}, have {}",
                reward.name,
                reward.cost,
                reward.currency,
                balance
            );
            return Err(RewardError::InsufficientBalance {
                needed: reward.cost,
                available: *balance,
                currency: reward.currency,
            });
        }

        *balance -= reward.cost;
        if reward.kind == RewardKind::Unlock {
            self.owned.insert(reward.id.clone());
        }
        tracing::info!("Redeemed {} for {} {}", reward.name, reward.cost, reward.currency);

        Ok(Redemption {
            reward_id: reward.id,
            cost: reward.cost,
            currency: reward.currency,
            remaining: *balance,
        })
    }
}

/// Built-in rewards.
pub fn default_rewards() -> Vec<Reward> {
    vec![
        Reward::new(
            "streak_freeze",
            "Streak Freeze",
            500,
            Currency::Xp,
            RewardKind::Consumable,
            "Protects one streak for a missed day",
        ),
        Reward::new(
            "recipe_pack",
            "Low-Carb Recipe Pack",
            1500,
            Currency::Xp,
            RewardKind::Unlock,
            "Unlocks 20 diabetes-friendly recipes",
        ),
        Reward::new(
            "dark_theme",
            "Midnight Theme",
            1000,
            Currency::Xp,
            RewardKind::Unlock,
            "Unlocks the midnight app theme",
        ),
        Reward::new(
            "pet_hat",
            "Party Hat",
            200,
            Currency::Coins,
            RewardKind::Unlock,
            "A festive hat for your companion",
        ),
        Reward::new(
            "double_coins",
            "Double Coins (1 day)",
            300,
            Currency::Coins,
            RewardKind::Consumable,
            "Doubles coins earned for 24 hours",
        ),
    ]
}

/// Reward errors.
#[derive(Debug, thiserror::Error)]
pub enum RewardError {
    #[error("Reward not found: {0}")]
    NotFound(String),

    #[error("Reward already owned: {0}")]
    AlreadyOwned(String),

    #[error("Not enough {currency}: need {needed}, have {available}")]
    InsufficientBalance {
        needed: u32,
        available: u32,
        currency: Currency,
    },
}
