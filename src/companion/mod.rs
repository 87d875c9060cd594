//! Virtual companion (pet) with bounded gauges and a coin economy.
//!
//! Health, happiness and energy are clamped to 0..=100 after every change.
//! Each action has a coin price; when the balance is short the action is
//! rejected and nothing changes.

pub mod mood;
pub mod store;

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use mood::Mood;
pub use store::{ItemEffect, StoreItem};

/// Upper bound for every gauge.
pub const GAUGE_MAX: u8 = 100;

/// Care action the user can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanionAction {
    Feed,
    Play,
    Care,
}

impl CompanionAction {
    /// Coin price of the action.
    pub fn cost(&self) -> u32 {
        match self {
            CompanionAction::Feed => 25,
            CompanionAction::Play => 15,
            CompanionAction::Care => 35,
        }
    }

    /// Gauge deltas as (health, happiness, energy).
    pub fn effect(&self) -> StatDelta {
        match self {
            CompanionAction::Feed => StatDelta::new(10, 5, 0),
            CompanionAction::Play => StatDelta::new(0, 15, -10),
            CompanionAction::Care => StatDelta::new(5, 10, 15),
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CompanionAction::Feed => "Feed",
            CompanionAction::Play => "Play",
            CompanionAction::Care => "Care",
        }
    }
}

impl std::fmt::Display for CompanionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Signed change to the three gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatDelta {
    pub health: i32,
    pub happiness: i32,
    pub energy: i32,
}

impl StatDelta {
    pub const fn new(health: i32, happiness: i32, energy: i32) -> Self {
        Self {
            health,
            happiness,
            energy,
        }
    }
}

/// The companion's gauges and coin balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionState {
    /// Display name
    pub name: String,
    pub health: u8,
    pub happiness: u8,
    pub energy: u8,
    pub level: u32,
    pub coins: u32,
}

impl Default for CompanionState {
    fn default() -> Self {
        Self {
            name: "Sugar".to_string(),
            health: 75,
            happiness: 75,
            energy: 75,
            level: 1,
            coins: 100,
        }
    }
}

impl CompanionState {
    /// Create a companion with explicit gauges; values above 100 are clamped.
    pub fn new(health: u8, happiness: u8, energy: u8, coins: u32) -> Self {
        Self {
            health: health.min(GAUGE_MAX),
            happiness: happiness.min(GAUGE_MAX),
            energy: energy.min(GAUGE_MAX),
            coins,
            ..Default::default()
        }
    }

    /// Feed the companion.
    pub fn feed(&mut self) -> Result<(), CompanionError> {
        self.perform(CompanionAction::Feed)
    }

    /// Play with the companion.
    pub fn play(&mut self) -> Result<(), CompanionError> {
        self.perform(CompanionAction::Play)
    }

    /// Groom and care for the companion.
    pub fn care(&mut self) -> Result<(), CompanionError> {
        self.perform(CompanionAction::Care)
    }

    /// Run a care action: charge its cost, then apply its effect.
    pub fn perform(&mut self, action: CompanionAction) -> Result<(), CompanionError> {
        self.charge(action.cost(), action.display_name())?;
        self.apply(action.effect());
        tracing::debug!(
            "{} {}: health={} happiness={} energy={} coins={}",
            action,
            self.name,
            self.health,
            self.happiness,
            self.energy,
            self.coins
        );
        Ok(())
    }

    /// Buy a store item and apply its effect.
    ///
    /// Returns the delta that was applied (before clamping).
    pub fn purchase<R: Rng + ?Sized>(
        &mut self,
        item: &StoreItem,
        rng: &mut R,
    ) -> Result<StatDelta, CompanionError> {
        self.charge(item.cost, &item.name)?;
        let delta = item.effect.roll(rng);
        self.apply(delta);
        tracing::debug!("Purchased {} for {} coins", item.name, item.cost);
        Ok(delta)
    }

    /// Add coins earned elsewhere.
    pub fn earn_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Deduct coins without touching the gauges.
    pub fn spend_coins(&mut self, amount: u32) -> Result<(), CompanionError> {
        self.charge(amount, "purchase")
    }

    /// Whether the balance covers `cost`.
    pub fn can_afford(&self, cost: u32) -> bool {
        self.coins >= cost
    }

    /// Pull any gauge above 100 back into range.
    ///
    /// Returns `true` if a gauge was changed.
    pub fn clamp_gauges(&mut self) -> bool {
        let before = (self.health, self.happiness, self.energy);
        self.health = self.health.min(GAUGE_MAX);
        self.happiness = self.happiness.min(GAUGE_MAX);
        self.energy = self.energy.min(GAUGE_MAX);
        before != (self.health, self.happiness, self.energy)
    }

    /// Message for the given day, rotating through the current mood's lines.
    pub fn daily_message(&self, date: NaiveDate) -> &'static str {
        self.mood().message(date.ordinal0() as usize)
    }

    /// Mood derived from happiness.
    pub fn mood(&self) -> Mood {
        Mood::from_happiness(self.happiness)
    }

    /// Apply a delta, clamping every gauge to 0..=100.
    pub fn apply(&mut self, delta: StatDelta) {
        self.health = clamp_gauge(self.health, delta.health);
        self.happiness = clamp_gauge(self.happiness, delta.happiness);
        self.energy = clamp_gauge(self.energy, delta.energy);
    }

    fn charge(&mut self, cost: u32, what: &str) -> Result<(), CompanionError> {
        if self.coins < cost {
            tracing::warn!(
                "Rejected {}: needs {} coins, have {}",
                what,
                cost,
                self.coins
            );
            return Err(CompanionError::InsufficientCoins {
                needed: cost,
                available: self.coins,
            });
        }
        self.coins -= cost;
        Ok(())
    }
}

fn clamp_gauge(value: u8, delta: i32) -> u8 {
    (value as i32 + delta).clamp(0, GAUGE_MAX as i32) as u8
}

/// Companion errors.
#[derive(Debug, thiserror::Error)]
pub enum CompanionError {
    #[error("Not enough coins: need {needed}, have {available}")]
    InsufficientCoins { needed: u32, available: u32 },

    #[error("Store item not found: {0}")]
    ItemNotFound(String),
}
