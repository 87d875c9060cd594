//! Companion store catalog.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::StatDelta;

/// Range of the Mystery Box roll (upper bound exclusive).
pub const MYSTERY_BOX_RANGE: std::ops::Range<i32> = 10..30;

/// What an item does when bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemEffect {
    /// Fixed gauge boost
    Boost(StatDelta),
    /// One random roll added to both health and happiness
    MysteryBox,
}

impl ItemEffect {
    /// Resolve the effect into a concrete delta.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> StatDelta {
        match self {
            ItemEffect::Boost(delta) => *delta,
            ItemEffect::MysteryBox => {
                let boost = rng.gen_range(MYSTERY_BOX_RANGE);
                StatDelta::new(boost, boost, 0)
            }
        }
    }

    /// Short description for the store card.
    pub fn describe(&self) -> String {
        match self {
            ItemEffect::Boost(delta) => {
                let mut parts = Vec::new();
                if delta.health != 0 {
                    parts.push(format!("{:+} health", delta.health));
                }
                if delta.happiness != 0 {
                    parts.push(format!("{:+} happiness", delta.happiness));
                }
                if delta.energy != 0 {
                    parts.push(format!("{:+} energy", delta.energy));
                }
                parts.join(", ")
            }
            ItemEffect::MysteryBox => format!(
                "+{}-{} health and happiness",
                MYSTERY_BOX_RANGE.start,
                MYSTERY_BOX_RANGE.end - 1
            ),
        }
    }
}

/// An item in the companion store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreItem {
    pub id: String,
    pub name: String,
    /// Price in coins
    pub cost: u32,
    pub effect: ItemEffect,
}

impl StoreItem {
    /// Item with a fixed boost.
    pub fn boost(id: &str, name: &str, cost: u32, delta: StatDelta) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            cost,
            effect: ItemEffect::Boost(delta),
        }
    }

    /// Mystery Box item.
    pub fn mystery_box(id: &str, name: &str, cost: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            cost,
            effect: ItemEffect::MysteryBox,
        }
    }
}

/// Built-in store catalog.
pub fn default_items() -> Vec<StoreItem> {
    vec![
        StoreItem::boost("healthy_treat", "Healthy Treat", 50, StatDelta::new(15, 5, 0)),
        StoreItem::boost("squeaky_toy", "Squeaky Toy", 40, StatDelta::new(0, 20, -5)),
        StoreItem::boost("cozy_bed", "Cozy Bed", 120, StatDelta::new(5, 5, 30)),
        StoreItem::boost("vitamin_pack", "Vitamin Pack", 80, StatDelta::new(20, 0, 10)),
        StoreItem::mystery_box("mystery_box", "Mystery Box", 75),
    ]
}

/// Find an item in a catalog by id.
pub fn find_item<'a>(items: &'a [StoreItem], id: &str) -> Option<&'a StoreItem> {
    items.iter().find(|item| item.id == id)
}
