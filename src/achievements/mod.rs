//! Achievement badges.

pub mod definitions;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Badge rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Bronze,
    Silver,
    Gold,
    Platinum,
    /// Event or one-off badges
    Special,
}

impl Rarity {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Special => "Special",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Achievement definition and state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable key
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Rarity tier
    pub rarity: Rarity,
    /// Icon name
    pub icon: String,
    /// Metric value that earns the badge (manual badges have none)
    pub threshold: Option<f64>,
    /// Whether earned
    pub earned: bool,
    /// Displayed progress (0..100) for threshold badges
    pub progress: Option<u8>,
    /// When earned
    pub earned_at: Option<DateTime<Utc>>,
}

impl Achievement {
    /// Create a new manual achievement
    pub fn new(id: &str, name: &str, description: &str, rarity: Rarity) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            rarity,
            icon: format!("badge_{}", id),
            threshold: None,
            earned: false,
            progress: None,
            earned_at: None,
        }
    }

    /// Set the metric threshold for progress tracking
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self.progress = Some(0);
        self
    }

    fn mark_earned(&mut self) {
        self.earned = true;
        self.earned_at = Some(Utc::now());
        if self.threshold.is_some() {
            self.progress = Some(100);
        }
    }
}

/// Registry of all achievements and their earned state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementRegistry {
    achievements: Vec<Achievement>,
}

impl Default for AchievementRegistry {
    fn default() -> Self {
        Self {
            achievements: definitions::all_achievements(),
        }
    }
}

impl AchievementRegistry {
    /// Create registry from explicit definitions
    pub fn from_achievements(achievements: Vec<Achievement>) -> Self {
        Self { achievements }
    }

    /// Get all achievements
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Get an achievement by id
    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Get achievements of one rarity
    pub fn by_rarity(&self, rarity: Rarity) -> Vec<&Achievement> {
        self.achievements
            .iter()
            .filter(|a| a.rarity == rarity)
            .collect()
    }

    /// Update a threshold achievement from the current metric value.
    ///
    /// Returns `true` only on the call that earns the badge.
    pub fn check_and_award(&mut self, id: &str, metric_value: f64) -> Result<bool, AchievementError> {
        let achievement = self
            .achievements
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AchievementError::NotFound(id.to_string()))?;

        if achievement.earned {
            return Ok(false);
        }

        let Some(threshold) = achievement.threshold else {
            return Err(AchievementError::NoThreshold(id.to_string()));
        };

        let percent = if threshold <= 0.0 {
            100.0
        } else {
            (metric_value / threshold * 100.0).clamp(0.0, 100.0)
        };
        achievement.progress = Some(percent as u8);

        if metric_value >= threshold {
            achievement.mark_earned();
            tracing::info!("Achievement earned: {} ({})", achievement.name, achievement.rarity);
            return Ok(true);
        }

        Ok(false)
    }

    /// Flag an achievement earned regardless of progress.
    ///
    /// Returns `false` if it was already earned.
    pub fn award(&mut self, id: &str) -> Result<bool, AchievementError> {
        let achievement = self
            .achievements
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AchievementError::NotFound(id.to_string()))?;

        if achievement.earned {
            return Ok(false);
        }

        achievement.mark_earned();
        tracing::info!("Achievement earned: {} ({})", achievement.name, achievement.rarity);
        Ok(true)
    }

    /// Get earned count
    pub fn earned_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.earned).count()
    }

    /// Get completion percentage
    pub fn completion_percent(&self) -> f32 {
        if self.achievements.is_empty() {
            return 0.0;
        }
        (self.earned_count() as f32 / self.achievements.len() as f32) * 100.0
    }
}

/// Achievement errors.
#[derive(Debug, thiserror::Error)]
pub enum AchievementError {
    #[error("Achievement not found: {0}")]
    NotFound(String),

    #[error("Achievement {0} has no metric threshold")]
    NoThreshold(String),
}
