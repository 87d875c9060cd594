//! Streak type definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Logging category that carries a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakCategory {
    Glucose,
    Hydration,
    Mood,
    Meals,
    Exercise,
    Journal,
}

impl StreakCategory {
    /// Get all categories in display order.
    pub fn all() -> &'static [StreakCategory] {
        &[
            StreakCategory::Glucose,
            StreakCategory::Hydration,
            StreakCategory::Mood,
            StreakCategory::Meals,
            StreakCategory::Exercise,
            StreakCategory::Journal,
        ]
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            StreakCategory::Glucose => 0,
            StreakCategory::Hydration => 1,
            StreakCategory::Mood => 2,
            StreakCategory::Meals => 3,
            StreakCategory::Exercise => 4,
            StreakCategory::Journal => 5,
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            StreakCategory::Glucose => "Glucose Checks",
            StreakCategory::Hydration => "Hydration",
            StreakCategory::Mood => "Mood Check-ins",
            StreakCategory::Meals => "Meal Logging",
            StreakCategory::Exercise => "Exercise",
            StreakCategory::Journal => "Journaling",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StreakCategory::Glucose => "glucose",
            StreakCategory::Hydration => "hydration",
            StreakCategory::Mood => "mood",
            StreakCategory::Meals => "meals",
            StreakCategory::Exercise => "exercise",
            StreakCategory::Journal => "journal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "glucose" => Some(StreakCategory::Glucose),
            "hydration" => Some(StreakCategory::Hydration),
            "mood" => Some(StreakCategory::Mood),
            "meals" => Some(StreakCategory::Meals),
            "exercise" => Some(StreakCategory::Exercise),
            "journal" => Some(StreakCategory::Journal),
            _ => None,
        }
    }
}

impl std::fmt::Display for StreakCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// What happens to a streak after a day without a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakReset {
    /// A missed day breaks the streak
    #[default]
    MissedDay,
    /// Streaks only ever grow
    Never,
}

/// Consecutive-day count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub category: StreakCategory,
    /// Current run length in days
    pub days: u32,
    /// Longest run seen
    pub best: u32,
    /// Day of the most recent qualifying log
    pub last_logged: Option<NaiveDate>,
}

impl Streak {
    /// Create an empty streak.
    pub fn new(category: StreakCategory) -> Self {
        Self {
            category,
            days: 0,
            best: 0,
            last_logged: None,
        }
    }

    /// Whether the streak can no longer be continued by logging `today`.
    pub fn is_broken(&self, today: NaiveDate) -> bool {
        self.last_logged
            .map(|last| (today - last).num_days() > 1)
            .unwrap_or(false)
    }

    /// Whether today's log is still outstanding.
    pub fn is_at_risk(&self, today: NaiveDate) -> bool {
        self.last_logged
            .map(|last| (today - last).num_days() == 1)
            .unwrap_or(false)
    }
}
