//! Per-category logging streaks.
//!
//! One streak per logging category (glucose, hydration, mood, meals,
//! exercise, journal), each counting consecutive days with at least one log.

pub mod types;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use types::{Streak, StreakCategory, StreakReset};

/// All streaks for one user, one entry per category.
///
/// Entries are stored in [`StreakCategory::all`] order and looked up by
/// position, so deserialization goes through [`StoredStreakBook`] to restore
/// that layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StoredStreakBook")]
pub struct StreakBook {
    streaks: Vec<Streak>,
    reset: StreakReset,
}

/// Streak book as found on disk; entries may be missing, duplicated or out of order.
#[derive(Deserialize)]
struct StoredStreakBook {
    #[serde(default)]
    streaks: Vec<Streak>,
    #[serde(default)]
    reset: StreakReset,
}

impl From<StoredStreakBook> for StreakBook {
    fn from(stored: StoredStreakBook) -> Self {
        let mut book = StreakBook::new(stored.reset);
        let mut seen = vec![false; StreakCategory::all().len()];

        for entry in stored.streaks {
            let index = entry.category.index();
            if seen[index] {
                tracing::warn!("Dropping duplicate {} streak entry", entry.category);
                continue;
            }
            seen[index] = true;
            book.streaks[index] = entry;
        }

        for category in StreakCategory::all() {
            if !seen[category.index()] {
                tracing::warn!("No stored {} streak, starting at zero", category);
            }
        }
        book
    }
}

impl Default for StreakBook {
    fn default() -> Self {
        Self::new(StreakReset::default())
    }
}

impl StreakBook {
    /// Create a book with a zeroed streak for every category.
    pub fn new(reset: StreakReset) -> Self {
        Self {
            streaks: StreakCategory::all().iter().map(|c| Streak::new(*c)).collect(),
            reset,
        }
    }

    /// Reset policy in effect.
    pub fn reset_policy(&self) -> StreakReset {
        self.reset
    }

    /// Change the reset policy.
    pub fn set_reset_policy(&mut self, reset: StreakReset) {
        self.reset = reset;
    }

    /// Get the streak for a category.
    pub fn get(&self, category: StreakCategory) -> &Streak {
        // Every category is present from construction
        &self.streaks[category.index()]
    }

    /// All streaks in category order.
    pub fn all(&self) -> &[Streak] {
        &self.streaks
    }

    /// Add one day to a category without any date bookkeeping.
    pub fn increment(&mut self, category: StreakCategory) -> u32 {
        let streak = &mut self.streaks[category.index()];
        streak.days += 1;
        streak.best = streak.best.max(streak.days);
        streak.days
    }

    /// Record a qualifying log for a category on `date`.
    ///
    /// Returns the streak length after the log.
    pub fn record(&mut self, category: StreakCategory, date: NaiveDate) -> u32 {
        let reset = self.reset;
        let streak = &mut self.streaks[category.index()];

        let days = match streak.last_logged {
            None => 1,
            Some(last) => match (date - last).num_days() {
                // Same day or a back-dated log: already counted
                d if d <= 0 => streak.days,
                1 => streak.days + 1,
                _ => match reset {
                    StreakReset::MissedDay => {
                        tracing::debug!(
                            "{} streak broken after {} days",
                            category,
                            streak.days
                        );
                        1
                    }
                    StreakReset::Never => streak.days + 1,
                },
            },
        };

        streak.days = days;
        streak.best = streak.best.max(days);
        if streak.last_logged.map_or(true, |last| date > last) {
            streak.last_logged = Some(date);
        }
        days
    }

    /// Zero out streaks whose last log is older than yesterday.
    ///
    /// Returns the categories that were reset. No-op under [`StreakReset::Never`].
    pub fn expire(&mut self, today: NaiveDate) -> Vec<StreakCategory> {
        if self.reset == StreakReset::Never {
            return Vec::new();
        }

        let mut expired = Vec::new();
        for streak in &mut self.streaks {
            if streak.is_broken(today) && streak.days > 0 {
                streak.days = 0;
                expired.push(streak.category);
            }
        }
        expired
    }

    /// Longest current streak across all categories.
    pub fn longest_current(&self) -> Option<&Streak> {
        self.streaks.iter().filter(|s| s.days > 0).max_by_key(|s| s.days)
    }
}
