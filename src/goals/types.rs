//! User-defined goal types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A goal the user set for themselves (e.g. "walk 10,000 steps").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Value to reach
    pub target: f64,
    /// Value reached so far
    pub current: f64,
    /// Free-form unit label ("steps", "mg/dL", "glasses")
    pub unit: String,
    /// Day the goal should be reached by
    pub deadline: NaiveDate,
    /// Whether `current` has reached `target`
    pub completed: bool,
    /// When the goal was created
    pub created_at: DateTime<Utc>,
    /// When the goal was last updated
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal with zero progress.
    pub fn new(title: String, target: f64, unit: String, deadline: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            target,
            current: 0.0,
            unit,
            deadline,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the current value and recompute completion.
    ///
    /// Returns `true` if this update completed the goal.
    pub fn set_current(&mut self, value: f64) -> bool {
        let was_completed = self.completed;
        self.current = value;
        self.completed = self.current >= self.target;
        self.updated_at = Utc::now();
        self.completed && !was_completed
    }

    /// Get progress percentage (0-100).
    pub fn progress_percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).clamp(0.0, 100.0)
    }

    /// Remaining amount (0 once completed).
    pub fn remaining(&self) -> f64 {
        (self.target - self.current).max(0.0)
    }

    /// Days until the deadline (negative once past).
    pub fn days_until_deadline(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }

    /// Whether the deadline has passed without completion.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.days_until_deadline(today) < 0
    }
}
