//! User goal management.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::Goal;

/// Parse a numeric form field.
///
/// Rejects empty, non-numeric and non-finite input instead of letting it
/// degrade to NaN.
pub fn parse_amount(input: &str) -> Result<f64, GoalError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| GoalError::InvalidNumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(GoalError::InvalidNumber(trimmed.to_string()));
    }
    Ok(value)
}

/// In-memory collection of user goals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalBook {
    goals: Vec<Goal>,
}

impl GoalBook {
    /// Create an empty goal book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new goal.
    pub fn create(
        &mut self,
        title: &str,
        target: f64,
        unit: &str,
        deadline: NaiveDate,
    ) -> Result<&Goal, GoalError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(GoalError::ValidationError(
                "Goal title cannot be empty".to_string(),
            ));
        }
        if !target.is_finite() || target <= 0.0 {
            return Err(GoalError::ValidationError(
                "Goal target must be a positive number".to_string(),
            ));
        }

        let goal = Goal::new(title.to_string(), target, unit.trim().to_string(), deadline);
        tracing::debug!("Created goal '{}' ({} {})", goal.title, goal.target, goal.unit);
        self.goals.push(goal);

        let index = self.goals.len() - 1;
        Ok(&self.goals[index])
    }

    /// Get a goal by ID.
    pub fn get(&self, id: Uuid) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// All goals in creation order.
    pub fn all(&self) -> &[Goal] {
        &self.goals
    }

    /// Incomplete goals ordered by deadline.
    pub fn active(&self) -> Vec<&Goal> {
        let mut active: Vec<&Goal> = self.goals.iter().filter(|g| !g.completed).collect();
        active.sort_by_key(|g| g.deadline);
        active
    }

    /// Set a goal's current value.
    pub fn update_progress(&mut self, id: Uuid, current: f64) -> Result<&Goal, GoalError> {
        if !current.is_finite() {
            return Err(GoalError::ValidationError(
                "Progress must be a finite number".to_string(),
            ));
        }

        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(GoalError::NotFound(id))?;

        if goal.set_current(current) {
            tracing::info!("Goal completed: {}", goal.title);
        }
        Ok(&*goal)
    }

    /// Add to a goal's current value.
    pub fn add_progress(&mut self, id: Uuid, amount: f64) -> Result<&Goal, GoalError> {
        let current = self.get(id).ok_or(GoalError::NotFound(id))?.current;
        self.update_progress(id, current + amount)
    }

    /// Delete a goal.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        self.goals.len() < before
    }

    /// Goals past their deadline and not completed.
    pub fn overdue(&self, today: NaiveDate) -> Vec<&Goal> {
        self.goals.iter().filter(|g| g.is_overdue(today)).collect()
    }
}

/// Goal management errors.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Goal not found: {0}")]
    NotFound(Uuid),
}
