//! Onboarding survey for first-time users.
//!
//! A linear seven-step wizard collecting demographic, medical and
//! lifestyle answers into one [`SurveyData`] record. Next checks that the
//! current step's required fields are filled; the finished record is passed
//! to a [`SurveyHandoff`].

pub mod steps;
pub mod survey;

use serde::{Deserialize, Serialize};

// Re-export types
pub use steps::OnboardingStep;
pub use survey::{
    ActivityLevel, DiabetesType, FocusArea, MonitoringMethod, SurveyData, SurveyError,
    SurveyHandoff, Treatment,
};

/// State of the onboarding wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingState {
    /// Whether onboarding has been completed
    pub completed: bool,
    /// Current step in the wizard
    pub current_step: OnboardingStep,
    /// Steps that have been completed
    pub completed_steps: Vec<OnboardingStep>,
}

impl OnboardingState {
    /// Check if a specific step is complete.
    pub fn is_step_complete(&self, step: OnboardingStep) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Get progress as a percentage (0-100).
    pub fn progress_percent(&self) -> u8 {
        let total = OnboardingStep::all().len();
        let completed = self.completed_steps.len();
        ((completed * 100) / total) as u8
    }
}

/// Onboarding wizard controller.
#[derive(Debug, Clone, Default)]
pub struct OnboardingWizard {
    state: OnboardingState,
    data: SurveyData,
}

impl OnboardingWizard {
    /// Create a new onboarding wizard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state.
    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    /// Answers collected so far.
    pub fn data(&self) -> &SurveyData {
        &self.data
    }

    /// Answers for the form to fill in.
    pub fn data_mut(&mut self) -> &mut SurveyData {
        &mut self.data
    }

    /// Get the current step.
    pub fn current_step(&self) -> OnboardingStep {
        self.state.current_step
    }

    /// Validate the current step and move to the next one.
    ///
    /// On the final step this only validates; use [`Self::finish`] to submit.
    pub fn next_step(&mut self) -> Result<OnboardingStep, SurveyError> {
        let step = self.state.current_step;
        self.data.validate_step(step)?;

        if !self.state.completed_steps.contains(&step) {
            self.state.completed_steps.push(step);
        }
        if let Some(next) = step.next() {
            self.state.current_step = next;
        }
        Ok(self.state.current_step)
    }

    /// Go back to the previous step. Answers are kept.
    pub fn previous_step(&mut self) -> OnboardingStep {
        if let Some(prev) = self.state.current_step.previous() {
            self.state.current_step = prev;
        }
        self.state.current_step
    }

    /// Validate everything and hand the record off.
    pub fn finish<H: SurveyHandoff + ?Sized>(
        &mut self,
        handoff: &mut H,
    ) -> Result<SurveyData, SurveyError> {
        if !self.state.current_step.is_last() {
            return Err(SurveyError::NotFinished);
        }
        self.data.validate()?;
        handoff.on_complete(&self.data)?;

        if !self.state.completed_steps.contains(&OnboardingStep::Goals) {
            self.state.completed_steps.push(OnboardingStep::Goals);
        }
        self.state.completed = true;
        tracing::info!("Onboarding survey completed");
        Ok(self.data.clone())
    }

    /// Start over with empty answers.
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// Check if onboarding is complete.
    pub fn is_complete(&self) -> bool {
        self.state.completed
    }
}
