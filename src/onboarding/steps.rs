//! Onboarding survey steps.

use serde::{Deserialize, Serialize};

/// Steps in the onboarding survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OnboardingStep {
    /// Name and age
    #[default]
    BasicInfo,
    /// Diabetes type and diagnosis year
    DiabetesProfile,
    /// Insulin, oral medication, lifestyle
    Treatment,
    /// CGM or meter, target range
    Monitoring,
    /// Activity level and diet
    Lifestyle,
    /// Stress and sleep
    Wellbeing,
    /// What the user wants to work on
    Goals,
}

impl OnboardingStep {
    /// Get all steps in order.
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::BasicInfo,
            OnboardingStep::DiabetesProfile,
            OnboardingStep::Treatment,
            OnboardingStep::Monitoring,
            OnboardingStep::Lifestyle,
            OnboardingStep::Wellbeing,
            OnboardingStep::Goals,
        ]
    }

    /// Get the step index (0-based).
    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    /// Get the next step, if any.
    pub fn next(&self) -> Option<OnboardingStep> {
        Self::all().get(self.index() + 1).copied()
    }

    /// Get the previous step, if any.
    pub fn previous(&self) -> Option<OnboardingStep> {
        let idx = self.index();
        if idx > 0 {
            Some(Self::all()[idx - 1])
        } else {
            None
        }
    }

    /// Get the title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::BasicInfo => "About You",
            OnboardingStep::DiabetesProfile => "Your Diabetes",
            OnboardingStep::Treatment => "Treatment",
            OnboardingStep::Monitoring => "Monitoring",
            OnboardingStep::Lifestyle => "Lifestyle",
            OnboardingStep::Wellbeing => "Wellbeing",
            OnboardingStep::Goals => "Your Goals",
        }
    }

    /// Get the description for this step.
    pub fn description(&self) -> &'static str {
        match self {
            OnboardingStep::BasicInfo => "Tell us a little about yourself.",
            OnboardingStep::DiabetesProfile => "What type of diabetes do you manage?",
            OnboardingStep::Treatment => "How do you currently manage your glucose?",
            OnboardingStep::Monitoring => "How do you check your glucose, and what is your target range?",
            OnboardingStep::Lifestyle => "How active are you on a typical week?",
            OnboardingStep::Wellbeing => "How are your stress levels and sleep lately?",
            OnboardingStep::Goals => "Pick the areas you want FlowSense to help with.",
        }
    }

    /// Check if this is the first step.
    pub fn is_first(&self) -> bool {
        *self == OnboardingStep::BasicInfo
    }

    /// Check if this is the last step.
    pub fn is_last(&self) -> bool {
        *self == OnboardingStep::Goals
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
