//! Survey answers collected during onboarding.

use serde::{Deserialize, Serialize};

use super::steps::OnboardingStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiabetesType {
    Type1,
    Type2,
    Gestational,
    Prediabetes,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    Insulin,
    OralMedication,
    InsulinAndOral,
    LifestyleOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringMethod {
    /// Continuous glucose monitor
    Cgm,
    /// Finger-stick meter
    Meter,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    GlucoseControl,
    WeightManagement,
    Fitness,
    Nutrition,
    StressReduction,
    Sleep,
}

/// Everything the onboarding survey collects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyData {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub diabetes_type: Option<DiabetesType>,
    pub diagnosis_year: Option<u16>,
    pub treatment: Option<Treatment>,
    pub medications: Vec<String>,
    pub monitoring: Option<MonitoringMethod>,
    /// Lower bound of target range in mg/dL
    pub target_low: Option<u16>,
    /// Upper bound of target range in mg/dL
    pub target_high: Option<u16>,
    pub activity_level: Option<ActivityLevel>,
    pub diet: Option<String>,
    /// Self-rated stress, 1-10
    pub stress_level: Option<u8>,
    pub sleep_hours: Option<f32>,
    pub focus_areas: Vec<FocusArea>,
}

impl SurveyData {
    /// Check the fields a step requires.
    pub fn validate_step(&self, step: OnboardingStep) -> Result<(), SurveyError> {
        match step {
            OnboardingStep::BasicInfo => {
                match self.name.as_deref().map(str::trim) {
                    Some(name) if !name.is_empty() => {}
                    _ => return Err(SurveyError::MissingField("name")),
                }
                let age = self.age.ok_or(SurveyError::MissingField("age"))?;
                if !(1..=120).contains(&age) {
                    return Err(SurveyError::InvalidField {
                        field: "age",
                        reason: "must be between 1 and 120".to_string(),
                    });
                }
            }
            OnboardingStep::DiabetesProfile => {
                self.diabetes_type
                    .ok_or(SurveyError::MissingField("diabetes_type"))?;
                if let Some(year) = self.diagnosis_year {
                    if year < 1900 {
                        return Err(SurveyError::InvalidField {
                            field: "diagnosis_year",
                            reason: format!("{} is not a plausible year", year),
                        });
                    }
                }
            }
            OnboardingStep::Treatment => {
                self.treatment.ok_or(SurveyError::MissingField("treatment"))?;
            }
            OnboardingStep::Monitoring => {
                self.monitoring.ok_or(SurveyError::MissingField("monitoring"))?;
                if let (Some(low), Some(high)) = (self.target_low, self.target_high) {
                    if low >= high {
                        return Err(SurveyError::InvalidField {
                            field: "target_range",
                            reason: "low bound must be below high bound".to_string(),
                        });
                    }
                }
            }
            OnboardingStep::Lifestyle => {
                self.activity_level
                    .ok_or(SurveyError::MissingField("activity_level"))?;
            }
            OnboardingStep::Wellbeing => {
                let stress = self
                    .stress_level
                    .ok_or(SurveyError::MissingField("stress_level"))?;
                if !(1..=10).contains(&stress) {
                    return Err(SurveyError::InvalidField {
                        field: "stress_level",
                        reason: "must be between 1 and 10".to_string(),
                    });
                }
            }
            OnboardingStep::Goals => {
                if self.focus_areas.is_empty() {
                    return Err(SurveyError::MissingField("focus_areas"));
                }
            }
        }
        Ok(())
    }

    /// Check every step.
    pub fn validate(&self) -> Result<(), SurveyError> {
        OnboardingStep::all()
            .iter()
            .try_for_each(|step| self.validate_step(*step))
    }
}

/// Receives the finished survey (persistence, profile service, ...).
pub trait SurveyHandoff {
    fn on_complete(&mut self, data: &SurveyData) -> Result<(), SurveyError>;
}

/// Survey errors.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Survey is not on its final step")]
    NotFinished,

    #[error("Survey handoff failed: {0}")]
    Handoff(String),
}
