//! Integration tests for the onboarding survey.
//!
//! Walks the wizard through all seven steps and hands the finished survey
//! to the engagement tracker.

use flowsense::engine::EngagementTracker;
use flowsense::onboarding::{
    ActivityLevel, DiabetesType, FocusArea, MonitoringMethod, OnboardingStep, OnboardingWizard,
    SurveyData, SurveyError, SurveyHandoff, Treatment,
};

fn fill(data: &mut SurveyData) {
    data.name = Some("Jordan".to_string());
    data.age = Some(34);
    data.diabetes_type = Some(DiabetesType::Type1);
    data.diagnosis_year = Some(2012);
    data.treatment = Some(Treatment::Insulin);
    data.monitoring = Some(MonitoringMethod::Cgm);
    data.target_low = Some(70);
    data.target_high = Some(180);
    data.activity_level = Some(ActivityLevel::Moderate);
    data.stress_level = Some(4);
    data.sleep_hours = Some(7.5);
    data.focus_areas = vec![FocusArea::GlucoseControl, FocusArea::Sleep];
}

/// Handoff that always fails, e.g. an unreachable profile service.
struct FailingHandoff;

impl SurveyHandoff for FailingHandoff {
    fn on_complete(&mut self, _data: &SurveyData) -> Result<(), SurveyError> {
        Err(SurveyError::Handoff("service unavailable".to_string()))
    }
}

#[test]
fn test_full_wizard_hands_off_to_tracker() {
    let mut wizard = OnboardingWizard::new();
    let mut tracker = EngagementTracker::seeded(3);
    fill(wizard.data_mut());

    while !wizard.current_step().is_last() {
        wizard.next_step().unwrap();
    }
    assert_eq!(wizard.current_step(), OnboardingStep::Goals);

    let data = wizard.finish(&mut tracker).unwrap();
    assert!(wizard.is_complete());
    assert_eq!(wizard.state().progress_percent(), 100);
    assert_eq!(tracker.survey(), Some(&data));
    assert_eq!(tracker.survey().and_then(|s| s.name.as_deref()), Some("Jordan"));
}

#[test]
fn test_next_blocked_by_missing_field() {
    let mut wizard = OnboardingWizard::new();
    wizard.data_mut().name = Some("Sam".to_string());

    assert!(matches!(
        wizard.next_step(),
        Err(SurveyError::MissingField("age"))
    ));
    assert_eq!(wizard.current_step(), OnboardingStep::BasicInfo);
}

#[test]
fn test_invalid_target_range() {
    let mut wizard = OnboardingWizard::new();
    fill(wizard.data_mut());
    wizard.data_mut().target_low = Some(200);

    for _ in 0..3 {
        wizard.next_step().unwrap();
    }
    assert_eq!(wizard.current_step(), OnboardingStep::Monitoring);
    assert!(matches!(
        wizard.next_step(),
        Err(SurveyError::InvalidField {
            field: "target_range",
            ..
        })
    ));
}

#[test]
fn test_back_keeps_answers() {
    let mut wizard = OnboardingWizard::new();
    fill(wizard.data_mut());
    wizard.next_step().unwrap();
    wizard.next_step().unwrap();

    assert_eq!(wizard.previous_step(), OnboardingStep::DiabetesProfile);
    assert_eq!(wizard.data().diabetes_type, Some(DiabetesType::Type1));
    assert!(wizard.state().is_step_complete(OnboardingStep::BasicInfo));
}

#[test]
fn test_finish_before_last_step() {
    let mut wizard = OnboardingWizard::new();
    let mut tracker = EngagementTracker::seeded(3);
    fill(wizard.data_mut());

    assert!(matches!(
        wizard.finish(&mut tracker),
        Err(SurveyError::NotFinished)
    ));
    assert!(tracker.survey().is_none());
}

#[test]
fn test_failed_handoff_leaves_wizard_open() {
    let mut wizard = OnboardingWizard::new();
    fill(wizard.data_mut());
    while !wizard.current_step().is_last() {
        wizard.next_step().unwrap();
    }

    assert!(matches!(
        wizard.finish(&mut FailingHandoff),
        Err(SurveyError::Handoff(_))
    ));
    assert!(!wizard.is_complete());
}

#[test]
fn test_tracker_rejects_incomplete_survey() {
    let mut tracker = EngagementTracker::seeded(3);

    assert!(matches!(
        tracker.on_complete(&SurveyData::default()),
        Err(SurveyError::Handoff(_))
    ));
    assert!(tracker.survey().is_none());

    let mut data = SurveyData::default();
    fill(&mut data);
    tracker.on_complete(&data).unwrap();
    assert_eq!(tracker.survey(), Some(&data));
}

#[test]
fn test_restart_clears_answers() {
    let mut wizard = OnboardingWizard::new();
    fill(wizard.data_mut());
    wizard.next_step().unwrap();

    wizard.restart();
    assert_eq!(wizard.current_step(), OnboardingStep::BasicInfo);
    assert_eq!(wizard.data(), &SurveyData::default());
}
