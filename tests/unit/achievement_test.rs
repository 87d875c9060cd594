//! Unit tests for achievement thresholds.

use flowsense::achievements::{Achievement, AchievementError, AchievementRegistry, Rarity};

#[test]
fn test_threshold_progress_then_earn() {
    let mut registry = AchievementRegistry::default();

    assert!(!registry.check_and_award("streak_7", 3.0).unwrap());
    let partial = registry.get("streak_7").unwrap();
    assert_eq!(partial.progress, Some(42));
    assert!(!partial.earned);

    assert!(registry.check_and_award("streak_7", 7.0).unwrap());
    let earned = registry.get("streak_7").unwrap();
    assert!(earned.earned);
    assert!(earned.earned_at.is_some());
    assert_eq!(earned.progress, Some(100));
}

#[test]
fn test_earning_is_one_time() {
    let mut registry = AchievementRegistry::default();
    assert!(registry.check_and_award("readings_100", 150.0).unwrap());
    assert!(!registry.check_and_award("readings_100", 500.0).unwrap());
    assert!(!registry.award("readings_100").unwrap());
}

#[test]
fn test_manual_achievement_has_no_threshold() {
    let mut registry = AchievementRegistry::default();
    assert!(matches!(
        registry.check_and_award("team_player", 1.0),
        Err(AchievementError::NoThreshold(_))
    ));
    assert!(registry.award("team_player").unwrap());
}

#[test]
fn test_unknown_achievement() {
    let mut registry = AchievementRegistry::default();
    assert!(matches!(
        registry.award("moon_landing"),
        Err(AchievementError::NotFound(_))
    ));
}

#[test]
fn test_completion_percent() {
    let mut registry = AchievementRegistry::from_achievements(vec![
        Achievement::new("a", "A", "", Rarity::Bronze),
        Achievement::new("b", "B", "", Rarity::Gold).with_threshold(10.0),
    ]);
    assert_eq!(registry.completion_percent(), 0.0);

    registry.award("a").unwrap();
    assert_eq!(registry.earned_count(), 1);
    assert!((registry.completion_percent() - 50.0).abs() < f32::EPSILON);
    assert_eq!(registry.by_rarity(Rarity::Gold).len(), 1);
}
