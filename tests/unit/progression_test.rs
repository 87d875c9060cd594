//! Unit tests for XP and leveling.

use flowsense::progression::{LevelingPolicy, ProgressionError, ProgressionState};

#[test]
fn test_award_crossing_threshold_levels_once() {
    let mut state = ProgressionState::new(12, 2450, 4000);
    let result = state.award_xp(2000, "weekly quest");

    assert_eq!(result.from_level, 12);
    assert_eq!(result.to_level, 13);
    assert_eq!(state.level, 13);
    assert_eq!(state.current_xp, 450);
    assert_eq!(state.next_level_xp, 5000);
}

#[test]
fn test_single_step_gains_at_most_one_level() {
    let mut state = ProgressionState::default();

    for amount in [500, 5000, 12000, 1] {
        let before = state.level;
        let result = state.award_xp(amount, "bulk");
        assert!(result.levels_gained() <= 1);
        assert!(state.level - before <= 1);
    }
}

#[test]
fn test_normalize_restores_invariant() {
    let mut state = ProgressionState::default();
    state.award_xp(7500, "import");
    assert!(!state.is_normalized());

    let gained = state.normalize();
    assert!(gained > 0);
    assert!(state.is_normalized());
    assert!(state.current_xp < state.next_level_xp);
}

#[test]
fn test_rollover_keeps_invariant_after_every_award() {
    let mut state = ProgressionState::default().with_policy(LevelingPolicy::Rollover);

    for amount in [999, 1, 2500, 40_000, 3] {
        state.award_xp(amount, "rollover");
        assert!(state.is_normalized(), "violated after awarding {}", amount);
    }
}

#[test]
fn test_rollover_multi_level() {
    let mut state = ProgressionState::default().with_policy(LevelingPolicy::Rollover);
    // 1000 + 2000 + 3000 = 6000 to reach level 4
    let result = state.award_xp(6500, "milestone");

    assert_eq!(result.levels_gained(), 3);
    assert_eq!(state.level, 4);
    assert_eq!(state.current_xp, 500);
    assert_eq!(state.next_level_xp, 4000);
}

#[test]
fn test_custom_increment() {
    let mut state = ProgressionState::new(1, 0, 500).with_increment(250);
    state.award_xp(600, "custom");

    assert_eq!(state.level, 2);
    assert_eq!(state.current_xp, 100);
    assert_eq!(state.next_level_xp, 750);
}

#[test]
fn test_spend_xp() {
    let mut state = ProgressionState::new(3, 800, 3000);
    state.spend_xp(300).unwrap();
    assert_eq!(state.current_xp, 500);

    let err = state.spend_xp(501).unwrap_err();
    assert!(matches!(
        err,
        ProgressionError::InsufficientXp {
            needed: 501,
            available: 500
        }
    ));
    assert_eq!(state.current_xp, 500);
}

#[test]
fn test_progress_helpers() {
    let state = ProgressionState::new(2, 500, 2000);
    assert_eq!(state.xp_to_next_level(), 1500);
    assert!((state.progress_percent() - 25.0).abs() < f32::EPSILON);
}
