//! Unit tests for the companion and its store.

use flowsense::companion::store::{default_items, find_item, MYSTERY_BOX_RANGE};
use flowsense::companion::{CompanionAction, CompanionError, CompanionState, Mood, GAUGE_MAX};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_feed_play_care_sequence() {
    let mut pet = CompanionState::new(85, 92, 78, 2450);

    pet.feed().unwrap();
    pet.play().unwrap();
    pet.care().unwrap();

    assert_eq!(pet.health, 100);
    assert_eq!(pet.happiness, 100);
    assert_eq!(pet.energy, 83);
    assert_eq!(pet.coins, 2375);
}

#[test]
fn test_actions_never_overdraw_or_leave_range() {
    let mut pet = CompanionState::new(3, 97, 2, 120);

    for _ in 0..20 {
        for action in [CompanionAction::Play, CompanionAction::Feed, CompanionAction::Care] {
            let _ = pet.perform(action);
            assert!(pet.health <= GAUGE_MAX);
            assert!(pet.happiness <= GAUGE_MAX);
            assert!(pet.energy <= GAUGE_MAX);
        }
    }

    // Last affordable action leaves less than the cheapest price
    assert!(pet.coins < CompanionAction::Play.cost());
}

#[test]
fn test_insufficient_coins_changes_nothing() {
    let mut pet = CompanionState::new(40, 40, 40, 20);
    let before = pet.clone();

    let err = pet.care().unwrap_err();
    assert!(matches!(
        err,
        CompanionError::InsufficientCoins {
            needed: 35,
            available: 20
        }
    ));
    assert!(err.to_string().starts_with("Not enough coins"));
    assert_eq!(pet, before);
}

#[test]
fn test_purchase_with_short_balance_is_rejected() {
    let items = default_items();
    let bed = find_item(&items, "cozy_bed").unwrap();
    let mut pet = CompanionState::new(50, 50, 50, bed.cost - 1);
    let before = pet.clone();
    let mut rng = StdRng::seed_from_u64(11);

    assert!(pet.purchase(bed, &mut rng).is_err());
    assert_eq!(pet, before);
}

#[test]
fn test_mystery_box_same_roll_for_health_and_happiness() {
    let items = default_items();
    let mystery = find_item(&items, "mystery_box").unwrap();

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pet = CompanionState::new(40, 50, 60, 1000);

        let delta = pet.purchase(mystery, &mut rng).unwrap();

        assert!(MYSTERY_BOX_RANGE.contains(&delta.health));
        assert_eq!(delta.health, delta.happiness);
        assert_eq!(delta.energy, 0);
        assert_eq!(pet.health as i32, 40 + delta.health);
        assert_eq!(pet.happiness as i32, 50 + delta.happiness);
        assert_eq!(pet.energy, 60);
        assert_eq!(pet.coins, 1000 - mystery.cost);
    }
}

#[test]
fn test_mystery_box_clamps() {
    let items = default_items();
    let mystery = find_item(&items, "mystery_box").unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let mut pet = CompanionState::new(95, 99, 10, 100);

    pet.purchase(mystery, &mut rng).unwrap();
    assert_eq!(pet.health, 100);
    assert_eq!(pet.happiness, 100);
}

#[test]
fn test_mood_follows_happiness() {
    assert_eq!(CompanionState::new(50, 85, 50, 0).mood(), Mood::Happy);
    assert_eq!(CompanionState::new(50, 65, 50, 0).mood(), Mood::Content);
    assert_eq!(CompanionState::new(50, 45, 50, 0).mood(), Mood::Okay);
    assert_eq!(CompanionState::new(50, 10, 50, 0).mood(), Mood::Sad);
}

#[test]
fn test_earn_and_spend_coins() {
    let mut pet = CompanionState::default();
    pet.earn_coins(50);
    assert_eq!(pet.coins, 150);
    assert!(pet.can_afford(150));

    pet.spend_coins(150).unwrap();
    assert_eq!(pet.coins, 0);
    assert!(pet.spend_coins(1).is_err());
}
