//! Unit tests for the rewards store.

use flowsense::rewards::{Currency, RewardCatalog, RewardError};

#[test]
fn test_unlock_is_one_time() {
    let mut catalog = RewardCatalog::default();
    let mut coins = 500;

    let redemption = catalog.redeem("pet_hat", &mut coins).unwrap();
    assert_eq!(redemption.currency, Currency::Coins);
    assert_eq!(redemption.remaining, 300);
    assert!(catalog.is_owned("pet_hat"));

    assert!(matches!(
        catalog.redeem("pet_hat", &mut coins),
        Err(RewardError::AlreadyOwned(_))
    ));
    assert_eq!(coins, 300);
}

#[test]
fn test_consumable_is_repeatable() {
    let mut catalog = RewardCatalog::default();
    let mut xp = 1200;

    catalog.redeem("streak_freeze", &mut xp).unwrap();
    catalog.redeem("streak_freeze", &mut xp).unwrap();
    assert_eq!(xp, 200);
    assert!(!catalog.is_owned("streak_freeze"));
}

#[test]
fn test_insufficient_balance_changes_nothing() {
    let mut catalog = RewardCatalog::default();
    let mut xp = 999;

    let err = catalog.redeem("dark_theme", &mut xp).unwrap_err();
    assert!(matches!(
        err,
        RewardError::InsufficientBalance {
            needed: 1000,
            available: 999,
            currency: Currency::Xp
        }
    ));
    assert_eq!(xp, 999);
    assert!(!catalog.is_owned("dark_theme"));
    assert_eq!(catalog.owned().count(), 0);
}

#[test]
fn test_unknown_reward() {
    let mut catalog = RewardCatalog::default();
    let mut balance = 10_000;
    assert!(matches!(
        catalog.redeem("yacht", &mut balance),
        Err(RewardError::NotFound(_))
    ));
    assert_eq!(balance, 10_000);
}
