//! Unit tests for personal goals.

use chrono::NaiveDate;
use flowsense::goals::{parse_amount, GoalBook, GoalError};

fn deadline(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, day).unwrap()
}

#[test]
fn test_create_and_complete_goal() {
    let mut book = GoalBook::new();
    let id = book.create("Walk", 10_000.0, "steps", deadline(30)).unwrap().id;

    let goal = book.update_progress(id, 4_000.0).unwrap();
    assert!(!goal.completed);
    assert!((goal.progress_percent() - 40.0).abs() < 1e-9);

    let goal = book.add_progress(id, 6_500.0).unwrap();
    assert!(goal.completed);
    assert_eq!(goal.current, 10_500.0);
    assert!(book.active().is_empty());
}

#[test]
fn test_rejects_invalid_goals() {
    let mut book = GoalBook::new();
    assert!(matches!(
        book.create("   ", 5.0, "glasses", deadline(1)),
        Err(GoalError::ValidationError(_))
    ));
    assert!(matches!(
        book.create("Water", 0.0, "glasses", deadline(1)),
        Err(GoalError::ValidationError(_))
    ));
    assert!(matches!(
        book.create("Water", f64::NAN, "glasses", deadline(1)),
        Err(GoalError::ValidationError(_))
    ));
    assert!(book.all().is_empty());
}

#[test]
fn test_non_finite_progress_rejected() {
    let mut book = GoalBook::new();
    let id = book.create("Water", 8.0, "glasses", deadline(2)).unwrap().id;

    assert!(book.update_progress(id, f64::INFINITY).is_err());
    assert_eq!(book.get(id).unwrap().current, 0.0);
}

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount(" 42.5 ").unwrap(), 42.5);
    assert!(matches!(parse_amount("abc"), Err(GoalError::InvalidNumber(_))));
    assert!(parse_amount("").is_err());
    assert!(parse_amount("NaN").is_err());
    assert!(parse_amount("inf").is_err());
}

#[test]
fn test_active_sorted_and_overdue() {
    let mut book = GoalBook::new();
    let late = book.create("Late", 1.0, "x", deadline(20)).unwrap().id;
    let early = book.create("Early", 1.0, "x", deadline(5)).unwrap().id;

    let active: Vec<_> = book.active().iter().map(|g| g.id).collect();
    assert_eq!(active, vec![early, late]);

    let overdue: Vec<_> = book.overdue(deadline(10)).iter().map(|g| g.id).collect();
    assert_eq!(overdue, vec![early]);
}

#[test]
fn test_delete_goal() {
    let mut book = GoalBook::new();
    let id = book.create("Sleep", 8.0, "hours", deadline(3)).unwrap().id;
    assert!(book.delete(id));
    assert!(!book.delete(id));
    assert!(matches!(
        book.update_progress(id, 1.0),
        Err(GoalError::NotFound(_))
    ));
}
