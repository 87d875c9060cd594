//! Unit tests for quest progress.

use flowsense::quests::{Quest, QuestBucket, QuestError, QuestRegistry, QuestReward};

fn registry() -> QuestRegistry {
    QuestRegistry::from_quests(vec![
        Quest::new("water", "Hydrate", "Drink water", QuestBucket::Daily, 8, 30),
        Quest::new("walk", "Walk", "Walk daily", QuestBucket::Weekly, 5, 200).with_reward(
            QuestReward::Cosmetic {
                item: "Sneakers".to_string(),
            },
        ),
    ])
    .unwrap()
}

#[test]
fn test_progress_clamps_to_total() {
    let mut quests = registry();

    let advance = quests.advance("water", 3).unwrap();
    assert_eq!(advance.quest.progress, 3);
    assert!(!advance.completed_now());

    let advance = quests.advance("water", 50).unwrap();
    assert_eq!(advance.quest.progress, 8);
    assert!(advance.quest.completed);

    let completion = advance.completion.unwrap();
    assert_eq!(completion.quest_id, "water");
    assert_eq!(completion.xp_reward, 30);
}

#[test]
fn test_advance_after_completion_is_noop() {
    let mut quests = registry();
    quests.advance("walk", 5).unwrap();
    let before = quests.get("walk").unwrap().clone();

    let again = quests.advance("walk", 2).unwrap();
    assert!(!again.completed_now());
    assert_eq!(again.quest, before);
    assert_eq!(quests.completed_count(), 1);
}

#[test]
fn test_completion_carries_reward() {
    let mut quests = registry();
    let advance = quests.advance("walk", 5).unwrap();
    assert_eq!(
        advance.completion.unwrap().reward,
        Some(QuestReward::Cosmetic {
            item: "Sneakers".to_string()
        })
    );
}

#[test]
fn test_zero_delta_on_fresh_quest() {
    let mut quests = registry();
    let advance = quests.advance("water", 0).unwrap();
    assert_eq!(advance.quest.progress, 0);
    assert!(!advance.completed_now());
}

#[test]
fn test_unknown_quest() {
    let mut quests = registry();
    assert!(matches!(
        quests.advance("nope", 1),
        Err(QuestError::NotFound(_))
    ));
}

#[test]
fn test_duplicate_ids_rejected() {
    let result = QuestRegistry::from_quests(vec![
        Quest::new("a", "A", "", QuestBucket::Daily, 1, 1),
        Quest::new("a", "A again", "", QuestBucket::Daily, 1, 1),
    ]);
    assert!(matches!(result, Err(QuestError::DuplicateId(_))));
}

#[test]
fn test_pending_xp_drops_on_completion() {
    let mut quests = registry();
    assert_eq!(quests.pending_xp(), 230);
    quests.advance("water", 8).unwrap();
    assert_eq!(quests.pending_xp(), 200);
}

#[test]
fn test_default_catalog_buckets() {
    let quests = QuestRegistry::default();
    assert!(!quests.by_bucket(QuestBucket::Daily).is_empty());
    assert!(!quests.by_bucket(QuestBucket::Team).is_empty());
    assert_eq!(quests.completed_count(), 0);
}
