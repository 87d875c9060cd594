//! Built-in quest catalog.

use super::types::{Quest, QuestBucket, QuestReward};

/// Get all built-in quests.
pub fn default_quests() -> Vec<Quest> {
    let mut quests = Vec::new();
    quests.extend(daily_quests());
    quests.extend(weekly_quests());
    quests.extend(monthly_quests());
    quests.extend(team_quests());
    quests
}

fn daily_quests() -> Vec<Quest> {
    vec![
        Quest::new(
            "daily_glucose_checks",
            "Steady Tracker",
            "Log your glucose 3 times today",
            QuestBucket::Daily,
            3,
            50,
        ),
        Quest::new(
            "daily_hydration",
            "Hydration Hero",
            "Drink 8 glasses of water",
            QuestBucket::Daily,
            8,
            30,
        ),
        Quest::new(
            "daily_mood",
            "Check In",
            "Record how you are feeling",
            QuestBucket::Daily,
            1,
            20,
        ),
        Quest::new(
            "daily_meals",
            "Mindful Plate",
            "Log all 3 main meals",
            QuestBucket::Daily,
            3,
            40,
        ),
    ]
}

fn weekly_quests() -> Vec<Quest> {
    vec![
        Quest::new(
            "weekly_in_range",
            "In the Zone",
            "Spend 5 days with readings in your target range",
            QuestBucket::Weekly,
            5,
            200,
        )
        .with_reward(QuestReward::Cosmetic {
            item: "Golden Collar".to_string(),
        }),
        Quest::new(
            "weekly_exercise",
            "Move More",
            "Complete 150 minutes of activity",
            QuestBucket::Weekly,
            150,
            250,
        ),
        Quest::new(
            "weekly_journal",
            "Reflective Week",
            "Write 4 journal entries",
            QuestBucket::Weekly,
            4,
            150,
        ),
    ]
}

fn monthly_quests() -> Vec<Quest> {
    vec![
        Quest::new(
            "monthly_consistency",
            "Consistency Champion",
            "Log glucose on 25 days this month",
            QuestBucket::Monthly,
            25,
            1000,
        )
        .with_reward(QuestReward::Badge {
            achievement_id: "consistency_champion".to_string(),
        }),
        Quest::new(
            "monthly_new_recipes",
            "Kitchen Explorer",
            "Try 6 new diabetes-friendly recipes",
            QuestBucket::Monthly,
            6,
            600,
        )
        .with_reward(QuestReward::Cosmetic {
            item: "Chef Hat".to_string(),
        }),
    ]
}

fn team_quests() -> Vec<Quest> {
    vec![
        Quest::new(
            "team_step_challenge",
            "Circle Steps",
            "Walk 100,000 steps together with your care circle",
            QuestBucket::Team,
            100_000,
            800,
        ),
        Quest::new(
            "team_encouragement",
            "Cheer Squad",
            "Send 10 encouragements to circle members",
            QuestBucket::Team,
            10,
            300,
        )
        .with_reward(QuestReward::Badge {
            achievement_id: "team_player".to_string(),
        }),
    ]
}
