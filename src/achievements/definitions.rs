//! Achievement definitions.

use super::{Achievement, Rarity};

/// Get all achievement definitions
pub fn all_achievements() -> Vec<Achievement> {
    let mut achievements = Vec::new();

    achievements.extend(logging_achievements());
    achievements.extend(streak_achievements());
    achievements.extend(wellness_achievements());
    achievements.extend(special_achievements());

    achievements
}

fn logging_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "first_reading",
            "First Drop",
            "Log your first glucose reading",
            Rarity::Bronze,
        ),
        Achievement::new(
            "readings_100",
            "Data Driven",
            "Log 100 glucose readings",
            Rarity::Silver,
        )
        .with_threshold(100.0),
        Achievement::new(
            "readings_1000",
            "Glucose Guru",
            "Log 1,000 glucose readings",
            Rarity::Gold,
        )
        .with_threshold(1000.0),
        Achievement::new(
            "meals_50",
            "Food Detective",
            "Log 50 meals with carb counts",
            Rarity::Bronze,
        )
        .with_threshold(50.0),
    ]
}

fn streak_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "streak_7",
            "Week Strong",
            "Keep a 7 day glucose logging streak",
            Rarity::Bronze,
        )
        .with_threshold(7.0),
        Achievement::new(
            "streak_30",
            "Monthly Momentum",
            "Keep a 30 day glucose logging streak",
            Rarity::Gold,
        )
        .with_threshold(30.0),
        Achievement::new(
            "streak_100",
            "Unstoppable",
            "Keep a 100 day glucose logging streak",
            Rarity::Platinum,
        )
        .with_threshold(100.0),
        Achievement::new(
            "consistency_champion",
            "Consistency Champion",
            "Finish a monthly consistency quest",
            Rarity::Gold,
        ),
    ]
}

fn wellness_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "time_in_range_70",
            "Range Rider",
            "Reach 70% time in range for a week",
            Rarity::Silver,
        )
        .with_threshold(70.0),
        Achievement::new(
            "hydration_master",
            "Hydration Master",
            "Hit your water goal 14 times",
            Rarity::Silver,
        )
        .with_threshold(14.0),
        Achievement::new(
            "journal_25",
            "Storyteller",
            "Write 25 journal entries",
            Rarity::Silver,
        )
        .with_threshold(25.0),
    ]
}

fn special_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "team_player",
            "Team Player",
            "Complete a team quest with your care circle",
            Rarity::Special,
        ),
        Achievement::new(
            "pet_best_friend",
            "Best Friends",
            "Get your companion to full happiness",
            Rarity::Special,
        )
        .with_threshold(100.0),
    ]
}
