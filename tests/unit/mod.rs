//! Unit test modules.

mod achievement_test;
mod companion_test;
mod goal_test;
mod progression_test;
mod quest_test;
mod reward_test;
