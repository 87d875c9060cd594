//! Integration test modules.

mod onboarding_test;
mod social_test;
