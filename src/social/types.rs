//! Core types for the care circle.
//!
//! Defines privacy settings, circle members and relationships.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the user shares with their care circle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub share_glucose: bool,
    pub share_meals: bool,
    pub share_mood: bool,
    pub share_achievements: bool,
    /// Alert circle members on severe lows/highs
    pub emergency_alerts: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            share_glucose: false,
            share_meals: false,
            share_mood: false,
            share_achievements: true,
            emergency_alerts: true,
        }
    }
}

/// Partial privacy update; `None` leaves a setting untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyUpdate {
    pub share_glucose: Option<bool>,
    pub share_meals: Option<bool>,
    pub share_mood: Option<bool>,
    pub share_achievements: Option<bool>,
    pub emergency_alerts: Option<bool>,
}

impl PrivacySettings {
    /// Merge a partial update.
    pub fn apply(&mut self, update: &PrivacyUpdate) {
        if let Some(v) = update.share_glucose {
            self.share_glucose = v;
        }
        if let Some(v) = update.share_meals {
            self.share_meals = v;
        }
        if let Some(v) = update.share_mood {
            self.share_mood = v;
        }
        if let Some(v) = update.share_achievements {
            self.share_achievements = v;
        }
        if let Some(v) = update.emergency_alerts {
            self.emergency_alerts = v;
        }
    }
}

/// How an invited member relates to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Family,
    Partner,
    Friend,
    Caregiver,
    HealthcareProvider,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Family => "family",
            Relationship::Partner => "partner",
            Relationship::Friend => "friend",
            Relationship::Caregiver => "caregiver",
            Relationship::HealthcareProvider => "healthcare_provider",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "family" => Some(Relationship::Family),
            "partner" => Some(Relationship::Partner),
            "friend" => Some(Relationship::Friend),
            "caregiver" => Some(Relationship::Caregiver),
            "healthcare_provider" => Some(Relationship::HealthcareProvider),
            _ => None,
        }
    }
}

/// Invitation state of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Pending,
    Accepted,
}

/// Someone invited into the care circle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleMember {
    pub id: Uuid,
    pub email: String,
    pub relationship: Relationship,
    pub status: MemberStatus,
    pub invited_at: DateTime<Utc>,
}

impl CircleMember {
    /// Create a pending member.
    pub fn invited(email: String, relationship: Relationship) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            relationship,
            status: MemberStatus::Pending,
            invited_at: Utc::now(),
        }
    }
}
