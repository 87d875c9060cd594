//! Care circle: the people who support the user.
//!
//! Privacy settings, member invitations and challenge joins. Delivery is
//! delegated to a [`CircleNotifier`].

pub mod notifier;
pub mod types;

use serde::{Deserialize, Serialize};

pub use notifier::{CircleNotifier, LogNotifier};
pub use types::{CircleMember, MemberStatus, PrivacySettings, PrivacyUpdate, Relationship};

/// The user's care circle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareCircle {
    privacy: PrivacySettings,
    members: Vec<CircleMember>,
    joined_challenges: Vec<String>,
}

impl CareCircle {
    /// Create an empty circle with default privacy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current privacy settings.
    pub fn privacy(&self) -> &PrivacySettings {
        &self.privacy
    }

    /// Invited members.
    pub fn members(&self) -> &[CircleMember] {
        &self.members
    }

    /// Ids of joined challenges.
    pub fn joined_challenges(&self) -> &[String] {
        &self.joined_challenges
    }

    /// Merge a partial privacy update and publish it.
    pub fn update_privacy_settings<N: CircleNotifier + ?Sized>(
        &mut self,
        update: &PrivacyUpdate,
        notifier: &mut N,
    ) -> &PrivacySettings {
        self.privacy.apply(update);
        notifier.privacy_changed(&self.privacy);
        &self.privacy
    }

    /// Invite someone by email.
    pub fn invite_member<N: CircleNotifier + ?Sized>(
        &mut self,
        email: &str,
        relationship: Relationship,
        notifier: &mut N,
    ) -> Result<&CircleMember, CircleError> {
        let email = email.trim().to_lowercase();
        if !is_plausible_email(&email) {
            return Err(CircleError::InvalidEmail(email));
        }
        if self.members.iter().any(|m| m.email == email) {
            return Err(CircleError::AlreadyInvited(email));
        }

        let member = CircleMember::invited(email, relationship);
        notifier.send_invite(&member);
        self.members.push(member);

        let index = self.members.len() - 1;
        Ok(&self.members[index])
    }

    /// Remove a member by email.
    pub fn remove_member(&mut self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        let before = self.members.len();
        self.members.retain(|m| m.email != email);
        self.members.len() < before
    }

    /// Record that an invited member accepted.
    ///
    /// Accepting twice is a no-op.
    pub fn accept_member(&mut self, email: &str) -> Result<&CircleMember, CircleError> {
        let email = email.trim().to_lowercase();
        let member = self
            .members
            .iter_mut()
            .find(|m| m.email == email)
            .ok_or(CircleError::NotMember(email))?;
        if member.status != MemberStatus::Accepted {
            tracing::info!("{} accepted the circle invite", member.email);
            member.status = MemberStatus::Accepted;
        }
        Ok(member)
    }

    /// Join a team challenge.
    pub fn join_challenge<N: CircleNotifier + ?Sized>(
        &mut self,
        challenge_id: &str,
        notifier: &mut N,
    ) -> Result<(), CircleError> {
        if self.joined_challenges.iter().any(|c| c == challenge_id) {
            return Err(CircleError::AlreadyJoined(challenge_id.to_string()));
        }
        self.joined_challenges.push(challenge_id.to_string());
        notifier.challenge_joined(challenge_id);
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Care circle errors.
#[derive(Debug, thiserror::Error)]
pub enum CircleError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Already invited: {0}")]
    AlreadyInvited(String),

    #[error("Already joined this challenge: {0}")]
    AlreadyJoined(String),

    #[error("Not in the care circle: {0}")]
    NotMember(String),
}
