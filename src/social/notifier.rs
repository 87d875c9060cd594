//! Delivery seam for care-circle events.

use super::types::{CircleMember, PrivacySettings};

/// External notification/identity service.
///
/// The app has no delivery backend; [`LogNotifier`] records intent only.
pub trait CircleNotifier {
    /// Send an invitation to a new member.
    fn send_invite(&mut self, member: &CircleMember);

    /// Publish changed privacy settings.
    fn privacy_changed(&mut self, settings: &PrivacySettings);

    /// Announce that the user joined a challenge.
    fn challenge_joined(&mut self, challenge_id: &str);
}

/// Notifier that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl CircleNotifier for LogNotifier {
    fn send_invite(&mut self, member: &CircleMember) {
        tracing::info!(
            "Invite to {} ({}) queued",
            member.email,
            member.relationship.as_str()
        );
    }

    fn privacy_changed(&mut self, settings: &PrivacySettings) {
        tracing::info!("Privacy settings updated: {:?}", settings);
    }

    fn challenge_joined(&mut self, challenge_id: &str) {
        tracing::info!("Joined challenge {}", challenge_id);
    }
}
