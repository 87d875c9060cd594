//! Integration tests for the care circle.

use flowsense::engine::{EngagementError, EngagementTracker};
use flowsense::social::{
    CareCircle, CircleError, CircleMember, CircleNotifier, MemberStatus, PrivacySettings,
    PrivacyUpdate, Relationship,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Notifier that records every event.
#[derive(Default, Clone)]
struct Recorder {
    events: Rc<RefCell<Vec<String>>>,
}

impl CircleNotifier for Recorder {
    fn send_invite(&mut self, member: &CircleMember) {
        self.events.borrow_mut().push(format!("invite:{}", member.email));
    }

    fn privacy_changed(&mut self, settings: &PrivacySettings) {
        self.events
            .borrow_mut()
            .push(format!("privacy:glucose={}", settings.share_glucose));
    }

    fn challenge_joined(&mut self, challenge_id: &str) {
        self.events.borrow_mut().push(format!("join:{}", challenge_id));
    }
}

#[test]
fn test_tracker_routes_events_to_notifier() {
    let recorder = Recorder::default();
    let events = recorder.events.clone();
    let mut tracker = EngagementTracker::seeded(2).with_notifier(Box::new(recorder));

    let member = tracker
        .invite_member("  Mom@Example.com ", Relationship::Family)
        .unwrap();
    assert_eq!(member.email, "mom@example.com");
    assert_eq!(member.status, MemberStatus::Pending);

    let settings = tracker.update_privacy_settings(&PrivacyUpdate {
        share_glucose: Some(true),
        ..Default::default()
    });
    assert!(settings.share_glucose);
    // Untouched fields keep their defaults
    assert!(settings.emergency_alerts);

    tracker.join_challenge("team_step_challenge").unwrap();

    assert_eq!(
        *events.borrow(),
        vec![
            "invite:mom@example.com".to_string(),
            "privacy:glucose=true".to_string(),
            "join:team_step_challenge".to_string(),
        ]
    );
}

#[test]
fn test_duplicate_invite_and_join_rejected() {
    let mut tracker = EngagementTracker::seeded(2);
    tracker
        .invite_member("doc@clinic.org", Relationship::HealthcareProvider)
        .unwrap();

    let err = tracker
        .invite_member("DOC@clinic.org", Relationship::Friend)
        .unwrap_err();
    assert!(matches!(
        err,
        EngagementError::Circle(CircleError::AlreadyInvited(_))
    ));

    tracker.join_challenge("team_encouragement").unwrap();
    assert!(tracker.join_challenge("team_encouragement").is_err());
    assert_eq!(tracker.circle().members().len(), 1);
    assert_eq!(tracker.circle().joined_challenges().len(), 1);
}

#[test]
fn test_invalid_emails() {
    let mut circle = CareCircle::new();
    let mut recorder = Recorder::default();

    for email in ["", "no-at-sign", "@example.com", "a@b", "a@.com", "a b@c.com"] {
        assert!(
            matches!(
                circle.invite_member(email, Relationship::Friend, &mut recorder),
                Err(CircleError::InvalidEmail(_))
            ),
            "accepted {:?}",
            email
        );
    }
    assert!(circle.members().is_empty());
    assert!(recorder.events.borrow().is_empty());
}

#[test]
fn test_remove_member() {
    let mut circle = CareCircle::new();
    let mut recorder = Recorder::default();
    circle
        .invite_member("pal@example.com", Relationship::Partner, &mut recorder)
        .unwrap();

    assert!(circle.remove_member("PAL@example.com"));
    assert!(!circle.remove_member("pal@example.com"));
}

#[test]
fn test_accept_member() {
    let mut tracker = EngagementTracker::seeded(2);
    tracker
        .invite_member("coach@example.com", Relationship::Friend)
        .unwrap();

    let member = tracker.accept_member(" Coach@Example.com").unwrap();
    assert_eq!(member.status, MemberStatus::Accepted);
    // Accepting again keeps the member as is
    assert_eq!(
        tracker.accept_member("coach@example.com").unwrap().status,
        MemberStatus::Accepted
    );

    assert!(matches!(
        tracker.accept_member("stranger@example.com"),
        Err(EngagementError::Circle(CircleError::NotMember(_)))
    ));
    assert_eq!(tracker.circle().members().len(), 1);
}

#[test]
fn test_relationship_names() {
    assert_eq!(Relationship::from_str("caregiver"), Some(Relationship::Caregiver));
    assert_eq!(Relationship::Family.as_str(), "family");
    assert_eq!(Relationship::from_str("stranger"), None);
}
