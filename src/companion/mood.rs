//! Mood buckets and the companion's mood messages.

use serde::{Deserialize, Serialize};

/// Display mood bucketed from happiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Content,
    Okay,
    Sad,
}

impl Mood {
    /// Bucket a happiness value.
    pub fn from_happiness(happiness: u8) -> Self {
        match happiness {
            80.. => Mood::Happy,
            60..=79 => Mood::Content,
            40..=59 => Mood::Okay,
            _ => Mood::Sad,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Content => "content",
            Mood::Okay => "okay",
            Mood::Sad => "sad",
        }
    }

    /// Messages the companion can say in this mood.
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            Mood::Happy => &[
                "I'm so proud of you! Your logging streak is amazing!",
                "Great readings today. Let's keep this energy going!",
            ],
            Mood::Content => &[
                "Thanks for checking in. Steady progress is real progress.",
                "Feeling good! Maybe a short walk after your next meal?",
            ],
            Mood::Okay => &[
                "I could use some attention. How about a quick glucose check?",
                "Let's log a meal together and earn some coins.",
            ],
            Mood::Sad => &[
                "I miss you! A little care goes a long way.",
                "Rough day? Logging your mood might help us both.",
            ],
        }
    }

    /// Pick a message by an arbitrary index (e.g. day of year).
    pub fn message(&self, index: usize) -> &'static str {
        let messages = self.messages();
        messages[index % messages.len()]
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
