//! Mood classification for search terms.
//!
//! A fixed table maps each mood to the trigger substrings that select
//! it. Trigger lists are not disjoint; the table's declaration order is
//! the priority rule, and the first mood with any matching trigger
//! wins. Generic mood words ("mood", "feel", "emotion") that match no
//! specific mood land in the [`Mood::Mixed`] bucket.

use serde::{Deserialize, Serialize};

/// Emotional category a search term can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Relaxed,
    Inspired,
    Adventurous,
    Romantic,
    Mysterious,
    /// A cross-mood sampler for generic "what should I read for my
    /// mood" style terms.
    Mixed,
}

impl Mood {
    /// Lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Relaxed => "relaxed",
            Mood::Inspired => "inspired",
            Mood::Adventurous => "adventurous",
            Mood::Romantic => "romantic",
            Mood::Mysterious => "mysterious",
            Mood::Mixed => "mixed",
        }
    }

    /// Parse a mood from its lowercase name.
    pub fn from_name(name: &str) -> Option<Mood> {
        match name {
            "happy" => Some(Mood::Happy),
            "sad" => Some(Mood::Sad),
            "relaxed" => Some(Mood::Relaxed),
            "inspired" => Some(Mood::Inspired),
            "adventurous" => Some(Mood::Adventurous),
            "romantic" => Some(Mood::Romantic),
            "mysterious" => Some(Mood::Mysterious),
            "mixed" => Some(Mood::Mixed),
            _ => None,
        }
    }
}

/// A mood and the substrings that trigger it.
#[derive(Debug, Clone)]
pub struct MoodProfile {
    pub mood: Mood,
    pub triggers: &'static [&'static str],
}

/// Trigger table, in priority order.
pub static MOOD_TABLE: &[MoodProfile] = &[
    MoodProfile {
        mood: Mood::Happy,
        triggers: &[
            "happy", "feel good", "uplifting", "happiness", "joyful", "cheerful",
            "positive", "fun", "humorous", "light", "heartwarming",
        ],
    },
    MoodProfile {
        mood: Mood::Sad,
        triggers: &[
            "sad", "emotional", "moving", "grief", "heartbreaking", "melancholy",
            "depressing", "somber", "tearjerker", "tragedy",
        ],
    },
    MoodProfile {
        mood: Mood::Relaxed,
        triggers: &[
            "relax", "calm", "peaceful", "soothing", "chill", "mindful",
            "tranquil", "meditation", "cozy", "comfort",
        ],
    },
    MoodProfile {
        mood: Mood::Inspired,
        triggers: &[
            "inspired", "motivational", "inspiring", "motivation", "empowering",
            "success", "ambition", "goals", "achievement", "determination",
        ],
    },
    MoodProfile {
        mood: Mood::Adventurous,
        triggers: &[
            "adventure", "exciting", "action", "thrill", "journey", "discovery",
            "exploration", "quest", "daring", "expedition", "travel",
        ],
    },
    MoodProfile {
        mood: Mood::Romantic,
        triggers: &[
            "romance", "love", "relationship", "romantic", "passion", "dating",
            "marriage", "couples", "affection", "crush", "love story",
        ],
    },
    MoodProfile {
        mood: Mood::Mysterious,
        triggers: &[
            "mystery", "suspense", "intriguing", "puzzling", "enigmatic",
            "detective", "clue", "riddle", "whodunit", "crime", "investigation",
        ],
    },
];

/// Generic mood words that select the mixed bucket when no specific
/// mood matched.
static GENERIC_TRIGGERS: &[&str] = &["mood", "feel", "emotion"];

/// Classify a free-text term into a mood, if any trigger matches.
pub fn classify(term: &str) -> Option<Mood> {
    let term = term.to_lowercase();
    let term = term.trim();

    for profile in MOOD_TABLE {
        if profile.triggers.iter().any(|t| term.contains(t)) {
            return Some(profile.mood);
        }
    }

    if GENERIC_TRIGGERS.iter().any(|t| term.contains(t)) {
        return Some(Mood::Mixed);
    }

    None
}
