//! Journal entry domain model.
//!
//! # Responsibility
//! - Define the one-entry-per-day journal record and mood vocabulary.
//!
//! # Invariants
//! - Entries are keyed by their own `date`; the store's map enforces at
//!   most one entry per calendar day.
//! - `last_updated` is stamped by the store on every save, never by the
//!   caller.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Daily mood, serialized as the lowercase token of the stored format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Crying,
    Sad,
    Neutral,
    Calm,
    Happy,
}

impl Mood {
    /// Numeric magnitude on the 1..=5 scale used by analytics
    /// (`crying = 1` up to `happy = 5`).
    pub fn magnitude(self) -> u8 {
        match self {
            Self::Crying => 1,
            Self::Sad => 2,
            Self::Neutral => 3,
            Self::Calm => 4,
            Self::Happy => 5,
        }
    }
}

/// One day's journal entry. Saves replace the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Calendar day this entry belongs to, also its key in the journal map.
    pub date: NaiveDate,
    pub mood: Option<Mood>,
    pub gratitude: String,
    pub highlights: String,
    pub challenges: String,
    pub learning: String,
    pub goals: String,
    pub notes: String,
    /// Stamped by the store mutator on every upsert.
    pub last_updated: DateTime<Utc>,
}

impl JournalEntry {
    /// Creates an empty entry for the given day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            mood: None,
            gratitude: String::new(),
            highlights: String::new(),
            challenges: String::new(),
            learning: String::new(),
            goals: String::new(),
            notes: String::new(),
            last_updated: Utc::now(),
        }
    }
}
