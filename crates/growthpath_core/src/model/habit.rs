//! Habit domain model.
//!
//! # Responsibility
//! - Define the tracked-habit record and its fixed category vocabulary.
//! - Provide the seeded starter set used when no stored data exists.
//!
//! # Invariants
//! - `id` is stable and never reused for another habit.
//! - `completions` holds each calendar date at most once; the set type
//!   enforces this structurally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Fixed growth-area vocabulary for habits.
///
/// Serialized as the capitalized token the stored format uses
/// (`"Productivity"`, `"Health"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HabitCategory {
    Productivity,
    Health,
    Learning,
    Code,
    Mental,
}

impl HabitCategory {
    /// All categories in stable presentation order.
    pub const ALL: [HabitCategory; 5] = [
        HabitCategory::Productivity,
        HabitCategory::Health,
        HabitCategory::Learning,
        HabitCategory::Code,
        HabitCategory::Mental,
    ];

    /// Display label, identical to the serialized token.
    pub fn label(self) -> &'static str {
        match self {
            Self::Productivity => "Productivity",
            Self::Health => "Health",
            Self::Learning => "Learning",
            Self::Code => "Code",
            Self::Mental => "Mental",
        }
    }
}

/// A tracked habit with its full completion history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Stable string id (uuid for new habits, short ids in seeded data).
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub category: HabitCategory,
    /// Days on which the habit was completed. Serializes as a JSON array
    /// of `YYYY-MM-DD` strings.
    pub completions: BTreeSet<NaiveDate>,
}

impl Habit {
    /// Creates a habit with a fresh id and no completions.
    pub fn new(
        name: impl Into<String>,
        emoji: impl Into<String>,
        category: HabitCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            emoji: emoji.into(),
            category,
            completions: BTreeSet::new(),
        }
    }

    /// The starter habits seeded on first run, before any data is stored.
    pub fn starter_set() -> Vec<Habit> {
        let seed = |id: &str, name: &str, emoji: &str, category| Habit {
            id: id.to_string(),
            name: name.to_string(),
            emoji: emoji.to_string(),
            category,
            completions: BTreeSet::new(),
        };
        vec![
            seed("1", "Make Video", "🎥", HabitCategory::Productivity),
            seed("2", "Wake at Constant", "🌅", HabitCategory::Productivity),
            seed("3", "AI Learning", "📖", HabitCategory::Learning),
            seed("4", "Exercise", "🏃", HabitCategory::Health),
            seed("5", "DSA Practice", "✍️", HabitCategory::Code),
            seed("6", "YT video", "📼", HabitCategory::Learning),
            seed("7", "Meditation", "🧘", HabitCategory::Mental),
            seed("8", "CodeForces", "✍️", HabitCategory::Code),
        ]
    }
}
