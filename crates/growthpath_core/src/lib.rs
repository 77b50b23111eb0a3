//! Core domain logic for GrowthPath, a local-first personal productivity
//! dashboard: habit tracking, daily journaling, a dev-notes library and
//! derived analytics, persisted to a durable local key-value medium.
//!
//! This crate is the single source of truth for business invariants. It
//! has no view or navigation concerns; frontends consume snapshots,
//! dispatch mutators and subscribe to change notifications.

pub mod analytics;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use analytics::{
    average_mood, category_radar, consistency_score, habit_frequency_ranking,
    mood_correlation_series, CategoryScore, HabitFrequency, MoodPoint, DEFAULT_WINDOW_DAYS,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::habit::{Habit, HabitCategory};
pub use model::journal::{JournalEntry, Mood};
pub use model::note::{DevNote, NoteCategory};
pub use model::profile::{AppSettings, ProfilePatch, SettingsPatch, Theme, UserProfile, WeekStart};
pub use repo::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};
pub use store::{Collection, Store};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
