//! Persistent store owning the five collections.
//!
//! # Responsibility
//! - Load each collection from its named slot with independent fallback.
//! - Apply mutator commands and reserialize all slots on every change.
//! - Notify subscribers after each applied mutation.
//!
//! # Invariants
//! - Persistence is whole-collection overwrite, never partial. This is
//!   O(total size) per change and intentionally non-scalable; expected
//!   volumes are tens to low-thousands of records.
//! - When `settings.secure_session` is true, nothing is written durably;
//!   in-memory state stays authoritative for the session.
//! - A corrupt slot never blocks loading the other collections.
//! - Mutators are total: unknown ids are logged no-ops, never errors.

use crate::analytics::{self, CategoryScore, HabitFrequency, MoodPoint, DEFAULT_WINDOW_DAYS};
use crate::model::habit::{Habit, HabitCategory};
use crate::model::journal::JournalEntry;
use crate::model::note::DevNote;
use crate::model::profile::{AppSettings, ProfilePatch, SettingsPatch, UserProfile};
use crate::repo::slot_repo::SlotRepository;
use chrono::{Local, NaiveDate, Utc};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

/// Durable slot names, one per collection.
pub const HABITS_SLOT: &str = "growthpath_habits";
pub const JOURNAL_SLOT: &str = "growthpath_journal";
pub const NOTES_SLOT: &str = "growthpath_notes";
pub const USER_SLOT: &str = "growthpath_user";
pub const SETTINGS_SLOT: &str = "growthpath_settings";

/// Identifies which collection a change notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Habits,
    Journal,
    Notes,
    Profile,
    Settings,
}

type Subscriber = Box<dyn Fn(Collection)>;

/// Owns all five collections and their persistence lifecycle.
///
/// There is deliberately no ambient/global instance: consumers receive a
/// `&mut Store` (or wrap it themselves) and read snapshots through the
/// accessor methods.
pub struct Store<R: SlotRepository> {
    repo: R,
    habits: Vec<Habit>,
    journal: BTreeMap<NaiveDate, JournalEntry>,
    notes: Vec<DevNote>,
    profile: UserProfile,
    settings: AppSettings,
    subscribers: Vec<Subscriber>,
}

impl<R: SlotRepository> Store<R> {
    /// Loads all collections from the slot medium.
    ///
    /// Each slot is deserialized independently; absence, read failure or
    /// parse failure of one slot falls back to that collection's default
    /// without affecting the others. Loading therefore never fails.
    pub fn load(repo: R) -> Self {
        let habits = load_slot(&repo, HABITS_SLOT, Habit::starter_set);
        let journal = load_slot(&repo, JOURNAL_SLOT, BTreeMap::new);
        let notes = load_slot(&repo, NOTES_SLOT, Vec::new);
        let profile = load_slot(&repo, USER_SLOT, UserProfile::default);
        let settings = load_slot(&repo, SETTINGS_SLOT, AppSettings::default);

        info!(
            "event=store_load module=store status=ok habits={} journal_entries={} notes={} secure_session={}",
            habits.len(),
            journal.len(),
            notes.len(),
            settings.secure_session
        );

        Self {
            repo,
            habits,
            journal,
            notes,
            profile,
            settings,
            subscribers: Vec::new(),
        }
    }

    // Read accessors. Snapshots are borrowed; callers clone what they keep.

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn journal(&self) -> &BTreeMap<NaiveDate, JournalEntry> {
        &self.journal
    }

    pub fn notes(&self) -> &[DevNote] {
        &self.notes
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Registers a change observer invoked synchronously after every
    /// applied mutation, with the collection that changed.
    pub fn subscribe(&mut self, subscriber: impl Fn(Collection) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    // Mutators.

    /// Flips membership of `date` in the habit's completion set.
    ///
    /// Returns `false` (and applies nothing) when `habit_id` matches no
    /// habit; stale ids from the view layer are expected and harmless.
    pub fn toggle_habit_completion(&mut self, habit_id: &str, date: NaiveDate) -> bool {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == habit_id) else {
            info!("event=habit_toggle module=store status=noop reason=unknown_id");
            return false;
        };

        if !habit.completions.remove(&date) {
            habit.completions.insert(date);
        }
        self.commit(Collection::Habits);
        true
    }

    /// Appends a new habit (creation order is preserved) and returns its id.
    pub fn add_habit(
        &mut self,
        name: impl Into<String>,
        emoji: impl Into<String>,
        category: HabitCategory,
    ) -> String {
        let habit = Habit::new(name, emoji, category);
        let id = habit.id.clone();
        self.habits.push(habit);
        self.commit(Collection::Habits);
        id
    }

    /// Inserts or wholesale-replaces the entry for `entry.date`.
    ///
    /// `last_updated` is stamped here, not by the caller, so it is
    /// monotonic regardless of what the edit buffer carried.
    pub fn upsert_journal_entry(&mut self, mut entry: JournalEntry) {
        entry.last_updated = Utc::now();
        self.journal.insert(entry.date, entry);
        self.commit(Collection::Journal);
    }

    /// Replaces the note with a matching id in place, or prepends it
    /// (the notes collection is browsed newest-first).
    pub fn upsert_note(&mut self, note: DevNote) {
        if let Some(existing) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *existing = note;
        } else {
            self.notes.insert(0, note);
        }
        self.commit(Collection::Notes);
    }

    /// Removes the note with the given id. Idempotent: a second delete of
    /// the same id is a no-op and returns `false`.
    pub fn delete_note(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            info!("event=note_delete module=store status=noop reason=unknown_id");
            return false;
        }
        self.commit(Collection::Notes);
        true
    }

    /// Shallow-merges set fields into the settings singleton.
    ///
    /// Turning `secure_session` on applies in memory only; the flag itself
    /// is not written, so a reload reverts to the last persisted snapshot.
    pub fn patch_settings(&mut self, patch: SettingsPatch) {
        patch.apply_to(&mut self.settings);
        self.commit(Collection::Settings);
    }

    /// Shallow-merges set fields into the profile singleton.
    pub fn patch_profile(&mut self, patch: ProfilePatch) {
        patch.apply_to(&mut self.profile);
        self.commit(Collection::Profile);
    }

    // Derived analytics over the current snapshots, evaluated on demand.
    // Windowed aggregates use the local calendar date; month and year
    // boundaries follow local midnight.

    pub fn consistency_score(&self) -> u32 {
        analytics::consistency_score(&self.habits)
    }

    pub fn category_radar(&self) -> Vec<CategoryScore> {
        analytics::category_radar(&self.habits, Local::now().date_naive())
    }

    pub fn habit_frequency_ranking(&self) -> Vec<HabitFrequency> {
        analytics::habit_frequency_ranking(&self.habits)
    }

    pub fn mood_correlation_series(&self) -> Vec<MoodPoint> {
        analytics::mood_correlation_series(
            &self.journal,
            &self.habits,
            Local::now().date_naive(),
            DEFAULT_WINDOW_DAYS,
        )
    }

    fn commit(&mut self, collection: Collection) {
        self.persist_all();
        for subscriber in &self.subscribers {
            subscriber(collection);
        }
    }

    /// Reserializes every collection to its slot, unless the session is
    /// secure. Write failures are non-fatal: durability is lost for this
    /// change, the in-memory state is not.
    fn persist_all(&self) {
        if self.settings.secure_session {
            debug!("event=persist module=store status=skipped reason=secure_session");
            return;
        }

        self.write_snapshot(HABITS_SLOT, &self.habits);
        self.write_snapshot(JOURNAL_SLOT, &self.journal);
        self.write_snapshot(NOTES_SLOT, &self.notes);
        self.write_snapshot(USER_SLOT, &self.profile);
        self.write_snapshot(SETTINGS_SLOT, &self.settings);
    }

    fn write_snapshot<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                warn!(
                    "event=slot_write module=store status=error slot={key} error_code=serialize_failed error={err}"
                );
                return;
            }
        };

        if let Err(err) = self.repo.write_slot(key, &json) {
            warn!(
                "event=slot_write module=store status=error slot={key} error_code=write_failed error={err}"
            );
        }
    }
}

fn load_slot<R: SlotRepository, T: DeserializeOwned>(
    repo: &R,
    key: &str,
    default: impl FnOnce() -> T,
) -> T {
    match repo.read_slot(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=slot_load module=store status=fallback slot={key} error_code=parse_failed error={err}"
                );
                default()
            }
        },
        // First run: the slot was never written.
        Ok(None) => {
            debug!("event=slot_load module=store status=default slot={key}");
            default()
        }
        Err(err) => {
            warn!(
                "event=slot_load module=store status=fallback slot={key} error_code=read_failed error={err}"
            );
            default()
        }
    }
}
