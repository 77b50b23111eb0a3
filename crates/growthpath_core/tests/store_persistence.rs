use growthpath_core::db::{open_db, open_db_in_memory};
use growthpath_core::store::{
    HABITS_SLOT, JOURNAL_SLOT, NOTES_SLOT, SETTINGS_SLOT, USER_SLOT,
};
use growthpath_core::{
    DevNote, HabitCategory, JournalEntry, NoteCategory, SettingsPatch, SlotRepository,
    SqliteSlotRepository, Store,
};
use chrono::NaiveDate;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn first_run_seeds_defaults() {
    let conn = open_db_in_memory().unwrap();
    let store = Store::load(SqliteSlotRepository::new(&conn));

    assert_eq!(store.habits().len(), 8);
    assert!(store.journal().is_empty());
    assert!(store.notes().is_empty());
    assert_eq!(store.profile().first_name, "Aman");
    assert!(!store.settings().secure_session);
}

#[test]
fn mutations_round_trip_through_slots() {
    let conn = open_db_in_memory().unwrap();

    let (habit_snapshot, journal_snapshot, notes_snapshot) = {
        let mut store = Store::load(SqliteSlotRepository::new(&conn));
        store.add_habit("Read", "📖", HabitCategory::Learning);
        store.toggle_habit_completion("1", day(2026, 8, 20));
        store.upsert_journal_entry(JournalEntry::new(day(2026, 8, 20)));
        store.upsert_note(DevNote::new(
            "Borrow checker notes",
            NoteCategory::Research,
            "aliasing xor mutation",
            vec!["rust".to_string()],
        ));
        (
            store.habits().to_vec(),
            store.journal().clone(),
            store.notes().to_vec(),
        )
    };

    let reloaded = Store::load(SqliteSlotRepository::new(&conn));
    assert_eq!(reloaded.habits(), habit_snapshot.as_slice());
    assert_eq!(reloaded.journal(), &journal_snapshot);
    assert_eq!(reloaded.notes(), notes_snapshot.as_slice());
}

#[test]
fn state_survives_reopen_of_file_backed_db() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("growthpath.sqlite3");

    {
        let conn = open_db(&db_path).unwrap();
        let mut store = Store::load(SqliteSlotRepository::new(&conn));
        store.add_habit("Journaling", "📓", HabitCategory::Mental);
    }

    let conn = open_db(&db_path).unwrap();
    let store = Store::load(SqliteSlotRepository::new(&conn));
    assert_eq!(store.habits().len(), 9);
    assert_eq!(store.habits().last().unwrap().name, "Journaling");
}

#[test]
fn corrupt_slot_falls_back_without_blocking_others() {
    let conn = open_db_in_memory().unwrap();

    {
        let mut store = Store::load(SqliteSlotRepository::new(&conn));
        store.upsert_journal_entry(JournalEntry::new(day(2026, 8, 1)));
    }

    // Clobber only the habits slot; the journal slot stays valid.
    let repo = SqliteSlotRepository::new(&conn);
    repo.write_slot(HABITS_SLOT, "{not json").unwrap();

    let store = Store::load(SqliteSlotRepository::new(&conn));
    assert_eq!(store.habits().len(), 8, "habits must fall back to the starter set");
    assert_eq!(store.journal().len(), 1, "journal must load untouched");
}

#[test]
fn secure_session_leaves_slots_untouched() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);

    let mut store = Store::load(SqliteSlotRepository::new(&conn));
    // The first mutation persists normally and gives every slot a baseline.
    store.toggle_habit_completion("1", day(2026, 8, 10));
    let baseline: Vec<Option<String>> = slot_values(&repo);

    store.patch_settings(SettingsPatch {
        secure_session: Some(true),
        ..SettingsPatch::default()
    });
    store.toggle_habit_completion("2", day(2026, 8, 11));
    store.upsert_journal_entry(JournalEntry::new(day(2026, 8, 11)));
    store.delete_note("nope");

    // In-memory state moved on...
    assert!(store
        .habits()
        .iter()
        .any(|h| h.id == "2" && !h.completions.is_empty()));
    // ...but nothing durable changed, including the secure_session flag.
    assert_eq!(slot_values(&repo), baseline);

    let reloaded = Store::load(SqliteSlotRepository::new(&conn));
    assert!(!reloaded.settings().secure_session);
    assert!(reloaded
        .habits()
        .iter()
        .find(|h| h.id == "2")
        .unwrap()
        .completions
        .is_empty());
}

#[test]
fn disabling_secure_session_resumes_persistence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);

    let mut store = Store::load(SqliteSlotRepository::new(&conn));
    store.patch_settings(SettingsPatch {
        secure_session: Some(true),
        ..SettingsPatch::default()
    });
    store.toggle_habit_completion("3", day(2026, 8, 12));
    assert_eq!(repo.read_slot(HABITS_SLOT).unwrap(), None);

    // Turning the flag off persists on that same mutation.
    store.patch_settings(SettingsPatch {
        secure_session: Some(false),
        ..SettingsPatch::default()
    });
    let habits_json = repo.read_slot(HABITS_SLOT).unwrap().unwrap();
    assert!(habits_json.contains("2026-08-12"));
}

#[test]
fn durable_write_failure_keeps_in_memory_state() {
    let conn = open_db_in_memory().unwrap();
    let mut store = Store::load(SqliteSlotRepository::new(&conn));

    // Sabotage the medium; every subsequent write fails.
    conn.execute_batch("DROP TABLE slots;").unwrap();

    store.add_habit("Stretch", "🤸", HabitCategory::Health);
    assert_eq!(store.habits().len(), 9, "mutation applies despite lost durability");
}

fn slot_values(repo: &SqliteSlotRepository<'_>) -> Vec<Option<String>> {
    [
        HABITS_SLOT,
        JOURNAL_SLOT,
        NOTES_SLOT,
        USER_SLOT,
        SETTINGS_SLOT,
    ]
    .iter()
    .map(|slot| repo.read_slot(slot).unwrap())
    .collect()
}
