use growthpath_core::db::open_db_in_memory;
use growthpath_core::store::HABITS_SLOT;
use growthpath_core::{
    Collection, HabitCategory, SlotRepository, SqliteSlotRepository, Store,
};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn toggling_twice_is_an_involution() {
    let conn = open_db_in_memory().unwrap();
    let mut store = Store::load(SqliteSlotRepository::new(&conn));
    let date = day(2026, 8, 25);

    let before = store.habits().to_vec();

    assert!(store.toggle_habit_completion("4", date));
    assert!(store
        .habits()
        .iter()
        .find(|h| h.id == "4")
        .unwrap()
        .completions
        .contains(&date));

    assert!(store.toggle_habit_completion("4", date));
    assert_eq!(store.habits(), before.as_slice());
}

#[test]
fn toggle_with_unknown_id_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = Store::load(SqliteSlotRepository::new(&conn));

    let before = store.habits().to_vec();
    assert!(!store.toggle_habit_completion("no-such-habit", day(2026, 8, 25)));
    assert_eq!(store.habits(), before.as_slice());
}

#[test]
fn add_habit_to_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    // An explicitly stored empty list is honored (only an absent or corrupt
    // slot triggers the starter set).
    SqliteSlotRepository::new(&conn)
        .write_slot(HABITS_SLOT, "[]")
        .unwrap();

    let mut store = Store::load(SqliteSlotRepository::new(&conn));
    assert!(store.habits().is_empty());

    let id = store.add_habit("Read", "📖", HabitCategory::Learning);

    assert_eq!(store.habits().len(), 1);
    let habit = &store.habits()[0];
    assert_eq!(habit.id, id);
    assert!(!habit.id.is_empty());
    assert_eq!(habit.name, "Read");
    assert_eq!(habit.emoji, "📖");
    assert!(habit.completions.is_empty());
}

#[test]
fn added_habits_keep_creation_order_and_unique_ids() {
    let conn = open_db_in_memory().unwrap();
    let mut store = Store::load(SqliteSlotRepository::new(&conn));

    let first = store.add_habit("Stretch", "🤸", HabitCategory::Health);
    let second = store.add_habit("Review PRs", "🔍", HabitCategory::Code);

    assert_ne!(first, second);
    let names: Vec<&str> = store.habits().iter().map(|h| h.name.as_str()).collect();
    assert_eq!(&names[names.len() - 2..], &["Stretch", "Review PRs"]);
}

#[test]
fn subscribers_hear_about_each_applied_mutation() {
    let conn = open_db_in_memory().unwrap();
    let mut store = Store::load(SqliteSlotRepository::new(&conn));

    let seen: Rc<RefCell<Vec<Collection>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |collection| sink.borrow_mut().push(collection));

    store.toggle_habit_completion("1", day(2026, 8, 25));
    store.add_habit("Read", "📖", HabitCategory::Learning);
    // No-ops do not notify.
    store.toggle_habit_completion("missing", day(2026, 8, 25));
    store.delete_note("missing");

    assert_eq!(
        seen.borrow().as_slice(),
        &[Collection::Habits, Collection::Habits]
    );
}
