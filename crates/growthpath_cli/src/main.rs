//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `growthpath_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use growthpath_core::db::open_db_in_memory;
use growthpath_core::{SqliteSlotRepository, Store};

fn main() {
    println!("growthpath_core version={}", growthpath_core::core_version());

    // Exercise the full load path against a throwaway in-memory medium:
    // seeded defaults, one analytics pass, no durable side effects.
    match open_db_in_memory() {
        Ok(conn) => {
            let store = Store::load(SqliteSlotRepository::new(&conn));
            println!("seeded_habits={}", store.habits().len());
            println!("consistency_score={}", store.consistency_score());
        }
        Err(err) => {
            eprintln!("smoke probe failed to open in-memory db: {err}");
            std::process::exit(1);
        }
    }
}
