//! Domain model for habits, journal entries, dev notes and user records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep serialized field names compatible with the stored JSON format.
//!
//! # Invariants
//! - Categorical fields are closed enums with exhaustive matching, never
//!   open strings.
//! - Day-keyed data uses canonical `YYYY-MM-DD` dates (`chrono::NaiveDate`).

pub mod habit;
pub mod journal;
pub mod note;
pub mod profile;
