//! Persistence boundary between the store and the durable slot medium.

pub mod slot_repo;
