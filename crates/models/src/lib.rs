//! SeaORM entities for users and their financial entries, plus connection
//! helpers shared by the service and server crates.

pub mod errors;
pub mod db;
pub mod user;
pub mod financial_entry;

pub use financial_entry::{EntryStatus, EntryType};

#[cfg(test)]
mod tests;
