//! Service layer for the bookkeeping backend.
//! - `users`: registration with unique email and credential checks.
//! - `entries`: financial entry validation, lifecycle and queries.
//! - Repository traits separate business rules from data access; SeaORM and
//!   in-memory implementations live next to each trait.

pub mod errors;
pub mod users;
pub mod entries;
#[cfg(test)]
pub mod test_support;
