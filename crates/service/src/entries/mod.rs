//! Financial entries: validation, persistence abstraction and lifecycle
//! service (create, update, delete, filter, status changes, balance).

pub mod domain;
pub mod validation;
pub mod repository;
pub mod service;
pub mod repo {
    pub mod seaorm;
}

pub use domain::{EntryFilter, FinancialEntry};
pub use service::EntryService;
