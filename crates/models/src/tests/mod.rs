/// Enum parsing and serialization
pub mod enum_tests;

/// CRUD against a live database (skipped unless DATABASE_URL is set)
pub mod crud_tests;

/// Live database tests need a reachable PostgreSQL instance.
pub(crate) fn db_tests_enabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_err() && std::env::var("DATABASE_URL").is_ok()
}
