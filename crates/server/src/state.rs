use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::entries::repo::seaorm::SeaOrmEntryRepository;
use service::entries::repository::EntryRepository;
use service::entries::EntryService;
use service::users::repo::seaorm::SeaOrmUserRepository;
use service::users::repository::UserRepository;
use service::users::UserService;

/// Shared handler state. Services sit behind trait objects so tests can run
/// the router on in-memory repositories.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<UserService<dyn UserRepository>>,
    pub entries: Arc<EntryService<dyn EntryRepository>>,
}

impl ServerState {
    pub fn new(user_repo: Arc<dyn UserRepository>, entry_repo: Arc<dyn EntryRepository>) -> Self {
        Self {
            users: Arc::new(UserService::new(user_repo)),
            entries: Arc::new(EntryService::new(entry_repo)),
        }
    }

    /// Both SeaORM repositories share one connection pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        let db = Arc::new(db);
        Self::new(
            Arc::new(SeaOrmUserRepository { db: Arc::clone(&db) }),
            Arc::new(SeaOrmEntryRepository { db }),
        )
    }
}
