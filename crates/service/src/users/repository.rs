use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{NewUser, User};
use crate::errors::ServiceError;

/// User store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user; the store assigns the identifier.
    async fn save(&self, user: NewUser) -> Result<User, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Mutex, MutexGuard};

    use crate::users::EMAIL_ALREADY_REGISTERED;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<String, User>>, // key: email
        saves: AtomicUsize,
    }

    impl MockUserRepository {
        /// Seed an already-persisted user without counting it as a save.
        pub fn with_user(self, user: User) -> Self {
            if let Ok(mut users) = self.users.lock() {
                users.insert(user.email.clone(), user);
            }
            self
        }

        /// Number of `save` calls received, successful or not.
        pub fn save_calls(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }

        fn users(&self) -> Result<MutexGuard<'_, HashMap<String, User>>, ServiceError> {
            self.users.lock().map_err(|e| ServiceError::Repository(e.to_string()))
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn save(&self, user: NewUser) -> Result<User, ServiceError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            let mut users = self.users()?;
            // same outcome as the unique index on user.email
            if users.contains_key(&user.email) {
                return Err(ServiceError::business(EMAIL_ALREADY_REGISTERED));
            }
            let stored = User { id: Uuid::new_v4(), name: user.name, email: user.email, password_hash: user.password_hash };
            users.insert(stored.email.clone(), stored.clone());
            Ok(stored)
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
            Ok(self.users()?.get(email).cloned())
        }

        async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
            Ok(self.users()?.contains_key(email))
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ServiceError> {
            Ok(self.users()?.values().find(|u| u.id == id).cloned())
        }
    }
}
