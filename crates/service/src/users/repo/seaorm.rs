use std::sync::Arc;

use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use models::errors::ModelError;
use crate::errors::ServiceError;
use crate::users::domain::{NewUser, User};
use crate::users::repository::UserRepository;
use crate::users::EMAIL_ALREADY_REGISTERED;

pub struct SeaOrmUserRepository {
    pub db: Arc<DatabaseConnection>,
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn save(&self, user: NewUser) -> Result<User, ServiceError> {
        match models::user::create(self.db.as_ref(), &user.name, &user.email, &user.password_hash).await {
            Ok(created) => Ok(created.into()),
            // lost the race against a concurrent registration
            Err(ModelError::Conflict(_)) => Err(ServiceError::business(EMAIL_ALREADY_REGISTERED)),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        let found = models::user::find_by_email(self.db.as_ref(), email).await?;
        Ok(found.map(User::from))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        Ok(models::user::find_by_email(self.db.as_ref(), email).await?.is_some())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ServiceError> {
        let found = models::user::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(found.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn row(email: &str) -> models::user::Model {
        models::user::Model {
            id: Uuid::new_v4(),
            name: "usuario".into(),
            email: email.into(),
            password_hash: "$argon2id$stub".into(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn find_by_email_maps_row_to_domain() {
        let stored = row("usuario@email.com");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();
        let repo = SeaOrmUserRepository { db: Arc::new(db) };

        let found = repo.find_by_email("usuario@email.com").await.unwrap().unwrap();
        assert_eq!(found.id, stored.id);
        assert_eq!(found.password_hash, stored.password_hash);
    }

    #[tokio::test]
    async fn exists_by_email_is_false_without_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<models::user::Model>::new()])
            .into_connection();
        let repo = SeaOrmUserRepository { db: Arc::new(db) };

        assert!(!repo.exists_by_email("usuario@email.com").await.unwrap());
    }

    #[tokio::test]
    async fn save_returns_inserted_row() {
        let stored = row("novo@email.com");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();
        let repo = SeaOrmUserRepository { db: Arc::new(db) };

        let saved = repo
            .save(NewUser { name: "usuario".into(), email: "novo@email.com".into(), password_hash: "$argon2id$stub".into() })
            .await
            .unwrap();
        assert_eq!(saved, User::from(stored));
    }
}
