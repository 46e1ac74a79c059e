use crate::db::connect_with_config;
use crate::financial_entry::{self, EntryStatus, EntryType};
use crate::user;
use crate::errors::ModelError;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use anyhow::Result;
use migration::MigratorTrait;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::db_tests_enabled;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut cfg = configs::DatabaseConfig::default();
    cfg.normalize_from_env();
    cfg.min_connections = 1;
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn unique_email() -> String {
    format!("crud_{}@example.com", Uuid::new_v4())
}

#[tokio::test]
async fn test_user_create_and_find_by_email() -> Result<()> {
    if !db_tests_enabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let email = unique_email();
    let created = user::create(&db, "usuario", &email, "$argon2id$v=19$stub").await?;
    assert_eq!(created.email, email);

    let found = user::find_by_email(&db, &email).await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));

    user::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() -> Result<()> {
    if !db_tests_enabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let email = unique_email();
    let first = user::create(&db, "a", &email, "hash").await?;
    let second = user::create(&db, "b", &email, "hash").await;
    assert!(matches!(second, Err(ModelError::Conflict(_))));

    user::Entity::delete_by_id(first.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_entry_crud_and_cascade() -> Result<()> {
    if !db_tests_enabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;
    let owner = user::create(&db, "owner", &unique_email(), "hash").await?;

    let am = financial_entry::ActiveModel {
        id: Set(Uuid::new_v4()),
        description: Set("Lancamento qualquer".into()),
        month: Set(1),
        year: Set(2019),
        user_id: Set(owner.id),
        value: Set(Decimal::new(10, 0)),
        entry_type: Set(EntryType::Income),
        status: Set(EntryStatus::Pending),
        registered_on: Set(chrono::Utc::now().date_naive()),
    };
    let saved = am.insert(&db).await?;

    let mut am: financial_entry::ActiveModel = saved.clone().into();
    am.year = Set(2022);
    am.description = Set("Teste atualizar".into());
    am.status = Set(EntryStatus::Cancelled);
    let updated = am.update(&db).await?;
    assert_eq!(updated.year, 2022);
    assert_eq!(updated.description, "Teste atualizar");
    assert_eq!(updated.status, EntryStatus::Cancelled);

    let entries = owner.find_related(financial_entry::Entity).all(&db).await?;
    assert_eq!(entries.len(), 1);

    // deleting the owner removes its entries through the FK
    user::Entity::delete_by_id(owner.id).exec(&db).await?;
    let gone = financial_entry::Entity::find_by_id(saved.id).one(&db).await?;
    assert!(gone.is_none());
    Ok(())
}
