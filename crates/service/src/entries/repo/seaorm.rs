use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Set, Unchanged}, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use models::financial_entry::{ActiveModel, Column, Entity};
use models::{EntryStatus, EntryType};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::entries::domain::{EntryFilter, FinancialEntry};
use crate::entries::repository::EntryRepository;
use crate::errors::ServiceError;

pub struct SeaOrmEntryRepository {
    pub db: Arc<DatabaseConnection>,
}

fn db_err(e: DbErr) -> ServiceError {
    ServiceError::Repository(e.to_string())
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::contract(format!("financial entry {field} must be set before insert")))
}

fn set_if_some<T>(value: Option<T>) -> sea_orm::ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    value.map_or(NotSet, Set)
}

fn insert_model(entry: FinancialEntry) -> Result<ActiveModel, ServiceError> {
    Ok(ActiveModel {
        id: Set(Uuid::new_v4()),
        description: Set(required(entry.description, "description")?),
        month: Set(required(entry.month, "month")?),
        year: Set(required(entry.year, "year")?),
        user_id: Set(required(entry.user_id, "user")?),
        value: Set(required(entry.value, "value")?),
        entry_type: Set(required(entry.entry_type, "type")?),
        status: Set(required(entry.status, "status")?),
        registered_on: Set(required(entry.registered_on, "registration date")?),
    })
}

// absent fields keep their stored value
fn update_model(id: Uuid, entry: FinancialEntry) -> ActiveModel {
    ActiveModel {
        id: Unchanged(id),
        description: set_if_some(entry.description),
        month: set_if_some(entry.month),
        year: set_if_some(entry.year),
        user_id: set_if_some(entry.user_id),
        value: set_if_some(entry.value),
        entry_type: set_if_some(entry.entry_type),
        status: set_if_some(entry.status),
        registered_on: set_if_some(entry.registered_on),
    }
}

fn condition(filter: &EntryFilter) -> Condition {
    Condition::all()
        .add_option(filter.id.map(|v| Column::Id.eq(v)))
        .add_option(filter.description.clone().map(|v| Column::Description.eq(v)))
        .add_option(filter.month.map(|v| Column::Month.eq(v)))
        .add_option(filter.year.map(|v| Column::Year.eq(v)))
        .add_option(filter.user_id.map(|v| Column::UserId.eq(v)))
        .add_option(filter.value.map(|v| Column::Value.eq(v)))
        .add_option(filter.entry_type.map(|v| Column::EntryType.eq(v)))
        .add_option(filter.status.map(|v| Column::Status.eq(v)))
        .add_option(filter.registered_on.map(|v| Column::RegisteredOn.eq(v)))
}

#[async_trait::async_trait]
impl EntryRepository for SeaOrmEntryRepository {
    async fn save(&self, entry: FinancialEntry) -> Result<FinancialEntry, ServiceError> {
        let saved = match entry.id {
            None => insert_model(entry)?.insert(self.db.as_ref()).await.map_err(db_err)?,
            Some(id) => match update_model(id, entry).update(self.db.as_ref()).await {
                Ok(m) => m,
                Err(DbErr::RecordNotUpdated) => return Err(ServiceError::not_found("financial entry")),
                Err(e) => return Err(db_err(e)),
            },
        };
        debug!(id = %saved.id, "financial entry saved");
        Ok(saved.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let res = Entity::delete_by_id(id).exec(self.db.as_ref()).await.map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("financial entry"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FinancialEntry>, ServiceError> {
        let found = Entity::find_by_id(id).one(self.db.as_ref()).await.map_err(db_err)?;
        Ok(found.map(FinancialEntry::from))
    }

    async fn find_by_example(&self, filter: &EntryFilter) -> Result<Vec<FinancialEntry>, ServiceError> {
        let rows = Entity::find()
            .filter(condition(filter))
            .order_by_asc(Column::Year)
            .order_by_asc(Column::Month)
            .all(self.db.as_ref())
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(FinancialEntry::from).collect())
    }

    async fn sum_value(&self, user_id: Uuid, entry_type: EntryType, status: EntryStatus) -> Result<Decimal, ServiceError> {
        let total: Option<Option<Decimal>> = Entity::find()
            .select_only()
            .column_as(Column::Value.sum(), "total")
            .filter(Column::UserId.eq(user_id))
            .filter(Column::EntryType.eq(entry_type))
            .filter(Column::Status.eq(status))
            .into_tuple::<Option<Decimal>>()
            .one(self.db.as_ref())
            .await
            .map_err(db_err)?;
        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }
}
