use std::sync::Arc;

use chrono::Local;
use models::{EntryStatus, EntryType};
use rust_decimal::Decimal;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use super::domain::{EntryFilter, FinancialEntry};
use super::repository::EntryRepository;
use super::validation::validate;
use crate::errors::ServiceError;

/// Financial entry business service.
pub struct EntryService<R: EntryRepository + ?Sized> {
    repo: Arc<R>,
}

fn require_id(entry: &FinancialEntry, op: &str) -> Result<Uuid, ServiceError> {
    entry.id.ok_or_else(|| {
        error!(op, "financial entry without id");
        ServiceError::contract(format!("cannot {op} a financial entry without id"))
    })
}

impl<R: EntryRepository + ?Sized> EntryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate and persist a new entry. Status defaults to `PENDING` and the
    /// registration date to today.
    ///
    /// # Examples
    /// ```
    /// use service::entries::{EntryService, FinancialEntry, repository::mock::MockEntryRepository};
    /// use models::{EntryStatus, EntryType};
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    /// let svc = EntryService::new(Arc::new(MockEntryRepository::default()));
    /// let entry = FinancialEntry {
    ///     description: Some("Salário".into()),
    ///     month: Some(5),
    ///     year: Some(2022),
    ///     user_id: Some(uuid::Uuid::new_v4()),
    ///     value: Some(Decimal::new(15000, 2)),
    ///     entry_type: Some(EntryType::Income),
    ///     ..Default::default()
    /// };
    /// let saved = tokio_test::block_on(svc.save(entry)).unwrap();
    /// assert!(saved.id.is_some());
    /// assert_eq!(saved.status, Some(EntryStatus::Pending));
    /// ```
    #[instrument(skip(self, entry), fields(user_id = ?entry.user_id))]
    pub async fn save(&self, mut entry: FinancialEntry) -> Result<FinancialEntry, ServiceError> {
        validate(&entry)?;
        entry.id = None;
        entry.status.get_or_insert(EntryStatus::Pending);
        entry.registered_on.get_or_insert_with(|| Local::now().date_naive());

        let saved = self.repo.save(entry).await?;
        info!(entry_id = ?saved.id, "entry_created");
        Ok(saved)
    }

    #[instrument(skip(self, entry), fields(entry_id = ?entry.id))]
    pub async fn update(&self, entry: FinancialEntry) -> Result<FinancialEntry, ServiceError> {
        require_id(&entry, "update")?;
        validate(&entry)?;

        let saved = self.repo.save(entry).await?;
        info!(entry_id = ?saved.id, status = ?saved.status, "entry_updated");
        Ok(saved)
    }

    #[instrument(skip(self, entry), fields(entry_id = ?entry.id))]
    pub async fn delete(&self, entry: &FinancialEntry) -> Result<(), ServiceError> {
        let id = require_id(entry, "delete")?;
        self.repo.delete(id).await?;
        info!(entry_id = %id, "entry_deleted");
        Ok(())
    }

    /// All entries equal to `criteria` on each of its populated fields.
    pub async fn find(&self, criteria: &FinancialEntry) -> Result<Vec<FinancialEntry>, ServiceError> {
        let filter = EntryFilter::from(criteria);
        let found = self.repo.find_by_example(&filter).await?;
        debug!(count = found.len(), "entries found");
        Ok(found)
    }

    /// Set the status on `entry` and persist it through [`Self::update`].
    ///
    /// `entry` keeps the new status even when the update fails.
    pub async fn change_status(&self, entry: &mut FinancialEntry, status: EntryStatus) -> Result<FinancialEntry, ServiceError> {
        entry.status = Some(status);
        self.update(entry.clone()).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<FinancialEntry>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Settled income minus settled expense.
    #[instrument(skip(self))]
    pub async fn balance_for_user(&self, user_id: Uuid) -> Result<Decimal, ServiceError> {
        let income = self.repo.sum_value(user_id, EntryType::Income, EntryStatus::Settled).await?;
        let expense = self.repo.sum_value(user_id, EntryType::Expense, EntryStatus::Settled).await?;
        Ok(income - expense)
    }
}
