use async_trait::async_trait;
use models::{EntryStatus, EntryType};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::domain::{EntryFilter, FinancialEntry};
use crate::errors::ServiceError;

/// Financial-entry store.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Insert when `id` is `None` (the store assigns it), update otherwise.
    /// Updating an unknown id is [`ServiceError::NotFound`].
    async fn save(&self, entry: FinancialEntry) -> Result<FinancialEntry, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FinancialEntry>, ServiceError>;
    async fn find_by_example(&self, filter: &EntryFilter) -> Result<Vec<FinancialEntry>, ServiceError>;
    /// Sum of `value` over a user's entries of one type and status; zero when none match.
    async fn sum_value(&self, user_id: Uuid, entry_type: EntryType, status: EntryStatus) -> Result<Decimal, ServiceError>;
}

/// In-memory repository for tests and doc examples. Counts store calls.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockEntryRepository {
        entries: Mutex<BTreeMap<Uuid, FinancialEntry>>,
        saves: AtomicUsize,
        deletes: AtomicUsize,
    }

    impl MockEntryRepository {
        /// Seed a persisted entry (assigning an id if missing) without counting it as a save.
        pub fn with_entry(self, mut entry: FinancialEntry) -> Self {
            let id = *entry.id.get_or_insert_with(Uuid::new_v4);
            if let Ok(mut entries) = self.entries.lock() {
                entries.insert(id, entry);
            }
            self
        }

        pub fn save_calls(&self) -> usize { self.saves.load(Ordering::SeqCst) }

        pub fn delete_calls(&self) -> usize { self.deletes.load(Ordering::SeqCst) }

        fn entries(&self) -> Result<MutexGuard<'_, BTreeMap<Uuid, FinancialEntry>>, ServiceError> {
            self.entries.lock().map_err(|e| ServiceError::Repository(e.to_string()))
        }
    }

    #[async_trait]
    impl EntryRepository for MockEntryRepository {
        async fn save(&self, mut entry: FinancialEntry) -> Result<FinancialEntry, ServiceError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            let mut entries = self.entries()?;
            let id = match entry.id {
                Some(id) if !entries.contains_key(&id) => return Err(ServiceError::not_found("financial entry")),
                Some(id) => id,
                None => Uuid::new_v4(),
            };
            entry.id = Some(id);
            entries.insert(id, entry.clone());
            Ok(entry)
        }

        async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            match self.entries()?.remove(&id) {
                Some(_) => Ok(()),
                None => Err(ServiceError::not_found("financial entry")),
            }
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<FinancialEntry>, ServiceError> {
            Ok(self.entries()?.get(&id).cloned())
        }

        async fn find_by_example(&self, filter: &EntryFilter) -> Result<Vec<FinancialEntry>, ServiceError> {
            Ok(self.entries()?.values().filter(|e| filter.matches(e)).cloned().collect())
        }

        async fn sum_value(&self, user_id: Uuid, entry_type: EntryType, status: EntryStatus) -> Result<Decimal, ServiceError> {
            let filter = EntryFilter {
                user_id: Some(user_id),
                entry_type: Some(entry_type),
                status: Some(status),
                ..Default::default()
            };
            Ok(self.entries()?
                .values()
                .filter(|e| filter.matches(e))
                .filter_map(|e| e.value)
                .sum())
        }
    }
}
