use chrono::NaiveDate;
use models::{financial_entry, EntryStatus, EntryType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Business view of a financial entry.
///
/// Every field is optional: the same shape carries records being validated,
/// persisted records, and partial records used as filter criteria.
/// The owning user is carried by identifier only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialEntry {
    pub id: Option<Uuid>,
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub user_id: Option<Uuid>,
    pub value: Option<Decimal>,
    #[serde(rename = "type")]
    pub entry_type: Option<EntryType>,
    pub status: Option<EntryStatus>,
    pub registered_on: Option<NaiveDate>,
}

impl From<financial_entry::Model> for FinancialEntry {
    fn from(m: financial_entry::Model) -> Self {
        Self {
            id: Some(m.id),
            description: Some(m.description),
            month: Some(m.month),
            year: Some(m.year),
            user_id: Some(m.user_id),
            value: Some(m.value),
            entry_type: Some(m.entry_type),
            status: Some(m.status),
            registered_on: Some(m.registered_on),
        }
    }
}

/// Exact-match criteria built from the populated fields of a partial entry.
/// `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub id: Option<Uuid>,
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub user_id: Option<Uuid>,
    pub value: Option<Decimal>,
    pub entry_type: Option<EntryType>,
    pub status: Option<EntryStatus>,
    pub registered_on: Option<NaiveDate>,
}

impl From<&FinancialEntry> for EntryFilter {
    fn from(e: &FinancialEntry) -> Self {
        Self {
            id: e.id,
            description: e.description.clone(),
            month: e.month,
            year: e.year,
            user_id: e.user_id,
            value: e.value,
            entry_type: e.entry_type,
            status: e.status,
            registered_on: e.registered_on,
        }
    }
}

fn field_matches<T: PartialEq>(want: &Option<T>, have: &Option<T>) -> bool {
    match want {
        None => true,
        Some(w) => have.as_ref() == Some(w),
    }
}

impl EntryFilter {
    pub fn matches(&self, e: &FinancialEntry) -> bool {
        field_matches(&self.id, &e.id)
            && field_matches(&self.description, &e.description)
            && field_matches(&self.month, &e.month)
            && field_matches(&self.year, &e.year)
            && field_matches(&self.user_id, &e.user_id)
            && field_matches(&self.value, &e.value)
            && field_matches(&self.entry_type, &e.entry_type)
            && field_matches(&self.status, &e.status)
            && field_matches(&self.registered_on, &e.registered_on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salary(user: Uuid) -> FinancialEntry {
        FinancialEntry {
            id: Some(Uuid::new_v4()),
            description: Some("Salário".into()),
            month: Some(5),
            year: Some(2022),
            user_id: Some(user),
            value: Some(Decimal::new(15000, 2)),
            entry_type: Some(EntryType::Income),
            status: Some(EntryStatus::Pending),
            registered_on: None,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let f = EntryFilter::default();
        assert!(f.matches(&salary(Uuid::new_v4())));
        assert!(f.matches(&FinancialEntry::default()));
    }

    #[test]
    fn filter_uses_only_populated_fields() {
        let user = Uuid::new_v4();
        let criteria = FinancialEntry { user_id: Some(user), month: Some(5), ..Default::default() };
        let f = EntryFilter::from(&criteria);

        assert!(f.matches(&salary(user)));
        assert!(!f.matches(&salary(Uuid::new_v4())));

        let mut june = salary(user);
        june.month = Some(6);
        assert!(!f.matches(&june));
    }

    #[test]
    fn description_match_is_exact() {
        let user = Uuid::new_v4();
        let f = EntryFilter { description: Some("Sal".into()), ..Default::default() };
        assert!(!f.matches(&salary(user)));
    }

    #[test]
    fn json_uses_type_key() {
        let e = salary(Uuid::new_v4());
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "INCOME");
        assert_eq!(json["status"], "PENDING");
    }
}
