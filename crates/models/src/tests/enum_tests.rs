use crate::financial_entry::{EntryStatus, EntryType};
use crate::errors::ModelError;

#[test]
fn status_parses_case_insensitively() {
    assert_eq!("settled".parse::<EntryStatus>().unwrap(), EntryStatus::Settled);
    assert_eq!(" Pending ".parse::<EntryStatus>().unwrap(), EntryStatus::Pending);
    assert_eq!("CANCELLED".parse::<EntryStatus>().unwrap(), EntryStatus::Cancelled);
}

#[test]
fn unknown_status_is_a_validation_error() {
    let err = "DONE".parse::<EntryStatus>().unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
}

#[test]
fn type_round_trips_through_display() {
    for t in [EntryType::Income, EntryType::Expense] {
        assert_eq!(t.to_string().parse::<EntryType>().unwrap(), t);
    }
}

#[test]
fn serde_uses_upper_case_names() {
    let json = serde_json::to_string(&EntryStatus::Cancelled).unwrap();
    assert_eq!(json, "\"CANCELLED\"");
    let t: EntryType = serde_json::from_str("\"EXPENSE\"").unwrap();
    assert_eq!(t, EntryType::Expense);
}
