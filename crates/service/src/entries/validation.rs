//! Field rules for a financial entry, checked in a fixed order; the first
//! failing rule is reported and the rest are not evaluated.

use rust_decimal::Decimal;

use super::domain::FinancialEntry;
use crate::errors::ServiceError;

pub const INVALID_DESCRIPTION: &str = "Informe uma Descrição válida.";
pub const INVALID_MONTH: &str = "Informe um Mês válido.";
pub const INVALID_YEAR: &str = "Informe um Ano válido.";
pub const MISSING_USER: &str = "Informe um Usuário.";
pub const INVALID_VALUE: &str = "Informe um Valor válido.";
pub const MISSING_TYPE: &str = "Informe um Tipo de lançamento.";

type Rule = fn(&FinancialEntry) -> bool;

const RULES: [(Rule, &str); 6] = [
    (has_description, INVALID_DESCRIPTION),
    (has_valid_month, INVALID_MONTH),
    (has_valid_year, INVALID_YEAR),
    (has_user, MISSING_USER),
    (has_positive_value, INVALID_VALUE),
    (has_type, MISSING_TYPE),
];

fn has_description(e: &FinancialEntry) -> bool {
    e.description.as_deref().is_some_and(|d| !d.trim().is_empty())
}

fn has_valid_month(e: &FinancialEntry) -> bool {
    e.month.is_some_and(|m| (1..=12).contains(&m))
}

// length of the decimal text, sign included
fn has_valid_year(e: &FinancialEntry) -> bool {
    e.year.is_some_and(|y| y.to_string().len() == 4)
}

fn has_user(e: &FinancialEntry) -> bool {
    e.user_id.is_some()
}

/// Stored as `numeric(16, 2)`: at most 14 integer digits and 2 decimals.
const MAX_VALUE_EXCLUSIVE: Decimal = Decimal::from_parts(0x107A_4000, 0x5AF3, 0, false, 0); // 100_000_000_000_000
const VALUE_SCALE: u32 = 2;

fn has_positive_value(e: &FinancialEntry) -> bool {
    e.value.is_some_and(|v| {
        v > Decimal::ZERO && v.normalize().scale() <= VALUE_SCALE && v < MAX_VALUE_EXCLUSIVE
    })
}

fn has_type(e: &FinancialEntry) -> bool {
    e.entry_type.is_some()
}

/// Validate an entry, returning the message of the first violated rule.
pub fn validate(entry: &FinancialEntry) -> Result<(), ServiceError> {
    match RULES.iter().find(|(passes, _)| !passes(entry)) {
        Some((_, message)) => Err(ServiceError::business(*message)),
        None => Ok(()),
    }
}
