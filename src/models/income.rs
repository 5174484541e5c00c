use crate::ledger::entry::IncomeEntry;
use crate::ledger::period::{CalendarDate, Month};
use chrono::{DateTime, NaiveDate, Utc};
use rocket::serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

/// An income row as persisted.
#[derive(Serialize, Debug, Clone, sqlx::FromRow)]
pub struct Income {
    pub id: Uuid,
    pub user_id: Uuid,
    pub source: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub income_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Dates arrive as strings and are parsed by the period model, so a
/// malformed value surfaces as an invalid-input error instead of being
/// bent by serde into some nearby date.
#[derive(Deserialize, Debug, Validate)]
pub struct IncomeRequest {
    #[validate(length(min = 1))]
    pub source: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub income_date: String,
}

#[derive(Serialize, Debug)]
pub struct IncomeResponse {
    pub id: Uuid,
    pub source: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub income_date: String,
    pub year: i32,
    pub month: Month,
}

impl From<&Income> for IncomeEntry {
    fn from(income: &Income) -> Self {
        IncomeEntry::normalize(
            income.id,
            income.source.clone(),
            income.category.clone(),
            income.amount,
            CalendarDate::from(income.income_date),
        )
    }
}

impl From<&IncomeEntry> for IncomeResponse {
    fn from(entry: &IncomeEntry) -> Self {
        Self {
            id: entry.id,
            source: entry.source.clone(),
            category: entry.category.clone(),
            amount: entry.amount,
            income_date: entry.date.format_iso(),
            year: entry.year,
            month: entry.month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn row_normalizes_into_entry_with_derived_period() {
        let row = Income {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            source: "Salary".into(),
            category: Some("Job".into()),
            amount: dec!(2500),
            income_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            created_at: Utc::now(),
        };

        let entry = IncomeEntry::from(&row);
        assert_eq!(entry.year, 2025);
        assert_eq!(entry.month, Month::February);

        let response = IncomeResponse::from(&entry);
        assert_eq!(response.income_date, "2025-02-01");
    }

    #[test]
    fn request_validation_rejects_empty_source() {
        let request = IncomeRequest {
            source: String::new(),
            category: None,
            amount: dec!(10),
            income_date: "2025-02-01".into(),
        };
        assert!(request.validate().is_err());
    }
}
