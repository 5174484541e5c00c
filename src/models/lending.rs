use crate::ledger::entry::{DebtEntry, DebtKind};
use crate::ledger::period::{CalendarDate, Month};
use chrono::{DateTime, NaiveDate, Utc};
use rocket::serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

/// A lending row as persisted.
#[derive(Serialize, Debug, Clone, sqlx::FromRow)]
pub struct Lending {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub lend_date: NaiveDate,
    pub due_date: NaiveDate,
    pub settled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct LendingRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub amount: Decimal,
    pub lend_date: String,
    pub due_date: String,
}

#[derive(Serialize, Debug)]
pub struct LendingResponse {
    pub id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub lend_date: String,
    pub due_date: String,
    pub settled: bool,
    pub year: i32,
    pub month: Month,
    pub day: u8,
    pub due_day: u8,
}

impl From<&Lending> for DebtEntry {
    fn from(lending: &Lending) -> Self {
        DebtEntry::normalize(
            lending.id,
            DebtKind::Lending,
            lending.name.clone(),
            lending.amount,
            CalendarDate::from(lending.lend_date),
            CalendarDate::from(lending.due_date),
            lending.settled,
        )
    }
}

impl From<&DebtEntry> for LendingResponse {
    fn from(entry: &DebtEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            amount: entry.amount,
            lend_date: entry.date.format_iso(),
            due_date: entry.due_date.format_iso(),
            settled: entry.settled,
            year: entry.year,
            month: entry.month,
            day: entry.day,
            due_day: entry.due_day,
        }
    }
}
