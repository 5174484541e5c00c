use crate::ledger::entry::{DebtEntry, DebtKind};
use crate::ledger::period::{CalendarDate, Month};
use chrono::{DateTime, NaiveDate, Utc};
use rocket::serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

/// A borrowing row as persisted. `settled` entries stay in storage for
/// history; only their visibility in active views changes.
#[derive(Serialize, Debug, Clone, sqlx::FromRow)]
pub struct Borrowing {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub settled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct BorrowingRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub amount: Decimal,
    pub borrow_date: String,
    pub due_date: String,
}

#[derive(Serialize, Debug)]
pub struct BorrowingResponse {
    pub id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub borrow_date: String,
    pub due_date: String,
    pub settled: bool,
    pub year: i32,
    pub month: Month,
    pub day: u8,
    pub due_day: u8,
}

impl From<&Borrowing> for DebtEntry {
    fn from(borrowing: &Borrowing) -> Self {
        DebtEntry::normalize(
            borrowing.id,
            DebtKind::Borrowing,
            borrowing.name.clone(),
            borrowing.amount,
            CalendarDate::from(borrowing.borrow_date),
            CalendarDate::from(borrowing.due_date),
            borrowing.settled,
        )
    }
}

impl From<&DebtEntry> for BorrowingResponse {
    fn from(entry: &DebtEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            amount: entry.amount,
            borrow_date: entry.date.format_iso(),
            due_date: entry.due_date.format_iso(),
            settled: entry.settled,
            year: entry.year,
            month: entry.month,
            day: entry.day,
            due_day: entry.due_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn row_normalizes_with_full_due_date() {
        let row = Borrowing {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Alice".into(),
            amount: dec!(200),
            borrow_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(),
            settled: false,
            created_at: Utc::now(),
        };

        let entry = DebtEntry::from(&row);
        assert_eq!(entry.kind, DebtKind::Borrowing);
        assert_eq!(entry.month, Month::January);
        assert_eq!(entry.due_date, CalendarDate::parse("2025-02-05").unwrap());

        let response = BorrowingResponse::from(&entry);
        assert_eq!(response.due_date, "2025-02-05");
        assert_eq!(response.due_day, 5);
    }
}
