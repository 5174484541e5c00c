use crate::ledger::entry::ExpenseEntry;
use crate::ledger::period::{CalendarDate, Month};
use chrono::{DateTime, NaiveDate, Utc};
use rocket::serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

/// An expense row as persisted.
#[derive(Serialize, Debug, Clone, sqlx::FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct ExpenseRequest {
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub category: String,
    pub amount: Decimal,
    pub expense_date: String,
}

#[derive(Serialize, Debug)]
pub struct ExpenseResponse {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub amount: Decimal,
    pub expense_date: String,
    pub year: i32,
    pub month: Month,
    pub day: u8,
}

/// One month's worth of expenses for the grouped list view.
#[derive(Serialize, Debug)]
pub struct ExpenseGroupResponse {
    pub period: String,
    pub expenses: Vec<ExpenseResponse>,
}

impl From<&Expense> for ExpenseEntry {
    fn from(expense: &Expense) -> Self {
        ExpenseEntry::normalize(
            expense.id,
            expense.description.clone(),
            expense.category.clone(),
            expense.amount,
            CalendarDate::from(expense.expense_date),
        )
    }
}

impl From<&ExpenseEntry> for ExpenseResponse {
    fn from(entry: &ExpenseEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            category: entry.category.clone(),
            amount: entry.amount,
            expense_date: entry.date.format_iso(),
            year: entry.year,
            month: entry.month,
            day: entry.day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn description_becomes_title_in_responses() {
        let row = Expense {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            description: "Groceries".into(),
            category: "Food".into(),
            amount: dec!(42.50),
            expense_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            created_at: Utc::now(),
        };

        let entry = ExpenseEntry::from(&row);
        let response = ExpenseResponse::from(&entry);
        assert_eq!(response.title, "Groceries");
        assert_eq!(response.day, 15);
        assert_eq!(response.expense_date, "2025-03-15");
    }
}
