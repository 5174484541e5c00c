use crate::database::borrowing::BorrowingRepository;
use crate::database::expense::ExpenseRepository;
use crate::database::income::IncomeRepository;
use crate::database::lending::LendingRepository;
use crate::error::app_error::AppError;
use crate::ledger::period::CalendarDate;
use crate::models::borrowing::{Borrowing, BorrowingRequest};
use crate::models::expense::{Expense, ExpenseRequest};
use crate::models::income::{Income, IncomeRequest};
use crate::models::lending::{Lending, LendingRequest};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

fn naive(date: &str) -> NaiveDate {
    NaiveDate::from(CalendarDate::parse(date).expect("valid test date"))
}

/// An in-memory repository for service tests: canned rows in, fetch
/// counting to assert the memoization behavior.
#[derive(Default)]
pub struct MockRepository {
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub borrowings: Vec<Borrowing>,
    pub lendings: Vec<Lending>,
    fetches: AtomicUsize,
}

impl MockRepository {
    pub fn with_income(mut self, date: &str, amount: Decimal) -> Self {
        self.incomes.push(Income {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            source: "Salary".to_string(),
            category: None,
            amount,
            income_date: naive(date),
            created_at: Utc::now(),
        });
        self
    }

    pub fn with_expense(mut self, date: &str, category: &str, amount: Decimal) -> Self {
        self.expenses.push(Expense {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            description: "item".to_string(),
            category: category.to_string(),
            amount,
            expense_date: naive(date),
            created_at: Utc::now(),
        });
        self
    }

    pub fn with_borrowing(mut self, date: &str, due: &str, amount: Decimal, settled: bool) -> Self {
        self.borrowings.push(Borrowing {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Alice".to_string(),
            amount,
            borrow_date: naive(date),
            due_date: naive(due),
            settled,
            created_at: Utc::now(),
        });
        self
    }

    pub fn with_lending(mut self, date: &str, due: &str, amount: Decimal, settled: bool) -> Self {
        self.lendings.push(Lending {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Bob".to_string(),
            amount,
            lend_date: naive(date),
            due_date: naive(due),
            settled,
            created_at: Utc::now(),
        });
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn record_fetch(&self) {
        self.fetches.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl IncomeRepository for MockRepository {
    async fn create_income(&self, user_id: &Uuid, request: &IncomeRequest, date: CalendarDate) -> Result<Income, AppError> {
        Ok(Income {
            id: Uuid::new_v4(),
            user_id: *user_id,
            source: request.source.clone(),
            category: request.category.clone(),
            amount: request.amount,
            income_date: NaiveDate::from(date),
            created_at: Utc::now(),
        })
    }

    async fn list_incomes(&self, _user_id: &Uuid) -> Result<Vec<Income>, AppError> {
        self.record_fetch();
        Ok(self.incomes.clone())
    }

    async fn update_income(&self, id: &Uuid, user_id: &Uuid, request: &IncomeRequest, date: CalendarDate) -> Result<Income, AppError> {
        Ok(Income {
            id: *id,
            user_id: *user_id,
            source: request.source.clone(),
            category: request.category.clone(),
            amount: request.amount,
            income_date: NaiveDate::from(date),
            created_at: Utc::now(),
        })
    }

    async fn delete_income(&self, _id: &Uuid, _user_id: &Uuid) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl ExpenseRepository for MockRepository {
    async fn create_expense(&self, user_id: &Uuid, request: &ExpenseRequest, date: CalendarDate) -> Result<Expense, AppError> {
        Ok(Expense {
            id: Uuid::new_v4(),
            user_id: *user_id,
            description: request.description.clone(),
            category: request.category.clone(),
            amount: request.amount,
            expense_date: NaiveDate::from(date),
            created_at: Utc::now(),
        })
    }

    async fn list_expenses(&self, _user_id: &Uuid) -> Result<Vec<Expense>, AppError> {
        self.record_fetch();
        Ok(self.expenses.clone())
    }

    async fn update_expense(&self, id: &Uuid, user_id: &Uuid, request: &ExpenseRequest, date: CalendarDate) -> Result<Expense, AppError> {
        Ok(Expense {
            id: *id,
            user_id: *user_id,
            description: request.description.clone(),
            category: request.category.clone(),
            amount: request.amount,
            expense_date: NaiveDate::from(date),
            created_at: Utc::now(),
        })
    }

    async fn delete_expense(&self, _id: &Uuid, _user_id: &Uuid) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl BorrowingRepository for MockRepository {
    async fn create_borrowing(&self, user_id: &Uuid, request: &BorrowingRequest, date: CalendarDate, due_date: CalendarDate) -> Result<Borrowing, AppError> {
        Ok(Borrowing {
            id: Uuid::new_v4(),
            user_id: *user_id,
            name: request.name.clone(),
            amount: request.amount,
            borrow_date: NaiveDate::from(date),
            due_date: NaiveDate::from(due_date),
            settled: false,
            created_at: Utc::now(),
        })
    }

    async fn list_borrowings(&self, _user_id: &Uuid, active_only: bool) -> Result<Vec<Borrowing>, AppError> {
        self.record_fetch();
        Ok(self.borrowings.iter().filter(|b| !active_only || !b.settled).cloned().collect())
    }

    async fn update_borrowing(
        &self,
        id: &Uuid,
        user_id: &Uuid,
        request: &BorrowingRequest,
        date: CalendarDate,
        due_date: CalendarDate,
    ) -> Result<Borrowing, AppError> {
        Ok(Borrowing {
            id: *id,
            user_id: *user_id,
            name: request.name.clone(),
            amount: request.amount,
            borrow_date: NaiveDate::from(date),
            due_date: NaiveDate::from(due_date),
            settled: false,
            created_at: Utc::now(),
        })
    }

    async fn settle_borrowing(&self, id: &Uuid, user_id: &Uuid) -> Result<Borrowing, AppError> {
        let existing = self.borrowings.iter().find(|b| b.id == *id).cloned();
        let mut borrowing = existing.ok_or_else(|| AppError::NotFound("Borrowing not found".to_string()))?;
        borrowing.user_id = *user_id;
        borrowing.settled = true;
        Ok(borrowing)
    }

    async fn delete_borrowing(&self, _id: &Uuid, _user_id: &Uuid) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl LendingRepository for MockRepository {
    async fn create_lending(&self, user_id: &Uuid, request: &LendingRequest, date: CalendarDate, due_date: CalendarDate) -> Result<Lending, AppError> {
        Ok(Lending {
            id: Uuid::new_v4(),
            user_id: *user_id,
            name: request.name.clone(),
            amount: request.amount,
            lend_date: NaiveDate::from(date),
            due_date: NaiveDate::from(due_date),
            settled: false,
            created_at: Utc::now(),
        })
    }

    async fn list_lendings(&self, _user_id: &Uuid, active_only: bool) -> Result<Vec<Lending>, AppError> {
        self.record_fetch();
        Ok(self.lendings.iter().filter(|l| !active_only || !l.settled).cloned().collect())
    }

    async fn update_lending(
        &self,
        id: &Uuid,
        user_id: &Uuid,
        request: &LendingRequest,
        date: CalendarDate,
        due_date: CalendarDate,
    ) -> Result<Lending, AppError> {
        Ok(Lending {
            id: *id,
            user_id: *user_id,
            name: request.name.clone(),
            amount: request.amount,
            lend_date: NaiveDate::from(date),
            due_date: NaiveDate::from(due_date),
            settled: false,
            created_at: Utc::now(),
        })
    }

    async fn settle_lending(&self, id: &Uuid, user_id: &Uuid) -> Result<Lending, AppError> {
        let existing = self.lendings.iter().find(|l| l.id == *id).cloned();
        let mut lending = existing.ok_or_else(|| AppError::NotFound("Lending not found".to_string()))?;
        lending.user_id = *user_id;
        lending.settled = true;
        Ok(lending)
    }

    async fn delete_lending(&self, _id: &Uuid, _user_id: &Uuid) -> Result<(), AppError> {
        Ok(())
    }
}
