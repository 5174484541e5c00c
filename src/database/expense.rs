use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::ledger::period::CalendarDate;
use crate::models::expense::{Expense, ExpenseRequest};
use chrono::NaiveDate;
use uuid::Uuid;

#[async_trait::async_trait]
pub trait ExpenseRepository {
    async fn create_expense(&self, user_id: &Uuid, request: &ExpenseRequest, date: CalendarDate) -> Result<Expense, AppError>;
    async fn list_expenses(&self, user_id: &Uuid) -> Result<Vec<Expense>, AppError>;
    async fn update_expense(&self, id: &Uuid, user_id: &Uuid, request: &ExpenseRequest, date: CalendarDate) -> Result<Expense, AppError>;
    async fn delete_expense(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl ExpenseRepository for PostgresRepository {
    async fn create_expense(&self, user_id: &Uuid, request: &ExpenseRequest, date: CalendarDate) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expense (user_id, description, category, amount, expense_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, description, category, amount, expense_date, created_at
            "#,
        )
        .bind(user_id)
        .bind(&request.description)
        .bind(&request.category)
        .bind(request.amount)
        .bind(NaiveDate::from(date))
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    async fn list_expenses(&self, user_id: &Uuid) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, user_id, description, category, amount, expense_date, created_at
            FROM expense
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    async fn update_expense(&self, id: &Uuid, user_id: &Uuid, request: &ExpenseRequest, date: CalendarDate) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            UPDATE expense
            SET description = $1, category = $2, amount = $3, expense_date = $4
            WHERE id = $5 AND user_id = $6
            RETURNING id, user_id, description, category, amount, expense_date, created_at
            "#,
        )
        .bind(&request.description)
        .bind(&request.category)
        .bind(request.amount)
        .bind(NaiveDate::from(date))
        .bind(id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    async fn delete_expense(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM expense WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
