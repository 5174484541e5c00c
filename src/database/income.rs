use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::ledger::period::CalendarDate;
use crate::models::income::{Income, IncomeRequest};
use chrono::NaiveDate;
use uuid::Uuid;

/// Dates reach this layer already parsed by the period model; queries bind
/// the component-faithful `NaiveDate` conversion and never a string.
#[async_trait::async_trait]
pub trait IncomeRepository {
    async fn create_income(&self, user_id: &Uuid, request: &IncomeRequest, date: CalendarDate) -> Result<Income, AppError>;
    async fn list_incomes(&self, user_id: &Uuid) -> Result<Vec<Income>, AppError>;
    async fn update_income(&self, id: &Uuid, user_id: &Uuid, request: &IncomeRequest, date: CalendarDate) -> Result<Income, AppError>;
    async fn delete_income(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl IncomeRepository for PostgresRepository {
    async fn create_income(&self, user_id: &Uuid, request: &IncomeRequest, date: CalendarDate) -> Result<Income, AppError> {
        let income = sqlx::query_as::<_, Income>(
            r#"
            INSERT INTO income (user_id, source, category, amount, income_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, source, category, amount, income_date, created_at
            "#,
        )
        .bind(user_id)
        .bind(&request.source)
        .bind(&request.category)
        .bind(request.amount)
        .bind(NaiveDate::from(date))
        .fetch_one(&self.pool)
        .await?;

        Ok(income)
    }

    async fn list_incomes(&self, user_id: &Uuid) -> Result<Vec<Income>, AppError> {
        let incomes = sqlx::query_as::<_, Income>(
            r#"
            SELECT id, user_id, source, category, amount, income_date, created_at
            FROM income
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(incomes)
    }

    async fn update_income(&self, id: &Uuid, user_id: &Uuid, request: &IncomeRequest, date: CalendarDate) -> Result<Income, AppError> {
        let income = sqlx::query_as::<_, Income>(
            r#"
            UPDATE income
            SET source = $1, category = $2, amount = $3, income_date = $4
            WHERE id = $5 AND user_id = $6
            RETURNING id, user_id, source, category, amount, income_date, created_at
            "#,
        )
        .bind(&request.source)
        .bind(&request.category)
        .bind(request.amount)
        .bind(NaiveDate::from(date))
        .bind(id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(income)
    }

    async fn delete_income(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM income WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
