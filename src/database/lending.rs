use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::ledger::period::CalendarDate;
use crate::models::lending::{Lending, LendingRequest};
use chrono::NaiveDate;
use uuid::Uuid;

#[async_trait::async_trait]
pub trait LendingRepository {
    async fn create_lending(&self, user_id: &Uuid, request: &LendingRequest, date: CalendarDate, due_date: CalendarDate) -> Result<Lending, AppError>;
    async fn list_lendings(&self, user_id: &Uuid, active_only: bool) -> Result<Vec<Lending>, AppError>;
    async fn update_lending(
        &self,
        id: &Uuid,
        user_id: &Uuid,
        request: &LendingRequest,
        date: CalendarDate,
        due_date: CalendarDate,
    ) -> Result<Lending, AppError>;
    async fn settle_lending(&self, id: &Uuid, user_id: &Uuid) -> Result<Lending, AppError>;
    async fn delete_lending(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl LendingRepository for PostgresRepository {
    async fn create_lending(&self, user_id: &Uuid, request: &LendingRequest, date: CalendarDate, due_date: CalendarDate) -> Result<Lending, AppError> {
        let lending = sqlx::query_as::<_, Lending>(
            r#"
            INSERT INTO lending (user_id, name, amount, lend_date, due_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, amount, lend_date, due_date, settled, created_at
            "#,
        )
        .bind(user_id)
        .bind(&request.name)
        .bind(request.amount)
        .bind(NaiveDate::from(date))
        .bind(NaiveDate::from(due_date))
        .fetch_one(&self.pool)
        .await?;

        Ok(lending)
    }

    async fn list_lendings(&self, user_id: &Uuid, active_only: bool) -> Result<Vec<Lending>, AppError> {
        let query = if active_only {
            r#"
            SELECT id, user_id, name, amount, lend_date, due_date, settled, created_at
            FROM lending
            WHERE user_id = $1 AND settled = FALSE
            ORDER BY created_at DESC
            "#
        } else {
            r#"
            SELECT id, user_id, name, amount, lend_date, due_date, settled, created_at
            FROM lending
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#
        };

        let lendings = sqlx::query_as::<_, Lending>(query).bind(user_id).fetch_all(&self.pool).await?;

        Ok(lendings)
    }

    async fn update_lending(
        &self,
        id: &Uuid,
        user_id: &Uuid,
        request: &LendingRequest,
        date: CalendarDate,
        due_date: CalendarDate,
    ) -> Result<Lending, AppError> {
        let lending = sqlx::query_as::<_, Lending>(
            r#"
            UPDATE lending
            SET name = $1, amount = $2, lend_date = $3, due_date = $4
            WHERE id = $5 AND user_id = $6
            RETURNING id, user_id, name, amount, lend_date, due_date, settled, created_at
            "#,
        )
        .bind(&request.name)
        .bind(request.amount)
        .bind(NaiveDate::from(date))
        .bind(NaiveDate::from(due_date))
        .bind(id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(lending)
    }

    async fn settle_lending(&self, id: &Uuid, user_id: &Uuid) -> Result<Lending, AppError> {
        let lending = sqlx::query_as::<_, Lending>(
            r#"
            UPDATE lending
            SET settled = TRUE
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, amount, lend_date, due_date, settled, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(lending)
    }

    async fn delete_lending(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM lending WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
