use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::ledger::period::CalendarDate;
use crate::models::borrowing::{Borrowing, BorrowingRequest};
use chrono::NaiveDate;
use uuid::Uuid;

#[async_trait::async_trait]
pub trait BorrowingRepository {
    async fn create_borrowing(&self, user_id: &Uuid, request: &BorrowingRequest, date: CalendarDate, due_date: CalendarDate) -> Result<Borrowing, AppError>;
    async fn list_borrowings(&self, user_id: &Uuid, active_only: bool) -> Result<Vec<Borrowing>, AppError>;
    async fn update_borrowing(
        &self,
        id: &Uuid,
        user_id: &Uuid,
        request: &BorrowingRequest,
        date: CalendarDate,
        due_date: CalendarDate,
    ) -> Result<Borrowing, AppError>;
    async fn settle_borrowing(&self, id: &Uuid, user_id: &Uuid) -> Result<Borrowing, AppError>;
    async fn delete_borrowing(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl BorrowingRepository for PostgresRepository {
    async fn create_borrowing(&self, user_id: &Uuid, request: &BorrowingRequest, date: CalendarDate, due_date: CalendarDate) -> Result<Borrowing, AppError> {
        let borrowing = sqlx::query_as::<_, Borrowing>(
            r#"
            INSERT INTO borrowing (user_id, name, amount, borrow_date, due_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, amount, borrow_date, due_date, settled, created_at
            "#,
        )
        .bind(user_id)
        .bind(&request.name)
        .bind(request.amount)
        .bind(NaiveDate::from(date))
        .bind(NaiveDate::from(due_date))
        .fetch_one(&self.pool)
        .await?;

        Ok(borrowing)
    }

    async fn list_borrowings(&self, user_id: &Uuid, active_only: bool) -> Result<Vec<Borrowing>, AppError> {
        let query = if active_only {
            r#"
            SELECT id, user_id, name, amount, borrow_date, due_date, settled, created_at
            FROM borrowing
            WHERE user_id = $1 AND settled = FALSE
            ORDER BY created_at DESC
            "#
        } else {
            r#"
            SELECT id, user_id, name, amount, borrow_date, due_date, settled, created_at
            FROM borrowing
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#
        };

        let borrowings = sqlx::query_as::<_, Borrowing>(query).bind(user_id).fetch_all(&self.pool).await?;

        Ok(borrowings)
    }

    async fn update_borrowing(
        &self,
        id: &Uuid,
        user_id: &Uuid,
        request: &BorrowingRequest,
        date: CalendarDate,
        due_date: CalendarDate,
    ) -> Result<Borrowing, AppError> {
        let borrowing = sqlx::query_as::<_, Borrowing>(
            r#"
            UPDATE borrowing
            SET name = $1, amount = $2, borrow_date = $3, due_date = $4
            WHERE id = $5 AND user_id = $6
            RETURNING id, user_id, name, amount, borrow_date, due_date, settled, created_at
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

        Ok(borrowing)
    }

    async fn settle_borrowing(&self, id: &Uuid, user_id: &Uuid) -> Result<Borrowing, AppError> {
        let borrowing = sqlx::query_as::<_, Borrowing>(
            r#"
            UPDATE borrowing
            SET settled = TRUE
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, amount, borrow_date, due_date, settled, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(borrowing)
    }

    async fn delete_borrowing(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM borrowing WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
