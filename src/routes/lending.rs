use crate::auth::CurrentUser;
use crate::database::lending::LendingRepository;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::error::json::JsonBody;
use crate::ledger::entry::DebtEntry;
use crate::ledger::filter::filter_by_text;
use crate::ledger::period::CalendarDate;
use crate::ledger::report::sort_by_recency;
use crate::models::lending::{LendingRequest, LendingResponse};
use crate::routes::PeriodFilter;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, routes};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

#[rocket::post("/", data = "<payload>")]
pub async fn create_lending(
    pool: &State<PgPool>,
    current_user: CurrentUser,
    payload: JsonBody<LendingRequest>,
) -> Result<(Status, Json<LendingResponse>), AppError> {
    payload.validate()?;
    crate::models::ensure_positive_amount(&payload.amount)?;
    let date = CalendarDate::parse(&payload.lend_date)?;
    let due_date = CalendarDate::parse(&payload.due_date)?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let lending = repo.create_lending(&current_user.id, &payload, date, due_date).await?;

    Ok((Status::Created, Json(LendingResponse::from(&DebtEntry::from(&lending)))))
}

#[rocket::get("/?<active>&<year>&<month>&<q>")]
pub async fn list_lendings(
    pool: &State<PgPool>,
    current_user: CurrentUser,
    active: Option<bool>,
    year: Option<i32>,
    month: Option<String>,
    q: Option<String>,
) -> Result<Json<Vec<LendingResponse>>, AppError> {
    let period_filter = PeriodFilter::from_query(year, month)?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let rows = repo.list_lendings(&current_user.id, active.unwrap_or(false)).await?;

    let entries: Vec<DebtEntry> = rows.iter().map(DebtEntry::from).collect();
    let entries = period_filter.apply(&entries);
    let entries = match q {
        Some(query) => filter_by_text(&entries, &query, |e| e.name.as_str()),
        None => entries,
    };

    Ok(Json(sort_by_recency(&entries).iter().map(LendingResponse::from).collect()))
}

#[rocket::put("/<id>", data = "<payload>")]
pub async fn put_lending(
    pool: &State<PgPool>,
    current_user: CurrentUser,
    id: &str,
    payload: JsonBody<LendingRequest>,
) -> Result<Json<LendingResponse>, AppError> {
    payload.validate()?;
    crate::models::ensure_positive_amount(&payload.amount)?;
    let date = CalendarDate::parse(&payload.lend_date)?;
    let due_date = CalendarDate::parse(&payload.due_date)?;
    let uuid = Uuid::parse_str(id).map_err(|e| AppError::uuid("Invalid lending id", e))?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let lending = repo.update_lending(&uuid, &current_user.id, &payload, date, due_date).await?;

    Ok(Json(LendingResponse::from(&DebtEntry::from(&lending))))
}

#[rocket::put("/<id>/settle")]
pub async fn settle_lending(pool: &State<PgPool>, current_user: CurrentUser, id: &str) -> Result<Json<LendingResponse>, AppError> {
    let uuid = Uuid::parse_str(id).map_err(|e| AppError::uuid("Invalid lending id", e))?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let lending = repo.settle_lending(&uuid, &current_user.id).await?;

    Ok(Json(LendingResponse::from(&DebtEntry::from(&lending))))
}

#[rocket::delete("/<id>")]
pub async fn delete_lending(pool: &State<PgPool>, current_user: CurrentUser, id: &str) -> Result<Status, AppError> {
    let uuid = Uuid::parse_str(id).map_err(|e| AppError::uuid("Invalid lending id", e))?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    repo.delete_lending(&uuid, &current_user.id).await?;

    Ok(Status::Ok)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![create_lending, list_lendings, put_lending, settle_lending, delete_lending]
}
