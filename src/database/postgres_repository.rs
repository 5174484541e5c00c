use sqlx::PgPool;

pub struct PostgresRepository {
    pub pool: PgPool,
}
