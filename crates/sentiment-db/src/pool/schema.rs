//! Schema bootstrap for the `mensagens` table

use sqlx::PgPool;
use tracing::info;

const CREATE_MENSAGENS: &str = include_str!("../../migrations/0001_create_mensagens.sql");

/// Create the message table and its indexes when missing.
///
/// Every statement is idempotent, so running this against an existing
/// database is a no-op.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CREATE_MENSAGENS).execute(pool).await?;
    info!("Database schema ensured");
    Ok(())
}
