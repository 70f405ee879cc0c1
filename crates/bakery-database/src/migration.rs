//! Schema migrations for the notification store.

use sqlx::PgPool;
use tracing::info;

use bakery_core::error::{AppError, ErrorKind};
use bakery_core::result::AppResult;

/// Apply any migrations the database has not seen yet.
///
/// Runs at startup before any repository is constructed; the embedded
/// migration set is the only way the schema changes.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    let migrator = sqlx::migrate!("../../migrations");
    info!(
        available = migrator.iter().count(),
        "Applying database migrations"
    );

    migrator.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database schema is up to date");
    Ok(())
}
