//! Database migration command.
//!
//! Applies the migrations in `crates/server/migrations/`.

use community_plant_server::db;

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    db::run_migrations(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
