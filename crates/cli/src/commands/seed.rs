//! Apply versioned seed data.
//!
//! Uses the same loader the server runs at startup, so running both is safe:
//! each version is applied once.

use tracing::info;

use community_plant_server::config::SeedConfig;
use community_plant_server::db::seed;

/// Apply every seed document not yet recorded.
///
/// # Errors
///
/// Returns an error if `BOOTSTRAP_ADMIN_PASSWORD` is set but weak, the
/// database is unreachable, or a document fails to apply.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SeedConfig::from_env()?;

    let pool = super::connect().await?;
    let report = seed::apply(&pool, &config).await?;

    if report.applied.is_empty() {
        info!(skipped = ?report.skipped, "Seed data already up to date");
    } else {
        info!(applied = ?report.applied, skipped = ?report.skipped, "Seed data applied");
    }
    if config.bootstrap_admin_password.is_none() && report.applied.contains(&1) {
        tracing::warn!(
            "Bootstrap administrator seeded with a placeholder credential; run 'cp-cli admin set-password' before logging in"
        );
    }

    Ok(())
}
