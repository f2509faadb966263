use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing;

use crate::{error::AppError, service::settlement::SettlementService};

/// Starts the bid settlement scheduler.
///
/// The scheduler runs every minute and settles every bid whose expiry has
/// passed. The settlement pass is idempotent, so overlapping or repeated
/// runs are harmless; per-player failures are logged and retried on the
/// next tick.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = run_settlement_pass(&db).await {
                tracing::error!("Error running bid settlement: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Bid settlement scheduler started");

    Ok(())
}

/// Runs one settlement pass and logs per-player failures.
async fn run_settlement_pass(db: &DatabaseConnection) -> Result<(), AppError> {
    let report = SettlementService::new(db).run(Utc::now()).await?;

    for error in &report.errors {
        tracing::warn!("Settlement error: {}", error);
    }

    Ok(())
}
