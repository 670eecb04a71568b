use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::reservation::ReservationService};

/// Starts the reservation finisher scheduler.
///
/// Runs daily at 00:05 UTC and once immediately, finishing active reservations whose
/// departure date has been reached.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    // Catch up on anything that elapsed while the server was down
    finish_elapsed_reservations(&db).await;

    let job_db = db.clone();
    let job = Job::new_async("0 5 0 * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            finish_elapsed_reservations(&db).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Reservation finisher scheduler started");

    Ok(scheduler)
}

async fn finish_elapsed_reservations(db: &DatabaseConnection) {
    let today = Utc::now().date_naive();

    match ReservationService::new(db).finish_elapsed(today).await {
        Ok(0) => {}
        Ok(count) => tracing::info!(count, "Finished elapsed reservations"),
        Err(e) => tracing::error!("Error finishing elapsed reservations: {}", e),
    }
}
