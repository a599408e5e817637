use std::sync::Arc;

use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::reminder::{ReminderSweeper, SweepOutcome},
};

/// Starts the resin reminder scheduler
///
/// Each tick runs one sweep over every user with the reminder enabled. A tick that
/// fires while the previous sweep is still running is skipped by the sweeper itself.
///
/// # Arguments
/// - `sweeper`: Sweeper shared with the job closure
/// - `schedule`: Cron expression with a seconds field, e.g. `0 */30 * * * *`
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; call `shutdown` on exit
/// - `Err(AppError::SchedulerErr)` - Invalid schedule or scheduler failure
pub async fn start_scheduler(
    sweeper: Arc<ReminderSweeper>,
    schedule: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let sweeper = sweeper.clone();

        Box::pin(async move {
            match sweeper.try_sweep().await {
                Ok(SweepOutcome::Completed(_)) | Ok(SweepOutcome::Skipped) => {}
                Err(e) => tracing::error!("Error running resin reminder sweep: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Resin reminder scheduler started ({})", schedule);

    Ok(scheduler)
}
