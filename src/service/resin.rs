//! Offline resin recovery calculator.

use chrono::{DateTime, Duration, Utc};

use crate::{
    error::AppError,
    model::resin::{ResinRecovery, MAX_RESIN, RESIN_RECOVERY_MINUTES},
};

/// Computes how long resin takes to go from `current` to `target`.
///
/// # Arguments
/// - `current` - Resin the user has now
/// - `target` - Resin the user wants to reach, at most `MAX_RESIN`
/// - `now` - Reference time for `ready_at`
///
/// # Returns
/// - `Ok(ResinRecovery)` - Minutes needed and the wall-clock time of arrival
/// - `Err(AppError::BadRequest)` - Values outside `0 <= current < target <= MAX_RESIN`
pub fn calculate_recovery(
    current: i32,
    target: i32,
    now: DateTime<Utc>,
) -> Result<ResinRecovery, AppError> {
    if !(0..=MAX_RESIN).contains(&current) {
        return Err(AppError::BadRequest(format!(
            "Current resin must be between 0 and {MAX_RESIN}."
        )));
    }
    if target > MAX_RESIN {
        return Err(AppError::BadRequest(format!(
            "Target resin cannot exceed {MAX_RESIN}."
        )));
    }
    if current >= target {
        return Err(AppError::BadRequest(
            "Target resin must be greater than current resin.".to_string(),
        ));
    }

    let minutes_needed = i64::from(target - current) * RESIN_RECOVERY_MINUTES;

    Ok(ResinRecovery {
        current,
        target,
        minutes_needed,
        ready_at: now + Duration::minutes(minutes_needed),
    })
}
