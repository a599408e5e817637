//! Periodic resin reminder sweep.
//!
//! One sweep takes a snapshot of every user with the reminder enabled, then walks the
//! snapshot sequentially: read the credential, fetch live resin, compare with the
//! user's threshold, and DM the user when the threshold is reached. Any per-user
//! failure skips that user until the next tick; nothing escapes the sweep.
//!
//! Sweeps never overlap. `try_sweep` flips an `Idle -> Running` flag atomically and
//! skips the tick when a sweep is still running.
//!
//! Reminders are sticky: a user who stays at or above the threshold is messaged on
//! every sweep. `last_notified_at` is recorded after each delivery for reference but
//! does not suppress anything.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    error::AppError,
    model::resin::{ReminderPayload, ResinStatus},
    service::{credential::CredentialStore, hoyolab::AccountGateway, notification::Notifier},
};

/// Resolves the threshold to compare against.
///
/// A stored threshold of zero (or below) means "unset" and falls back to the cap.
pub fn effective_threshold(stored: i32, max_resin: i32) -> i32 {
    if stored > 0 {
        stored
    } else {
        max_resin
    }
}

/// Whether a reminder is due for `status` at `threshold`.
pub fn should_notify(status: &ResinStatus, threshold: i32) -> bool {
    status.current_resin >= effective_threshold(threshold, status.max_resin)
}

/// Counters of one completed sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Users in the snapshot.
    pub checked: usize,
    /// Reminders delivered.
    pub notified: usize,
    /// Users skipped for a missing or unreadable credential or a gateway error.
    pub skipped: usize,
    /// Reminders that were due but could not be delivered.
    pub failed_deliveries: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    Completed(SweepReport),
    /// Another sweep was still running, so this tick did nothing.
    Skipped,
}

/// Resets the running flag when the sweep ends, including on early return.
struct RunGuard<'a>(&'a AtomicBool);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs resin reminder sweeps over the credential store.
pub struct ReminderSweeper {
    store: CredentialStore,
    gateway: Arc<dyn AccountGateway>,
    notifier: Arc<dyn Notifier>,
    running: AtomicBool,
}

impl ReminderSweeper {
    /// Creates a new ReminderSweeper.
    ///
    /// # Arguments
    /// - `store` - Credential store shared with the command handlers
    /// - `gateway` - Account API used to fetch live resin
    /// - `notifier` - Reminder delivery
    pub fn new(
        store: CredentialStore,
        gateway: Arc<dyn AccountGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            gateway,
            notifier,
            running: AtomicBool::new(false),
        }
    }

    /// Runs one sweep unless another one is in progress.
    ///
    /// # Returns
    /// - `Ok(SweepOutcome::Completed)` - Sweep ran to the end
    /// - `Ok(SweepOutcome::Skipped)` - A sweep was already running
    /// - `Err(AppError)` - The enabled-user snapshot could not be read
    pub async fn try_sweep(&self) -> Result<SweepOutcome, AppError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Previous resin reminder sweep still running, skipping this tick");
            return Ok(SweepOutcome::Skipped);
        }
        let _guard = RunGuard(&self.running);

        let report = self.sweep().await?;

        tracing::info!(
            "Resin reminder sweep finished: {} checked, {} notified, {} skipped, {} failed deliveries",
            report.checked,
            report.notified,
            report.skipped,
            report.failed_deliveries
        );

        Ok(SweepOutcome::Completed(report))
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    async fn sweep(&self) -> Result<SweepReport, AppError> {
        let targets = self.store.list_users_with_reminder_enabled().await?;

        let mut report = SweepReport {
            checked: targets.len(),
            ..Default::default()
        };

        for target in targets {
            let bundle = match self.store.get_credential(target.user_id).await {
                Ok(Some(bundle)) => bundle,
                Ok(None) => {
                    tracing::debug!("User {} has no credential, skipping", target.user_id);
                    report.skipped += 1;
                    continue;
                }
                Err(e) => {
                    tracing::warn!(
                        "Could not read credential of user {}, skipping: {}",
                        target.user_id,
                        e
                    );
                    report.skipped += 1;
                    continue;
                }
            };

            let status = match self.gateway.fetch_resource_status(&bundle).await {
                Ok(status) => status,
                Err(e) if e.is_invalid_credential() => {
                    tracing::debug!(
                        "Credential of user {} was rejected, skipping",
                        target.user_id
                    );
                    report.skipped += 1;
                    continue;
                }
                Err(e) => {
                    tracing::debug!(
                        "Resin fetch failed for user {}, skipping: {}",
                        target.user_id,
                        e
                    );
                    report.skipped += 1;
                    continue;
                }
            };

            if !should_notify(&status, target.threshold) {
                continue;
            }

            let threshold = effective_threshold(target.threshold, status.max_resin);
            let payload = ReminderPayload::new(&status, threshold);

            if self.notifier.notify(target.user_id, &payload).await {
                report.notified += 1;
                if let Err(e) = self.store.record_notification(target.user_id, Utc::now()).await {
                    tracing::error!(
                        "Failed to record reminder for user {}: {}",
                        target.user_id,
                        e
                    );
                }
            } else {
                report.failed_deliveries += 1;
            }
        }

        Ok(report)
    }
}
