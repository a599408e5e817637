//! Resin status as reported by the daily note endpoint.

use chrono::{DateTime, Duration, Utc};

/// Resin cap of a game account.
pub const MAX_RESIN: i32 = 200;

/// Minutes needed to regenerate one resin.
pub const RESIN_RECOVERY_MINUTES: i64 = 8;

/// Live resource status of one game account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResinStatus {
    pub current_resin: i32,
    pub max_resin: i32,
    /// Seconds until resin is full; zero when already full.
    pub resin_recovery_secs: i64,
    pub finished_commissions: i32,
    pub total_commissions: i32,
    pub remaining_boss_discounts: i32,
    pub boss_discount_limit: i32,
    pub current_realm_currency: i32,
    pub max_realm_currency: i32,
    /// `None` when the account has not obtained the parametric transformer.
    pub transformer: Option<TransformerStatus>,
}

impl ResinStatus {
    pub fn is_full(&self) -> bool {
        self.current_resin >= self.max_resin
    }

    /// Wall-clock time at which resin will be full.
    pub fn full_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::seconds(self.resin_recovery_secs.max(0))
    }
}

/// Parametric transformer cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformerStatus {
    pub ready: bool,
    /// Seconds until the transformer can be used again.
    pub recovery_secs: i64,
}

/// Data carried by a resin reminder DM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderPayload {
    pub current_resin: i32,
    pub max_resin: i32,
    pub threshold: i32,
    pub resin_recovery_secs: i64,
}

impl ReminderPayload {
    pub fn new(status: &ResinStatus, threshold: i32) -> Self {
        Self {
            current_resin: status.current_resin,
            max_resin: status.max_resin,
            threshold,
            resin_recovery_secs: status.resin_recovery_secs,
        }
    }
}

/// Result of the offline recovery calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResinRecovery {
    pub current: i32,
    pub target: i32,
    pub minutes_needed: i64,
    pub ready_at: DateTime<Utc>,
}
