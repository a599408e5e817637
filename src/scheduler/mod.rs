//! Recurring background jobs.

pub mod resin_reminders;
