//! Service layer for business logic and orchestration.
//!
//! Services sit between the command controllers and the repositories. The
//! credential store owns all persistence, the gateway owns the external account
//! API, and the reminder sweeper ties both to the DM notifier. The remaining
//! modules are pure functions behind the local fun commands.

pub mod credential;
pub mod gacha;
pub mod hoyolab;
pub mod notification;
pub mod reminder;
pub mod resin;
pub mod team;
pub mod trivia;
pub mod wish;
