//! SeaORM entity models for the resin bot.
//!
//! Two logical tables back the credential store: encrypted per-user credential
//! bundles and per-user notification settings.

pub mod prelude;

pub mod user_credential;
pub mod user_setting;
