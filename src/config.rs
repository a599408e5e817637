use std::time::Duration;

use dioxus_logger::tracing::Level;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://user_data.db?mode=rwc";
const DEFAULT_ENCRYPTION_KEY_PATH: &str = "encryption.key";

const HOYOLAB_ACCOUNT_URL: &str = "https://api-account-os.hoyolab.com";
const HOYOLAB_RECORD_URL: &str = "https://bbs-api-os.hoyolab.com";
const HOYOLAB_GACHA_URL: &str = "https://public-operation-hk4e-sg.hoyoverse.com";

/// Every 30 minutes, on the minute.
const DEFAULT_REMINDER_SCHEDULE: &str = "0 */30 * * * *";
const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,
    pub encryption_key_path: String,

    pub hoyolab_account_url: String,
    pub hoyolab_record_url: String,
    pub hoyolab_gacha_url: String,

    pub reminder_schedule: String,
    pub gateway_timeout: Duration,

    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            encryption_key_path: var_or("ENCRYPTION_KEY_PATH", DEFAULT_ENCRYPTION_KEY_PATH),
            hoyolab_account_url: var_or("HOYOLAB_ACCOUNT_URL", HOYOLAB_ACCOUNT_URL),
            hoyolab_record_url: var_or("HOYOLAB_RECORD_URL", HOYOLAB_RECORD_URL),
            hoyolab_gacha_url: var_or("HOYOLAB_GACHA_URL", HOYOLAB_GACHA_URL),
            reminder_schedule: var_or("REMINDER_SCHEDULE", DEFAULT_REMINDER_SCHEDULE),
            gateway_timeout: Duration::from_secs(parse_var(
                "GATEWAY_TIMEOUT_SECS",
                DEFAULT_GATEWAY_TIMEOUT_SECS,
            )?),
            log_level: parse_var("LOG_LEVEL", Level::INFO)?,
        })
    }
}

/// Reads an optional variable, falling back to `default` when unset.
fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Reads and parses an optional variable.
///
/// # Returns
/// - `Ok(T)` - Parsed value, or `default` when the variable is unset
/// - `Err(ConfigError::InvalidEnvVar)` - Variable is set but does not parse
fn parse_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}
