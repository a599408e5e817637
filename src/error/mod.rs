//! Error types and chat reply mapping.
//!
//! This module provides the application's error hierarchy and the conversion from
//! errors to the text shown in a slash command reply. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors; `AppError::user_message`
//! decides what an interactive user gets to see and logs everything else.

pub mod config;
pub mod crypto;
pub mod gateway;
pub mod internal;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::error::{
    config::ConfigError, crypto::CryptoError, gateway::GatewayError, internal::InternalError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion. Domain-specific errors like
/// `GatewayError` carry their own user-facing wording, while infrastructure variants
/// collapse into a generic failure message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Credential encryption, decryption, or key file error.
    #[error(transparent)]
    CryptoErr(#[from] CryptoError),

    /// External account API error.
    #[error(transparent)]
    GatewayErr(#[from] GatewayError),

    /// Credential bundle (de)serialization error.
    #[error(transparent)]
    SerdeJsonErr(#[from] serde_json::Error),

    /// Internal invariant violation.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// The requested data does not exist (usually: the user has not configured it).
    ///
    /// # Fields
    /// - Message shown to the user
    #[error("{0}")]
    NotFound(String),

    /// The command arguments are invalid.
    ///
    /// # Fields
    /// - Message shown to the user
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with custom message.
    ///
    /// The message is logged but a generic message is shown to the user.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Generic reply for failures that carry no user-actionable detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, please try again later.";

impl AppError {
    /// Maps the error to the text shown in a slash command reply.
    ///
    /// User-actionable variants (`NotFound`, `BadRequest`, credential rejections) are
    /// shown verbatim. Storage and crypto failures get a dedicated hint so a user with
    /// an unreadable credential knows to set it again. Everything else is logged with
    /// full details and replaced by a generic message to avoid leaking internals.
    ///
    /// # Returns
    /// - `String` - Message to send back to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::GatewayErr(GatewayError::InvalidCredential) => {
                "Your HoYoLAB cookie was rejected. Please set a new one with `/set_cookie`."
                    .to_string()
            }
            Self::GatewayErr(GatewayError::AuthkeyExpired) => {
                "Your authkey has expired. Please set a new one with `/set_authkey`.".to_string()
            }
            Self::GatewayErr(GatewayError::NoGameAccount) => {
                "No Genshin Impact account is linked to this HoYoLAB account.".to_string()
            }
            Self::GatewayErr(GatewayError::Transient(detail)) => {
                tracing::warn!("Account API request failed: {}", detail);
                "The HoYoLAB API is not responding right now, please try again later."
                    .to_string()
            }
            Self::CryptoErr(_) | Self::SerdeJsonErr(_) => {
                tracing::error!("Credential storage failure: {}", self);
                "Your stored credential could not be read. Please set it again with `/set_cookie`."
                    .to_string()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            err => {
                tracing::error!("{}", err);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_variants_are_shown_verbatim() {
        let err = AppError::BadRequest("Threshold must be between 1 and 200.".to_string());
        assert_eq!(err.user_message(), "Threshold must be between 1 and 200.");

        let err = AppError::NotFound("No cookie set.".to_string());
        assert_eq!(err.user_message(), "No cookie set.");
    }

    #[test]
    fn infrastructure_errors_are_hidden() {
        let err = AppError::DbErr(sea_orm::DbErr::Custom("disk full".to_string()));
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);

        let err = AppError::InternalError("bad state".to_string());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn rejected_credential_points_to_set_cookie() {
        let err = AppError::from(GatewayError::InvalidCredential);
        assert!(err.user_message().contains("/set_cookie"));
    }

    #[test]
    fn unreadable_credential_is_distinct_from_generic_failure() {
        let err = AppError::from(CryptoError::Cipher("aead::Error".to_string()));
        assert_ne!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert!(err.user_message().contains("/set_cookie"));
    }

    #[test]
    fn undecodable_credential_gets_same_hint_as_unreadable() {
        let decode = serde_json::from_slice::<serde_json::Value>(b"not json").unwrap_err();
        let err = AppError::from(decode);
        let cipher = AppError::from(CryptoError::Cipher("aead::Error".to_string()));

        assert_eq!(err.user_message(), cipher.user_message());
    }
}
