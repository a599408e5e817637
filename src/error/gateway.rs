use thiserror::Error;

/// Failure kinds of the external account API.
///
/// Callers only need to distinguish a rejected credential from everything else; the
/// remaining variants exist so interactive replies can be specific.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The remote API rejected the stored cookie.
    #[error("The stored credential was rejected by the account API")]
    InvalidCredential,

    /// The wish history authkey has expired.
    #[error("The wish history authkey has expired")]
    AuthkeyExpired,

    /// The credential is valid but has no linked game account.
    #[error("No game account is linked to this credential")]
    NoGameAccount,

    /// Network fault, timeout, unexpected status, or undecodable response.
    #[error("Account API request failed: {0}")]
    Transient(String),
}

impl GatewayError {
    /// Whether the remote rejected the secret itself, as opposed to a transient fault.
    pub fn is_invalid_credential(&self) -> bool {
        matches!(self, Self::InvalidCredential | Self::AuthkeyExpired)
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transient(err.to_string())
    }
}
