//! One function per slash command.
//!
//! Controllers take the shared `AppState`, the calling user's id, and the already
//! parsed command options. They return domain data for the bot to render, or an
//! `AppError` whose `user_message` becomes the reply.

pub mod account;
pub mod fun;
pub mod notification;
pub mod wish;

#[cfg(test)]
mod stub;

use crate::{error::AppError, model::credential::CredentialBundle, state::AppState};

const MISSING_COOKIE_MESSAGE: &str =
    "You haven't set a HoYoLAB cookie yet. Send `/set_cookie` to the bot in a DM first.";

/// Loads the caller's bundle, requiring the cookie part to be present.
///
/// # Returns
/// - `Ok(CredentialBundle)` - Bundle with `ltuid_v2` and `ltoken_v2`
/// - `Err(AppError::NotFound)` - Nothing stored, or only a wish history authkey
/// - `Err(AppError)` - Stored credential could not be read
async fn require_cookie(state: &AppState, user_id: u64) -> Result<CredentialBundle, AppError> {
    state
        .store
        .get_credential(user_id)
        .await?
        .filter(CredentialBundle::has_cookie)
        .ok_or_else(|| AppError::NotFound(MISSING_COOKIE_MESSAGE.to_string()))
}
