use dioxus_logger::tracing;

use crate::{
    controller::require_cookie,
    error::{gateway::GatewayError, AppError},
    model::{
        account::{Character, GameAccount},
        credential::CredentialBundle,
        resin::ResinStatus,
        setting::DeletedUserData,
    },
    state::AppState,
};

/// `/set_cookie`: validates and stores a HoYoLAB cookie.
///
/// The first linked Genshin account is cached in the bundle so later status calls
/// need one round trip. A wish history authkey stored earlier survives the
/// replacement.
///
/// # Arguments
/// - `state` - Shared application state
/// - `user_id` - Discord ID of the caller
/// - `raw_cookie` - Cookie string as pasted, `k=v; k=v`
///
/// # Returns
/// - `Ok(GameAccount)` - Account selected for status and roster lookups
/// - `Err(AppError::BadRequest)` - Cookie lacks `ltuid_v2` or `ltoken_v2`
/// - `Err(AppError::GatewayErr)` - Cookie rejected or account API unavailable
pub async fn set_cookie(
    state: &AppState,
    user_id: u64,
    raw_cookie: &str,
) -> Result<GameAccount, AppError> {
    let mut bundle = CredentialBundle::from_cookie(raw_cookie)?;

    let accounts = state.gateway.validate_credential(&bundle).await?;
    let account = accounts
        .into_iter()
        .next()
        .ok_or(GatewayError::NoGameAccount)?;
    bundle.set_selected_account(&account);

    match state.store.get_credential(user_id).await {
        Ok(Some(previous)) => bundle.carry_wish_auth_from(&previous),
        Ok(None) => {}
        Err(e) => tracing::warn!(
            "Replacing unreadable credential of user {}: {}",
            user_id,
            e
        ),
    }

    state.store.save_credential(user_id, &bundle).await?;

    tracing::info!("Stored credential for user {}", user_id);

    Ok(account)
}

/// `/status`: live resin and daily counters.
pub async fn status(state: &AppState, user_id: u64) -> Result<ResinStatus, AppError> {
    let bundle = require_cookie(state, user_id).await?;

    Ok(state.gateway.fetch_resource_status(&bundle).await?)
}

/// `/characters`: owned characters of the selected account.
pub async fn characters(state: &AppState, user_id: u64) -> Result<Vec<Character>, AppError> {
    let bundle = require_cookie(state, user_id).await?;

    let roster = state.gateway.fetch_character_roster(&bundle, None).await?;
    if roster.is_empty() {
        return Err(AppError::NotFound(
            "No characters were found on this account.".to_string(),
        ));
    }

    Ok(roster)
}

/// `/delete_cookie`: removes the stored credential, keeping reminder settings.
///
/// # Returns
/// - `Ok(())` - Credential deleted
/// - `Err(AppError::NotFound)` - Nothing was stored
pub async fn delete_cookie(state: &AppState, user_id: u64) -> Result<(), AppError> {
    if !state.store.delete_credential(user_id).await? {
        return Err(AppError::NotFound(
            "There is no stored cookie to delete.".to_string(),
        ));
    }

    tracing::info!("Deleted credential of user {}", user_id);

    Ok(())
}

/// `/delete_data`: removes the credential and reminder settings together.
///
/// # Returns
/// - `Ok(DeletedUserData)` - What was removed; at least one part
/// - `Err(AppError::NotFound)` - Nothing was stored
pub async fn delete_data(state: &AppState, user_id: u64) -> Result<DeletedUserData, AppError> {
    let deleted = state.store.delete_all_user_data(user_id).await?;

    if !deleted.any() {
        return Err(AppError::NotFound(
            "There is no stored data to delete.".to_string(),
        ));
    }

    tracing::info!(
        "Deleted data of user {} (credential: {}, settings: {})",
        user_id,
        deleted.credential,
        deleted.settings
    );

    Ok(deleted)
}
