use dioxus_logger::tracing;

use crate::{
    error::AppError,
    model::{
        credential::{CredentialBundle, WishAuth},
        wish::{BannerType, WishSummary},
    },
    service::wish::{summarize, WISH_HISTORY_LIMIT},
    state::AppState,
};

const MISSING_AUTHKEY_MESSAGE: &str =
    "You haven't set a wish history authkey yet. Send `/set_authkey` to the bot in a DM first.";

/// `/set_authkey`: validates and stores the wish history authkey.
///
/// The authkey is merged into the caller's existing bundle, so a stored cookie is
/// kept. A caller without a bundle gets one holding only the authkey.
///
/// # Arguments
/// - `state` - Shared application state
/// - `user_id` - Discord ID of the caller
/// - `authkey_or_url` - Raw authkey, or a wish history URL carrying one
/// - `uid` - 9-digit game UID the authkey belongs to
///
/// # Returns
/// - `Ok(())` - Authkey accepted by the gacha log endpoint and stored
/// - `Err(AppError::BadRequest)` - Empty authkey or malformed UID
/// - `Err(AppError::GatewayErr)` - Authkey expired or API unavailable
pub async fn set_authkey(
    state: &AppState,
    user_id: u64,
    authkey_or_url: &str,
    uid: u64,
) -> Result<(), AppError> {
    let auth = WishAuth::from_input(authkey_or_url, uid)?;

    state
        .gateway
        .fetch_wish_history(&auth, BannerType::Character, 1)
        .await?;

    let mut bundle = state
        .store
        .get_credential(user_id)
        .await?
        .unwrap_or_else(CredentialBundle::new);
    bundle.set_wish_auth(&auth);

    state.store.save_credential(user_id, &bundle).await?;

    tracing::info!("Stored wish history authkey for user {}", user_id);

    Ok(())
}

/// `/wish_history`: digest of the latest wishes on one banner.
pub async fn wish_history(
    state: &AppState,
    user_id: u64,
    banner: BannerType,
) -> Result<WishSummary, AppError> {
    let auth = state
        .store
        .get_credential(user_id)
        .await?
        .and_then(|bundle| bundle.wish_auth())
        .ok_or_else(|| AppError::NotFound(MISSING_AUTHKEY_MESSAGE.to_string()))?;

    let wishes = state
        .gateway
        .fetch_wish_history(&auth, banner, WISH_HISTORY_LIMIT)
        .await?;

    Ok(summarize(banner, &wishes))
}
