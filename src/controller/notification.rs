use dioxus_logger::tracing;

use crate::{
    controller::require_cookie,
    error::AppError,
    model::{
        resin::MAX_RESIN,
        setting::{NotificationSetting, UpsertNotificationSettingParam},
    },
    state::AppState,
};

/// `/resin_notification`: turns the resin reminder on or off.
///
/// A stored cookie is required, otherwise the sweep could never check the user.
/// An omitted threshold means `MAX_RESIN`.
///
/// # Arguments
/// - `state` - Shared application state
/// - `user_id` - Discord ID of the caller
/// - `enabled` - New reminder flag
/// - `threshold` - Resin at or above which a reminder is sent
///
/// # Returns
/// - `Ok(NotificationSetting)` - Settings after the update
/// - `Err(AppError::NotFound)` - No cookie stored
/// - `Err(AppError::BadRequest)` - Threshold outside `1..=MAX_RESIN`
pub async fn resin_notification(
    state: &AppState,
    user_id: u64,
    enabled: bool,
    threshold: Option<i32>,
) -> Result<NotificationSetting, AppError> {
    require_cookie(state, user_id).await?;

    let setting = state
        .store
        .save_settings(
            user_id,
            UpsertNotificationSettingParam {
                resin_reminder_enabled: Some(enabled),
                resin_threshold: Some(threshold.unwrap_or(MAX_RESIN)),
                ..Default::default()
            },
        )
        .await?;

    tracing::info!(
        "User {} set resin reminder enabled={} threshold={}",
        user_id,
        setting.resin_reminder_enabled,
        setting.resin_threshold
    );

    Ok(setting)
}
