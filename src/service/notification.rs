//! Direct-message delivery of resin reminders.
//!
//! `DiscordNotifier` opens (or reuses) the DM channel with a user and posts the
//! reminder embed. Delivery failures never propagate: the sweep must go on for the
//! remaining users, so `notify` reports a plain `bool` and logs the cause.

use std::sync::Arc;

use async_trait::async_trait;
use dioxus_logger::tracing;
use serenity::{
    all::{CreateEmbed, CreateEmbedFooter, CreateMessage, Timestamp, UserId},
    http::{Http, HttpError},
};

use crate::model::resin::ReminderPayload;

/// Discord JSON error code for "Cannot send messages to this user".
const CANNOT_MESSAGE_USER: isize = 50007;

/// Embed color of reminder messages (orange).
const REMINDER_COLOR: u32 = 0xFFA500;

/// Delivers reminders to users.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `payload` to `user_id` once.
    ///
    /// # Returns
    /// - `true` - Message delivered
    /// - `false` - Delivery failed; the cause has been logged
    async fn notify(&self, user_id: u64, payload: &ReminderPayload) -> bool;
}

/// `Notifier` sending Discord DMs through the bot's HTTP client.
#[derive(Clone)]
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn notify(&self, user_id: u64, payload: &ReminderPayload) -> bool {
        let user = UserId::new(user_id);

        let channel = match user.create_dm_channel(&self.http).await {
            Ok(channel) => channel,
            Err(e) => {
                log_delivery_failure(user_id, &e);
                return false;
            }
        };

        let message = CreateMessage::new().embed(build_reminder_embed(payload));

        match channel.id.send_message(&self.http, message).await {
            Ok(_) => {
                tracing::info!("Sent resin reminder to user {}", user_id);
                true
            }
            Err(e) => {
                log_delivery_failure(user_id, &e);
                false
            }
        }
    }
}

/// Whether `err` means the user does not accept DMs from the bot.
fn is_closed_dm(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            response.status_code.as_u16() == 403 || response.error.code == CANNOT_MESSAGE_USER
        }
        _ => false,
    }
}

fn log_delivery_failure(user_id: u64, err: &serenity::Error) {
    if is_closed_dm(err) {
        tracing::warn!(
            "Could not send resin reminder to user {}: DMs are closed",
            user_id
        );
    } else {
        tracing::error!("Failed to send resin reminder to user {}: {}", user_id, err);
    }
}

/// Builds the reminder embed.
///
/// Shows current and max resin, the user's threshold, the time left until resin is
/// full, and how to turn the reminder off.
pub fn build_reminder_embed(payload: &ReminderPayload) -> CreateEmbed {
    let until_full = if payload.current_resin >= payload.max_resin {
        "Resin is full!".to_string()
    } else {
        format_duration(payload.resin_recovery_secs)
    };

    CreateEmbed::new()
        .title("Resin reminder")
        .description(format!(
            "Your resin has reached your threshold of **{}**.",
            payload.threshold
        ))
        .color(REMINDER_COLOR)
        .field(
            "Current resin",
            format!("{}/{}", payload.current_resin, payload.max_resin),
            true,
        )
        .field("Until full", until_full, true)
        .footer(CreateEmbedFooter::new(
            "Use /resin_notification enabled:off to stop these reminders",
        ))
        .timestamp(Timestamp::now())
}

/// Formats a second count as `Xh Ym`, or `Ym` below one hour.
pub fn format_duration(secs: i64) -> String {
    let minutes = secs.max(0) / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
