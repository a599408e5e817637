//! Ready event handler for bot initialization.
//!
//! The `ready` event fires after the bot connects to Discord's gateway and completes
//! the handshake. It registers the global slash commands and signals the rest of the
//! process that Discord is reachable, which is what the reminder scheduler waits for.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Command, Context, Ready};
use tokio::sync::Notify;

use crate::bot::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for registering commands and setting activity
/// - `ready` - Ready event data containing bot user information
/// - `ready_signal` - Notified once the commands are registered
pub async fn handle_ready(ctx: Context, ready: Ready, ready_signal: &Notify) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Watching your resin")));

    match Command::set_global_commands(&ctx.http, commands::definitions()).await {
        Ok(registered) => tracing::info!("Registered {} slash commands", registered.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }

    ready_signal.notify_one();
}
