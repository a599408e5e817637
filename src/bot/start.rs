use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};
use tokio::sync::Notify;

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord client without connecting.
///
/// The caller takes the client's HTTP handle and shard manager before handing the
/// client to `start_bot`, so reminders can be sent and shards stopped on shutdown.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - State handed to command handlers
/// - `ready_signal` - Notified when the bot is ready
///
/// # Returns
/// - `Ok(Client)` - Client ready to start
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    state: AppState,
    ready_signal: Arc<Notify>,
) -> Result<Client, AppError> {
    // Slash commands arrive without any intent; DMs are needed for DM-only commands
    let intents = GatewayIntents::GUILDS | GatewayIntents::DIRECT_MESSAGES;

    let handler = Handler::new(state, ready_signal);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the bot until its shards are shut down.
///
/// Should be called from within a `tokio::spawn` task since it blocks until the
/// shard manager stops.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
