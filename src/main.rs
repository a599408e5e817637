mod bot;
mod config;
mod controller;
mod crypto;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use dioxus_logger::tracing;
use tokio::sync::Notify;

use crate::{
    config::Config,
    error::AppError,
    scheduler::resin_reminders,
    service::{
        credential::CredentialStore, hoyolab::HoyolabGateway, notification::DiscordNotifier,
        reminder::ReminderSweeper,
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let db = startup::connect_to_database(&config).await?;
    let cipher = startup::load_cipher(&config)?;
    let store = CredentialStore::new(db, cipher);
    let gateway = Arc::new(HoyolabGateway::from_config(&config)?);

    let state = AppState::new(store.clone(), gateway.clone());

    // Initialize Discord bot and share its HTTP client with the notifier
    let ready_signal = Arc::new(Notify::new());
    let client = bot::start::init_bot(&config, state, ready_signal.clone()).await?;
    let discord_http = client.http.clone();
    let shard_manager = client.shard_manager.clone();

    let mut bot_task = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // The sweep only starts once Discord is reachable
    tokio::select! {
        _ = ready_signal.notified() => {}
        _ = &mut bot_task => {
            tracing::error!("Discord bot stopped before becoming ready");
            return Ok(());
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested before the bot was ready");
            shard_manager.shutdown_all().await;
            return Ok(());
        }
    }

    let sweeper = Arc::new(ReminderSweeper::new(
        store,
        gateway,
        Arc::new(DiscordNotifier::new(discord_http)),
    ));
    let mut scheduler =
        resin_reminders::start_scheduler(sweeper, &config.reminder_schedule).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");

    if let Err(e) = scheduler.shutdown().await {
        tracing::error!("Failed to stop resin reminder scheduler: {}", e);
    }
    shard_manager.shutdown_all().await;

    if let Err(e) = bot_task.await {
        tracing::error!("Discord bot task failed: {}", e);
    }

    Ok(())
}
