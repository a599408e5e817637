use std::sync::Arc;

use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;
use tokio::sync::Notify;

use crate::state::AppState;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    pub ready_signal: Arc<Notify>,
}

impl Handler {
    pub fn new(state: AppState, ready_signal: Arc<Notify>) -> Self {
        Self {
            state,
            ready_signal,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, &self.ready_signal).await;
    }

    /// Called for slash commands and other interactions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.state, ctx, interaction).await;
    }
}
