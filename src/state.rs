//! Shared state handed to every command handler.
//!
//! `AppState` is built once at startup and cloned into the bot's event handler. Both
//! fields are cheap to clone: the store wraps a connection pool and an `Arc`'d
//! cipher, and the gateway is behind an `Arc`.

use std::sync::Arc;

use crate::service::{credential::CredentialStore, hoyolab::AccountGateway};

#[derive(Clone)]
pub struct AppState {
    /// Encrypted credential and settings store.
    pub store: CredentialStore,

    /// External account API used for on-demand lookups.
    pub gateway: Arc<dyn AccountGateway>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `store` - Store shared with the reminder sweeper
    /// - `gateway` - Account API gateway
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(store: CredentialStore, gateway: Arc<dyn AccountGateway>) -> Self {
        Self { store, gateway }
    }
}
