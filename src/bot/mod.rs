//! Discord bot integration.
//!
//! The bot registers the slash commands on `ready`, dispatches every command
//! interaction to its controller, and renders results as embeds. Its HTTP client is
//! shared with the reminder notifier so DMs go out through the same connection.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, needed to tell guild from DM invocations
//! - `DIRECT_MESSAGES` - DM channel events for the DM-only commands

pub mod commands;
pub mod embed;
pub mod handler;
pub mod start;
