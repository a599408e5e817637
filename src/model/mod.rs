//! Domain models shared by the service, data, and bot layers.
//!
//! Models carry the bot's view of the data: entity rows are converted at the
//! repository boundary and remote API payloads at the gateway boundary, so nothing
//! above those layers sees SeaORM or JSON types.

pub mod account;
pub mod credential;
pub mod gacha;
pub mod resin;
pub mod setting;
pub mod team;
pub mod trivia;
pub mod wish;
