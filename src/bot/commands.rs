//! Slash command definitions registered at startup.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::model::{resin::MAX_RESIN, trivia::REACTIONS, wish::BannerType};

pub const SET_COOKIE: &str = "set_cookie";
pub const STATUS: &str = "status";
pub const CHARACTERS: &str = "characters";
pub const RESIN_NOTIFICATION: &str = "resin_notification";
pub const DELETE_COOKIE: &str = "delete_cookie";
pub const DELETE_DATA: &str = "delete_data";
pub const SET_AUTHKEY: &str = "set_authkey";
pub const WISH_HISTORY: &str = "wish_history";
pub const GACHA: &str = "gacha";
pub const RESIN: &str = "resin";
pub const ELEMENT_REACTION: &str = "element_reaction";
pub const DAILY_DOMAIN: &str = "daily_domain";
pub const TEAM_GENERATOR: &str = "team_generator";
pub const HELP: &str = "help";

/// Commands that accept secrets and are refused outside DMs.
pub const DM_ONLY: [&str; 2] = [SET_COOKIE, SET_AUTHKEY];

/// Commands whose reply is only visible to the caller.
pub const PRIVATE_REPLY: [&str; 8] = [
    SET_COOKIE,
    STATUS,
    RESIN_NOTIFICATION,
    DELETE_COOKIE,
    DELETE_DATA,
    SET_AUTHKEY,
    WISH_HISTORY,
    HELP,
];

/// Builds every slash command.
pub fn definitions() -> Vec<CreateCommand> {
    let resin_max = MAX_RESIN as u64;

    vec![
        CreateCommand::new(SET_COOKIE)
            .description("Store your HoYoLAB cookie (DM only)")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "cookie",
                    "Cookie containing ltuid_v2 and ltoken_v2",
                )
                .required(true),
            ),
        CreateCommand::new(STATUS).description("Show your current resin and daily progress"),
        CreateCommand::new(CHARACTERS).description("List your characters by element"),
        CreateCommand::new(RESIN_NOTIFICATION)
            .description("Get a DM when your resin reaches a threshold")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "enabled",
                    "Turn the reminder on or off",
                )
                .required(true)
                .add_string_choice("on", "on")
                .add_string_choice("off", "off"),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "threshold",
                    "Resin at which to notify (default 200)",
                )
                .min_int_value(1)
                .max_int_value(resin_max),
            ),
        CreateCommand::new(DELETE_COOKIE).description("Delete your stored cookie"),
        CreateCommand::new(DELETE_DATA)
            .description("Delete your stored cookie and reminder settings"),
        CreateCommand::new(SET_AUTHKEY)
            .description("Store your wish history authkey (DM only)")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "authkey",
                    "Wish history URL or the bare authkey",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "uid", "Your 9-digit UID")
                    .required(true)
                    .min_int_value(100_000_000)
                    .max_int_value(999_999_999),
            ),
        CreateCommand::new(WISH_HISTORY)
            .description("Summarize your latest wishes")
            .add_option(banner_option()),
        CreateCommand::new(GACHA)
            .description("Simulate wishes")
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "count", "Number of wishes")
                    .required(true)
                    .add_int_choice("1 wish", 1)
                    .add_int_choice("10 wishes", 10),
            ),
        CreateCommand::new(RESIN)
            .description("Calculate when your resin reaches a target")
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "current", "Current resin")
                    .required(true)
                    .min_int_value(0)
                    .max_int_value(resin_max),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "target",
                    "Target resin (default 200)",
                )
                .min_int_value(1)
                .max_int_value(resin_max),
            ),
        CreateCommand::new(ELEMENT_REACTION)
            .description("Look up an elemental reaction")
            .add_option(reaction_option()),
        CreateCommand::new(DAILY_DOMAIN).description("Today's recommended artifact domain"),
        CreateCommand::new(TEAM_GENERATOR).description("Suggest a random team"),
        CreateCommand::new(HELP).description("List the available commands"),
    ]
}

fn banner_option() -> CreateCommandOption {
    BannerType::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "banner", "Wish banner")
            .required(true),
        |option, banner| option.add_string_choice(banner.label(), banner.key()),
    )
}

fn reaction_option() -> CreateCommandOption {
    REACTIONS.iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "name", "Reaction name")
            .required(true),
        |option, reaction| option.add_string_choice(reaction.name, reaction.name),
    )
}
