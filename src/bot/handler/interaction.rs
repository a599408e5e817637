//! Slash command dispatch.
//!
//! Every command interaction gets exactly one reply. Secret-taking commands used in
//! a guild are refused immediately; everything else is deferred, run through its
//! controller, and the deferred reply is edited with the result embed or the error's
//! user-facing message.

use std::collections::HashMap;

use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, Interaction, ResolvedOption,
    ResolvedValue,
};

use crate::{
    bot::{commands, embed},
    controller::{account, fun, notification, wish},
    error::AppError,
    model::wish::BannerType,
    state::AppState,
};

/// Handles an incoming interaction; non-command interactions are ignored.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context used to reply
/// - `interaction` - Interaction received from the gateway
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };
    let name = command.data.name.as_str();

    tracing::debug!("Command /{} from user {}", name, command.user.id);

    if commands::DM_ONLY.contains(&name) && command.guild_id.is_some() {
        let response = CreateInteractionResponseMessage::new()
            .embed(embed::error(
                "This command takes a secret, so it only works in a DM with the bot.",
            ))
            .ephemeral(true);

        if let Err(e) = command
            .create_response(&ctx, CreateInteractionResponse::Message(response))
            .await
        {
            tracing::error!("Failed to reply to /{}: {}", name, e);
        }
        return;
    }

    let deferred = if commands::PRIVATE_REPLY.contains(&name) {
        command.defer_ephemeral(&ctx).await
    } else {
        command.defer(&ctx).await
    };
    if let Err(e) = deferred {
        tracing::error!("Failed to defer /{}: {}", name, e);
        return;
    }

    let embed = match run_command(state, &command).await {
        Ok(embed) => embed,
        Err(e) => embed::error(e.user_message()),
    };

    if let Err(e) = command
        .edit_response(&ctx, EditInteractionResponse::new().embed(embed))
        .await
    {
        tracing::error!("Failed to send reply to /{}: {}", name, e);
    }
}

async fn run_command(state: &AppState, command: &CommandInteraction) -> Result<CreateEmbed, AppError> {
    let user_id = command.user.id.get();
    let options = CommandOptions::from_resolved(command.data.options());

    match command.data.name.as_str() {
        commands::SET_COOKIE => {
            let cookie = options.required_string("cookie")?;
            let account = account::set_cookie(state, user_id, cookie).await?;
            Ok(embed::cookie_set(&account))
        }
        commands::STATUS => {
            let status = account::status(state, user_id).await?;
            Ok(embed::status(&status))
        }
        commands::CHARACTERS => {
            let roster = account::characters(state, user_id).await?;
            Ok(embed::characters(&roster))
        }
        commands::RESIN_NOTIFICATION => {
            let enabled = options.required_string("enabled")? == "on";
            let threshold = options.i32("threshold")?;
            let setting =
                notification::resin_notification(state, user_id, enabled, threshold).await?;
            Ok(embed::notification_setting(&setting))
        }
        commands::DELETE_COOKIE => {
            account::delete_cookie(state, user_id).await?;
            Ok(embed::success("Cookie deleted", "Your stored cookie was removed."))
        }
        commands::DELETE_DATA => {
            let deleted = account::delete_data(state, user_id).await?;
            Ok(embed::data_deleted(&deleted))
        }
        commands::SET_AUTHKEY => {
            let authkey = options.required_string("authkey")?;
            let uid = u64::try_from(options.required_integer("uid")?)
                .map_err(|_| AppError::BadRequest("The UID must be a 9-digit number.".to_string()))?;
            wish::set_authkey(state, user_id, authkey, uid).await?;
            Ok(embed::success(
                "Authkey saved",
                "Use `/wish_history` to see your latest wishes. Authkeys expire after about a day.",
            ))
        }
        commands::WISH_HISTORY => {
            let key = options.required_string("banner")?;
            let banner = BannerType::from_key(key)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown banner `{key}`.")))?;
            let summary = wish::wish_history(state, user_id, banner).await?;
            Ok(embed::wish_history(&summary))
        }
        commands::GACHA => {
            let count = usize::try_from(options.required_integer("count")?)
                .map_err(|_| AppError::BadRequest("You can wish 1 or 10 times.".to_string()))?;
            Ok(embed::gacha(&fun::gacha(count)?))
        }
        commands::RESIN => {
            let current = options
                .i32("current")?
                .ok_or_else(|| missing_option("current"))?;
            let target = options.i32("target")?;
            Ok(embed::resin_recovery(&fun::resin(current, target)?))
        }
        commands::ELEMENT_REACTION => {
            let name = options.required_string("name")?;
            Ok(embed::reaction(&fun::element_reaction(name)?))
        }
        commands::DAILY_DOMAIN => {
            let (weekday, domain) = fun::daily_domain();
            Ok(embed::domain(weekday, domain))
        }
        commands::TEAM_GENERATOR => {
            let suggestion = fun::team_generator(state, user_id).await?;
            Ok(embed::team(&suggestion))
        }
        commands::HELP => Ok(embed::help()),
        other => Err(AppError::InternalError(format!(
            "Received unregistered command /{other}"
        ))),
    }
}

fn missing_option(name: &str) -> AppError {
    AppError::BadRequest(format!("Missing option `{name}`."))
}

/// String and integer options of one command invocation, by name.
#[derive(Debug, Default)]
struct CommandOptions<'a> {
    strings: HashMap<&'a str, &'a str>,
    integers: HashMap<&'a str, i64>,
}

impl<'a> CommandOptions<'a> {
    fn from_resolved(options: Vec<ResolvedOption<'a>>) -> Self {
        let mut parsed = Self::default();

        for option in options {
            match option.value {
                ResolvedValue::String(value) => {
                    parsed.strings.insert(option.name, value);
                }
                ResolvedValue::Integer(value) => {
                    parsed.integers.insert(option.name, value);
                }
                _ => {}
            }
        }

        parsed
    }

    fn required_string(&self, name: &str) -> Result<&'a str, AppError> {
        self.strings
            .get(name)
            .copied()
            .ok_or_else(|| missing_option(name))
    }

    fn required_integer(&self, name: &str) -> Result<i64, AppError> {
        self.integers
            .get(name)
            .copied()
            .ok_or_else(|| missing_option(name))
    }

    /// Optional integer option narrowed to `i32`.
    fn i32(&self, name: &str) -> Result<Option<i32>, AppError> {
        self.integers
            .get(name)
            .map(|v| {
                i32::try_from(*v)
                    .map_err(|_| AppError::BadRequest(format!("Option `{name}` is out of range.")))
            })
            .transpose()
    }
}
