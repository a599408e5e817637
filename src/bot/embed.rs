//! Embed builders for command replies.

use chrono::Weekday;
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    model::{
        account::{Character, GameAccount, ELEMENT_ORDER},
        gacha::GachaResult,
        resin::{ResinRecovery, ResinStatus},
        setting::{DeletedUserData, NotificationSetting},
        team::TeamSuggestion,
        trivia::ElementReaction,
        wish::WishSummary,
    },
    service::notification::format_duration,
};

const SUCCESS_COLOR: u32 = 0x2ECC71;
const ERROR_COLOR: u32 = 0xE74C3C;
const INFO_COLOR: u32 = 0x3498DB;
const GOLD_COLOR: u32 = 0xF1C40F;

/// Discord caps an embed field value at 1024 characters.
const FIELD_VALUE_LIMIT: usize = 1024;

pub fn success(title: &str, description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("✅ {title}"))
        .description(description)
        .color(SUCCESS_COLOR)
}

pub fn error(description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title("❌ Error")
        .description(description)
        .color(ERROR_COLOR)
}

pub fn cookie_set(account: &GameAccount) -> CreateEmbed {
    success(
        "Cookie saved",
        "Your cookie was verified and stored encrypted. Use `/status` to check your resin.",
    )
    .field(
        "Account",
        format!(
            "{} (AR {})\nUID {} · {}",
            account.nickname, account.level, account.game_uid, account.region_name
        ),
        false,
    )
}

pub fn status(status: &ResinStatus) -> CreateEmbed {
    let until_full = if status.is_full() {
        "Full!".to_string()
    } else {
        format!(
            "{} (<t:{}:t>)",
            format_duration(status.resin_recovery_secs),
            status.full_at(chrono::Utc::now()).timestamp()
        )
    };

    let mut embed = CreateEmbed::new()
        .title("🔋 Status")
        .color(INFO_COLOR)
        .field(
            "Original Resin",
            format!(
                "{}/{}\n{}",
                status.current_resin, status.max_resin, until_full
            ),
            false,
        )
        .field(
            "Daily Commissions",
            format!(
                "{}/{}",
                status.finished_commissions, status.total_commissions
            ),
            true,
        )
        .field(
            "Weekly Boss Discounts",
            format!(
                "{}/{} left",
                status.remaining_boss_discounts, status.boss_discount_limit
            ),
            true,
        )
        .field(
            "Realm Currency",
            format!(
                "{}/{}",
                status.current_realm_currency, status.max_realm_currency
            ),
            true,
        );

    if let Some(transformer) = status.transformer {
        let value = if transformer.ready {
            "Ready".to_string()
        } else {
            format_duration(transformer.recovery_secs)
        };
        embed = embed.field("Parametric Transformer", value, true);
    }

    embed.timestamp(Timestamp::now())
}

/// Groups characters by element in display order, strongest first within each group.
///
/// Elements outside `ELEMENT_ORDER` are appended after the known ones.
pub fn group_by_element(characters: &[Character]) -> Vec<(&str, Vec<&Character>)> {
    let mut groups: Vec<(&str, Vec<&Character>)> = Vec::new();

    for character in characters {
        match groups.iter_mut().find(|(e, _)| *e == character.element) {
            Some((_, members)) => members.push(character),
            None => groups.push((character.element.as_str(), vec![character])),
        }
    }

    groups.sort_by_key(|(element, _)| {
        ELEMENT_ORDER
            .iter()
            .position(|e| e == element)
            .unwrap_or(ELEMENT_ORDER.len())
    });
    for (_, members) in &mut groups {
        members.sort_by(|a, b| (b.rarity, b.level).cmp(&(a.rarity, a.level)));
    }

    groups
}

pub fn characters(characters: &[Character]) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Characters")
        .description(format!("{} characters owned", characters.len()))
        .color(INFO_COLOR);

    for (element, members) in group_by_element(characters) {
        let lines: Vec<String> = members
            .iter()
            .map(|c| {
                format!(
                    "{} {} Lv.{} C{}",
                    "★".repeat(c.rarity.max(0) as usize),
                    c.name,
                    c.level,
                    c.constellation
                )
            })
            .collect();

        embed = embed.field(
            format!("{element} ({})", members.len()),
            truncate_lines(&lines),
            false,
        );
    }

    embed
}

/// Joins lines, dropping the tail with a marker once the field limit is reached.
fn truncate_lines(lines: &[String]) -> String {
    let mut out = String::new();

    for (i, line) in lines.iter().enumerate() {
        let more = format!("\n…and {} more", lines.len() - i);
        if out.len() + line.len() + 1 + more.len() > FIELD_VALUE_LIMIT {
            out.push_str(&more);
            break;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }

    out
}

pub fn notification_setting(setting: &NotificationSetting) -> CreateEmbed {
    if setting.resin_reminder_enabled {
        success(
            "Resin reminder on",
            format!(
                "You'll get a DM when your resin reaches **{}**.",
                setting.resin_threshold
            ),
        )
        .field("Check interval", "Every 30 minutes", true)
        .field("Delivery", "Direct message", true)
    } else {
        success("Resin reminder off", "You won't receive resin reminders.")
    }
}

pub fn data_deleted(deleted: &DeletedUserData) -> CreateEmbed {
    let removed: Vec<&str> = [
        (deleted.credential, "cookie"),
        (deleted.settings, "reminder settings"),
    ]
    .into_iter()
    .filter_map(|(removed, label)| removed.then_some(label))
    .collect();

    success(
        "Data deleted",
        format!("Removed your {}.", removed.join(" and ")),
    )
}

pub fn wish_history(summary: &WishSummary) -> CreateEmbed {
    let list = |names: &[String]| {
        if names.is_empty() {
            "None".to_string()
        } else {
            names.join(", ")
        }
    };

    CreateEmbed::new()
        .title(format!("Wish history · {}", summary.banner.label()))
        .description(format!("Latest {} wishes", summary.total))
        .color(GOLD_COLOR)
        .field(
            format!("★★★★★ ({})", summary.five_stars.len()),
            list(&summary.five_stars),
            false,
        )
        .field(
            format!("★★★★ ({})", summary.four_stars.len()),
            list(&summary.four_stars),
            false,
        )
        .field("Pity", format!("{} since last 5★", summary.pity), true)
}

pub fn gacha(result: &GachaResult) -> CreateEmbed {
    let color = if result.five_star_count > 0 {
        GOLD_COLOR
    } else {
        INFO_COLOR
    };

    let lines: Vec<String> = result
        .pulls
        .iter()
        .map(|p| format!("{} {}", "★".repeat(p.rarity as usize), p.item))
        .collect();

    CreateEmbed::new()
        .title(format!("🎲 {} wish results", result.pulls.len()))
        .description(lines.join("\n"))
        .color(color)
        .footer(CreateEmbedFooter::new(format!(
            "5★ {} · 4★ {} · 3★ {}",
            result.five_star_count, result.four_star_count, result.three_star_count
        )))
}

pub fn resin_recovery(recovery: &ResinRecovery) -> CreateEmbed {
    CreateEmbed::new()
        .title("⏳ Resin calculator")
        .color(INFO_COLOR)
        .field(
            "Resin",
            format!("{} → {}", recovery.current, recovery.target),
            true,
        )
        .field(
            "Time needed",
            format_duration(recovery.minutes_needed * 60),
            true,
        )
        .field(
            "Ready at",
            format!("<t:{0}:f> (<t:{0}:R>)", recovery.ready_at.timestamp()),
            false,
        )
}

pub fn reaction(reaction: &ElementReaction) -> CreateEmbed {
    CreateEmbed::new()
        .title(reaction.name)
        .description(reaction.description)
        .color(INFO_COLOR)
        .field("Elements", reaction.elements.join(" + "), true)
        .field("Multiplier", reaction.multiplier, true)
}

pub fn domain(weekday: Weekday, domain: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Today's domain")
        .description(domain)
        .color(INFO_COLOR)
        .footer(CreateEmbedFooter::new(format!("{weekday} (UTC)")))
}

pub fn team(suggestion: &TeamSuggestion) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("🎯 Suggested team")
        .color(SUCCESS_COLOR);

    for member in &suggestion.members {
        let role = member.role.map_or("Flex", |r| r.label());
        let detail = match (&member.element, member.level) {
            (Some(element), Some(level)) => format!("{element} · Lv.{level}"),
            _ => "\u{200b}".to_string(),
        };
        embed = embed.field(format!("{role}: {}", member.name), detail, false);
    }

    let footer = match suggestion.roster_size {
        Some(size) => format!("Picked from {size} built characters"),
        None => "No cookie stored, picked from all characters".to_string(),
    };

    embed.footer(CreateEmbedFooter::new(footer))
}

pub fn help() -> CreateEmbed {
    CreateEmbed::new()
        .title("📖 Commands")
        .color(INFO_COLOR)
        .field(
            "Account (DM the bot)",
            "`/set_cookie` store your HoYoLAB cookie\n\
             `/set_authkey` store your wish history authkey\n\
             `/delete_cookie` delete the cookie\n\
             `/delete_data` delete everything stored about you",
            false,
        )
        .field(
            "Game data",
            "`/status` resin and daily progress\n\
             `/characters` owned characters\n\
             `/wish_history` latest wishes and pity\n\
             `/resin_notification` DM when resin reaches a threshold",
            false,
        )
        .field(
            "Fun",
            "`/gacha` wish simulator\n\
             `/resin` recovery calculator\n\
             `/element_reaction` reaction lookup\n\
             `/daily_domain` today's domain\n\
             `/team_generator` random team",
            false,
        )
        .field(
            "Getting an authkey",
            "**Mobile:** open the wish screen in the game, tap *History*, then copy the \
             URL of the page that opens in the browser.\n\
             **PC:** open the wish history in the game and copy the URL from the \
             browser.\n\
             Send the URL with `/set_authkey` in a DM. The authkey expires after about \
             24 hours.",
            false,
        )
}
