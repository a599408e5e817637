//! Reaction lookup and daily domain rotation.

use chrono::{DateTime, Datelike, Utc, Weekday};

use crate::{
    error::AppError,
    model::trivia::{daily_domain, ElementReaction, REACTIONS},
};

/// Finds a reaction by name, ignoring case and surrounding whitespace.
///
/// # Returns
/// - `Ok(ElementReaction)` - Matching reaction
/// - `Err(AppError::NotFound)` - Unknown reaction, with the list of known names
pub fn find_reaction(name: &str) -> Result<ElementReaction, AppError> {
    let needle = name.trim();

    REACTIONS
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(needle))
        .copied()
        .ok_or_else(|| {
            let known: Vec<&str> = REACTIONS.iter().map(|r| r.name).collect();
            AppError::NotFound(format!(
                "Unknown reaction `{}`. Known reactions: {}",
                needle,
                known.join(", ")
            ))
        })
}

/// Domain recommended for the weekday of `now` (UTC).
pub fn domain_for(now: DateTime<Utc>) -> (Weekday, &'static str) {
    let weekday = now.weekday();
    (weekday, daily_domain(weekday))
}
