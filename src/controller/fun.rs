//! Commands that need no account data, plus the team generator which uses it when
//! available.

use chrono::{Utc, Weekday};

use crate::{
    error::AppError,
    model::{
        gacha::GachaResult,
        resin::{ResinRecovery, MAX_RESIN},
        team::TeamSuggestion,
        trivia::ElementReaction,
    },
    service::{gacha, resin, team, trivia},
    state::AppState,
};

/// `/gacha`: simulated wishes.
pub fn gacha(count: usize) -> Result<GachaResult, AppError> {
    gacha::simulate(&mut rand::rng(), count)
}

/// `/resin`: time until `target` resin, `MAX_RESIN` when omitted.
pub fn resin(current: i32, target: Option<i32>) -> Result<ResinRecovery, AppError> {
    resin::calculate_recovery(current, target.unwrap_or(MAX_RESIN), Utc::now())
}

/// `/element_reaction`
pub fn element_reaction(name: &str) -> Result<ElementReaction, AppError> {
    trivia::find_reaction(name)
}

/// `/daily_domain`
pub fn daily_domain() -> (Weekday, &'static str) {
    trivia::domain_for(Utc::now())
}

/// `/team_generator`: random team from the caller's roster.
///
/// Users without a stored cookie get a team drawn from every classified character.
///
/// # Returns
/// - `Ok(TeamSuggestion)` - Four members; `roster_size` is `None` for the generic pool
/// - `Err(AppError::BadRequest)` - Fewer than four built characters
/// - `Err(AppError)` - Stored credential unreadable or roster fetch failed
pub async fn team_generator(state: &AppState, user_id: u64) -> Result<TeamSuggestion, AppError> {
    let bundle = state
        .store
        .get_credential(user_id)
        .await?
        .filter(|b| b.has_cookie());

    let Some(bundle) = bundle else {
        return Ok(team::generic_team(&mut rand::rng()));
    };

    let roster = state.gateway.fetch_character_roster(&bundle, None).await?;

    team::compose_team(&mut rand::rng(), &roster)
}
