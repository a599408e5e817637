//! Random team suggestions.
//!
//! Each role slot is filled with a random candidate tagged with that role in
//! `ROLE_TABLE`. Slots left open are filled with the strongest remaining candidates
//! (rarity, then level), which take the unused role labels in slot order.

use rand::{seq::IndexedRandom, Rng};

use crate::{
    error::AppError,
    model::{
        account::Character,
        team::{roles_for, Role, TeamSlot, TeamSuggestion, ROLE_TABLE},
    },
};

pub const TEAM_SIZE: usize = 4;

/// Characters at level 1 are counted as not built.
const MIN_BUILT_LEVEL: i32 = 1;

#[derive(Debug, Clone)]
struct Candidate {
    name: String,
    element: Option<String>,
    level: Option<i32>,
    rarity: i32,
}

impl From<&Character> for Candidate {
    fn from(c: &Character) -> Self {
        Self {
            name: c.name.clone(),
            element: Some(c.element.clone()),
            level: Some(c.level),
            rarity: c.rarity,
        }
    }
}

/// Suggests a team from the user's roster.
///
/// # Arguments
/// - `rng` - Random source
/// - `roster` - Owned characters as returned by the account API
///
/// # Returns
/// - `Ok(TeamSuggestion)` - Four members
/// - `Err(AppError::BadRequest)` - Fewer than four characters above level 1
pub fn compose_team<R: Rng + ?Sized>(
    rng: &mut R,
    roster: &[Character],
) -> Result<TeamSuggestion, AppError> {
    let owned: Vec<Candidate> = roster
        .iter()
        .filter(|c| c.level > MIN_BUILT_LEVEL)
        .map(Candidate::from)
        .collect();

    if owned.len() < TEAM_SIZE {
        return Err(AppError::BadRequest(format!(
            "You need at least {} characters above level {} to build a team (found {}).",
            TEAM_SIZE,
            MIN_BUILT_LEVEL,
            owned.len()
        )));
    }

    let roster_size = owned.len();

    Ok(TeamSuggestion {
        members: fill_team(rng, owned),
        roster_size: Some(roster_size),
    })
}

/// Suggests a team from every classified character, for users without a credential.
pub fn generic_team<R: Rng + ?Sized>(rng: &mut R) -> TeamSuggestion {
    let pool = ROLE_TABLE
        .iter()
        .map(|(name, _)| Candidate {
            name: (*name).to_string(),
            element: None,
            level: None,
            rarity: 0,
        })
        .collect();

    TeamSuggestion {
        members: fill_team(rng, pool),
        roster_size: None,
    }
}

fn fill_team<R: Rng + ?Sized>(rng: &mut R, candidates: Vec<Candidate>) -> Vec<TeamSlot> {
    let mut team: Vec<TeamSlot> = Vec::with_capacity(TEAM_SIZE);

    for role in Role::SLOT_ORDER {
        let available: Vec<&Candidate> = candidates
            .iter()
            .filter(|c| roles_for(&c.name).contains(&role))
            .filter(|c| !team.iter().any(|slot| slot.name == c.name))
            .collect();

        if let Some(pick) = available.choose(rng) {
            team.push(slot(Some(role), pick));
        }
    }

    if team.len() < TEAM_SIZE {
        let mut open_roles: Vec<Role> = Role::SLOT_ORDER
            .into_iter()
            .filter(|role| !team.iter().any(|slot| slot.role == Some(*role)))
            .collect();

        let mut remaining: Vec<&Candidate> = candidates
            .iter()
            .filter(|c| !team.iter().any(|slot| slot.name == c.name))
            .collect();
        remaining.sort_by(|a, b| (b.rarity, b.level).cmp(&(a.rarity, a.level)));

        for candidate in remaining.into_iter().take(TEAM_SIZE - team.len()) {
            let role = if open_roles.is_empty() {
                None
            } else {
                Some(open_roles.remove(0))
            };
            team.push(slot(role, candidate));
        }
    }

    team
}

fn slot(role: Option<Role>, candidate: &Candidate) -> TeamSlot {
    TeamSlot {
        role,
        name: candidate.name.clone(),
        element: candidate.element.clone(),
        level: candidate.level,
    }
}
