//! Local wish simulator. No account data is involved.

use rand::{seq::IndexedRandom, Rng};

use crate::{
    error::AppError,
    model::gacha::{
        GachaPull, GachaResult, FIVE_STAR_POOL, FIVE_STAR_RATE, FOUR_STAR_POOL, FOUR_STAR_RATE,
        THREE_STAR_POOL,
    },
};

/// Pull counts offered by the simulator.
pub const ALLOWED_PULL_COUNTS: [usize; 2] = [1, 10];

/// Maps a uniform roll in `[0, 1)` to a rarity.
pub fn rarity_for_roll(roll: f64) -> u8 {
    if roll < FIVE_STAR_RATE {
        5
    } else if roll < FIVE_STAR_RATE + FOUR_STAR_RATE {
        4
    } else {
        3
    }
}

/// Simulates `count` independent pulls.
///
/// # Arguments
/// - `rng` - Random source; tests pass a seeded generator
/// - `count` - Number of pulls, 1 or 10
///
/// # Returns
/// - `Ok(GachaResult)` - Pulls in order with per-rarity counts
/// - `Err(AppError::BadRequest)` - Unsupported pull count
pub fn simulate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<GachaResult, AppError> {
    if !ALLOWED_PULL_COUNTS.contains(&count) {
        return Err(AppError::BadRequest(
            "You can wish 1 or 10 times.".to_string(),
        ));
    }

    let pulls: Vec<GachaPull> = (0..count)
        .map(|_| {
            let rarity = rarity_for_roll(rng.random::<f64>());
            let pool: &[&'static str] = match rarity {
                5 => &FIVE_STAR_POOL,
                4 => &FOUR_STAR_POOL,
                _ => &THREE_STAR_POOL,
            };
            pool.choose(rng).map(|&item| GachaPull { item, rarity })
        })
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| AppError::InternalError("Empty gacha pool".to_string()))?;

    let count_of = |rarity: u8| pulls.iter().filter(|p| p.rarity == rarity).count();

    Ok(GachaResult {
        five_star_count: count_of(5),
        four_star_count: count_of(4),
        three_star_count: count_of(3),
        pulls,
    })
}
