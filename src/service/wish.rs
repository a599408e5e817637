//! Wish history digest.

use crate::model::wish::{BannerType, Wish, WishSummary};

/// Wishes fetched per `/wish_history` call.
pub const WISH_HISTORY_LIMIT: usize = 20;

/// Summarizes a newest-first list of wishes.
///
/// Pity is the number of wishes made since the most recent 5★ in `wishes`; when the
/// list holds no 5★ it is the length of the list.
pub fn summarize(banner: BannerType, wishes: &[Wish]) -> WishSummary {
    let names_of = |rarity: u8| -> Vec<String> {
        wishes
            .iter()
            .filter(|w| w.rarity == rarity)
            .map(|w| w.name.clone())
            .collect()
    };

    let pity = wishes
        .iter()
        .position(|w| w.rarity == 5)
        .unwrap_or(wishes.len());

    WishSummary {
        banner,
        total: wishes.len(),
        five_stars: names_of(5),
        four_stars: names_of(4),
        pity,
    }
}
