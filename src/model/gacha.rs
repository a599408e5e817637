//! Local wish simulator models.

/// Probability of a 5★ on a single simulated pull.
pub const FIVE_STAR_RATE: f64 = 0.006;
/// Probability of a 4★ on a single simulated pull.
pub const FOUR_STAR_RATE: f64 = 0.051;

pub const FIVE_STAR_POOL: [&str; 6] = [
    "Hu Tao", "Zhongli", "Raiden Shogun", "Ganyu", "Nahida", "Furina",
];
pub const FOUR_STAR_POOL: [&str; 6] = [
    "Xiangling", "Fischl", "Sucrose", "Bennett", "Diona", "Rosaria",
];
pub const THREE_STAR_POOL: [&str; 5] = [
    "Skyrider Sword", "Black Tassel", "Slingshot", "Magic Guide", "Cool Steel",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GachaPull {
    pub item: &'static str,
    pub rarity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GachaResult {
    pub pulls: Vec<GachaPull>,
    pub five_star_count: usize,
    pub four_star_count: usize,
    pub three_star_count: usize,
}
