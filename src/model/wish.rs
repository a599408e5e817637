//! Wish (gacha) history models.

/// Wish banners queryable through the gacha log endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerType {
    Character,
    Weapon,
    Standard,
    Beginner,
}

impl BannerType {
    pub const ALL: [BannerType; 4] = [
        BannerType::Character,
        BannerType::Weapon,
        BannerType::Standard,
        BannerType::Beginner,
    ];

    /// `gacha_type` query value of the banner.
    pub fn gacha_type(self) -> u32 {
        match self {
            Self::Character => 301,
            Self::Weapon => 302,
            Self::Standard => 200,
            Self::Beginner => 100,
        }
    }

    /// Slash command choice value.
    pub fn key(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Weapon => "weapon",
            Self::Standard => "standard",
            Self::Beginner => "beginner",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Character => "Character Event Wish",
            Self::Weapon => "Weapon Event Wish",
            Self::Standard => "Standard Wish",
            Self::Beginner => "Beginners' Wish",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key)
    }
}

/// One wish result, newest first in every list returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wish {
    pub id: String,
    pub name: String,
    pub item_type: String,
    pub rarity: u8,
    /// Server-local time as reported, `YYYY-MM-DD HH:MM:SS`.
    pub time: String,
}

/// Digest of a page of wish history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishSummary {
    pub banner: BannerType,
    pub total: usize,
    pub five_stars: Vec<String>,
    pub four_stars: Vec<String>,
    /// Wishes since the most recent 5★ within the fetched page.
    pub pity: usize,
}
