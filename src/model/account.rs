//! Game account and roster models returned by the account API.

/// Game identifier of Genshin Impact global accounts.
pub const GENSHIN_GAME_BIZ: &str = "hk4e_global";

/// Display order of the seven elements.
pub const ELEMENT_ORDER: [&str; 7] = [
    "Pyro", "Hydro", "Electro", "Cryo", "Anemo", "Geo", "Dendro",
];

/// A game role linked to a HoYoLAB account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameAccount {
    pub game_biz: String,
    pub region: String,
    pub game_uid: String,
    pub nickname: String,
    pub level: i32,
    pub region_name: String,
}

/// An owned character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub element: String,
    pub rarity: i32,
    pub level: i32,
    pub constellation: i32,
}
