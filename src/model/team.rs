//! Character role classification used by the team generator.
//!
//! This is the single source of role membership; every caller that needs to know
//! whether a character is a main DPS, sub DPS, support, or healer looks it up here.

/// Team role a character can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Dps,
    SubDps,
    Support,
    Healer,
}

impl Role {
    /// Slot order used when filling a team.
    pub const SLOT_ORDER: [Role; 4] = [Role::Dps, Role::SubDps, Role::Support, Role::Healer];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dps => "Main DPS",
            Self::SubDps => "Sub DPS",
            Self::Support => "Support",
            Self::Healer => "Healer",
        }
    }
}

use Role::{Dps, Healer, SubDps, Support};

/// Character name to role tags.
pub const ROLE_TABLE: &[(&str, &[Role])] = &[
    // Mondstadt
    ("Venti", &[Dps, Support]),
    ("Klee", &[Dps]),
    ("Eula", &[Dps]),
    ("Diluc", &[Dps]),
    ("Noelle", &[Dps, Healer]),
    ("Albedo", &[SubDps]),
    ("Durin", &[SubDps]),
    ("Jean", &[Support, Healer]),
    ("Bennett", &[Support, Healer]),
    ("Fischl", &[SubDps]),
    ("Rosaria", &[SubDps]),
    ("Sucrose", &[Support]),
    ("Mika", &[Support, Healer]),
    ("Diona", &[Support, Healer]),
    ("Barbara", &[Healer]),
    ("Dahlia", &[SubDps]),
    // Liyue
    ("Hu Tao", &[Dps]),
    ("Ganyu", &[Dps]),
    ("Xiao", &[Dps]),
    ("Keqing", &[Dps]),
    ("Ningguang", &[Dps]),
    ("Yanfei", &[Dps]),
    ("Gaming", &[Dps]),
    ("Zhongli", &[Support]),
    ("Yelan", &[SubDps]),
    ("Xingqiu", &[SubDps]),
    ("Xiangling", &[SubDps]),
    ("Beidou", &[SubDps]),
    ("Chongyun", &[SubDps]),
    ("Xinyan", &[SubDps]),
    ("Yun Jin", &[Support]),
    ("Xianyun", &[Support]),
    ("Lan Yan", &[Support]),
    ("Qiqi", &[Healer]),
    ("Yaoyao", &[Healer]),
    ("Baizhu", &[Support, Healer]),
    // Inazuma
    ("Raiden Shogun", &[Dps]),
    ("Kamisato Ayaka", &[Dps]),
    ("Kamisato Ayato", &[Dps]),
    ("Arataki Itto", &[Dps]),
    ("Yoimiya", &[Dps]),
    ("Yumemizuki Mizuki", &[Dps]),
    ("Yae Miko", &[SubDps]),
    ("Shikanoin Heizou", &[SubDps]),
    ("Kaedehara Kazuha", &[Support]),
    ("Gorou", &[Support]),
    ("Kujou Sara", &[Support]),
    ("Thoma", &[Support]),
    ("Kirara", &[Support]),
    ("Kuki Shinobu", &[Support]),
    ("Sangonomiya Kokomi", &[Healer]),
    ("Sayu", &[Healer]),
    // Sumeru
    ("Alhaitham", &[Dps]),
    ("Wanderer", &[Dps]),
    ("Cyno", &[Dps]),
    ("Tighnari", &[Dps]),
    ("Sethos", &[Dps]),
    ("Nilou", &[SubDps]),
    ("Dori", &[SubDps]),
    ("Nahida", &[Support]),
    ("Faruzan", &[Support]),
    ("Layla", &[Support]),
    ("Candace", &[Support]),
    ("Kaveh", &[Support]),
    // Fontaine
    ("Neuvillette", &[Dps]),
    ("Lyney", &[Dps]),
    ("Navia", &[Dps]),
    ("Clorinde", &[Dps]),
    ("Wriothesley", &[Dps]),
    ("Arlecchino", &[Dps]),
    ("Tartaglia", &[Dps]),
    ("Furina", &[SubDps, Healer]),
    ("Emilie", &[SubDps]),
    ("Chiori", &[SubDps]),
    ("Lynette", &[Support]),
    ("Freminet", &[Support]),
    ("Chevreuse", &[Support]),
    ("Charlotte", &[Healer]),
    ("Sigewinne", &[Healer]),
    // Natlan
    ("Mavuika", &[Dps]),
    ("Mualani", &[Dps]),
    ("Kinich", &[Dps]),
    ("Chasca", &[Dps]),
    ("Varesa", &[Dps]),
    ("Kachina", &[SubDps]),
    ("Ifa", &[SubDps]),
    ("Xilonen", &[Support]),
    ("Citlali", &[Support]),
    ("Ororon", &[Support]),
    ("Iansan", &[Support]),
    // Nod-Krai and others
    ("Skirk", &[Dps]),
    ("Nefer", &[Dps]),
    ("Flins", &[Dps]),
    ("Columbina", &[Dps]),
    ("Aino", &[SubDps]),
    ("Jahoda", &[SubDps]),
    ("Lauma", &[SubDps]),
    ("Ineffa", &[SubDps]),
    ("Traveler", &[Dps]),
];

/// Role tags of `name`, empty for characters not in the table.
pub fn roles_for(name: &str) -> &'static [Role] {
    ROLE_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, roles)| *roles)
        .unwrap_or(&[])
}

/// One filled slot of a generated team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSlot {
    /// Role the member fills, `None` for a filler that matched no open role.
    pub role: Option<Role>,
    pub name: String,
    pub element: Option<String>,
    pub level: Option<i32>,
}

/// Team returned by `/team_generator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSuggestion {
    pub members: Vec<TeamSlot>,
    /// Built characters considered, `None` when the generic pool was used.
    pub roster_size: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_multi_role_characters() {
        assert_eq!(roles_for("Bennett"), &[Support, Healer]);
        assert_eq!(roles_for("Hu Tao"), &[Dps]);
    }

    #[test]
    fn unknown_character_has_no_roles() {
        assert!(roles_for("Paimon").is_empty());
    }

    #[test]
    fn table_has_no_duplicate_names() {
        let mut names: Vec<&str> = ROLE_TABLE.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }
}
