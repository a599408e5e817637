//! Static lookup data for the reaction and domain commands.

use chrono::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementReaction {
    pub name: &'static str,
    pub elements: [&'static str; 2],
    pub multiplier: &'static str,
    pub description: &'static str,
}

pub const REACTIONS: [ElementReaction; 8] = [
    ElementReaction {
        name: "Vaporize",
        elements: ["Pyro", "Hydro"],
        multiplier: "1.5x / 2x",
        description: "Pyro on Hydro deals 1.5x damage, Hydro on Pyro deals 2x.",
    },
    ElementReaction {
        name: "Melt",
        elements: ["Pyro", "Cryo"],
        multiplier: "1.5x / 2x",
        description: "Cryo on Pyro deals 1.5x damage, Pyro on Cryo deals 2x.",
    },
    ElementReaction {
        name: "Overloaded",
        elements: ["Pyro", "Electro"],
        multiplier: "Fixed",
        description: "Pyro AoE explosion that knocks enemies back.",
    },
    ElementReaction {
        name: "Superconduct",
        elements: ["Electro", "Cryo"],
        multiplier: "Fixed",
        description: "Cryo AoE damage and -40% Physical RES.",
    },
    ElementReaction {
        name: "Electro-Charged",
        elements: ["Electro", "Hydro"],
        multiplier: "Over time",
        description: "Repeated Electro damage while both auras persist.",
    },
    ElementReaction {
        name: "Frozen",
        elements: ["Cryo", "Hydro"],
        multiplier: "Status",
        description: "Immobilizes the enemy until the ice breaks.",
    },
    ElementReaction {
        name: "Swirl",
        elements: ["Anemo", "Any"],
        multiplier: "Fixed",
        description: "Spreads the absorbed element to nearby enemies.",
    },
    ElementReaction {
        name: "Crystallize",
        elements: ["Geo", "Any"],
        multiplier: "Shield",
        description: "Drops a crystal that grants an elemental shield.",
    },
];

/// Recommended artifact domain for each weekday.
pub fn daily_domain(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Momiji-Dyed Court (Raiden Shogun, Yae Miko)",
        Weekday::Tue => "Ridge Watch (Hu Tao, Diluc)",
        Weekday::Wed => "Slumbering Court (Tartaglia, Kamisato Ayato)",
        Weekday::Thu => "Spire of Solitary Enlightenment (Nahida, Tighnari)",
        Weekday::Fri => "Denouement of Sin (Nilou, Wanderer)",
        Weekday::Sat => "Peak of Vindagnyr (Ganyu, Kamisato Ayaka)",
        Weekday::Sun => "Valley of Remembrance (Venti, Kaedehara Kazuha)",
    }
}
