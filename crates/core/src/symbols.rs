use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbol {
    Butter,
    CampFire,
    Chicken,
    Chocolate,
    CookingOil,
    Eggs,
    Flour,
    Garlics,
    Lemons,
    Strawberries,
    Sugar,
    ChocolateCake,
    StrawberryCake,
    RoastChicken,
    Wild,
    Scatter,
    Water,
    ChickenSoup,
}

impl Symbol {
    /// Every symbol in ordinal order. Generation draws index into this table.
    pub const ALL: [Symbol; 18] = [
        Symbol::Butter,
        Symbol::CampFire,
        Symbol::Chicken,
        Symbol::Chocolate,
        Symbol::CookingOil,
        Symbol::Eggs,
        Symbol::Flour,
        Symbol::Garlics,
        Symbol::Lemons,
        Symbol::Strawberries,
        Symbol::Sugar,
        Symbol::ChocolateCake,
        Symbol::StrawberryCake,
        Symbol::RoastChicken,
        Symbol::Wild,
        Symbol::Scatter,
        Symbol::Water,
        Symbol::ChickenSoup,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        match self {
            Symbol::Butter => "butter",
            Symbol::CampFire => "camp_fire",
            Symbol::Chicken => "chicken",
            Symbol::Chocolate => "chocolate",
            Symbol::CookingOil => "cooking_oil",
            Symbol::Eggs => "eggs",
            Symbol::Flour => "flour",
            Symbol::Garlics => "garlics",
            Symbol::Lemons => "lemons",
            Symbol::Strawberries => "strawberries",
            Symbol::Sugar => "sugar",
            Symbol::ChocolateCake => "chocolate_cake",
            Symbol::StrawberryCake => "strawberry_cake",
            Symbol::RoastChicken => "roast_chicken",
            Symbol::Wild => "wild",
            Symbol::Scatter => "scatter",
            Symbol::Water => "water",
            Symbol::ChickenSoup => "chicken_soup",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Symbol::Butter => "Butter",
            Symbol::CampFire => "CampFire",
            Symbol::Chicken => "Chicken",
            Symbol::Chocolate => "Chocolate",
            Symbol::CookingOil => "CookingOil",
            Symbol::Eggs => "Eggs",
            Symbol::Flour => "Flour",
            Symbol::Garlics => "Garlics",
            Symbol::Lemons => "Lemons",
            Symbol::Strawberries => "Strawberries",
            Symbol::Sugar => "Sugar",
            Symbol::ChocolateCake => "ChocolateCake",
            Symbol::StrawberryCake => "StrawberryCake",
            Symbol::RoastChicken => "RoastChicken",
            Symbol::Wild => "Wild",
            Symbol::Scatter => "Scatter",
            Symbol::Water => "Water",
            Symbol::ChickenSoup => "ChickenSoup",
        }
    }

    /// WILD and SCATTER never act as the base symbol of a run.
    pub fn is_special(self) -> bool {
        matches!(self, Symbol::Wild | Symbol::Scatter)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WinSourceType {
    #[default]
    None,
    #[serde(rename = "SCATTER_5")]
    Scatter5,
    #[serde(rename = "SCATTER_4")]
    Scatter4,
    #[serde(rename = "SCATTER_3")]
    Scatter3,
    #[serde(rename = "WILD_5")]
    Wild5,
    Combo,
    #[serde(rename = "RUN_5")]
    Run5,
    #[serde(rename = "RUN_4")]
    Run4,
    #[serde(rename = "RUN_3")]
    Run3,
}

impl WinSourceType {
    pub fn id(self) -> &'static str {
        match self {
            WinSourceType::None => "NONE",
            WinSourceType::Scatter5 => "SCATTER_5",
            WinSourceType::Scatter4 => "SCATTER_4",
            WinSourceType::Scatter3 => "SCATTER_3",
            WinSourceType::Wild5 => "WILD_5",
            WinSourceType::Combo => "COMBO",
            WinSourceType::Run5 => "RUN_5",
            WinSourceType::Run4 => "RUN_4",
            WinSourceType::Run3 => "RUN_3",
        }
    }

    pub fn scatter_for_count(count: usize) -> Option<Self> {
        match count {
            3 => Some(WinSourceType::Scatter3),
            4 => Some(WinSourceType::Scatter4),
            n if n >= 5 => Some(WinSourceType::Scatter5),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_table_order() {
        for (idx, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), idx);
            assert_eq!(Symbol::from_index(idx), Some(*symbol));
        }
        assert_eq!(Symbol::Wild.index(), 14);
        assert_eq!(Symbol::ChickenSoup.index(), 17);
        assert_eq!(Symbol::from_index(Symbol::COUNT), None);
    }

    #[test]
    fn serde_uses_screaming_names() {
        let raw = serde_json::to_string(&Symbol::RoastChicken).expect("serialize");
        assert_eq!(raw, "\"ROAST_CHICKEN\"");
        let back: Symbol = serde_json::from_str("\"COOKING_OIL\"").expect("parse");
        assert_eq!(back, Symbol::CookingOil);
        let source = serde_json::to_string(&WinSourceType::Run4).expect("serialize");
        assert_eq!(source, format!("\"{}\"", WinSourceType::Run4.id()));
    }

    #[test]
    fn scatter_classification_caps_at_five() {
        assert_eq!(WinSourceType::scatter_for_count(2), None);
        assert_eq!(WinSourceType::scatter_for_count(3), Some(WinSourceType::Scatter3));
        assert_eq!(WinSourceType::scatter_for_count(5), Some(WinSourceType::Scatter5));
    }
}
