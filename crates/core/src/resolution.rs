use crate::{Payline, Symbol, WinSourceType, BOARD_COLS};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolEntryData {
    pub symbol: Symbol,
    pub row: usize,
    pub col: usize,
}

impl SymbolEntryData {
    pub fn new(symbol: Symbol, row: usize, col: usize) -> Self {
        Self { symbol, row, col }
    }

    pub fn same_cell(&self, other: &SymbolEntryData) -> bool {
        self.row == other.row && self.col == other.col
    }

    /// Row-major position; the placement ordering.
    pub fn board_position(&self) -> usize {
        self.row * BOARD_COLS + self.col
    }
}

/// Orders entries row-major by board position. Equality ignores the symbol.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByPlacement(pub SymbolEntryData);

impl PartialEq for ByPlacement {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_cell(&other.0)
    }
}

impl Eq for ByPlacement {}

impl PartialOrd for ByPlacement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByPlacement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.board_position().cmp(&other.0.board_position())
    }
}

/// Orders entries column-major, top of each column first. Equality ignores the symbol.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByDestruction(pub SymbolEntryData);

impl PartialEq for ByDestruction {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_cell(&other.0)
    }
}

impl Eq for ByDestruction {}

impl PartialOrd for ByDestruction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByDestruction {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0.col, self.0.row).cmp(&(other.0.col, other.0.row))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PaylineResolutionData {
    /// `None` for the whole-board scatter entry.
    pub payline: Option<Payline>,
    pub win_source: WinSourceType,
    pub combo_symbol: Option<Symbol>,
    pub symbols: Vec<SymbolEntryData>,
    pub multiplier: f64,
    pub combo: bool,
    pub scatter: bool,
}

impl PaylineResolutionData {
    pub fn empty(payline: Payline) -> Self {
        Self {
            payline: Some(payline),
            ..Self::default()
        }
    }

    pub fn is_win(&self) -> bool {
        self.multiplier > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BoardStateResolutionData {
    pub winning_paylines: Vec<PaylineResolutionData>,
    pub total_multiplier: f64,
    pub should_tumble: bool,
}

impl BoardStateResolutionData {
    pub fn combos(&self) -> impl Iterator<Item = &PaylineResolutionData> {
        self.winning_paylines.iter().filter(|line| line.combo)
    }

    pub fn scatter_win(&self) -> Option<&PaylineResolutionData> {
        self.winning_paylines
            .iter()
            .find(|line| line.scatter && line.payline.is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TumbleResolutionData {
    pub placed: BTreeSet<ByPlacement>,
    pub destroyed: BTreeSet<ByDestruction>,
    /// Cells of every combo line with the ingredient that was there.
    pub combo_ingredients: Vec<SymbolEntryData>,
    pub newly_created: Vec<SymbolEntryData>,
}

impl TumbleResolutionData {
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty() && self.destroyed.is_empty() && self.newly_created.is_empty()
    }

    pub fn placed_entries(&self) -> impl Iterator<Item = &SymbolEntryData> {
        self.placed.iter().map(|entry| &entry.0)
    }

    pub fn destroyed_entries(&self) -> impl Iterator<Item = &SymbolEntryData> {
        self.destroyed.iter().map(|entry| &entry.0)
    }

    pub fn is_disjoint(&self) -> bool {
        self.destroyed_entries()
            .all(|gone| !self.placed_entries().any(|kept| kept.same_cell(gone)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadePass {
    pub resolution: BoardStateResolutionData,
    pub tumble: Option<TumbleResolutionData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CascadeReport {
    pub seed: u64,
    pub passes: Vec<CascadePass>,
    pub total_multiplier: f64,
    /// Set when the step limit stopped the loop before the board settled.
    pub truncated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orderings_differ_by_axis() {
        let upper_right = SymbolEntryData::new(Symbol::Eggs, 3, 4);
        let lower_left = SymbolEntryData::new(Symbol::Eggs, 5, 0);
        assert!(ByPlacement(upper_right) < ByPlacement(lower_left));
        assert!(ByDestruction(lower_left) < ByDestruction(upper_right));
    }

    #[test]
    fn sets_dedupe_by_cell() {
        let mut placed = BTreeSet::new();
        assert!(placed.insert(ByPlacement(SymbolEntryData::new(Symbol::Eggs, 4, 2))));
        assert!(!placed.insert(ByPlacement(SymbolEntryData::new(
            Symbol::RoastChicken,
            4,
            2
        ))));
        assert_eq!(placed.len(), 1);
    }

    #[test]
    fn empty_tumble_is_disjoint() {
        let tumble = TumbleResolutionData::default();
        assert!(tumble.is_empty());
        assert!(tumble.is_disjoint());
    }
}
