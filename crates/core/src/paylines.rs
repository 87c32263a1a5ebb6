use crate::BOARD_COLS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Payline {
    Payline1,
    Payline2,
    Payline3,
    Payline4,
    Payline5,
    Payline6,
    Payline7,
    Payline8,
    Payline9,
    Payline10,
    Payline11,
    Payline12,
    Payline13,
    Payline14,
    Payline15,
}

impl Payline {
    pub const ALL: [Payline; 15] = [
        Payline::Payline1,
        Payline::Payline2,
        Payline::Payline3,
        Payline::Payline4,
        Payline::Payline5,
        Payline::Payline6,
        Payline::Payline7,
        Payline::Payline8,
        Payline::Payline9,
        Payline::Payline10,
        Payline::Payline11,
        Payline::Payline12,
        Payline::Payline13,
        Payline::Payline14,
        Payline::Payline15,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// Panics on an unknown ordinal.
    pub fn nth(ordinal: usize) -> Self {
        match Self::from_ordinal(ordinal) {
            Some(payline) => payline,
            None => panic!("unknown payline ordinal {ordinal}"),
        }
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Board row visited in each column, left to right. All rows sit in the playable band.
    pub fn rows(self) -> [usize; BOARD_COLS] {
        match self {
            Payline::Payline1 => [3, 3, 3, 3, 3],
            Payline::Payline2 => [4, 4, 4, 4, 4],
            Payline::Payline3 => [5, 5, 5, 5, 5],
            Payline::Payline4 => [3, 4, 5, 4, 3],
            Payline::Payline5 => [5, 4, 3, 4, 5],
            Payline::Payline6 => [3, 3, 4, 5, 5],
            Payline::Payline7 => [5, 5, 4, 3, 3],
            Payline::Payline8 => [3, 3, 4, 3, 3],
            Payline::Payline9 => [5, 5, 4, 5, 5],
            Payline::Payline10 => [4, 3, 4, 3, 4],
            Payline::Payline11 => [4, 5, 4, 5, 4],
            Payline::Payline12 => [5, 4, 5, 4, 5],
            Payline::Payline13 => [3, 4, 3, 4, 3],
            Payline::Payline14 => [5, 3, 5, 3, 5],
            Payline::Payline15 => [3, 5, 3, 5, 3],
        }
    }

    /// `(row, col)` pairs in column order.
    pub fn coordinates(self) -> [(usize, usize); BOARD_COLS] {
        let rows = self.rows();
        std::array::from_fn(|col| (rows[col], col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PLAYABLE_ROWS;
    use std::collections::HashSet;

    #[test]
    fn every_payline_stays_in_playable_band() {
        for payline in Payline::ALL {
            for (row, _) in payline.coordinates() {
                assert!(PLAYABLE_ROWS.contains(&row), "{payline:?} leaves the band");
            }
        }
    }

    #[test]
    fn paylines_are_distinct() {
        let shapes: HashSet<[usize; BOARD_COLS]> = Payline::ALL.iter().map(|p| p.rows()).collect();
        assert_eq!(shapes.len(), Payline::COUNT);
    }

    #[test]
    fn ordinals_round_trip() {
        assert_eq!(Payline::from_ordinal(3), Some(Payline::Payline4));
        assert_eq!(Payline::Payline15.ordinal(), 14);
        assert_eq!(Payline::from_ordinal(Payline::COUNT), None);
        assert_eq!(Payline::nth(0), Payline::Payline1);
    }

    #[test]
    #[should_panic(expected = "unknown payline ordinal 15")]
    fn unknown_ordinal_panics() {
        Payline::nth(15);
    }
}
