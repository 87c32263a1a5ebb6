use crate::Symbol;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const BOARD_COLS: usize = 5;
pub const REEL_LENGTH: usize = 9;
pub const PLAYABLE_ROWS: RangeInclusive<usize> = 3..=5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the board grid")]
    OutOfRange { row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reel {
    symbols: [Symbol; REEL_LENGTH],
}

impl Reel {
    pub fn filled(symbol: Symbol) -> Self {
        Self {
            symbols: [symbol; REEL_LENGTH],
        }
    }

    pub fn get(&self, row: usize) -> Option<Symbol> {
        self.symbols.get(row).copied()
    }

    pub fn set(&mut self, row: usize, symbol: Symbol) -> bool {
        match self.symbols.get_mut(row) {
            Some(slot) => {
                *slot = symbol;
                true
            }
            None => false,
        }
    }

    /// Removes `row` and lets every symbol above it fall one cell. The removed
    /// symbol parks at row 0 until the caller refills it.
    pub fn collapse(&mut self, row: usize) -> Option<Symbol> {
        let removed = self.get(row)?;
        self.symbols[..=row].rotate_right(1);
        Some(removed)
    }

    /// Count of `symbol` in the reel, ignoring the cell at `skip_row`.
    pub fn count_except(&self, symbol: Symbol, skip_row: usize) -> usize {
        self.symbols
            .iter()
            .enumerate()
            .filter(|(row, s)| *row != skip_row && **s == symbol)
            .count()
    }

    pub fn count(&self, symbol: Symbol) -> usize {
        self.symbols.iter().filter(|s| **s == symbol).count()
    }

    pub fn symbols(&self) -> &[Symbol; REEL_LENGTH] {
        &self.symbols
    }
}

/// Five reels indexed by column. Rows run top (0) to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    reels: [Reel; BOARD_COLS],
}

impl Grid {
    pub fn filled(symbol: Symbol) -> Self {
        Self {
            reels: std::array::from_fn(|_| Reel::filled(symbol)),
        }
    }

    pub fn from_rows(rows: [[Symbol; BOARD_COLS]; REEL_LENGTH]) -> Self {
        let mut grid = Self::filled(Symbol::Butter);
        for (row, symbols) in rows.iter().enumerate() {
            for (col, symbol) in symbols.iter().enumerate() {
                grid.set(row, col, *symbol);
            }
        }
        grid
    }

    pub fn try_get(&self, row: usize, col: usize) -> Result<Symbol, GridError> {
        self.reels
            .get(col)
            .and_then(|reel| reel.get(row))
            .ok_or(GridError::OutOfRange { row, col })
    }

    pub fn try_set(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<(), GridError> {
        let placed = self
            .reels
            .get_mut(col)
            .map(|reel| reel.set(row, symbol))
            .unwrap_or(false);
        if placed {
            Ok(())
        } else {
            Err(GridError::OutOfRange { row, col })
        }
    }

    /// Panics on out-of-range access; a bad coordinate is an engine bug.
    pub fn get(&self, row: usize, col: usize) -> Symbol {
        match self.try_get(row, col) {
            Ok(symbol) => symbol,
            Err(err) => panic!("{err}"),
        }
    }

    /// Panics on out-of-range access; a bad coordinate is an engine bug.
    pub fn set(&mut self, row: usize, col: usize, symbol: Symbol) {
        if let Err(err) = self.try_set(row, col, symbol) {
            panic!("{err}");
        }
    }

    /// Panics on an out-of-range column.
    pub fn reel(&self, col: usize) -> &Reel {
        match self.reels.get(col) {
            Some(reel) => reel,
            None => panic!("{}", GridError::OutOfRange { row: 0, col }),
        }
    }

    /// Panics on out-of-range access.
    pub fn collapse(&mut self, row: usize, col: usize) -> Symbol {
        let removed = self.reels.get_mut(col).and_then(|reel| reel.collapse(row));
        match removed {
            Some(symbol) => symbol,
            None => panic!("{}", GridError::OutOfRange { row, col }),
        }
    }

    pub fn count_in_column(&self, col: usize, symbol: Symbol) -> usize {
        self.reel(col).count(symbol)
    }

    pub fn count_in_playable_column(&self, col: usize, symbol: Symbol) -> usize {
        PLAYABLE_ROWS
            .filter(|row| self.get(*row, col) == symbol)
            .count()
    }

    pub fn count_in_playable_area(&self, symbol: Symbol) -> usize {
        (0..BOARD_COLS)
            .map(|col| self.count_in_playable_column(col, symbol))
            .sum()
    }

    /// `(row, col)` pairs, reel by reel, top to bottom within each reel.
    pub fn coordinates_in_playable_area(&self, symbol: Symbol) -> Vec<(usize, usize)> {
        let mut coords = Vec::new();
        for col in 0..BOARD_COLS {
            for row in PLAYABLE_ROWS {
                if self.get(row, col) == symbol {
                    coords.push((row, col));
                }
            }
        }
        coords
    }

    pub fn rows(&self) -> impl Iterator<Item = [Symbol; BOARD_COLS]> + '_ {
        (0..REEL_LENGTH).map(move |row| std::array::from_fn(|col| self.get(row, col)))
    }
}
