use crate::{
    BoardOptions, BoardStateResolutionData, ControlledRandom, Grid, PayTables, RngState, Symbol,
    BOARD_COLS, PLAYABLE_ROWS, REEL_LENGTH,
};
use std::fmt;
use std::sync::Arc;

mod cascade;
mod generate;
mod resolve;
mod tumble;

/// Seed used by [`Board::new`] before the first spin.
pub const DEFAULT_SEED: u64 = 1;

/// One game's reel grid plus the RNG stream that refills it.
///
/// The pay tables are shared read-only; everything else is owned by the board.
#[derive(Debug, Clone)]
pub struct Board<R: ControlledRandom = RngState> {
    grid: Grid,
    tables: Arc<PayTables>,
    rng: R,
    options: BoardOptions,
    last_resolution: Option<BoardStateResolutionData>,
    current_seed: u64,
}

impl Board<RngState> {
    pub fn new(tables: Arc<PayTables>) -> Self {
        let mut board = Self::with_rng(tables, RngState::from_seed(DEFAULT_SEED));
        board.populate_for_spin(DEFAULT_SEED);
        board
    }
}

impl<R: ControlledRandom> Board<R> {
    /// Builds a board over an all-BUTTER grid; call `populate_for_spin` before playing.
    pub fn with_rng(tables: Arc<PayTables>, rng: R) -> Self {
        let current_seed = rng.current_seed();
        Self {
            grid: Grid::filled(Symbol::Butter),
            tables,
            rng,
            options: BoardOptions::default(),
            last_resolution: None,
            current_seed,
        }
    }

    pub fn with_options(mut self, options: BoardOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> BoardOptions {
        self.options
    }

    pub fn tables(&self) -> &PayTables {
        &self.tables
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Seed the board was last populated with.
    pub fn current_seed(&self) -> u64 {
        self.current_seed
    }

    pub fn last_resolution(&self) -> Option<&BoardStateResolutionData> {
        self.last_resolution.as_ref()
    }

    pub fn symbol(&self, row: usize, col: usize) -> Symbol {
        self.grid.get(row, col)
    }

    /// Overwrites one cell. Column caps are not checked; this is a setup hook.
    pub fn set_symbol(&mut self, row: usize, col: usize, symbol: Symbol) {
        self.grid.set(row, col, symbol);
        self.last_resolution = None;
    }

    /// Replaces the whole grid, e.g. to replay a recorded board.
    pub fn load_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.last_resolution = None;
    }

    pub fn count_in_column(&self, col: usize, symbol: Symbol) -> usize {
        self.grid.count_in_column(col, symbol)
    }

    pub fn count_in_playable_area(&self, symbol: Symbol) -> usize {
        self.grid.count_in_playable_area(symbol)
    }

    pub fn coordinates_in_playable_area(&self, symbol: Symbol) -> Vec<(usize, usize)> {
        self.grid.coordinates_in_playable_area(symbol)
    }

    /// Text dump of the grid. With `full` the buffer rows are included.
    pub fn render(&self, full: bool) -> String {
        let width = Symbol::ALL
            .iter()
            .map(|symbol| symbol.display_name().len())
            .max()
            .unwrap_or(0);
        let separator = "-".repeat((width + 1) * BOARD_COLS + 1);
        let mut out = String::new();
        for row in 0..REEL_LENGTH {
            let playable = PLAYABLE_ROWS.contains(&row);
            if !playable && !full {
                continue;
            }
            if row == *PLAYABLE_ROWS.start() {
                out.push_str(&separator);
                out.push('\n');
            }
            for col in 0..BOARD_COLS {
                out.push_str(&format!(" {:<width$}", self.symbol(row, col).display_name()));
            }
            out.push('\n');
            if row == *PLAYABLE_ROWS.end() {
                out.push_str(&separator);
                out.push('\n');
            }
        }
        out
    }
}

impl<R: ControlledRandom> fmt::Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SlotConfig;

    fn tables() -> Arc<PayTables> {
        Arc::new(PayTables::from_config(&SlotConfig::standard()).expect("standard config"))
    }

    #[test]
    fn new_board_is_populated_with_default_seed() {
        let board = Board::new(tables());
        assert_eq!(board.current_seed(), DEFAULT_SEED);
        let mut again = Board::with_rng(tables(), RngState::from_seed(99));
        again.populate_for_spin(DEFAULT_SEED);
        assert_eq!(board.grid(), again.grid());
    }

    #[test]
    fn render_frames_playable_band() {
        let mut board = Board::with_rng(tables(), RngState::from_seed(5));
        board.set_symbol(4, 2, Symbol::Wild);
        let text = board.render(false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), PLAYABLE_ROWS.count() + 2);
        assert!(lines[0].starts_with('-'));
        assert!(lines[2].contains("Wild"));
        assert_eq!(board.render(true).lines().count(), REEL_LENGTH + 2);
        assert_eq!(board.to_string(), text);
    }
}
