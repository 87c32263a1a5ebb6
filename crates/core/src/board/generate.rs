use super::*;
use crate::*;
use tracing::debug;

impl<R: ControlledRandom> Board<R> {
    /// Reseeds the stream and refills every cell, row by row.
    pub fn populate_for_spin(&mut self, seed: u64) {
        self.rng.set_seed(seed);
        self.grid = Grid::filled(Symbol::Butter);
        for row in 0..REEL_LENGTH {
            for col in 0..BOARD_COLS {
                self.generate_one(row, col);
            }
        }
        self.current_seed = self.rng.current_seed();
        self.last_resolution = None;
        debug!(seed, "board populated");
    }

    /// Draws a symbol for one cell against the current grid and writes it.
    pub fn generate_one(&mut self, row: usize, col: usize) -> Symbol {
        let mut symbol = self.draw();
        // At most one extra roll before the validity check: a third SCATTER, or any WILD.
        if symbol == Symbol::Scatter && self.grid.count_in_playable_area(Symbol::Scatter) == 2 {
            symbol = self.draw();
        } else if symbol == Symbol::Wild {
            symbol = self.draw();
        }
        while !self.is_valid_symbol(symbol, row, col) {
            symbol = self.draw();
        }
        self.grid.set(row, col, symbol);
        symbol
    }

    /// Products never come from the stream; WILD and SCATTER are capped at one per reel.
    pub fn is_valid_symbol(&self, symbol: Symbol, row: usize, col: usize) -> bool {
        if self.tables.is_product(symbol) {
            return false;
        }
        if symbol.is_special() {
            return self.grid.reel(col).count_except(symbol, row) == 0;
        }
        true
    }

    fn draw(&mut self) -> Symbol {
        Symbol::ALL[self.rng.next_int() as usize % Symbol::COUNT]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, then repeats the last one.
    #[derive(Debug, Clone)]
    struct Scripted {
        values: Vec<u32>,
        cursor: usize,
        seed: u64,
    }

    impl Scripted {
        fn new(values: &[Symbol]) -> Self {
            Self {
                values: values.iter().map(|symbol| symbol.index() as u32).collect(),
                cursor: 0,
                seed: 0,
            }
        }
    }

    impl ControlledRandom for Scripted {
        fn set_seed(&mut self, seed: u64) {
            self.seed = seed;
            self.cursor = 0;
        }

        fn next_int(&mut self) -> u32 {
            let value = self.values[self.cursor.min(self.values.len() - 1)];
            self.cursor += 1;
            value
        }

        fn current_seed(&self) -> u64 {
            self.seed
        }
    }

    fn board(script: &[Symbol]) -> Board<Scripted> {
        let tables = PayTables::from_config(&SlotConfig::standard()).expect("standard config");
        Board::with_rng(Arc::new(tables), Scripted::new(script))
    }

    #[test]
    fn products_are_rejected() {
        let mut board = board(&[Symbol::RoastChicken, Symbol::ChickenSoup, Symbol::Lemons]);
        assert_eq!(board.generate_one(4, 0), Symbol::Lemons);
        assert_eq!(board.symbol(4, 0), Symbol::Lemons);
    }

    #[test]
    fn wild_gets_one_reroll() {
        let mut board = board(&[Symbol::Wild, Symbol::Wild, Symbol::Eggs]);
        assert_eq!(board.generate_one(3, 1), Symbol::Wild);
        assert_eq!(board.rng().cursor, 2);
    }

    #[test]
    fn second_wild_in_reel_is_resampled() {
        let mut board = board(&[Symbol::Wild, Symbol::Wild, Symbol::Sugar]);
        board.set_symbol(0, 2, Symbol::Wild);
        assert_eq!(board.generate_one(6, 2), Symbol::Sugar);
        assert_eq!(board.count_in_column(2, Symbol::Wild), 1);
    }

    #[test]
    fn replaced_cell_does_not_count_against_cap() {
        let mut board = board(&[Symbol::Scatter]);
        board.set_symbol(0, 3, Symbol::Scatter);
        assert_eq!(board.generate_one(0, 3), Symbol::Scatter);
    }

    #[test]
    fn scatter_rerolled_when_two_are_showing() {
        let mut board = board(&[Symbol::Scatter, Symbol::Flour]);
        board.set_symbol(3, 0, Symbol::Scatter);
        board.set_symbol(5, 1, Symbol::Scatter);
        assert_eq!(board.generate_one(4, 4), Symbol::Flour);
    }

    #[test]
    fn wild_reroll_landing_on_scatter_is_kept() {
        let mut board = board(&[Symbol::Wild, Symbol::Scatter, Symbol::Eggs]);
        board.set_symbol(3, 0, Symbol::Scatter);
        board.set_symbol(5, 1, Symbol::Scatter);
        assert_eq!(board.generate_one(4, 4), Symbol::Scatter);
        assert_eq!(board.rng().cursor, 2);
    }

    #[test]
    fn scatter_kept_when_three_are_showing() {
        let mut board = board(&[Symbol::Scatter, Symbol::Flour]);
        board.set_symbol(3, 0, Symbol::Scatter);
        board.set_symbol(5, 1, Symbol::Scatter);
        board.set_symbol(4, 2, Symbol::Scatter);
        assert_eq!(board.generate_one(4, 4), Symbol::Scatter);
        assert_eq!(board.rng().cursor, 1);
    }

    #[test]
    fn population_records_seed_and_keeps_caps() {
        let tables = PayTables::from_config(&SlotConfig::standard()).expect("standard config");
        let mut board = Board::with_rng(Arc::new(tables), RngState::from_seed(0));
        for seed in 0..50 {
            board.populate_for_spin(seed);
            assert_eq!(board.current_seed(), seed);
            for col in 0..BOARD_COLS {
                assert!(board.count_in_column(col, Symbol::Wild) <= 1);
                assert!(board.count_in_column(col, Symbol::Scatter) <= 1);
                for row in 0..REEL_LENGTH {
                    assert!(!board.tables().is_product(board.symbol(row, col)));
                }
            }
        }
    }
}
