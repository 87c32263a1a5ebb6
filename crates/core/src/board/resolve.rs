use super::*;
use crate::*;
use tracing::debug;

impl<R: ControlledRandom> Board<R> {
    pub fn resolve_payline(&self, payline: Payline) -> PaylineResolutionData {
        let cells = payline
            .coordinates()
            .map(|(row, col)| SymbolEntryData::new(self.symbol(row, col), row, col));
        evaluate_line(payline, cells, &self.tables)
    }

    /// Evaluates all paylines plus the whole-board scatter rule. Reads the grid only.
    pub fn evaluate(&self) -> BoardStateResolutionData {
        let mut state = BoardStateResolutionData::default();
        for payline in Payline::ALL {
            let line = self.resolve_payline(payline);
            if !line.is_win() {
                continue;
            }
            state.total_multiplier += line.multiplier;
            state.should_tumble |= line.combo;
            state.winning_paylines.push(line);
        }
        if let Some(scatter) = self.scatter_win() {
            state.total_multiplier += scatter.multiplier;
            state.winning_paylines.push(scatter);
        }
        debug!(
            wins = state.winning_paylines.len(),
            total = state.total_multiplier,
            tumble = state.should_tumble,
            "board resolved"
        );
        state
    }

    /// Same as [`Board::evaluate`], and remembers the result for the next tumble.
    pub fn resolve_board_state(&mut self) -> BoardStateResolutionData {
        let state = self.evaluate();
        self.last_resolution = Some(state.clone());
        state
    }

    fn scatter_win(&self) -> Option<PaylineResolutionData> {
        let coords = self.coordinates_in_playable_area(Symbol::Scatter);
        let win_source = WinSourceType::scatter_for_count(coords.len())?;
        let count = coords.len().min(BOARD_COLS) as u8;
        Some(PaylineResolutionData {
            payline: None,
            win_source,
            combo_symbol: None,
            symbols: coords
                .into_iter()
                .map(|(row, col)| SymbolEntryData::new(Symbol::Scatter, row, col))
                .collect(),
            multiplier: self.tables.multiplier(Symbol::Scatter, count),
            combo: false,
            scatter: true,
        })
    }
}
