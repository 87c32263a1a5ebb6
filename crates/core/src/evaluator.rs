//! Single payline evaluation.
//!
//! A line is classified by walking [`LINE_RULES`] in order; the first rule that
//! returns an outcome decides the line. Order matters: scatter handling runs
//! before recipes, and recipes before runs.

use crate::{
    PayTables, Payline, PaylineResolutionData, Recipe, Symbol, SymbolEntryData, WinSourceType,
    BOARD_COLS,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Number of leading reels on which a lone scatter voids the line.
const EARLY_SCATTER_REELS: usize = 3;
const MIN_RUN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineOutcome {
    NoWin,
    ScatterLine,
    Wild5,
    RecipeComplete(Symbol),
    Run3(Symbol),
    Run4(Symbol),
    Run5(Symbol),
}

impl LineOutcome {
    fn run(base: Symbol, length: usize) -> Self {
        match length {
            3 => LineOutcome::Run3(base),
            4 => LineOutcome::Run4(base),
            5 => LineOutcome::Run5(base),
            other => panic!("run length {other} is not a win"),
        }
    }

    /// Base symbol, length and pay tag of a run outcome.
    pub fn run_win(self) -> Option<(Symbol, usize, WinSourceType)> {
        match self {
            LineOutcome::Run3(base) => Some((base, 3, WinSourceType::Run3)),
            LineOutcome::Run4(base) => Some((base, 4, WinSourceType::Run4)),
            LineOutcome::Run5(base) => Some((base, 5, WinSourceType::Run5)),
            _ => None,
        }
    }
}

/// The five cells of one payline plus the counts every rule needs.
#[derive(Debug, Clone)]
pub struct LineView<'a> {
    pub payline: Payline,
    pub cells: [SymbolEntryData; BOARD_COLS],
    pub wilds: usize,
    pub scatters: usize,
    /// Leftmost column holding neither a WILD nor a SCATTER.
    pub first_base: Option<usize>,
    tables: &'a PayTables,
}

impl<'a> LineView<'a> {
    pub fn new(
        payline: Payline,
        cells: [SymbolEntryData; BOARD_COLS],
        tables: &'a PayTables,
    ) -> Self {
        let count = |symbol: Symbol| cells.iter().filter(|cell| cell.symbol == symbol).count();
        Self {
            payline,
            wilds: count(Symbol::Wild),
            scatters: count(Symbol::Scatter),
            first_base: cells.iter().position(|cell| !cell.symbol.is_special()),
            cells,
            tables,
        }
    }

    pub fn symbol(&self, col: usize) -> Symbol {
        self.cells[col].symbol
    }

    fn symbols(&self) -> [Symbol; BOARD_COLS] {
        std::array::from_fn(|col| self.symbol(col))
    }
}

pub type LineRule = fn(&LineView<'_>) -> Option<LineOutcome>;

/// Precedence list, highest priority first.
pub const LINE_RULES: [(&str, LineRule); 5] = [
    ("all_special", all_special_rule),
    ("scatter_line", scatter_line_rule),
    ("early_scatter", early_scatter_rule),
    ("recipe", recipe_rule),
    ("run", run_rule),
];

pub fn all_special_rule(view: &LineView<'_>) -> Option<LineOutcome> {
    if view.first_base.is_some() {
        return None;
    }
    if view.scatters == BOARD_COLS {
        Some(LineOutcome::ScatterLine)
    } else if view.wilds == BOARD_COLS {
        Some(LineOutcome::Wild5)
    } else {
        None
    }
}

// Scatters pay through the whole-board rule, never through a line.
pub fn scatter_line_rule(view: &LineView<'_>) -> Option<LineOutcome> {
    (view.scatters >= 3).then_some(LineOutcome::ScatterLine)
}

pub fn early_scatter_rule(view: &LineView<'_>) -> Option<LineOutcome> {
    (0..EARLY_SCATTER_REELS)
        .any(|col| view.symbol(col) == Symbol::Scatter)
        .then_some(LineOutcome::NoWin)
}

pub fn recipe_rule(view: &LineView<'_>) -> Option<LineOutcome> {
    let symbols = view.symbols();
    view.tables
        .recipes()
        .iter()
        .find(|recipe| completes_recipe(&symbols, recipe))
        .map(|recipe| LineOutcome::RecipeComplete(recipe.product))
}

pub fn run_rule(view: &LineView<'_>) -> Option<LineOutcome> {
    let Some(first) = view.first_base else {
        // Only wilds and scatters, and no rule above claimed the mix.
        return Some(LineOutcome::NoWin);
    };
    let base = view.symbol(first);
    if (0..first).any(|col| view.symbol(col) != Symbol::Wild) {
        return Some(LineOutcome::NoWin);
    }
    let extends = |col: usize| {
        let symbol = view.symbol(col);
        symbol == base || symbol == Symbol::Wild
    };
    if !(first + 1..MIN_RUN).all(extends) {
        return Some(LineOutcome::NoWin);
    }
    let mut length = MIN_RUN;
    while length < BOARD_COLS && extends(length) {
        length += 1;
    }
    Some(LineOutcome::run(base, length))
}

/// Exact ingredients are consumed first; a WILD stands in for any missing one.
pub fn completes_recipe(symbols: &[Symbol], recipe: &Recipe) -> bool {
    let mut remaining = symbols.to_vec();
    for ingredient in recipe.ingredients {
        let slot = remaining
            .iter()
            .position(|symbol| *symbol == ingredient)
            .or_else(|| remaining.iter().position(|symbol| *symbol == Symbol::Wild));
        match slot {
            Some(idx) => {
                remaining.remove(idx);
            }
            None => return false,
        }
    }
    remaining.is_empty()
}

pub fn classify_line(view: &LineView<'_>) -> LineOutcome {
    for (name, rule) in LINE_RULES {
        if let Some(outcome) = rule(view) {
            trace!(payline = ?view.payline, rule = name, ?outcome, "payline classified");
            return outcome;
        }
    }
    LineOutcome::NoWin
}

pub fn evaluate_line(
    payline: Payline,
    cells: [SymbolEntryData; BOARD_COLS],
    tables: &PayTables,
) -> PaylineResolutionData {
    let view = LineView::new(payline, cells, tables);
    let outcome = classify_line(&view);
    let mut result = PaylineResolutionData::empty(payline);
    match outcome {
        LineOutcome::NoWin => {}
        LineOutcome::ScatterLine => result.scatter = true,
        LineOutcome::Wild5 => {
            result.win_source = WinSourceType::Wild5;
            result.multiplier = tables.multiplier(Symbol::Wild, BOARD_COLS as u8);
            result.symbols = cells.to_vec();
        }
        LineOutcome::RecipeComplete(product) => {
            result.win_source = WinSourceType::Combo;
            result.multiplier = tables.multiplier(product, 1);
            result.symbols = cells.to_vec();
            result.combo = true;
            result.combo_symbol = Some(product);
        }
        LineOutcome::Run3(_) | LineOutcome::Run4(_) | LineOutcome::Run5(_) => {
            let Some((base, length, source)) = outcome.run_win() else {
                unreachable!("run outcome without a length");
            };
            result.win_source = source;
            result.multiplier = tables.multiplier(base, length as u8);
            result.symbols = cells[..length].to_vec();
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SlotConfig;
    use crate::Symbol::*;

    fn tables() -> PayTables {
        PayTables::from_config(&SlotConfig::standard()).expect("standard config")
    }

    fn cells(symbols: [Symbol; BOARD_COLS]) -> [SymbolEntryData; BOARD_COLS] {
        let rows = Payline::Payline2.rows();
        std::array::from_fn(|col| SymbolEntryData::new(symbols[col], rows[col], col))
    }

    fn outcome(symbols: [Symbol; BOARD_COLS]) -> LineOutcome {
        let tables = tables();
        classify_line(&LineView::new(Payline::Payline2, cells(symbols), &tables))
    }

    macro_rules! line_case {
        ($name:ident, [$($sym:expr),+], $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!(outcome([$($sym),+]), $expected);
            }
        };
    }

    line_case!(five_scatters_defer_to_board, [Scatter, Scatter, Scatter, Scatter, Scatter], LineOutcome::ScatterLine);
    line_case!(five_wilds_pay_wild5, [Wild, Wild, Wild, Wild, Wild], LineOutcome::Wild5);
    line_case!(three_scatters_defer_to_board, [Scatter, Eggs, Scatter, Eggs, Scatter], LineOutcome::ScatterLine);
    line_case!(scatter_wild_mix_scatter_line, [Scatter, Scatter, Scatter, Wild, Wild], LineOutcome::ScatterLine);
    line_case!(lone_early_scatter_voids, [Eggs, Eggs, Scatter, Eggs, Eggs], LineOutcome::NoWin);
    line_case!(early_scatter_beats_recipe, [Scatter, Chicken, CookingOil, Garlics, Lemons], LineOutcome::NoWin);
    line_case!(wilds_with_late_scatter_do_not_pay, [Wild, Wild, Wild, Wild, Scatter], LineOutcome::NoWin);
    line_case!(recipe_in_line_order, [Chicken, CookingOil, Garlics, CampFire, Lemons], LineOutcome::RecipeComplete(RoastChicken));
    line_case!(recipe_any_order, [Lemons, CampFire, Chicken, Garlics, CookingOil], LineOutcome::RecipeComplete(RoastChicken));
    line_case!(recipe_with_wild, [Chicken, Wild, Garlics, CampFire, Lemons], LineOutcome::RecipeComplete(RoastChicken));
    line_case!(recipe_order_breaks_ties, [Wild, Flour, Eggs, Butter, Sugar], LineOutcome::RecipeComplete(ChocolateCake));
    line_case!(soup_uses_water, [Water, Chicken, Garlics, Lemons, CampFire], LineOutcome::RecipeComplete(ChickenSoup));
    line_case!(run_of_three, [Eggs, Eggs, Eggs, Sugar, Eggs], LineOutcome::Run3(Eggs));
    line_case!(run_of_four_with_late_scatter, [Wild, Chocolate, Chocolate, Chocolate, Scatter], LineOutcome::Run4(Chocolate));
    line_case!(run_of_five_with_wilds, [Sugar, Wild, Sugar, Wild, Sugar], LineOutcome::Run5(Sugar));
    line_case!(leading_wilds_extend_run, [Wild, Wild, Wild, Butter, Water], LineOutcome::Run4(Butter));
    line_case!(base_on_last_reel, [Wild, Wild, Wild, Wild, RoastChicken], LineOutcome::Run5(RoastChicken));
    line_case!(late_scatter_before_base_breaks_run, [Wild, Wild, Wild, Scatter, Flour], LineOutcome::NoWin);
    line_case!(pair_is_not_a_win, [Eggs, Eggs, Flour, Eggs, Eggs], LineOutcome::NoWin);
    line_case!(products_can_run, [RoastChicken, RoastChicken, Wild, Eggs, Eggs], LineOutcome::Run3(RoastChicken));

    #[test]
    fn recipe_rule_claims_line_before_run_rule() {
        let tables = tables();
        let view = LineView::new(
            Payline::Payline1,
            cells([Wild, Wild, Wild, Wild, Lemons]),
            &tables,
        );
        assert_eq!(run_rule(&view), Some(LineOutcome::Run5(Lemons)));
        assert_eq!(recipe_rule(&view), Some(LineOutcome::RecipeComplete(RoastChicken)));
        assert_eq!(classify_line(&view), LineOutcome::RecipeComplete(RoastChicken));
    }

    #[test]
    fn exact_ingredient_is_consumed_before_wild() {
        let recipe = Recipe {
            product: RoastChicken,
            ingredients: [Chicken, CookingOil, Garlics, CampFire, Lemons],
        };
        assert!(completes_recipe(&[Chicken, CookingOil, Garlics, CampFire, Wild], &recipe));
        assert!(!completes_recipe(&[Chicken, Chicken, Garlics, CampFire, Lemons], &recipe));
    }

    #[test]
    fn combo_result_carries_all_cells_and_reward() {
        let tables = tables();
        let result = evaluate_line(
            Payline::Payline2,
            cells([Chicken, CookingOil, Garlics, CampFire, Lemons]),
            &tables,
        );
        assert!(result.combo);
        assert!(!result.scatter);
        assert_eq!(result.win_source, WinSourceType::Combo);
        assert_eq!(result.combo_symbol, Some(RoastChicken));
        assert_eq!(result.multiplier, tables.multiplier(RoastChicken, 1));
        assert_eq!(result.symbols.len(), BOARD_COLS);
    }

    #[test]
    fn run_result_records_participating_cells() {
        let tables = tables();
        let result = evaluate_line(
            Payline::Payline2,
            cells([Wild, Chocolate, Chocolate, Chocolate, Scatter]),
            &tables,
        );
        assert_eq!(result.win_source, WinSourceType::Run4);
        assert_eq!(result.multiplier, tables.multiplier(Chocolate, 4));
        assert_eq!(result.symbols.len(), 4);
        assert_eq!(result.symbols[3].col, 3);
        assert!(!result.combo);
    }

    #[test]
    fn run_results_are_tagged_by_length() {
        let tables = tables();
        let three = evaluate_line(
            Payline::Payline2,
            cells([Eggs, Eggs, Eggs, Sugar, Eggs]),
            &tables,
        );
        assert_eq!(three.win_source, WinSourceType::Run3);
        assert_eq!(three.multiplier, tables.multiplier(Eggs, 3));
        assert_eq!(three.symbols.len(), 3);

        let five = evaluate_line(
            Payline::Payline2,
            cells([Sugar, Wild, Sugar, Wild, Sugar]),
            &tables,
        );
        assert_eq!(five.win_source, WinSourceType::Run5);
        assert_eq!(five.multiplier, tables.multiplier(Sugar, 5));
        assert_eq!(five.symbols.len(), BOARD_COLS);
        assert!(five.is_win());
    }

    #[test]
    fn scatter_line_has_no_direct_multiplier() {
        let tables = tables();
        let result = evaluate_line(
            Payline::Payline2,
            cells([Scatter, Eggs, Scatter, Eggs, Scatter]),
            &tables,
        );
        assert!(result.scatter);
        assert!(!result.is_win());
        assert_eq!(result.win_source, WinSourceType::None);
    }
}
