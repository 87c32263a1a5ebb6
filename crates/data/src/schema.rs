use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use cookpot_core::{MultiplierRule, Recipe, SlotConfig, Symbol};

pub const MULTIPLIERS_FILE: &str = "multipliers.json";
pub const RECIPES_FILE: &str = "recipes.json";

/// One symbol's row in `multipliers.json`, keyed by match count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiplierDef {
    pub symbol: Symbol,
    pub counts: BTreeMap<u8, f64>,
}

impl MultiplierDef {
    pub fn rules(&self) -> impl Iterator<Item = MultiplierRule> + '_ {
        self.counts.iter().map(|(count, multiplier)| MultiplierRule {
            symbol: self.symbol,
            count: *count,
            multiplier: *multiplier,
        })
    }
}

/// Regroups a flat rule list into the file layout, one entry per symbol.
pub fn multiplier_defs(config: &SlotConfig) -> Vec<MultiplierDef> {
    let mut grouped: BTreeMap<Symbol, BTreeMap<u8, f64>> = BTreeMap::new();
    for rule in &config.multipliers {
        grouped
            .entry(rule.symbol)
            .or_default()
            .insert(rule.count, rule.multiplier);
    }
    grouped
        .into_iter()
        .map(|(symbol, counts)| MultiplierDef { symbol, counts })
        .collect()
}
