use crate::{Symbol, BOARD_COLS};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

pub const RECIPE_SIZE: usize = BOARD_COLS;
pub const MIN_MATCH_COUNT: u8 = 1;
pub const MAX_MATCH_COUNT: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierRule {
    pub symbol: Symbol,
    pub count: u8,
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub product: Symbol,
    pub ingredients: [Symbol; RECIPE_SIZE],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub multipliers: Vec<MultiplierRule>,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardOptions {
    /// Upper bound on resolve/tumble rounds driven by `Board::cascade_until_stable`.
    pub max_cascade_steps: u32,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            max_cascade_steps: 32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("match count {count} for {symbol:?} is outside 1..=5 or reserved")]
    InvalidCount { symbol: Symbol, count: u8 },
    #[error("duplicate multiplier for {symbol:?} x{count}")]
    DuplicateMultiplier { symbol: Symbol, count: u8 },
    #[error("multiplier for {symbol:?} x{count} must be a finite non-negative number")]
    InvalidMultiplier { symbol: Symbol, count: u8 },
    #[error("missing multiplier for {symbol:?} x{count}")]
    MissingMultiplier { symbol: Symbol, count: u8 },
    #[error("duplicate recipe for {0:?}")]
    DuplicateRecipe(Symbol),
    #[error("recipe product {0:?} cannot be a wild or scatter")]
    SpecialProduct(Symbol),
    #[error("recipe for {product:?} uses invalid ingredient {ingredient:?}")]
    InvalidIngredient { product: Symbol, ingredient: Symbol },
}

/// Read-only pay and recipe lookup shared by every board.
#[derive(Debug, Clone)]
pub struct PayTables {
    multipliers: HashMap<(Symbol, u8), f64>,
    recipes: Vec<Recipe>,
    products: HashSet<Symbol>,
}

impl PayTables {
    pub fn from_config(config: &SlotConfig) -> Result<Self, ConfigError> {
        let mut multipliers = HashMap::new();
        for rule in &config.multipliers {
            if !(MIN_MATCH_COUNT..=MAX_MATCH_COUNT).contains(&rule.count) || rule.count == 2 {
                return Err(ConfigError::InvalidCount {
                    symbol: rule.symbol,
                    count: rule.count,
                });
            }
            if !rule.multiplier.is_finite() || rule.multiplier < 0.0 {
                return Err(ConfigError::InvalidMultiplier {
                    symbol: rule.symbol,
                    count: rule.count,
                });
            }
            if multipliers
                .insert((rule.symbol, rule.count), rule.multiplier)
                .is_some()
            {
                return Err(ConfigError::DuplicateMultiplier {
                    symbol: rule.symbol,
                    count: rule.count,
                });
            }
        }

        let mut products = HashSet::new();
        for recipe in &config.recipes {
            if recipe.product.is_special() {
                return Err(ConfigError::SpecialProduct(recipe.product));
            }
            if !products.insert(recipe.product) {
                return Err(ConfigError::DuplicateRecipe(recipe.product));
            }
        }
        for recipe in &config.recipes {
            for ingredient in recipe.ingredients {
                if ingredient.is_special() || products.contains(&ingredient) {
                    return Err(ConfigError::InvalidIngredient {
                        product: recipe.product,
                        ingredient,
                    });
                }
            }
        }

        let tables = Self {
            multipliers,
            recipes: config.recipes.clone(),
            products,
        };
        tables.check_coverage()?;
        Ok(tables)
    }

    // Every lookup the evaluator can make must resolve.
    fn check_coverage(&self) -> Result<(), ConfigError> {
        let require = |symbol: Symbol, count: u8| {
            if self.multipliers.contains_key(&(symbol, count)) {
                Ok(())
            } else {
                Err(ConfigError::MissingMultiplier { symbol, count })
            }
        };
        for symbol in Symbol::ALL {
            if symbol == Symbol::Wild {
                require(symbol, 5)?;
                continue;
            }
            for count in 3..=MAX_MATCH_COUNT {
                require(symbol, count)?;
            }
        }
        for product in &self.products {
            require(*product, 1)?;
            if self.multipliers[&(*product, 1)] <= 0.0 {
                return Err(ConfigError::InvalidMultiplier {
                    symbol: *product,
                    count: 1,
                });
            }
        }
        Ok(())
    }

    pub fn try_multiplier(&self, symbol: Symbol, count: u8) -> Option<f64> {
        self.multipliers.get(&(symbol, count)).copied()
    }

    /// Panics when the pair is not configured; the evaluator only asks for pairs that can occur.
    pub fn multiplier(&self, symbol: Symbol, count: u8) -> f64 {
        assert!(
            (MIN_MATCH_COUNT..=MAX_MATCH_COUNT).contains(&count),
            "match count {count} outside 1..=5"
        );
        match self.try_multiplier(symbol, count) {
            Some(value) => value,
            None => panic!("no multiplier configured for {symbol:?} x{count}"),
        }
    }

    /// Recipes in declared order; the evaluator tries them in this order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe_for(&self, product: Symbol) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.product == product)
    }

    pub fn is_product(&self, symbol: Symbol) -> bool {
        self.products.contains(&symbol)
    }
}

impl SlotConfig {
    /// The built-in kitchen table. `assets/` ships the same data as JSON.
    pub fn standard() -> Self {
        use crate::Symbol::*;

        let runs: [(Symbol, [f64; 3]); 17] = [
            (Butter, [0.5, 1.5, 4.5]),
            (CampFire, [0.5, 1.5, 4.5]),
            (Chicken, [2.0, 4.5, 12.0]),
            (Chocolate, [1.0, 3.0, 6.0]),
            (CookingOil, [0.5, 1.5, 4.5]),
            (Eggs, [0.5, 1.5, 4.5]),
            (Flour, [0.5, 1.5, 4.5]),
            (Garlics, [0.5, 1.5, 4.5]),
            (Lemons, [0.5, 1.5, 4.5]),
            (Strawberries, [0.5, 1.5, 4.5]),
            (Sugar, [1.0, 3.0, 9.0]),
            (Water, [0.5, 1.5, 4.5]),
            (ChocolateCake, [10.0, 30.0, 90.0]),
            (StrawberryCake, [10.0, 30.0, 90.0]),
            (RoastChicken, [7.5, 21.5, 60.0]),
            (ChickenSoup, [5.0, 15.0, 45.0]),
            (Scatter, [1.0, 3.0, 9.0]),
        ];

        let mut multipliers = Vec::new();
        for (symbol, values) in runs {
            for (offset, multiplier) in values.into_iter().enumerate() {
                multipliers.push(MultiplierRule {
                    symbol,
                    count: 3 + offset as u8,
                    multiplier,
                });
            }
        }
        for (symbol, count, multiplier) in [
            (Wild, 5, 100.0),
            (ChocolateCake, 1, 5.0),
            (StrawberryCake, 1, 5.0),
            (RoastChicken, 1, 4.0),
            (ChickenSoup, 1, 3.0),
        ] {
            multipliers.push(MultiplierRule {
                symbol,
                count,
                multiplier,
            });
        }

        let recipes = vec![
            Recipe {
                product: RoastChicken,
                ingredients: [Chicken, CookingOil, Garlics, CampFire, Lemons],
            },
            Recipe {
                product: ChocolateCake,
                ingredients: [Chocolate, Flour, Eggs, Butter, Sugar],
            },
            Recipe {
                product: StrawberryCake,
                ingredients: [Strawberries, Flour, Eggs, Butter, Sugar],
            },
            Recipe {
                product: ChickenSoup,
                ingredients: [Chicken, Water, Garlics, Lemons, CampFire],
            },
        ];

        Self {
            multipliers,
            recipes,
        }
    }
}
