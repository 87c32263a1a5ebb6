use super::*;
use crate::*;
use tracing::{debug, warn};

impl<R: ControlledRandom> Board<R> {
    /// Destroys the cells of every combo line, writes each product on one of its
    /// line's cells, and lets the reels fall and refill. A resolution with no
    /// combo lines leaves the board untouched.
    pub fn resolve_tumble(&mut self, state: &BoardStateResolutionData) -> TumbleResolutionData {
        let mut tumble = TumbleResolutionData::default();
        if !state.should_tumble {
            return tumble;
        }

        for line in state.combos() {
            for entry in &line.symbols {
                tumble.destroyed.insert(ByDestruction(*entry));
                tumble.combo_ingredients.push(*entry);
            }
        }

        for line in state.combos() {
            let Some(product) = line.combo_symbol else {
                panic!("combo line {:?} carries no product", line.payline);
            };
            let mut cells = line.symbols.clone();
            cells.sort_by_key(SymbolEntryData::board_position);
            let site = cells
                .iter()
                .find(|cell| !tumble.placed.contains(&ByPlacement(**cell)));
            match site {
                Some(site) => {
                    tumble.destroyed.remove(&ByDestruction(*site));
                    tumble
                        .placed
                        .insert(ByPlacement(SymbolEntryData::new(product, site.row, site.col)));
                }
                None => warn!(?product, payline = ?line.payline, "no free cell to place product"),
            }
        }

        assert!(
            tumble.is_disjoint(),
            "tumble would destroy a cell that receives a product"
        );

        for placed in tumble.placed_entries() {
            self.grid.set(placed.row, placed.col, placed.symbol);
        }

        let falls: Vec<SymbolEntryData> = tumble.destroyed_entries().copied().collect();
        for gone in falls {
            self.grid.collapse(gone.row, gone.col);
            let symbol = self.generate_one(0, gone.col);
            tumble
                .newly_created
                .push(SymbolEntryData::new(symbol, 0, gone.col));
        }

        self.last_resolution = None;
        debug!(
            destroyed = tumble.destroyed.len(),
            placed = tumble.placed.len(),
            created = tumble.newly_created.len(),
            "tumble applied"
        );
        tumble
    }
}
