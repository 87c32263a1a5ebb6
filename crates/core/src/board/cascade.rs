use super::*;
use crate::*;
use tracing::{debug, warn};

impl<R: ControlledRandom> Board<R> {
    /// Resolve, tumble, and repeat until no combo is left or the step limit is hit.
    pub fn cascade_until_stable(&mut self) -> CascadeReport {
        let mut report = CascadeReport {
            seed: self.current_seed,
            ..CascadeReport::default()
        };
        for _ in 0..self.options.max_cascade_steps {
            let resolution = self.resolve_board_state();
            report.total_multiplier += resolution.total_multiplier;
            if !resolution.should_tumble {
                report.passes.push(CascadePass {
                    resolution,
                    tumble: None,
                });
                debug!(
                    passes = report.passes.len(),
                    total = report.total_multiplier,
                    "cascade settled"
                );
                return report;
            }
            let tumble = self.resolve_tumble(&resolution);
            report.passes.push(CascadePass {
                resolution,
                tumble: Some(tumble),
            });
        }
        report.truncated = true;
        warn!(
            limit = self.options.max_cascade_steps,
            seed = self.current_seed,
            "cascade stopped at step limit"
        );
        report
    }

    /// Populates for `seed` and plays the cascade out.
    pub fn spin(&mut self, seed: u64) -> CascadeReport {
        self.populate_for_spin(seed);
        self.cascade_until_stable()
    }
}
