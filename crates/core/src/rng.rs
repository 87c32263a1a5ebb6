use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Seedable integer stream consumed by board generation.
pub trait ControlledRandom {
    fn set_seed(&mut self, seed: u64);
    fn next_int(&mut self) -> u32;
    fn current_seed(&self) -> u64;
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    draws: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            draws: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Values drawn since the last reseed.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Pure step: the drawn value and the state that follows it.
    pub fn advanced(&self) -> (u32, RngState) {
        let mut next = self.clone();
        let value = next.next_int();
        (value, next)
    }
}

impl ControlledRandom for RngState {
    fn set_seed(&mut self, seed: u64) {
        *self = Self::from_seed(seed);
    }

    fn next_int(&mut self) -> u32 {
        self.draws += 1;
        self.rng.next_u32()
    }

    fn current_seed(&self) -> u64 {
        self.seed
    }
}
