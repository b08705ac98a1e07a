use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for the few random choices a game makes, so a session can
/// be replayed from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
