use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded random number generator so sessions are reproducible under a fixed seed
#[derive(Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new GameRng with an optional seed.
    /// If seed is None, generates a random seed.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            use rand::thread_rng;
            thread_rng().gen()
        });

        let rng = ChaCha8Rng::seed_from_u64(seed);
        GameRng { rng, seed }
    }

    /// Get the seed used for this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random index in range [0, max)
    pub fn index(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// Pick a uniform-random element of a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }

    /// Fisher-Yates shuffle for a mutable slice
    pub fn shuffle<T>(&mut self, array: &mut [T]) {
        for i in (1..array.len()).rev() {
            let j = self.index(i + 1);
            array.swap(i, j);
        }
    }
}
