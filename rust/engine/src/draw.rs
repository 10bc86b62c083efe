use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Seeded source of secret numbers.
///
/// One drawer feeds every session of a run: each construction or restart
/// consumes the next value of the stream, so a fixed seed reproduces the
/// whole sequence of secrets across restarts.
#[derive(Debug)]
pub struct SecretDrawer {
    rng: ChaCha20Rng,
}

impl SecretDrawer {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Uniform draw from the closed interval `[min, max]`.
    ///
    /// Callers must validate the range first; `min == max` collapses to
    /// that single value.
    pub fn draw(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }
}
