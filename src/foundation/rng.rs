//! Deterministic RNG shared by every widget and the synchronizer.
//!
//! Wraps `ChaCha8Rng` so a seed fully determines particle fields, vehicle spawns and the
//! re-randomized vehicle counts shown on the display board.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed used when neither config nor environment provide one.
pub const DEFAULT_SEED: u64 = 42;

/// Environment variable overriding the configured seed.
pub const SEED_ENV: &str = "TRAFFIC_AI_SEED";

/// Site-wide RNG. Callers use `rng.0` (a `ChaCha8Rng` implementing `rand::Rng`).
#[derive(Clone, Debug)]
pub struct SiteRng(pub ChaCha8Rng);

impl Default for SiteRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SiteRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// `TRAFFIC_AI_SEED` if set to a valid `u64`, else `fallback`.
    pub fn seed_from_env(fallback: u64) -> u64 {
        std::env::var(SEED_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(fallback)
    }
}
