//! Shared randomness helpers.
//!
//! Every generator handed to dataset generation is created here, so a sweep
//! is reproducible from a single seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generator type used throughout the harness
pub type SweepRng = ChaCha8Rng;

/// Create a deterministic generator from `seed`
pub fn seeded_rng(seed: u64) -> SweepRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}
