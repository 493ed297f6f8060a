//! Random index source for spotlight selection.
//!
//! A process-wide ChaCha generator, seeded once from the wall clock at
//! first use. Queries that need reproducible picks bypass it by passing
//! their own generator to [`crate::catalog::Catalog::spotlight_with`].

use std::sync::{LazyLock, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

static SPOTLIGHT_RNG: LazyLock<Mutex<ChaCha12Rng>> = LazyLock::new(|| {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    Mutex::new(ChaCha12Rng::seed_from_u64(nanos))
});

/// Draw an index in `0..len` from the caller's generator.
///
/// Plain modulo reduction: the bias against `2^64` is immaterial at
/// catalog sizes.
pub(crate) fn pick_index(rng: &mut impl RngCore, len: usize) -> usize {
    debug_assert!(len > 0, "pick_index requires a non-empty collection");
    (rng.next_u64() % len as u64) as usize
}

/// Draw an index in `0..len` from the process-wide generator.
pub(crate) fn pick_index_global(len: usize) -> usize {
    let mut rng = SPOTLIGHT_RNG
        .lock()
        .expect("spotlight rng mutex poisoned");
    pick_index(&mut *rng, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_stay_in_bounds() {
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        for len in [1usize, 2, 11, 54] {
            for _ in 0..200 {
                assert!(pick_index(&mut rng, len) < len);
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ChaCha12Rng::seed_from_u64(42);
        let mut b = ChaCha12Rng::seed_from_u64(42);
        let first: Vec<usize> = (0..32).map(|_| pick_index(&mut a, 54)).collect();
        let second: Vec<usize> = (0..32).map(|_| pick_index(&mut b, 54)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_global_generator_stays_in_bounds() {
        for _ in 0..100 {
            assert!(pick_index_global(54) < 54);
        }
    }
}
