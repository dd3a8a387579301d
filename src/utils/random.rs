use crate::{Config, Grid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed derived from the wall clock, so that separate runs differ.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Fills the field with fair coin flips until at least
/// `config.min_population()` cells are alive.
///
/// There is no retry limit: with a fair source a half-filled field misses the
/// threshold with negligible probability, but a degenerate `rng` (e.g. one
/// that always yields `false`) makes this loop forever.
pub fn generate_field(config: &Config, rng: &mut impl Rng) -> Grid {
    let size = config.width * config.height;
    let min_population = config.min_population();
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let cells = (0..size).map(|_| rng.gen::<bool>()).collect::<Vec<_>>();
        let population = cells.iter().filter(|&&c| c).count();
        if population >= min_population {
            log::debug!(
                "Random field accepted after {} attempt(s): population={}",
                attempts,
                population
            );
            return Grid::from_cells(config.width, config.height, cells);
        }
        log::debug!(
            "Random field rejected: population {} < {}",
            population,
            min_population
        );
    }
}

/// Like [`generate_field`] with a ChaCha source.
///
/// `seed` - random seed (if `None`, then it is taken from the wall clock)
pub fn generate_field_seeded(config: &Config, seed: Option<u64>) -> Grid {
    let seed = seed.unwrap_or_else(time_seed);
    log::info!("Random seed: {}", seed);
    generate_field(config, &mut ChaCha8Rng::seed_from_u64(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    /// Yields all-zero words for the first `zeros` calls, then all-ones.
    struct Stuck {
        zeros: usize,
    }

    impl RngCore for Stuck {
        fn next_u32(&mut self) -> u32 {
            if self.zeros > 0 {
                self.zeros -= 1;
                0
            } else {
                u32::MAX
            }
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let config = Config::default();
        let a = generate_field_seeded(&config, Some(42));
        let b = generate_field_seeded(&config, Some(42));
        assert_eq!(a, b);
        assert!(a.population() >= config.min_population());
    }

    #[test]
    fn test_sparse_field_is_regenerated() {
        // First fill is entirely dead, so a second one must be drawn.
        let config = Config::with_size(10, 4);
        let mut rng = Stuck { zeros: 40 };
        let grid = generate_field(&config, &mut rng);
        assert_eq!(grid.population(), 40);
    }
}
