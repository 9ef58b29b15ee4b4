//! Randomization of tile arrangements.

use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

use crate::TileSet;

/// Applies random permutations to tile sets.
///
/// The shuffler owns its PRNG so a session can reshuffle repeatedly from
/// one source of randomness, and so tests and the example binary can pin
/// a seed for reproducible boards.
///
/// # Examples
///
/// ```
/// use picslide_core::GridSize;
/// use picslide_game::{ImageInfo, Shuffler, TileSet};
///
/// let mut shuffler = Shuffler::with_seed(42);
/// let mut a = TileSet::build(ImageInfo { side_px: 300 }, GridSize::new(3));
/// let mut b = a.clone();
///
/// shuffler.shuffle(&mut a);
/// Shuffler::with_seed(42).shuffle(&mut b);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct Shuffler {
    rng: Pcg64Mcg,
}

impl Shuffler {
    /// Creates a shuffler seeded from the thread RNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a shuffler with a fixed seed, for reproducible boards.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Randomly permutes the slot assignment of `tiles`.
    pub fn shuffle(&mut self, tiles: &mut TileSet) {
        tiles.shuffle(&mut self.rng);
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use picslide_core::GridSize;

    use super::*;
    use crate::ImageInfo;

    #[test]
    fn test_same_seed_same_arrangement() {
        let image = ImageInfo { side_px: 450 };
        let mut a = TileSet::build(image, GridSize::new(4));
        let mut b = a.clone();

        Shuffler::with_seed(1234).shuffle(&mut a);
        Shuffler::with_seed(1234).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_consecutive_shuffles_advance_the_rng() {
        let image = ImageInfo { side_px: 450 };
        let mut shuffler = Shuffler::with_seed(1234);
        let mut first = TileSet::build(image, GridSize::new(5));
        let mut second = first.clone();

        shuffler.shuffle(&mut first);
        shuffler.shuffle(&mut second);
        // 25 tiles make an accidental repeat effectively impossible.
        assert_ne!(first, second);
    }
}
