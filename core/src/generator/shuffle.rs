use alloc::vec::Vec;
use core::marker::PhantomData;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Lays out the first `mine_count` cells as mines and shuffles them across the board.
///
/// A fresh `R` is seeded from the configuration on every call, so a generator never carries randomness between boards.
#[derive(Debug)]
pub struct ShuffleGenerator<R> {
    rng: PhantomData<fn() -> R>,
}

/// Reproduces the boards of the legacy 48-bit generator for a given seed.
pub type LegacyGenerator = ShuffleGenerator<LegacyRandom>;

/// Deterministic per seed, but lays mines out differently from [`LegacyGenerator`].
pub type FastGenerator = ShuffleGenerator<SmallRng>;

impl<R> ShuffleGenerator<R> {
    pub const fn new() -> Self {
        Self { rng: PhantomData }
    }
}

impl<R> Default for ShuffleGenerator<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for ShuffleGenerator<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ShuffleGenerator<R> {}

impl<R: SeedableRng + ShuffleSource> MinefieldGenerator for ShuffleGenerator<R> {
    fn generate(self, config: Configuration) -> Grid {
        let mine_count = config.mine_count();

        let mut cells: Vec<Cell> = (0..config.total_cells())
            .map(|index| Cell::new(index < mine_count))
            .collect();

        let mut rng = R::seed_from_u64(config.seed());
        shuffle(&mut cells, &mut rng);

        // a `Configuration` is never empty and the cell count follows its size
        let grid = Grid::from_cells(config.size(), cells)
            .expect("cell count should match the board size");
        log::debug!(
            "Generated {}x{} board with {} mines from seed {}",
            config.rows(),
            config.columns(),
            grid.mine_count(),
            config.seed()
        );
        grid
    }
}
