use crate::*;
pub use shuffle::*;

mod shuffle;

pub trait MinefieldGenerator {
    fn generate(self, config: Configuration) -> Grid;
}

/// Generates the board for `config` with the seed-compatible [`LegacyGenerator`].
///
/// Calling this twice with the same configuration yields identical grids.
pub fn generate(config: Configuration) -> Grid {
    LegacyGenerator::new().generate(config)
}
