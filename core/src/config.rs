use serde::{Deserialize, Serialize};

use crate::*;

/// Board shape, mine count and shuffle seed for one game.
///
/// Always valid: at least one row and column, and no more mines than cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct Configuration {
    rows: Coord,
    columns: Coord,
    mine_count: CellCount,
    seed: u64,
}

#[derive(Deserialize)]
struct RawConfiguration {
    rows: Coord,
    columns: Coord,
    mine_count: CellCount,
    seed: u64,
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = GameError;

    fn try_from(raw: RawConfiguration) -> Result<Self> {
        Self::new(raw.rows, raw.columns, raw.mine_count, raw.seed)
    }
}

impl Configuration {
    /// Only for values known to be valid at compile time, such as the presets.
    pub(crate) const fn new_unchecked(rows: Coord, columns: Coord, mine_count: CellCount, seed: u64) -> Self {
        Self {
            rows,
            columns,
            mine_count,
            seed,
        }
    }

    pub fn new(rows: Coord, columns: Coord, mine_count: CellCount, seed: u64) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mine_count > mult(rows, columns) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(rows, columns, mine_count, seed))
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn columns(&self) -> Coord {
        self.columns
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }
}

/// Standard board presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// `(rows, columns)` of the preset.
    pub const fn size(self) -> Coord2 {
        match self {
            Self::Easy => (8, 8),
            Self::Medium => (16, 16),
            Self::Hard => (16, 30),
        }
    }

    pub const fn mine_count(self) -> CellCount {
        match self {
            Self::Easy => 10,
            Self::Medium => 40,
            Self::Hard => 99,
        }
    }

    pub const fn configuration(self, seed: u64) -> Configuration {
        let (rows, columns) = self.size();
        Configuration::new_unchecked(rows, columns, self.mine_count(), seed)
    }
}

/// Step-by-step construction of a [`Configuration`], starting from the easy preset and seed `0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConfigurationBuilder {
    rows: Coord,
    columns: Coord,
    mine_count: CellCount,
    seed: u64,
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationBuilder {
    pub const fn new() -> Self {
        let (rows, columns) = Difficulty::Easy.size();
        Self {
            rows,
            columns,
            mine_count: Difficulty::Easy.mine_count(),
            seed: 0,
        }
    }

    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        let (rows, columns) = difficulty.size();
        self.rows = rows;
        self.columns = columns;
        self.mine_count = difficulty.mine_count();
        self
    }

    pub const fn with_rows(mut self, rows: Coord) -> Self {
        self.rows = rows;
        self
    }

    pub const fn with_columns(mut self, columns: Coord) -> Self {
        self.columns = columns;
        self
    }

    pub const fn with_mine_count(mut self, mine_count: CellCount) -> Self {
        self.mine_count = mine_count;
        self
    }

    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the seed with one drawn from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn with_random_seed(self) -> Self {
        self.with_seed(rand::random())
    }

    pub fn build(self) -> Result<Configuration> {
        Configuration::new(self.rows, self.columns, self.mine_count, self.seed)
    }
}
