use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridState {
    #[default]
    InProgress,
    Dead,
    Won,
}

impl GridState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Dead | Self::Won)
    }
}

/// The board of a single game: the cell matrix plus its terminal state.
///
/// Cells are stored row-major, indexed by `(row, column)`. The shape never changes after construction; only cell
/// state moves, through the operations in the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SavedGrid")]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
    hidden_safe: CellCount,
    state: GridState,
    death_cause: Option<Coord2>,
}

impl Grid {
    /// Builds a grid from cells laid out row by row.
    pub(crate) fn from_cells(size: Coord2, cells: Vec<Cell>) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        let cells = Array2::from_shape_vec(size.to_nd_index(), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self::from_array(cells))
    }

    /// Builds a grid with mines exactly where `mine_mask` is set.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (rows, columns) = mine_mask.dim();
        if rows == 0 || columns == 0 {
            return Err(GameError::EmptyBoard);
        }
        if rows > usize::from(Coord::MAX) || columns > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self::from_array(mine_mask.map(|&mine| Cell::new(mine))))
    }

    /// Builds a grid from a list of mine positions.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }
        Self::from_mine_mask(&mine_mask)
    }

    fn from_array(mut cells: Array2<Cell>) -> Self {
        assign_adjacent_mines(&mut cells);

        let total = cells.len();
        let mine_count = count_mines(&cells);
        if mine_count == total {
            log::warn!("Every cell of the {total} cell grid is a mine, it cannot be won");
        }

        // shape was checked against `Coord`, so both counts fit
        Self {
            cells,
            mine_count: mine_count as CellCount,
            hidden_safe: (total - mine_count) as CellCount,
            state: GridState::InProgress,
            death_cause: None,
        }
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.cells.dim();
        (rows as Coord, columns as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, columns) = self.size();
        if coords.0 < rows && coords.1 < columns {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn state(&self) -> GridState {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        matches!(self.state, GridState::Dead)
    }

    pub fn is_won(&self) -> bool {
        matches!(self.state, GridState::Won)
    }

    /// True once a mine was revealed or every safe cell is disclosed.
    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn death_cause(&self) -> Option<Coord2> {
        self.death_cause
    }

    /// Safe cells still hidden; the game is won when this reaches zero.
    pub fn hidden_safe_count(&self) -> CellCount {
        self.hidden_safe
    }

    pub fn marked_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_marked()).count() as CellCount
    }

    pub fn visible_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_visible()).count() as CellCount
    }

    /// The solved board, one string per row: `M` for a mine, the adjacency count otherwise.
    pub fn layout(&self) -> Vec<String> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(Cell::layout_symbol).collect())
            .collect()
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        surrounding(coords, self.size())
    }

    /// Discloses a hidden safe cell, returning whether it was the last one.
    pub(crate) fn disclose_safe(&mut self, coords: Coord2) -> bool {
        self.cell_mut(coords).disclose();
        self.hidden_safe = self.hidden_safe.saturating_sub(1);
        self.hidden_safe == 0
    }

    pub(crate) fn disclose_mines(&mut self) {
        self.cells
            .iter_mut()
            .filter(|cell| cell.is_mine())
            .for_each(Cell::disclose);
    }

    pub(crate) fn set_dead(&mut self, coords: Coord2) {
        if self.state.is_finished() {
            return;
        }
        self.cell_mut(coords).set_death_cause();
        self.death_cause = Some(coords);
        self.state = GridState::Dead;
    }

    pub(crate) fn set_won(&mut self) {
        if self.state.is_finished() {
            return;
        }
        self.state = GridState::Won;
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Renders the player's view, one row per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            for cell in row.iter() {
                fmt::Write::write_char(f, cell.symbol())?;
            }
        }
        Ok(())
    }
}

fn assign_adjacent_mines(cells: &mut Array2<Cell>) {
    let (rows, columns) = cells.dim();
    let size = (rows as Coord, columns as Coord);
    let counts = Array2::from_shape_fn(cells.dim(), |(row, column)| {
        surrounding((row as Coord, column as Coord), size)
            .filter(|&pos| cells[pos.to_nd_index()].is_mine())
            .count() as u8
    });

    for (cell, &count) in cells.iter_mut().zip(counts.iter()) {
        if !cell.is_mine() {
            cell.set_adjacent_mines(count);
        }
    }
}

fn count_mines(cells: &Array2<Cell>) -> usize {
    cells.iter().filter(|cell| cell.is_mine()).count()
}

/// On-disk shape of a [`Grid`]. Counters are not trusted and get recomputed from the cells.
#[derive(Deserialize)]
struct SavedGrid {
    cells: Array2<Cell>,
    state: GridState,
    death_cause: Option<Coord2>,
}

impl TryFrom<SavedGrid> for Grid {
    type Error = GameError;

    fn try_from(saved: SavedGrid) -> Result<Self> {
        let SavedGrid {
            mut cells,
            state,
            death_cause,
        } = saved;

        let (rows, columns) = cells.dim();
        if rows == 0 || columns == 0 {
            return Err(GameError::EmptyBoard);
        }
        if rows > usize::from(Coord::MAX) || columns > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }

        assign_adjacent_mines(&mut cells);

        let mine_count = count_mines(&cells);
        let safe_count = cells.len() - mine_count;
        let hidden_safe = cells
            .iter()
            .filter(|cell| !cell.is_mine() && cell.is_hidden())
            .count();
        let visible_mines = cells
            .iter()
            .filter(|cell| cell.is_mine() && cell.is_visible())
            .count();
        let death_flags = cells.iter().filter(|cell| cell.is_death_cause()).count();

        let consistent = match (state, death_cause) {
            (GridState::Dead, Some(coords)) => {
                let size = (rows as Coord, columns as Coord);
                coords.0 < size.0
                    && coords.1 < size.1
                    && cells[coords.to_nd_index()].is_mine()
                    && cells[coords.to_nd_index()].is_death_cause()
                    && death_flags == 1
                    && visible_mines == mine_count
            }
            (GridState::Won, None) => hidden_safe == 0 && visible_mines == 0 && death_flags == 0,
            (GridState::InProgress, None) => {
                (hidden_safe > 0 || safe_count == 0) && visible_mines == 0 && death_flags == 0
            }
            _ => false,
        };
        if !consistent {
            log::warn!("Rejecting saved {rows}x{columns} grid in state {state:?}");
            return Err(GameError::InconsistentState);
        }

        Ok(Self {
            cells,
            mine_count: mine_count as CellCount,
            hidden_safe: hidden_safe as CellCount,
            state,
            death_cause,
        })
    }
}
