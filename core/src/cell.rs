use serde::{Deserialize, Serialize};

/// One position on the board.
///
/// Mine status is fixed at construction. `hidden` only ever goes from `true` to `false` and `death_cause` only from
/// `false` to `true`; the mark can be toggled freely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mine: bool,
    hidden: bool,
    marked: bool,
    death_cause: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn new(mine: bool) -> Self {
        Self {
            mine,
            hidden: true,
            marked: false,
            death_cause: false,
            adjacent_mines: 0,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub const fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub const fn is_marked(&self) -> bool {
        self.marked
    }

    pub const fn is_death_cause(&self) -> bool {
        self.death_cause
    }

    /// Mines in the surrounding cells. Always `0` for a mine.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    pub(crate) fn disclose(&mut self) {
        self.hidden = false;
    }

    /// Returns whether the mark actually changed.
    pub(crate) fn set_marked(&mut self, marked: bool) -> bool {
        let changed = self.marked != marked;
        self.marked = marked;
        changed
    }

    pub(crate) fn set_death_cause(&mut self) {
        self.death_cause = true;
    }

    /// Character shown to the player for this cell.
    pub fn symbol(&self) -> char {
        match (self.hidden, self.marked, self.mine) {
            (true, true, _) => 'F',
            (true, false, _) => '#',
            (false, _, true) if self.death_cause => 'X',
            (false, _, true) => '*',
            (false, _, false) => digit(self.adjacent_mines),
        }
    }

    /// Character for the solved layout: `M` for mines, the adjacency count otherwise.
    pub fn layout_symbol(&self) -> char {
        if self.mine {
            'M'
        } else {
            digit(self.adjacent_mines)
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(false)
    }
}

fn digit(count: u8) -> char {
    char::from_digit(count.into(), 10).unwrap_or('?')
}
