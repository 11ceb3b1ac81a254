use alloc::vec;
use core::ops::BitOr;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

/// Gameplay operations. The grid is the only state; every call mutates it in place.
///
/// A grid is meant to be driven by one caller at a time; wrap it in a lock to share it.
impl Grid {
    /// Discloses the cell at `coords`.
    ///
    /// Visible or marked cells are left alone. A mine ends the game and discloses every mine. A safe cell with no
    /// adjacent mines opens its neighbours, and so on outward, until the zero region and its numbered border are
    /// visible.
    ///
    /// Once the game is over every reveal is a no-op, including on hidden safe cells. This is stricter than the
    /// classic rules, where those stay revealable after a loss and the caller is expected to stop; refusing them
    /// keeps a lost game from also being won.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        if self.is_game_over() {
            log::debug!("Ignoring reveal at {coords:?}, game already ended");
            return Ok(RevealOutcome::NoChange);
        }

        let mut outcome = RevealOutcome::NoChange;
        let mut disclosed: usize = 0;
        let mut to_visit = vec![coords];

        while let Some(visit_coords) = to_visit.pop() {
            let cell = self[visit_coords];
            if cell.is_visible() || cell.is_marked() {
                continue;
            }

            if cell.is_mine() {
                self.set_dead(visit_coords);
                self.disclose_mines();
                log::debug!("Mine hit at {visit_coords:?}");
                return Ok(RevealOutcome::HitMine);
            }

            disclosed += 1;
            outcome = outcome | RevealOutcome::Revealed;
            if self.disclose_safe(visit_coords) {
                self.set_won();
                log::debug!("Last safe cell disclosed at {visit_coords:?}");
                return Ok(RevealOutcome::Won);
            }

            if cell.adjacent_mines() == 0 {
                to_visit.extend(
                    self.neighbors(visit_coords)
                        .filter(|&pos| self[pos].is_hidden()),
                );
            }
        }

        if disclosed > 1 {
            log::trace!("Reveal at {coords:?} cascaded over {disclosed} cells");
        }
        Ok(outcome)
    }

    /// Flags the cell at `coords` as a suspected mine. Marked cells cannot be revealed.
    pub fn mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.set_mark(coords, true)
    }

    pub fn unmark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.set_mark(coords, false)
    }

    pub fn toggle_mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        let marked = self[coords].is_marked();
        self.set_mark(coords, !marked)
    }

    // no visibility check: marking a disclosed cell is harmless and allowed
    fn set_mark(&mut self, coords: Coord2, marked: bool) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        Ok(if self.cell_mut(coords).set_marked(marked) {
            MarkOutcome::Changed
        } else {
            MarkOutcome::NoChange
        })
    }
}
