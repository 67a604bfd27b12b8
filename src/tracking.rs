//! What one player knows about the opponent's board.

use core::fmt;
use rand::Rng;

use crate::board::{write_grid, CellSet};
use crate::common::{Coordinate, HitOutcome, TrackingError};
use crate::config::{BOARD_SIZE, GRID_SIZE};
use crate::ship::{Orientation, ShipPlacement};

/// Knowledge about a single opponent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Knowledge {
    #[default]
    Unknown,
    /// Empty water, either shot at or next to a sunk ship.
    Miss,
    /// A deck of a ship that is still afloat.
    Hit,
    /// A deck of a sunk ship.
    Sunk,
}

impl Knowledge {
    pub fn glyph(&self) -> char {
        match self {
            Knowledge::Unknown => ' ',
            Knowledge::Miss => '.',
            Knowledge::Hit => 'X',
            Knowledge::Sunk => '+',
        }
    }
}

/// Opponent-facing board, updated only from shot outcomes.
#[derive(Clone, PartialEq, Eq)]
pub struct TrackingBoard {
    cells: [[Knowledge; GRID_SIZE]; GRID_SIZE],
    unknown: CellSet,
}

impl TrackingBoard {
    /// A board on which nothing is known yet.
    pub fn new() -> Self {
        Self {
            cells: [[Knowledge::Unknown; GRID_SIZE]; GRID_SIZE],
            unknown: CellSet::full(),
        }
    }

    /// Knowledge about a playable cell.
    pub fn knowledge(&self, at: Coordinate) -> Option<Knowledge> {
        at.is_playable().then(|| self.cells[at.row][at.col])
    }

    /// True iff `at` is playable and has never been resolved.
    pub fn is_unknown(&self, at: Coordinate) -> bool {
        self.unknown.contains(at)
    }

    pub fn unknown_cells(&self) -> &CellSet {
        &self.unknown
    }

    pub fn unknown_count(&self) -> usize {
        self.unknown.len()
    }

    fn learn(&mut self, at: Coordinate, knowledge: Knowledge) -> Result<(), TrackingError> {
        self.unknown.remove(at)?;
        self.cells[at.row][at.col] = knowledge;
        Ok(())
    }

    /// Record the outcome of our shot at (`col`, `row`).
    ///
    /// A kill also resolves the sunk ship's halo, since no other ship can touch it.
    pub fn mark_result(&mut self, col: usize, row: usize, outcome: HitOutcome) -> Result<(), TrackingError> {
        let at = Coordinate::new(col, row);
        if !at.is_playable() {
            return Err(TrackingError::OutOfBounds(at));
        }
        match outcome {
            HitOutcome::Miss => self.learn(at, Knowledge::Miss),
            HitOutcome::Wound => self.learn(at, Knowledge::Hit),
            HitOutcome::Dead => {
                self.learn(at, Knowledge::Hit)?;
                let hull = self.wreck_through(at);
                for cell in hull.cells() {
                    self.cells[cell.row][cell.col] = Knowledge::Sunk;
                }
                for cell in hull.halo() {
                    if self.unknown.remove(cell)? {
                        self.cells[cell.row][cell.col] = Knowledge::Miss;
                    }
                }
                Ok(())
            }
            HitOutcome::AlreadyShot => Ok(()),
        }
    }

    /// The run of hit cells through `at`: the ship that was just sunk.
    fn wreck_through(&self, at: Coordinate) -> ShipPlacement {
        let is_hit = |c: Option<Coordinate>| {
            c.and_then(|c| self.knowledge(c)) == Some(Knowledge::Hit)
        };
        let orientation = if is_hit(at.offset(0, -1)) || is_hit(at.offset(0, 1)) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let (dc, dr) = match orientation {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        };
        let mut origin = at;
        while let Some(prev) = origin.offset(-dc, -dr).filter(|c| is_hit(Some(*c))) {
            origin = prev;
        }
        let mut size = 1;
        let mut cursor = origin;
        while let Some(next) = cursor.offset(dc, dr).filter(|c| is_hit(Some(*c))) {
            cursor = next;
            size += 1;
        }
        ShipPlacement::new(origin, size, orientation)
    }

    /// Uniformly chosen unresolved cell.
    pub fn random_unknown_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coordinate, TrackingError> {
        let count = self.unknown.len();
        if count == 0 {
            return Err(TrackingError::ExhaustedSearchSpace);
        }
        self.unknown
            .nth(rng.random_range(0..count))
            .ok_or(TrackingError::ExhaustedSearchSpace)
    }

    /// Cells resolved so far.
    pub fn resolved_count(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.unknown.len()
    }
}

impl Default for TrackingBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TrackingBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, |at| self.cells[at.row][at.col].glyph())
    }
}

impl fmt::Debug for TrackingBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TrackingBoard {{ unknown: {} }}", self.unknown.len())?;
        write_grid(f, |at| self.cells[at.row][at.col].glyph())
    }
}
