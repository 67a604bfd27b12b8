//! A player's own board: the encoded grid plus the set of live decks.

use alloc::string::{String, ToString};
use core::fmt;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::cell::{CellState, Deck};
use crate::common::{Coordinate, HitError, HitOutcome, PlacementError};
use crate::config::{BOARD_SIZE, GRID_SIZE};
use crate::ship::{Orientation, ShipPlacement};

/// Set of playable coordinates.
pub type CellSet = BitBoard<u128, { BOARD_SIZE }>;

/// Own-fleet board. The grid has a one-cell perimeter around the playable
/// region so halo stamping and neighbour reads never go out of range.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[CellState; GRID_SIZE]; GRID_SIZE],
    alive_decks: CellSet,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            grid: [[CellState::Empty; GRID_SIZE]; GRID_SIZE],
            alive_decks: CellSet::new(),
        }
    }

    /// True until the first ship is placed or shot is fired.
    pub fn is_blank(&self) -> bool {
        self.grid.iter().flatten().all(|cell| *cell == CellState::Empty)
    }

    #[inline]
    fn get(&self, at: Coordinate) -> CellState {
        self.grid[at.row][at.col]
    }

    #[inline]
    fn set(&mut self, at: Coordinate, state: CellState) {
        self.grid[at.row][at.col] = state;
    }

    /// State of a playable cell.
    pub fn cell(&self, at: Coordinate) -> Option<CellState> {
        at.is_playable().then(|| self.get(at))
    }

    /// Coordinates of every intact deck.
    pub fn alive_decks(&self) -> &CellSet {
        &self.alive_decks
    }

    pub fn alive_count(&self) -> usize {
        self.alive_decks.len()
    }

    /// Returns `true` once every deck has been hit.
    pub fn all_sunk(&self) -> bool {
        self.alive_decks.is_empty()
    }

    /// Uniformly chosen intact deck, or `None` when the fleet is gone.
    pub fn random_alive_deck<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coordinate> {
        if self.alive_decks.is_empty() {
            return None;
        }
        self.alive_decks.nth(rng.random_range(0..self.alive_decks.len()))
    }

    /// Whether a `size`-deck ship with its first deck at (`col`, `row`) can go here.
    ///
    /// Every deck must land on empty water and the surrounding box may only
    /// touch empty water or another ship's halo.
    pub fn is_fit(&self, col: usize, row: usize, size: usize, orientation: Orientation) -> bool {
        let hull = ShipPlacement::new(Coordinate::new(col, row), size, orientation);
        if !hull.in_bounds() {
            return false;
        }
        hull.cells().all(|at| self.get(at) == CellState::Empty)
            && hull
                .expanded()
                .all(|at| matches!(self.get(at), CellState::Empty | CellState::Halo))
    }

    /// Place a ship with its first deck at (`col`, `row`).
    ///
    /// The halo is stamped first and the decks drawn over it. Nothing is
    /// written when the ship does not fit.
    pub fn place(
        &mut self,
        col: usize,
        row: usize,
        size: usize,
        orientation: Orientation,
        ship_id: usize,
    ) -> Result<(), PlacementError> {
        if !self.is_fit(col, row, size, orientation) {
            return Err(PlacementError::DoesNotFit);
        }
        let hull = ShipPlacement::new(Coordinate::new(col, row), size, orientation);
        for at in hull.expanded() {
            self.set(at, CellState::Halo);
        }
        for (deck_index, at) in hull.decks() {
            self.set(at, Deck::new(ship_id, size, deck_index, orientation).encode(false));
            self.alive_decks
                .insert(at)
                .map_err(|_| PlacementError::DoesNotFit)?;
        }
        log::trace!("placed ship {} ({} decks, {:?}) at {}", ship_id, size, orientation, hull.origin());
        Ok(())
    }

    /// Resolve a shot at (`col`, `row`).
    pub fn resolve_hit(&mut self, col: usize, row: usize) -> Result<HitOutcome, HitError> {
        let at = Coordinate::new(col, row);
        if !at.is_playable() {
            return Err(HitError::OutOfBounds(at));
        }
        match self.get(at) {
            CellState::Empty | CellState::Halo => {
                self.set(at, CellState::MissMarker);
                Ok(HitOutcome::Miss)
            }
            CellState::MissMarker | CellState::Sunk | CellState::Damaged(_) => {
                Ok(HitOutcome::AlreadyShot)
            }
            CellState::Ship(deck) => self.strike(at, deck),
        }
    }

    fn strike(&mut self, at: Coordinate, deck: Deck) -> Result<HitOutcome, HitError> {
        let hull = deck.hull(at).ok_or(HitError::InvariantViolation(at))?;

        // Every hull cell must decode to the matching deck of the same ship.
        let mut intact_elsewhere = false;
        for (deck_index, cell) in hull.decks() {
            let state = self.get(cell);
            match state.deck() {
                Some(d) if d == Deck { deck_index, ..deck } => {
                    intact_elsewhere |= cell != at && state.is_intact_deck();
                }
                _ => return Err(HitError::InvariantViolation(at)),
            }
        }

        self.set(at, deck.encode(true));
        self.alive_decks
            .remove(at)
            .map_err(|_| HitError::OutOfBounds(at))?;
        if intact_elsewhere {
            return Ok(HitOutcome::Wound);
        }

        for cell in hull.expanded() {
            self.set(cell, CellState::MissMarker);
        }
        for cell in hull.cells() {
            self.set(cell, CellState::Sunk);
        }
        log::trace!("ship {} sunk at {}", deck.ship_id, hull.origin());
        Ok(HitOutcome::Dead)
    }

    /// Text rendering of the whole board, ships revealed.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the column header, a rule and one line per row using `glyph`.
pub(crate) fn write_grid<F>(f: &mut fmt::Formatter<'_>, glyph: F) -> fmt::Result
where
    F: Fn(Coordinate) -> char,
{
    write!(f, "   ")?;
    for col in 1..=BOARD_SIZE {
        write!(f, "{}", (b'A' + (col - 1) as u8) as char)?;
    }
    writeln!(f)?;
    write!(f, "   ")?;
    for _ in 1..=BOARD_SIZE {
        write!(f, "-")?;
    }
    writeln!(f)?;
    for row in 1..=BOARD_SIZE {
        write!(f, "{:>2}|", row)?;
        for col in 1..=BOARD_SIZE {
            write!(f, "{}", glyph(Coordinate::new(col, row)))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, |at| self.get(at).glyph())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ alive_decks: {} }}", self.alive_decks.len())?;
        write_grid(f, |at| self.get(at).glyph())
    }
}
