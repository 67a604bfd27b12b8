//! Per-cell encoding of the own-fleet grid.
//!
//! A single [`CellState`] carries everything a hit needs: which ship a deck
//! belongs to, how long that ship is, where along the hull the deck sits and
//! which way the hull runs. From one deck the whole hull can be recovered with
//! [`Deck::hull`], so no side table of ships is kept.

use crate::common::Coordinate;
use crate::ship::{Orientation, ShipPlacement};

/// Identity of one ship deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    pub ship_id: usize,
    pub size: usize,
    /// Position along the hull, `1..=size` from the ship's origin.
    pub deck_index: usize,
    pub orientation: Orientation,
}

impl Deck {
    pub const fn new(ship_id: usize, size: usize, deck_index: usize, orientation: Orientation) -> Self {
        Self {
            ship_id,
            size,
            deck_index,
            orientation,
        }
    }

    /// Encode the deck as an intact or damaged cell.
    pub const fn encode(self, damaged: bool) -> CellState {
        if damaged {
            CellState::Damaged(self)
        } else {
            CellState::Ship(self)
        }
    }

    /// Whether `deck_index` lies in `1..=size`.
    pub fn is_well_formed(&self) -> bool {
        self.size > 0 && (1..=self.size).contains(&self.deck_index)
    }

    /// Footprint of the ship this deck belongs to, given where the deck sits.
    ///
    /// Returns `None` if the deck is malformed or the hull would leave the board.
    pub fn hull(self, at: Coordinate) -> Option<ShipPlacement> {
        if !self.is_well_formed() {
            return None;
        }
        let back = self.deck_index - 1;
        let origin = match self.orientation {
            Orientation::Horizontal => Coordinate::new(at.col.checked_sub(back)?, at.row),
            Orientation::Vertical => Coordinate::new(at.col, at.row.checked_sub(back)?),
        };
        let hull = ShipPlacement::new(origin, self.size, self.orientation);
        hull.in_bounds().then_some(hull)
    }
}

/// State of one grid cell on a player's own board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    /// Free water next to a ship; no other deck may go here.
    Halo,
    Ship(Deck),
    Damaged(Deck),
    /// Deck of a ship whose every deck has been hit.
    Sunk,
    /// Fired at and empty, or the halo of a sunk ship.
    MissMarker,
}

impl CellState {
    /// Identity of the deck in this cell, if it holds a live or damaged deck.
    pub fn deck(&self) -> Option<Deck> {
        match *self {
            CellState::Ship(deck) | CellState::Damaged(deck) => Some(deck),
            _ => None,
        }
    }

    pub fn is_intact_deck(&self) -> bool {
        matches!(self, CellState::Ship(_))
    }

    pub fn is_damaged_deck(&self) -> bool {
        matches!(self, CellState::Damaged(_))
    }

    /// Character used when rendering the cell.
    pub fn glyph(&self) -> char {
        match self {
            CellState::Empty | CellState::Halo => ' ',
            CellState::Ship(deck) if deck.is_well_formed() => 'Q',
            CellState::Damaged(deck) if deck.is_well_formed() => 'X',
            CellState::MissMarker => '.',
            CellState::Sunk => '+',
            CellState::Ship(_) | CellState::Damaged(_) => '?',
        }
    }
}
