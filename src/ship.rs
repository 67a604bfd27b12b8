//! Ship geometry: orientation, hull cells and the halo around them.

use crate::common::Coordinate;
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Decks run left to right along a row.
    Horizontal,
    /// Decks run top to bottom along a column.
    Vertical,
}

impl Orientation {
    /// Column and row step from one deck to the next.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Footprint of a ship: its first deck, length and orientation.
///
/// Coordinates are not validated on construction; use [`ShipPlacement::in_bounds`]
/// before touching a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacement {
    origin: Coordinate,
    size: usize,
    orientation: Orientation,
}

impl ShipPlacement {
    pub fn new(origin: Coordinate, size: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            size,
            orientation,
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Last deck of the hull. Saturates for sizes that run off any grid.
    pub fn end(&self) -> Coordinate {
        let (dc, dr) = self.orientation.step();
        let len = self.size.saturating_sub(1);
        Coordinate::new(
            self.origin.col.saturating_add(dc * len),
            self.origin.row.saturating_add(dr * len),
        )
    }

    /// True iff the ship has at least one deck and every deck is playable.
    pub fn in_bounds(&self) -> bool {
        (1..=BOARD_SIZE).contains(&self.size) && self.origin.is_playable() && self.end().is_playable()
    }

    /// Hull cells paired with their 1-based deck index, in placement order.
    pub fn decks(&self) -> impl Iterator<Item = (usize, Coordinate)> {
        let (dc, dr) = self.orientation.step();
        let origin = self.origin;
        (0..self.size).map(move |i| (i + 1, Coordinate::new(origin.col + dc * i, origin.row + dr * i)))
    }

    /// Hull cells in placement order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        self.decks().map(|(_, at)| at)
    }

    /// The hull expanded by one cell in every direction, hull included.
    ///
    /// For an in-bounds ship this may touch the grid perimeter (column or row
    /// `0` and `BOARD_SIZE + 1`) but never beyond it.
    pub fn expanded(&self) -> impl Iterator<Item = Coordinate> {
        let end = self.end();
        let (min_col, min_row) = (self.origin.col.saturating_sub(1), self.origin.row.saturating_sub(1));
        let (max_col, max_row) = (end.col.saturating_add(1), end.row.saturating_add(1));
        (min_row..=max_row).flat_map(move |row| (min_col..=max_col).map(move |col| Coordinate::new(col, row)))
    }

    /// Playable cells around the hull, hull excluded.
    pub fn halo(&self) -> impl Iterator<Item = Coordinate> {
        let hull = *self;
        self.expanded()
            .filter(move |at| at.is_playable() && !hull.contains(*at))
    }

    /// Whether `at` is one of the hull cells.
    pub fn contains(&self, at: Coordinate) -> bool {
        let end = self.end();
        self.size > 0
            && (self.origin.col..=end.col).contains(&at.col)
            && (self.origin.row..=end.row).contains(&at.row)
    }
}
