//! Random placement of a whole fleet onto an empty board.

use rand::Rng;

use crate::board::Board;
use crate::common::PlacementError;
use crate::config::{BOARD_SIZE, MAX_SHIP_SIZE};
use crate::ship::Orientation;

/// Classic fleet shape: `max_size - size + 1` ships of every size `1..=max_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetSpec {
    max_size: usize,
}

impl FleetSpec {
    /// One `max_size`-deck ship, two of the next size down, and so on.
    pub const fn classic(max_size: usize) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// `(size, count)` pairs, largest ships first.
    pub fn ships(&self) -> impl Iterator<Item = (usize, usize)> {
        let max = self.max_size;
        (1..=max).rev().map(move |size| (size, max - size + 1))
    }

    pub fn ship_count(&self) -> usize {
        self.ships().map(|(_, count)| count).sum()
    }

    pub fn total_decks(&self) -> usize {
        self.ships().map(|(size, count)| size * count).sum()
    }
}

impl Default for FleetSpec {
    fn default() -> Self {
        Self::classic(MAX_SHIP_SIZE)
    }
}

/// Drops ships at uniformly random spots until the whole fleet is on the board.
#[derive(Debug, Clone)]
pub struct FleetPlacer {
    spec: FleetSpec,
    max_attempts: Option<usize>,
}

impl FleetPlacer {
    /// A placer that resamples forever. Some fleet/board combinations can
    /// never be completed; use [`FleetPlacer::with_max_attempts`] for those.
    pub fn new(spec: FleetSpec) -> Self {
        Self {
            spec,
            max_attempts: None,
        }
    }

    /// Give up on a ship after `attempts` rejected samples.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn spec(&self) -> &FleetSpec {
        &self.spec
    }

    /// Place every ship of the fleet, assigning ship ids from 0 upward.
    /// Returns the number of ships placed.
    pub fn place<R: Rng + ?Sized>(&self, rng: &mut R, board: &mut Board) -> Result<usize, PlacementError> {
        if !board.is_blank() {
            return Err(PlacementError::BoardNotEmpty);
        }
        let mut ship_id = 0;
        for (size, count) in self.spec.ships() {
            for _ in 0..count {
                let attempts = self.place_ship(rng, board, size, ship_id)?;
                log::trace!("{}-deck ship {} placed after {} attempts", size, ship_id, attempts);
                ship_id += 1;
            }
        }
        log::debug!(
            "fleet of {} ships ({} decks) placed",
            ship_id,
            board.alive_count()
        );
        Ok(ship_id)
    }

    fn place_ship<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &mut Board,
        size: usize,
        ship_id: usize,
    ) -> Result<usize, PlacementError> {
        // Nothing longer than a row ever fits, however long we resample.
        if size > BOARD_SIZE {
            return Err(PlacementError::UnableToPlaceShip { size });
        }
        let mut attempts = 0;
        loop {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(PlacementError::UnableToPlaceShip { size });
            }
            attempts += 1;
            let col = rng.random_range(1..=BOARD_SIZE);
            let row = rng.random_range(1..=BOARD_SIZE);
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match board.place(col, row, size, orientation, ship_id) {
                Ok(()) => return Ok(attempts),
                Err(PlacementError::DoesNotFit) => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for FleetPlacer {
    fn default() -> Self {
        Self::new(FleetSpec::default())
    }
}
