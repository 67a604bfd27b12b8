//! Common types for Sea Battle: coordinates, shot outcomes and errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

/// A cell address on the playable board, 1-indexed in both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub col: usize,
    pub row: usize,
}

impl Coordinate {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Whether the coordinate lies inside the playable `BOARD_SIZE × BOARD_SIZE` region.
    pub fn is_playable(self) -> bool {
        (1..=BOARD_SIZE).contains(&self.col) && (1..=BOARD_SIZE).contains(&self.row)
    }

    /// Shift by `(dc, dr)`, returning `None` when the result leaves the playable region.
    pub fn offset(self, dc: isize, dr: isize) -> Option<Self> {
        let col = self.col.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;
        let moved = Self { col, row };
        moved.is_playable().then_some(moved)
    }

    /// Axis-adjacent playable neighbours in left, right, up, down order.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dc, dr)| self.offset(dc, dr))
    }

    /// Every playable coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Coordinate { col, row }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.col {
            1..=26 => write!(f, "{}{}", (b'A' + (self.col - 1) as u8) as char, self.row),
            _ => write!(f, "({},{})", self.col, self.row),
        }
    }
}

/// Result of resolving one shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum HitOutcome {
    /// Nothing was there.
    Miss,
    /// A deck was hit and its ship still has intact decks.
    Wound,
    /// The last intact deck of a ship was hit.
    Dead,
    /// The cell had already been resolved; nothing changed.
    AlreadyShot,
}

impl HitOutcome {
    /// Whether the shooter keeps the turn after this outcome.
    pub fn keeps_turn(&self) -> bool {
        matches!(self, HitOutcome::Wound | HitOutcome::Dead)
    }
}

/// Errors returned when placing ships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The ship or its halo collides with the board edge or another ship.
    DoesNotFit,
    /// Random placement gave up after its attempt cap.
    UnableToPlaceShip { size: usize },
    /// Fleets go onto a fresh board only once.
    BoardNotEmpty,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::DoesNotFit => write!(f, "Ship does not fit at this position"),
            PlacementError::UnableToPlaceShip { size } => {
                write!(f, "Unable to place a {}-deck ship", size)
            }
            PlacementError::BoardNotEmpty => write!(f, "Board already holds a fleet"),
        }
    }
}

/// Errors returned by `Board::resolve_hit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitError {
    /// The shot lies outside the playable region.
    OutOfBounds(Coordinate),
    /// The hit deck does not describe a consistent ship on the grid.
    InvariantViolation(Coordinate),
}

impl fmt::Display for HitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HitError::OutOfBounds(at) => write!(f, "Shot at {} is out of bounds", at),
            HitError::InvariantViolation(at) => {
                write!(f, "Cell {} holds an inconsistent ship encoding", at)
            }
        }
    }
}

/// Errors returned by `TrackingBoard`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingError {
    OutOfBounds(Coordinate),
    /// Every cell has been resolved.
    ExhaustedSearchSpace,
}

impl From<BitBoardError> for TrackingError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { col, row } => {
                TrackingError::OutOfBounds(Coordinate::new(col, row))
            }
        }
    }
}

impl fmt::Display for TrackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingError::OutOfBounds(at) => write!(f, "Coordinate {} is out of bounds", at),
            TrackingError::ExhaustedSearchSpace => write!(f, "No unknown cells left to shoot at"),
        }
    }
}

/// Errors returned by `TargetingEngine`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetingError {
    /// Wounds are unresolved but no candidate cell remains.
    Stuck,
    Tracking(TrackingError),
}

impl From<TrackingError> for TargetingError {
    fn from(err: TrackingError) -> Self {
        TargetingError::Tracking(err)
    }
}

impl fmt::Display for TargetingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetingError::Stuck => write!(f, "Wounded ship has no candidate cells left"),
            TargetingError::Tracking(e) => write!(f, "Tracking error: {}", e),
        }
    }
}

/// Errors returned while running a `Match`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    Placement(PlacementError),
    Hit(HitError),
    Tracking(TrackingError),
    Targeting(TargetingError),
    /// A strategy fired at a cell it had already resolved.
    RepeatedShot(Coordinate),
    /// The match did not finish within the configured number of shots.
    ShotLimit { shots: usize },
    /// A shot was requested after one fleet was sunk.
    Finished,
}

impl From<PlacementError> for MatchError {
    fn from(err: PlacementError) -> Self {
        MatchError::Placement(err)
    }
}

impl From<HitError> for MatchError {
    fn from(err: HitError) -> Self {
        MatchError::Hit(err)
    }
}

impl From<TrackingError> for MatchError {
    fn from(err: TrackingError) -> Self {
        MatchError::Tracking(err)
    }
}

impl From<TargetingError> for MatchError {
    fn from(err: TargetingError) -> Self {
        MatchError::Targeting(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Placement(e) => write!(f, "Placement error: {}", e),
            MatchError::Hit(e) => write!(f, "Hit error: {}", e),
            MatchError::Tracking(e) => write!(f, "Tracking error: {}", e),
            MatchError::Targeting(e) => write!(f, "Targeting error: {}", e),
            MatchError::RepeatedShot(at) => write!(f, "Cell {} was already shot", at),
            MatchError::ShotLimit { shots } => {
                write!(f, "Match did not finish within {} shots", shots)
            }
            MatchError::Finished => write!(f, "Match is already finished"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for HitError {}
#[cfg(feature = "std")]
impl std::error::Error for TrackingError {}
#[cfg(feature = "std")]
impl std::error::Error for TargetingError {}
#[cfg(feature = "std")]
impl std::error::Error for MatchError {}
