use crate::fleet::FleetSpec;

/// Side length of the playable region.
pub const BOARD_SIZE: usize = 10;
/// Side length of the stored grid: the playable region plus a one-cell perimeter.
pub const GRID_SIZE: usize = BOARD_SIZE + 2;
/// Largest ship of the classic fleet.
pub const MAX_SHIP_SIZE: usize = 4;

/// Total number of decks in the classic fleet (4 + 3*2 + 2*3 + 1*4).
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// A match always ends within this many shots: every cell of both boards.
pub const DEFAULT_SHOT_LIMIT: usize = BOARD_SIZE * BOARD_SIZE * 2;

/// Runtime knobs for a [`Match`](crate::Match).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Fleet placed on both boards before the first shot.
    pub fleet: FleetSpec,
    /// Total shots (both sides) after which the match is abandoned.
    pub shot_limit: usize,
    /// Per-ship cap on random placement attempts; `None` retries forever.
    pub max_placement_attempts: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            fleet: FleetSpec::default(),
            shot_limit: DEFAULT_SHOT_LIMIT,
            max_placement_attempts: None,
        }
    }
}
