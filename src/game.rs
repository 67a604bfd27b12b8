use alloc::boxed::Box;
use alloc::string::String;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coordinate, HitOutcome, MatchError},
    config::MatchConfig,
    fleet::FleetPlacer,
    player::Player,
    tracking::TrackingBoard,
};

/// Which side is to shoot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    First,
    Second,
}

impl Turn {
    pub fn other(self) -> Self {
        match self {
            Turn::First => Turn::Second,
            Turn::Second => Turn::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Turn::First => 0,
            Turn::Second => 1,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Won(Turn),
}

/// One player's private state: own board, knowledge of the opponent,
/// shooting strategy and random source.
pub struct Side {
    name: String,
    board: Board,
    tracking: TrackingBoard,
    player: Box<dyn Player>,
    rng: SmallRng,
    shots: usize,
    hits: usize,
}

impl Side {
    /// A side with an empty board; [`Match::new`] places its fleet.
    pub fn new(name: impl Into<String>, player: Box<dyn Player>, rng: SmallRng) -> Self {
        Self::with_board(name, player, rng, Board::new())
    }

    /// A side whose fleet is already on `board`. Start such sides with
    /// [`Match::from_sides`]; [`Match::new`] rejects boards that are not blank.
    pub fn with_board(name: impl Into<String>, player: Box<dyn Player>, rng: SmallRng, board: Board) -> Self {
        Self {
            name: name.into(),
            board,
            tracking: TrackingBoard::new(),
            player,
            rng,
            shots: 0,
            hits: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tracking(&self) -> &TrackingBoard {
        &self.tracking
    }

    pub fn player(&self) -> &dyn Player {
        self.player.as_ref()
    }

    /// Shots fired by this side.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Shots that wounded or sank something.
    pub fn hits(&self) -> usize {
        self.hits
    }

    fn summary(&self) -> SideSummary {
        SideSummary {
            name: self.name.clone(),
            kind: self.player.kind().into(),
            shots: self.shots,
            hits: self.hits,
            decks_left: self.board.alive_count(),
        }
    }
}

/// A single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub shooter: Turn,
    pub at: Coordinate,
    pub outcome: HitOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SideSummary {
    pub name: String,
    pub kind: String,
    pub shots: usize,
    pub hits: usize,
    pub decks_left: usize,
}

/// Outcome of a finished (or abandoned) match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: Option<String>,
    pub total_shots: usize,
    pub sides: [SideSummary; 2],
}

/// Two sides taking turns until one fleet is gone.
pub struct Match {
    sides: [Side; 2],
    active: Turn,
    winner: Option<Turn>,
    shots: usize,
    shot_limit: usize,
}

impl Match {
    /// Place the configured fleet on both boards and get ready for the first shot.
    /// Both boards must be blank.
    pub fn new(mut first: Side, mut second: Side, config: &MatchConfig) -> Result<Self, MatchError> {
        let mut placer = FleetPlacer::new(config.fleet);
        if let Some(attempts) = config.max_placement_attempts {
            placer = placer.with_max_attempts(attempts);
        }
        for side in [&mut first, &mut second] {
            placer.place(&mut side.rng, &mut side.board)?;
            log::debug!("{}: fleet ready\n{}", side.name, side.board);
        }
        Ok(Self::from_sides(first, second, config.shot_limit))
    }

    /// Start a match between sides whose fleets are already placed.
    pub fn from_sides(first: Side, second: Side, shot_limit: usize) -> Self {
        Self {
            sides: [first, second],
            active: Turn::First,
            winner: None,
            shots: 0,
            shot_limit,
        }
    }

    pub fn side(&self, turn: Turn) -> &Side {
        &self.sides[turn.index()]
    }

    pub fn sides(&self) -> &[Side; 2] {
        &self.sides
    }

    /// Side to shoot next.
    pub fn active(&self) -> Turn {
        self.active
    }

    /// Total shots fired by both sides.
    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn winner(&self) -> Option<Turn> {
        self.winner
    }

    pub fn status(&self) -> MatchStatus {
        match self.winner {
            Some(turn) => MatchStatus::Won(turn),
            None => MatchStatus::InProgress,
        }
    }

    fn pair_mut(&mut self, shooter: Turn) -> (&mut Side, &mut Side) {
        let [first, second] = &mut self.sides;
        match shooter {
            Turn::First => (first, second),
            Turn::Second => (second, first),
        }
    }

    /// Fire one shot for the active side.
    ///
    /// The target is chosen, resolved on the opponent's board and only then
    /// mirrored onto the shooter's tracking board. The shooter keeps the turn
    /// after a wound or a kill.
    pub fn step(&mut self) -> Result<ShotRecord, MatchError> {
        if self.winner.is_some() {
            return Err(MatchError::Finished);
        }
        if self.shots >= self.shot_limit {
            return Err(MatchError::ShotLimit { shots: self.shots });
        }
        let turn = self.active;
        let (at, outcome, fleet_gone) = {
            let (shooter, target) = self.pair_mut(turn);
            let at = shooter.player.select_target(&mut shooter.rng, &shooter.tracking)?;
            let outcome = target.board.resolve_hit(at.col, at.row)?;
            if outcome == HitOutcome::AlreadyShot {
                return Err(MatchError::RepeatedShot(at));
            }
            shooter.tracking.mark_result(at.col, at.row, outcome)?;
            shooter.player.handle_guess_result(at, outcome, &shooter.tracking);
            shooter.shots += 1;
            if outcome.keeps_turn() {
                shooter.hits += 1;
            }
            log::debug!("{} fires at {}: {:?}", shooter.name, at, outcome);
            (at, outcome, target.board.all_sunk())
        };
        self.shots += 1;

        if fleet_gone {
            self.winner = Some(turn);
            log::info!(
                "{} wins after {} shots",
                self.side(turn).name,
                self.shots
            );
        } else if !outcome.keeps_turn() {
            self.active = turn.other();
        }
        Ok(ShotRecord {
            shooter: turn,
            at,
            outcome,
        })
    }

    /// Step until one fleet is sunk.
    pub fn run(&mut self) -> Result<MatchSummary, MatchError> {
        while self.winner.is_none() {
            self.step()?;
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            winner: self.winner.map(|turn| self.side(turn).name.clone()),
            total_shots: self.shots,
            sides: [self.sides[0].summary(), self.sides[1].summary()],
        }
    }
}
