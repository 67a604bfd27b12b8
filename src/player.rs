//! Shooting strategies.

use rand::rngs::SmallRng;

use crate::common::{Coordinate, HitOutcome, TargetingError};
use crate::targeting::{TargetingEngine, TargetingState};
use crate::tracking::TrackingBoard;

/// Interface implemented by different player types.
pub trait Player {
    /// Short label used in logs and summaries.
    fn kind(&self) -> &'static str;

    /// Choose the next cell to fire at given what is known of the opponent.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        tracking: &TrackingBoard,
    ) -> Result<Coordinate, TargetingError>;

    /// Inform the player of the result of its last shot. `tracking` already
    /// includes the result.
    fn handle_guess_result(&mut self, _at: Coordinate, _outcome: HitOutcome, _tracking: &TrackingBoard) {}
}

/// Hunt/target player backed by a [`TargetingEngine`].
#[derive(Debug, Default)]
pub struct AiPlayer {
    engine: TargetingEngine,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(&self) -> &TargetingEngine {
        &self.engine
    }

    pub fn state(&self) -> TargetingState {
        self.engine.state()
    }
}

impl Player for AiPlayer {
    fn kind(&self) -> &'static str {
        "ai"
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        tracking: &TrackingBoard,
    ) -> Result<Coordinate, TargetingError> {
        self.engine.next_shot(rng, tracking)
    }

    fn handle_guess_result(&mut self, at: Coordinate, outcome: HitOutcome, tracking: &TrackingBoard) {
        self.engine.record(at, outcome, tracking);
    }
}

/// Baseline player that never follows up on a wound.
#[derive(Debug, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn kind(&self) -> &'static str {
        "random"
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        tracking: &TrackingBoard,
    ) -> Result<Coordinate, TargetingError> {
        Ok(tracking.random_unknown_cell(rng)?)
    }
}
