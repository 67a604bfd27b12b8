//! Hunt/target shooting heuristic.
//!
//! While no ship is wounded the engine hunts: it fires at a uniformly random
//! unknown cell. The first wound queues the four axis neighbours of the hit;
//! from the second wound on the ship's axis is known, so only the two cells
//! just past either end of the wounded run stay queued. A kill resets the
//! engine to hunting.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::{Coordinate, HitOutcome, TargetingError};
use crate::tracking::TrackingBoard;

/// Mode of the engine, derived from the number of queued candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingState {
    /// No candidates; search at random.
    Hunting,
    /// Several candidates; the wounded ship's axis is not pinned down yet.
    Correcting,
    /// A single candidate left.
    Finishing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetingEngine {
    target_queue: Vec<Coordinate>,
    wound_history: Vec<Coordinate>,
}

impl TargetingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TargetingState {
        match self.target_queue.len() {
            0 => TargetingState::Hunting,
            1 => TargetingState::Finishing,
            _ => TargetingState::Correcting,
        }
    }

    pub fn target_queue(&self) -> &[Coordinate] {
        &self.target_queue
    }

    pub fn wound_history(&self) -> &[Coordinate] {
        &self.wound_history
    }

    /// A ship is wounded but no candidate cell is left to try.
    pub fn is_stuck(&self) -> bool {
        self.target_queue.is_empty() && !self.wound_history.is_empty()
    }

    /// Pick the next cell to fire at.
    pub fn next_shot<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        tracking: &TrackingBoard,
    ) -> Result<Coordinate, TargetingError> {
        if self.is_stuck() {
            return Err(TargetingError::Stuck);
        }
        match self.state() {
            TargetingState::Hunting => Ok(tracking.random_unknown_cell(rng)?),
            TargetingState::Finishing => Ok(self.target_queue[0]),
            TargetingState::Correcting => {
                let pick = rng.random_range(0..self.target_queue.len());
                Ok(self.target_queue[pick])
            }
        }
    }

    /// Feed back the outcome of a shot at `at`. `tracking` must already
    /// reflect that outcome.
    pub fn record(&mut self, at: Coordinate, outcome: HitOutcome, tracking: &TrackingBoard) {
        match outcome {
            HitOutcome::Miss => self.on_miss(at),
            HitOutcome::Wound => self.on_wound(at, tracking),
            HitOutcome::Dead => self.on_dead(),
            HitOutcome::AlreadyShot => {}
        }
    }

    /// A deck was hit but its ship survived.
    pub fn on_wound(&mut self, hit: Coordinate, tracking: &TrackingBoard) {
        self.wound_history.push(hit);
        self.target_queue.clear();

        if self.wound_history.len() == 1 {
            self.target_queue
                .extend(hit.neighbours().filter(|c| tracking.is_unknown(*c)));
            return;
        }

        let first = self.wound_history[0];
        let vertical = self.wound_history.iter().all(|w| w.col == first.col);
        let (before, after) = if vertical {
            let min = self.wound_history.iter().map(|w| w.row).min().unwrap_or(first.row);
            let max = self.wound_history.iter().map(|w| w.row).max().unwrap_or(first.row);
            (
                Coordinate::new(first.col, min).offset(0, -1),
                Coordinate::new(first.col, max).offset(0, 1),
            )
        } else {
            let min = self.wound_history.iter().map(|w| w.col).min().unwrap_or(first.col);
            let max = self.wound_history.iter().map(|w| w.col).max().unwrap_or(first.col);
            (
                Coordinate::new(min, first.row).offset(-1, 0),
                Coordinate::new(max, first.row).offset(1, 0),
            )
        };
        self.target_queue.extend(
            [before, after]
                .into_iter()
                .flatten()
                .filter(|c| tracking.is_unknown(*c)),
        );
    }

    /// A miss prunes the candidate while targeting; while hunting it changes nothing.
    pub fn on_miss(&mut self, point: Coordinate) {
        self.target_queue.retain(|c| *c != point);
    }

    /// The wounded ship went down.
    pub fn on_dead(&mut self) {
        self.target_queue.clear();
        self.wound_history.clear();
    }
}
