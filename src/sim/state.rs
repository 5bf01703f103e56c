//! Run state and core gameplay types
//!
//! A `RunState` is created fresh for every run and dropped on restart or
//! menu return. Nothing in it outlives the run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::timer::RepeatingTimer;
use super::world::EntityId;
use crate::tuning::Tuning;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Constructed, not yet initialized
    Ready,
    /// Obstacles spawn, score accrues, collisions end the run
    Active,
    /// Terminal: only restart/share/menu remain
    Over,
}

/// Bookkeeping for a spawned obstacle (the body itself lives on the stage)
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: EntityId,
    /// Leftward speed fixed at spawn time
    pub speed: f32,
    /// Set once the obstacle passed the player and paid out
    pub scored: bool,
}

/// Transient state of a single run
#[derive(Debug, Clone)]
pub struct RunState {
    /// Seed the spawn RNG started from
    pub seed: u64,
    rng: Pcg32,
    pub score: u64,
    pub phase: RunPhase,
    pub muted: bool,
    pub player: Option<EntityId>,
    /// Spawned obstacles still on stage (sorted by id)
    pub obstacles: Vec<Obstacle>,
    pub spawn_timer: RepeatingTimer,
}

impl RunState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            phase: RunPhase::Ready,
            muted: false,
            player: None,
            obstacles: Vec::new(),
            spawn_timer: RepeatingTimer::disarmed(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == RunPhase::Over
    }

    pub fn is_active(&self) -> bool {
        self.phase == RunPhase::Active
    }

    /// Uniform spawn height inside the inclusive tuning band
    pub fn roll_spawn_y(&mut self, tuning: &Tuning) -> f32 {
        self.rng
            .random_range(tuning.spawn_y_min..=tuning.spawn_y_max) as f32
    }

    /// Seed for the run that replaces this one
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}
