//! Deterministic run simulation
//!
//! Gameplay logic for a single run plus the arcade stage it plays on:
//! - Fixed physics substeps only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod timer;
pub mod world;

pub use collision::Aabb;
pub use state::{Obstacle, RunPhase, RunState};
pub use tick::{TickReport, advance_spawn_timer, end_run, flap, spawn_obstacle, start_run, tick};
pub use timer::RepeatingTimer;
pub use world::{ArcadeWorld, BodyKind, EntityId, Sprite, Stage};
