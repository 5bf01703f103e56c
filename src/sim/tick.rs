//! Per-frame run logic
//!
//! Pure functions over a `RunState` and the stage. Display, audio and
//! high-score side effects belong to the run controller.

use glam::Vec2;

use super::state::{Obstacle, RunPhase, RunState};
use super::timer::RepeatingTimer;
use super::world::{BodyKind, EntityId, Stage};
use crate::consts::HIT_TINT;
use crate::platform::KeyState;
use crate::tuning::Tuning;

/// What a tick changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Points awarded this tick
    pub points: u64,
    pub flapped: bool,
}

/// Reset the stage for a new run and arm the spawn timer
pub fn start_run(state: &mut RunState, stage: &mut dyn Stage, tuning: &Tuning) {
    stage.clear();
    stage.resume();

    let (x, y) = tuning.player_start;
    let player = stage.spawn(BodyKind::Player, Vec2::new(x, y), tuning.player_scale);
    stage.set_tint(player, None);
    stage.set_allow_gravity(player, true);

    state.player = Some(player);
    state.score = 0;
    state.obstacles.clear();
    state.spawn_timer = RepeatingTimer::new(tuning.spawn_interval_ms);
    state.phase = RunPhase::Active;
}

/// Advance one rendered frame: scroll, score passed obstacles, flap if held.
///
/// No-op unless the run is active.
pub fn tick(
    state: &mut RunState,
    stage: &mut dyn Stage,
    tuning: &Tuning,
    keys: &KeyState,
) -> TickReport {
    let mut report = TickReport::default();
    if state.phase != RunPhase::Active {
        return report;
    }

    stage.scroll_background(tuning.scroll_step(state.score));

    // Forget obstacles the stage already culled
    state.obstacles.retain(|o| stage.position(o.id).is_some());

    for obstacle in state.obstacles.iter_mut().filter(|o| !o.scored) {
        let Some(pos) = stage.position(obstacle.id) else {
            continue;
        };
        if pos.x < tuning.score_threshold_x {
            obstacle.scored = true;
            state.score += tuning.score_reward;
            report.points += tuning.score_reward;
        }
    }

    // Held keys re-apply the impulse every tick
    if keys.flap_held() {
        report.flapped = flap(state, stage, tuning);
    }

    report
}

/// Spawn-timer callback. Guarded: does nothing once the run is over.
pub fn spawn_obstacle(
    state: &mut RunState,
    stage: &mut dyn Stage,
    tuning: &Tuning,
) -> Option<EntityId> {
    if state.is_over() {
        log::debug!("Spawn after game over ignored");
        return None;
    }

    let y = state.roll_spawn_y(tuning);
    let speed = tuning.obstacle_speed(state.score);
    let id = stage.spawn(
        BodyKind::Obstacle,
        Vec2::new(tuning.spawn_x, y),
        tuning.obstacle_scale,
    );
    stage.set_velocity_x(id, -speed);
    stage.set_allow_gravity(id, false);

    state.obstacles.push(Obstacle {
        id,
        speed,
        scored: false,
    });
    Some(id)
}

/// Advance the spawn timer by `dt_ms`, spawning when it fires
pub fn advance_spawn_timer(
    state: &mut RunState,
    stage: &mut dyn Stage,
    tuning: &Tuning,
    dt_ms: f32,
) -> Option<EntityId> {
    if state.spawn_timer.advance(dt_ms) {
        spawn_obstacle(state, stage, tuning)
    } else {
        None
    }
}

/// Upward impulse on the player. Not rate limited.
pub fn flap(state: &RunState, stage: &mut dyn Stage, tuning: &Tuning) -> bool {
    if state.is_over() {
        return false;
    }
    match state.player {
        Some(player) => {
            stage.set_velocity_y(player, tuning.flap_velocity);
            true
        }
        None => false,
    }
}

/// Active -> Over. Returns false (and changes nothing) unless the run was active.
pub fn end_run(state: &mut RunState, stage: &mut dyn Stage) -> bool {
    if state.phase != RunPhase::Active {
        return false;
    }
    state.phase = RunPhase::Over;
    if let Some(player) = state.player {
        stage.set_tint(player, Some(HIT_TINT));
    }
    stage.pause();
    state.spawn_timer.cancel();
    true
}
