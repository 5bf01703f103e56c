//! Gameplay scene
//!
//! Wraps a [`RunState`] with the run's HUD, music and high-score handling.
//! States: Ready (constructed) → Active (after `initialize`) → Over (first
//! collision). Over is terminal for the instance; Restart swaps in a fresh
//! `RunState` instead of reviving the old one.

use glam::Vec2;

use super::{Scene, SceneKey, Services};
use crate::platform::FrameInput;
use crate::share::share_url;
use crate::sim::{self, RunState};
use crate::ui::{Action, Anchor, Display, TextStyle, WidgetId};

const SOUND_ON: &str = "🔊";
const SOUND_OFF: &str = "🔇";

/// Share button color (X brand blue)
const SHARE_COLOR: &str = "#1DA1F2";

/// HUD elements updated during play
#[derive(Debug, Clone, Copy)]
struct Hud {
    score: WidgetId,
    high_score: WidgetId,
    mute: WidgetId,
}

#[derive(Debug)]
pub struct RunController {
    state: RunState,
    display: Display,
    hud: Option<Hud>,
}

impl RunController {
    pub fn new(seed: u64) -> Self {
        Self {
            state: RunState::new(seed),
            display: Display::new(),
            hud: None,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Test and debug access to the run state
    pub fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn build_hud(&mut self, services: &Services) {
        self.display.clear();
        let score = self.display.add_label(
            "Score: 0",
            Vec2::new(20.0, 20.0),
            Anchor::TopLeft,
            TextStyle::BODY,
        );
        let high_score = self.display.add_label(
            &format!("High Score: {}", services.high_score.best()),
            Vec2::new(20.0, 50.0),
            Anchor::TopLeft,
            TextStyle::BODY,
        );
        let mute = self.display.add_button(
            SOUND_ON,
            Vec2::new(750.0, 20.0),
            TextStyle::BUTTON,
            Action::ToggleMute,
        );
        self.hud = Some(Hud {
            score,
            high_score,
            mute,
        });
    }

    fn show_game_over(&mut self) {
        self.display.add_label(
            "Game Over",
            Vec2::new(400.0, 250.0),
            Anchor::Center,
            TextStyle::TITLE,
        );
        self.display.add_button(
            "Restart",
            Vec2::new(400.0, 300.0),
            TextStyle::BUTTON,
            Action::Restart,
        );
        self.display.add_button(
            "$WIP it to X",
            Vec2::new(400.0, 350.0),
            TextStyle::BUTTON.with_color(SHARE_COLOR),
            Action::Share,
        );
        self.display.add_button(
            "Back to Menu",
            Vec2::new(400.0, 400.0),
            TextStyle::BUTTON,
            Action::BackToMenu,
        );
    }

    /// Timer callback: one obstacle, unless the run is over
    pub fn spawn_obstacle(&mut self, services: &mut Services) {
        sim::spawn_obstacle(&mut self.state, services.stage.as_mut(), &services.tuning);
    }

    pub fn flap(&mut self, services: &mut Services) {
        sim::flap(&self.state, services.stage.as_mut(), &services.tuning);
    }

    /// The only way from Active to Over. Repeat calls are no-ops.
    pub fn handle_collision(&mut self, services: &mut Services) {
        if !sim::end_run(&mut self.state, services.stage.as_mut()) {
            return;
        }
        let score = self.state.score;
        log::info!("Game over with score {}", score);

        if services.high_score.record(score) {
            if let Some(hud) = self.hud {
                self.display.set_text(
                    hud.high_score,
                    &format!("High Score: {}", services.high_score.best()),
                );
            }
        }
        self.show_game_over();
    }

    /// Throw the run away and start a fresh one in place
    pub fn restart(&mut self, services: &mut Services) {
        self.teardown(services);
        let seed = self.state.next_seed();
        *self = RunController::new(seed);
        self.initialize(services);
    }

    /// Pause or resume the music. Leaves score, physics and phase alone.
    pub fn toggle_mute(&mut self, services: &mut Services) {
        let glyph = if services.music.is_playing() {
            services.music.pause();
            self.state.muted = true;
            SOUND_OFF
        } else {
            services.music.resume();
            self.state.muted = false;
            SOUND_ON
        };
        if let Some(hud) = self.hud {
            self.display.set_text(hud.mute, glyph);
        }
    }

    pub fn share(&self, services: &mut Services) {
        services.share.open(&share_url(services.high_score.best()));
    }
}

impl Scene for RunController {
    fn key(&self) -> SceneKey {
        SceneKey::Run
    }

    fn initialize(&mut self, services: &mut Services) {
        sim::start_run(&mut self.state, services.stage.as_mut(), &services.tuning);
        self.build_hud(services);
        services.music.play();
        log::info!("Run started (seed {})", self.state.seed);
    }

    fn tick(&mut self, services: &mut Services, input: &FrameInput) {
        let report = sim::tick(
            &mut self.state,
            services.stage.as_mut(),
            &services.tuning,
            &input.keys,
        );
        if report.points > 0 {
            if let Some(hud) = self.hud {
                self.display
                    .set_text(hud.score, &format!("Score: {}", self.state.score));
            }
        }
    }

    fn teardown(&mut self, services: &mut Services) {
        services.music.stop();
        self.state.spawn_timer.cancel();
        services.stage.clear();
    }

    fn display(&self) -> &Display {
        &self.display
    }

    fn dispatch(&mut self, action: Action, services: &mut Services) -> Option<SceneKey> {
        match action {
            Action::ToggleMute => self.toggle_mute(services),
            Action::Restart => self.restart(services),
            Action::Share => self.share(services),
            Action::BackToMenu => return Some(SceneKey::Menu),
            other => log::debug!("Run ignores {:?}", other),
        }
        None
    }

    fn advance_clock(&mut self, services: &mut Services, dt_ms: f32) {
        sim::advance_spawn_timer(
            &mut self.state,
            services.stage.as_mut(),
            &services.tuning,
            dt_ms,
        );
    }

    fn on_pointer_down(&mut self, services: &mut Services) {
        self.flap(services);
    }

    fn on_collision(&mut self, services: &mut Services) {
        self.handle_collision(services);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Playback;
    use crate::persistence::{KeyValueStore, MemoryStore};
    use crate::platform::KeyState;
    use crate::scene::test_support::Harness;
    use crate::sim::RunPhase;

    fn started(harness: &mut Harness) -> RunController {
        let mut run = RunController::new(11);
        run.initialize(&mut harness.services);
        run
    }

    /// Spawn an obstacle and drag it past the scoring line
    fn pass_obstacle(run: &mut RunController, harness: &mut Harness) {
        run.spawn_obstacle(&mut harness.services);
        let id = run.state().obstacles.last().unwrap().id;
        harness
            .services
            .stage
            .set_position(id, Vec2::new(50.0, 250.0));
        run.tick(&mut harness.services, &FrameInput::default());
    }

    #[test]
    fn test_initialize_activates() {
        let mut harness = Harness::new();
        let run = started(&mut harness);
        assert_eq!(run.state().phase, RunPhase::Active);
        assert_eq!(run.state().score, 0);
        assert!(run.display().shows("Score: 0"));
        assert!(run.display().shows("High Score: 0"));
        assert!(run.display().shows(SOUND_ON));
        assert_eq!(harness.music.playback(), Playback::Playing);
    }

    #[test]
    fn test_score_display_updates() {
        let mut harness = Harness::new();
        let mut run = started(&mut harness);
        pass_obstacle(&mut run, &mut harness);
        assert_eq!(run.state().score, 10);
        assert!(run.display().shows("Score: 10"));
    }

    #[test]
    fn test_collision_records_high_score() {
        let mut harness = Harness::new();
        let mut run = started(&mut harness);
        pass_obstacle(&mut run, &mut harness);
        pass_obstacle(&mut run, &mut harness);

        run.handle_collision(&mut harness.services);
        assert!(run.state().is_over());
        assert!(harness.services.stage.is_paused());
        assert!(run.state().spawn_timer.is_cancelled());
        assert_eq!(harness.services.high_score.best(), 20);
        assert_eq!(harness.store.get("highScore").as_deref(), Some("20"));
        assert!(run.display().shows("High Score: 20"));
        assert!(run.display().shows("Game Over"));
        assert!(run.display().button_pos(Action::Restart).is_some());
        assert!(run.display().button_pos(Action::Share).is_some());
        assert!(run.display().button_pos(Action::BackToMenu).is_some());
    }

    #[test]
    fn test_lower_score_keeps_high_score() {
        let mut harness = Harness::with_store(MemoryStore::with_item("highScore", "500"));
        let mut run = started(&mut harness);
        pass_obstacle(&mut run, &mut harness);
        run.handle_collision(&mut harness.services);
        assert_eq!(harness.services.high_score.best(), 500);
        assert_eq!(harness.store.get("highScore").as_deref(), Some("500"));
        assert!(run.display().shows("High Score: 500"));
    }

    #[test]
    fn test_second_collision_is_noop() {
        let mut harness = Harness::new();
        let mut run = started(&mut harness);
        pass_obstacle(&mut run, &mut harness);
        run.handle_collision(&mut harness.services);
        let widgets = run.display().widgets().len();

        // A later, higher score must not sneak in through a repeat collision
        run.state_mut().score = 999;
        run.handle_collision(&mut harness.services);
        assert_eq!(harness.services.high_score.best(), 10);
        assert_eq!(run.display().widgets().len(), widgets);
    }

    #[test]
    fn test_no_spawn_after_collision() {
        let mut harness = Harness::new();
        let mut run = started(&mut harness);
        run.handle_collision(&mut harness.services);
        for _ in 0..1000 {
            run.advance_clock(&mut harness.services, 20.0);
        }
        run.spawn_obstacle(&mut harness.services);
        assert!(run.state().obstacles.is_empty());
        assert_eq!(harness.services.stage.sprites().len(), 1);
    }

    #[test]
    fn test_over_ignores_tick_and_flap() {
        let mut harness = Harness::new();
        let mut run = started(&mut harness);
        run.handle_collision(&mut harness.services);
        let player = run.state().player.unwrap();
        let before = harness.services.stage.velocity(player);
        let offset = harness.services.stage.background_offset();

        run.on_pointer_down(&mut harness.services);
        run.tick(
            &mut harness.services,
            &FrameInput {
                keys: KeyState { space: true, up: true },
            },
        );
        assert_eq!(harness.services.stage.velocity(player), before);
        assert_eq!(harness.services.stage.background_offset(), offset);
    }

    #[test]
    fn test_pointer_flaps() {
        let mut harness = Harness::new();
        let mut run = started(&mut harness);
        let player = run.state().player.unwrap();
        run.on_pointer_down(&mut harness.services);
        assert_eq!(harness.services.stage.velocity(player).unwrap().y, -200.0);
    }

    #[test]
    fn test_restart_is_fresh() {
        let mut harness = Harness::new();
        let mut run = started(&mut harness);
        run.state_mut().score = 140;
        pass_obstacle(&mut run, &mut harness);
        assert_eq!(run.state().score, 150);
        run.spawn_obstacle(&mut harness.services);
        run.handle_collision(&mut harness.services);

        let action = run
            .display()
            .hit_test(run.display().button_pos(Action::Restart).unwrap())
            .unwrap();
        assert_eq!(run.dispatch(action, &mut harness.services), None);

        let state = run.state();
        assert_eq!(state.score, 0);
        assert!(!state.is_over());
        assert!(state.obstacles.is_empty());
        assert!(!state.spawn_timer.is_cancelled());
        assert!(!harness.services.stage.is_paused());
        // Only the new player remains, untinted
        let sprites = harness.services.stage.sprites();
        assert_eq!(sprites.len(), 1);
        assert_eq!(sprites[0].tint, None);
        assert!(run.display().shows("Score: 0"));
        assert!(run.display().shows("High Score: 150"));
        assert!(!run.display().shows("Game Over"));
        assert_eq!(harness.music.play_count(), 2);
    }

    #[test]
    fn test_toggle_mute() {
        let mut harness = Harness::new();
        let mut run = started(&mut harness);

        run.dispatch(Action::ToggleMute, &mut harness.services);
        assert!(run.state().muted);
        assert_eq!(harness.music.playback(), Playback::Paused);
        assert!(run.display().shows(SOUND_OFF));
        assert_eq!(run.state().phase, RunPhase::Active);

        run.handle_collision(&mut harness.services);
        run.dispatch(Action::ToggleMute, &mut harness.services);
        assert!(!run.state().muted);
        assert_eq!(harness.music.playback(), Playback::Playing);
        assert!(run.display().shows(SOUND_ON));
        assert!(run.state().is_over());
    }

    #[test]
    fn test_share_uses_high_score() {
        let mut harness = Harness::with_store(MemoryStore::with_item("highScore", "70"));
        let mut run = started(&mut harness);
        run.handle_collision(&mut harness.services);
        run.dispatch(Action::Share, &mut harness.services);

        let opened = harness.share.opened();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].contains("score%3A%2070%20"));
    }

    #[test]
    fn test_back_to_menu_tears_down() {
        let mut harness = Harness::new();
        let mut run = started(&mut harness);
        run.handle_collision(&mut harness.services);
        assert_eq!(
            run.dispatch(Action::BackToMenu, &mut harness.services),
            Some(SceneKey::Menu)
        );
        run.teardown(&mut harness.services);
        assert_eq!(harness.music.playback(), Playback::Stopped);
        assert!(harness.services.stage.sprites().is_empty());
    }
}
