//! Hosting loop
//!
//! Owns the active scene and the shared [`Services`], and drives them once
//! per rendered frame:
//! 1. scene clock (spawn timer callbacks)
//! 2. fixed physics substeps, dispatching collisions
//! 3. scene tick
//!
//! Pointer presses go through the active display's action table first.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::platform::FrameInput;
use crate::scene::{
    ControlsController, MenuController, RunController, Scene, SceneKey, Services,
};
use crate::ui::{Action, Display};

pub struct App {
    services: Services,
    scene: Box<dyn Scene>,
    accumulator: f32,
    /// Seeds for new runs
    seeds: Pcg32,
}

impl App {
    /// Start on the menu
    pub fn new(mut services: Services, seed: u64) -> Self {
        let mut scene: Box<dyn Scene> = Box::new(MenuController::new());
        scene.initialize(&mut services);
        Self {
            services,
            scene,
            accumulator: 0.0,
            seeds: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn scene_key(&self) -> SceneKey {
        self.scene.key()
    }

    pub fn display(&self) -> &Display {
        self.scene.display()
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut Services {
        &mut self.services
    }

    /// Advance one rendered frame of `dt` seconds
    pub fn frame(&mut self, dt: f32, input: &FrameInput) {
        let dt = dt.min(0.1);
        self.scene.advance_clock(&mut self.services, dt * 1000.0);

        self.accumulator += dt;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.services.stage.step(SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            if !self.services.stage.is_paused() && self.services.stage.player_hit() {
                self.scene.on_collision(&mut self.services);
            }
        }

        self.scene.tick(&mut self.services, input);
    }

    /// Route a pointer press: button under the pointer first, then the scene
    pub fn pointer_down(&mut self, pos: Vec2) {
        if let Some(action) = self.scene.display().hit_test(pos) {
            log::debug!("{:?} -> {:?}", self.scene.key(), action);
            if let Some(next) = self.scene.dispatch(action, &mut self.services) {
                self.transition(next);
                return;
            }
            // The press belonged to the ended run, not the fresh one
            if action == Action::Restart {
                return;
            }
        }
        self.scene.on_pointer_down(&mut self.services);
    }

    /// Replace the active scene with a freshly initialized one
    pub fn transition(&mut self, next: SceneKey) {
        log::info!("Scene {:?} -> {:?}", self.scene.key(), next);
        self.scene.teardown(&mut self.services);
        self.accumulator = 0.0;

        let mut scene: Box<dyn Scene> = match next {
            SceneKey::Menu => Box::new(MenuController::new()),
            SceneKey::Controls => Box::new(ControlsController::new()),
            SceneKey::Run => Box::new(RunController::new(self.seeds.random())),
        };
        scene.initialize(&mut self.services);
        self.scene = scene;
    }
}
