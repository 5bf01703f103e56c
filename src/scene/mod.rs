//! Scene controllers
//!
//! Three screens, sequenced by explicit transitions:
//!
//! ```text
//!   Menu ──StartRun──▶ Run ──BackToMenu──▶ Menu
//!   Menu ──ShowControls──▶ Controls ──BackToMenu──▶ Menu
//! ```
//!
//! Controllers never own their collaborators. The hosting app owns a
//! [`Services`] value and lends it to whichever scene is active.

mod controls;
mod menu;
mod run;

pub use controls::ControlsController;
pub use menu::{DONATION_ADDRESS, MenuController};
pub use run::RunController;

use crate::audio::{Music, SilentMusic};
use crate::highscores::HighScore;
use crate::persistence::KeyValueStore;
use crate::platform::{Clipboard, FrameInput, RecordingClipboard, RecordingShare, ShareTarget};
use crate::sim::{ArcadeWorld, Stage};
use crate::tuning::Tuning;
use crate::ui::{Action, Display};

/// Identifies a scene for transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKey {
    Menu,
    Controls,
    Run,
}

/// Collaborators shared by all scenes
pub struct Services {
    pub tuning: Tuning,
    pub stage: Box<dyn Stage>,
    pub music: Box<dyn Music>,
    pub clipboard: Box<dyn Clipboard>,
    pub share: Box<dyn ShareTarget>,
    pub high_score: HighScore,
}

impl Services {
    /// Arcade world with silent/recording collaborators (native builds, tests)
    pub fn headless(tuning: Tuning, store: Box<dyn KeyValueStore>) -> Self {
        let high_score = HighScore::load(store, &tuning.high_score_key);
        Self {
            stage: Box::new(ArcadeWorld::new(tuning.gravity)),
            music: Box::new(SilentMusic::new()),
            clipboard: Box::new(RecordingClipboard::new()),
            share: Box::new(RecordingShare::new()),
            high_score,
            tuning,
        }
    }
}

/// Capability interface the hosting app drives
pub trait Scene {
    fn key(&self) -> SceneKey;

    /// Build the screen and start whatever the scene runs
    fn initialize(&mut self, services: &mut Services);

    /// Once per rendered frame
    fn tick(&mut self, _services: &mut Services, _input: &FrameInput) {}

    /// Release timers, audio and stage bodies before the scene is replaced
    fn teardown(&mut self, _services: &mut Services) {}

    /// Text and buttons currently shown
    fn display(&self) -> &Display;

    /// Apply a button action; `Some` requests a scene change
    fn dispatch(&mut self, action: Action, services: &mut Services) -> Option<SceneKey>;

    /// Scene clock advanced by `dt_ms`
    fn advance_clock(&mut self, _services: &mut Services, _dt_ms: f32) {}

    /// A pointer press that did not change scenes
    fn on_pointer_down(&mut self, _services: &mut Services) {}

    /// The stage reported a player/obstacle overlap
    fn on_collision(&mut self, _services: &mut Services) {}
}
