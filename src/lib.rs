//! The Whale $WIP Runner - an endless side-scrolling runner
//!
//! Core modules:
//! - `scene`: Menu, Controls and Run controllers (the game state machine)
//! - `sim`: Arcade physics stage and spawn timer
//! - `app`: Hosting loop that drives scenes and routes input
//! - `platform`: Browser/native collaborators (input, clipboard, share)
//! - `persistence`: Key-value storage (LocalStorage on web)
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod scene;
pub mod share;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use app::App;
pub use highscores::HighScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Fixed physics timestep (120 Hz for smooth integration)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Source texture sizes, scaled per sprite at spawn
    pub const PLAYER_TEXTURE: (f32, f32) = (400.0, 250.0);
    pub const OBSTACLE_TEXTURE: (f32, f32) = (400.0, 400.0);

    /// Player tint applied on collision
    pub const HIT_TINT: u32 = 0xff0000;
}
