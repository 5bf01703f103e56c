//! Data-driven game balance
//!
//! Defaults reproduce the shipped game. Overrides are partial JSON documents,
//! persisted separately from the high score in LocalStorage.

use serde::{Deserialize, Serialize};

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawning ===
    /// Spawn timer period (ms). Not scaled by difficulty.
    pub spawn_interval_ms: f32,
    /// Horizontal spawn origin
    pub spawn_x: f32,
    /// Inclusive vertical spawn band
    pub spawn_y_min: i32,
    pub spawn_y_max: i32,

    // === Difficulty ===
    /// Leftward obstacle speed at score 0
    pub obstacle_base_speed: f32,
    /// Score points per extra unit of obstacle speed
    pub obstacle_speed_divisor: f32,
    /// Background scroll per frame at score 0
    pub scroll_base: f32,
    /// Score points per extra unit of scroll
    pub scroll_divisor: f32,

    // === Scoring ===
    /// Points awarded when an obstacle passes the player
    pub score_reward: u64,
    /// Obstacles left of this x count as passed
    pub score_threshold_x: f32,

    // === Player ===
    pub player_start: (f32, f32),
    pub player_scale: f32,
    /// Vertical velocity set by a flap (negative is up)
    pub flap_velocity: f32,
    /// Downward acceleration (px/s²)
    pub gravity: f32,

    pub obstacle_scale: f32,

    // === Audio ===
    pub music_volume: f32,

    /// Storage key for the persisted high score
    pub high_score_key: String,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 2000.0,
            spawn_x: 800.0,
            spawn_y_min: 200,
            spawn_y_max: 500,

            obstacle_base_speed: 200.0,
            obstacle_speed_divisor: 10.0,
            scroll_base: 2.0,
            scroll_divisor: 100.0,

            score_reward: 10,
            score_threshold_x: 100.0,

            player_start: (100.0, 300.0),
            player_scale: 0.2,
            flap_velocity: -200.0,
            gravity: 500.0,

            obstacle_scale: 0.15,

            music_volume: 0.5,

            high_score_key: "highScore".to_string(),
        }
    }
}

impl Tuning {
    /// LocalStorage key for overrides
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "wip_runner_tuning";

    /// Obstacle speed magnitude for an obstacle spawned at `score`
    pub fn obstacle_speed(&self, score: u64) -> f32 {
        self.obstacle_base_speed + score as f32 / self.obstacle_speed_divisor
    }

    /// Background scroll step for the current `score` (unbounded)
    pub fn scroll_step(&self, score: u64) -> f32 {
        self.scroll_base + score as f32 / self.scroll_divisor
    }

    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate();
        Ok(tuning)
    }

    /// Fix values that would break the game loop
    pub fn validate(&mut self) {
        let defaults = Tuning::default();

        if self.spawn_interval_ms <= 0.0 {
            log::warn!(
                "spawn_interval_ms {} is not positive, using {}",
                self.spawn_interval_ms,
                defaults.spawn_interval_ms
            );
            self.spawn_interval_ms = defaults.spawn_interval_ms;
        }
        if self.obstacle_speed_divisor == 0.0 {
            log::warn!("obstacle_speed_divisor is zero, using default");
            self.obstacle_speed_divisor = defaults.obstacle_speed_divisor;
        }
        if self.scroll_divisor == 0.0 {
            log::warn!("scroll_divisor is zero, using default");
            self.scroll_divisor = defaults.scroll_divisor;
        }
        if self.spawn_y_min > self.spawn_y_max {
            log::warn!(
                "spawn band {}..={} is inverted, swapping",
                self.spawn_y_min,
                self.spawn_y_max
            );
            std::mem::swap(&mut self.spawn_y_min, &mut self.spawn_y_max);
        }
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
    }

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring malformed tuning overrides: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
