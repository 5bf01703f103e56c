//! Background music
//!
//! One looping track per run. The browser player wraps an `HtmlAudioElement`;
//! `SilentMusic` keeps the same state machine without sound for native
//! builds and tests.

use std::cell::Cell;
use std::rc::Rc;

/// Looping music track collaborator
pub trait Music {
    /// Start from the beginning
    fn play(&mut self);
    /// Stop and rewind
    fn stop(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
    fn is_playing(&self) -> bool;
}

/// Playback state shared between a `SilentMusic` and its observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Music player that tracks state without producing sound
#[derive(Debug, Clone, Default)]
pub struct SilentMusic {
    state: Rc<Cell<Playback>>,
    plays: Rc<Cell<u32>>,
}

impl SilentMusic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playback(&self) -> Playback {
        self.state.get()
    }

    /// Number of times playback was started from the beginning
    pub fn play_count(&self) -> u32 {
        self.plays.get()
    }
}

impl Music for SilentMusic {
    fn play(&mut self) {
        self.plays.set(self.plays.get() + 1);
        self.state.set(Playback::Playing);
    }

    fn stop(&mut self) {
        self.state.set(Playback::Stopped);
    }

    fn pause(&mut self) {
        if self.state.get() == Playback::Playing {
            self.state.set(Playback::Paused);
        }
    }

    fn resume(&mut self) {
        if self.state.get() == Playback::Paused {
            self.state.set(Playback::Playing);
        }
    }

    fn is_playing(&self) -> bool {
        self.state.get() == Playback::Playing
    }
}

/// Looping `<audio>` track
#[cfg(target_arch = "wasm32")]
pub struct WebMusic {
    element: Option<web_sys::HtmlAudioElement>,
}

#[cfg(target_arch = "wasm32")]
impl WebMusic {
    pub fn new(src: &str, volume: f32) -> Self {
        // May fail outside a document context
        let element = web_sys::HtmlAudioElement::new_with_src(src).ok();
        match &element {
            Some(el) => {
                el.set_loop(true);
                el.set_volume(volume.clamp(0.0, 1.0) as f64);
            }
            None => log::warn!("Failed to create audio element - music disabled"),
        }
        Self { element }
    }
}

#[cfg(target_arch = "wasm32")]
impl Music for WebMusic {
    fn play(&mut self) {
        if let Some(el) = &self.element {
            el.set_current_time(0.0);
            // Rejected until the first user gesture; the next play retries
            let _ = el.play();
        }
    }

    fn stop(&mut self) {
        if let Some(el) = &self.element {
            let _ = el.pause();
            el.set_current_time(0.0);
        }
    }

    fn pause(&mut self) {
        if let Some(el) = &self.element {
            let _ = el.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(el) = &self.element {
            let _ = el.play();
        }
    }

    fn is_playing(&self) -> bool {
        self.element.as_ref().is_some_and(|el| !el.paused())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_state_machine() {
        let mut music = SilentMusic::new();
        let observer = music.clone();
        assert!(!music.is_playing());

        music.play();
        assert!(observer.is_playing());
        music.pause();
        assert_eq!(observer.playback(), Playback::Paused);
        music.resume();
        assert!(observer.is_playing());
        music.stop();
        assert_eq!(observer.playback(), Playback::Stopped);

        // Resume does not restart a stopped track
        music.resume();
        assert!(!observer.is_playing());
        assert_eq!(observer.play_count(), 1);
    }
}
