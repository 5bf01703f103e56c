//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input snapshots (held keys, pointer presses)
//! - Clipboard writes
//! - Opening an external share target

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Held state of the two flap keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub space: bool,
    pub up: bool,
}

impl KeyState {
    /// Either mapped key is down
    pub fn flap_held(&self) -> bool {
        self.space || self.up
    }
}

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub keys: KeyState,
}

impl FrameInput {
    pub fn holding_flap() -> Self {
        Self {
            keys: KeyState {
                space: true,
                up: false,
            },
        }
    }
}

/// Clipboard collaborator
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// External share target (a new browsing context on web)
pub trait ShareTarget {
    fn open(&mut self, url: &str);
}

/// Clipboard that records writes. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) {
        log::info!("Clipboard write ({} chars)", text.len());
        self.writes.borrow_mut().push(text.to_string());
    }
}

/// Share target that records opened URLs. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingShare {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingShare {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ShareTarget for RecordingShare {
    fn open(&mut self, url: &str) {
        log::info!("Share target opened: {}", url);
        self.opened.borrow_mut().push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flap_held_either_key() {
        assert!(!KeyState::default().flap_held());
        assert!(KeyState { space: true, up: false }.flap_held());
        assert!(KeyState { space: false, up: true }.flap_held());
    }
}
