//! Static how-to-play screen

use glam::Vec2;

use super::{Scene, SceneKey, Services};
use crate::ui::{Action, Anchor, Display, TextStyle};

pub const CONTROL_LINES: [&str; 3] = [
    "- Press SPACE or UP to fly",
    "- Avoid the Bears 🐻",
    "- Get the highest score!",
];

#[derive(Debug, Default)]
pub struct ControlsController {
    display: Display,
}

impl ControlsController {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scene for ControlsController {
    fn key(&self) -> SceneKey {
        SceneKey::Controls
    }

    fn initialize(&mut self, _services: &mut Services) {
        self.display.clear();
        self.display
            .add_label("Controls", Vec2::new(400.0, 200.0), Anchor::Center, TextStyle::TITLE);
        for (i, line) in CONTROL_LINES.iter().enumerate() {
            let y = 300.0 + 50.0 * i as f32;
            self.display
                .add_label(line, Vec2::new(400.0, y), Anchor::Center, TextStyle::BODY);
        }
        self.display
            .add_button("Back", Vec2::new(400.0, 500.0), TextStyle::BUTTON, Action::BackToMenu);
    }

    fn display(&self) -> &Display {
        &self.display
    }

    fn dispatch(&mut self, action: Action, _services: &mut Services) -> Option<SceneKey> {
        match action {
            Action::BackToMenu => Some(SceneKey::Menu),
            _ => None,
        }
    }
}
