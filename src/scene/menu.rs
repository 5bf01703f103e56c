//! Title screen: start, controls, donation address

use glam::Vec2;

use super::{Scene, SceneKey, Services};
use crate::ui::{Action, Anchor, Display, TextStyle, WidgetId};

/// SOL donation address
pub const DONATION_ADDRESS: &str = "DjazFdEfH1ZQ4vYrg6pYoxEphj7qZFiVxWWL8gMtGwqs";

#[derive(Debug, Default)]
pub struct MenuController {
    display: Display,
    /// Address text, once revealed
    donation: Option<WidgetId>,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the address; repeated reveals keep the single element
    fn reveal_donation(&mut self) {
        if self.donation.is_some() {
            return;
        }
        let id = self.display.add_button(
            &format!("SOL: {}", DONATION_ADDRESS),
            Vec2::new(400.0, 450.0),
            TextStyle::SMALL_BUTTON,
            Action::CopyDonation,
        );
        self.donation = Some(id);
    }

    fn copy_donation(&mut self, services: &mut Services) {
        let Some(id) = self.donation else {
            return;
        };
        services.clipboard.write_text(DONATION_ADDRESS);
        self.display.set_text(id, "Address Copied!");
    }
}

impl Scene for MenuController {
    fn key(&self) -> SceneKey {
        SceneKey::Menu
    }

    fn initialize(&mut self, _services: &mut Services) {
        self.display.clear();
        self.donation = None;

        self.display.add_label(
            "The Whale $WIP Runner",
            Vec2::new(400.0, 200.0),
            Anchor::Center,
            TextStyle::TITLE,
        );
        self.display.add_button(
            "Start Game",
            Vec2::new(400.0, 300.0),
            TextStyle::BIG_BUTTON,
            Action::StartRun,
        );
        self.display.add_button(
            "Controls",
            Vec2::new(400.0, 350.0),
            TextStyle::BUTTON,
            Action::ShowControls,
        );
        self.display.add_button(
            "Game Support Donation",
            Vec2::new(400.0, 400.0),
            TextStyle::BUTTON,
            Action::RevealDonation,
        );
    }

    fn display(&self) -> &Display {
        &self.display
    }

    fn dispatch(&mut self, action: Action, services: &mut Services) -> Option<SceneKey> {
        match action {
            Action::StartRun => Some(SceneKey::Run),
            Action::ShowControls => Some(SceneKey::Controls),
            Action::RevealDonation => {
                self.reveal_donation();
                None
            }
            Action::CopyDonation => {
                self.copy_donation(services);
                None
            }
            other => {
                log::debug!("Menu ignores {:?}", other);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::test_support::Harness;

    fn menu() -> (MenuController, Harness) {
        let mut harness = Harness::new();
        let mut menu = MenuController::new();
        menu.initialize(&mut harness.services);
        (menu, harness)
    }

    #[test]
    fn test_routes() {
        let (mut menu, mut harness) = menu();
        assert!(menu.display().shows("The Whale $WIP Runner"));
        assert_eq!(
            menu.dispatch(Action::StartRun, &mut harness.services),
            Some(SceneKey::Run)
        );
        assert_eq!(
            menu.dispatch(Action::ShowControls, &mut harness.services),
            Some(SceneKey::Controls)
        );
    }

    #[test]
    fn test_donation_reveal_then_copy() {
        let (mut menu, mut harness) = menu();
        let address_text = format!("SOL: {}", DONATION_ADDRESS);

        let reveal = menu.display().button_pos(Action::RevealDonation).unwrap();
        let action = menu.display().hit_test(reveal).unwrap();
        assert_eq!(menu.dispatch(action, &mut harness.services), None);
        assert!(menu.display().shows(&address_text));
        assert!(harness.clipboard.writes().is_empty());

        // Revealing again does not stack another element
        let count = menu.display().widgets().len();
        menu.dispatch(Action::RevealDonation, &mut harness.services);
        assert_eq!(menu.display().widgets().len(), count);

        let copy = menu.display().button_pos(Action::CopyDonation).unwrap();
        let action = menu.display().hit_test(copy).unwrap();
        assert_eq!(action, Action::CopyDonation);
        menu.dispatch(action, &mut harness.services);

        assert_eq!(harness.clipboard.writes(), vec![DONATION_ADDRESS.to_string()]);
        assert!(menu.display().shows("Address Copied!"));
        assert!(!menu.display().shows(&address_text));
    }

    #[test]
    fn test_copy_before_reveal_is_noop() {
        let (mut menu, mut harness) = menu();
        menu.dispatch(Action::CopyDonation, &mut harness.services);
        assert!(harness.clipboard.writes().is_empty());
    }
}
