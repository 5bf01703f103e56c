//! Text labels, buttons and the player action table
//!
//! Every clickable element carries an [`Action`]; scenes turn actions into
//! state transitions, so menu flow can be driven without a renderer.

use glam::Vec2;

/// Everything a player can trigger by clicking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    StartRun,
    ShowControls,
    RevealDonation,
    CopyDonation,
    BackToMenu,
    ToggleMute,
    Restart,
    Share,
}

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    TopLeft,
    #[default]
    Center,
}

/// Font size and colors (CSS color strings)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: &'static str,
    pub background: Option<&'static str>,
}

impl TextStyle {
    pub const TITLE: TextStyle = TextStyle {
        font_size: 32.0,
        color: "#fff",
        background: None,
    };
    pub const BODY: TextStyle = TextStyle {
        font_size: 24.0,
        color: "#fff",
        background: None,
    };
    pub const BUTTON: TextStyle = TextStyle {
        font_size: 24.0,
        color: "#fff",
        background: Some("#000"),
    };
    pub const BIG_BUTTON: TextStyle = TextStyle {
        font_size: 32.0,
        color: "#fff",
        background: Some("#000"),
    };
    pub const SMALL_BUTTON: TextStyle = TextStyle {
        font_size: 18.0,
        color: "#fff",
        background: Some("#000"),
    };

    pub fn with_color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }
}

/// Handle to a widget inside its [`Display`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(usize);

/// A piece of text, optionally clickable
#[derive(Debug, Clone)]
pub struct Widget {
    pub text: String,
    pub pos: Vec2,
    pub anchor: Anchor,
    pub style: TextStyle,
    pub action: Option<Action>,
}

impl Widget {
    /// Text box used for both hit testing and drawing.
    ///
    /// ASCII glyphs average 0.6em, anything wider (emoji) takes a full em;
    /// line height is 1.2em.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let ems: f32 = self
            .text
            .chars()
            .map(|c| if c.is_ascii() { 0.6 } else { 1.0 })
            .sum();
        let size = Vec2::new(
            ems * self.style.font_size,
            self.style.font_size * 1.2,
        );
        let min = match self.anchor {
            Anchor::TopLeft => self.pos,
            Anchor::Center => self.pos - size / 2.0,
        };
        (min, min + size)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = self.bounds();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

/// All text a scene shows, in draw order
#[derive(Debug, Clone, Default)]
pub struct Display {
    widgets: Vec<Widget>,
}

impl Display {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_label(&mut self, text: &str, pos: Vec2, anchor: Anchor, style: TextStyle) -> WidgetId {
        self.push(Widget {
            text: text.to_string(),
            pos,
            anchor,
            style,
            action: None,
        })
    }

    /// Centered clickable text
    pub fn add_button(&mut self, text: &str, pos: Vec2, style: TextStyle, action: Action) -> WidgetId {
        self.push(Widget {
            text: text.to_string(),
            pos,
            anchor: Anchor::Center,
            style,
            action: Some(action),
        })
    }

    fn push(&mut self, widget: Widget) -> WidgetId {
        self.widgets.push(widget);
        WidgetId(self.widgets.len() - 1)
    }

    pub fn set_text(&mut self, id: WidgetId, text: &str) {
        if let Some(w) = self.widgets.get_mut(id.0) {
            w.text.clear();
            w.text.push_str(text);
        }
    }

    pub fn text(&self, id: WidgetId) -> Option<&str> {
        self.widgets.get(id.0).map(|w| w.text.as_str())
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// True if any widget shows exactly `text`
    pub fn shows(&self, text: &str) -> bool {
        self.widgets.iter().any(|w| w.text == text)
    }

    /// Action of the topmost button under `point`
    pub fn hit_test(&self, point: Vec2) -> Option<Action> {
        self.widgets
            .iter()
            .rev()
            .filter(|w| w.action.is_some())
            .find(|w| w.contains(point))
            .and_then(|w| w.action)
    }

    /// Center of the first button bound to `action`
    pub fn button_pos(&self, action: Action) -> Option<Vec2> {
        self.widgets
            .iter()
            .find(|w| w.action == Some(action))
            .map(|w| w.pos)
    }

    pub fn clear(&mut self) {
        self.widgets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_buttons_only() {
        let mut display = Display::new();
        display.add_label("Title", Vec2::new(400.0, 300.0), Anchor::Center, TextStyle::TITLE);
        assert_eq!(display.hit_test(Vec2::new(400.0, 300.0)), None);

        display.add_button("Start", Vec2::new(400.0, 300.0), TextStyle::BUTTON, Action::StartRun);
        assert_eq!(display.hit_test(Vec2::new(400.0, 300.0)), Some(Action::StartRun));
        assert_eq!(display.hit_test(Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_topmost_wins() {
        let mut display = Display::new();
        display.add_button("Under", Vec2::new(100.0, 100.0), TextStyle::BUTTON, Action::Restart);
        display.add_button("Over", Vec2::new(100.0, 100.0), TextStyle::BUTTON, Action::Share);
        assert_eq!(display.hit_test(Vec2::new(100.0, 100.0)), Some(Action::Share));
    }

    #[test]
    fn test_top_left_bounds() {
        let mut display = Display::new();
        let id = display.add_label("Score: 0", Vec2::new(20.0, 20.0), Anchor::TopLeft, TextStyle::BODY);
        let (min, max) = display.widgets()[0].bounds();
        assert_eq!(min, Vec2::new(20.0, 20.0));
        assert!(max.x > min.x && max.y > min.y);

        display.set_text(id, "Score: 10");
        assert_eq!(display.text(id), Some("Score: 10"));
        assert!(display.shows("Score: 10"));
    }

    #[test]
    fn test_glyph_button_hit_box_covers_full_em() {
        let mut display = Display::new();
        display.add_button("🔊", Vec2::new(750.0, 20.0), TextStyle::BUTTON, Action::ToggleMute);
        let (min, max) = display.widgets()[0].bounds();
        assert_eq!(max.x - min.x, TextStyle::BUTTON.font_size);

        // Right edge of the drawn glyph is clickable
        let edge = Vec2::new(750.0 + TextStyle::BUTTON.font_size * 0.45, 20.0);
        assert_eq!(display.hit_test(edge), Some(Action::ToggleMute));
    }
}
