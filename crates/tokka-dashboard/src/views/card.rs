//! Expand/collapse state of route cards
//!
//! The DOM classes and inline styles of a card are a projection of the
//! state held here; nothing is read back from the DOM except the natural
//! height of the details section.

use std::collections::HashMap;

use crate::model::RouteKey;

/// Extra room added to the measured content height so margins of the last
/// child are not clipped while animating
pub const DETAILS_SLACK_PX: u32 = 30;

const OPEN_PADDING_TOP_PX: u32 = 15;
const OPEN_PADDING_BOTTOM_PX: u32 = 5;

/// State of a single route card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Collapsed,
    Expanded,
}

impl CardState {
    pub fn toggled(self) -> Self {
        match self {
            CardState::Collapsed => CardState::Expanded,
            CardState::Expanded => CardState::Collapsed,
        }
    }

    pub fn is_open(self) -> bool {
        self == CardState::Expanded
    }

    /// Toggle indicator shown in the card header
    pub fn glyph(self) -> &'static str {
        match self {
            CardState::Collapsed => "▼",
            CardState::Expanded => "▲",
        }
    }
}

/// Inline style targets for the details section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailsStyle {
    pub max_height_px: u32,
    pub opacity: f32,
    pub padding_top_px: u32,
    pub padding_bottom_px: u32,
}

impl DetailsStyle {
    pub const COLLAPSED: DetailsStyle = DetailsStyle {
        max_height_px: 0,
        opacity: 0.0,
        padding_top_px: 0,
        padding_bottom_px: 0,
    };

    pub fn expanded(content_height: u32) -> Self {
        Self {
            max_height_px: content_height.saturating_add(DETAILS_SLACK_PX),
            opacity: 1.0,
            padding_top_px: OPEN_PADDING_TOP_PX,
            padding_bottom_px: OPEN_PADDING_BOTTOM_PX,
        }
    }

    /// CSS property/value pairs
    pub fn properties(&self) -> [(&'static str, String); 4] {
        [
            ("max-height", px(self.max_height_px)),
            ("opacity", self.opacity.to_string()),
            ("padding-top", px(self.padding_top_px)),
            ("padding-bottom", px(self.padding_bottom_px)),
        ]
    }

    /// Value for a `style="..."` attribute
    pub fn inline(&self) -> String {
        self.properties()
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn px(value: u32) -> String {
    if value == 0 {
        "0".to_string()
    } else {
        format!("{}px", value)
    }
}

/// Result of toggling a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub next: CardState,
    /// Height to pin before animating towards `target`
    pub pin_height_px: Option<u32>,
    pub target: DetailsStyle,
}

/// Compute the toggle of `current` given the natural content height
pub fn transition(current: CardState, content_height: u32) -> Transition {
    let next = current.toggled();
    match next {
        CardState::Expanded => Transition {
            next,
            pin_height_px: None,
            target: DetailsStyle::expanded(content_height),
        },
        CardState::Collapsed => Transition {
            next,
            pin_height_px: Some(content_height.saturating_add(DETAILS_SLACK_PX)),
            target: DetailsStyle::COLLAPSED,
        },
    }
}

/// Per-route card states, keyed by route identity
///
/// Routes that share a method and path share a state. Only expanded cards
/// are stored, together with the style they were expanded to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardStates {
    expanded: HashMap<RouteKey, DetailsStyle>,
}

impl CardStates {
    pub fn get(&self, key: &RouteKey) -> CardState {
        if self.expanded.contains_key(key) {
            CardState::Expanded
        } else {
            CardState::Collapsed
        }
    }

    /// Style the details section of `key` should currently have
    pub fn style(&self, key: &RouteKey) -> DetailsStyle {
        self.expanded
            .get(key)
            .copied()
            .unwrap_or(DetailsStyle::COLLAPSED)
    }

    /// Transition a toggle of `key` would make, without applying it
    pub fn preview(&self, key: &RouteKey, content_height: u32) -> Transition {
        transition(self.get(key), content_height)
    }

    /// Record a transition obtained from [`preview`](Self::preview)
    pub fn commit(&mut self, key: &RouteKey, transition: &Transition) {
        match transition.next {
            CardState::Expanded => {
                self.expanded.insert(key.clone(), transition.target);
            }
            CardState::Collapsed => {
                self.expanded.remove(key);
            }
        }
    }

    /// Collapse every card
    pub fn reset(&mut self) {
        self.expanded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_uses_content_height() {
        let t = transition(CardState::Collapsed, 120);
        assert_eq!(t.next, CardState::Expanded);
        assert_eq!(t.pin_height_px, None);
        assert_eq!(t.target.max_height_px, 150);
        assert_eq!(t.target.opacity, 1.0);
        assert_eq!(t.target.padding_top_px, 15);
    }

    #[test]
    fn test_collapse_pins_then_shrinks() {
        let t = transition(CardState::Expanded, 400);
        assert_eq!(t.next, CardState::Collapsed);
        assert_eq!(t.pin_height_px, Some(430));
        assert_eq!(t.target, DetailsStyle::COLLAPSED);
    }

    #[test]
    fn test_huge_content_does_not_overflow() {
        let t = transition(CardState::Collapsed, u32::MAX);
        assert_eq!(t.target.max_height_px, u32::MAX);
    }

    #[test]
    fn test_inline_style() {
        assert_eq!(
            DetailsStyle::COLLAPSED.inline(),
            "max-height: 0; opacity: 0; padding-top: 0; padding-bottom: 0;"
        );
        assert_eq!(
            DetailsStyle::expanded(10).inline(),
            "max-height: 40px; opacity: 1; padding-top: 15px; padding-bottom: 5px;"
        );
    }

    #[test]
    fn test_card_states_toggle_and_reset() {
        let mut cards = CardStates::default();
        let key = RouteKey::new("GET", "/users");
        assert_eq!(cards.get(&key), CardState::Collapsed);
        assert_eq!(cards.style(&key), DetailsStyle::COLLAPSED);

        let t = cards.preview(&key, 10);
        cards.commit(&key, &t);
        assert_eq!(cards.get(&key), CardState::Expanded);
        assert_eq!(cards.get(&key).glyph(), "▲");
        assert_eq!(cards.style(&key), DetailsStyle::expanded(10));

        let t = cards.preview(&key, 10);
        cards.commit(&key, &t);
        assert_eq!(cards.get(&key), CardState::Collapsed);

        let t = cards.preview(&key, 10);
        cards.commit(&key, &t);
        cards.reset();
        assert_eq!(cards.get(&key), CardState::Collapsed);
        assert_eq!(cards, CardStates::default());
    }

    #[test]
    fn test_preview_does_not_change_state() {
        let cards = CardStates::default();
        let key = RouteKey::new("GET", "/users");
        let t = cards.preview(&key, 50);
        assert_eq!(t.next, CardState::Expanded);
        assert_eq!(cards.get(&key), CardState::Collapsed);
    }

    #[test]
    fn test_duplicate_routes_share_state() {
        let mut cards = CardStates::default();
        let t = cards.preview(&RouteKey::new("get", "/a"), 20);
        cards.commit(&RouteKey::new("get", "/a"), &t);
        assert_eq!(cards.get(&RouteKey::new("GET", "/a")), CardState::Expanded);
    }
}
