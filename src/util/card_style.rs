//! Card visual state and inline style derivation.

#[cfg(test)]
#[path = "card_style_test.rs"]
mod card_style_test;

use crate::state::drag::{SortableState, Transition};

/// Mutually exclusive drag presentation of one rendered card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVisual {
    #[default]
    Idle,
    /// Marked as dragging by its parent: enlarged, rotated, elevated.
    Lifted,
    /// Placeholder left behind by the active drag source: faded.
    Source,
    /// Floating duplicate under the pointer: heavier shadow.
    Overlay,
}

/// Overlay wins over the coordinator's drag state, which wins over the prop.
pub fn card_visual(is_overlay: bool, sortable_dragging: bool, is_dragging: bool) -> CardVisual {
    if is_overlay {
        CardVisual::Overlay
    } else if sortable_dragging {
        CardVisual::Source
    } else if is_dragging {
        CardVisual::Lifted
    } else {
        CardVisual::Idle
    }
}

impl CardVisual {
    fn modifier(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Lifted => Some("activity-card--lifted"),
            Self::Source => Some("activity-card--source"),
            Self::Overlay => Some("activity-card--overlay"),
        }
    }

    pub fn opacity(self) -> &'static str {
        if self == Self::Source { "0.5" } else { "1" }
    }

    pub fn class(self) -> String {
        match self.modifier() {
            Some(modifier) => format!("activity-card {modifier}"),
            None => "activity-card".to_owned(),
        }
    }
}

/// Inline `style` for the card root. `transform` is omitted when the
/// coordinator reports none; `transition` falls back to `default_transition`.
pub fn card_inline_style(state: &SortableState, visual: CardVisual, default_transition: &Transition) -> String {
    let transition = state.transition.as_ref().unwrap_or(default_transition).to_css();
    let mut style = String::new();
    if let Some(transform) = state.transform {
        style.push_str(&format!("transform: {}; ", transform.to_css()));
    }
    style.push_str(&format!("transition: {transition}; opacity: {}", visual.opacity()));
    style
}
