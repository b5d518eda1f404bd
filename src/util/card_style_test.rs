use super::*;
use crate::state::drag::Transform;

fn default_transition() -> Transition {
    Transition::transform(200, "ease")
}

// =============================================================
// card_visual
// =============================================================

#[test]
fn idle_when_no_signal_set() {
    assert_eq!(card_visual(false, false, false), CardVisual::Idle);
}

#[test]
fn overlay_takes_precedence() {
    assert_eq!(card_visual(true, false, true), CardVisual::Overlay);
    assert_eq!(card_visual(true, true, false), CardVisual::Overlay);
}

#[test]
fn coordinator_drag_marks_source() {
    assert_eq!(card_visual(false, true, false), CardVisual::Source);
    assert_eq!(card_visual(false, true, true), CardVisual::Source);
}

#[test]
fn dragging_prop_lifts_card() {
    assert_eq!(card_visual(false, false, true), CardVisual::Lifted);
}

#[test]
fn classes_are_exclusive_modifiers() {
    assert_eq!(CardVisual::Idle.class(), "activity-card");
    assert_eq!(CardVisual::Lifted.class(), "activity-card activity-card--lifted");
    assert_eq!(CardVisual::Source.class(), "activity-card activity-card--source");
    assert_eq!(CardVisual::Overlay.class(), "activity-card activity-card--overlay");
}

#[test]
fn only_source_is_faded() {
    assert_eq!(CardVisual::Source.opacity(), "0.5");
    for visual in [CardVisual::Idle, CardVisual::Lifted, CardVisual::Overlay] {
        assert_eq!(visual.opacity(), "1");
    }
}

// =============================================================
// card_inline_style
// =============================================================

#[test]
fn style_without_transform_uses_default_transition() {
    let style = card_inline_style(&SortableState::default(), CardVisual::Idle, &default_transition());
    assert_eq!(style, "transition: transform 200ms ease; opacity: 1");
}

#[test]
fn style_with_transform_and_coordinator_transition() {
    let state = SortableState {
        transform: Some(Transform::translate(0.0, 48.0)),
        transition: Some(Transition::transform(150, "linear")),
        is_dragging: false,
    };
    let style = card_inline_style(&state, CardVisual::Idle, &default_transition());
    assert_eq!(
        style,
        "transform: translate3d(0px, 48px, 0) scaleX(1) scaleY(1); transition: transform 150ms linear; opacity: 1"
    );
}

#[test]
fn source_style_is_half_opaque() {
    let state = SortableState { transform: Some(Transform::translate(5.0, 5.0)), transition: None, is_dragging: true };
    let style = card_inline_style(&state, CardVisual::Source, &default_transition());
    assert!(style.ends_with("opacity: 0.5"));
    assert!(style.starts_with("transform: translate3d(5px, 5px, 0)"));
}
