use super::*;

#[test]
fn mapped_types_use_dedicated_icon_and_color() {
    let cases = [
        ("sightseeing", IconName::Camera, ColorFamily::Green),
        ("dining", IconName::Utensils, ColorFamily::Orange),
        ("transport", IconName::Car, ColorFamily::Blue),
        ("accommodation", IconName::Building, ColorFamily::Purple),
    ];
    for (raw, icon, color) in cases {
        let style = activity_style(Some(raw));
        assert_eq!(style.icon, icon, "icon for {raw}");
        assert_eq!(style.color, color, "color for {raw}");
        assert_ne!(style.kind, ActivityKind::Other);
    }
}

#[test]
fn unknown_and_missing_types_fall_back_to_pin_and_gray() {
    for raw in [None, Some(""), Some("shopping"), Some("Dining"), Some(" dining")] {
        let style = activity_style(raw);
        assert_eq!(style.kind, ActivityKind::Other, "kind for {raw:?}");
        assert_eq!(style.icon, IconName::MapPin);
        assert_eq!(style.color, ColorFamily::Gray);
    }
}

#[test]
fn from_type_matches_table() {
    assert_eq!(ActivityKind::from_type(Some("transport")), ActivityKind::Transport);
    assert_eq!(ActivityKind::from_type(Some("nightlife")), ActivityKind::Other);
    assert_eq!(ActivityKind::from_type(None), ActivityKind::Other);
}

#[test]
fn activity_style_is_the_style_of_the_resolved_kind() {
    for raw in [Some("sightseeing"), Some("accommodation"), Some("DINING"), None] {
        assert_eq!(activity_style(raw), ActivityKind::from_type(raw).style());
    }
}

#[test]
fn badge_and_pill_classes_carry_color_family() {
    let style = activity_style(Some("dining"));
    assert_eq!(style.badge_class(), "activity-badge activity-badge--orange");
    assert_eq!(style.pill_class(), "activity-card__type activity-type--orange");

    let fallback = activity_style(None);
    assert_eq!(fallback.badge_class(), "activity-badge activity-badge--gray");
}
