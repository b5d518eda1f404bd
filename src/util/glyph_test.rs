use super::*;

const ALL: [IconName; 9] = [
    IconName::Camera,
    IconName::Utensils,
    IconName::Car,
    IconName::Building,
    IconName::MapPin,
    IconName::Clock,
    IconName::DollarSign,
    IconName::GripVertical,
    IconName::Calendar,
];

#[test]
fn every_icon_has_paths() {
    for icon in ALL {
        assert!(!icon.paths().is_empty(), "{} has no paths", icon.as_str());
        assert!(icon.paths().iter().all(|d| d.starts_with('M')), "{} path must start with a move", icon.as_str());
    }
}

#[test]
fn icon_names_are_unique_kebab_case() {
    let names: std::collections::HashSet<&str> = ALL.iter().map(|i| i.as_str()).collect();
    assert_eq!(names.len(), ALL.len());
    assert!(names.iter().all(|n| n.chars().all(|c| c.is_ascii_lowercase() || c == '-')));
}

#[test]
fn icon_sizes_match_badge_and_meta_scale() {
    assert_eq!(IconSize::default(), IconSize::Small);
    assert_eq!(IconSize::Small.px(), 12);
    assert_eq!(IconSize::Medium.px(), 16);
}
