//! Activity type -> icon and color lookup.
//!
//! DESIGN
//! ======
//! A static name table feeds `ActivityKind`, with `Other` as the explicit
//! default. Unknown or missing types resolve to it silently; matching is exact
//! and case-sensitive.

#[cfg(test)]
#[path = "activity_style_test.rs"]
mod activity_style_test;

use crate::util::glyph::IconName;

/// Categories with a dedicated look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Sightseeing,
    Dining,
    Transport,
    Accommodation,
    Other,
}

/// Color family applied to badges and type pills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFamily {
    Green,
    Orange,
    Blue,
    Purple,
    Gray,
}

impl ColorFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivityStyle {
    pub kind: ActivityKind,
    pub icon: IconName,
    pub color: ColorFamily,
}

const TYPE_TABLE: &[(&str, ActivityKind)] = &[
    ("sightseeing", ActivityKind::Sightseeing),
    ("dining", ActivityKind::Dining),
    ("transport", ActivityKind::Transport),
    ("accommodation", ActivityKind::Accommodation),
];

impl ActivityKind {
    /// Total over every input; anything not in the table is `Other`.
    pub fn from_type(raw_type: Option<&str>) -> Self {
        raw_type
            .and_then(|t| TYPE_TABLE.iter().find(|(name, _)| *name == t))
            .map_or(Self::Other, |(_, kind)| *kind)
    }

    pub fn style(self) -> ActivityStyle {
        let (icon, color) = match self {
            Self::Sightseeing => (IconName::Camera, ColorFamily::Green),
            Self::Dining => (IconName::Utensils, ColorFamily::Orange),
            Self::Transport => (IconName::Car, ColorFamily::Blue),
            Self::Accommodation => (IconName::Building, ColorFamily::Purple),
            Self::Other => (IconName::MapPin, ColorFamily::Gray),
        };
        ActivityStyle { kind: self, icon, color }
    }
}

/// Resolve the style for a raw activity `type`.
pub fn activity_style(raw_type: Option<&str>) -> ActivityStyle {
    ActivityKind::from_type(raw_type).style()
}

impl ActivityStyle {
    /// Classes for the small icon badge over the thumbnail.
    pub fn badge_class(&self) -> String {
        format!("activity-badge activity-badge--{}", self.color.as_str())
    }

    /// Classes for the type-label pill in the card footer.
    pub fn pill_class(&self) -> String {
        format!("activity-card__type activity-type--{}", self.color.as_str())
    }
}
