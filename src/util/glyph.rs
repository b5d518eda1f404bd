//! Logical icon names and their SVG path data (24×24 stroke glyphs).

#[cfg(test)]
#[path = "glyph_test.rs"]
mod glyph_test;

/// Glyphs used by the itinerary cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    Camera,
    Utensils,
    Car,
    Building,
    MapPin,
    Clock,
    DollarSign,
    GripVertical,
    Calendar,
}

impl IconName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Utensils => "utensils",
            Self::Car => "car",
            Self::Building => "building",
            Self::MapPin => "map-pin",
            Self::Clock => "clock",
            Self::DollarSign => "dollar-sign",
            Self::GripVertical => "grip-vertical",
            Self::Calendar => "calendar",
        }
    }

    /// Stroke paths for a `0 0 24 24` viewBox.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Camera => &[
                "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z",
                "M15 13a3 3 0 1 1-6 0a3 3 0 1 1 6 0",
            ],
            Self::Utensils => &[
                "M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2",
                "M7 2v20",
                "M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3Zm0 0v7",
            ],
            Self::Car => &[
                "M19 17h2c.6 0 1-.4 1-1v-3c0-.9-.7-1.7-1.5-1.9C18.7 10.6 16 10 16 10s-1.3-1.4-2.2-2.3c-.5-.4-1.1-.7-1.8-.7H5c-.6 0-1.1.4-1.4.9l-1.4 2.9A3.7 3.7 0 0 0 2 12v4c0 .6.4 1 1 1h2",
                "M7 17h8",
                "M9 17a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
                "M19 17a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
            ],
            Self::Building => &[
                "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
                "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
                "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
                "M10 6h4",
                "M10 10h4",
                "M10 14h4",
                "M10 18h4",
            ],
            Self::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M15 10a3 3 0 1 1-6 0a3 3 0 1 1 6 0",
            ],
            Self::Clock => &["M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0", "M12 6v6l4 2"],
            Self::DollarSign => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
            Self::GripVertical => &[
                "M10 5a1 1 0 1 1-2 0a1 1 0 1 1 2 0",
                "M10 12a1 1 0 1 1-2 0a1 1 0 1 1 2 0",
                "M10 19a1 1 0 1 1-2 0a1 1 0 1 1 2 0",
                "M16 5a1 1 0 1 1-2 0a1 1 0 1 1 2 0",
                "M16 12a1 1 0 1 1-2 0a1 1 0 1 1 2 0",
                "M16 19a1 1 0 1 1-2 0a1 1 0 1 1 2 0",
            ],
            Self::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
        }
    }
}

/// Rendered glyph size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconSize {
    /// 12px, inline with meta text.
    #[default]
    Small,
    /// 16px, type badges.
    Medium,
}

impl IconSize {
    pub fn px(self) -> u32 {
        match self {
            Self::Small => 12,
            Self::Medium => 16,
        }
    }
}
