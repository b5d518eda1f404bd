//! Board configuration provided through Leptos context.
//!
//! Hosts may hand over a JSON object with any subset of the fields; missing
//! fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ItineraryError;
use crate::state::drag::Transition;

/// Substituted once when an activity image fails to load.
pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=300&h=200&fit=crop&crop=center";
pub const DEFAULT_TRANSITION_MS: u32 = 200;
pub const DEFAULT_TRANSITION_EASING: &str = "ease";
/// Element id of the screen-reader drag instructions.
pub const DEFAULT_INSTRUCTIONS_ID: &str = "itinerary-dnd-instructions";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryConfig {
    pub placeholder_image_url: String,
    pub transition_ms: u32,
    pub transition_easing: String,
    pub instructions_id: String,
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self {
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE_URL.to_owned(),
            transition_ms: DEFAULT_TRANSITION_MS,
            transition_easing: DEFAULT_TRANSITION_EASING.to_owned(),
            instructions_id: DEFAULT_INSTRUCTIONS_ID.to_owned(),
        }
    }
}

impl ItineraryConfig {
    /// Parse overrides. Blank strings fall back to their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ItineraryError> {
        let mut config: Self = serde_json::from_str(raw)?;
        let defaults = Self::default();
        if config.placeholder_image_url.trim().is_empty() {
            config.placeholder_image_url = defaults.placeholder_image_url;
        }
        if config.transition_easing.trim().is_empty() {
            config.transition_easing = defaults.transition_easing;
        }
        if config.instructions_id.trim().is_empty() {
            config.instructions_id = defaults.instructions_id;
        }
        Ok(config)
    }

    /// Transition used when the coordinator does not report one.
    pub fn default_transition(&self) -> Transition {
        Transition::transform(self.transition_ms, self.transition_easing.clone())
    }
}

/// Read the board config from context, falling back to defaults.
pub fn use_config() -> ItineraryConfig {
    use_context::<ItineraryConfig>().unwrap_or_default()
}
