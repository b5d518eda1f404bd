use super::*;

#[test]
fn default_config_uses_placeholder_and_transform_transition() {
    let config = ItineraryConfig::default();
    assert_eq!(config.placeholder_image_url, DEFAULT_PLACEHOLDER_IMAGE_URL);
    assert_eq!(config.default_transition().to_css(), "transform 200ms ease");
    assert_eq!(config.instructions_id, "itinerary-dnd-instructions");
}

#[test]
fn from_json_applies_partial_overrides() {
    let config = ItineraryConfig::from_json(r#"{"transition_ms": 350, "transition_easing": "ease-out"}"#).unwrap();
    assert_eq!(config.default_transition().to_css(), "transform 350ms ease-out");
    assert_eq!(config.placeholder_image_url, DEFAULT_PLACEHOLDER_IMAGE_URL);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(ItineraryConfig::from_json("{}").unwrap(), ItineraryConfig::default());
}

#[test]
fn from_json_blank_strings_fall_back_to_defaults() {
    let config =
        ItineraryConfig::from_json(r#"{"placeholder_image_url": "  ", "instructions_id": ""}"#).unwrap();
    assert_eq!(config.placeholder_image_url, DEFAULT_PLACEHOLDER_IMAGE_URL);
    assert_eq!(config.instructions_id, DEFAULT_INSTRUCTIONS_ID);
}

#[test]
fn from_json_rejects_wrong_types() {
    let err = ItineraryConfig::from_json(r#"{"transition_ms": "fast"}"#).unwrap_err();
    assert!(matches!(err, ItineraryError::Json(_)));
}
