//! Errors raised at the data boundary (itinerary JSON and config overrides).
//!
//! Rendering itself never fails; these only surface when a host hands the
//! board malformed input.

/// Failure to load or validate itinerary data.
#[derive(Debug, thiserror::Error)]
pub enum ItineraryError {
    #[error("invalid itinerary JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("activity id `{id}` appears more than once (days {first_day} and {second_day})")]
    DuplicateActivityId { id: String, first_day: String, second_day: String },
    #[error("day number `{0}` appears more than once")]
    DuplicateDay(String),
    #[error("activity `{title}` on day {day} has an empty id")]
    EmptyActivityId { day: String, title: String },
}
