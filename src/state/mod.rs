//! Itinerary data and drag coordination state.

pub mod drag;
pub mod itinerary;
