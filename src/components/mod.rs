//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render itinerary days and activity cards, reading board config
//! and the sortable coordinator from Leptos context providers.

pub mod activity_card;
pub mod day_section;
pub mod icon;
