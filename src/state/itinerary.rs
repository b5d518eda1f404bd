//! Itinerary data handed to the board by its host page.
//!
//! DESIGN
//! ======
//! The JSON shape mirrors the props the cards were originally fed: camelCase
//! keys, ids and day numbers that may arrive as numbers, and optional display
//! fields whose presence follows JavaScript truthiness (`""`, `0`, `false` and
//! `null` all mean "not shown").

#[cfg(test)]
#[path = "itinerary_test.rs"]
mod itinerary_test;

use std::collections::{HashMap, HashSet};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ItineraryError;

/// One itinerary entry: a sightseeing stop, meal, transfer, or lodging.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Identity key for list reordering; stable across renders.
    #[serde(deserialize_with = "deserialize_required_text")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    /// Free-form display time, e.g. `"9:00 AM"`.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub time: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub location: String,
    /// Open-ended category string; see [`crate::util::activity_style`].
    #[serde(rename = "type", default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// One itinerary day: an ordered container of activities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    #[serde(deserialize_with = "deserialize_required_text")]
    pub day_number: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub date: String,
    /// Itinerary sequence. Rendered exactly in this order.
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Day {
    /// Identity of this day within a board.
    pub fn key(&self) -> &str {
        &self.day_number
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    pub fn position_of(&self, activity_id: &str) -> Option<usize> {
        self.activities.iter().position(|a| a.id == activity_id)
    }

    pub fn contains(&self, activity_id: &str) -> bool {
        self.position_of(activity_id).is_some()
    }

    /// Move `active` into the slot currently held by `over`, shifting the
    /// activities in between (array-move semantics).
    ///
    /// Returns the `(from, to)` indices when the order changed.
    pub fn move_activity(&mut self, active: &str, over: &str) -> Option<(usize, usize)> {
        let from = self.position_of(active)?;
        let to = self.position_of(over)?;
        if from == to {
            return None;
        }
        let moved = self.activities.remove(from);
        self.activities.insert(to, moved);
        Some((from, to))
    }
}

/// Result of applying a drop to a list of days.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reorder {
    Moved { day: String, from: usize, to: usize },
    /// Dropped onto itself, or no drop target.
    Unchanged,
    /// Source and target live in different days; cross-day moves are not supported.
    CrossDay,
    /// One of the ids is not on the board.
    Unknown,
}

/// Apply a drop of `active` onto `over` within whichever day holds both.
pub fn reorder_within_day(days: &mut [Day], active: &str, over: Option<&str>) -> Reorder {
    let Some(over) = over else {
        return Reorder::Unchanged;
    };
    if active == over {
        return Reorder::Unchanged;
    }
    let Some(source) = days.iter().position(|d| d.contains(active)) else {
        return Reorder::Unknown;
    };
    if !days.iter().any(|d| d.contains(over)) {
        return Reorder::Unknown;
    }
    let day = &mut days[source];
    match day.move_activity(active, over) {
        Some((from, to)) => Reorder::Moved { day: day.day_number.clone(), from, to },
        None => Reorder::CrossDay,
    }
}

/// A whole trip: the ordered days shown on one board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    pub days: Vec<Day>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItineraryDocument {
    Days(Vec<Day>),
    Wrapped { days: Vec<Day> },
}

impl Itinerary {
    /// Parse either a bare array of days or `{ "days": [...] }`, then validate.
    pub fn from_json(raw: &str) -> Result<Self, ItineraryError> {
        let days = match serde_json::from_str::<ItineraryDocument>(raw)? {
            ItineraryDocument::Days(days) | ItineraryDocument::Wrapped { days } => days,
        };
        let itinerary = Self { days };
        itinerary.validate()?;
        Ok(itinerary)
    }

    /// Day numbers and card identity keys must be unique across the board;
    /// activity ids must be non-empty.
    pub fn validate(&self) -> Result<(), ItineraryError> {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        let mut day_keys: HashSet<&str> = HashSet::new();
        for day in &self.days {
            if !day_keys.insert(day.key()) {
                return Err(ItineraryError::DuplicateDay(day.day_number.clone()));
            }
            for activity in &day.activities {
                if activity.id.trim().is_empty() {
                    return Err(ItineraryError::EmptyActivityId {
                        day: day.day_number.clone(),
                        title: activity.title.clone(),
                    });
                }
                if let Some(first_day) = seen.insert(&activity.id, &day.day_number) {
                    return Err(ItineraryError::DuplicateActivityId {
                        id: activity.id.clone(),
                        first_day: first_day.to_owned(),
                        second_day: day.day_number.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn activity_count(&self) -> usize {
        self.days.iter().map(Day::activity_count).sum()
    }
}

/// Convert a JSON scalar into display text, following JavaScript truthiness.
fn truthy_text(value: serde_json::Value) -> Result<Option<String>, String> {
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => Ok(None),
        serde_json::Value::Bool(true) => Ok(Some("true".to_owned())),
        serde_json::Value::String(text) if text.is_empty() => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Number(number) if number.as_f64() == Some(0.0) => Ok(None),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err("expected a string, number, or boolean".to_owned())
        }
    }
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    truthy_text(value).map_err(D::Error::custom)
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err(D::Error::custom("expected a string, number, or boolean"))
        }
    }
}

fn deserialize_required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected a string or number")),
    }
}
