//! Hall reservations, as they are attached to a calendar date

use std::convert::TryFrom;

use serde::Serialize;
use serde_json::Value;

use crate::utils::strip_markup;

/// What the reservation feed says about a given date.
///
/// A date with no reservation has no record at all: there is no "empty" variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content")]
pub enum ReservationRecord {
    /// One free-text description
    Single(String),
    /// Several entries for the same date, in display order
    List(Vec<String>),
    /// Labelled slots (usually a start time), in feed order. Labels are not sorted
    TimeTable(Vec<(String, String)>),
}

impl ReservationRecord {
    /// Every text of this record, in display order.
    ///
    /// Time-table labels are not part of it, only the slot descriptions
    pub fn texts(&self) -> Vec<&str> {
        match self {
            ReservationRecord::Single(text) => vec![text.as_str()],
            ReservationRecord::List(entries) => entries.iter().map(|e| e.as_str()).collect(),
            ReservationRecord::TimeTable(slots) => slots.iter().map(|(_, text)| text.as_str()).collect(),
        }
    }

    /// The lines shown in a day cell when the calendar is in detail mode
    pub fn display_lines(&self) -> Vec<String> {
        match self {
            ReservationRecord::Single(text) => vec![text.clone()],
            ReservationRecord::List(entries) => entries.clone(),
            ReservationRecord::TimeTable(slots) => slots.iter()
                .map(|(label, text)| format!("{}: {}", label, text))
                .collect(),
        }
    }

    /// A plain-text, single-line summary, with markup removed
    pub fn summary(&self) -> String {
        self.display_lines().iter()
            .map(|line| strip_markup(line))
            .filter(|line| line.is_empty() == false)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        match self {
            ReservationRecord::Single(_) => 1,
            ReservationRecord::List(entries) => entries.len(),
            ReservationRecord::TimeTable(slots) => slots.len(),
        }
    }
}

impl TryFrom<&Value> for ReservationRecord {
    type Error = String;

    /// Accepts a string, an array of strings, or an object whose values are strings
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(ReservationRecord::Single(text.clone())),
            Value::Array(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(text) => entries.push(text.clone()),
                        other => return Err(format!("list entries must be strings, got {}", other)),
                    }
                }
                Ok(ReservationRecord::List(entries))
            },
            Value::Object(map) => {
                let mut slots = Vec::with_capacity(map.len());
                for (label, item) in map {
                    match item {
                        Value::String(text) => slots.push((label.clone(), text.clone())),
                        other => return Err(format!("slot {:?} must be a string, got {}", label, other)),
                    }
                }
                Ok(ReservationRecord::TimeTable(slots))
            },
            other => Err(format!("unsupported reservation shape: {}", other)),
        }
    }
}
