//! This module provides the read-only store of hall reservations

use std::collections::HashMap;
use std::convert::TryFrom;
use std::iter::FromIterator;

use serde_json::Value;

use crate::date::CalendarDate;
use crate::error::FeedError;
use crate::feed::FeedFormat;
use crate::reservation::ReservationRecord;
use crate::traits::FeedSource;


/// Reservations, keyed by their `YYYY-MM-DD` date.
///
/// A store is filled once, when the feed is loaded, and never modified afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReservationStore {
    records: HashMap<String, ReservationRecord>,
}

impl ReservationStore {
    /// A store with no reservation at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON feed document.
    ///
    /// The document must be an object. Entries whose value has an unsupported shape are skipped (and logged), they do not invalidate the other entries
    pub fn from_json(content: &str) -> Result<Self, FeedError> {
        let document: Value = serde_json::from_str(content)?;
        let map = match document {
            Value::Object(map) => map,
            other => return Err(FeedError::Parse(format!("expected an object at the top level, got {}", json_kind(&other)))),
        };

        let mut records = HashMap::with_capacity(map.len());
        for (key, value) in &map {
            match ReservationRecord::try_from(value) {
                Ok(record) => { records.insert(key.clone(), record); },
                Err(err) => log::warn!("Ignoring the reservation for {}: {}", key, err),
            }
        }
        log::debug!("Parsed {} reservations ({} entries in the feed)", records.len(), map.len());
        Ok(Self { records })
    }

    /// Parse an iCalendar export of the booking system
    pub fn from_ical(content: &str) -> Result<Self, FeedError> {
        crate::ical::parse(content)
    }

    /// Fetch and parse a feed
    pub async fn load<S>(source: &S) -> Result<Self, FeedError>
    where
        S: FeedSource + ?Sized,
    {
        log::info!("Loading reservations from {}", source.describe());
        let content = source.fetch().await?;
        match source.format() {
            FeedFormat::Json => Self::from_json(&content),
            FeedFormat::ICal => Self::from_ical(&content),
        }
    }

    /// Same as [`load`](Self::load), but falls back to an empty store in case of error.
    ///
    /// The calendar is still usable (holidays are still shown), it just has no reservations
    pub async fn load_or_empty<S>(source: &S) -> Self
    where
        S: FeedSource + ?Sized,
    {
        match Self::load(source).await {
            Ok(store) => store,
            Err(err) => {
                log::error!("Unable to load reservations from {}: {}. Using an empty calendar", source.describe(), err);
                Self::empty()
            }
        }
    }

    /// The reservation of a given date, if any
    pub fn lookup(&self, date: &CalendarDate) -> Option<&ReservationRecord> {
        self.records.get(&date.iso_key())
    }

    /// The reservation for a raw feed key, if any
    pub fn get(&self, key: &str) -> Option<&ReservationRecord> {
        self.records.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.records.keys()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(String, ReservationRecord)> for ReservationStore {
    fn from_iter<I: IntoIterator<Item = (String, ReservationRecord)>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{
        "2025-01-01": "体操",
        "2025-05-03": ["サロン", "カフェ"],
        "2025-05-10": {"10:00": "サロン", "14:00": "クラブ"},
        "2025-05-11": 42
    }"#;

    #[test]
    fn parse_feed() {
        let store = ReservationStore::from_json(FEED).unwrap();
        assert_eq!(store.len(), 3);

        let new_year = CalendarDate::from_ymd0(2025, 0, 1).unwrap();
        assert_eq!(store.lookup(&new_year), Some(&ReservationRecord::Single("体操".to_string())));

        let slots = CalendarDate::from_ymd0(2025, 4, 10).unwrap();
        assert_eq!(store.lookup(&slots), Some(&ReservationRecord::TimeTable(vec![
            ("10:00".to_string(), "サロン".to_string()),
            ("14:00".to_string(), "クラブ".to_string()),
        ])));
    }

    #[test]
    fn lookup_is_exact() {
        let store = ReservationStore::from_json(FEED).unwrap();
        // The malformed entry is dropped
        assert!(store.lookup(&CalendarDate::from_ymd0(2025, 4, 11).unwrap()).is_none());
        assert!(store.lookup(&CalendarDate::from_ymd0(2025, 0, 2).unwrap()).is_none());
        assert!(store.get("2025-5-3").is_none());
        assert!(store.get("2025-05-03").is_some());
    }

    #[test]
    fn wrong_top_level_shape() {
        for doc in &["[]", "\"2025-01-01\"", "null", "{not json"] {
            let err = ReservationStore::from_json(doc).unwrap_err();
            assert!(err.is_parse(), "{} should be a parse error", doc);
        }
        assert!(ReservationStore::from_json("{}").unwrap().is_empty());
    }
}
