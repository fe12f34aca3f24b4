//! A module to parse ICal files

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use ical::parser::ical::component::IcalEvent;

use crate::date::CalendarDate;
use crate::error::FeedError;
use crate::reservation::ReservationRecord;
use crate::store::ReservationStore;
use super::ALL_DAY_LABEL;


struct ParsedEvent {
    date: CalendarDate,
    /// `None` for all-day events
    start: Option<NaiveTime>,
    summary: String,
}

/// Parse an iCal document into a [`ReservationStore`].
///
/// Events are attached to the wall-clock date of their `DTSTART`. Events without a usable `DTSTART` or `SUMMARY` are ignored.
pub fn parse(content: &str) -> Result<ReservationStore, FeedError> {
    let reader = ical::IcalParser::new(content.as_bytes());

    let mut n_calendars = 0;
    let mut events = Vec::new();
    for calendar in reader {
        let calendar = match calendar {
            Err(err) => return Err(FeedError::Parse(format!("Unable to parse iCal data: {}", err))),
            Ok(cal) => cal,
        };
        n_calendars += 1;

        for event in &calendar.events {
            match parse_event(event) {
                Ok(parsed) => events.push(parsed),
                Err(err) => log::warn!("Ignoring an iCal event: {}", err),
            }
        }
    }

    if n_calendars == 0 {
        return Err(FeedError::Parse("no VCALENDAR found".to_string()));
    }
    log::debug!("Parsed {} iCal events", events.len());
    Ok(group_by_date(events))
}

fn property<'a>(event: &'a IcalEvent, name: &str) -> Option<&'a str> {
    event.properties.iter()
        .find(|prop| prop.name == name)
        .and_then(|prop| prop.value.as_deref())
}

fn parse_event(event: &IcalEvent) -> Result<ParsedEvent, String> {
    let summary = match property(event, "SUMMARY") {
        Some(s) if s.trim().is_empty() == false => s.trim().to_string(),
        _ => return Err("missing SUMMARY".to_string()),
    };
    let dtstart = match property(event, "DTSTART") {
        Some(d) => d,
        None => return Err(format!("missing DTSTART for {:?}", summary)),
    };
    let (date, start) = parse_dtstart(dtstart)
        .ok_or_else(|| format!("invalid DTSTART {:?} for {:?}", dtstart, summary))?;

    Ok(ParsedEvent { date, start, summary })
}

/// Parses `YYYYMMDD` (all-day) and `YYYYMMDDTHHMMSS[Z]` values.
/// A trailing `Z` is ignored: times are kept as written
fn parse_dtstart(value: &str) -> Option<(CalendarDate, Option<NaiveTime>)> {
    let day = value.get(0..8)?;
    let date = NaiveDate::parse_from_str(day, "%Y%m%d").ok()?;

    let start = match value.get(8..9) {
        None => None,
        Some("T") => {
            let time = value.get(9..15)?;
            Some(NaiveTime::parse_from_str(time, "%H%M%S").ok()?)
        },
        Some(_) => return None,
    };
    Some((CalendarDate::from(date), start))
}

fn group_by_date(events: Vec<ParsedEvent>) -> ReservationStore {
    let mut by_date: BTreeMap<CalendarDate, Vec<ParsedEvent>> = BTreeMap::new();
    for event in events {
        by_date.entry(event.date).or_default().push(event);
    }

    by_date.into_iter()
        .map(|(date, mut events)| {
            let record = if events.iter().all(|e| e.start.is_none()) {
                if events.len() == 1 {
                    ReservationRecord::Single(events.remove(0).summary)
                } else {
                    ReservationRecord::List(events.into_iter().map(|e| e.summary).collect())
                }
            } else {
                // Stable sort: same-time events keep their file order
                events.sort_by_key(|e| e.start);
                ReservationRecord::TimeTable(events.into_iter()
                    .map(|e| {
                        let label = match e.start {
                            Some(t) => t.format("%H:%M").to_string(),
                            None => ALL_DAY_LABEL.to_string(),
                        };
                        (label, e.summary)
                    })
                    .collect())
            };
            (date.iso_key(), record)
        })
        .collect()
}


#[cfg(test)]
mod test {
    const EXAMPLE_ICAL: &str = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//c-sqr//events//JA
BEGIN:VEVENT
UID:1@hall
DTSTART;VALUE=DATE:20250101
SUMMARY:体操
END:VEVENT
BEGIN:VEVENT
UID:2@hall
DTSTART:20250510T140000
DTEND:20250510T160000
SUMMARY:クラブ
END:VEVENT
BEGIN:VEVENT
UID:3@hall
DTSTART:20250510T100000Z
SUMMARY:サロン
END:VEVENT
BEGIN:VEVENT
UID:4@hall
DTSTART;VALUE=DATE:20250503
SUMMARY:サロン
END:VEVENT
BEGIN:VEVENT
UID:5@hall
DTSTART;VALUE=DATE:20250503
SUMMARY:カフェ
END:VEVENT
BEGIN:VEVENT
UID:6@hall
SUMMARY:no start
END:VEVENT
END:VCALENDAR
"#;

    use super::*;

    fn key(store: &ReservationStore, k: &str) -> ReservationRecord {
        store.get(k).cloned().unwrap()
    }

    #[test]
    fn test_ical_parsing() {
        let store = parse(EXAMPLE_ICAL).unwrap();
        assert_eq!(store.len(), 3);

        assert_eq!(key(&store, "2025-01-01"), ReservationRecord::Single("体操".to_string()));
        assert_eq!(key(&store, "2025-05-03"), ReservationRecord::List(vec!["サロン".to_string(), "カフェ".to_string()]));
        assert_eq!(key(&store, "2025-05-10"), ReservationRecord::TimeTable(vec![
            ("10:00".to_string(), "サロン".to_string()),
            ("14:00".to_string(), "クラブ".to_string()),
        ]));
    }

    #[test]
    fn dtstart_values() {
        let (date, start) = parse_dtstart("20250510T100000Z").unwrap();
        assert_eq!(date.iso_key(), "2025-05-10");
        assert_eq!(start, NaiveTime::from_hms_opt(10, 0, 0));

        assert_eq!(parse_dtstart("20250101").unwrap().1, None);
        assert!(parse_dtstart("2025011").is_none());
        assert!(parse_dtstart("20250101X").is_none());
        assert!(parse_dtstart("20251301").is_none());
    }

    #[test]
    fn not_an_ical_document() {
        assert!(parse("").unwrap_err().is_parse());
    }
}
