//! The detail panel, where the reservations of the selected date are shown in full

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::config::{self, InputKind};
use crate::date::CalendarDate;
use crate::reservation::ReservationRecord;

/// Minimum width of the time column of time-tables, in characters
const LABEL_WIDTH: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum DetailBody {
    /// A message rather than reservation content
    Notice(String),
    Single(String),
    /// One block per entry
    Entries(Vec<String>),
    /// One `(label, text)` row per slot
    Rows(Vec<(String, String)>),
}

/// The content of the detail panel
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetailText {
    /// The date being described, absent for the prompt
    pub heading: Option<String>,
    pub body: DetailBody,
}

impl Display for DetailText {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        if let Some(heading) = &self.heading {
            writeln!(f, "{}", heading)?;
        }
        match &self.body {
            DetailBody::Notice(text) | DetailBody::Single(text) => writeln!(f, "{}", text),
            DetailBody::Entries(entries) => {
                for entry in entries {
                    writeln!(f, "{}", entry)?;
                }
                Ok(())
            },
            DetailBody::Rows(rows) => {
                for (label, text) in rows {
                    writeln!(f, "{:<width$} {}", label, text, width = LABEL_WIDTH)?;
                }
                Ok(())
            },
        }
    }
}

/// Turns reservations into detail panel content
#[derive(Clone, Debug)]
pub struct DetailPresenter {
    no_reservation: String,
    prompt: String,
}

impl DetailPresenter {
    pub fn new(input: InputKind) -> Self {
        Self {
            no_reservation: config::read(&config::NO_RESERVATION_MESSAGE),
            prompt: config::prompt_message(input),
        }
    }

    /// Describe the reservations of a date (`record` being `None` if there is none)
    pub fn describe(&self, date: &CalendarDate, record: Option<&ReservationRecord>) -> DetailText {
        let body = match record {
            None => DetailBody::Notice(self.no_reservation.clone()),
            Some(ReservationRecord::Single(text)) => DetailBody::Single(text.clone()),
            Some(ReservationRecord::List(entries)) => DetailBody::Entries(entries.clone()),
            Some(ReservationRecord::TimeTable(slots)) => DetailBody::Rows(slots.clone()),
        };
        DetailText { heading: Some(date.iso_key()), body }
    }

    /// The panel content when no date is being described
    pub fn prompt(&self) -> DetailText {
        DetailText { heading: None, body: DetailBody::Notice(self.prompt.clone()) }
    }
}

impl Default for DetailPresenter {
    fn default() -> Self {
        Self::new(InputKind::Pointer)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> CalendarDate {
        CalendarDate::from_ymd0(2025, 4, 10).unwrap()
    }

    #[test]
    fn no_reservation() {
        let detail = DetailPresenter::default().describe(&date(), None);
        assert_eq!(detail.heading.as_deref(), Some("2025-05-10"));
        assert_eq!(detail.body, DetailBody::Notice("予約はありません。".to_string()));
        assert_eq!(detail.to_string(), "2025-05-10\n予約はありません。\n");
    }

    #[test]
    fn time_table_rows() {
        let record = ReservationRecord::TimeTable(vec![
            ("10:00".to_string(), "サロン".to_string()),
            ("14:00".to_string(), "クラブ".to_string()),
        ]);
        let detail = DetailPresenter::default().describe(&date(), Some(&record));
        assert_eq!(detail.body, DetailBody::Rows(vec![
            ("10:00".to_string(), "サロン".to_string()),
            ("14:00".to_string(), "クラブ".to_string()),
        ]));
        assert_eq!(detail.to_string(), "2025-05-10\n10:00 サロン\n14:00 クラブ\n");
    }

    #[test]
    fn entries() {
        let record = ReservationRecord::List(vec!["サロン".to_string(), "カフェ".to_string()]);
        let detail = DetailPresenter::default().describe(&date(), Some(&record));
        assert_eq!(detail.to_string(), "2025-05-10\nサロン\nカフェ\n");

        let single = DetailPresenter::default().describe(&date(), Some(&ReservationRecord::Single("体操".to_string())));
        assert_eq!(single.body, DetailBody::Single("体操".to_string()));
    }

    #[test]
    fn prompts() {
        assert_eq!(DetailPresenter::new(InputKind::Touch).prompt().to_string(), "日付をタップすると予約内容が表示されます。\n");
        assert_eq!(DetailPresenter::default().prompt().heading, None);
    }
}
