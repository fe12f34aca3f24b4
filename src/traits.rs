//! Seams between the calendar and its collaborators

use async_trait::async_trait;

use crate::date::CalendarDate;
use crate::error::FeedError;
use crate::feed::FeedFormat;

/// Somewhere a reservation document can be retrieved from
#[async_trait]
pub trait FeedSource {
    /// Retrieves the whole document.
    /// This is the only suspension point of the crate. It has no timeout and is never retried
    async fn fetch(&self) -> Result<String, FeedError>;

    /// How the fetched document should be parsed
    fn format(&self) -> FeedFormat {
        FeedFormat::Json
    }

    /// A human-readable name for this source, used in log lines
    fn describe(&self) -> String;
}

/// Tells whether a date is a public holiday.
///
/// Implementors must be pure: the same date always gets the same answer
pub trait HolidayProvider {
    /// Returns the name of the holiday, or `None` for a regular day
    fn holiday(&self, date: &CalendarDate) -> Option<String>;
}

impl<F> HolidayProvider for F
where
    F: Fn(&CalendarDate) -> Option<String>,
{
    fn holiday(&self, date: &CalendarDate) -> Option<String> {
        self(date)
    }
}
