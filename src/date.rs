//! Calendar dates (wall-clock days, without any time-of-day component)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// A day of the calendar, identified by its year, 0-based month and day of month.
///
/// Months are numbered 0 (January) to 11 (December), days 1 to 31.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    inner: NaiveDate,
}

impl CalendarDate {
    /// Returns `None` in case the triple does not designate an existing day
    pub fn from_ymd0(year: i32, month0: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month0 + 1, day).map(Self::from)
    }

    /// The first day of a month
    pub fn first_of_month(year: i32, month0: u32) -> Option<Self> {
        Self::from_ymd0(year, month0, 1)
    }

    /// The current local date
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month0(&self) -> u32 {
        self.inner.month0()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    /// Weekday, 0 being Sunday
    pub fn weekday0(&self) -> u32 {
        self.inner.weekday().num_days_from_sunday()
    }

    /// The `YYYY-MM-DD` key used by reservation feeds
    pub fn iso_key(&self) -> String {
        self.inner.format(ISO_FORMAT).to_string()
    }

    /// The day before, if it is representable
    pub fn pred(&self) -> Option<Self> {
        self.inner.pred_opt().map(Self::from)
    }

    /// The day after, if it is representable
    pub fn succ(&self) -> Option<Self> {
        self.inner.succ_opt().map(Self::from)
    }

    /// Whether both dates are in the same month of the same year
    pub fn same_month_as(&self, year: i32, month0: u32) -> bool {
        self.year() == year && self.month0() == month0
    }

    pub fn as_naive(&self) -> &NaiveDate {
        &self.inner
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(inner: NaiveDate) -> Self {
        Self { inner }
    }
}

impl FromStr for CalendarDate {
    type Err = chrono::ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, ISO_FORMAT).map(Self::from)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.iso_key())
    }
}

/// Used to support serde
impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.iso_key())
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<CalendarDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


/// A month of a given year. Ordering is chronological
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month0: u32,
}

impl YearMonth {
    pub fn new(year: i32, month0: u32) -> Self {
        let (year, month0) = add_months(year, month0, 0);
        Self { year, month0 }
    }

    pub fn of(date: &CalendarDate) -> Self {
        Self { year: date.year(), month0: date.month0() }
    }

    /// The month `delta` months later (or earlier, for negative values)
    pub fn offset(&self, delta: i32) -> Self {
        let (year, month0) = add_months(self.year, self.month0, delta);
        Self { year, month0 }
    }

    pub fn first_day(&self) -> Option<CalendarDate> {
        CalendarDate::first_of_month(self.year, self.month0)
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        date.same_month_as(self.year, self.month0)
    }
}

/// Adds `delta` months to `(year, month0)`, carrying the year on overflow and underflow
pub fn add_months(year: i32, month0: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + month0 as i32 + delta;
    (total.div_euclid(12), total.rem_euclid(12) as u32)
}

/// Number of days of a month (0 for an unrepresentable month)
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month0) = add_months(year, month0, 1);
    match (CalendarDate::first_of_month(year, month0), CalendarDate::first_of_month(next_year, next_month0)) {
        (Some(first), Some(next)) => (*next.as_naive() - *first.as_naive()).num_days() as u32,
        _ => 0,
    }
}

/// Weekday of the first day of a month, 0 being Sunday
pub fn first_weekday(year: i32, month0: u32) -> u32 {
    CalendarDate::first_of_month(year, month0)
        .map(|d| d.weekday0())
        .unwrap_or(0)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_key_is_zero_padded() {
        let date = CalendarDate::from_ymd0(2025, 4, 3).unwrap();
        assert_eq!(date.iso_key(), "2025-05-03");
        assert_eq!("2025-05-03".parse::<CalendarDate>().unwrap(), date);
    }

    #[test]
    fn invalid_dates() {
        assert!(CalendarDate::from_ymd0(2025, 1, 29).is_none());
        assert!(CalendarDate::from_ymd0(2024, 1, 29).is_some());
        assert!(CalendarDate::from_ymd0(2025, 12, 1).is_none());
        assert!("2025-13-01".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn month_carry() {
        assert_eq!(add_months(2025, 11, 1), (2026, 0));
        assert_eq!(add_months(2025, 0, -1), (2024, 11));
        assert_eq!(add_months(2025, 5, 12), (2026, 5));
        assert_eq!(add_months(2025, 5, -18), (2023, 11));
    }

    #[test]
    fn year_month_order() {
        let jan = YearMonth::new(2025, 0);
        assert_eq!(jan.offset(-1), YearMonth::new(2024, 11));
        assert!(jan.offset(-1) < jan);
        assert!(jan.offset(12) > jan.offset(11));
        assert_eq!(jan.first_day().unwrap().iso_key(), "2025-01-01");
        assert!(jan.contains(&CalendarDate::from_ymd0(2025, 0, 31).unwrap()));
        assert!(jan.contains(&CalendarDate::from_ymd0(2024, 0, 31).unwrap()) == false);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2025, 1), 28);
        assert_eq!(days_in_month(2025, 11), 31);
        assert_eq!(days_in_month(2025, 3), 30);
    }

    #[test]
    fn weekdays() {
        // 2025-06-01 is a Sunday, 2025-01-01 a Wednesday
        assert_eq!(first_weekday(2025, 5), 0);
        assert_eq!(first_weekday(2025, 0), 3);
    }
}
