//! Public holidays shown on the calendar
//!
//! The calendar only consumes a [`HolidayProvider`]. [`JapaneseHolidays`] is the provider of the hall's calendar.

use std::collections::HashMap;

use chrono::{Datelike, Weekday};

use crate::date::CalendarDate;
use crate::traits::HolidayProvider;

const SUBSTITUTE_HOLIDAY: &str = "振替休日";
const CITIZENS_HOLIDAY: &str = "国民の休日";


/// A provider that knows no holiday
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHolidays;

impl HolidayProvider for NoHolidays {
    fn holiday(&self, _date: &CalendarDate) -> Option<String> {
        None
    }
}


/// A provider backed by an explicit list of holidays
#[derive(Clone, Debug, Default)]
pub struct HolidayTable {
    holidays: HashMap<CalendarDate, String>,
}

impl HolidayTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, date: CalendarDate, name: &str) -> Self {
        self.holidays.insert(date, name.to_string());
        self
    }
}

impl HolidayProvider for HolidayTable {
    fn holiday(&self, date: &CalendarDate) -> Option<String> {
        self.holidays.get(date).cloned()
    }
}


/// Japanese national holidays, as defined by the 祝日法 since 2000.
///
/// This includes Happy-Monday holidays, equinox days (from the usual 1980-2099 approximation),
/// substitute holidays and citizens' holidays. The 2019 enthronement days and the 2020/2021 Olympic relocations are special-cased.
#[derive(Clone, Copy, Debug, Default)]
pub struct JapaneseHolidays;

impl HolidayProvider for JapaneseHolidays {
    fn holiday(&self, date: &CalendarDate) -> Option<String> {
        if let Some(name) = national_holiday(date) {
            return Some(name.to_string());
        }

        // A holiday falling on a Sunday moves to the next non-holiday day
        let mut previous = date.pred();
        while let Some(day) = previous {
            if national_holiday(&day).is_none() {
                break;
            }
            if day.as_naive().weekday() == Weekday::Sun {
                return Some(SUBSTITUTE_HOLIDAY.to_string());
            }
            previous = day.pred();
        }

        // A regular day between two holidays
        let before = date.pred().and_then(|d| national_holiday(&d));
        let after = date.succ().and_then(|d| national_holiday(&d));
        if before.is_some() && after.is_some() {
            return Some(CITIZENS_HOLIDAY.to_string());
        }

        None
    }
}

/// Holidays named by the law (without substitute and citizens' holidays)
fn national_holiday(date: &CalendarDate) -> Option<&'static str> {
    let year = date.year();
    if year < 2000 {
        return None;
    }
    let month = date.month0() + 1;
    let day = date.day();
    let monday_rank = if date.as_naive().weekday() == Weekday::Mon { Some((day - 1) / 7 + 1) } else { None };

    if let Some(name) = one_off_exception(year, month, day) {
        return name;
    }

    match (month, day) {
        (1, 1) => Some("元日"),
        (1, _) if monday_rank == Some(2) => Some("成人の日"),
        (2, 11) => Some("建国記念の日"),
        (2, 23) if year >= 2020 => Some("天皇誕生日"),
        (3, d) if d == spring_equinox(year) => Some("春分の日"),
        (4, 29) => Some(if year >= 2007 { "昭和の日" } else { "みどりの日" }),
        (5, 3) => Some("憲法記念日"),
        (5, 4) if year >= 2007 => Some("みどりの日"),
        (5, 5) => Some("こどもの日"),
        (7, _) if year >= 2003 && monday_rank == Some(3) => Some("海の日"),
        (7, 20) if year < 2003 => Some("海の日"),
        (8, 11) if year >= 2016 => Some("山の日"),
        (9, _) if year >= 2003 && monday_rank == Some(3) => Some("敬老の日"),
        (9, 15) if year < 2003 => Some("敬老の日"),
        (9, d) if d == autumn_equinox(year) => Some("秋分の日"),
        (10, _) if monday_rank == Some(2) => Some(if year >= 2020 { "スポーツの日" } else { "体育の日" }),
        (11, 3) => Some("文化の日"),
        (11, 23) => Some("勤労感謝の日"),
        (12, 23) if year < 2019 => Some("天皇誕生日"),
        _ => None,
    }
}

/// One-off holidays (2019 enthronement) and holidays moved for the Tokyo Olympics.
/// `Some(None)` means the usual holiday of that day was moved away
fn one_off_exception(year: i32, month: u32, day: u32) -> Option<Option<&'static str>> {
    match (year, month, day) {
        (2019, 5, 1) => Some(Some("天皇の即位の日")),
        (2019, 10, 22) => Some(Some("即位礼正殿の儀の行われる日")),
        (2020, 7, 23) | (2021, 7, 22) => Some(Some("海の日")),
        (2020, 7, 24) | (2021, 7, 23) => Some(Some("スポーツの日")),
        (2020, 8, 10) | (2021, 8, 8) => Some(Some("山の日")),
        (2020, 7, 20) | (2020, 8, 11) | (2020, 10, 12)
            | (2021, 7, 19) | (2021, 8, 11) | (2021, 10, 11) => Some(None),
        _ => None,
    }
}

fn equinox_day(year: i32, base: f64) -> u32 {
    let offset = (year - 1980) as f64;
    (base + 0.242194 * offset - (offset / 4.0).floor()).floor() as u32
}

fn spring_equinox(year: i32) -> u32 {
    equinox_day(year, 20.8431)
}

fn autumn_equinox(year: i32) -> u32 {
    equinox_day(year, 23.2488)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn name(y: i32, m: u32, d: u32) -> Option<String> {
        JapaneseHolidays.holiday(&CalendarDate::from_ymd0(y, m - 1, d).unwrap())
    }

    #[test]
    fn fixed_holidays() {
        assert_eq!(name(2025, 1, 1).as_deref(), Some("元日"));
        assert_eq!(name(2025, 2, 11).as_deref(), Some("建国記念の日"));
        assert_eq!(name(2025, 11, 3).as_deref(), Some("文化の日"));
        assert_eq!(name(2025, 1, 2), None);
    }

    #[test]
    fn happy_mondays() {
        assert_eq!(name(2025, 1, 13).as_deref(), Some("成人の日"));
        assert_eq!(name(2025, 7, 21).as_deref(), Some("海の日"));
        assert_eq!(name(2025, 9, 15).as_deref(), Some("敬老の日"));
        assert_eq!(name(2025, 10, 13).as_deref(), Some("スポーツの日"));
    }

    #[test]
    fn equinoxes() {
        assert_eq!(name(2025, 3, 20).as_deref(), Some("春分の日"));
        assert_eq!(name(2025, 9, 23).as_deref(), Some("秋分の日"));
        assert_eq!(name(2024, 3, 20).as_deref(), Some("春分の日"));
        assert_eq!(name(2024, 9, 22).as_deref(), Some("秋分の日"));
    }

    #[test]
    fn substitute_holidays() {
        // 2025-02-23 is a Sunday
        assert_eq!(name(2025, 2, 24).as_deref(), Some(SUBSTITUTE_HOLIDAY));
        // 2025-05-04 is a Sunday, 5/5 is a holiday too: the substitute is on 5/6
        assert_eq!(name(2025, 5, 6).as_deref(), Some(SUBSTITUTE_HOLIDAY));
        assert_eq!(name(2025, 5, 7), None);
    }

    #[test]
    fn citizens_holiday() {
        // 敬老の日 on 2026-09-21 and 秋分の日 on 2026-09-23
        assert_eq!(name(2026, 9, 22).as_deref(), Some(CITIZENS_HOLIDAY));
    }

    #[test]
    fn olympics() {
        assert_eq!(name(2021, 7, 22).as_deref(), Some("海の日"));
        assert_eq!(name(2021, 7, 19), None);
        assert_eq!(name(2021, 8, 9).as_deref(), Some(SUBSTITUTE_HOLIDAY));
    }

    #[test]
    fn table() {
        let date = CalendarDate::from_ymd0(2025, 0, 1).unwrap();
        let table = HolidayTable::new().with(date, "元日");
        assert_eq!(table.holiday(&date).as_deref(), Some("元日"));
        assert_eq!(table.holiday(&date.succ().unwrap()), None);
        assert_eq!(NoHolidays.holiday(&date), None);
    }
}
