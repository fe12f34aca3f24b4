//! The rendered month grid

use bitflags::bitflags;
use serde::Serialize;

use crate::date::CalendarDate;
use crate::reservation::ReservationRecord;

bitflags! {
    #[derive(Serialize)]
    pub struct CellFlags: u8 {
        /// The day is a public holiday
        const HOLIDAY = 1;
        /// The day has a reservation
        const RESERVED = 2;
        /// The day is the selected date
        const SELECTED = 4;
    }
}

/// The styling class of a cell, regardless of selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellClass {
    Plain,
    Holiday,
    Reserved,
    HolidayReserved,
}

/// What is shown under the day number, besides the holiday name
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellContent {
    /// No reservation
    Empty,
    /// Compact mode: the glyph of the reservation
    Glyph(String),
    /// Detail mode: the whole reservation, in display order.
    /// Escaping its texts is up to the rendering layer
    Reservation(ReservationRecord),
}

/// One day of the grid
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DayCell {
    pub date: CalendarDate,
    pub day: u32,
    pub holiday: Option<String>,
    pub flags: CellFlags,
    pub content: CellContent,
    /// Hover/accessibility label: holiday name and/or a plain-text summary of the reservation
    pub title: Option<String>,
}

impl DayCell {
    pub fn is_holiday(&self) -> bool {
        self.flags.contains(CellFlags::HOLIDAY)
    }

    pub fn is_reserved(&self) -> bool {
        self.flags.contains(CellFlags::RESERVED)
    }

    pub fn is_selected(&self) -> bool {
        self.flags.contains(CellFlags::SELECTED)
    }

    pub fn class(&self) -> CellClass {
        match (self.is_holiday(), self.is_reserved()) {
            (true, true) => CellClass::HolidayReserved,
            (true, false) => CellClass::Holiday,
            (false, true) => CellClass::Reserved,
            (false, false) => CellClass::Plain,
        }
    }
}

/// A row of seven cells, Sunday first. `None` is a blank cell outside of the month
pub type Week = Vec<Option<DayCell>>;

/// The grid of a month, as a sequence of full weeks
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month0: u32,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// Every non-blank cell, in day order
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.iter().filter_map(|cell| cell.as_ref()))
    }

    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.cells().find(|cell| cell.day == day)
    }
}
