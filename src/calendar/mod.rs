//! The calendar engine: navigation state and month grid rendering

pub mod grid;

use serde::Serialize;

use crate::date::{days_in_month, first_weekday, CalendarDate, YearMonth};
use crate::icon::IconClassifier;
use crate::store::ReservationStore;
use crate::traits::HolidayProvider;
use grid::{CellContent, CellFlags, DayCell, MonthGrid, Week};

/// How far (in months) navigation may go before or after the current month
pub const NAVIGATION_RANGE: i32 = 12;

/// What the detail panel currently shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DetailPanel {
    /// The generic "pick a date" prompt
    Prompt,
    /// The reservations of the selected date
    Selection,
}

/// The navigation and display state of a calendar view.
///
/// The visible month always stays within [`min_nav`](Self::min_nav) and [`max_nav`](Self::max_nav), both inclusive.
#[derive(Clone, Debug)]
pub struct CalendarEngine {
    today: CalendarDate,
    visible: YearMonth,
    selected: CalendarDate,
    detail_mode: bool,
    detail_panel: DetailPanel,

    min_nav: YearMonth,
    max_nav: YearMonth,
}

impl CalendarEngine {
    /// Create an engine showing the month of `today`, with `today` selected
    pub fn new(today: CalendarDate) -> Self {
        let current = YearMonth::of(&today);
        Self {
            today,
            visible: current,
            selected: today,
            detail_mode: false,
            detail_panel: DetailPanel::Selection,
            min_nav: current.offset(-NAVIGATION_RANGE),
            max_nav: current.offset(NAVIGATION_RANGE),
        }
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn visible_month(&self) -> YearMonth {
        self.visible
    }

    pub fn visible_year(&self) -> i32 {
        self.visible.year
    }

    pub fn visible_month0(&self) -> u32 {
        self.visible.month0
    }

    pub fn selected_date(&self) -> CalendarDate {
        self.selected
    }

    pub fn detail_mode(&self) -> bool {
        self.detail_mode
    }

    pub fn detail_panel(&self) -> DetailPanel {
        self.detail_panel
    }

    /// First navigable month (one year before today's month)
    pub fn min_nav(&self) -> YearMonth {
        self.min_nav
    }

    /// Last navigable month (one year after today's month)
    pub fn max_nav(&self) -> YearMonth {
        self.max_nav
    }

    /// Whether [`navigate_month`](Self::navigate_month) would accept this delta
    pub fn can_navigate(&self, delta: i32) -> bool {
        let candidate = self.visible.offset(delta);
        self.min_nav <= candidate && candidate <= self.max_nav
    }

    /// Move the visible month by `delta` months.
    ///
    /// Returns `false` (and changes nothing) if the target month is outside of the navigable window.
    /// Otherwise, the detail panel goes back to the prompt. The selected date is kept.
    pub fn navigate_month(&mut self, delta: i32) -> bool {
        if self.can_navigate(delta) == false {
            log::debug!("Navigation by {} months from {}-{} rejected", delta, self.visible.year, self.visible.month0 + 1);
            return false;
        }
        self.visible = self.visible.offset(delta);
        self.detail_panel = DetailPanel::Prompt;
        true
    }

    /// Show today's month, with today selected
    pub fn go_to_today(&mut self) {
        self.visible = YearMonth::of(&self.today);
        self.selected = self.today;
        self.detail_panel = DetailPanel::Selection;
    }

    /// Select a date. This does not change the visible month: dates are expected to be picked from the visible grid
    pub fn select_date(&mut self, date: CalendarDate) {
        if self.visible.contains(&date) == false {
            log::debug!("Selected {}, which is not in the visible month", date);
        }
        self.selected = date;
        self.detail_panel = DetailPanel::Selection;
    }

    pub fn toggle_detail_mode(&mut self) {
        self.detail_mode = !self.detail_mode;
    }

    /// The heading of the visible month, e.g. `2025年1月`
    pub fn heading(&self) -> String {
        format!("{}年{}月", self.visible.year, self.visible.month0 + 1)
    }

    /// Compute the grid of the visible month.
    ///
    /// The result only depends on the current state and on the given collaborators
    pub fn render_grid<H>(&self, store: &ReservationStore, holidays: &H, classifier: &IconClassifier) -> MonthGrid
    where
        H: HolidayProvider + ?Sized,
    {
        let YearMonth { year, month0 } = self.visible;
        let leading_blanks = first_weekday(year, month0) as usize;
        let n_days = days_in_month(year, month0);

        let mut weeks: Vec<Week> = Vec::new();
        let mut week: Week = (0..leading_blanks).map(|_| None).collect();
        for day in 1..=n_days {
            if let Some(date) = CalendarDate::from_ymd0(year, month0, day) {
                week.push(Some(self.render_cell(date, store, holidays, classifier)));
            }
            if week.len() == 7 {
                weeks.push(week);
                week = Vec::with_capacity(7);
            }
        }
        if week.is_empty() == false {
            week.resize(7, None);
            weeks.push(week);
        }

        MonthGrid { year, month0, weeks }
    }

    fn render_cell<H>(&self, date: CalendarDate, store: &ReservationStore, holidays: &H, classifier: &IconClassifier) -> DayCell
    where
        H: HolidayProvider + ?Sized,
    {
        let holiday = holidays.holiday(&date);
        let record = store.lookup(&date);

        let mut flags = CellFlags::empty();
        flags.set(CellFlags::HOLIDAY, holiday.is_some());
        flags.set(CellFlags::RESERVED, record.is_some());
        flags.set(CellFlags::SELECTED, date == self.selected);

        let content = match record {
            None => CellContent::Empty,
            Some(r) if self.detail_mode => CellContent::Reservation(r.clone()),
            Some(r) => CellContent::Glyph(classifier.classify(r).to_string()),
        };

        let title = match (&holiday, record) {
            (Some(h), Some(r)) => Some(format!("{}／{}", h, r.summary())),
            (Some(h), None) => Some(h.clone()),
            (None, Some(r)) => Some(r.summary()),
            (None, None) => None,
        };

        DayCell { date, day: date.day(), holiday, flags, content, title }
    }
}
