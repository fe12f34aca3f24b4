//! The calendar view: wires user actions to the engine, and renders everything after each of them

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::calendar::{CalendarEngine, DetailPanel};
use crate::calendar::grid::{CellContent, DayCell, MonthGrid};
use crate::config::InputKind;
use crate::date::CalendarDate;
use crate::detail::{DetailPresenter, DetailText};
use crate::icon::IconClassifier;
use crate::store::ReservationStore;
use crate::traits::HolidayProvider;

const WEEKDAY_NAMES: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Something the user can do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PreviousMonth,
    NextMonth,
    Today,
    ToggleDetailMode,
    /// Pick a day of the visible month
    SelectDay(u32),
}

/// Everything that is displayed, computed from scratch from the current state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedView {
    pub heading: String,
    pub grid: MonthGrid,
    pub detail: DetailText,
    pub detail_mode: bool,
    /// Label of the button that toggles the detail mode
    pub toggle_label: String,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// The reservation data is up to date as of this day (the day before today)
    pub data_as_of: Option<CalendarDate>,
}

/// A calendar view over a loaded reservation store
pub struct CalendarView<H: HolidayProvider> {
    engine: CalendarEngine,
    store: ReservationStore,
    holidays: H,
    classifier: IconClassifier,
    presenter: DetailPresenter,
}

impl<H: HolidayProvider> CalendarView<H> {
    pub fn new(today: CalendarDate, store: ReservationStore, holidays: H, input: InputKind) -> Self {
        Self {
            engine: CalendarEngine::new(today),
            store,
            holidays,
            classifier: IconClassifier::default(),
            presenter: DetailPresenter::new(input),
        }
    }

    pub fn with_classifier(mut self, classifier: IconClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn engine(&self) -> &CalendarEngine {
        &self.engine
    }

    pub fn store(&self) -> &ReservationStore {
        &self.store
    }

    /// Apply an action. Returns `false` if it was ignored (out-of-window navigation, or a day the visible month does not have)
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::PreviousMonth => self.engine.navigate_month(-1),
            Action::NextMonth => self.engine.navigate_month(1),
            Action::Today => {
                self.engine.go_to_today();
                true
            },
            Action::ToggleDetailMode => {
                self.engine.toggle_detail_mode();
                true
            },
            Action::SelectDay(day) => {
                let visible = self.engine.visible_month();
                match CalendarDate::from_ymd0(visible.year, visible.month0, day) {
                    Some(date) => {
                        self.engine.select_date(date);
                        true
                    },
                    None => {
                        log::warn!("{} has no day {}", self.engine.heading(), day);
                        false
                    }
                }
            },
        }
    }

    /// Apply an action and render the resulting view
    pub fn handle(&mut self, action: Action) -> RenderedView {
        self.apply(action);
        self.render()
    }

    pub fn render(&self) -> RenderedView {
        let engine = &self.engine;
        let detail = match engine.detail_panel() {
            DetailPanel::Prompt => self.presenter.prompt(),
            DetailPanel::Selection => {
                let selected = engine.selected_date();
                self.presenter.describe(&selected, self.store.lookup(&selected))
            },
        };

        RenderedView {
            heading: engine.heading(),
            grid: engine.render_grid(&self.store, &self.holidays, &self.classifier),
            detail,
            detail_mode: engine.detail_mode(),
            toggle_label: toggle_label(engine.detail_mode()).to_string(),
            can_go_previous: engine.can_navigate(-1),
            can_go_next: engine.can_navigate(1),
            data_as_of: engine.today().pred(),
        }
    }
}

fn toggle_label(detail_mode: bool) -> &'static str {
    if detail_mode { "簡易表示" } else { "詳細表示" }
}


impl Display for RenderedView {
    /// A plain-text rendering, for terminals
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let prev = if self.can_go_previous { "<" } else { " " };
        let next = if self.can_go_next { ">" } else { " " };
        writeln!(f, "{} {} {}    [{}]", prev, self.heading, next, self.toggle_label)?;
        if let Some(as_of) = &self.data_as_of {
            writeln!(f, "({} 時点の予約)", as_of)?;
        }

        writeln!(f, "{}", WEEKDAY_NAMES.join("\t"))?;
        for week in &self.grid.weeks {
            let cells: Vec<String> = week.iter()
                .map(|cell| cell.as_ref().map(compact_cell).unwrap_or_default())
                .collect();
            writeln!(f, "{}", cells.join("\t"))?;
        }

        // Holiday names and (in detail mode) reservation texts do not fit in the grid
        let notes: Vec<String> = self.grid.cells().filter_map(cell_note).collect();
        if notes.is_empty() == false {
            writeln!(f)?;
            for note in notes {
                writeln!(f, "{}", note)?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.detail)
    }
}

fn compact_cell(cell: &DayCell) -> String {
    let mut text = if cell.is_selected() {
        format!("[{:>2}]", cell.day)
    } else {
        format!(" {:>2} ", cell.day)
    };
    if cell.is_holiday() {
        text.push('*');
    }
    match &cell.content {
        CellContent::Empty => {},
        CellContent::Glyph(glyph) => text.push_str(glyph),
        CellContent::Reservation(_) => text.push('+'),
    }
    text
}

fn cell_note(cell: &DayCell) -> Option<String> {
    let reservation = match &cell.content {
        CellContent::Reservation(record) => Some(record.display_lines().join(" / ")),
        _ => None,
    };
    match (&cell.holiday, reservation) {
        (Some(h), Some(r)) => Some(format!("{:>2}日 {}：{}", cell.day, h, r)),
        (Some(h), None) => Some(format!("{:>2}日 {}", cell.day, h)),
        (None, Some(r)) => Some(format!("{:>2}日 {}", cell.day, r)),
        (None, None) => None,
    }
}
