//! This crate displays the reservations of a community hall on a month calendar.
//!
//! Reservations are read once from a static feed (see the [`store`] and [`feed`] modules). \
//! A [`CalendarEngine`](calendar::CalendarEngine) holds the navigation state (visible month, selected date, display mode) and renders the month grid,
//! with public holidays overlaid and reservations shown either as a glyph or in full. \
//! A [`CalendarView`](view::CalendarView) wires user actions to the engine, and re-renders the whole view after each of them.

pub mod traits;

pub mod date;
pub use date::CalendarDate;
mod reservation;
pub use reservation::ReservationRecord;
pub mod error;
pub use error::FeedError;

pub mod store;
pub use store::ReservationStore;
pub mod feed;
pub mod ical;

pub mod icon;
pub mod holiday;
pub mod calendar;
pub mod detail;
pub mod view;

pub mod config;
pub mod utils;
