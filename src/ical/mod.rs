//! This module imports iCal exports of the hall booking system
//!
//! The booking system only offers an `.ics` export of its events. It is turned into the same reservation store the JSON feed produces.

mod parser;
pub use parser::parse;

/// Time-table label used for all-day events that share a date with timed events
pub const ALL_DAY_LABEL: &str = "終日";
