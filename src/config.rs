//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Where the reservation feed is read from, when the user does not tell otherwise.
/// This can be a path, or an `http(s)://` URL.
/// Feel free to override it when initing this library.
pub static FEED_LOCATION: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("scripts/calendar-reservations.json".to_string())));

/// The glyph of reservations that match no known activity.
/// Feel free to override it when initing this library.
pub static DEFAULT_GLYPH: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new(crate::icon::DEFAULT_GLYPH.to_string())));

/// The notice shown in the detail panel for a date without reservation.
/// Feel free to override it when initing this library.
pub static NO_RESERVATION_MESSAGE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("予約はありません。".to_string())));

/// How the user picks dates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Touch,
    Pointer,
}

/// The message shown in the detail panel when no date is selected
pub fn prompt_message(input: InputKind) -> String {
    let verb = match input {
        InputKind::Touch => "タップ",
        InputKind::Pointer => "クリック",
    };
    format!("日付を{}すると予約内容が表示されます。", verb)
}

/// Reads a setting, even if its lock was poisoned
pub fn read(setting: &Lazy<Arc<Mutex<String>>>) -> String {
    match setting.lock() {
        Ok(value) => value.clone(),
        Err(err) => {
            log::warn!("A configuration lock is poisoned: {}", err);
            err.into_inner().clone()
        }
    }
}
