///! Some utility functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::store::ReservationStore;
use crate::reservation::ReservationRecord;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Removes every `<...>` tag from a text, keeping what is between them
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

/// A debug utility that pretty-prints the content of a reservation store, sorted by date
pub fn print_store(store: &ReservationStore) {
    let mut keys: Vec<&String> = store.keys().collect();
    keys.sort();
    for key in keys {
        if let Some(record) = store.get(key) {
            print_record(key, record);
        }
    }
}

pub fn print_record(key: &str, record: &ReservationRecord) {
    match record {
        ReservationRecord::Single(text) => println!("{}  {}", key, text),
        ReservationRecord::List(entries) => {
            println!("{}", key);
            for entry in entries {
                println!("    * {}", entry);
            }
        },
        ReservationRecord::TimeTable(slots) => {
            println!("{}", key);
            for (label, text) in slots {
                println!("    {}\t{}", label, text);
            }
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip() {
        assert_eq!(strip_markup("a<br>b"), "ab");
        assert_eq!(strip_markup("<span class=\"x\">体操</span>"), "体操");
        assert_eq!(strip_markup("10 < 12"), "10 < 12");
    }
}
