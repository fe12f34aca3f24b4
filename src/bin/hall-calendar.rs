//! Displays the hall reservation calendar in a terminal.
//!
//! Usage: `hall-calendar [--json] [--dump] [--touch] [FEED]`
//!
//! `FEED` is a path or an `http(s)://` URL. It defaults to `$HALL_CALENDAR_FEED`, then to the configured feed location.

use std::error::Error;

use tokio::io::{AsyncBufReadExt, BufReader};

use hall_calendar::config::{self, InputKind};
use hall_calendar::feed::source_from_str;
use hall_calendar::holiday::JapaneseHolidays;
use hall_calendar::view::{Action, CalendarView, RenderedView};
use hall_calendar::{CalendarDate, ReservationStore};

const FEED_ENV_VAR: &str = "HALL_CALENDAR_FEED";

struct Options {
    json: bool,
    dump: bool,
    input: InputKind,
    location: String,
}

fn parse_args() -> Options {
    let mut options = Options {
        json: false,
        dump: false,
        input: InputKind::Pointer,
        location: String::new(),
    };
    let mut location = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => options.json = true,
            "--dump" => options.dump = true,
            "--touch" => options.input = InputKind::Touch,
            other if other.starts_with("--") => log::warn!("Ignoring unknown option {}", other),
            other => location = Some(other.to_string()),
        }
    }
    options.location = location
        .or_else(|| std::env::var(FEED_ENV_VAR).ok())
        .unwrap_or_else(|| config::read(&config::FEED_LOCATION));
    options
}

fn parse_command(line: &str) -> Option<Result<Action, String>> {
    let line = line.trim();
    let action = match line {
        "q" | "quit" => return None,
        "p" | "prev" => Action::PreviousMonth,
        "n" | "next" => Action::NextMonth,
        "t" | "today" => Action::Today,
        "d" | "detail" => Action::ToggleDetailMode,
        other => match other.parse::<u32>() {
            Ok(day) => Action::SelectDay(day),
            Err(_) => return Some(Err(format!("Unknown command {:?}. Use p, n, t, d, a day number, or q.", other))),
        },
    };
    Some(Ok(action))
}

fn show(view: &RenderedView, json: bool) {
    if json {
        match serde_json::to_string_pretty(view) {
            Ok(text) => println!("{}", text),
            Err(err) => log::error!("Unable to serialize the view: {}", err),
        }
    } else {
        println!("{}", view);
    }
}


#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let options = parse_args();
    let source = source_from_str(&options.location);
    let store = ReservationStore::load_or_empty(source.as_ref()).await;
    if options.dump {
        hall_calendar::utils::print_store(&store);
        return Ok(());
    }

    let mut view = CalendarView::new(CalendarDate::today(), store, JapaneseHolidays, options.input);
    show(&view.render(), options.json);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            None => break,
            Some(Err(message)) => println!("{}", message),
            Some(Ok(action)) => {
                if view.apply(action) == false {
                    println!("(ignored)");
                }
                show(&view.render(), options.json);
            },
        }
    }
    Ok(())
}
