#[macro_use]
extern crate log;

use flight_index::flight::{FlightIndex, Key};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use std::env;

const LOG_LEVEL_VAR: &str = "FLIGHT_INDEX_LOG";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const SCHEDULE: [(&str, &str, u32, u32, &str); 7] = [
    ("A", "B", 622, 1200, "No1"),
    ("A", "B", 622, 1230, "No2"),
    ("A", "B", 622, 1300, "No3"),
    ("A", "C", 623, 1100, "No4"),
    ("A", "C", 623, 1400, "No5"),
    ("A", "D", 624, 1700, "No6"),
    ("B", "C", 625, 1900, "No7"),
];

fn log_level() -> (LevelFilter, Option<String>) {
    match env::var(LOG_LEVEL_VAR) {
        Ok(value) => match value.parse() {
            Ok(level) => (level, None),
            Err(_) => (DEFAULT_LOG_LEVEL, Some(value)),
        },
        Err(_) => (DEFAULT_LOG_LEVEL, None),
    }
}

fn print_flights(title: &str, flights: &[(&Key, &&str)]) {
    println!("\n{}", title);
    for (key, value) in flights {
        println!("{} - Flight {}", key, value);
    }
}

fn main() {
    let (level, rejected) = log_level();
    if SimpleLogger::init(level, Config::default()).is_err() {
        eprintln!("Could not install logger.");
    }
    if let Some(value) = rejected {
        warn!("Ignoring invalid {} value {:?}; using {}.", LOG_LEVEL_VAR, value, DEFAULT_LOG_LEVEL);
    }

    let mut index = FlightIndex::with_capacity(SCHEDULE.len());
    index.load(SCHEDULE.iter().cloned());
    println!("Total flights stored: {}", index.len());

    print_flights(
        "Flights from A to B between 622 1200 and 622 1300:",
        &index.query(&Key::new("A", "B", 622, 1200), &Key::new("A", "B", 622, 1300)),
    );
    print_flights(
        "Flights from A to C between 623 1000 and 623 1500:",
        &index.query_window("A", "C", 623, 1000, 1500),
    );
    print_flights("All flights from A to D:", &index.query_route("A", "D"));
}
