//! An ordered map backed by a sorted table and a flight schedule index built on top of it.
//!
//! `OrderedMap` keeps its entries in a contiguous, sorted sequence and answers lookups and
//! half-open range scans with a lower-bound binary search. `FlightIndex` orders flights by the
//! composite key `(origin, destination, date, time)` and answers schedule queries such as "all
//! flights from A to B on day 622 between 1200 and 1300".

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod entry;
pub mod flight;
pub mod ordered_map;
