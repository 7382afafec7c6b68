//! Flight schedule index ordered by `(origin, destination, date, time)`.

mod index;
mod key;

pub use self::index::{Error, FlightIndex, Result};
pub use self::key::{Field, Key};
