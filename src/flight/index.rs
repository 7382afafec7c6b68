use crate::flight::key::Key;
use crate::ordered_map::{OrderedMap, OrderedMapIter};
use std::error;
use std::fmt;
use std::result;

#[derive(Debug)]
pub enum Error {
    /// A key with a `Field::Min` or `Field::Max` component was inserted as a flight.
    UnboundedKey(Key),
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match self {
            Error::UnboundedKey(_) => "flight key contains a sentinel component",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnboundedKey(key) => write!(f, "cannot store flight under unbounded key {}", key),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// A flight schedule index.
///
/// Flights are stored in an `OrderedMap` under their composite `Key`, so all flights of a route
/// are adjacent and sorted by date and then time. Queries locate the lower bound of the low key
/// with a binary search and scan forward until the first key that is not below the high key.
///
/// # Examples
/// ```
/// use flight_index::flight::{FlightIndex, Key};
///
/// let mut index = FlightIndex::new();
/// index.insert(Key::new("A", "B", 622, 1200), "No1")?;
/// index.insert(Key::new("A", "B", 622, 1230), "No2")?;
/// index.insert(Key::new("A", "B", 622, 1300), "No3")?;
///
/// let flights = index.query(&Key::new("A", "B", 622, 1200), &Key::new("A", "B", 622, 1300));
/// assert_eq!(
///     flights.into_iter().map(|(_, value)| *value).collect::<Vec<&str>>(),
///     vec!["No1", "No2"],
/// );
/// # Ok::<(), flight_index::flight::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct FlightIndex<V> {
    map: OrderedMap<Key, V>,
}

impl<V> FlightIndex<V> {
    /// Constructs a new, empty `FlightIndex<V>`.
    pub fn new() -> Self {
        FlightIndex {
            map: OrderedMap::new(),
        }
    }

    /// Constructs a new, empty `FlightIndex<V>` with room for at least `capacity` flights.
    pub fn with_capacity(capacity: usize) -> Self {
        FlightIndex {
            map: OrderedMap::with_capacity(capacity),
        }
    }

    /// Stores a flight under `key`. If a flight with an equal key is already stored, its value is
    /// replaced and the old value is returned.
    ///
    /// Returns `Error::UnboundedKey` if any component of `key` is a sentinel. Sentinel keys are
    /// query bounds and never identify a flight.
    ///
    /// # Examples
    /// ```
    /// use flight_index::flight::{FlightIndex, Key};
    ///
    /// let mut index = FlightIndex::new();
    /// assert_eq!(index.insert(Key::new("A", "B", 622, 1200), "No1").unwrap(), None);
    /// assert_eq!(index.insert(Key::new("A", "B", 622, 1200), "No2").unwrap(), Some("No1"));
    /// assert!(index.insert(Key::route_end("A", "B"), "No3").is_err());
    /// assert_eq!(index.len(), 1);
    /// ```
    pub fn insert(&mut self, key: Key, value: V) -> Result<Option<V>> {
        if !key.is_concrete() {
            debug!("Rejected flight with unbounded key {}.", key);
            return Err(Error::UnboundedKey(key));
        }
        debug!("Storing flight {}.", key);
        Ok(self.map.insert(key, value))
    }

    /// Stores every `(origin, destination, date, time, value)` record and returns how many of
    /// them were new flights. Records with a key that is already stored replace the old value.
    ///
    /// # Examples
    /// ```
    /// use flight_index::flight::{FlightIndex, Key};
    ///
    /// let mut index = FlightIndex::new();
    /// let added = index.load(vec![
    ///     ("A", "B", 622, 1200, "No1"),
    ///     ("A", "B", 622, 1230, "No2"),
    ///     ("A", "B", 622, 1200, "No3"),
    /// ]);
    ///
    /// assert_eq!(added, 2);
    /// assert_eq!(index.get(&Key::new("A", "B", 622, 1200)), Some(&"No3"));
    /// ```
    pub fn load<I, S>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = (S, S, u32, u32, V)>,
        S: Into<String>,
    {
        let mut added = 0;
        for (origin, destination, date, time, value) in records {
            if self.map.insert(Key::new(origin, destination, date, time), value).is_none() {
                added += 1;
            }
        }
        debug!("Loaded {} new flights; {} flights stored.", added, self.map.len());
        added
    }

    /// Returns the value stored under `key`, or `None` if there is no such flight.
    pub fn get(&self, key: &Key) -> Option<&V> {
        self.map.get(key)
    }

    /// Returns the number of stored flights.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no flights are stored.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over every stored flight in key order.
    pub fn iter(&self) -> OrderedMapIter<Key, V> {
        self.map.iter()
    }

    /// Returns every flight whose key `k` satisfies `low <= k < high`, in key order.
    ///
    /// The upper bound is always exclusive: a flight whose key is equal to `high` is not
    /// returned. If `low` is not less than `high` the result is empty. Open-ended queries use
    /// `Field::Min` and `Field::Max` components in the bounds.
    ///
    /// # Examples
    /// ```
    /// use flight_index::flight::{FlightIndex, Key};
    ///
    /// let mut index = FlightIndex::new();
    /// index.load(vec![("A", "D", 624, 1700, "No6"), ("B", "C", 625, 1900, "No7")]);
    ///
    /// let flights = index.query(&Key::route_start("A", "D"), &Key::route_end("A", "D"));
    /// assert_eq!(flights, vec![(&Key::new("A", "D", 624, 1700), &"No6")]);
    ///
    /// let key = Key::new("A", "D", 624, 1700);
    /// assert!(index.query(&key, &key).is_empty());
    /// ```
    pub fn query(&self, low: &Key, high: &Key) -> Vec<(&Key, &V)> {
        let flights: Vec<(&Key, &V)> = self.map.range(low, high).collect();
        trace!("Query [{}, {}) matched {} flights.", low, high, flights.len());
        flights
    }

    /// Returns the flights from `origin` to `destination` on `date` that depart at or after
    /// `start` and before `end`.
    ///
    /// # Examples
    /// ```
    /// use flight_index::flight::FlightIndex;
    ///
    /// let mut index = FlightIndex::new();
    /// index.load(vec![
    ///     ("A", "C", 623, 1100, "No4"),
    ///     ("A", "C", 623, 1400, "No5"),
    ///     ("A", "C", 624, 1200, "No8"),
    /// ]);
    ///
    /// let flights = index.query_window("A", "C", 623, 1000, 1500);
    /// assert_eq!(
    ///     flights.into_iter().map(|(_, value)| *value).collect::<Vec<&str>>(),
    ///     vec!["No4", "No5"],
    /// );
    /// ```
    pub fn query_window(&self, origin: &str, destination: &str, date: u32, start: u32, end: u32) -> Vec<(&Key, &V)> {
        let low = Key::new(origin, destination, date, start);
        let high = Key::new(origin, destination, date, end);
        self.query(&low, &high)
    }

    /// Returns every flight from `origin` to `destination` regardless of date or time.
    pub fn query_route(&self, origin: &str, destination: &str) -> Vec<(&Key, &V)> {
        let low = Key::route_start(origin, destination);
        let high = Key::route_end(origin, destination);
        self.query(&low, &high)
    }
}

impl<'a, V> IntoIterator for &'a FlightIndex<V>
where
    V: 'a,
{
    type Item = (&'a Key, &'a V);
    type IntoIter = OrderedMapIter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> Default for FlightIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}
