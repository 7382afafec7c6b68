use std::fmt;

/// A single component of a `Key` that may also be one of two sentinels.
///
/// `Field::Min` compares less than every `Field::Value` and `Field::Max` compares greater than
/// every `Field::Value`. Values compare by the natural order of `T`. The sentinels are how
/// open-ended queries are written: `Key::route_end("A", "D")` sorts after every flight from `A`
/// to `D` regardless of its date or time.
///
/// # Examples
/// ```
/// use flight_index::flight::Field;
///
/// assert!(Field::Min < Field::Value(0));
/// assert!(Field::Value(0) < Field::Value(1));
/// assert!(Field::Value(u32::max_value()) < Field::Max);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Field<T> {
    Min,
    Value(T),
    Max,
}

impl<T> Field<T> {
    /// Returns `true` if the field holds a value rather than a sentinel.
    pub fn is_value(&self) -> bool {
        match self {
            Field::Value(_) => true,
            _ => false,
        }
    }

    /// Returns a reference to the contained value, or `None` for a sentinel.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T> fmt::Display for Field<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Min => write!(f, "min"),
            Field::Value(value) => write!(f, "{}", value),
            Field::Max => write!(f, "max"),
        }
    }
}

/// The composite key of a flight.
///
/// Keys are ordered lexicographically on `(origin, destination, date, time)`: the first
/// component that differs decides. Origins and destinations compare as strings, dates and times
/// as integers. Two keys are equal only if all four components are equal.
///
/// # Examples
/// ```
/// use flight_index::flight::Key;
///
/// let early = Key::new("A", "B", 622, 1200);
/// let late = Key::new("A", "B", 622, 1230);
/// let other_route = Key::new("A", "C", 1, 0);
///
/// assert!(early < late);
/// assert!(late < other_route);
/// assert!(Key::route_start("A", "B") < early);
/// assert!(late < Key::route_end("A", "B"));
/// assert_eq!(early.to_string(), "A -> B (622/1200)");
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Key {
    origin: Field<String>,
    destination: Field<String>,
    date: Field<u32>,
    time: Field<u32>,
}

impl Key {
    /// Constructs the key of a flight. Every component of the key holds a value.
    pub fn new<O, D>(origin: O, destination: D, date: u32, time: u32) -> Self
    where
        O: Into<String>,
        D: Into<String>,
    {
        Key {
            origin: Field::Value(origin.into()),
            destination: Field::Value(destination.into()),
            date: Field::Value(date),
            time: Field::Value(time),
        }
    }

    /// Constructs a key from its components, any of which may be a sentinel. Keys built this way
    /// are meant to be used as query bounds.
    ///
    /// # Examples
    /// ```
    /// use flight_index::flight::{Field, Key};
    ///
    /// let end_of_day = Key::from_fields(
    ///     Field::Value(String::from("A")),
    ///     Field::Value(String::from("B")),
    ///     Field::Value(622),
    ///     Field::Max,
    /// );
    /// assert!(Key::new("A", "B", 622, 2359) < end_of_day);
    /// assert!(end_of_day < Key::new("A", "B", 623, 0));
    /// assert!(!end_of_day.is_concrete());
    /// ```
    pub fn from_fields(
        origin: Field<String>,
        destination: Field<String>,
        date: Field<u32>,
        time: Field<u32>,
    ) -> Self {
        Key {
            origin,
            destination,
            date,
            time,
        }
    }

    /// Returns a key that sorts before every flight from `origin` to `destination`.
    pub fn route_start<O, D>(origin: O, destination: D) -> Self
    where
        O: Into<String>,
        D: Into<String>,
    {
        Key::from_fields(
            Field::Value(origin.into()),
            Field::Value(destination.into()),
            Field::Min,
            Field::Min,
        )
    }

    /// Returns a key that sorts after every flight from `origin` to `destination`.
    pub fn route_end<O, D>(origin: O, destination: D) -> Self
    where
        O: Into<String>,
        D: Into<String>,
    {
        Key::from_fields(
            Field::Value(origin.into()),
            Field::Value(destination.into()),
            Field::Max,
            Field::Max,
        )
    }

    /// Returns `true` if no component of the key is a sentinel.
    pub fn is_concrete(&self) -> bool {
        self.origin.is_value() && self.destination.is_value() && self.date.is_value() && self.time.is_value()
    }

    pub fn origin(&self) -> &Field<String> {
        &self.origin
    }

    pub fn destination(&self) -> &Field<String> {
        &self.destination
    }

    pub fn date(&self) -> &Field<u32> {
        &self.date
    }

    pub fn time(&self) -> &Field<u32> {
        &self.time
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {} ({}/{})", self.origin, self.destination, self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, Key};
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_field_order() {
        assert!(Field::Min < Field::Value(0));
        assert!(Field::Value(0) < Field::Value(1));
        assert!(Field::Value(u32::max_value()) < Field::Max);
        assert!(Field::Min < Field::Value(String::new()));
        assert!(Field::Value(String::from("ZZZ")) < Field::Max);
    }

    #[test]
    fn test_key_order_is_lexicographic() {
        assert!(Key::new("A", "Z", 999, 2359) < Key::new("B", "A", 0, 0));
        assert!(Key::new("A", "B", 999, 2359) < Key::new("A", "C", 0, 0));
        assert!(Key::new("A", "B", 622, 2359) < Key::new("A", "B", 623, 0));
        assert!(Key::new("A", "B", 622, 1200) < Key::new("A", "B", 622, 1230));
    }

    #[test]
    fn test_key_order_compares_strings_ordinally() {
        assert!(Key::new("AB", "C", 0, 0) < Key::new("B", "A", 0, 0));
        assert!(Key::new("A", "C", 0, 0) < Key::new("AA", "A", 0, 0));
        assert!(Key::new("Z", "C", 0, 0) < Key::new("a", "A", 0, 0));
    }

    #[test]
    fn test_key_equality() {
        assert_eq!(Key::new("A", "B", 622, 1200), Key::new("A", "B", 622, 1200));
        assert_ne!(Key::new("A", "B", 622, 1200), Key::new("A", "B", 622, 1201));
    }

    #[test]
    fn test_route_bounds() {
        let start = Key::route_start("A", "D");
        let end = Key::route_end("A", "D");

        assert!(Key::new("A", "C", u32::max_value(), u32::max_value()) < start);
        assert!(start < Key::new("A", "D", 0, 0));
        assert!(Key::new("A", "D", u32::max_value(), u32::max_value()) < end);
        assert!(end < Key::new("A", "DA", 0, 0));
    }

    #[test]
    fn test_is_concrete() {
        assert!(Key::new("A", "B", 622, 1200).is_concrete());
        assert!(!Key::route_start("A", "B").is_concrete());
        assert!(!Key::from_fields(Field::Max, Field::Value(String::from("B")), Field::Value(1), Field::Value(1)).is_concrete());
    }

    #[test]
    fn test_accessors() {
        let key = Key::new("A", "B", 622, 1200);
        assert_eq!(key.origin().value().map(String::as_str), Some("A"));
        assert_eq!(key.destination().value().map(String::as_str), Some("B"));
        assert_eq!(key.date(), &Field::Value(622));
        assert_eq!(key.time().value(), Some(&1200));
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::new("A", "B", 622, 1200).to_string(), "A -> B (622/1200)");
        assert_eq!(Key::route_end("A", "D").to_string(), "A -> D (max/max)");
        assert_eq!(Key::route_start("A", "D").to_string(), "A -> D (min/min)");
    }

    #[test]
    fn test_serde_field() {
        assert_tokens(
            &Field::Value(622u32),
            &[Token::NewtypeVariant { name: "Field", variant: "Value" }, Token::U32(622)],
        );
        assert_tokens(&Field::<u32>::Min, &[Token::UnitVariant { name: "Field", variant: "Min" }]);
        assert_tokens(&Field::<u32>::Max, &[Token::UnitVariant { name: "Field", variant: "Max" }]);
    }

    #[test]
    fn test_serde_key() {
        assert_tokens(
            &Key::new("A", "B", 622, 1200),
            &[
                Token::Struct { name: "Key", len: 4 },
                Token::Str("origin"),
                Token::NewtypeVariant { name: "Field", variant: "Value" },
                Token::Str("A"),
                Token::Str("destination"),
                Token::NewtypeVariant { name: "Field", variant: "Value" },
                Token::Str("B"),
                Token::Str("date"),
                Token::NewtypeVariant { name: "Field", variant: "Value" },
                Token::U32(622),
                Token::Str("time"),
                Token::NewtypeVariant { name: "Field", variant: "Value" },
                Token::U32(1200),
                Token::StructEnd,
            ],
        );
    }
}
