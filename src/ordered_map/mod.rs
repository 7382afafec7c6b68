//! Ordered map stored as a sorted table of entries with binary search over the keys.

mod map;

pub use self::map::{OrderedMap, OrderedMapIntoIter, OrderedMapIter, OrderedMapIterMut, OrderedMapRange};
