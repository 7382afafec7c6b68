use crate::entry::Entry;
use std::iter::FromIterator;
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

/// An ordered map implemented by a sorted table.
///
/// The entries are kept in a contiguous vector sorted by key with no duplicate keys. Lookups
/// use a lower-bound binary search, so searching takes logarithmic time. Insertion and removal
/// find their position the same way, but have to shift the entries after that position. Range
/// scans start at the lower bound of the low key and stop at the first key that is not below
/// the high key, so their cost is proportional to the number of entries they yield.
///
/// # Examples
/// ```
/// use flight_index::ordered_map::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
#[derive(Clone, Debug)]
pub struct OrderedMap<T, U> {
    entries: Vec<Entry<T, U>>,
}

impl<T, U> OrderedMap<T, U>
where
    T: Ord,
{
    /// Constructs a new, empty `OrderedMap<T, U>`.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let map: OrderedMap<u32, u32> = OrderedMap::new();
    /// ```
    pub fn new() -> Self {
        OrderedMap {
            entries: Vec::new(),
        }
    }

    /// Constructs a new, empty `OrderedMap<T, U>` with room for at least `capacity` entries
    /// before reallocating.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let map: OrderedMap<u32, u32> = OrderedMap::with_capacity(16);
    /// assert!(map.capacity() >= 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    // Smallest index whose key is not less than `key`. Keys are unique, so at most one entry at
    // that index can be equal to `key`.
    fn find_insertion_index(&self, key: &T) -> usize {
        let mut lo = 0;
        let mut hi = self.entries.len();
        while lo < hi {
            let mid = lo + ((hi - lo) >> 1);
            if self.entries[mid].key < *key {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    // Index of the entry whose key is equal to `key`, if there is one.
    fn find_index(&self, key: &T) -> Option<usize> {
        let index = self.find_insertion_index(key);
        match self.entries.get(index) {
            Some(entry) if entry.key == *key => Some(index),
            _ => None,
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, the value is
    /// overwritten in place and the old value is returned. The stored key is kept.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U> {
        let index = self.find_insertion_index(&key);
        if let Some(entry) = self.entries.get_mut(index) {
            if entry.key == key {
                return Some(mem::replace(&mut entry.value, value));
            }
        }
        self.entries.insert(index, Entry { key, value });
        None
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<(T, U)> {
        self.find_index(key).map(|index| self.entries.remove(index).into_pair())
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &T) -> bool {
        self.find_index(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &T) -> Option<&U> {
        self.find_index(key).map(|index| &self.entries[index].value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &T) -> Option<&mut U> {
        match self.find_index(key) {
            Some(index) => Some(&mut self.entries[index].value),
            None => None,
        }
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let map: OrderedMap<u32, u32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        let index = self.find_insertion_index(key);
        match self.entries.get(index) {
            Some(entry) if entry.key == *key => Some(&entry.key),
            _ if index == 0 => None,
            _ => Some(&self.entries[index - 1].key),
        }
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        let index = self.find_insertion_index(key);
        self.entries.get(index).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.entries.first().map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.entries.last().map(|entry| &entry.key)
    }

    /// Returns an iterator over the entries whose keys lie in the half-open interval
    /// `[low, high)`, in ascending key order. An entry equal to `low` is included and an entry
    /// equal to `high` is not. If `low` is not less than `high`, the iterator is empty.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// map.insert(5, 5);
    ///
    /// let mut iterator = map.range(&1, &5);
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&3, &3)));
    /// assert_eq!(iterator.next(), None);
    ///
    /// assert_eq!(map.range(&3, &3).next(), None);
    /// ```
    pub fn range<'a, 'b>(&'a self, low: &T, high: &'b T) -> OrderedMapRange<'a, 'b, T, U> {
        let start = self.find_insertion_index(low);
        OrderedMapRange {
            entries: self.entries[start..].iter(),
            high,
        }
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs in ascending
    /// key order.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> OrderedMapIter<T, U> {
        OrderedMapIter {
            entries: self.entries.iter(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs in
    /// ascending key order.
    ///
    /// # Examples
    /// ```
    /// use flight_index::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (_, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> OrderedMapIterMut<T, U> {
        OrderedMapIterMut {
            entries: self.entries.iter_mut(),
        }
    }
}

impl<T, U> IntoIterator for OrderedMap<T, U>
where
    T: Ord,
{
    type Item = (T, U);
    type IntoIter = OrderedMapIntoIter<T, U>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedMapIntoIter {
            entries: self.entries.into_iter(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a OrderedMap<T, U>
where
    T: 'a + Ord,
    U: 'a,
{
    type Item = (&'a T, &'a U);
    type IntoIter = OrderedMapIter<'a, T, U>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut OrderedMap<T, U>
where
    T: 'a + Ord,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);
    type IntoIter = OrderedMapIterMut<'a, T, U>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `OrderedMap<T, U>`.
///
/// This iterator yields owned key-value pairs in ascending key order.
pub struct OrderedMapIntoIter<T, U> {
    entries: vec::IntoIter<Entry<T, U>>,
}

impl<T, U> Iterator for OrderedMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Entry::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

/// An iterator for `OrderedMap<T, U>`.
///
/// This iterator yields immutable references to key-value pairs in ascending key order.
pub struct OrderedMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    entries: slice::Iter<'a, Entry<T, U>>,
}

impl<'a, T, U> Iterator for OrderedMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Entry::as_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

/// A mutable iterator for `OrderedMap<T, U>`.
///
/// This iterator yields immutable references to keys and mutable references to values in
/// ascending key order.
pub struct OrderedMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    entries: slice::IterMut<'a, Entry<T, U>>,
}

impl<'a, T, U> Iterator for OrderedMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| (&entry.key, &mut entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

/// A range iterator for `OrderedMap<T, U>`.
///
/// This iterator yields immutable references to the key-value pairs of a half-open key interval
/// in ascending key order. It stops at the first key that is not below the upper bound.
pub struct OrderedMapRange<'a, 'b, T, U>
where
    T: 'a + 'b,
    U: 'a,
{
    entries: slice::Iter<'a, Entry<T, U>>,
    high: &'b T,
}

impl<'a, 'b, T, U> Iterator for OrderedMapRange<'a, 'b, T, U>
where
    T: 'a + 'b + Ord,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        match self.entries.next() {
            Some(entry) if entry.key < *self.high => Some(entry.as_pair()),
            Some(_) => {
                // the table is sorted, so nothing after this entry is in range either
                let rest = self.entries.as_slice();
                self.entries = rest[..0].iter();
                None
            },
            None => None,
        }
    }
}

impl<T, U> Default for OrderedMap<T, U>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> FromIterator<(T, U)> for OrderedMap<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<T, U> Extend<(T, U)> for OrderedMap<T, U>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, T, U> Index<&'a T> for OrderedMap<T, U>
where
    T: Ord,
{
    type Output = U;

    fn index(&self, key: &T) -> &Self::Output {
        self.get(key).expect("Key does not exist.")
    }
}

impl<'a, T, U> IndexMut<&'a T> for OrderedMap<T, U>
where
    T: Ord,
{
    fn index_mut(&mut self, key: &T) -> &mut Self::Output {
        self.get_mut(key).expect("Key does not exist.")
    }
}
