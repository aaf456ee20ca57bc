// StringSet: fixed-capacity separate-chaining hash set over strings

use std::fmt;

use rand::Rng;

use crate::SetError;
use crate::chain::{BucketIter, Chain};
use crate::hash::{bucket_index, string_hash};
use crate::occupancy::OccupiedBuckets;

/// Bucket count of [`StringSet::default`].
pub const DEFAULT_CAPACITY: usize = 19;

/// A hash set of strings with a fixed number of buckets.
///
/// Each bucket holds a singly linked chain of the entries whose hash maps
/// onto it. The bucket count is chosen at construction and never changes;
/// there is no rehashing, so the load factor grows with every insertion.
///
/// Empty strings are never stored: [`add`](Self::add),
/// [`contains`](Self::contains) and [`remove_item`](Self::remove_item) all
/// reject them with `false`. A set with zero buckets is valid but rejects
/// every insertion.
///
/// [`add`](Self::add) does not look for an existing equal entry, so the
/// same value may be stored several times (each copy counts towards
/// [`len`](Self::len)). Use [`add_unique`](Self::add_unique) for
/// de-duplicating insertion.
///
/// # Concurrency
///
/// Single writer, single reader per instance. There is no internal
/// synchronization; mutation requires `&mut self`.
pub struct StringSet {
    buckets: Vec<Chain>,
    occupied: OccupiedBuckets,
    count: usize,
}

impl StringSet {
    /// Create an empty set with `capacity` buckets.
    pub fn new(capacity: usize) -> Self {
        tracing::debug!(capacity, "creating string set");
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Chain::default);
        Self {
            buckets,
            occupied: OccupiedBuckets::new(capacity),
            count: 0,
        }
    }

    /// Create an empty set from a signed bucket count.
    ///
    /// Fails with [`SetError::NegativeCapacity`] when `capacity < 0`.
    pub fn try_new(capacity: i64) -> Result<Self, SetError> {
        let capacity =
            usize::try_from(capacity).map_err(|_| SetError::NegativeCapacity(capacity))?;
        Ok(Self::new(capacity))
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Entries per bucket. `0.0` for a set without buckets.
    pub fn load_factor(&self) -> f64 {
        if self.buckets.is_empty() {
            0.0
        } else {
            self.count as f64 / self.buckets.len() as f64
        }
    }

    /// Number of buckets holding at least one entry.
    pub fn occupied_buckets(&self) -> usize {
        self.occupied.len()
    }

    /// Bucket that `item` hashes to, or `None` for a set without buckets.
    pub fn bucket_of(&self, item: &str) -> Option<usize> {
        bucket_index(string_hash(item), self.buckets.len())
    }

    /// Insert `item` at the head of its bucket's chain.
    ///
    /// Returns `false` (and stores nothing) for the empty string or when
    /// the set has no buckets. Equal entries are not checked for, so adding
    /// a value twice stores it twice.
    pub fn add(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        let Some(index) = self.accept(&item) else {
            return false;
        };
        self.buckets[index].push_front(item);
        self.occupied.insert(index);
        self.count += 1;
        true
    }

    /// Insert `item` unless an equal entry is already stored.
    ///
    /// Returns `true` only if the set grew.
    pub fn add_unique(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.contains(&item) {
            return false;
        }
        self.add(item)
    }

    /// Whether at least one entry equals `item`.
    pub fn contains(&self, item: &str) -> bool {
        match self.accept(item) {
            Some(index) => self.buckets[index].contains(item),
            None => false,
        }
    }

    /// Remove one entry equal to `item`.
    ///
    /// The first match found walking the chain from its head is unlinked;
    /// other duplicates stay. Returns `false` when nothing matched.
    pub fn remove_item(&mut self, item: &str) -> bool {
        let Some(index) = self.accept(item) else {
            return false;
        };
        if !self.buckets[index].remove_first(item) {
            return false;
        }
        self.after_unlink(index);
        true
    }

    /// Remove and return an arbitrary entry.
    ///
    /// A non-empty bucket is chosen uniformly at random and its head entry
    /// is unlinked. Returns `None` when the set is empty.
    pub fn remove_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        let index = self.occupied.choose(rng)?;
        let removed = self.buckets[index].pop_front()?;
        self.after_unlink(index);
        Some(removed)
    }

    /// Return an arbitrary entry without removing it.
    ///
    /// Uses the same selection as [`remove_random`](Self::remove_random).
    pub fn get_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        let index = self.occupied.choose(rng)?;
        self.buckets[index].front()
    }

    /// Remove every entry. The bucket count is kept.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.occupied.clear();
        self.count = 0;
    }

    /// Iterate over the entries of bucket `index`, head first.
    ///
    /// Returns `None` if `index` is not a valid bucket.
    pub fn bucket(&self, index: usize) -> Option<BucketIter<'_>> {
        self.buckets.get(index).map(Chain::iter)
    }

    /// Iterate over every entry in bucket order, chain order within a
    /// bucket.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            current: BucketIter::empty(),
            remaining: self.count,
        }
    }

    /// Bucket index for a storable item, `None` if it must be rejected.
    fn accept(&self, item: &str) -> Option<usize> {
        if item.is_empty() {
            tracing::trace!("rejecting empty string");
            return None;
        }
        self.bucket_of(item)
    }

    fn after_unlink(&mut self, index: usize) {
        self.count -= 1;
        if self.buckets[index].is_empty() {
            self.occupied.remove(index);
        }
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        let mut total = 0;
        for (index, chain) in self.buckets.iter().enumerate() {
            for value in chain.iter() {
                assert!(!value.is_empty());
                assert_eq!(self.bucket_of(value), Some(index), "{value} in wrong bucket");
                total += 1;
            }
            assert_eq!(
                self.occupied.contains(index),
                !chain.is_empty(),
                "occupancy of bucket {index}"
            );
        }
        assert_eq!(total, self.count);
    }
}

impl Default for StringSet {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<S: Into<String>> Extend<S> for StringSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a> IntoIterator for &'a StringSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// One line per non-empty bucket: `<index>\t<entries separated by spaces>`.
///
/// A set without buckets renders as `[]`.
impl fmt::Display for StringSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.buckets.is_empty() {
            return f.write_str("[]");
        }
        for (index, chain) in self.buckets.iter().enumerate() {
            if chain.is_empty() {
                continue;
            }
            write!(f, "{index}\t")?;
            for (position, value) in chain.iter().enumerate() {
                if position > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for StringSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringSet")
            .field("capacity", &self.capacity())
            .field("len", &self.count)
            .field("occupied_buckets", &self.occupied.len())
            .finish()
    }
}

/// Iterator over all entries of a [`StringSet`].
#[derive(Clone)]
pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Chain>,
    current: BucketIter<'a>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            self.current = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
