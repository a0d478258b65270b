use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::{Drain, Iter};
use crate::collections::traits::{Relation, Set};

/// An unordered set of unique elements, which relies on the elements implementing [`Hash`] and
/// [`Eq`].
///
/// Most of the set algebra comes from the [`Set`] trait, as lazy iterators. With the `ops` feature
/// (on by default) the operators `|`, `&`, `-` and `^` collect those iterators into a new set, and
/// their assigning forms modify the left-hand set in place.
///
/// It is a logic error for elements in a HashSet to be manipulated in a way that changes their
/// hash. Because of this, HashSet's API prevents mutable access to its elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashSet.
/// - `m`: The number of items in the other HashSet, where there is one.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`* |
/// | `remove` | `O(1)` |
/// | `contains` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `eq` | `O(n)`** |
/// | `is_subset` | `O(n)`** |
/// | `union` | `O(n + m)` |
/// | `intersection` | `O(min(n, m))` |
/// | `difference` | `O(n)` |
/// | `symmetric_difference` | `O(n + m)` |
///
/// \* If the HashSet doesn't have enough capacity for the new element, `insert` will take `O(n)`
/// while it grows.
///
/// \** Comparisons return immediately when the lengths rule the result out.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // Yay, we get to do the thing where unit type evaluates to a no-op.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new, empty HashSet with the default value for `B`. Memory will be allocated on
    /// the first insertion.
    pub fn new() -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(B::default()),
        }
    }

    /// Creates a new HashSet able to hold at least `cap` elements without reallocating. The
    /// default hasher will be used.
    pub fn with_cap(cap: usize) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_capacity_and_hasher(cap, B::default()),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new, empty HashSet with the provided `hasher`.
    pub const fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new HashSet with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of elements in the HashSet.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the HashSet contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the HashSet can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Adds `item` to the HashSet, returning true if it wasn't already present.
    ///
    /// As with the standard library, an existing equal element isn't replaced.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Removes the element equal to `item` and returns it, if there was one. Removing an absent
    /// element does nothing.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(item, _)| item)
    }

    /// Returns true if the HashSet contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Returns a reference to the stored element equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_key_value(item).map(|(item, _)| item)
    }

    /// Removes every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        log::trace!("clearing {} elements from HashSet", self.len());
        self.inner.clear()
    }

    /// Keeps only the elements for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        self.inner.retain(|item, _| keep(item))
    }

    /// Removes every element, returning them through an iterator. Elements that the iterator
    /// hasn't produced when it is dropped are removed anyway.
    pub fn drain(&mut self) -> Drain<'_, T> {
        log::trace!("draining {} elements from HashSet", self.len());
        Drain(self.inner.drain())
    }

    /// Makes room for at least `extra` more elements without reallocating.
    pub fn reserve(&mut self, extra: usize) {
        log::trace!("reserving {extra} extra slots in HashSet with capacity {}", self.cap());
        self.inner.reserve(extra)
    }

    /// Shrinks the allocation as close to the current length as the table allows.
    pub fn shrink_to_fit(&mut self) {
        log::trace!("shrinking HashSet of {} elements from capacity {}", self.len(), self.cap());
        self.inner.shrink_to_fit()
    }

    /// Returns an iterator over all elements in the HashSet, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for HashSet<T, B> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, item: &T) -> bool {
        self.inner.contains_key(item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.into_iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

/// Sets are partially ordered by inclusion: a proper subset is less than its superset, and sets
/// where neither contains the other are incomparable.
impl<T: Hash + Eq, B: BuildHasher> PartialOrd for HashSet<T, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.relation(other) {
            Relation::Equal => Some(Ordering::Equal),
            Relation::Subset => Some(Ordering::Less),
            Relation::Superset => Some(Ordering::Greater),
            Relation::Disjoint | Relation::Overlapping => None,
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default, const N: usize> From<[T; N]> for HashSet<T, B> {
    fn from(value: [T; N]) -> Self {
        let mut set = HashSet::with_cap(N);
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = HashSet::new();
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the set as `{a, b, c}`, or `{}` when empty. The order of the elements is whatever order
/// iteration produces, so it shouldn't be relied on.
impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
