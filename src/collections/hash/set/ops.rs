//! Operator impls for [`HashSet`].
//!
//! The plain operators borrow both operands and clone the selected elements into a new set, which
//! uses a default-constructed hasher. The assigning operators consume the right-hand set and only
//! ever modify the left-hand one.

use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::HashSet;
use crate::collections::traits::Set;

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    /// Returns the union of `self` and `rhs` as a new HashSet.
    fn bitor(self, rhs: Self) -> Self::Output {
        let mut set = HashSet::with_cap(self.len().max(rhs.len()));
        set.extend(self.union(rhs).cloned());
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for HashSet<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs);
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    /// Returns the intersection of `self` and `rhs` as a new HashSet.
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for HashSet<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|item| rhs.contains(item));
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    /// Returns the symmetric difference of `self` and `rhs` as a new HashSet.
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for HashSet<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if self.remove(&item).is_none() {
                self.insert(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    /// Returns the elements of `self` that aren't in `rhs` as a new HashSet.
    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for HashSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        // Walk whichever side is shorter.
        if rhs.len() < self.len() {
            for item in rhs {
                self.remove(&item);
            }
        } else {
            self.retain(|item| !rhs.contains(item));
        }
    }
}
