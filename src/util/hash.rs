//! Hashing helpers for exercising collision handling in tests.
#![cfg(test)]

use std::hash::{BuildHasher, Hash, Hasher};

/// A value paired with a hash chosen by the test, rather than one derived from the value.
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    /// Wraps `value`, which will hash as `hash` regardless of its contents.
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash { hash, value }
    }

    /// Unwraps the value.
    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// A hasher that ignores its input, so every value lands in the same bucket.
#[derive(Debug)]
pub struct CollidingHasher;

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

/// Builds [`CollidingHasher`]s.
#[derive(Debug, Clone, Default)]
pub struct CollidingState;

impl BuildHasher for CollidingState {
    type Hasher = CollidingHasher;

    fn build_hasher(&self) -> Self::Hasher {
        CollidingHasher
    }
}
