//! The shared insertion-order counter.
//!
//! Every registered rule block takes the next value of one monotonically
//! increasing counter, regardless of which component triggered the
//! registration. The resulting total order is what lets later-registered
//! rules win ties under equal CSS specificity.

use std::sync::atomic::{AtomicU64, Ordering};

/// Position of a rule block in the global insertion sequence.
///
/// Indices are never reused: eviction leaves a gap rather than renumbering.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct InsertionIndex(u64);

impl InsertionIndex {
    /// Create an index from a raw value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Atomic allocator for insertion indices, shared by every cache entry of
/// an engine.
#[derive(Debug, Default)]
pub struct InsertionCounter {
    next: AtomicU64,
}

impl InsertionCounter {
    /// Create a counter starting at zero.
    #[inline]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Allocate the next index.
    #[inline]
    pub fn next(&self) -> InsertionIndex {
        InsertionIndex(self.next.fetch_add(1, Ordering::AcqRel))
    }

    /// How many indices have been handed out.
    #[inline]
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn indices_are_unique_across_threads() {
        let counter = Arc::new(InsertionCounter::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || (0..100).map(|_| counter.next().get()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen: Vec<u64> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 800);
        assert_eq!(counter.issued(), 800);
    }
}
