//! Insertion-ordered rule registration.

use crate::counter::{InsertionCounter, InsertionIndex};
use crate::sink::{InjectionSink, RuleKey};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone, Debug)]
struct RegisteredRule {
    key: RuleKey,
    css: String,
}

/// Tracks every registered rule block in insertion order and forwards it to
/// the active injection sink.
///
/// The order is append-only: indices are assigned from the shared counter,
/// entries are never reordered, and eviction leaves a gap rather than
/// renumbering. For two rule blocks of equal CSS specificity the one with
/// the larger index always serializes later and therefore wins.
pub struct InsertionRegistry {
    counter: InsertionCounter,
    entries: Mutex<BTreeMap<InsertionIndex, RegisteredRule>>,
    sink: Arc<dyn InjectionSink>,
}

impl std::fmt::Debug for InsertionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsertionRegistry")
            .field("registered", &self.entries.lock().len())
            .field("issued", &self.counter.issued())
            .finish_non_exhaustive()
    }
}

impl InsertionRegistry {
    /// Create a registry writing to the given sink.
    pub fn new(sink: Arc<dyn InjectionSink>) -> Self {
        Self {
            counter: InsertionCounter::new(),
            entries: Mutex::new(BTreeMap::new()),
            sink,
        }
    }

    /// Register one serialized rule block; returns its insertion index.
    pub fn register(&self, key: &RuleKey, css: &str) -> InsertionIndex {
        let index = self.counter.next();
        log::trace!("rule {} registered at index {}", key.class_name, index.get());
        self.entries.lock().insert(
            index,
            RegisteredRule {
                key: key.clone(),
                css: css.to_owned(),
            },
        );
        self.sink.insert(key, css, index);
        index
    }

    /// Remove one registered rule block (eviction). The index is retired,
    /// never reissued.
    pub fn remove(&self, index: InsertionIndex) {
        let removed = self.entries.lock().remove(&index);
        if let Some(rule) = removed {
            log::trace!(
                "rule {} removed from index {}",
                rule.key.class_name,
                index.get()
            );
            self.sink.remove(&rule.key);
        }
    }

    /// Full rule text in insertion order, for injection or server-side
    /// extraction.
    pub fn serialize(&self) -> String {
        self.entries
            .lock()
            .values()
            .map(|rule| rule.css.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of live registered rule blocks.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
