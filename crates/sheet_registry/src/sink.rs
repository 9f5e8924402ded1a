//! Injection targets: where serialized rule text ends up.

use crate::counter::InsertionIndex;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use theme::ThemeFingerprint;

/// Identity of registered rule text: the generated class name scoped by the
/// theme fingerprint it was compiled under.
///
/// The class name alone is not unique during a live theme switch — two
/// fingerprints can be active at once, each with its own text under the same
/// class.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RuleKey {
    pub class_name: String,
    pub fingerprint: ThemeFingerprint,
}

impl RuleKey {
    pub fn new(class_name: impl Into<String>, fingerprint: ThemeFingerprint) -> Self {
        Self {
            class_name: class_name.into(),
            fingerprint,
        }
    }
}

/// An abstract sink accepting rule text in insertion order.
///
/// In a browser this is a live stylesheet; in a server context a string
/// buffer. The engine never knows which concrete sink it writes to.
pub trait InjectionSink: Send + Sync {
    /// Accept rule text registered under `key` at `index`.
    fn insert(&self, key: &RuleKey, css: &str, index: InsertionIndex);

    /// Drop all rule text registered under `key` (eviction).
    fn remove(&self, key: &RuleKey);
}

/// A server-side sink: rule text accumulated in a buffer, ordered by
/// insertion index.
#[derive(Debug, Default)]
pub struct BufferSink {
    rules: Mutex<BTreeMap<InsertionIndex, (RuleKey, String)>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffered rule text, insertion-ordered and newline-joined.
    pub fn contents(&self) -> String {
        self.rules
            .lock()
            .values()
            .map(|(_, css)| css.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of buffered rule blocks.
    pub fn len(&self) -> usize {
        self.rules.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.lock().is_empty()
    }
}

impl InjectionSink for BufferSink {
    fn insert(&self, key: &RuleKey, css: &str, index: InsertionIndex) {
        self.rules
            .lock()
            .insert(index, (key.clone(), css.to_owned()));
    }

    fn remove(&self, key: &RuleKey) {
        self.rules.lock().retain(|_, (owner, _)| owner != key);
    }
}
