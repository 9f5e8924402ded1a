//! Per-render style handles.

use crate::engine::StyleEngine;
use crate::merge::FinalClasses;
use sheet_registry::CacheKey;

/// A component's hold on its acquired styles.
///
/// Exposes only slot → class-list mappings; the rule text stays owned by
/// the engine's cache. Dropping the handle releases every key it acquired,
/// making the entries sweep-eligible once their counts reach zero.
#[derive(Debug)]
pub struct StyleHandle<'engine> {
    engine: &'engine StyleEngine,
    acquired: Vec<CacheKey>,
    classes: FinalClasses,
}

impl<'engine> StyleHandle<'engine> {
    pub(crate) fn new(
        engine: &'engine StyleEngine,
        acquired: Vec<CacheKey>,
        classes: FinalClasses,
    ) -> Self {
        Self {
            engine,
            acquired,
            classes,
        }
    }

    /// An empty handle for the render-unstyled fallback path.
    pub(crate) fn unstyled(engine: &'engine StyleEngine) -> Self {
        Self {
            engine,
            acquired: Vec::new(),
            classes: FinalClasses::default(),
        }
    }

    /// Space-joined class list for a slot; empty for unknown slots and on
    /// unstyled fallback handles.
    pub fn class(&self, slot: &str) -> &str {
        self.classes.class(slot)
    }

    /// All final class lists.
    pub const fn classes(&self) -> &FinalClasses {
        &self.classes
    }

    /// Whether this handle carries no styling (fallback path).
    pub fn is_unstyled(&self) -> bool {
        self.acquired.is_empty()
    }
}

impl Drop for StyleHandle<'_> {
    fn drop(&mut self) {
        for key in self.acquired.drain(..) {
            self.engine.release_key(&key);
        }
    }
}
