//! The refcounted stylesheet cache.
//!
//! One entry per (component identity, theme fingerprint) key. First
//! acquisition runs the compile → name → register pipeline under a per-key
//! lock, so concurrent first acquirers wait for and share one result;
//! at-most-one compilation per key holds under any interleaving. Entries at
//! zero references linger until a lazy sweep evicts them.

use crate::error::{CacheKeyError, CacheKeyErrorKind};
use crate::registry::InsertionRegistry;
use crate::sheet::CompiledStyleSheet;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use style_compiler::StyleCompileError;
use theme::ThemeFingerprint;

/// Cache key: which component, compiled under which theme content.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub component: String,
    pub fingerprint: ThemeFingerprint,
}

impl CacheKey {
    pub fn new(component: impl Into<String>, fingerprint: ThemeFingerprint) -> Self {
        Self {
            component: component.into(),
            fingerprint,
        }
    }
}

/// When zero-reference entries are actually evicted.
///
/// Both bounds are checked by a sweep: entries idle longer than
/// `max_idle_age` go, and the oldest-idle entries beyond `max_idle_entries`
/// go. Either bound alone can be the deployment's policy.
#[derive(Copy, Clone, Debug)]
pub struct SweepPolicy {
    /// How many zero-reference entries may linger.
    pub max_idle_entries: usize,
    /// How long a zero-reference entry may linger.
    pub max_idle_age: Option<Duration>,
}

impl Default for SweepPolicy {
    fn default() -> Self {
        Self {
            max_idle_entries: 64,
            max_idle_age: None,
        }
    }
}

#[derive(Debug, Default)]
struct SlotState {
    refs: u64,
    sheet: Option<Arc<CompiledStyleSheet>>,
    /// Set when `refs` drops to zero; cleared on reacquisition.
    idle_since: Option<Instant>,
    /// A swept entry; stale handles into the map must start over.
    evicted: bool,
}

#[derive(Debug, Default)]
struct CacheSlot {
    state: Mutex<SlotState>,
}

/// Refcounted, per-key-serialized stylesheet cache.
///
/// Lock discipline: the map's shard locks are only ever taken while no slot
/// lock is held, so taking a slot lock under a shard guard (lookup,
/// `remove_if`) cannot deadlock.
#[derive(Debug, Default)]
pub struct SheetCache {
    slots: DashMap<CacheKey, Arc<CacheSlot>>,
    policy: SweepPolicy,
}

impl SheetCache {
    pub fn new(policy: SweepPolicy) -> Self {
        Self {
            slots: DashMap::new(),
            policy,
        }
    }

    /// The configured sweep policy.
    pub const fn policy(&self) -> SweepPolicy {
        self.policy
    }

    /// Acquire the sheet for `key`, building it on first acquisition.
    ///
    /// Increments the key's reference count. `build` runs at most once per
    /// live entry, while the per-key lock is held; concurrent first
    /// acquirers block until the result is published and then share it. A
    /// failed build leaves no entry behind and the error propagates.
    pub fn acquire<F>(
        &self,
        key: &CacheKey,
        build: F,
    ) -> Result<Arc<CompiledStyleSheet>, StyleCompileError>
    where
        F: FnOnce() -> Result<CompiledStyleSheet, StyleCompileError>,
    {
        let slot = Arc::clone(self.slots.entry(key.clone()).or_default().value());
        let mut state = slot.state.lock();
        if state.evicted {
            // Lost a race with a sweep between lookup and lock. Clear the
            // stale slot out of the table and start over with a fresh one.
            drop(state);
            self.slots
                .remove_if(key, |_, entry| entry.state.lock().evicted);
            return self.acquire(key, build);
        }

        if let Some(existing) = &state.sheet {
            log::trace!("sheet cache hit for {}@{}", key.component, key.fingerprint);
            let sheet = Arc::clone(existing);
            state.refs += 1;
            state.idle_since = None;
            return Ok(sheet);
        }

        log::trace!(
            "sheet cache miss for {}@{}, compiling",
            key.component,
            key.fingerprint
        );
        match build() {
            Ok(built) => {
                let built = Arc::new(built);
                state.sheet = Some(Arc::clone(&built));
                state.refs += 1;
                state.idle_since = None;
                Ok(built)
            }
            Err(error) => {
                // Discard the placeholder; compilation is pure up to
                // registration, so there is nothing to clean up.
                state.evicted = true;
                drop(state);
                self.slots
                    .remove_if(key, |_, entry| entry.state.lock().evicted);
                Err(error)
            }
        }
    }

    /// Release one reference to `key`.
    ///
    /// At zero the entry becomes sweep-eligible but stays resident until a
    /// sweep. Releasing a key that was never acquired, or whose count is
    /// already zero, is a lifecycle bug in the caller and fails.
    pub fn release(&self, key: &CacheKey) -> Result<(), CacheKeyError> {
        let Some(slot) = self.slots.get(key).map(|entry| Arc::clone(entry.value())) else {
            return Err(self.key_error(key, CacheKeyErrorKind::UnknownKey));
        };
        let mut state = slot.state.lock();
        if state.evicted || state.sheet.is_none() {
            return Err(self.key_error(key, CacheKeyErrorKind::UnknownKey));
        }
        if state.refs == 0 {
            return Err(self.key_error(key, CacheKeyErrorKind::NotAcquired));
        }
        state.refs -= 1;
        if state.refs == 0 {
            state.idle_since = Some(Instant::now());
            log::trace!("sheet {}@{} idle", key.component, key.fingerprint);
        }
        Ok(())
    }

    /// Current reference count for a key, if resident.
    pub fn refs(&self, key: &CacheKey) -> Option<u64> {
        let slot = self.slots.get(key).map(|entry| Arc::clone(entry.value()))?;
        let state = slot.state.lock();
        if state.evicted { None } else { Some(state.refs) }
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of resident zero-reference entries.
    pub fn idle_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|entry| {
                let state = entry.value().state.lock();
                !state.evicted && state.refs == 0 && state.sheet.is_some()
            })
            .count()
    }

    /// Whether a sweep could plausibly evict something right now.
    pub fn wants_sweep(&self) -> bool {
        let idle = self.idle_count();
        idle > self.policy.max_idle_entries || (self.policy.max_idle_age.is_some() && idle > 0)
    }

    /// Evict zero-reference entries past the policy bounds, removing their
    /// rule text from the registry. Returns how many entries were evicted.
    ///
    /// Safe to run concurrently with acquisitions: the zero-count check and
    /// the eviction mark happen under the same per-key lock `acquire` and
    /// `release` use, so an entry observed in use is never evicted.
    pub fn sweep(&self, registry: &InsertionRegistry) -> usize {
        let now = Instant::now();
        let mut idle: Vec<(CacheKey, Arc<CacheSlot>, Instant)> = Vec::new();
        for entry in self.slots.iter() {
            let slot = Arc::clone(entry.value());
            let since = {
                let state = slot.state.lock();
                if state.evicted || state.refs != 0 {
                    None
                } else {
                    state.idle_since
                }
            };
            if let Some(since) = since {
                idle.push((entry.key().clone(), slot, since));
            }
        }

        // Oldest idle first; those are evicted first when over budget.
        idle.sort_by_key(|(_, _, since)| *since);
        let over_budget = idle.len().saturating_sub(self.policy.max_idle_entries);

        let mut evicted = 0;
        for (position, (key, slot, since)) in idle.into_iter().enumerate() {
            let expired = self
                .policy
                .max_idle_age
                .is_some_and(|max| now.duration_since(since) >= max);
            if !expired && position >= over_budget {
                continue;
            }

            let sheet = {
                let mut state = slot.state.lock();
                // Recheck under the lock: a concurrent acquire may have
                // revived the entry since the snapshot.
                if state.evicted || state.refs != 0 {
                    continue;
                }
                state.evicted = true;
                state.sheet.take()
            };

            if let Some(sheet) = sheet {
                for slot_sheet in sheet.slots() {
                    for &index in &slot_sheet.indices {
                        registry.remove(index);
                    }
                }
            }
            self.slots
                .remove_if(&key, |_, entry| entry.state.lock().evicted);
            log::debug!("evicted sheet {}@{}", key.component, key.fingerprint);
            evicted += 1;
        }
        evicted
    }

    fn key_error(&self, key: &CacheKey, kind: CacheKeyErrorKind) -> CacheKeyError {
        CacheKeyError {
            component: key.component.clone(),
            fingerprint: key.fingerprint,
            kind,
        }
    }
}
