//! Content fingerprinting for theme snapshots.
//!
//! Cache keys use the fingerprint rather than reference identity, so two
//! independently constructed but structurally equal themes share entries.

use crate::tokens::TokenMap;
use std::fmt;
use std::hash::Hasher as _;

/// Stable hash of a theme's canonicalized token tree.
///
/// Derived from content, not identity: the token tree is serialized with
/// sorted keys and hashed with a fixed-seed hasher, so the value is
/// reproducible across processes.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ThemeFingerprint(u64);

impl ThemeFingerprint {
    /// Compute the fingerprint of a token tree.
    pub fn of(tokens: &TokenMap) -> Self {
        let mut hasher = rustc_hash::FxHasher::default();
        // TokenMap is a BTreeMap, so serialization is already sorted-key
        // canonical; no separate normalization pass is needed.
        match serde_json::to_string(tokens) {
            Ok(canonical) => hasher.write(canonical.as_bytes()),
            Err(error) => {
                // Token trees are plain data and always serialize; if this
                // ever fires the fallback still yields a deterministic value
                // for an empty tree.
                log::warn!("theme serialization failed while fingerprinting: {error}");
            }
        }
        Self(hasher.finish())
    }

    /// Raw fingerprint value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ThemeFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
