//! Cache misuse errors.

use std::fmt;
use theme::ThemeFingerprint;

/// What was wrong with the release call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CacheKeyErrorKind {
    /// The key was never acquired (or has been evicted).
    UnknownKey,
    /// The key's reference count is already zero.
    NotAcquired,
}

/// Programmer misuse of the acquire/release pairing.
///
/// This is a lifecycle bug in the calling component, not a runtime
/// condition to recover from; it is surfaced as an error so callers can
/// route it to their reporting boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheKeyError {
    pub component: String,
    pub fingerprint: ThemeFingerprint,
    pub kind: CacheKeyErrorKind,
}

impl fmt::Display for CacheKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            CacheKeyErrorKind::UnknownKey => "key was never acquired",
            CacheKeyErrorKind::NotAcquired => "reference count is already zero",
        };
        write!(
            f,
            "release of `{}` under theme {}: {reason}",
            self.component, self.fingerprint
        )
    }
}

impl std::error::Error for CacheKeyError {}
