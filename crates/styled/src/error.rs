//! Engine-level failures and the reporting boundary.

use sheet_registry::CacheKeyError;
use std::fmt;
use style_compiler::StyleCompileError;

/// A failure surfaced by the styling engine.
///
/// Nothing here is retried: every operation is a deterministic computation
/// or in-memory bookkeeping, so a retry with unchanged input reproduces the
/// identical error.
#[derive(Clone, Debug)]
pub enum EngineError {
    /// A component's definition failed to compile; carries the component
    /// identity for diagnosis.
    Compile {
        component: String,
        source: StyleCompileError,
    },
    /// Acquire/release pairing misuse; a lifecycle bug in the caller.
    Cache(CacheKeyError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compile { component, source } => {
                write!(f, "styles for `{component}` failed to compile: {source}")
            }
            Self::Cache(source) => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Compile { source, .. } => Some(source),
            Self::Cache(source) => Some(source),
        }
    }
}

impl From<CacheKeyError> for EngineError {
    fn from(source: CacheKeyError) -> Self {
        Self::Cache(source)
    }
}

/// Where engine errors go when a component opts into rendering unstyled
/// instead of failing its whole tree.
///
/// Silent swallowing is disallowed; the fallback path always reports before
/// returning an empty handle.
pub trait ErrorBoundary: Send + Sync {
    fn report(&self, error: &EngineError);
}

/// A boundary that forwards to the `log` facade at error level.
#[derive(Debug, Default)]
pub struct LogBoundary;

impl ErrorBoundary for LogBoundary {
    fn report(&self, error: &EngineError) {
        log::error!("{error}");
    }
}
