//! Compile-time failure taxonomy.

use std::fmt;
use theme::InvalidThemeError;

/// A style definition could not be compiled against the active theme.
///
/// Never swallowed: compile errors propagate to the caller with the slot
/// name and, for token failures, the failing dotted path. Nothing here is
/// retried — compilation is deterministic, so a retry with the same inputs
/// reproduces the same error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleCompileError {
    /// A token the definition requires is absent from the resolved theme.
    InvalidTheme(InvalidThemeError),
    /// A token reference in a rule block did not resolve.
    UnresolvedToken {
        /// Slot whose rule block carried the reference.
        slot: String,
        /// Dotted path that failed to resolve.
        token_path: String,
    },
    /// A token resolved to a group or list where a scalar was needed.
    MalformedValue {
        slot: String,
        property: String,
        token_path: String,
    },
    /// A responsive entry named a breakpoint the theme does not define.
    UnknownBreakpoint { slot: String, breakpoint: String },
}

impl fmt::Display for StyleCompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTheme(inner) => write!(f, "{inner}"),
            Self::UnresolvedToken { slot, token_path } => {
                write!(f, "slot `{slot}`: unresolved theme token `{token_path}`")
            }
            Self::MalformedValue {
                slot,
                property,
                token_path,
            } => write!(
                f,
                "slot `{slot}`: token `{token_path}` is not a scalar value for `{property}`"
            ),
            Self::UnknownBreakpoint { slot, breakpoint } => {
                write!(f, "slot `{slot}`: unknown breakpoint `{breakpoint}`")
            }
        }
    }
}

impl std::error::Error for StyleCompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTheme(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<InvalidThemeError> for StyleCompileError {
    fn from(inner: InvalidThemeError) -> Self {
        Self::InvalidTheme(inner)
    }
}
