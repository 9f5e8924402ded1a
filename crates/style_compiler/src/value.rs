//! Declaration values, before and after token resolution.

use crate::units::format_number;

/// The value side of a declaration, as authored in a style definition.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A literal CSS value used verbatim (`"flex"`, `"rgba(0, 0, 0, 0.5)"`).
    Raw(String),
    /// A number, unit-suffixed with `px` at serialization unless the
    /// property is on the unitless allow-list.
    Number(f64),
    /// A reference into the theme token tree by dotted path, resolved at
    /// compile time (`"palette.common.white"`).
    Token(String),
}

impl StyleValue {
    /// Literal value helper.
    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }

    /// Numeric value helper.
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Theme token reference helper.
    pub fn token(path: impl Into<String>) -> Self {
        Self::Token(path.into())
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// A resolved value ready for serialization under a given property.
pub(crate) fn render(property: &str, raw: &StyleValue) -> Option<String> {
    match raw {
        StyleValue::Raw(text) => Some(text.clone()),
        StyleValue::Number(value) => Some(format_number(property, *value)),
        // Token references are resolved by the compiler before rendering.
        StyleValue::Token(_) => None,
    }
}
