//! Design token tree: values, deep merge, and dotted-path lookup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single design token value.
///
/// Token trees are open-ended: anything a style definition wants to read can
/// live here. Maps merge field-by-field during resolution; every other
/// variant replaces wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A boolean flag token.
    Bool(bool),
    /// A numeric token (spacing units, breakpoint thresholds, font sizes).
    Number(f64),
    /// A string token (colors, font stacks, keywords).
    String(String),
    /// An ordered list of tokens.
    List(Vec<TokenValue>),
    /// A nested token group.
    Map(TokenMap),
}

/// A sorted mapping from token name to value.
///
/// `BTreeMap` keeps keys ordered, which makes the serialized form canonical
/// without a separate normalization pass.
pub type TokenMap = BTreeMap<String, TokenValue>;

impl TokenValue {
    /// Numeric value of this token, if it is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// String value of this token, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Nested map of this token, if it is a group.
    pub fn as_map(&self) -> Option<&TokenMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Merge `overrides` onto `base`, field-by-field.
///
/// Map values merge recursively so overriding one palette color keeps the
/// rest of the palette. Scalars and lists replace the base value.
pub fn deep_merge(base: &TokenMap, overrides: &TokenMap) -> TokenMap {
    let mut merged = base.clone();
    for (key, incoming) in overrides {
        let replacement = match (merged.remove(key), incoming) {
            (Some(TokenValue::Map(existing)), TokenValue::Map(extra)) => {
                TokenValue::Map(deep_merge(&existing, extra))
            }
            (_, value) => value.clone(),
        };
        merged.insert(key.clone(), replacement);
    }
    merged
}

/// Look up a token by dotted path, e.g. `palette.primary.main`.
pub fn lookup<'tokens>(tokens: &'tokens TokenMap, path: &str) -> Option<&'tokens TokenValue> {
    let mut segments = path.split('.');
    let mut current = tokens.get(segments.next()?)?;
    for segment in segments {
        current = current.as_map()?.get(segment)?;
    }
    Some(current)
}

/// A token required by a style definition is absent from the resolved theme.
///
/// Surfaced lazily, at first compile of a definition that references the
/// token. No default can be assumed, so this is not recoverable locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidThemeError {
    /// Dotted path of the missing token.
    pub token_path: String,
}

impl InvalidThemeError {
    pub fn new(token_path: impl Into<String>) -> Self {
        Self {
            token_path: token_path.into(),
        }
    }
}

impl fmt::Display for InvalidThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "required theme token missing: {}", self.token_path)
    }
}

impl std::error::Error for InvalidThemeError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenMap {
        let mut palette = TokenMap::new();
        palette.insert("main".to_owned(), TokenValue::from("#3f51b5"));
        palette.insert("dark".to_owned(), TokenValue::from("#303f9f"));
        let mut root = TokenMap::new();
        root.insert("primary".to_owned(), TokenValue::Map(palette));
        root.insert("divider".to_owned(), TokenValue::from("rgba(0, 0, 0, 0.12)"));
        root
    }

    #[test]
    fn merge_keeps_sibling_fields() {
        let base = sample();
        let mut primary = TokenMap::new();
        primary.insert("main".to_owned(), TokenValue::from("#ff0000"));
        let mut overrides = TokenMap::new();
        overrides.insert("primary".to_owned(), TokenValue::Map(primary));

        let merged = deep_merge(&base, &overrides);
        assert_eq!(
            lookup(&merged, "primary.main").and_then(TokenValue::as_str),
            Some("#ff0000")
        );
        // Sibling untouched by the override survives the merge.
        assert_eq!(
            lookup(&merged, "primary.dark").and_then(TokenValue::as_str),
            Some("#303f9f")
        );
        assert_eq!(
            lookup(&merged, "divider").and_then(TokenValue::as_str),
            Some("rgba(0, 0, 0, 0.12)")
        );
    }

    #[test]
    fn scalar_override_replaces() {
        let base = sample();
        let mut overrides = TokenMap::new();
        overrides.insert("divider".to_owned(), TokenValue::from("#eee"));
        let merged = deep_merge(&base, &overrides);
        assert_eq!(
            lookup(&merged, "divider").and_then(TokenValue::as_str),
            Some("#eee")
        );
    }

    #[test]
    fn lookup_missing_path() {
        let tokens = sample();
        assert!(lookup(&tokens, "primary.light").is_none());
        assert!(lookup(&tokens, "typography.font_family").is_none());
        assert!(lookup(&tokens, "divider.nested").is_none());
    }
}
