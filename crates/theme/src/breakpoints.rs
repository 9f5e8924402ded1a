//! Responsive breakpoint thresholds and media condition helpers.

use crate::tokens::{TokenMap, TokenValue, lookup};

/// Viewport width thresholds, ordered narrowest to widest.
///
/// Responsive rule fragments are emitted in this order so that wider
/// queries override narrower ones under equal specificity.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoints {
    entries: Vec<(String, f64)>,
}

impl Breakpoints {
    /// Read breakpoint thresholds from a token tree (`breakpoints.*`).
    ///
    /// Unknown or non-numeric entries are skipped; an absent group yields an
    /// empty set, which disables responsive expansion rather than failing.
    pub fn from_tokens(tokens: &TokenMap) -> Self {
        let mut entries: Vec<(String, f64)> = lookup(tokens, "breakpoints")
            .and_then(TokenValue::as_map)
            .map(|group| {
                group
                    .iter()
                    .filter_map(|(key, value)| value.as_number().map(|px| (key.clone(), px)))
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        Self { entries }
    }

    /// Minimum viewport width for a breakpoint key, in px.
    pub fn min_width(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, px)| *px)
    }

    /// Rank of a key from narrowest (0) upward.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(name, _)| name == key)
    }

    /// Media condition matching this breakpoint and wider, e.g.
    /// `@media (min-width:600px)`.
    pub fn up(&self, key: &str) -> Option<String> {
        self.min_width(key)
            .map(|px| format!("@media (min-width:{}px)", fmt_number(px)))
    }

    /// Breakpoint keys, narrowest first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Whether no thresholds are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
