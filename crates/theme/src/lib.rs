//! Theme model for the weft styling engine.
//!
//! A [`Theme`] is an immutable snapshot of design tokens (palette, type
//! scale, spacing unit, breakpoint thresholds) plus an open token tree for
//! anything component libraries add on top. Themes are:
//! - created once per application (or per request when server rendering),
//! - derived from a parent by [`Theme::resolve`] (field-by-field deep merge),
//! - identified by a content [`ThemeFingerprint`], never by reference, so
//!   structurally equal themes share downstream cache entries.
//!
//! Style definitions read tokens either through the typed helpers
//! ([`Theme::spacing`], [`Theme::px_to_rem`]) or by dotted path
//! ([`Theme::require`]), which is where a missing required token surfaces as
//! [`InvalidThemeError`].

mod breakpoints;
mod defaults;
mod fingerprint;
mod tokens;

pub use breakpoints::Breakpoints;
pub use defaults::default_tokens;
pub use fingerprint::ThemeFingerprint;
pub use tokens::{InvalidThemeError, TokenMap, TokenValue, deep_merge, lookup};

/// Spacing unit used when a theme carries no `spacing.unit` token.
const FALLBACK_SPACING_UNIT: f64 = 8.0;

/// Root font size used when a theme carries no `typography.html_font_size`.
const FALLBACK_HTML_FONT_SIZE: f64 = 16.0;

/// An immutable snapshot of design tokens.
///
/// Construction is the only time tokens are written; afterwards the snapshot
/// is shared read-only by every component styled against it. Overrides never
/// mutate in place, they produce a new snapshot via [`Theme::resolve`].
#[derive(Clone, Debug)]
pub struct Theme {
    tokens: TokenMap,
    fingerprint: ThemeFingerprint,
    breakpoints: Breakpoints,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_tokens(default_tokens())
    }
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        // Content identity: equal fingerprints mean equal token trees for
        // every purpose the engine has.
        self.fingerprint == other.fingerprint
    }
}

impl Eq for Theme {}

impl Theme {
    /// Build a theme from a complete token tree, as-is.
    pub fn from_tokens(tokens: TokenMap) -> Self {
        let fingerprint = ThemeFingerprint::of(&tokens);
        let breakpoints = Breakpoints::from_tokens(&tokens);
        log::debug!("theme snapshot created, fingerprint {fingerprint}");
        Self {
            tokens,
            fingerprint,
            breakpoints,
        }
    }

    /// Build a theme by merging `overrides` onto the built-in defaults.
    pub fn create(overrides: &TokenMap) -> Self {
        Self::from_tokens(deep_merge(&default_tokens(), overrides))
    }

    /// Derive a new snapshot by merging `overrides` onto `base`,
    /// field-by-field.
    ///
    /// Overriding one palette color keeps the rest of the palette; only map
    /// tokens merge, scalars and lists replace. Pure: neither input is
    /// touched.
    pub fn resolve(base: &Self, overrides: &TokenMap) -> Self {
        Self::from_tokens(deep_merge(&base.tokens, overrides))
    }

    /// Parse a theme from a JSON token document merged onto the defaults.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        let overrides: TokenMap = serde_json::from_str(source)?;
        Ok(Self::create(&overrides))
    }

    /// Content fingerprint of this snapshot; the cache key component.
    #[inline]
    pub const fn fingerprint(&self) -> ThemeFingerprint {
        self.fingerprint
    }

    /// The full token tree.
    #[inline]
    pub const fn tokens(&self) -> &TokenMap {
        &self.tokens
    }

    /// Breakpoint thresholds, narrowest first.
    #[inline]
    pub const fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Look up a token by dotted path.
    pub fn get(&self, path: &str) -> Option<&TokenValue> {
        lookup(&self.tokens, path)
    }

    /// Look up a token that a style definition requires.
    pub fn require(&self, path: &str) -> Result<&TokenValue, InvalidThemeError> {
        self.get(path).ok_or_else(|| InvalidThemeError::new(path))
    }

    /// Required string token by dotted path.
    pub fn require_str(&self, path: &str) -> Result<&str, InvalidThemeError> {
        self.require(path)?
            .as_str()
            .ok_or_else(|| InvalidThemeError::new(path))
    }

    /// Required numeric token by dotted path.
    pub fn require_number(&self, path: &str) -> Result<f64, InvalidThemeError> {
        self.require(path)?
            .as_number()
            .ok_or_else(|| InvalidThemeError::new(path))
    }

    /// Spacing scale: `spacing.unit` px times `factor`.
    pub fn spacing(&self, factor: f64) -> f64 {
        let unit = self
            .get("spacing.unit")
            .and_then(TokenValue::as_number)
            .unwrap_or(FALLBACK_SPACING_UNIT);
        unit * factor
    }

    /// Convert a px size to a rem string against the root font size.
    pub fn px_to_rem(&self, px: f64) -> String {
        let html_font_size = self
            .get("typography.html_font_size")
            .and_then(TokenValue::as_number)
            .unwrap_or(FALLBACK_HTML_FONT_SIZE);
        let rem = px / html_font_size;
        if rem.fract() == 0.0 {
            format!("{}rem", rem as i64)
        } else {
            format!("{rem}rem")
        }
    }
}
