//! Built-in design tokens installed under every created theme.

use crate::tokens::{TokenMap, TokenValue};

fn entry(pairs: Vec<(&str, TokenValue)>) -> TokenValue {
    TokenValue::Map(
        pairs
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
    )
}

/// The default token tree: a light palette, a type scale, an 8px spacing
/// unit, and the standard breakpoint thresholds.
pub fn default_tokens() -> TokenMap {
    let palette = entry(vec![
        (
            "common",
            entry(vec![("black", "#000".into()), ("white", "#fff".into())]),
        ),
        (
            "primary",
            entry(vec![
                ("light", "#7986cb".into()),
                ("main", "#3f51b5".into()),
                ("dark", "#303f9f".into()),
                ("contrast_text", "#fff".into()),
            ]),
        ),
        (
            "secondary",
            entry(vec![
                ("light", "#ff4081".into()),
                ("main", "#f50057".into()),
                ("dark", "#c51162".into()),
                ("contrast_text", "#fff".into()),
            ]),
        ),
        (
            "error",
            entry(vec![
                ("light", "#e57373".into()),
                ("main", "#f44336".into()),
                ("dark", "#d32f2f".into()),
                ("contrast_text", "#fff".into()),
            ]),
        ),
        (
            "text",
            entry(vec![
                ("primary", "rgba(0, 0, 0, 0.87)".into()),
                ("secondary", "rgba(0, 0, 0, 0.54)".into()),
                ("disabled", "rgba(0, 0, 0, 0.38)".into()),
            ]),
        ),
        (
            "background",
            entry(vec![("paper", "#fff".into()), ("default", "#fafafa".into())]),
        ),
        ("divider", "rgba(0, 0, 0, 0.12)".into()),
    ]);

    let typography = entry(vec![
        (
            "font_family",
            "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif".into(),
        ),
        ("font_size", 14.0.into()),
        ("html_font_size", 16.0.into()),
        ("font_weight_light", 300.0.into()),
        ("font_weight_regular", 400.0.into()),
        ("font_weight_medium", 500.0.into()),
        ("font_weight_bold", 700.0.into()),
    ]);

    let spacing = entry(vec![("unit", 8.0.into())]);

    let breakpoints = entry(vec![
        ("xs", 0.0.into()),
        ("sm", 600.0.into()),
        ("md", 960.0.into()),
        ("lg", 1280.0.into()),
        ("xl", 1920.0.into()),
    ]);

    let mut tokens = TokenMap::new();
    tokens.insert("palette".to_owned(), palette);
    tokens.insert("typography".to_owned(), typography);
    tokens.insert("spacing".to_owned(), spacing);
    tokens.insert("breakpoints".to_owned(), breakpoints);
    tokens
}
