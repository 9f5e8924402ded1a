//! Unit handling for numeric declaration values.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Properties whose numeric values are valid without a unit.
///
/// Everything else gets a `px` suffix. Zero never takes a unit.
static UNITLESS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "animation-iteration-count",
        "box-flex",
        "box-flex-group",
        "column-count",
        "columns",
        "fill-opacity",
        "flex",
        "flex-grow",
        "flex-shrink",
        "font-weight",
        "grid-column",
        "grid-row",
        "line-height",
        "opacity",
        "order",
        "orphans",
        "stop-opacity",
        "stroke-opacity",
        "tab-size",
        "widows",
        "z-index",
        "zoom",
    ])
});

/// Whether a property accepts bare numbers.
pub fn is_unitless(property: &str) -> bool {
    UNITLESS.contains(property)
}

/// Serialize a numeric value for a property, suffixing `px` where a bare
/// number would be invalid.
pub fn format_number(property: &str, value: f64) -> String {
    let bare = if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    };
    if value == 0.0 || is_unitless(property) {
        bare
    } else {
        format!("{bare}px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_suffix_for_lengths() {
        assert_eq!(format_number("margin", 16.0), "16px");
        assert_eq!(format_number("height", 48.0), "48px");
        assert_eq!(format_number("width", 2.5), "2.5px");
    }

    #[test]
    fn unitless_properties_stay_bare() {
        assert_eq!(format_number("z-index", 1300.0), "1300");
        assert_eq!(format_number("flex-grow", 1.0), "1");
        assert_eq!(format_number("line-height", 1.5), "1.5");
        assert_eq!(format_number("order", -1.0), "-1");
    }

    #[test]
    fn zero_never_takes_a_unit() {
        assert_eq!(format_number("margin", 0.0), "0");
        assert_eq!(format_number("opacity", 0.0), "0");
    }
}
