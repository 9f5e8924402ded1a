//! Serialization of resolved fragments into CSS rule text.
//!
//! Output is compact and deterministic: for a fixed (definition, theme
//! content) pair the bytes are identical across runs, which is what lets
//! server-rendered markup match client hydration.

use crate::compile::RuleFragment;

/// Serialize one fragment against its generated class name.
pub fn serialize_fragment(class_name: &str, fragment: &RuleFragment) -> String {
    let mut body = String::new();
    for (property, value) in &fragment.declarations {
        body.push_str(&format!("{property}:{value};"));
    }
    let rule = format!(".{class_name}{}{{{body}}}", fragment.suffix);
    match &fragment.media {
        Some(condition) => format!("{condition}{{{rule}}}"),
        None => rule,
    }
}

/// Serialize a slot's fragments as one newline-joined rule text block.
pub fn serialize_slot(class_name: &str, fragments: &[RuleFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| serialize_fragment(class_name, fragment))
        .collect::<Vec<_>>()
        .join("\n")
}
