//! Evaluation of a style definition against a theme into resolved fragments.

use crate::definition::StyleDefinition;
use crate::error::StyleCompileError;
use crate::rule_block::{Declaration, RuleBlock};
use crate::units::format_number;
use crate::value::{StyleValue, render};
use theme::{Theme, TokenValue};

/// One serializable piece of a slot's styling: a set of resolved
/// declarations under an optional media condition and selector suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleFragment {
    /// Full media condition (`@media (min-width:600px)`), if scoped.
    pub media: Option<String>,
    /// Selector suffix appended to the class selector (`":hover"`,
    /// `" .icon"`); empty for the plain block.
    pub suffix: String,
    /// Resolved property → CSS value pairs, in authored order.
    pub declarations: Vec<(String, String)>,
}

/// All fragments compiled for one slot.
///
/// A slot whose block resolves to zero declarations is retained with an
/// empty fragment list, keeping class-name stability even when a variant
/// contributes nothing under the active theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledSlot {
    pub slot: String,
    pub fragments: Vec<RuleFragment>,
}

/// Compile a definition against a theme.
///
/// Token references resolve here; responsive entries expand into
/// media-scoped fragments ordered narrowest to widest so wider queries
/// override narrower ones under equal specificity; nested entries expand
/// into suffix-scoped fragments. Deterministic: the same definition and an
/// equal-content theme always produce identical output.
pub fn compile(
    definition: &StyleDefinition,
    theme: &Theme,
) -> Result<Vec<CompiledSlot>, StyleCompileError> {
    let slots = definition.slots(theme)?;
    let mut compiled = Vec::with_capacity(slots.len());
    for (slot, block) in slots {
        let mut fragments: Vec<(usize, RuleFragment)> = Vec::new();
        flatten(&slot, theme, &block, 0, None, String::new(), &mut fragments)?;
        // Plain and nested fragments keep rank 0; responsive fragments rank
        // by breakpoint position. Stable sort preserves authored order
        // within a rank.
        fragments.sort_by_key(|(rank, _)| *rank);
        compiled.push(CompiledSlot {
            slot,
            fragments: fragments.into_iter().map(|(_, fragment)| fragment).collect(),
        });
    }
    log::trace!(
        "compiled {} slots against theme {}",
        compiled.len(),
        theme.fingerprint()
    );
    Ok(compiled)
}

fn flatten(
    slot: &str,
    theme: &Theme,
    block: &RuleBlock,
    media_rank: usize,
    media: Option<String>,
    suffix: String,
    out: &mut Vec<(usize, RuleFragment)>,
) -> Result<(), StyleCompileError> {
    let declarations = resolve_declarations(slot, theme, &block.declarations)?;
    if !declarations.is_empty() {
        out.push((
            media_rank,
            RuleFragment {
                media: media.clone(),
                suffix: suffix.clone(),
                declarations,
            },
        ));
    }

    for (child_suffix, child) in &block.nested {
        let combined = format!("{suffix}{child_suffix}");
        flatten(slot, theme, child, media_rank, media.clone(), combined, out)?;
    }

    for (breakpoint, child) in &block.responsive {
        let position = theme.breakpoints().position(breakpoint).ok_or_else(|| {
            StyleCompileError::UnknownBreakpoint {
                slot: slot.to_owned(),
                breakpoint: breakpoint.clone(),
            }
        })?;
        let condition = theme.breakpoints().up(breakpoint);
        // A responsive entry inside another responsive entry narrows to the
        // inner condition rather than combining queries.
        flatten(slot, theme, child, position + 1, condition, suffix.clone(), out)?;
    }

    Ok(())
}

fn resolve_declarations(
    slot: &str,
    theme: &Theme,
    declarations: &[Declaration],
) -> Result<Vec<(String, String)>, StyleCompileError> {
    let mut resolved = Vec::with_capacity(declarations.len());
    for declaration in declarations {
        let value = match &declaration.value {
            StyleValue::Token(path) => resolve_token(slot, theme, &declaration.property, path)?,
            other => match render(&declaration.property, other) {
                Some(text) => text,
                None => continue,
            },
        };
        resolved.push((declaration.property.clone(), value));
    }
    Ok(resolved)
}

fn resolve_token(
    slot: &str,
    theme: &Theme,
    property: &str,
    path: &str,
) -> Result<String, StyleCompileError> {
    let token = theme
        .get(path)
        .ok_or_else(|| StyleCompileError::UnresolvedToken {
            slot: slot.to_owned(),
            token_path: path.to_owned(),
        })?;
    match token {
        TokenValue::String(text) => Ok(text.clone()),
        TokenValue::Number(value) => Ok(format_number(property, *value)),
        TokenValue::Bool(_) | TokenValue::List(_) | TokenValue::Map(_) => {
            Err(StyleCompileError::MalformedValue {
                slot: slot.to_owned(),
                property: property.to_owned(),
                token_path: path.to_owned(),
            })
        }
    }
}
