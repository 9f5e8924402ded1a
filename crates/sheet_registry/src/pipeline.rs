//! The compile → name → register pipeline run on a cache miss.

use crate::class_names::ClassNameGenerator;
use crate::registry::InsertionRegistry;
use crate::sheet::{CompiledStyleSheet, SlotSheet};
use crate::sink::RuleKey;
use smallvec::SmallVec;
use style_compiler::{StyleCompileError, StyleDefinition, compile, serialize_fragment};
use theme::Theme;

/// Compile a definition, assign class names, and register every fragment in
/// insertion order.
///
/// Runs inside the cache's per-key section on first acquisition, so
/// registration for one key is serialized while the shared counter keeps
/// the global order across keys. Zero-rule slots get a class name but
/// register no text.
pub fn compile_and_register(
    component: &str,
    definition: &StyleDefinition,
    theme: &Theme,
    names: &ClassNameGenerator,
    registry: &InsertionRegistry,
) -> Result<CompiledStyleSheet, StyleCompileError> {
    let compiled = compile(definition, theme)?;
    let fingerprint = theme.fingerprint();

    let mut slots = Vec::with_capacity(compiled.len());
    for compiled_slot in compiled {
        let class_name = names.name(component, &compiled_slot.slot, fingerprint);
        let key = RuleKey::new(class_name.clone(), fingerprint);

        let mut indices = SmallVec::new();
        let mut pieces = Vec::with_capacity(compiled_slot.fragments.len());
        for fragment in &compiled_slot.fragments {
            let css = serialize_fragment(&class_name, fragment);
            indices.push(registry.register(&key, &css));
            pieces.push(css);
        }

        slots.push(SlotSheet {
            slot: compiled_slot.slot,
            class_name,
            css: pieces.join("\n"),
            indices,
        });
    }

    log::debug!(
        "registered sheet for {component}@{fingerprint} ({} slots)",
        slots.len()
    );
    Ok(CompiledStyleSheet::new(fingerprint, slots))
}
