//! Override merge: generated classes + consumer classes + inline overrides.

use sheet_registry::CompiledStyleSheet;
use smallvec::SmallVec;
use std::collections::HashMap;

/// The final per-slot class lists a component renders with.
///
/// Lists are ordered lowest to highest precedence and joined with spaces.
/// Overrides are additive: the base generated class is never dropped, so
/// removing a base declaration takes an explicit counter-declaration at
/// higher precedence, not omission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FinalClasses {
    slots: HashMap<String, String>,
}

impl FinalClasses {
    /// Space-joined class list for a slot; empty when the slot is unknown
    /// (an unstyled fallback handle has no slots at all).
    pub fn class(&self, slot: &str) -> &str {
        self.slots.get(slot).map_or("", String::as_str)
    }

    /// Class list for a slot, if the slot exists.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    /// Iterate (slot, class list) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots
            .iter()
            .map(|(slot, classes)| (slot.as_str(), classes.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Combine a generated sheet with consumer classes and an optional override
/// sheet into final class lists.
pub(crate) fn merge_classes(
    base: &CompiledStyleSheet,
    consumer: &HashMap<String, String>,
    override_sheet: Option<&CompiledStyleSheet>,
) -> FinalClasses {
    let mut slots = HashMap::with_capacity(base.slots().len());

    for slot_sheet in base.slots() {
        let mut list: SmallVec<[&str; 3]> = SmallVec::new();
        list.push(slot_sheet.class_name.as_str());
        if let Some(extra) = consumer.get(&slot_sheet.slot) {
            list.push(extra.as_str());
        }
        if let Some(override_class) =
            override_sheet.and_then(|sheet| sheet.class(&slot_sheet.slot))
        {
            list.push(override_class);
        }
        slots.insert(slot_sheet.slot.clone(), list.join(" "));
    }

    // Override-only slots are still reachable; the base simply has no class
    // to contribute there.
    if let Some(sheet) = override_sheet {
        for slot_sheet in sheet.slots() {
            if !slots.contains_key(&slot_sheet.slot) {
                slots.insert(slot_sheet.slot.clone(), slot_sheet.class_name.clone());
            }
        }
    }

    for slot in consumer.keys() {
        if !slots.contains_key(slot) {
            log::warn!("consumer class targets unknown slot `{slot}`");
        }
    }

    FinalClasses { slots }
}
