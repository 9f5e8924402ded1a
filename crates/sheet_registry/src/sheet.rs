//! Compiled stylesheet artifacts.

use crate::counter::InsertionIndex;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use theme::ThemeFingerprint;

/// One slot's share of a compiled stylesheet.
#[derive(Clone, Debug)]
pub struct SlotSheet {
    /// Slot name from the style definition.
    pub slot: String,
    /// Generated class identifier.
    pub class_name: String,
    /// Serialized rule text for all of the slot's fragments, newline-joined.
    /// Empty for a zero-rule slot.
    pub css: String,
    /// Insertion indices of the slot's registered fragments, in
    /// registration order. Empty for a zero-rule slot.
    pub indices: SmallVec<[InsertionIndex; 4]>,
}

/// The output of compiling one style definition against one theme: per slot,
/// a generated class name, serialized rule text, and insertion indices.
///
/// For a fixed (component identity, theme fingerprint) pair the class names
/// and rule text are byte-identical across repeated generations; only the
/// insertion indices depend on registration history.
#[derive(Debug)]
pub struct CompiledStyleSheet {
    fingerprint: ThemeFingerprint,
    slots: Vec<SlotSheet>,
    by_slot: FxHashMap<String, usize>,
}

impl CompiledStyleSheet {
    /// Assemble a sheet from its slots.
    pub fn new(fingerprint: ThemeFingerprint, slots: Vec<SlotSheet>) -> Self {
        let by_slot = slots
            .iter()
            .enumerate()
            .map(|(position, slot)| (slot.slot.clone(), position))
            .collect();
        Self {
            fingerprint,
            slots,
            by_slot,
        }
    }

    /// Fingerprint of the theme this sheet was compiled under.
    pub const fn fingerprint(&self) -> ThemeFingerprint {
        self.fingerprint
    }

    /// All slots, in compilation order.
    pub fn slots(&self) -> &[SlotSheet] {
        &self.slots
    }

    /// A slot by name.
    ///
    /// When a variant key reuses a base slot name the later (variant) entry
    /// wins the lookup; both texts stay registered.
    pub fn get(&self, slot: &str) -> Option<&SlotSheet> {
        self.by_slot.get(slot).map(|&position| &self.slots[position])
    }

    /// Generated class name for a slot.
    pub fn class(&self, slot: &str) -> Option<&str> {
        self.get(slot).map(|entry| entry.class_name.as_str())
    }
}
