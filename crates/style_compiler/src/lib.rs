//! Style rule compiler for the weft styling engine.
//!
//! Turns a component's [`StyleDefinition`] — a pure function of the active
//! [`theme::Theme`] — into resolved, serializable rule fragments:
//! - token references resolve to concrete CSS values,
//! - responsive entries expand to media-scoped fragments, narrowest to
//!   widest,
//! - nested/pseudo entries expand to suffix-scoped fragments,
//! - numeric values are unit-suffixed unless the property is on the
//!   unitless allow-list.
//!
//! Compilation is pure and side-effect free; registration and caching live
//! in `sheet_registry`. Failures carry the slot name and token path and are
//! never swallowed.

mod compile;
mod definition;
mod error;
mod rule_block;
mod serialize;
mod units;
mod value;

pub mod properties;

pub use compile::{CompiledSlot, RuleFragment, compile};
pub use definition::{SlotRules, StyleDefinition};
pub use error::StyleCompileError;
pub use rule_block::{Declaration, RuleBlock};
pub use serialize::{serialize_fragment, serialize_slot};
pub use units::{format_number, is_unitless};
pub use value::StyleValue;
