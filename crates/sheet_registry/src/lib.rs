//! Stylesheet lifetime management for the weft styling engine.
//!
//! This crate owns everything between compilation and the document:
//! - [`ClassNameGenerator`] maps (component, slot) pairs to deterministic
//!   class identifiers,
//! - [`SheetCache`] memoizes compiled sheets per (component, theme
//!   fingerprint) key with reference counting and lazy eviction,
//! - [`InsertionRegistry`] assigns every rule block a place in the shared
//!   insertion order and forwards text to the active [`InjectionSink`],
//! - [`compile_and_register`] is the pipeline a cache miss runs.
//!
//! All state is instance-scoped: tests construct a fresh cache, registry,
//! and generator rather than relying on process-level singletons.

mod cache;
mod class_names;
mod counter;
mod error;
mod pipeline;
mod registry;
mod sheet;
mod sink;

pub use cache::{CacheKey, SheetCache, SweepPolicy};
pub use class_names::{ClassNameGenerator, NamingMode};
pub use counter::{InsertionCounter, InsertionIndex};
pub use error::{CacheKeyError, CacheKeyErrorKind};
pub use pipeline::compile_and_register;
pub use registry::InsertionRegistry;
pub use sheet::{CompiledStyleSheet, SlotSheet};
pub use sink::{BufferSink, InjectionSink, RuleKey};
