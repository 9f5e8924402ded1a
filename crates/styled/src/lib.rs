//! Public facade of the weft styling engine.
//!
//! A rendering component asks the engine for its styles and gets back
//! per-slot class lists:
//!
//! ```
//! use styled::{StyleEngine, StyledComponent};
//! use style_compiler::properties::*;
//! use style_compiler::{RuleBlock, StyleDefinition, StyleValue};
//!
//! let engine = StyleEngine::default();
//! let button = StyledComponent::new(
//!     "Button",
//!     StyleDefinition::new(|theme| {
//!         Ok(vec![(
//!             "root".to_owned(),
//!             RuleBlock::new()
//!                 .set(PADDING, StyleValue::number(theme.spacing(1.0)))
//!                 .set(COLOR, StyleValue::token("palette.primary.contrast_text"))
//!                 .set(BACKGROUND_COLOR, StyleValue::token("palette.primary.main")),
//!         )])
//!     }),
//! );
//!
//! let styles = engine.use_styles(&button).unwrap();
//! assert!(!styles.class("root").is_empty());
//! let critical = engine.extract_critical_styles();
//! assert!(critical.contains("padding:8px"));
//! ```
//!
//! Behind `use_styles`: the active theme snapshot is read, the sheet cache
//! is consulted under the (component identity, theme fingerprint) key — a
//! miss runs compile → name → register exactly once even under concurrent
//! first acquisition — and the override merge combines generated classes
//! with whatever the caller supplied. Dropping the handle releases the
//! cache references.

mod component;
mod engine;
mod error;
mod handle;
mod merge;
mod options;

pub use component::StyledComponent;
pub use engine::{EngineConfig, StyleEngine};
pub use error::{EngineError, ErrorBoundary, LogBoundary};
pub use handle::StyleHandle;
pub use merge::FinalClasses;
pub use options::UseStylesOptions;

// Commonly needed alongside the facade.
pub use sheet_registry::{BufferSink, InjectionSink, NamingMode, RuleKey, SweepPolicy};
pub use style_compiler::{RuleBlock, StyleCompileError, StyleDefinition, StyleValue};
pub use theme::{InvalidThemeError, Theme, ThemeFingerprint, TokenMap, TokenValue};
