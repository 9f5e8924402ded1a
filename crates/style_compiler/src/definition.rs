//! Style definitions: pure functions from theme to named rule blocks.

use crate::error::StyleCompileError;
use crate::rule_block::RuleBlock;
use std::fmt;
use std::sync::Arc;
use theme::Theme;

/// Ordered slot name → rule block pairs returned by a definition.
pub type SlotRules = Vec<(String, RuleBlock)>;

type BaseFn = Arc<dyn Fn(&Theme) -> Result<SlotRules, StyleCompileError> + Send + Sync>;
type VariantFn = Arc<dyn Fn(&Theme) -> Result<RuleBlock, StyleCompileError> + Send + Sync>;

/// A component's style definition: a pure mapping from a theme to named rule
/// blocks, attached at definition time and immutable for the lifetime of the
/// component.
///
/// Variants are an explicit enumeration of keys mapped to rule-block
/// fragments, selected downstream by exact key match. Variant slots compile
/// after base slots, so when a variant key reuses a base slot name its text
/// registers later and wins ties under equal specificity.
#[derive(Clone)]
pub struct StyleDefinition {
    base: BaseFn,
    variants: Vec<(String, VariantFn)>,
}

impl StyleDefinition {
    /// Define the base slots.
    pub fn new(
        base: impl Fn(&Theme) -> Result<SlotRules, StyleCompileError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            base: Arc::new(base),
            variants: Vec::new(),
        }
    }

    /// Add a tagged variant fragment under `key`.
    pub fn variant(
        mut self,
        key: impl Into<String>,
        fragment: impl Fn(&Theme) -> Result<RuleBlock, StyleCompileError> + Send + Sync + 'static,
    ) -> Self {
        self.variants.push((key.into(), Arc::new(fragment)));
        self
    }

    /// Evaluate the definition: base slots first, then variant slots in
    /// declaration order.
    pub fn slots(&self, theme: &Theme) -> Result<SlotRules, StyleCompileError> {
        let mut slots = (self.base)(theme)?;
        for (key, fragment) in &self.variants {
            slots.push((key.clone(), fragment(theme)?));
        }
        Ok(slots)
    }

    /// Declared variant keys, in declaration order.
    pub fn variant_keys(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|(key, _)| key.as_str())
    }
}

impl fmt::Debug for StyleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleDefinition")
            .field("variants", &self.variants.len())
            .finish_non_exhaustive()
    }
}
