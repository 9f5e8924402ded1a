//! Authored rule blocks: declarations, responsive entries, nested selectors.

use crate::value::StyleValue;

/// One CSS declaration as authored: property name plus an unresolved value.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: StyleValue,
}

/// The declarations a style definition attaches to one slot.
///
/// Declaration order is preserved into the serialized output. Responsive
/// entries expand to media-scoped fragments ordered narrowest to widest;
/// nested entries expand to suffix-scoped fragments (`&:hover`, `& .icon`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleBlock {
    pub(crate) declarations: Vec<Declaration>,
    pub(crate) responsive: Vec<(String, RuleBlock)>,
    pub(crate) nested: Vec<(String, RuleBlock)>,
}

impl RuleBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.into(),
        });
        self
    }

    /// Scope a block to a breakpoint and wider (`min-width` media query).
    pub fn up(mut self, breakpoint: impl Into<String>, block: Self) -> Self {
        self.responsive.push((breakpoint.into(), block));
        self
    }

    /// Scope a block to a nested selector.
    ///
    /// The suffix is appended to the generated class selector: `":hover"`
    /// yields `.cls:hover`, `" .icon"` yields `.cls .icon`.
    pub fn nested(mut self, suffix: impl Into<String>, block: Self) -> Self {
        self.nested.push((suffix.into(), block));
        self
    }

    /// Whether the block contributes nothing at any scope.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
            && self.responsive.iter().all(|(_, block)| block.is_empty())
            && self.nested.iter().all(|(_, block)| block.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_declaration_order() {
        let block = RuleBlock::new()
            .set("position", "absolute")
            .set("left", 0)
            .set("height", 48.0);
        let properties: Vec<&str> = block
            .declarations
            .iter()
            .map(|declaration| declaration.property.as_str())
            .collect();
        assert_eq!(properties, ["position", "left", "height"]);
    }

    #[test]
    fn emptiness_sees_through_scopes() {
        assert!(RuleBlock::new().is_empty());
        assert!(
            RuleBlock::new()
                .up("sm", RuleBlock::new())
                .nested(":hover", RuleBlock::new())
                .is_empty()
        );
        assert!(
            !RuleBlock::new()
                .nested(":hover", RuleBlock::new().set("opacity", 0.5))
                .is_empty()
        );
    }
}
