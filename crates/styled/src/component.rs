//! Styled component identities.

use style_compiler::StyleDefinition;

/// A component identity paired with its style definition.
///
/// The name is the cache identity: every render of the same styled
/// component shares one cache entry per theme fingerprint. Names must be
/// unique per engine; inline override definitions passed through
/// [`crate::UseStylesOptions`] carry their own call-site name for the same
/// reason.
#[derive(Clone, Debug)]
pub struct StyledComponent {
    name: String,
    definition: StyleDefinition,
}

impl StyledComponent {
    pub fn new(name: impl Into<String>, definition: StyleDefinition) -> Self {
        Self {
            name: name.into(),
            definition,
        }
    }

    /// The component identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attached style definition.
    pub const fn definition(&self) -> &StyleDefinition {
        &self.definition
    }
}
