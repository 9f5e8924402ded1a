//! Per-call styling options: consumer classes and inline overrides.

use crate::component::StyledComponent;
use std::collections::HashMap;

/// Consumer-supplied additions merged over a component's generated classes.
///
/// Precedence, lowest to highest: generated base classes, extra class names
/// appended per slot, then an inline override definition compiled and
/// registered after the base sheet so its rules win ties.
#[derive(Clone, Debug, Default)]
pub struct UseStylesOptions {
    pub(crate) classes: HashMap<String, String>,
    pub(crate) overrides: Option<StyledComponent>,
}

impl UseStylesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a consumer class name to a slot.
    pub fn class(mut self, slot: impl Into<String>, class_name: impl Into<String>) -> Self {
        self.classes.insert(slot.into(), class_name.into());
        self
    }

    /// Conditionally append a consumer class name to a slot.
    pub fn class_if(
        self,
        condition: bool,
        slot: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        if condition {
            self.class(slot, class_name)
        } else {
            self
        }
    }

    /// Attach an inline override definition.
    ///
    /// The override is itself compiled, named, and registered — always after
    /// the base sheet, so its insertion indices are larger and its rules win
    /// under equal specificity. The name is the override's cache identity
    /// and should be unique to the call site.
    pub fn override_with(mut self, component: StyledComponent) -> Self {
        self.overrides = Some(component);
        self
    }
}
