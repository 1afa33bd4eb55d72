//! Attribute descriptors attached to categories.

use serde::{Deserialize, Serialize};

use crate::collection::Identifiable;

/// A named attribute a category defines for its entities.
///
/// Only the descriptor lives here; value typing and validation belong to
/// whoever binds entity attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Fully qualified name, e.g. `occi.core.title`.
    pub name: String,
    /// Whether an entity must supply a value.
    #[serde(default)]
    pub required: bool,
    /// Whether the value is fixed once set.
    #[serde(default)]
    pub immutable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, required: bool, immutable: bool) -> Self {
        Self {
            name: name.into(),
            required,
            immutable,
            description: None,
        }
    }

    /// A mutable attribute that entities may leave unset.
    pub fn optional(name: impl Into<String>) -> Self {
        Self::new(name, false, false)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Identifiable for Attribute {
    fn identifier(&self) -> String {
        self.name.clone()
    }
}
