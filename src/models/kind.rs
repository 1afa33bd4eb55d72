//! Kinds: resource type definitions with single inheritance.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Category;
use crate::collection::Identifiable;

/// A resource type definition.
///
/// The parent is held by identifier, not by reference: the
/// [`Model`](crate::model::Model) owns every kind and resolves parents on
/// demand, so a child may be registered before its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kind {
    #[serde(flatten)]
    pub category: Category,
    /// Identifier of the parent kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Identifiers of actions entities of this kind support.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub actions: BTreeSet<String>,
}

impl Kind {
    pub fn new(scheme: impl Into<String>, term: impl Into<String>) -> Self {
        Self::from_category(Category::new(scheme, term))
    }

    pub fn from_category(category: Category) -> Self {
        Self {
            category,
            parent: None,
            actions: BTreeSet::new(),
        }
    }

    pub fn with_parent(mut self, parent_identifier: impl Into<String>) -> Self {
        self.parent = Some(parent_identifier.into());
        self
    }

    pub fn with_action(mut self, action_identifier: impl Into<String>) -> Self {
        self.actions.insert(action_identifier.into());
        self
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn supports_action(&self, action_identifier: &str) -> bool {
        self.actions.contains(action_identifier)
    }
}

super::category_builders!(Kind);

impl Identifiable for Kind {
    fn identifier(&self) -> String {
        self.category.identifier()
    }
}
