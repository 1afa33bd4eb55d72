//! Actions: named operations on entities.

use serde::{Deserialize, Serialize};

use super::Category;
use crate::collection::Identifiable;

/// An operation definable independently of any kind or mixin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(flatten)]
    pub category: Category,
}

impl Action {
    pub fn new(scheme: impl Into<String>, term: impl Into<String>) -> Self {
        Self::from_category(Category::new(scheme, term))
    }

    pub fn from_category(category: Category) -> Self {
        Self { category }
    }
}

super::category_builders!(Action);

impl Identifiable for Action {
    fn identifier(&self) -> String {
        self.category.identifier()
    }
}
