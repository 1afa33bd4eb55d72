//! Mixins: capability extensions related to other mixins.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Category, Kind};
use crate::collection::Identifiable;

/// An optional capability attachable to entities of compatible kinds.
///
/// `related` is a directed relation: mixin A relates to mixin B when B's
/// identifier is in A's related set. It is not an inheritance chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mixin {
    #[serde(flatten)]
    pub category: Category,
    /// Identifiers of related mixins.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub related: BTreeSet<String>,
    /// Identifiers of kinds this mixin may be applied to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applies: Vec<String>,
}

impl Mixin {
    pub fn new(scheme: impl Into<String>, term: impl Into<String>) -> Self {
        Self::from_category(Category::new(scheme, term))
    }

    pub fn from_category(category: Category) -> Self {
        Self {
            category,
            related: BTreeSet::new(),
            applies: Vec::new(),
        }
    }

    pub fn with_related(mut self, mixin_identifier: impl Into<String>) -> Self {
        self.related.insert(mixin_identifier.into());
        self
    }

    pub fn with_applies(mut self, kind_identifier: impl Into<String>) -> Self {
        let kind_identifier = kind_identifier.into();
        if !self.applies.contains(&kind_identifier) {
            self.applies.push(kind_identifier);
        }
        self
    }

    /// True when `other` is in this mixin's related set.
    pub fn relates_to(&self, other: &Mixin) -> bool {
        self.relates_to_identifier(&other.identifier())
    }

    pub fn relates_to_identifier(&self, identifier: &str) -> bool {
        self.related.contains(identifier)
    }

    /// True when `kind` is listed as applicable.
    pub fn applies_to(&self, kind: &Kind) -> bool {
        let identifier = kind.identifier();
        self.applies.iter().any(|k| *k == identifier)
    }
}

super::category_builders!(Mixin);

impl Identifiable for Mixin {
    fn identifier(&self) -> String {
        self.category.identifier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Categorized;

    const SCHEME: &str = "http://example.com/occi/mixins#";

    #[test]
    fn test_relation_is_directed() {
        let base = Mixin::new(SCHEME, "os_tpl");
        let ubuntu = Mixin::new(SCHEME, "ubuntu").with_related(base.identifier());

        assert!(ubuntu.relates_to(&base));
        assert!(!base.relates_to(&ubuntu));
        assert!(ubuntu.relates_to_identifier(&format!("{}os_tpl", SCHEME)));
    }

    #[test]
    fn test_applies_deduplicates() {
        let network = Kind::new("http://schemas.ogf.org/occi/infrastructure#", "network");
        let compute = Kind::new("http://schemas.ogf.org/occi/infrastructure#", "compute");
        let mixin = Mixin::new(SCHEME, "ipnetwork")
            .with_applies(network.identifier())
            .with_applies(network.identifier());

        assert_eq!(mixin.applies.len(), 1);
        assert!(mixin.applies_to(&network));
        assert!(!mixin.applies_to(&compute));
        assert_eq!(mixin.term(), "ipnetwork");
    }
}
