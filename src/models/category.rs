//! Identity fields shared by kinds, mixins and actions.

use serde::{Deserialize, Serialize};

use super::Attribute;
use crate::collection::SetCover;

/// Common identity of every OCCI category.
///
/// The identifier is `scheme + term`, e.g.
/// `http://schemas.ogf.org/occi/infrastructure#` + `network`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub scheme: String,
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Relative URI path under which entities of this category live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "SetCover::is_empty")]
    pub attributes: SetCover<Attribute>,
}

impl Category {
    pub fn new(scheme: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            term: term.into(),
            title: None,
            location: None,
            attributes: SetCover::new(),
        }
    }

    /// Canonical identifier: scheme followed by term.
    pub fn identifier(&self) -> String {
        format!("{}{}", self.scheme, self.term)
    }

    pub fn add_attribute(&mut self, attribute: Attribute) -> bool {
        self.attributes.add(attribute)
    }

    pub fn contains_attribute(&self, name: &str) -> bool {
        self.attributes.contains_identifier(name)
    }

    pub fn get_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<Attribute> {
        self.attributes.remove_identifier(name)
    }
}

/// Accessors for types built around a [`Category`].
pub trait Categorized {
    fn category(&self) -> &Category;

    fn category_mut(&mut self) -> &mut Category;

    fn scheme(&self) -> &str {
        &self.category().scheme
    }

    fn term(&self) -> &str {
        &self.category().term
    }

    fn title(&self) -> Option<&str> {
        self.category().title.as_deref()
    }

    fn location(&self) -> Option<&str> {
        self.category().location.as_deref()
    }

    fn attributes(&self) -> &SetCover<Attribute> {
        &self.category().attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_concatenates_scheme_and_term() {
        let category = Category::new("http://schemas.ogf.org/occi/core#", "resource");
        assert_eq!(
            category.identifier(),
            "http://schemas.ogf.org/occi/core#resource"
        );
    }

    #[test]
    fn test_attribute_operations() {
        let mut category = Category::new("http://example.com/occi#", "thing");
        assert!(category.add_attribute(Attribute::new("occi.core.id", true, true)));
        assert!(!category.add_attribute(Attribute::optional("occi.core.id")));

        assert!(category.contains_attribute("occi.core.id"));
        assert!(category.get_attribute("occi.core.id").unwrap().required);

        assert!(category.remove_attribute("occi.core.id").is_some());
        assert!(!category.contains_attribute("occi.core.id"));
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{"scheme":"http://example.com/occi#","term":"thing"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.title, None);
        assert!(category.attributes.is_empty());
    }
}
