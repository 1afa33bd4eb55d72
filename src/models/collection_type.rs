//! Structural shape of a kind: resource or link.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether entities of a kind deserialize as resources or as links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    Resource,
    Link,
}

impl CollectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionType::Resource => "resource",
            CollectionType::Link => "link",
        }
    }
}

impl std::fmt::Display for CollectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Resource" | "resource" => Ok(CollectionType::Resource),
            "Link" | "link" => Ok(CollectionType::Link),
            _ => Err(format!(
                "Invalid collection type '{}'. Valid values: resource, link",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("link".parse::<CollectionType>(), Ok(CollectionType::Link));
        assert_eq!("Resource".parse::<CollectionType>(), Ok(CollectionType::Resource));
        assert!("entity".parse::<CollectionType>().is_err());
        assert_eq!(CollectionType::Resource.to_string(), "resource");
    }
}
