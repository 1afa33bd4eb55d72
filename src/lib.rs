//! occi-model - OCCI category registry
//!
//! A typed registry of OCCI kinds, mixins and actions. Categories are
//! stored uniquely by identifier, resolved by identifier or term (with
//! ambiguity reported, never guessed), and queried for inheritance and
//! relation closures.
//!
//! ```
//! use occi_model::model::{Model, Selector};
//! use occi_model::models::{CollectionType, Kind};
//! use occi_model::vocab::{RESOURCE_KIND_IDENTIFIER, SCHEME_CORE, SCHEME_INFRASTRUCTURE};
//!
//! let mut model = Model::new();
//! model.add_kind(Kind::new(SCHEME_CORE, "resource"));
//! model.add_kind(Kind::new(SCHEME_INFRASTRUCTURE, "network").with_parent(RESOURCE_KIND_IDENTIFIER));
//!
//! let network = model.find_kind_by_term("network").found().unwrap();
//! assert_eq!(model.find_kind_type(network), Ok(Some(CollectionType::Resource)));
//! assert_eq!(model.find_related_kinds(Selector::Term("resource")).unwrap().len(), 1);
//! ```

pub mod catalog;
pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod model;
pub mod models;
pub mod standard;
pub mod validation;
pub mod vocab;

pub use collection::{Identifiable, SetCover};
pub use error::{AppError, ModelError};
pub use model::{Lookup, Model, Selector};
