//! Category models: attributes, kinds, mixins and actions.

mod action;
mod attribute;
mod category;
mod collection_type;
mod kind;
mod mixin;

pub use action::Action;
pub use attribute::Attribute;
pub use category::{Categorized, Category};
pub use collection_type::CollectionType;
pub use kind::Kind;
pub use mixin::Mixin;

/// Implements [`Categorized`] and the shared `with_*` builders for a type
/// with a `category` field.
macro_rules! category_builders {
    ($ty:ty) => {
        impl $ty {
            pub fn with_title(mut self, title: impl Into<String>) -> Self {
                self.category.title = Some(title.into());
                self
            }

            pub fn with_location(mut self, location: impl Into<String>) -> Self {
                self.category.location = Some(location.into());
                self
            }

            pub fn with_attribute(mut self, attribute: $crate::models::Attribute) -> Self {
                self.category.add_attribute(attribute);
                self
            }
        }

        impl $crate::models::Categorized for $ty {
            fn category(&self) -> &$crate::models::Category {
                &self.category
            }

            fn category_mut(&mut self) -> &mut $crate::models::Category {
                &mut self.category
            }
        }
    };
}

pub(crate) use category_builders;
