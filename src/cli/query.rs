//! Lookup, relation and classification command handlers.

use color_eyre::eyre::{bail, eyre};
use color_eyre::Result;

use crate::model::{Lookup, Model, Selector};

use super::{App, CategoryKind};

impl App {
    pub(super) fn run_list(&self, model: &Model, category: CategoryKind) -> Result<()> {
        match category {
            CategoryKind::Kind => self.print_categories(model.kinds().collect()),
            CategoryKind::Mixin => self.print_categories(model.mixins().collect()),
            CategoryKind::Action => self.print_categories(model.actions().collect()),
        }
    }

    pub(super) fn run_find(
        &self,
        model: &Model,
        category: CategoryKind,
        selector: &str,
        rel: Option<&str>,
    ) -> Result<()> {
        let selector = Selector::parse(selector);

        if rel.is_some() && category != CategoryKind::Mixin {
            bail!("--rel only applies to mixins");
        }

        match category {
            CategoryKind::Kind => {
                let kind = found(model.resolve_kind(selector), "kind", selector)?;
                self.print_categories(vec![kind])
            }
            CategoryKind::Mixin => {
                let lookup = match (selector, rel) {
                    (Selector::Term(term), Some(rel)) => {
                        model.find_mixin_with_rel(term, Selector::parse(rel))
                    }
                    (Selector::Identifier(_), Some(_)) => {
                        bail!("--rel needs a term, not a full identifier")
                    }
                    (_, None) => model.resolve_mixin(selector),
                };
                let mixin = found(lookup, "mixin", selector)?;
                self.print_categories(vec![mixin])
            }
            CategoryKind::Action => {
                let action = found(model.resolve_action(selector), "action", selector)?;
                self.print_categories(vec![action])
            }
        }
    }

    pub(super) fn run_related(
        &self,
        model: &Model,
        category: CategoryKind,
        selector: &str,
    ) -> Result<()> {
        let selector = Selector::parse(selector);
        match category {
            CategoryKind::Kind => self.print_categories(model.find_related_kinds(selector)?),
            CategoryKind::Mixin => self.print_categories(model.find_related_mixins(selector)?),
            CategoryKind::Action => bail!("actions have no relations"),
        }
    }

    pub(super) fn run_type(
        &self,
        model: &Model,
        selector: Option<&str>,
        location: Option<&str>,
    ) -> Result<()> {
        let collection_type = match (selector, location) {
            (_, Some(location)) => model.find_kind_type_by_location(location)?,
            (Some(selector), None) => {
                let selector = Selector::parse(selector);
                let kind = found(model.resolve_kind(selector), "kind", selector)?;
                model.find_kind_type(kind)?
            }
            (None, None) => bail!("either a kind or --location is required"),
        };

        match collection_type {
            Some(collection_type) => self.print_value(&collection_type),
            None => bail!("kind does not descend from the resource or link root"),
        }
    }
}

/// Unwraps a lookup for the CLI, where a miss is an error.
fn found<T>(lookup: Lookup<T>, what: &str, selector: Selector<'_>) -> Result<T> {
    lookup
        .into_result()?
        .ok_or_else(|| eyre!("No {} matches '{}'", what, selector))
}
