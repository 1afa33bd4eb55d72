//! The category registry.
//!
//! [`Model`] owns one [`SetCover`] per category kind and answers the
//! questions request and response handling ask of it:
//!
//! - lookup by full identifier (exact, never ambiguous)
//! - lookup by term ([`Lookup::Ambiguous`] when more than one category shares it)
//! - relation closure: descendants of a kind, mixins related to a mixin
//! - classification of a kind as resource- or link-shaped
//!
//! Kinds reference their parents by identifier, so every parent walk goes
//! through the registry and carries a visited set. A cycle is reported as
//! [`ModelError::ParentCycle`] instead of looping.
//!
//! The model does no locking. Embedders that mutate it while querying
//! from other threads wrap the whole model in a `RwLock`.

use std::collections::HashSet;
use std::ops::ControlFlow;

use tracing::{debug, warn};

use crate::collection::{Identifiable, SetCover};
use crate::error::ModelError;
use crate::models::{Action, Attribute, Categorized, CollectionType, Kind, Mixin};
use crate::vocab::{LINK_KIND_IDENTIFIER, RESOURCE_KIND_IDENTIFIER};

/// How a caller names a category: by full identifier or by bare term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `scheme + term`, e.g. `http://schemas.ogf.org/occi/core#resource`.
    Identifier(&'a str),
    /// Term only, e.g. `resource`. May be ambiguous.
    Term(&'a str),
}

impl<'a> Selector<'a> {
    /// Strings containing `#` are identifiers, anything else is a term.
    ///
    /// Identifiers whose scheme has no `#` (e.g. `urn:example:vm`) parse as
    /// terms; the `resolve_*` finders match a term that equals a registered
    /// identifier before falling back to the term scan.
    pub fn parse(value: &'a str) -> Self {
        if value.contains('#') {
            Selector::Identifier(value)
        } else {
            Selector::Term(value)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Selector::Identifier(s) | Selector::Term(s) => s,
        }
    }
}

impl std::fmt::Display for Selector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a term-based lookup.
///
/// Zero matches is the common, expected case; more than one match means the
/// catalog is ambiguous for that term and the caller has to disambiguate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    /// Holds the offending term.
    Ambiguous(String),
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Lookup::NotFound)
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Lookup::Ambiguous(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
            Lookup::Ambiguous(term) => Lookup::Ambiguous(term),
        }
    }

    /// Turns ambiguity into [`ModelError::AmbiguousIdentifier`] so callers can use `?`.
    pub fn into_result(self) -> Result<Option<T>, ModelError> {
        match self {
            Lookup::Found(value) => Ok(Some(value)),
            Lookup::NotFound => Ok(None),
            Lookup::Ambiguous(term) => Err(ModelError::AmbiguousIdentifier { term }),
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}

/// Registry of kinds, mixins and actions.
///
/// Identifiers are unique per category kind; a kind and a mixin may share
/// one. Every `add_*` either inserts or reports the duplicate, never both.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Model {
    kinds: SetCover<Kind>,
    mixins: SetCover<Mixin>,
    actions: SetCover<Action>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Kinds
    // ------------------------------------------------------------------------

    pub fn contains_kind(&self, kind: &Kind) -> bool {
        self.kinds.contains(kind)
    }

    pub fn contains_kind_identifier(&self, identifier: &str) -> bool {
        self.kinds.contains_identifier(identifier)
    }

    /// Adds a kind. Returns `false` if a kind with the same identifier exists.
    pub fn add_kind(&mut self, kind: Kind) -> bool {
        let identifier = kind.identifier();
        let added = self.kinds.add(kind);
        debug!(kind = %identifier, added, "add kind");
        added
    }

    pub fn get_kind(&self, identifier: &str) -> Option<&Kind> {
        self.kinds.get(identifier)
    }

    pub fn remove_kind(&mut self, kind: &Kind) -> bool {
        let removed = self.kinds.remove(kind);
        debug!(kind = %kind.identifier(), removed, "remove kind");
        removed
    }

    pub fn clear_kinds(&mut self) {
        self.kinds.clear();
    }

    /// All kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = &Kind> {
        self.kinds.iter()
    }

    pub fn kind_count(&self) -> usize {
        self.kinds.len()
    }

    // ------------------------------------------------------------------------
    // Mixins
    // ------------------------------------------------------------------------

    pub fn contains_mixin(&self, mixin: &Mixin) -> bool {
        self.mixins.contains(mixin)
    }

    pub fn contains_mixin_identifier(&self, identifier: &str) -> bool {
        self.mixins.contains_identifier(identifier)
    }

    /// Adds a mixin. Returns `false` if a mixin with the same identifier exists.
    pub fn add_mixin(&mut self, mixin: Mixin) -> bool {
        let identifier = mixin.identifier();
        let added = self.mixins.add(mixin);
        debug!(mixin = %identifier, added, "add mixin");
        added
    }

    pub fn get_mixin(&self, identifier: &str) -> Option<&Mixin> {
        self.mixins.get(identifier)
    }

    pub fn remove_mixin(&mut self, mixin: &Mixin) -> bool {
        let removed = self.mixins.remove(mixin);
        debug!(mixin = %mixin.identifier(), removed, "remove mixin");
        removed
    }

    pub fn clear_mixins(&mut self) {
        self.mixins.clear();
    }

    /// All mixins, in no particular order.
    pub fn mixins(&self) -> impl Iterator<Item = &Mixin> {
        self.mixins.iter()
    }

    pub fn mixin_count(&self) -> usize {
        self.mixins.len()
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    pub fn contains_action(&self, action: &Action) -> bool {
        self.actions.contains(action)
    }

    pub fn contains_action_identifier(&self, identifier: &str) -> bool {
        self.actions.contains_identifier(identifier)
    }

    /// Adds an action. Returns `false` if an action with the same identifier exists.
    pub fn add_action(&mut self, action: Action) -> bool {
        let identifier = action.identifier();
        let added = self.actions.add(action);
        debug!(action = %identifier, added, "add action");
        added
    }

    pub fn get_action(&self, identifier: &str) -> Option<&Action> {
        self.actions.get(identifier)
    }

    pub fn remove_action(&mut self, action: &Action) -> bool {
        let removed = self.actions.remove(action);
        debug!(action = %action.identifier(), removed, "remove action");
        removed
    }

    pub fn clear_actions(&mut self) {
        self.actions.clear();
    }

    /// All actions, in no particular order.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    // ------------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------------

    /// Finds a kind by full identifier. Empty identifiers match nothing.
    pub fn find_kind(&self, identifier: &str) -> Option<&Kind> {
        if identifier.is_empty() {
            return None;
        }
        self.kinds.get(identifier)
    }

    pub fn find_kind_by_term(&self, term: &str) -> Lookup<&Kind> {
        find_by_term(self.kinds.iter(), term, |_| true)
    }

    pub fn find_mixin(&self, identifier: &str) -> Option<&Mixin> {
        if identifier.is_empty() {
            return None;
        }
        self.mixins.get(identifier)
    }

    pub fn find_mixin_by_term(&self, term: &str) -> Lookup<&Mixin> {
        find_by_term(self.mixins.iter(), term, |_| true)
    }

    /// Finds a mixin by term among those relating to `rel`.
    ///
    /// `rel` is resolved to a registered mixin first. If it does not
    /// resolve the result is `NotFound`; if `rel` is itself an ambiguous
    /// term the result is `Ambiguous` naming that term.
    pub fn find_mixin_with_rel(&self, term: &str, rel: Selector<'_>) -> Lookup<&Mixin> {
        let rel_mixin = match self.resolve_mixin(rel) {
            Lookup::Found(mixin) => mixin,
            Lookup::NotFound => return Lookup::NotFound,
            Lookup::Ambiguous(term) => return Lookup::Ambiguous(term),
        };
        find_by_term(self.mixins.iter(), term, |mixin| mixin.relates_to(rel_mixin))
    }

    pub fn find_action(&self, identifier: &str) -> Option<&Action> {
        if identifier.is_empty() {
            return None;
        }
        self.actions.get(identifier)
    }

    pub fn find_action_by_term(&self, term: &str) -> Lookup<&Action> {
        find_by_term(self.actions.iter(), term, |_| true)
    }

    pub fn resolve_kind(&self, selector: Selector<'_>) -> Lookup<&Kind> {
        match selector {
            Selector::Identifier(identifier) => self.find_kind(identifier).into(),
            Selector::Term(term) => match self.find_kind(term) {
                Some(kind) => Lookup::Found(kind),
                None => self.find_kind_by_term(term),
            },
        }
    }

    pub fn resolve_mixin(&self, selector: Selector<'_>) -> Lookup<&Mixin> {
        match selector {
            Selector::Identifier(identifier) => self.find_mixin(identifier).into(),
            Selector::Term(term) => match self.find_mixin(term) {
                Some(mixin) => Lookup::Found(mixin),
                None => self.find_mixin_by_term(term),
            },
        }
    }

    pub fn resolve_action(&self, selector: Selector<'_>) -> Lookup<&Action> {
        match selector {
            Selector::Identifier(identifier) => self.find_action(identifier).into(),
            Selector::Term(term) => match self.find_action(term) {
                Some(action) => Lookup::Found(action),
                None => self.find_action_by_term(term),
            },
        }
    }

    // ------------------------------------------------------------------------
    // Relations
    // ------------------------------------------------------------------------

    /// Every kind that has `anchor` somewhere in its parent chain.
    ///
    /// An anchor that does not resolve yields an empty list. A kind whose
    /// parent chain loops before reaching `anchor` is not a descendant. The
    /// result is sorted by identifier.
    pub fn find_related_kinds(&self, anchor: Selector<'_>) -> Result<Vec<&Kind>, ModelError> {
        let Some(anchor) = self.resolve_kind(anchor).into_result()? else {
            return Ok(Vec::new());
        };

        let mut related = Vec::new();
        for kind in self.kinds.iter() {
            match self.kind_relates_to(kind, anchor) {
                Ok(true) => related.push(kind),
                Ok(false) => {}
                Err(err) => {
                    warn!(
                        kind = %kind.identifier(),
                        error = %err,
                        "skipping kind in related query"
                    );
                }
            }
        }
        related.sort_by_key(|kind| kind.identifier());
        Ok(related)
    }

    /// Every mixin whose related set contains `anchor`.
    ///
    /// An anchor that does not resolve yields an empty list. The result is
    /// sorted by identifier.
    pub fn find_related_mixins(&self, anchor: Selector<'_>) -> Result<Vec<&Mixin>, ModelError> {
        let Some(anchor) = self.resolve_mixin(anchor).into_result()? else {
            return Ok(Vec::new());
        };

        let mut related: Vec<&Mixin> = self
            .mixins
            .iter()
            .filter(|mixin| mixin.relates_to(anchor))
            .collect();
        related.sort_by_key(|mixin| mixin.identifier());
        Ok(related)
    }

    /// True when `anchor` is a strict ancestor of `kind`.
    pub fn kind_relates_to(&self, kind: &Kind, anchor: &Kind) -> Result<bool, ModelError> {
        let anchor = anchor.identifier();
        let hit = self.walk_parents(kind, |depth, identifier| {
            if depth > 0 && identifier == anchor {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;
        Ok(hit.is_some())
    }

    /// Identifiers from `kind` up through its parents.
    ///
    /// The walk stops at the first parent identifier not registered in the
    /// model; that identifier is still included.
    pub fn lineage(&self, kind: &Kind) -> Result<Vec<String>, ModelError> {
        let mut chain = Vec::new();
        self.walk_parents(kind, |_, identifier| {
            chain.push(identifier.to_string());
            ControlFlow::<()>::Continue(())
        })?;
        Ok(chain)
    }

    // ------------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------------

    /// Classifies `kind` as resource- or link-shaped by walking its parents
    /// up to one of the two root kinds. `None` when neither is reached.
    pub fn find_kind_type(&self, kind: &Kind) -> Result<Option<CollectionType>, ModelError> {
        self.walk_parents(kind, |_, identifier| match identifier {
            RESOURCE_KIND_IDENTIFIER => ControlFlow::Break(CollectionType::Resource),
            LINK_KIND_IDENTIFIER => ControlFlow::Break(CollectionType::Link),
            _ => ControlFlow::Continue(()),
        })
    }

    /// Classifies the kind whose location equals `location`.
    ///
    /// When several kinds share a location the one with the smallest
    /// identifier is used.
    pub fn find_kind_type_by_location(
        &self,
        location: &str,
    ) -> Result<Option<CollectionType>, ModelError> {
        if location.is_empty() {
            return Ok(None);
        }

        let kind = self
            .kinds
            .iter()
            .filter(|kind| kind.location() == Some(location))
            .min_by_key(|kind| kind.identifier());

        match kind {
            Some(kind) => self.find_kind_type(kind),
            None => Ok(None),
        }
    }

    // ------------------------------------------------------------------------
    // Capabilities
    // ------------------------------------------------------------------------

    /// Attribute definitions an entity of `kind` with `mixins` applied accepts.
    ///
    /// Unions the kind's own attributes, those of its registered ancestors
    /// and those of each mixin. The nearest definition of a name wins.
    pub fn attributes_for(
        &self,
        kind: &Kind,
        mixins: &[&Mixin],
    ) -> Result<SetCover<Attribute>, ModelError> {
        let mut attributes = SetCover::new();
        attributes.extend(kind.attributes().iter().cloned());

        self.walk_parents(kind, |depth, identifier| {
            if depth > 0 {
                if let Some(parent) = self.kinds.get(identifier) {
                    attributes.extend(parent.attributes().iter().cloned());
                }
            }
            ControlFlow::<()>::Continue(())
        })?;

        for mixin in mixins {
            attributes.extend(mixin.attributes().iter().cloned());
        }
        Ok(attributes)
    }

    /// Visits `kind` (depth 0) and then each parent identifier in turn.
    ///
    /// Returns the value `visit` breaks with, `None` if the chain ends
    /// first, or `ParentCycle` if an identifier repeats.
    fn walk_parents<B>(
        &self,
        kind: &Kind,
        mut visit: impl FnMut(usize, &str) -> ControlFlow<B>,
    ) -> Result<Option<B>, ModelError> {
        let start = kind.identifier();
        if let ControlFlow::Break(value) = visit(0, &start) {
            return Ok(Some(value));
        }

        let mut visited = HashSet::new();
        visited.insert(start.clone());

        let mut depth = 0;
        let mut next = kind.parent();
        while let Some(identifier) = next {
            if !visited.insert(identifier.to_string()) {
                warn!(kind = %start, parent = identifier, "cycle in parent chain");
                return Err(ModelError::ParentCycle { identifier: start });
            }

            depth += 1;
            if let ControlFlow::Break(value) = visit(depth, identifier) {
                return Ok(Some(value));
            }
            next = self.kinds.get(identifier).and_then(Kind::parent);
        }

        Ok(None)
    }
}

/// Scans `items` for a single category with `term` that `accept` admits.
fn find_by_term<'a, T>(
    items: impl Iterator<Item = &'a T>,
    term: &str,
    mut accept: impl FnMut(&T) -> bool,
) -> Lookup<&'a T>
where
    T: Categorized + 'a,
{
    if term.is_empty() {
        return Lookup::NotFound;
    }

    let mut found = None;
    for item in items.filter(|item| item.term() == term) {
        if !accept(item) {
            continue;
        }
        if found.is_some() {
            debug!(term, "ambiguous term lookup");
            return Lookup::Ambiguous(term.to_string());
        }
        found = Some(item);
    }
    found.into()
}
