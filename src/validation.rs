//! Integrity checks over a populated model.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::collection::Identifiable;
use crate::error::ModelError;
use crate::model::Model;

/// How serious a [`ValidationIssue`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A problem found with a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Identifier of the category the issue is about.
    pub identifier: String,
    pub severity: Severity,
    /// Description of the issue.
    pub issue: String,
}

impl ValidationIssue {
    fn new(identifier: impl Into<String>, severity: Severity, issue: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            severity,
            issue: issue.into(),
        }
    }
}

/// Checks a model for cycles, dangling references and shared identifiers.
///
/// Each check returns issues sorted by identifier.
pub struct Validator<'a> {
    model: &'a Model,
}

impl<'a> Validator<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    /// Runs every check.
    pub fn run_all(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        issues.extend(self.find_cycles());
        issues.extend(self.find_dangling_parents());
        issues.extend(self.find_dangling_actions());
        issues.extend(self.find_dangling_related());
        issues.extend(self.find_unknown_applies());
        issues.extend(self.find_shared_identifiers());
        issues
    }

    /// Kinds whose parent chain loops back on itself.
    pub fn find_cycles(&self) -> Vec<ValidationIssue> {
        let mut issues: Vec<_> = self
            .model
            .kinds()
            .filter_map(|kind| match self.model.lineage(kind) {
                Err(err @ ModelError::ParentCycle { .. }) => Some(ValidationIssue::new(
                    kind.identifier(),
                    Severity::Error,
                    err.to_string(),
                )),
                _ => None,
            })
            .collect();
        sort(&mut issues);
        issues
    }

    /// Kinds naming a parent that is not registered.
    pub fn find_dangling_parents(&self) -> Vec<ValidationIssue> {
        let mut issues: Vec<_> = self
            .model
            .kinds()
            .filter_map(|kind| {
                let parent = kind.parent()?;
                (!self.model.contains_kind_identifier(parent)).then(|| {
                    ValidationIssue::new(
                        kind.identifier(),
                        Severity::Warning,
                        format!("Parent kind '{}' is not registered", parent),
                    )
                })
            })
            .collect();
        sort(&mut issues);
        issues
    }

    /// Kinds listing actions that are not registered.
    pub fn find_dangling_actions(&self) -> Vec<ValidationIssue> {
        let model = self.model;
        let mut issues: Vec<_> = model
            .kinds()
            .flat_map(|kind| {
                kind.actions
                    .iter()
                    .filter(move |action| !model.contains_action_identifier(action))
                    .map(move |action| {
                        ValidationIssue::new(
                            kind.identifier(),
                            Severity::Warning,
                            format!("Action '{}' is not registered", action),
                        )
                    })
            })
            .collect();
        sort(&mut issues);
        issues
    }

    /// Mixins relating to mixins that are not registered.
    pub fn find_dangling_related(&self) -> Vec<ValidationIssue> {
        let model = self.model;
        let mut issues: Vec<_> = model
            .mixins()
            .flat_map(|mixin| {
                mixin
                    .related
                    .iter()
                    .filter(move |related| !model.contains_mixin_identifier(related))
                    .map(move |related| {
                        ValidationIssue::new(
                            mixin.identifier(),
                            Severity::Warning,
                            format!("Related mixin '{}' is not registered", related),
                        )
                    })
            })
            .collect();
        sort(&mut issues);
        issues
    }

    /// Mixins applicable to kinds that are not registered.
    pub fn find_unknown_applies(&self) -> Vec<ValidationIssue> {
        let model = self.model;
        let mut issues: Vec<_> = model
            .mixins()
            .flat_map(|mixin| {
                mixin
                    .applies
                    .iter()
                    .filter(move |kind| !model.contains_kind_identifier(kind))
                    .map(move |kind| {
                        ValidationIssue::new(
                            mixin.identifier(),
                            Severity::Warning,
                            format!("Applicable kind '{}' is not registered", kind),
                        )
                    })
            })
            .collect();
        sort(&mut issues);
        issues
    }

    /// Identifiers used by both a kind and a mixin.
    ///
    /// Allowed, but worth knowing about when reading catalogs.
    pub fn find_shared_identifiers(&self) -> Vec<ValidationIssue> {
        let shared: BTreeSet<String> = self
            .model
            .kinds()
            .map(|kind| kind.identifier())
            .filter(|identifier| self.model.contains_mixin_identifier(identifier))
            .collect();

        shared
            .into_iter()
            .map(|identifier| {
                ValidationIssue::new(
                    identifier,
                    Severity::Info,
                    "Identifier is used by both a kind and a mixin",
                )
            })
            .collect()
    }
}

fn sort(issues: &mut [ValidationIssue]) {
    issues.sort_by(|a, b| a.identifier.cmp(&b.identifier).then(a.issue.cmp(&b.issue)));
}
