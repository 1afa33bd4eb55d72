//! CLI module for occi-model.
//!
//! Subcommands:
//! - `list`: List registered kinds, mixins or actions
//! - `find`: Resolve a category by identifier or term
//! - `related`: Descendant kinds or related mixins of a category
//! - `type`: Classify a kind as resource or link
//! - `validate`: Check the loaded catalog for integrity issues

mod output;
mod query;
mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::Result;

use crate::catalog::build_model;
use crate::config::Config;
use crate::model::Model;

/// occi-model - OCCI category registry
#[derive(Parser)]
#[command(name = "occi-model")]
#[command(about = "Resolve OCCI kinds, mixins and actions from category catalogs")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Additional catalog file (.toml or .json), applied after configured sources
    #[arg(long = "catalog", global = true)]
    pub catalogs: Vec<PathBuf>,

    /// Do not seed the standard OCCI categories
    #[arg(long, global = true)]
    pub no_standard: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Which category kind a subcommand works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryKind {
    #[value(alias = "kinds")]
    Kind,
    #[value(alias = "mixins")]
    Mixin,
    #[value(alias = "actions")]
    Action,
}

#[derive(Subcommand)]
pub enum Command {
    /// List registered categories
    List {
        #[arg(value_enum)]
        category: CategoryKind,
    },

    /// Find a category by identifier (scheme#term) or term
    Find {
        #[arg(value_enum)]
        category: CategoryKind,

        /// Identifier or term; an exact registered identifier always wins, so
        /// schemes without `#` (e.g. `urn:example:vm`) also work
        selector: String,

        /// Related mixin (identifier or term) to disambiguate a mixin term
        #[arg(long)]
        rel: Option<String>,
    },

    /// Show kinds descending from a kind, or mixins relating to a mixin
    Related {
        #[arg(value_enum)]
        category: CategoryKind,

        /// Identifier or term of the anchor category
        selector: String,
    },

    /// Classify a kind as resource or link
    Type {
        /// Identifier or term of the kind
        #[arg(required_unless_present = "location")]
        selector: Option<String>,

        /// Classify the kind registered at this location instead
        #[arg(long, conflicts_with = "selector")]
        location: Option<String>,
    },

    /// Check the catalog for cycles and dangling references
    Validate,
}

impl App {
    /// Run the CLI application.
    pub fn run(self, config: Config) -> Result<()> {
        let model = self.load_model(config)?;

        match &self.command {
            Command::List { category } => self.run_list(&model, *category),
            Command::Find {
                category,
                selector,
                rel,
            } => self.run_find(&model, *category, selector, rel.as_deref()),
            Command::Related { category, selector } => {
                self.run_related(&model, *category, selector)
            }
            Command::Type { selector, location } => {
                self.run_type(&model, selector.as_deref(), location.as_deref())
            }
            Command::Validate => self.run_validate(&model),
        }
    }

    /// Builds the model from config plus command-line overrides.
    fn load_model(&self, config: Config) -> Result<Model> {
        let mut catalog = config.catalog;
        if self.no_standard {
            catalog.standard = false;
        }
        catalog.sources.extend(self.catalogs.iter().cloned());

        let (model, report) = build_model(&catalog)?;
        tracing::info!(
            kinds = model.kind_count(),
            mixins = model.mixin_count(),
            actions = model.action_count(),
            duplicates = report.duplicates.len(),
            "Loaded model"
        );
        Ok(model)
    }
}
