//! Category definition documents and loading them into a [`Model`].
//!
//! A catalog is a TOML or JSON document with three optional arrays:
//!
//! ```toml
//! [[kinds]]
//! scheme = "http://example.com/occi/infrastructure#"
//! term = "gpu"
//! title = "GPU accelerator"
//! location = "/gpu/"
//! parent = "http://schemas.ogf.org/occi/core#resource"
//! actions = ["http://example.com/occi/infrastructure/gpu/action#reset"]
//!
//! [[kinds.attributes]]
//! name = "example.gpu.model"
//! required = true
//!
//! [[mixins]]
//! scheme = "http://example.com/occi/templates#"
//! term = "a100"
//! related = ["http://schemas.ogf.org/occi/infrastructure#resource_tpl"]
//! applies = ["http://example.com/occi/infrastructure#gpu"]
//!
//! [[actions]]
//! scheme = "http://example.com/occi/infrastructure/gpu/action#"
//! term = "reset"
//! ```
//!
//! The model never parses documents itself; this module builds fully formed
//! categories and hands them to the `add_*` operations.

use std::path::Path;

use figment::{
    providers::{Format, Json, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::collection::Identifiable;
use crate::config::CatalogConfig;
use crate::error::AppError;
use crate::model::Model;
use crate::models::{Action, Kind, Mixin};
use crate::standard;

/// A set of category definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub kinds: Vec<Kind>,
    pub mixins: Vec<Mixin>,
    pub actions: Vec<Action>,
}

/// Document formats a catalog can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(CatalogFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(CatalogFormat::Json),
            _ => None,
        }
    }
}

/// What applying a catalog did to a model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Number of categories inserted.
    pub added: usize,
    /// Identifiers refused because the model already held them.
    pub duplicates: Vec<String>,
}

impl LoadReport {
    pub fn merge(&mut self, other: LoadReport) {
        self.added += other.added;
        self.duplicates.extend(other.duplicates);
    }

    fn record(&mut self, identifier: String, added: bool) {
        if added {
            self.added += 1;
        } else {
            self.duplicates.push(identifier);
        }
    }
}

impl Catalog {
    /// Reads a catalog file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let format =
            CatalogFormat::from_path(path).ok_or_else(|| AppError::UnsupportedFormat(path.into()))?;

        if !path.exists() {
            return Err(AppError::CatalogNotFound(path.into()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
            path: path.into(),
            source,
        })?;

        let catalog = Self::parse(&content, format).map_err(|e| AppError::CatalogParse {
            path: path.into(),
            message: e.to_string(),
        })?;

        debug!(
            path = %path.display(),
            kinds = catalog.kinds.len(),
            mixins = catalog.mixins.len(),
            actions = catalog.actions.len(),
            "read catalog"
        );
        Ok(catalog)
    }

    /// Parses catalog text in the given format.
    pub fn parse(content: &str, format: CatalogFormat) -> Result<Self, figment::Error> {
        let figment = match format {
            CatalogFormat::Toml => Figment::from(Toml::string(content)),
            CatalogFormat::Json => Figment::from(Json::string(content)),
        };
        figment.extract()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty() && self.mixins.is_empty() && self.actions.is_empty()
    }

    /// Adds every definition to `model`. Duplicates are skipped and reported.
    pub fn apply(self, model: &mut Model) -> LoadReport {
        let mut report = LoadReport::default();

        for action in self.actions {
            let identifier = action.identifier();
            report.record(identifier, model.add_action(action));
        }
        for kind in self.kinds {
            let identifier = kind.identifier();
            report.record(identifier, model.add_kind(kind));
        }
        for mixin in self.mixins {
            let identifier = mixin.identifier();
            report.record(identifier, model.add_mixin(mixin));
        }

        if !report.duplicates.is_empty() {
            warn!(duplicates = ?report.duplicates, "skipped duplicate categories");
        }
        report
    }
}

/// Builds a model from the configured standard seed and catalog sources.
pub fn build_model(config: &CatalogConfig) -> Result<(Model, LoadReport), AppError> {
    let mut model = Model::new();
    let mut report = LoadReport::default();

    if config.standard {
        let seeded = standard::seed(&mut model);
        info!(added = seeded.added, "seeded standard OCCI categories");
        report.merge(seeded);
    }

    for source in &config.sources {
        let applied = Catalog::load(source)?.apply(&mut model);
        info!(
            source = %source.display(),
            added = applied.added,
            duplicates = applied.duplicates.len(),
            "applied catalog"
        );
        report.merge(applied);
    }

    Ok((model, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Categorized, CollectionType};
    use crate::vocab::RESOURCE_KIND_IDENTIFIER;
    use std::io::Write;
    use std::path::PathBuf;

    const TOML_CATALOG: &str = r#"
[[kinds]]
scheme = "http://example.com/occi/infrastructure#"
term = "gpu"
location = "/gpu/"
parent = "http://schemas.ogf.org/occi/core#resource"
actions = ["http://example.com/occi/infrastructure/gpu/action#reset"]

[[kinds.attributes]]
name = "example.gpu.model"
required = true

[[mixins]]
scheme = "http://example.com/occi/templates#"
term = "a100"
related = ["http://schemas.ogf.org/occi/infrastructure#resource_tpl"]
applies = ["http://example.com/occi/infrastructure#gpu"]

[[actions]]
scheme = "http://example.com/occi/infrastructure/gpu/action#"
term = "reset"
"#;

    fn write_catalog(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_toml() {
        let catalog = Catalog::parse(TOML_CATALOG, CatalogFormat::Toml).unwrap();
        assert_eq!(catalog.kinds.len(), 1);
        assert_eq!(catalog.mixins.len(), 1);
        assert_eq!(catalog.actions.len(), 1);

        let gpu = &catalog.kinds[0];
        assert_eq!(gpu.parent(), Some(RESOURCE_KIND_IDENTIFIER));
        assert!(gpu.attributes().get("example.gpu.model").unwrap().required);
        assert_eq!(catalog.mixins[0].applies.len(), 1);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "actions": [{"scheme": "http://example.com/a#", "term": "go"}]
        }"#;
        let catalog = Catalog::parse(json, CatalogFormat::Json).unwrap();
        assert!(catalog.kinds.is_empty());
        assert_eq!(catalog.actions[0].term(), "go");
    }

    #[test]
    fn test_parse_rejects_missing_term() {
        let toml = "[[kinds]]\nscheme = \"http://example.com/a#\"\n";
        assert!(Catalog::parse(toml, CatalogFormat::Toml).is_err());
    }

    #[test]
    fn test_apply_reports_duplicates() {
        let mut model = Model::new();
        let first = Catalog::parse(TOML_CATALOG, CatalogFormat::Toml).unwrap();
        let second = first.clone();

        let report = first.apply(&mut model);
        assert_eq!(report.added, 3);
        assert!(report.duplicates.is_empty());

        let report = second.apply(&mut model);
        assert_eq!(report.added, 0);
        assert_eq!(report.duplicates.len(), 3);
        assert_eq!(model.kind_count(), 1);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(dir.path(), "provider.TOML", TOML_CATALOG);
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.kinds[0].term(), "gpu");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let yaml = write_catalog(dir.path(), "catalog.yaml", "kinds: []");
        assert!(matches!(
            Catalog::load(&yaml),
            Err(AppError::UnsupportedFormat(_))
        ));

        assert!(matches!(
            Catalog::load(dir.path().join("missing.toml")),
            Err(AppError::CatalogNotFound(_))
        ));

        let broken = write_catalog(dir.path(), "broken.json", "{ not json");
        assert!(matches!(
            Catalog::load(&broken),
            Err(AppError::CatalogParse { .. })
        ));
    }

    #[test]
    fn test_build_model_with_standard_and_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(dir.path(), "provider.toml", TOML_CATALOG);
        let config = CatalogConfig {
            standard: true,
            sources: vec![path],
        };

        let (model, report) = build_model(&config).unwrap();
        assert!(report.duplicates.is_empty());

        let gpu = model.find_kind_by_term("gpu").found().unwrap();
        assert_eq!(
            model.find_kind_type(gpu),
            Ok(Some(CollectionType::Resource))
        );
        assert!(model.find_mixin_by_term("a100").is_found());
    }

    #[test]
    fn test_build_model_without_standard() {
        let config = CatalogConfig {
            standard: false,
            sources: Vec::new(),
        };
        let (model, report) = build_model(&config).unwrap();
        assert_eq!(model, Model::new());
        assert_eq!(report, LoadReport::default());
    }
}
