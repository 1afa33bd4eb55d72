//! End-to-end registry scenarios: uniqueness, term ambiguity, relation
//! closures and classification over the public API.

use occi_model::catalog::{Catalog, CatalogFormat};
use occi_model::models::{Categorized, CollectionType, Kind, Mixin};
use occi_model::validation::Validator;
use occi_model::vocab::{
    LINK_KIND_IDENTIFIER, RESOURCE_KIND_IDENTIFIER, SCHEME_CORE, SCHEME_INFRASTRUCTURE,
};
use occi_model::{Identifiable, Lookup, Model, ModelError, Selector};

const SCHEME_A: &str = "http://example.com/a#";
const SCHEME_B: &str = "http://example.com/b#";

#[test]
fn test_duplicate_kinds_do_not_grow_registry() {
    let mut model = Model::new();
    let kinds = [
        Kind::new(SCHEME_A, "one"),
        Kind::new(SCHEME_A, "two"),
        Kind::new(SCHEME_A, "one").with_title("again"),
        Kind::new(SCHEME_B, "one"),
        Kind::new(SCHEME_A, "two").with_parent(RESOURCE_KIND_IDENTIFIER),
    ];

    let results: Vec<bool> = kinds.into_iter().map(|k| model.add_kind(k)).collect();
    assert_eq!(results, vec![true, true, false, true, false]);
    assert_eq!(model.kind_count(), 3);
}

#[test]
fn test_identifier_lookup_never_ambiguous() {
    let mut model = Model::new();
    model.add_kind(Kind::new(SCHEME_A, "network"));
    model.add_kind(Kind::new(SCHEME_B, "network"));

    assert!(model.find_kind_by_term("network").is_ambiguous());
    assert_eq!(
        model.find_kind("http://example.com/a#network").map(|k| k.scheme()),
        Some(SCHEME_A)
    );
    assert!(model.find_kind("http://example.com/c#network").is_none());
}

#[test]
fn test_ambiguity_resolves_after_removal() {
    let mut model = Model::new();
    let a = Kind::new(SCHEME_A, "network");
    let b = Kind::new(SCHEME_B, "network");
    model.add_kind(a.clone());
    model.add_kind(b.clone());

    let err = model.find_kind_by_term("network").into_result().unwrap_err();
    assert_eq!(
        err,
        ModelError::AmbiguousIdentifier {
            term: "network".to_string()
        }
    );
    assert!(err.to_string().contains("network"));

    assert!(model.remove_kind(&a));
    match model.find_kind_by_term("network") {
        Lookup::Found(kind) => assert_eq!(kind.identifier(), b.identifier()),
        other => panic!("expected a single match, got {:?}", other),
    }
}

#[test]
fn test_kind_relation_closure() {
    let mut model = Model::new();
    model.add_kind(Kind::new(SCHEME_A, "a"));
    model.add_kind(Kind::new(SCHEME_A, "b").with_parent("http://example.com/a#a"));
    model.add_kind(Kind::new(SCHEME_A, "c").with_parent("http://example.com/a#b"));
    model.add_kind(Kind::new(SCHEME_A, "unrelated"));

    let related: Vec<String> = model
        .find_related_kinds(Selector::Identifier("http://example.com/a#a"))
        .unwrap()
        .iter()
        .map(|k| k.identifier())
        .collect();
    assert_eq!(related, vec!["http://example.com/a#b", "http://example.com/a#c"]);

    assert!(model
        .find_related_kinds(Selector::Term("c"))
        .unwrap()
        .is_empty());
}

#[test]
fn test_mixin_relation_direction() {
    let mut model = Model::new();
    let y = Mixin::new(SCHEME_A, "y");
    let x = Mixin::new(SCHEME_A, "x").with_related(y.identifier());
    model.add_mixin(x.clone());
    model.add_mixin(y.clone());

    assert!(x.relates_to(&y));

    let anchored_on_y = model.find_related_mixins(Selector::Term("y")).unwrap();
    assert_eq!(anchored_on_y.len(), 1);
    assert_eq!(anchored_on_y[0].identifier(), x.identifier());

    let anchored_on_x = model
        .find_related_mixins(Selector::Identifier("http://example.com/a#x"))
        .unwrap();
    assert!(anchored_on_x.is_empty());
}

#[test]
fn test_classification() {
    let mut model = Model::new();
    model.add_kind(Kind::new(SCHEME_CORE, "resource"));
    model.add_kind(Kind::new(SCHEME_CORE, "link"));
    model.add_kind(Kind::new(SCHEME_A, "vm").with_parent(RESOURCE_KIND_IDENTIFIER));
    model.add_kind(Kind::new(SCHEME_A, "big-vm").with_parent("http://example.com/a#vm"));
    model.add_kind(Kind::new(SCHEME_A, "nic").with_parent(LINK_KIND_IDENTIFIER));
    model.add_kind(Kind::new(SCHEME_A, "mystery"));

    let classify = |identifier: &str| {
        let kind = model.find_kind(identifier).unwrap();
        model.find_kind_type(kind).unwrap()
    };

    assert_eq!(classify("http://example.com/a#big-vm"), Some(CollectionType::Resource));
    assert_eq!(classify("http://example.com/a#nic"), Some(CollectionType::Link));
    assert_eq!(classify("http://example.com/a#mystery"), None);
}

#[test]
fn test_clear_and_remove_idempotence() {
    let mut model = Model::new();
    let kind = Kind::new(SCHEME_A, "a");
    model.add_kind(kind.clone());

    model.clear_kinds();
    let once = model.kinds().count();
    model.clear_kinds();
    assert_eq!(model.kinds().count(), once);
    assert_eq!(once, 0);

    assert!(!model.remove_kind(&kind));
    assert_eq!(model, Model::new());
}

#[test]
fn test_network_is_a_resource() {
    let mut model = Model::new();
    model.add_kind(Kind::new(SCHEME_CORE, "resource"));
    model.add_kind(
        Kind::new(SCHEME_INFRASTRUCTURE, "network")
            .with_parent(format!("{}resource", SCHEME_CORE))
            .with_location("/network/"),
    );

    let network = model
        .find_kind(&format!("{}network", SCHEME_INFRASTRUCTURE))
        .unwrap();
    assert_eq!(
        model.find_kind_type(network),
        Ok(Some(CollectionType::Resource))
    );
    assert_eq!(
        model.find_kind_type_by_location("/network/"),
        Ok(Some(CollectionType::Resource))
    );
}

#[test]
fn test_catalog_with_cycle_is_flagged() {
    let json = r#"{
        "kinds": [
            {"scheme": "http://example.com/a#", "term": "p", "parent": "http://example.com/a#q"},
            {"scheme": "http://example.com/a#", "term": "q", "parent": "http://example.com/a#p"}
        ]
    }"#;

    let mut model = Model::new();
    let report = Catalog::parse(json, CatalogFormat::Json)
        .unwrap()
        .apply(&mut model);
    assert_eq!(report.added, 2);

    let p = model.find_kind_by_term("p").found().unwrap();
    assert!(matches!(
        model.find_kind_type(p),
        Err(ModelError::ParentCycle { .. })
    ));
    assert_eq!(Validator::new(&model).find_cycles().len(), 2);
}
