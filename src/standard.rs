//! Built-in OCCI core and infrastructure categories.
//!
//! Seeds the root kinds (entity, resource, link) and the infrastructure
//! extension: compute, storage and network resources, the networkinterface
//! and storagelink links, their actions, and the IP networking and template
//! mixins.

use crate::catalog::{Catalog, LoadReport};
use crate::model::Model;
use crate::models::{Action, Attribute, Kind, Mixin};
use crate::vocab::*;

/// Every standard category as a catalog.
pub fn catalog() -> Catalog {
    let mut kinds = core_kinds();
    kinds.extend(infrastructure_kinds());

    Catalog {
        kinds,
        mixins: infrastructure_mixins(),
        actions: infrastructure_actions(),
    }
}

/// Adds every standard category to `model`.
pub fn seed(model: &mut Model) -> LoadReport {
    catalog().apply(model)
}

pub fn core_kinds() -> Vec<Kind> {
    vec![
        Kind::new(SCHEME_CORE, "entity")
            .with_title("Entity")
            .with_location("/entity/")
            .with_attribute(Attribute::new(CORE_ID, true, true))
            .with_attribute(Attribute::optional(CORE_TITLE)),
        Kind::new(SCHEME_CORE, "resource")
            .with_title("Resource")
            .with_location("/resource/")
            .with_parent(ENTITY_KIND_IDENTIFIER)
            .with_attribute(Attribute::optional(CORE_SUMMARY)),
        Kind::new(SCHEME_CORE, "link")
            .with_title("Link")
            .with_location("/link/")
            .with_parent(ENTITY_KIND_IDENTIFIER)
            .with_attribute(Attribute::new(CORE_SOURCE, true, false))
            .with_attribute(Attribute::new(CORE_TARGET, true, false)),
    ]
}

pub fn infrastructure_kinds() -> Vec<Kind> {
    let compute_action = |term: &str| format!("{}{}", SCHEME_COMPUTE_ACTION, term);
    let storage_action = |term: &str| format!("{}{}", SCHEME_STORAGE_ACTION, term);
    let network_action = |term: &str| format!("{}{}", SCHEME_NETWORK_ACTION, term);

    vec![
        Kind::new(SCHEME_INFRASTRUCTURE, "compute")
            .with_title("Compute Resource")
            .with_location("/compute/")
            .with_parent(RESOURCE_KIND_IDENTIFIER)
            .with_action(compute_action("start"))
            .with_action(compute_action("stop"))
            .with_action(compute_action("restart"))
            .with_action(compute_action("suspend"))
            .with_attribute(Attribute::optional(COMPUTE_ARCHITECTURE))
            .with_attribute(Attribute::optional(COMPUTE_CORES))
            .with_attribute(Attribute::optional(COMPUTE_HOSTNAME))
            .with_attribute(Attribute::optional(COMPUTE_SPEED))
            .with_attribute(Attribute::optional(COMPUTE_MEMORY))
            .with_attribute(Attribute::new(COMPUTE_STATE, false, true)),
        Kind::new(SCHEME_INFRASTRUCTURE, "storage")
            .with_title("Storage Resource")
            .with_location("/storage/")
            .with_parent(RESOURCE_KIND_IDENTIFIER)
            .with_action(storage_action("online"))
            .with_action(storage_action("offline"))
            .with_action(storage_action("backup"))
            .with_action(storage_action("snapshot"))
            .with_action(storage_action("resize"))
            .with_attribute(Attribute::new(STORAGE_SIZE, true, false))
            .with_attribute(Attribute::new(STORAGE_STATE, false, true)),
        Kind::new(SCHEME_INFRASTRUCTURE, "network")
            .with_title("Network Resource")
            .with_location("/network/")
            .with_parent(RESOURCE_KIND_IDENTIFIER)
            .with_action(network_action("up"))
            .with_action(network_action("down"))
            .with_attribute(Attribute::optional(NETWORK_VLAN))
            .with_attribute(Attribute::optional(NETWORK_LABEL))
            .with_attribute(Attribute::new(NETWORK_STATE, false, true)),
        Kind::new(SCHEME_INFRASTRUCTURE, "networkinterface")
            .with_title("Network Interface Link")
            .with_location("/networkinterface/")
            .with_parent(LINK_KIND_IDENTIFIER)
            .with_attribute(Attribute::new(NETWORKINTERFACE_INTERFACE, false, true))
            .with_attribute(Attribute::optional(NETWORKINTERFACE_MAC))
            .with_attribute(Attribute::new(NETWORKINTERFACE_STATE, false, true)),
        Kind::new(SCHEME_INFRASTRUCTURE, "storagelink")
            .with_title("Storage Link")
            .with_location("/storagelink/")
            .with_parent(LINK_KIND_IDENTIFIER)
            .with_attribute(Attribute::optional(STORAGELINK_DEVICEID))
            .with_attribute(Attribute::optional(STORAGELINK_MOUNTPOINT))
            .with_attribute(Attribute::new(STORAGELINK_STATE, false, true)),
    ]
}

pub fn infrastructure_actions() -> Vec<Action> {
    let titled = |scheme: &str, term: &str, title: &str| Action::new(scheme, term).with_title(title);

    vec![
        titled(SCHEME_COMPUTE_ACTION, "start", "Start the compute resource"),
        titled(SCHEME_COMPUTE_ACTION, "stop", "Stop the compute resource")
            .with_attribute(Attribute::optional("method")),
        titled(SCHEME_COMPUTE_ACTION, "restart", "Restart the compute resource")
            .with_attribute(Attribute::optional("method")),
        titled(SCHEME_COMPUTE_ACTION, "suspend", "Suspend the compute resource")
            .with_attribute(Attribute::optional("method")),
        titled(SCHEME_STORAGE_ACTION, "online", "Bring the storage online"),
        titled(SCHEME_STORAGE_ACTION, "offline", "Take the storage offline"),
        titled(SCHEME_STORAGE_ACTION, "backup", "Back up the storage"),
        titled(SCHEME_STORAGE_ACTION, "snapshot", "Snapshot the storage"),
        titled(SCHEME_STORAGE_ACTION, "resize", "Resize the storage")
            .with_attribute(Attribute::new("size", true, false)),
        titled(SCHEME_NETWORK_ACTION, "up", "Bring the network up"),
        titled(SCHEME_NETWORK_ACTION, "down", "Take the network down"),
    ]
}

pub fn infrastructure_mixins() -> Vec<Mixin> {
    vec![
        Mixin::new(SCHEME_NETWORK_MIXIN, "ipnetwork")
            .with_title("IP Network Mixin")
            .with_location("/mixins/ipnetwork/")
            .with_applies(NETWORK_KIND_IDENTIFIER)
            .with_attribute(Attribute::optional(NETWORK_ADDRESS))
            .with_attribute(Attribute::optional(NETWORK_GATEWAY))
            .with_attribute(Attribute::optional(NETWORK_ALLOCATION)),
        Mixin::new(SCHEME_NETWORKINTERFACE_MIXIN, "ipnetworkinterface")
            .with_title("IP Network Interface Mixin")
            .with_location("/mixins/ipnetworkinterface/")
            .with_applies(NETWORKINTERFACE_KIND_IDENTIFIER)
            .with_attribute(Attribute::optional(NETWORKINTERFACE_ADDRESS))
            .with_attribute(Attribute::optional(NETWORKINTERFACE_GATEWAY))
            .with_attribute(Attribute::optional(NETWORKINTERFACE_ALLOCATION)),
        Mixin::new(SCHEME_INFRASTRUCTURE, "os_tpl")
            .with_title("Operating System Template")
            .with_location("/mixins/os_tpl/")
            .with_applies(COMPUTE_KIND_IDENTIFIER),
        Mixin::new(SCHEME_INFRASTRUCTURE, "resource_tpl")
            .with_title("Resource Template")
            .with_location("/mixins/resource_tpl/")
            .with_applies(COMPUTE_KIND_IDENTIFIER),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Selector;
    use crate::models::CollectionType;

    fn seeded() -> Model {
        let mut model = Model::new();
        seed(&mut model);
        model
    }

    #[test]
    fn test_seed_counts() {
        let mut model = Model::new();
        let report = seed(&mut model);

        assert_eq!(model.kind_count(), 8);
        assert_eq!(model.mixin_count(), 4);
        assert_eq!(model.action_count(), 11);
        assert_eq!(report.added, 23);
        assert!(report.duplicates.is_empty());
    }

    #[test]
    fn test_seed_twice_reports_duplicates() {
        let mut model = seeded();
        let report = seed(&mut model);
        assert_eq!(report.added, 0);
        assert_eq!(report.duplicates.len(), 23);
    }

    #[test]
    fn test_standard_kinds_classify() {
        let model = seeded();
        let expectations = [
            ("/compute/", Some(CollectionType::Resource)),
            ("/storage/", Some(CollectionType::Resource)),
            ("/network/", Some(CollectionType::Resource)),
            ("/networkinterface/", Some(CollectionType::Link)),
            ("/storagelink/", Some(CollectionType::Link)),
            ("/entity/", None),
        ];

        for (location, expected) in expectations {
            assert_eq!(
                model.find_kind_type_by_location(location),
                Ok(expected),
                "location {}",
                location
            );
        }
    }

    #[test]
    fn test_kind_actions_are_registered() {
        let model = seeded();
        for kind in model.kinds() {
            for action in &kind.actions {
                assert!(
                    model.contains_action_identifier(action),
                    "missing action {}",
                    action
                );
            }
        }
    }

    #[test]
    fn test_resource_descendants() {
        let model = seeded();
        let related = model
            .find_related_kinds(Selector::Identifier(RESOURCE_KIND_IDENTIFIER))
            .unwrap();
        let terms: Vec<&str> = related.iter().map(|k| k.category.term.as_str()).collect();
        assert_eq!(terms, vec!["compute", "network", "storage"]);
    }

    #[test]
    fn test_action_terms_are_unique() {
        let model = seeded();
        assert!(model.find_action_by_term("start").is_found());
        assert!(model.find_action_by_term("up").is_found());
    }
}
