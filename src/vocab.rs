//! Well-known OCCI schemes, identifiers and attribute names.

// ============================================================================
// Schemes
// ============================================================================

pub const SCHEME_CORE: &str = "http://schemas.ogf.org/occi/core#";
pub const SCHEME_INFRASTRUCTURE: &str = "http://schemas.ogf.org/occi/infrastructure#";

pub const SCHEME_COMPUTE_ACTION: &str = "http://schemas.ogf.org/occi/infrastructure/compute/action#";
pub const SCHEME_STORAGE_ACTION: &str = "http://schemas.ogf.org/occi/infrastructure/storage/action#";
pub const SCHEME_NETWORK_ACTION: &str = "http://schemas.ogf.org/occi/infrastructure/network/action#";

pub const SCHEME_NETWORK_MIXIN: &str = "http://schemas.ogf.org/occi/infrastructure/network#";
pub const SCHEME_NETWORKINTERFACE_MIXIN: &str =
    "http://schemas.ogf.org/occi/infrastructure/networkinterface#";

// ============================================================================
// Root kinds
// ============================================================================

pub const ENTITY_KIND_IDENTIFIER: &str = "http://schemas.ogf.org/occi/core#entity";

/// Every resource kind descends from this one.
pub const RESOURCE_KIND_IDENTIFIER: &str = "http://schemas.ogf.org/occi/core#resource";

/// Every link kind descends from this one.
pub const LINK_KIND_IDENTIFIER: &str = "http://schemas.ogf.org/occi/core#link";

// ============================================================================
// Infrastructure identifiers
// ============================================================================

pub const COMPUTE_KIND_IDENTIFIER: &str = "http://schemas.ogf.org/occi/infrastructure#compute";
pub const STORAGE_KIND_IDENTIFIER: &str = "http://schemas.ogf.org/occi/infrastructure#storage";
pub const NETWORK_KIND_IDENTIFIER: &str = "http://schemas.ogf.org/occi/infrastructure#network";
pub const NETWORKINTERFACE_KIND_IDENTIFIER: &str =
    "http://schemas.ogf.org/occi/infrastructure#networkinterface";
pub const STORAGELINK_KIND_IDENTIFIER: &str =
    "http://schemas.ogf.org/occi/infrastructure#storagelink";

pub const IPNETWORK_MIXIN_IDENTIFIER: &str =
    "http://schemas.ogf.org/occi/infrastructure/network#ipnetwork";
pub const IPNETWORKINTERFACE_MIXIN_IDENTIFIER: &str =
    "http://schemas.ogf.org/occi/infrastructure/networkinterface#ipnetworkinterface";
pub const OS_TPL_MIXIN_IDENTIFIER: &str = "http://schemas.ogf.org/occi/infrastructure#os_tpl";
pub const RESOURCE_TPL_MIXIN_IDENTIFIER: &str =
    "http://schemas.ogf.org/occi/infrastructure#resource_tpl";

// ============================================================================
// Attribute names
// ============================================================================

pub const CORE_ID: &str = "occi.core.id";
pub const CORE_TITLE: &str = "occi.core.title";
pub const CORE_SUMMARY: &str = "occi.core.summary";
pub const CORE_SOURCE: &str = "occi.core.source";
pub const CORE_TARGET: &str = "occi.core.target";

pub const COMPUTE_ARCHITECTURE: &str = "occi.compute.architecture";
pub const COMPUTE_CORES: &str = "occi.compute.cores";
pub const COMPUTE_HOSTNAME: &str = "occi.compute.hostname";
pub const COMPUTE_SPEED: &str = "occi.compute.speed";
pub const COMPUTE_MEMORY: &str = "occi.compute.memory";
pub const COMPUTE_STATE: &str = "occi.compute.state";

pub const STORAGE_SIZE: &str = "occi.storage.size";
pub const STORAGE_STATE: &str = "occi.storage.state";

pub const STORAGELINK_DEVICEID: &str = "occi.storagelink.deviceid";
pub const STORAGELINK_MOUNTPOINT: &str = "occi.storagelink.mountpoint";
pub const STORAGELINK_STATE: &str = "occi.storagelink.state";

pub const NETWORK_VLAN: &str = "occi.network.vlan";
pub const NETWORK_LABEL: &str = "occi.network.label";
pub const NETWORK_STATE: &str = "occi.network.state";
pub const NETWORK_ADDRESS: &str = "occi.network.address";
pub const NETWORK_GATEWAY: &str = "occi.network.gateway";
pub const NETWORK_ALLOCATION: &str = "occi.network.allocation";

pub const NETWORKINTERFACE_INTERFACE: &str = "occi.networkinterface.interface";
pub const NETWORKINTERFACE_MAC: &str = "occi.networkinterface.mac";
pub const NETWORKINTERFACE_STATE: &str = "occi.networkinterface.state";
pub const NETWORKINTERFACE_ADDRESS: &str = "occi.networkinterface.address";
pub const NETWORKINTERFACE_GATEWAY: &str = "occi.networkinterface.gateway";
pub const NETWORKINTERFACE_ALLOCATION: &str = "occi.networkinterface.allocation";
