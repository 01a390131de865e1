// Decoded control-plane objects as they arrive from the API server.
// This crate holds schemas only; reshaping for display lives in netview-engine.

pub mod address_group;
pub mod meta;
pub mod network_policy;
pub mod priority;

pub use address_group::{AddressGroup, GroupMember, NamedPort, NodeReference, PodReference};
pub use meta::{HasMetadata, ListMeta, ObjectList, ObjectMeta};
pub use network_policy::{
    Direction, IpBlock, NetworkPolicy, NetworkPolicyPeer, NetworkPolicyReference,
    NetworkPolicyRule, NetworkPolicyType, RuleAction, Service,
};
pub use priority::OptionalPriority;

pub type AddressGroupList = ObjectList<AddressGroup>;
pub type NetworkPolicyList = ObjectList<NetworkPolicy>;
