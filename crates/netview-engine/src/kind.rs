use netview_types::{AddressGroup, HasMetadata, NetworkPolicy};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::table::TableRenderable;
use crate::Result;

/// A resource kind the engine knows how to transform.
///
/// Each kind fixes its decoded object shape, its response shape and the
/// `kind` identifiers used on the wire. A `Factory` is bound to exactly one
/// kind, so dispatch happens at compile time rather than by inspecting values.
pub trait ResourceKind {
    /// Wire `kind` of a single object
    const KIND: &'static str;

    /// Wire `kind` of the list container
    const LIST_KIND: &'static str;

    type Object: DeserializeOwned + HasMetadata;
    type Response: TableRenderable + Serialize;

    fn transform_one(object: Self::Object) -> Result<Self::Response>;

    /// Element-wise `transform_one`, preserving order
    fn transform_many(objects: Vec<Self::Object>) -> Result<Vec<Self::Response>> {
        objects.into_iter().map(Self::transform_one).collect()
    }

    /// Pull this kind's object out of a tagged raw object
    fn from_raw(raw: RawObject) -> Result<Self::Object>;

    fn transform_raw(raw: RawObject) -> Result<Self::Response> {
        Self::transform_one(Self::from_raw(raw)?)
    }
}

/// Decoded object of any supported kind
#[derive(Debug, Clone, PartialEq)]
pub enum RawObject {
    AddressGroup(AddressGroup),
    NetworkPolicy(NetworkPolicy),
}

impl RawObject {
    pub fn kind(&self) -> &'static str {
        match self {
            RawObject::AddressGroup(_) => AddressGroupKind::KIND,
            RawObject::NetworkPolicy(_) => NetworkPolicyKind::KIND,
        }
    }
}

impl From<AddressGroup> for RawObject {
    fn from(group: AddressGroup) -> Self {
        RawObject::AddressGroup(group)
    }
}

impl From<NetworkPolicy> for RawObject {
    fn from(policy: NetworkPolicy) -> Self {
        RawObject::NetworkPolicy(policy)
    }
}

/// Marker for the address group kind
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressGroupKind;

/// Marker for the network policy kind
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkPolicyKind;

#[cfg(test)]
mod tests {
    use super::*;
    use netview_types::ObjectMeta;

    #[test]
    fn test_raw_object_kind_follows_variant() {
        let raw = RawObject::from(AddressGroup::new(ObjectMeta::named("ag"), vec![]));
        assert_eq!(raw.kind(), "AddressGroup");

        let raw = RawObject::from(NetworkPolicy::new(ObjectMeta::named("np")));
        assert_eq!(raw.kind(), "NetworkPolicy");
    }

    #[test]
    fn test_from_raw_matching_kind() {
        let raw = RawObject::from(NetworkPolicy::new(ObjectMeta::named("np")));
        let policy = NetworkPolicyKind::from_raw(raw).unwrap();
        assert_eq!(policy.metadata.name, "np");
    }
}
