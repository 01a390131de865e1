use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::meta::{HasMetadata, ObjectMeta};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodReference {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeReference {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPort {
    pub port: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// Group member as sent by the control plane: a pod or a node plus its addresses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod: Option<PodReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeReference>,

    #[serde(default)]
    pub ips: Vec<IpAddr>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<NamedPort>,
}

impl GroupMember {
    pub fn pod(name: &str, namespace: &str, ips: Vec<IpAddr>) -> Self {
        Self {
            pod: Some(PodReference {
                name: name.to_string(),
                namespace: namespace.to_string(),
            }),
            ips,
            ..Self::default()
        }
    }

    pub fn node(name: &str, ips: Vec<IpAddr>) -> Self {
        Self {
            node: Some(NodeReference {
                name: name.to_string(),
            }),
            ips,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub group_members: Vec<GroupMember>,
}

impl AddressGroup {
    pub fn new(metadata: ObjectMeta, group_members: Vec<GroupMember>) -> Self {
        Self {
            kind: None,
            api_version: None,
            metadata,
            group_members,
        }
    }

    /// Members backed by a pod, in source order
    pub fn pod_members(&self) -> impl Iterator<Item = &GroupMember> {
        self.group_members.iter().filter(|m| m.pod.is_some())
    }

    /// Members backed by a node, in source order
    pub fn node_members(&self) -> impl Iterator<Item = &GroupMember> {
        self.group_members.iter().filter(|m| m.node.is_some())
    }
}

impl HasMetadata for AddressGroup {
    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}
