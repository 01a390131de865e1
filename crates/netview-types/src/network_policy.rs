use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::meta::{HasMetadata, ObjectMeta};
use crate::priority::OptionalPriority;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    In,
    Out,
    /// A direction this client does not know, kept as sent
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleAction {
    Allow,
    Drop,
    Reject,
    Pass,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpBlock {
    pub cidr: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub except: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPolicyPeer {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address_groups: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_blocks: Vec<IpBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// Numeric port or named port, kept as sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_port: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPolicyRule {
    pub direction: Direction,

    #[serde(default)]
    pub from: NetworkPolicyPeer,

    #[serde(default)]
    pub to: NetworkPolicyPeer,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,

    #[serde(default)]
    pub priority: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<RuleAction>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enable_logging: bool,

    /// Rule fields without a typed counterpart (`appliedToGroups`, `l7Protocols`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkPolicyType {
    K8sNetworkPolicy,
    AntreaClusterNetworkPolicy,
    AntreaNetworkPolicy,
    AdminNetworkPolicy,
    BaselineAdminNetworkPolicy,
    /// Policy types added after this client was built
    #[serde(untagged)]
    Other(String),
}

impl NetworkPolicyType {
    pub fn as_str(&self) -> &str {
        match self {
            NetworkPolicyType::K8sNetworkPolicy => "K8sNetworkPolicy",
            NetworkPolicyType::AntreaClusterNetworkPolicy => "AntreaClusterNetworkPolicy",
            NetworkPolicyType::AntreaNetworkPolicy => "AntreaNetworkPolicy",
            NetworkPolicyType::AdminNetworkPolicy => "AdminNetworkPolicy",
            NetworkPolicyType::BaselineAdminNetworkPolicy => "BaselineAdminNetworkPolicy",
            NetworkPolicyType::Other(name) => name,
        }
    }

    /// Cluster-scoped policies have no namespace in their reference
    pub fn is_cluster_scoped(&self) -> bool {
        matches!(
            self,
            NetworkPolicyType::AntreaClusterNetworkPolicy
                | NetworkPolicyType::AdminNetworkPolicy
                | NetworkPolicyType::BaselineAdminNetworkPolicy
        )
    }
}

/// Identifies the user-facing policy an internal policy was computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPolicyReference {
    #[serde(rename = "type")]
    pub policy_type: NetworkPolicyType,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,
}

impl fmt::Display for NetworkPolicyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Unknown types are treated as cluster-scoped when they carry no namespace
        if self.policy_type.is_cluster_scoped() || self.namespace.is_empty() {
            write!(f, "{}:{}", self.policy_type.as_str(), self.name)
        } else {
            write!(
                f,
                "{}:{}/{}",
                self.policy_type.as_str(),
                self.namespace,
                self.name
            )
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub applied_to_groups: Vec<String>,

    #[serde(default)]
    pub rules: Vec<NetworkPolicyRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<NetworkPolicyReference>,

    #[serde(default, skip_serializing_if = "OptionalPriority::is_absent")]
    pub tier_priority: OptionalPriority,

    #[serde(default, skip_serializing_if = "OptionalPriority::is_absent")]
    pub priority: OptionalPriority,

    /// Wire fields without a typed counterpart, carried through to the output
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NetworkPolicy {
    pub fn new(metadata: ObjectMeta) -> Self {
        Self {
            metadata,
            ..Self::default()
        }
    }

    /// Display form of the source reference; empty when the server sent none
    pub fn source_display(&self) -> String {
        self.source_ref
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

impl HasMetadata for NetworkPolicy {
    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}
