use netview_types::NetworkPolicy;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::format::{format_priority, summarize};
use crate::kind::{NetworkPolicyKind, RawObject, ResourceKind};
use crate::table::TableRenderable;
use crate::{Error, Result};

/// The decoded policy as-is; it serializes exactly like the wire object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkPolicyResponse {
    pub policy: NetworkPolicy,
}

impl Deref for NetworkPolicyResponse {
    type Target = NetworkPolicy;

    fn deref(&self) -> &NetworkPolicy {
        &self.policy
    }
}

impl ResourceKind for NetworkPolicyKind {
    const KIND: &'static str = "NetworkPolicy";
    const LIST_KIND: &'static str = "NetworkPolicyList";

    type Object = NetworkPolicy;
    type Response = NetworkPolicyResponse;

    fn transform_one(policy: NetworkPolicy) -> Result<NetworkPolicyResponse> {
        Ok(NetworkPolicyResponse { policy })
    }

    fn from_raw(raw: RawObject) -> Result<NetworkPolicy> {
        match raw {
            RawObject::NetworkPolicy(policy) => Ok(policy),
            other => Err(Error::unexpected_kind(Self::KIND, other.kind())),
        }
    }
}

impl TableRenderable for NetworkPolicyResponse {
    fn header(&self) -> Vec<&'static str> {
        vec![
            "NAME",
            "APPLIED-TO",
            "RULES",
            "SOURCE",
            "TIER-PRIORITY",
            "PRIORITY",
        ]
    }

    fn row(&self, max_column_width: usize) -> Vec<String> {
        vec![
            self.metadata.name.clone(),
            summarize(&self.applied_to_groups, max_column_width),
            self.rules.len().to_string(),
            self.source_display(),
            format_priority(&self.tier_priority),
            format_priority(&self.priority),
        ]
    }

    // Rows keep the list sorter's order
    fn sort_rows(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netview_types::{
        AddressGroup, Direction, NetworkPolicyPeer, NetworkPolicyReference, NetworkPolicyRule,
        NetworkPolicyType, ObjectMeta, OptionalPriority,
    };

    fn rule(direction: Direction) -> NetworkPolicyRule {
        NetworkPolicyRule {
            direction,
            from: NetworkPolicyPeer::default(),
            to: NetworkPolicyPeer::default(),
            services: Vec::new(),
            priority: 0,
            action: None,
            name: String::new(),
            enable_logging: false,
            extra: serde_json::Map::new(),
        }
    }

    fn sample() -> NetworkPolicy {
        NetworkPolicy {
            applied_to_groups: vec!["atg-b".to_string(), "atg-a".to_string()],
            rules: vec![rule(Direction::In), rule(Direction::Out)],
            source_ref: Some(NetworkPolicyReference {
                policy_type: NetworkPolicyType::AntreaNetworkPolicy,
                namespace: "prod".to_string(),
                name: "allow-web".to_string(),
                uid: "1234".to_string(),
            }),
            tier_priority: OptionalPriority::Integer(250),
            priority: OptionalPriority::Float(1.5),
            ..NetworkPolicy::new(ObjectMeta::named("np-1"))
        }
    }

    #[test]
    fn test_transform_wraps_policy_verbatim() {
        let policy = sample();
        let response = NetworkPolicyKind::transform_one(policy.clone()).unwrap();
        assert_eq!(response.policy, policy);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::to_value(&policy).unwrap()
        );
    }

    #[test]
    fn test_table_row() {
        let response = NetworkPolicyKind::transform_one(sample()).unwrap();

        assert_eq!(response.header().len(), response.row(80).len());
        insta::assert_snapshot!(
            response.row(80).join(" | "),
            @"np-1 | atg-b,atg-a | 2 | AntreaNetworkPolicy:prod/allow-web | 250 | 1.5"
        );
        assert!(!response.sort_rows());
    }

    #[test]
    fn test_table_row_absent_priorities() {
        let policy = NetworkPolicy::new(ObjectMeta::named("bare"));
        let response = NetworkPolicyKind::transform_one(policy).unwrap();

        assert_eq!(response.row(80), vec!["bare", "<NONE>", "0", "", "", ""]);
    }

    #[test]
    fn test_applied_to_summarized_to_width() {
        let response = NetworkPolicyKind::transform_one(sample()).unwrap();
        assert_eq!(response.row(6)[1], "atg-b + 1 more...");
    }

    #[test]
    fn test_transform_raw_wrong_kind() {
        let raw = RawObject::AddressGroup(AddressGroup::new(ObjectMeta::named("ag"), vec![]));
        let err = NetworkPolicyKind::transform_raw(raw).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedKind { ref expected, ref found }
                if expected == "NetworkPolicy" && found == "AddressGroup"
        ));
    }
}
