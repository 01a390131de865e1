use netview_types::{NodeReference, PodReference, address_group};
use serde::{Deserialize, Serialize};

/// Display projection of a pod or node group member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub ip: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod: Option<PodReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeReference>,
}

/// Project a wire group member; all of its addresses are joined with ", "
pub fn project_member(member: &address_group::GroupMember) -> GroupMember {
    let ip = member
        .ips
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    GroupMember {
        ip,
        pod: member.pod.clone(),
        node: member.node.clone(),
    }
}
