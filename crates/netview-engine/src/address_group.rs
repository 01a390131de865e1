use netview_types::AddressGroup;
use serde::{Deserialize, Serialize};

use crate::format::summarize;
use crate::kind::{AddressGroupKind, RawObject, ResourceKind};
use crate::member::{GroupMember, project_member};
use crate::table::TableRenderable;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressGroupResponse {
    pub name: String,
    #[serde(default)]
    pub pods: Vec<GroupMember>,
    #[serde(default)]
    pub nodes: Vec<GroupMember>,
}

impl AddressGroupResponse {
    pub fn pod_ips(&self) -> Vec<&str> {
        self.pods.iter().map(|m| m.ip.as_str()).collect()
    }

    pub fn node_ips(&self) -> Vec<&str> {
        self.nodes.iter().map(|m| m.ip.as_str()).collect()
    }
}

impl ResourceKind for AddressGroupKind {
    const KIND: &'static str = "AddressGroup";
    const LIST_KIND: &'static str = "AddressGroupList";

    type Object = AddressGroup;
    type Response = AddressGroupResponse;

    fn transform_one(group: AddressGroup) -> Result<AddressGroupResponse> {
        Ok(AddressGroupResponse {
            pods: group.pod_members().map(project_member).collect(),
            nodes: group.node_members().map(project_member).collect(),
            name: group.metadata.name,
        })
    }

    fn from_raw(raw: RawObject) -> Result<AddressGroup> {
        match raw {
            RawObject::AddressGroup(group) => Ok(group),
            other => Err(Error::unexpected_kind(Self::KIND, other.kind())),
        }
    }
}

impl TableRenderable for AddressGroupResponse {
    fn header(&self) -> Vec<&'static str> {
        vec!["NAME", "POD-IPS", "NODE-IPS"]
    }

    fn row(&self, max_column_width: usize) -> Vec<String> {
        vec![
            self.name.clone(),
            summarize(&self.pod_ips(), max_column_width),
            summarize(&self.node_ips(), max_column_width),
        ]
    }

    fn sort_rows(&self) -> bool {
        true
    }
}
