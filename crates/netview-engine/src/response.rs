use serde::Serialize;

use crate::address_group::AddressGroupResponse;
use crate::network_policy::NetworkPolicyResponse;
use crate::table::TableRenderable;

/// Response of any supported kind, for callers that mix kinds in one place
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    AddressGroup(AddressGroupResponse),
    NetworkPolicy(NetworkPolicyResponse),
}

impl From<AddressGroupResponse> for Response {
    fn from(response: AddressGroupResponse) -> Self {
        Response::AddressGroup(response)
    }
}

impl From<NetworkPolicyResponse> for Response {
    fn from(response: NetworkPolicyResponse) -> Self {
        Response::NetworkPolicy(response)
    }
}

impl TableRenderable for Response {
    fn header(&self) -> Vec<&'static str> {
        match self {
            Response::AddressGroup(r) => r.header(),
            Response::NetworkPolicy(r) => r.header(),
        }
    }

    fn row(&self, max_column_width: usize) -> Vec<String> {
        match self {
            Response::AddressGroup(r) => r.row(max_column_width),
            Response::NetworkPolicy(r) => r.row(max_column_width),
        }
    }

    fn sort_rows(&self) -> bool {
        match self {
            Response::AddressGroup(r) => r.sort_rows(),
            Response::NetworkPolicy(r) => r.sort_rows(),
        }
    }
}
