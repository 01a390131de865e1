// Engine - turns decoded control-plane objects into display records.
// Pipeline: bytes -> decode (factory) -> sort (lists) -> transform (per kind) -> table rows.
// Everything here is synchronous and pure apart from reading the input stream.

pub mod address_group;
pub mod error;
pub mod factory;
pub mod format;
pub mod kind;
pub mod member;
pub mod network_policy;
pub mod response;
pub mod sort;
pub mod table;

pub use address_group::AddressGroupResponse;
pub use error::{Error, Result};
pub use factory::{Factory, Transformed};
pub use format::{format_priority, summarize};
pub use kind::{AddressGroupKind, NetworkPolicyKind, RawObject, ResourceKind};
pub use member::{GroupMember, project_member};
pub use network_policy::NetworkPolicyResponse;
pub use response::Response;
pub use sort::{SORT_BY_CREATION_TIMESTAMP, SORT_BY_KEY, SortBy, sort_objects};
pub use table::{DEFAULT_MAX_COLUMN_WIDTH, TableData, TableRenderable, render_table};

use std::collections::HashMap;
use std::io::Read;

// Façade API - one entry point per resource kind, used by the CLI layer

/// Transform an address group (or address group list) stream
pub fn transform_address_groups<R: Read>(
    reader: R,
    single: bool,
    options: &HashMap<String, String>,
) -> Result<Transformed<AddressGroupResponse>> {
    Factory::<AddressGroupKind>::new().transform(reader, single, options)
}

/// Transform a network policy (or network policy list) stream
pub fn transform_network_policies<R: Read>(
    reader: R,
    single: bool,
    options: &HashMap<String, String>,
) -> Result<Transformed<NetworkPolicyResponse>> {
    Factory::<NetworkPolicyKind>::new().transform(reader, single, options)
}
