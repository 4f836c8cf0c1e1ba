//! Assigned subnet data model.

use super::{Ipv4, SubnetRequest};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Column names of the flat record, in export order.
pub const FIELD_NAMES: [&str; 7] = [
    "name",
    "cidr",
    "vid",
    "network",
    "subnetmask",
    "company_description",
    "location_description",
];

/// A request together with the subnet it was given.
///
/// Built fresh from the [`SubnetRequest`]; the request is left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssignedSubnet {
    /// Name of the requested network.
    pub name: String,
    /// Prefix length of the assigned subnet, in string form.
    pub cidr: String,
    /// VLAN id carried over from the request.
    pub vid: Option<u16>,
    /// The assigned network, e.g. `10.0.1.0/24`.
    pub network: Ipv4,
    /// Dotted subnet mask of the assigned network.
    pub subnetmask: Ipv4Addr,
    /// `"{company_name} {name}"`.
    pub company_description: String,
    /// `"{location_code} {name}"`.
    pub location_description: String,
}

impl AssignedSubnet {
    pub fn new(
        request: &SubnetRequest,
        network: Ipv4,
        location_code: &str,
        company_name: &str,
    ) -> Self {
        AssignedSubnet {
            name: request.name.clone(),
            cidr: network.mask.to_string(),
            vid: request.vlan_id,
            network,
            subnetmask: network.netmask(),
            company_description: format!("{company_name} {}", request.name),
            location_description: format!("{location_code} {}", request.name),
        }
    }

    /// Prefix length of the assigned network.
    pub fn prefix_length(&self) -> u8 {
        self.network.mask
    }

    /// Field values in [`FIELD_NAMES`] order. An absent vid is empty.
    pub fn record(&self) -> [String; 7] {
        [
            self.name.clone(),
            self.cidr.clone(),
            self.vid.map(|v| v.to_string()).unwrap_or_default(),
            self.network.to_string(),
            self.subnetmask.to_string(),
            self.company_description.clone(),
            self.location_description.clone(),
        ]
    }
}
