//! Flattened report row, one per (VNet, subnet) pair.

use super::{Subnet, VirtualNetwork};
use serde::{Deserialize, Serialize};

/// Text printed in place of an absent value.
pub const NONE_SENTINEL: &str = "None";

/// Column headers, in cell order.
pub const HEADERS: [&str; 6] = [
    "Subscription",
    "VNET_Name",
    "ResourceGroup",
    "AddressSpace",
    "Subnet",
    "SubnetAddressPrefix",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub subscription_id: String,
    pub vnet_name: String,
    pub resource_group: String,
    /// Comma-joined CIDR list of the VNet.
    pub address_space: String,
    /// None for a VNet without subnets.
    pub subnet: Option<Subnet>,
}

impl ReportRow {
    pub fn new(vnet: &VirtualNetwork, subnet: Option<Subnet>) -> ReportRow {
        ReportRow {
            subscription_id: vnet.subscription_id.clone(),
            vnet_name: vnet.name.clone(),
            resource_group: vnet.resource_group.clone(),
            address_space: vnet.address_space_display(),
            subnet,
        }
    }

    pub fn subnet_name(&self) -> &str {
        self.subnet
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .unwrap_or(NONE_SENTINEL)
    }

    pub fn subnet_address_prefix(&self) -> &str {
        self.subnet
            .as_ref()
            .and_then(|s| s.address_prefix.as_deref())
            .unwrap_or(NONE_SENTINEL)
    }

    /// Rendered cells in [`HEADERS`] order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.subscription_id.as_str(),
            self.vnet_name.as_str(),
            self.resource_group.as_str(),
            self.address_space.as_str(),
            self.subnet_name(),
            self.subnet_address_prefix(),
        ]
    }
}
