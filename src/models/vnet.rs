//! Azure Virtual Network (VNet) data model.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// VNet record as projected by the `az network vnet list` query.
///
/// Every field is optional on the wire; validation happens later so that a
/// broken record can be reported instead of failing the whole subscription.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VnetRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub resource_group: Option<String>,
    /// `addressSpace.addressPrefixes` of the VNet.
    #[serde(default)]
    pub address_space: Option<Vec<String>>,
}

/// A VNet tagged with the subscription it was found in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VirtualNetwork {
    pub subscription_id: String,
    pub name: String,
    pub resource_group: String,
    /// CIDR blocks of the virtual network, in API order.
    pub address_space: Vec<String>,
}

impl VirtualNetwork {
    /// Tag a raw record with its subscription. Missing fields become empty.
    pub fn from_record(subscription_id: &str, record: VnetRecord) -> VirtualNetwork {
        VirtualNetwork {
            subscription_id: subscription_id.to_string(),
            name: record.name.unwrap_or_default(),
            resource_group: record.resource_group.unwrap_or_default(),
            address_space: record.address_space.unwrap_or_default(),
        }
    }

    /// Names of required fields that are empty, empty list when valid.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.resource_group.is_empty() {
            missing.push("resourceGroup");
        }
        if self.subscription_id.is_empty() {
            missing.push("subscriptionId");
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Address space as a comma-joined CIDR list.
    pub fn address_space_display(&self) -> String {
        self.address_space.iter().join(",")
    }
}

impl fmt::Display for VirtualNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} [{}] ({})",
            self.resource_group,
            self.name,
            self.address_space.join(", "),
            self.subscription_id
        )
    }
}
