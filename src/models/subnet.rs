//! Azure subnet data model.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Subnet record as projected by the `az network vnet subnet list` query.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address_prefix: Option<String>,
    /// Set instead of `address_prefix` on multi-prefix subnets.
    #[serde(default)]
    pub address_prefixes: Option<Vec<String>>,
}

/// A subnet of a VNet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    /// Subnet name (None if the record carried none).
    pub name: Option<String>,
    /// CIDR block of the subnet (None if not configured).
    pub address_prefix: Option<String>,
}

impl From<SubnetRecord> for Subnet {
    fn from(record: SubnetRecord) -> Self {
        let address_prefix = match record.address_prefix {
            Some(prefix) if !prefix.is_empty() => Some(prefix),
            _ => record
                .address_prefixes
                .filter(|prefixes| !prefixes.is_empty())
                .map(|prefixes| prefixes.iter().join(",")),
        };
        Subnet {
            name: record.name.filter(|name| !name.is_empty()),
            address_prefix,
        }
    }
}
