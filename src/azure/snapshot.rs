//! Offline [`NetworkSource`] reading canned query results from a JSON file.
//!
//! Used for dry runs and tests, no `az` session needed.

use super::cli::parse_json;
use super::NetworkSource;
use crate::models::{Subscription, SubnetRecord, VirtualNetwork, VnetRecord};
use crate::AnyError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Key of the `subnets` map: `<subscription>/<resource group>/<vnet>`.
pub fn subnet_key(subscription_id: &str, resource_group: &str, vnet_name: &str) -> String {
    format!("{subscription_id}/{resource_group}/{vnet_name}")
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct SnapshotSource {
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    /// VNets keyed by subscription id.
    #[serde(default)]
    pub vnets: BTreeMap<String, Vec<VnetRecord>>,
    /// Subnets keyed by [`subnet_key`].
    #[serde(default)]
    pub subnets: BTreeMap<String, Vec<SubnetRecord>>,
}

impl SnapshotSource {
    /// Read a snapshot file.
    ///
    /// # Returns
    /// * `Err` - If the file does not exist or is not a valid snapshot
    pub fn load(path: &str) -> Result<SnapshotSource, AnyError> {
        if !Path::new(path).exists() {
            return Err(format!("Snapshot file does not exist: {path}").into());
        }
        log::info!("Reading from snapshot file: {path}");
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading snapshot file {path}: {e}"))?;
        parse_json(&json, path)
    }

    pub fn with_subscription(mut self, id: &str, name: &str, state: &str) -> Self {
        self.subscriptions.push(Subscription {
            id: id.to_string(),
            name: name.to_string(),
            state: state.to_string(),
        });
        self
    }

    pub fn with_vnet(mut self, subscription_id: &str, vnet: VnetRecord) -> Self {
        self.vnets
            .entry(subscription_id.to_string())
            .or_default()
            .push(vnet);
        self
    }

    pub fn with_subnet(mut self, key: String, subnet: SubnetRecord) -> Self {
        self.subnets.entry(key).or_default().push(subnet);
        self
    }
}

impl NetworkSource for SnapshotSource {
    fn list_subscriptions(&self) -> Result<Vec<Subscription>, AnyError> {
        Ok(self.subscriptions.clone())
    }

    fn list_vnets(&self, subscription: &Subscription) -> Result<Vec<VnetRecord>, AnyError> {
        Ok(self
            .vnets
            .get(&subscription.id)
            .cloned()
            .unwrap_or_default())
    }

    fn list_subnets(&self, vnet: &VirtualNetwork) -> Result<Vec<SubnetRecord>, AnyError> {
        let key = subnet_key(&vnet.subscription_id, &vnet.resource_group, &vnet.name);
        Ok(self.subnets.get(&key).cloned().unwrap_or_default())
    }
}
