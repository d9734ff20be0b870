//! Azure CLI interaction.
//!
//! This module handles all Azure-related operations:
//! - [`cli`] - Command execution for Azure CLI
//! - [`retry`] - Bounded retry of failed queries
//! - [`AzCli`] - Live queries through the `az` CLI
//! - [`SnapshotSource`] - Canned query results read from a JSON file

mod az;
mod cli;
mod retry;
mod snapshot;

use crate::models::{Subscription, SubnetRecord, VirtualNetwork, VnetRecord};
use crate::AnyError;

// Re-export public types and functions
pub use az::AzCli;
pub use cli::{parse_json, run_args, split_command};
pub use retry::with_retry;
pub use snapshot::{subnet_key, SnapshotSource};

/// Read-only access to subscriptions, VNets and subnets.
///
/// Every call carries its own subscription scope, so implementations hold no
/// "current subscription" state and calls may run in parallel.
pub trait NetworkSource: Send + Sync {
    /// All subscriptions visible to the session, whatever their state.
    fn list_subscriptions(&self) -> Result<Vec<Subscription>, AnyError>;

    /// VNets of one subscription.
    fn list_vnets(&self, subscription: &Subscription) -> Result<Vec<VnetRecord>, AnyError>;

    /// Subnets of one VNet, scoped by the VNet's subscription and resource group.
    fn list_subnets(&self, vnet: &VirtualNetwork) -> Result<Vec<SubnetRecord>, AnyError>;
}
