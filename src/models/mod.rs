//! Domain models for the Azure VNet report.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Subscription`] - Azure subscription scoping the queries
//! - [`VnetRecord`] and [`VirtualNetwork`] - Virtual networks, raw and tagged
//! - [`SubnetRecord`] and [`Subnet`] - Subnets of a VNet
//! - [`ReportRow`] - One flattened output row

mod report;
mod subnet;
mod subscription;
mod vnet;

// Re-export public types
pub use report::{ReportRow, HEADERS, NONE_SENTINEL};
pub use subnet::{Subnet, SubnetRecord};
pub use subscription::Subscription;
pub use vnet::{VirtualNetwork, VnetRecord};
