//! Azure VNet report library.
//!
//! Lists the VNets of every enabled Azure subscription, expands them into one
//! row per subnet and renders the rows as a table, CSV or JSON.
//!
//! # Modules
//! - [`azure`] - Azure CLI and snapshot data sources
//! - [`config`] - Settings read from the environment
//! - [`models`] - Domain models (Subscription, VirtualNetwork, Subnet, ReportRow)
//! - [`output`] - Output formatting
//! - [`processing`] - Pipeline stages

pub mod azure;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use azure::NetworkSource;
use models::ReportRow;
use output::Progress;
use std::error::Error;
use std::sync::Arc;

/// Error type shared by the crate; `Send + Sync` so it can cross the blocking pool.
pub type AnyError = Box<dyn Error + Send + Sync>;

// Re-export commonly used items at crate root
pub use config::Config;
pub use processing::{collect_vnets, enabled_subscriptions, expand_subnets};

/// Result of a completed report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// No VNet in any enabled subscription.
    NoVnets,
    /// VNets were found but none survived validation and expansion.
    NoRows,
    Rows(Vec<ReportRow>),
}

/// Run the whole pipeline: subscriptions, VNets, subnets.
///
/// # Returns
/// * `Ok(ReportOutcome)` - Rows, or which stage came up empty
/// * `Err` - If subscriptions could not be listed
pub async fn build_report(
    source: Arc<dyn NetworkSource>,
    concurrency: usize,
    progress: Progress,
) -> Result<ReportOutcome, AnyError> {
    log::info!("#Start build_report() concurrency={concurrency}");

    let subscriptions = enabled_subscriptions(&source, progress).await?;

    progress.info("Collecting VNETs...");
    let vnets = collect_vnets(&source, &subscriptions, concurrency, progress).await?;
    if vnets.is_empty() {
        return Ok(ReportOutcome::NoVnets);
    }

    progress.info(&format!("Listing subnets of {} VNET(s)...", vnets.len()));
    let rows = expand_subnets(&source, vnets, concurrency, progress).await?;
    if rows.is_empty() {
        return Ok(ReportOutcome::NoRows);
    }

    Ok(ReportOutcome::Rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::SnapshotSource;

    async fn run_snapshot(path: &str) -> ReportOutcome {
        let source = SnapshotSource::load(path).expect("Error reading snapshot");
        build_report(Arc::new(source), 1, Progress::Silent)
            .await
            .expect("report failed")
    }

    #[tokio::test]
    async fn test_build_report_snapshot_01() {
        let ReportOutcome::Rows(rows) = run_snapshot("src/tests/test_data/snapshot_01.json").await
        else {
            panic!("expected rows");
        };
        let cells: Vec<[&str; 6]> = rows.iter().map(|r| r.cells()).collect();
        assert_eq!(
            cells,
            vec![
                ["sub1", "vnetA", "rg1", "10.0.0.0/16", "web", "10.0.1.0/24"],
                ["sub1", "vnetA", "rg1", "10.0.0.0/16", "db", "10.0.2.0/24"],
                ["sub2", "vnetB", "rg2", "10.20.0.0/16,10.21.0.0/16", "None", "None"],
            ]
        );
    }

    #[tokio::test]
    async fn test_build_report_no_vnets() {
        let outcome = run_snapshot("src/tests/test_data/snapshot_no_vnets.json").await;
        assert_eq!(outcome, ReportOutcome::NoVnets);
    }

    #[tokio::test]
    async fn test_build_report_all_vnets_invalid() {
        let outcome = run_snapshot("src/tests/test_data/snapshot_invalid_vnets.json").await;
        assert_eq!(outcome, ReportOutcome::NoRows);
    }

    #[tokio::test]
    async fn test_build_report_no_subscriptions() {
        let outcome = build_report(Arc::new(SnapshotSource::default()), 1, Progress::Silent)
            .await
            .unwrap();
        assert_eq!(outcome, ReportOutcome::NoVnets);
    }
}
