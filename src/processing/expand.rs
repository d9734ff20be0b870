//! Subnet expansion: flatten VNets into report rows.

use super::query_each;
use crate::azure::NetworkSource;
use crate::models::{ReportRow, Subnet, SubnetRecord, VirtualNetwork};
use crate::output::Progress;
use crate::AnyError;
use std::sync::Arc;

/// Rows of one VNet: one per subnet, or a single row without subnet.
pub fn expand_vnet(vnet: &VirtualNetwork, subnets: Vec<SubnetRecord>) -> Vec<ReportRow> {
    if subnets.is_empty() {
        return vec![ReportRow::new(vnet, None)];
    }
    subnets
        .into_iter()
        .map(|record| ReportRow::new(vnet, Some(Subnet::from(record))))
        .collect()
}

/// Query the subnets of every valid VNet and flatten them into rows.
///
/// VNets missing a name, resource group or subscription id are dropped with a
/// warning before any query. A VNet whose subnet query failed contributes no rows.
pub async fn expand_subnets(
    source: &Arc<dyn NetworkSource>,
    vnets: Vec<VirtualNetwork>,
    concurrency: usize,
    progress: Progress,
) -> Result<Vec<ReportRow>, AnyError> {
    let mut valid = Vec::with_capacity(vnets.len());
    for vnet in vnets {
        if vnet.is_valid() {
            valid.push(vnet);
            continue;
        }
        let missing = vnet.missing_fields();
        log::warn!("dropping VNET record missing {missing:?}: {vnet:?}");
        progress.warn(&format!(
            "Skipping VNET record with empty {}: {vnet}",
            missing.join(", ")
        ));
    }

    let results = query_each(source, valid, concurrency, |source, vnet| {
        source.list_subnets(vnet)
    })
    .await?;

    let mut rows = Vec::new();
    for (vnet, result) in results {
        match result {
            Ok(subnets) => {
                if subnets.is_empty() {
                    progress.info(&format!("VNET {} has no subnets", vnet.name));
                } else {
                    log::debug!("VNET {vnet} has {} subnets", subnets.len());
                }
                rows.extend(expand_vnet(&vnet, subnets));
            }
            Err(e) => {
                log::warn!("listing subnets of {vnet} failed: {e}");
                progress.warn(&format!(
                    "Could not list subnets of VNET {}, skipping: {e}",
                    vnet.name
                ));
            }
        }
    }

    log::info!("expanded into {} report rows", rows.len());
    Ok(rows)
}
