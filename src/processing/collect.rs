//! VNet collection across subscriptions.

use super::query_each;
use crate::azure::NetworkSource;
use crate::models::{Subscription, VirtualNetwork};
use crate::output::Progress;
use crate::AnyError;
use std::sync::Arc;

/// List the VNets of every subscription and tag them with the subscription id.
///
/// Subscriptions without VNets, or whose query failed, are announced and skipped.
/// The result keeps subscription order, then API order within a subscription.
pub async fn collect_vnets(
    source: &Arc<dyn NetworkSource>,
    subscriptions: &[Subscription],
    concurrency: usize,
    progress: Progress,
) -> Result<Vec<VirtualNetwork>, AnyError> {
    let results = query_each(source, subscriptions.to_vec(), concurrency, |source, sub| {
        source.list_vnets(sub)
    })
    .await?;

    let mut vnets = Vec::new();
    for (subscription, result) in results {
        let label = subscription_label(&subscription);
        match result {
            Ok(records) if records.is_empty() => {
                log::info!("no VNETs in subscription {label}");
                progress.warn(&format!("No VNETs found in subscription {label}, skipping"));
            }
            Ok(records) => {
                progress.ok(&format!(
                    "Found {} VNET(s) in subscription {label}",
                    records.len()
                ));
                vnets.extend(
                    records
                        .into_iter()
                        .map(|record| VirtualNetwork::from_record(&subscription.id, record)),
                );
            }
            Err(e) => {
                log::warn!("listing VNETs of subscription {label} failed: {e}");
                progress.warn(&format!(
                    "Could not list VNETs in subscription {label}, skipping: {e}"
                ));
            }
        }
    }

    log::info!(
        "collected {} VNETs from {} subscriptions",
        vnets.len(),
        subscriptions.len()
    );
    Ok(vnets)
}

fn subscription_label(subscription: &Subscription) -> String {
    if subscription.name.is_empty() {
        subscription.id.clone()
    } else {
        format!("{} ({})", subscription.id, subscription.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::SnapshotSource;
    use crate::processing::test_source::{vnet, FailingSource};

    fn snapshot() -> SnapshotSource {
        SnapshotSource::default()
            .with_subscription("sub1", "one", "Enabled")
            .with_subscription("sub2", "two", "Enabled")
            .with_subscription("sub3", "three", "Enabled")
            .with_vnet("sub1", vnet("vnetA", "rg1", &["10.0.0.0/16"]))
            .with_vnet("sub1", vnet("vnetA2", "rg1", &["10.1.0.0/16"]))
            .with_vnet("sub3", vnet("vnetC", "rg3", &["10.3.0.0/16"]))
    }

    #[tokio::test]
    async fn test_tags_and_order() {
        let snapshot = snapshot();
        let subs = snapshot.subscriptions.clone();
        let source: Arc<dyn NetworkSource> = Arc::new(snapshot);
        let vnets = collect_vnets(&source, &subs, 1, Progress::Silent)
            .await
            .unwrap();
        let got: Vec<(&str, &str)> = vnets
            .iter()
            .map(|v| (v.subscription_id.as_str(), v.name.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![("sub1", "vnetA"), ("sub1", "vnetA2"), ("sub3", "vnetC")]
        );
    }

    #[tokio::test]
    async fn test_concurrent_matches_sequential() {
        let snapshot = snapshot();
        let subs = snapshot.subscriptions.clone();
        let source: Arc<dyn NetworkSource> = Arc::new(snapshot);
        let sequential = collect_vnets(&source, &subs, 1, Progress::Silent)
            .await
            .unwrap();
        let parallel = collect_vnets(&source, &subs, 8, Progress::Silent)
            .await
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[tokio::test]
    async fn test_failed_subscription_skipped() {
        let inner = snapshot();
        let subs = inner.subscriptions.clone();
        let source: Arc<dyn NetworkSource> = Arc::new(FailingSource {
            inner,
            fail_vnets_of: ["sub1".to_string()].into_iter().collect(),
            ..Default::default()
        });
        let vnets = collect_vnets(&source, &subs, 1, Progress::Silent)
            .await
            .unwrap();
        assert_eq!(vnets.len(), 1);
        assert_eq!(vnets[0].name, "vnetC");
    }

    #[tokio::test]
    async fn test_no_subscriptions() {
        let source: Arc<dyn NetworkSource> = Arc::new(SnapshotSource::default());
        let vnets = collect_vnets(&source, &[], 1, Progress::Silent)
            .await
            .unwrap();
        assert!(vnets.is_empty());
    }

    #[test]
    fn test_subscription_label() {
        let mut sub = Subscription {
            id: "sub1".to_string(),
            name: "prod".to_string(),
            state: "Enabled".to_string(),
        };
        assert_eq!(subscription_label(&sub), "sub1 (prod)");
        sub.name.clear();
        assert_eq!(subscription_label(&sub), "sub1");
    }
}
