//! Subscription enumeration.

use crate::azure::NetworkSource;
use crate::models::Subscription;
use crate::output::Progress;
use crate::AnyError;
use std::sync::Arc;

/// List subscriptions and keep the enabled ones, in API order.
///
/// # Returns
/// * `Ok(Vec<Subscription>)` - Possibly empty
/// * `Err` - If the listing itself failed, there is nothing to scan
pub async fn enabled_subscriptions(
    source: &Arc<dyn NetworkSource>,
    progress: Progress,
) -> Result<Vec<Subscription>, AnyError> {
    progress.info("Listing enabled subscriptions...");

    let lister = Arc::clone(source);
    let all = tokio::task::spawn_blocking(move || lister.list_subscriptions())
        .await?
        .map_err(|e| format!("Failed to list subscriptions: {e}"))?;

    let total = all.len();
    let enabled: Vec<Subscription> = all.into_iter().filter(Subscription::is_enabled).collect();
    log::info!(
        "subscriptions: {} enabled, {} skipped",
        enabled.len(),
        total - enabled.len()
    );

    if enabled.is_empty() {
        progress.warn("No enabled subscriptions found");
    } else {
        progress.ok(&format!("Found {} enabled subscription(s)", enabled.len()));
    }
    Ok(enabled)
}
