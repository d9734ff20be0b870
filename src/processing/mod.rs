//! Report pipeline stages.
//!
//! - [`subscriptions`] - Enabled subscriptions to scan
//! - [`collect`] - VNets of every subscription
//! - [`expand`] - One report row per (VNet, subnet)

mod collect;
mod expand;
mod subscriptions;

use crate::azure::NetworkSource;
use crate::AnyError;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

// Re-export public functions
pub use collect::collect_vnets;
pub use expand::{expand_subnets, expand_vnet};
pub use subscriptions::enabled_subscriptions;

/// Signature of one scoped query against a [`NetworkSource`].
type Query<I, R> = fn(&dyn NetworkSource, &I) -> Result<R, AnyError>;

/// Run `query` for every item on the blocking pool, at most `concurrency` at a time.
///
/// Results come back in the order of `items` whatever order the queries finish in.
/// Only a panicked query is an error here, query failures are returned per item.
async fn query_each<I, R>(
    source: &Arc<dyn NetworkSource>,
    items: Vec<I>,
    concurrency: usize,
    query: Query<I, R>,
) -> Result<Vec<(I, Result<R, AnyError>)>, AnyError>
where
    I: Send + 'static,
    R: Send + 'static,
{
    stream::iter(items)
        .map(|item| {
            let source = Arc::clone(source);
            tokio::task::spawn_blocking(move || {
                let result = query(&*source, &item);
                (item, result)
            })
        })
        .buffered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .map(|joined| joined.map_err(AnyError::from))
        .collect()
}
