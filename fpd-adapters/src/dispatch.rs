//! Concurrent construction of per-bidder requests.
//!
//! Runs after FPD preparation. Each bidder's adapter gets an owned copy of
//! the shared request with that bidder's resolved entities applied, so
//! adapters can run in parallel and modify their copy without affecting any
//! other bidder.

use crate::{AdapterError, AdapterResult, Bidder, RequestData};
use fpd_core::{PreparedAuction, apply_resolved_fpd};
use fpd_types::BidderName;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Registered adapters by bidder name.
pub type BidderRegistry = BTreeMap<BidderName, Arc<dyn Bidder>>;

/// Requests and errors produced by one adapter.
#[derive(Debug, Default)]
pub struct BidderRequests {
    pub requests: Vec<RequestData>,
    pub errors: Vec<AdapterError>,
}

/// Builds outbound requests for every registered bidder concurrently.
///
/// Each adapter runs on a blocking task. Results are keyed by bidder name.
///
/// # Errors
///
/// [`AdapterError::Dispatch`] if a task panics or is cancelled.
pub async fn make_all_requests(
    bidders: &BidderRegistry,
    prepared: &PreparedAuction,
) -> AdapterResult<BTreeMap<BidderName, BidderRequests>> {
    let mut tasks = JoinSet::new();

    for (name, bidder) in bidders {
        let mut request = prepared.request.clone();
        if let Some(fpd) = prepared.resolved.get(name) {
            apply_resolved_fpd(&mut request, fpd);
        }
        let bidder = Arc::clone(bidder);
        let name = name.clone();
        tasks.spawn_blocking(move || {
            let (requests, errors) = bidder.make_requests(&mut request);
            (name, BidderRequests { requests, errors })
        });
    }

    let mut results = BTreeMap::new();
    while let Some(joined) = tasks.join_next().await {
        let (name, built) = joined.map_err(|e| {
            warn!("Bidder request task failed: {}", e);
            AdapterError::Dispatch(e.to_string())
        })?;
        debug!(
            "Built {} requests for {} ({} errors)",
            built.requests.len(),
            name,
            built.errors.len()
        );
        results.insert(name, built);
    }

    Ok(results)
}
