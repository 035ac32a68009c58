//! End-to-end FPD preparation for one auction request.

use crate::extract::{extract_global_fpd, extract_structured_fpd};
use crate::preprocess::{global_fpd_bidders, preprocess_bidder_fpd};
use crate::resolve::{ResolvedFpdMap, build_resolved_fpd_for_bidders};
use crate::{FpdError, FpdResult};
use fpd_types::{BidRequest, ExtRequest, FpdData, RawExt};
use tracing::debug;

/// A request ready for per-bidder dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedAuction {
    /// The shared request, with global FPD and FPD declarations removed.
    pub request: BidRequest,
    /// Resolved entities for every bidder that has FPD declared.
    pub resolved: ResolvedFpdMap,
}

/// Extracts and resolves first-party data for a raw bid request.
///
/// Runs synchronously and must complete before bidders are dispatched. Any
/// error rejects the request as a whole; no bidder is resolved partially.
///
/// # Errors
///
/// - [`FpdError::MalformedDocument`] if the request bytes are not valid JSON
/// - [`FpdError::Request`] if the stripped request is not a bid request
/// - [`FpdError::Extension`] if `ext` does not decode as a request extension
/// - [`FpdError::FpdMerge`] if any bidder's FPD cannot be merged
pub fn prepare_auction(raw_request: &[u8]) -> FpdResult<PreparedAuction> {
    let (stripped, global_raw) = extract_global_fpd(raw_request)?;
    let request: BidRequest = serde_json::from_slice(&stripped).map_err(FpdError::Request)?;
    let (mut request, global_structured) = extract_structured_fpd(request);

    let Some(raw_ext) = request.ext.as_ref() else {
        debug!("Request {} has no ext, skipping bidder FPD", request.id);
        return Ok(PreparedAuction { request, resolved: ResolvedFpdMap::new() });
    };
    let mut ext: ExtRequest = serde_json::from_slice(raw_ext.as_bytes()).map_err(FpdError::Extension)?;

    // Without `prebid` there is nothing to consume, and `ext` is forwarded as it came.
    let Some(prebid) = ext.prebid.take() else {
        debug!("Request {} has no ext.prebid, skipping bidder FPD", request.id);
        return Ok(PreparedAuction { request, resolved: ResolvedFpdMap::new() });
    };

    let participants = global_fpd_bidders(&prebid);
    let (bidder_fpd, cleaned) = preprocess_bidder_fpd(prebid);
    ext.prebid = Some(cleaned);
    request.ext = Some(RawExt::from(serde_json::to_vec(&ext).map_err(FpdError::Extension)?));

    let resolved = build_resolved_fpd_for_bidders(
        &request,
        &bidder_fpd,
        &global_raw,
        &global_structured,
        &participants,
    )?;

    debug!("Prepared request {} with FPD for {} bidders", request.id, resolved.len());
    Ok(PreparedAuction { request, resolved })
}

/// Writes a bidder's resolved entities onto that bidder's copy of the request.
///
/// Entities the bidder has no resolved value for are left as they are.
pub fn apply_resolved_fpd(request: &mut BidRequest, resolved: &FpdData) {
    if let Some(user) = &resolved.user {
        request.user = Some(user.clone());
    }
    if let Some(app) = &resolved.app {
        request.app = Some(app.clone());
    }
    if let Some(site) = &resolved.site {
        request.site = Some(site.clone());
    }
}
