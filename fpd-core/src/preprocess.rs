//! Folding of `ext.prebid` FPD declarations into per-bidder overrides.

use fpd_types::{BidderName, ExtRequestPrebid, FpdData};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Bidder-specific override record per bidder.
pub type BidderFpdMap = BTreeMap<BidderName, FpdData>;

/// Bidders allowed to receive global FPD.
pub type ParticipationSet = BTreeSet<BidderName>;

/// Returns the bidders listed in `ext.prebid.data.bidders`.
///
/// Read this before [`preprocess_bidder_fpd`], which clears the list.
#[must_use]
pub fn global_fpd_bidders(prebid: &ExtRequestPrebid) -> ParticipationSet {
    prebid
        .data
        .iter()
        .flat_map(|data| data.bidders.iter())
        .map(|name| BidderName::from(name.as_str()))
        .collect()
}

/// Builds the override record for every bidder that has FPD declared.
///
/// Every bidder in `ext.prebid.data.bidders` gets an entry, possibly empty.
/// Config blocks are applied in order; for each named bidder, a block's
/// site, app and user replace the bidder's current ones independently, so a
/// later block that only sets `site` keeps an `app` set by an earlier block.
///
/// The consumed declarations (`data.bidders` and `bidderconfig`) are removed
/// from the returned extension; everything else is forwarded untouched.
#[must_use]
pub fn preprocess_bidder_fpd(mut prebid: ExtRequestPrebid) -> (BidderFpdMap, ExtRequestPrebid) {
    let mut bidder_fpd = BidderFpdMap::new();

    for bidder in global_fpd_bidders(&prebid) {
        bidder_fpd.entry(bidder).or_default();
    }

    for block in prebid.bidderconfig.take().unwrap_or_default() {
        let fpd = block.config.and_then(|config| config.fpd);
        for bidder in &block.bidders {
            let entry = bidder_fpd.entry(BidderName::from(bidder.as_str())).or_default();
            let Some(fpd) = fpd.as_ref() else {
                continue;
            };
            if let Some(site) = &fpd.site {
                entry.site = Some(site.clone());
            }
            if let Some(app) = &fpd.app {
                entry.app = Some(app.clone());
            }
            if let Some(user) = &fpd.user {
                entry.user = Some(user.clone());
            }
        }
    }

    if let Some(data) = prebid.data.as_mut() {
        data.bidders.clear();
    }

    debug!("Preprocessed FPD declarations for {} bidders", bidder_fpd.len());
    (bidder_fpd, prebid)
}
