//! First-party data (FPD) extraction and per-bidder resolution.
//!
//! Publishers attach FPD to a bid request at two levels: globally (raw JSON
//! under `{site,app,user}.ext.data` plus the structured `user.data` and
//! `{site,app}.content.data` arrays) and per bidder (`ext.prebid.bidderconfig`).
//! Before the request fans out to bidders, this crate:
//!
//! 1. strips the global FPD out of the shared request ([`extract`]),
//! 2. folds the bidder config blocks into one override record per bidder
//!    ([`preprocess`]),
//! 3. resolves an independently-owned User/App/Site for every bidder
//!    ([`resolve`]).
//!
//! [`prepare_auction`] runs all three steps over raw request bytes.
//!
//! # Precedence
//!
//! For each entity, resolution starts from the shared request's value, applies
//! global FPD if the bidder is listed in `ext.prebid.data.bidders`, then applies
//! the bidder's own override: named fields are replaced wholesale and `ext` is
//! merged with RFC 7396 JSON merge patch ([`merge`]).

mod error;
pub mod extract;
pub mod jsonutil;
mod keys;
pub mod merge;
mod pipeline;
pub mod preprocess;
pub mod resolve;

pub use error::{FpdError, FpdResult};
pub use extract::{GlobalRawFpd, GlobalStructuredFpd, extract_global_fpd, extract_structured_fpd};
pub use keys::{EntityKey, StructuredKey};
pub use pipeline::{PreparedAuction, apply_resolved_fpd, prepare_auction};
pub use preprocess::{BidderFpdMap, ParticipationSet, global_fpd_bidders, preprocess_bidder_fpd};
pub use resolve::{ResolvedFpdMap, build_resolved_fpd_for_bidders, resolve_app, resolve_site, resolve_user};
