//! OpenRTB object model for first-party data handling.
//!
//! Defines the request-side types the FPD engine reads and rewrites:
//! - [`BidRequest`] and its [`User`] / [`Site`] / [`App`] entities
//! - [`RawExt`]: an extension field carried as raw JSON bytes
//! - [`ExtRequest`]: the `ext.prebid` declarations that carry bidder configs
//! - [`BidderName`] and [`BidType`]: identifiers shared with bidder adapters
//!
//! Only the fields the auction pipeline touches are modelled. Media objects
//! and device data are carried as opaque JSON.

mod bidder;
mod ext;
mod openrtb;
mod raw_ext;

pub use bidder::{BidType, BidderName};
pub use ext::{
    BidderConfig, BidderConfigBody, ExtRequest, ExtRequestPrebid, ExtRequestPrebidData, FpdData,
};
pub use openrtb::{
    App, Bid, BidRequest, BidResponse, Content, Data, Imp, Publisher, SeatBid, Segment, Site, User,
};
pub use raw_ext::RawExt;
