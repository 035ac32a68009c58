//! Bidder adapter interface for resolved first-party data.
//!
//! After FPD has been prepared for an auction, every participating bidder
//! gets its own copy of the request with its resolved entities applied, and
//! its [`Bidder`] turns that copy into outbound HTTP requests. Adapters only
//! build requests and parse responses; transport is left to the caller.
//!
//! - [`Bidder`]: the trait every adapter implements
//! - [`dispatch::make_all_requests`]: builds every bidder's requests concurrently
//! - [`adcamp`]: a single-endpoint banner adapter

pub mod adcamp;
mod bidder;
mod config;
pub mod dispatch;
mod error;

pub use bidder::{Bidder, BidderResponse, HttpMethod, RequestData, ResponseData, TypedBid};
pub use config::AdapterConfig;
pub use error::{AdapterError, AdapterResult};
