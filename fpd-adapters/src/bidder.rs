use crate::AdapterError;
use fpd_types::{Bid, BidRequest, BidType};

/// HTTP method of an outbound request. Adapters here only post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

/// An outbound request built by an adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestData {
    pub method: HttpMethod,
    pub uri: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// A bidder's HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseData {
    pub status_code: u16,
    pub body: Vec<u8>,
}

/// A bid tagged with its media type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedBid {
    pub bid: Bid,
    pub bid_type: BidType,
}

/// Bids parsed from one bidder response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BidderResponse {
    pub currency: String,
    pub bids: Vec<TypedBid>,
}

impl BidderResponse {
    /// Creates an empty response with room for `capacity` bids.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            currency: String::new(),
            bids: Vec::with_capacity(capacity),
        }
    }
}

/// A bidder integration.
///
/// `make_requests` receives the bidder's own copy of the request, with its
/// resolved first-party data already applied, and may modify it freely.
/// Both methods report errors alongside partial results, since one bad bid
/// should not discard the rest.
pub trait Bidder: Send + Sync {
    fn make_requests(&self, request: &mut BidRequest) -> (Vec<RequestData>, Vec<AdapterError>);

    fn make_bids(
        &self,
        request: &BidRequest,
        request_data: &RequestData,
        response: &ResponseData,
    ) -> (Option<BidderResponse>, Vec<AdapterError>);
}
