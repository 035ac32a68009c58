//! Adcamp adapter.
//!
//! Posts the bidder's request as-is to a single endpoint and accepts banner
//! bids. The bid's media type comes from `bid.ext.mediaType`.

mod config;
mod extension;

pub use config::AdcampConfig;

use crate::{
    AdapterConfig, AdapterError, AdapterResult, Bidder, BidderResponse, HttpMethod, RequestData, ResponseData,
    TypedBid,
};
use extension::BidExtension;
use fpd_types::{BidRequest, BidResponse, BidderName};
use tracing::debug;

/// The Adcamp bidder.
#[derive(Debug, Clone)]
pub struct AdcampAdapter {
    uri: String,
    config: AdcampConfig,
}

impl AdcampAdapter {
    /// Builds the adapter from host configuration.
    ///
    /// # Errors
    ///
    /// [`AdapterError::Config`] if `extra_adapter_info` is not valid Adcamp JSON.
    pub fn build(bidder: &BidderName, config: &AdapterConfig) -> AdapterResult<Self> {
        let parsed = AdcampConfig::parse(&config.extra_adapter_info)?;
        debug!("Built {} adapter for {}", bidder, config.endpoint);
        Ok(Self {
            uri: config.endpoint.clone(),
            config: parsed,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AdcampConfig {
        &self.config
    }
}

impl Bidder for AdcampAdapter {
    fn make_requests(&self, request: &mut BidRequest) -> (Vec<RequestData>, Vec<AdapterError>) {
        match serde_json::to_vec(request) {
            Ok(body) => (
                vec![RequestData {
                    method: HttpMethod::Post,
                    uri: self.uri.clone(),
                    headers: Vec::new(),
                    body,
                }],
                Vec::new(),
            ),
            Err(e) => (Vec::new(), vec![e.into()]),
        }
    }

    fn make_bids(
        &self,
        request: &BidRequest,
        _request_data: &RequestData,
        response: &ResponseData,
    ) -> (Option<BidderResponse>, Vec<AdapterError>) {
        match response.status_code {
            204 => return (None, Vec::new()),
            400 => {
                return (
                    None,
                    vec![AdapterError::BadInput {
                        message: "Unexpected status code: 400. Bad request from publisher. \
                                  Run with request.debug = 1 for more info."
                            .to_string(),
                    }],
                );
            }
            200 => {}
            code => {
                return (
                    None,
                    vec![AdapterError::BadServerResponse {
                        message: format!(
                            "Unexpected status code: {code}. Run with request.debug = 1 for more info."
                        ),
                    }],
                );
            }
        }

        let parsed: BidResponse = match serde_json::from_slice(&response.body) {
            Ok(parsed) => parsed,
            Err(e) => return (None, vec![e.into()]),
        };

        let mut bidder_response = BidderResponse::with_capacity(request.imp.len());
        bidder_response.currency = parsed.cur;
        let mut errors = Vec::new();

        for bid in parsed.seatbid.into_iter().flat_map(|seat| seat.bid) {
            let bid_type = BidExtension::parse(bid.ext.as_ref()).and_then(|ext| ext.bid_type());
            match bid_type {
                Ok(bid_type) => bidder_response.bids.push(TypedBid { bid, bid_type }),
                Err(e) => errors.push(e),
            }
        }

        (Some(bidder_response), errors)
    }
}
