use crate::{AdapterError, AdapterResult};
use fpd_types::{BidType, RawExt};
use serde::Deserialize;

/// The `ext` Adcamp attaches to each bid.
#[derive(Debug, Deserialize)]
pub(crate) struct BidExtension {
    #[serde(default, rename = "mediaType")]
    media_type: i8,
}

impl BidExtension {
    /// Parses a bid's `ext`. A missing `ext` is an error.
    pub(crate) fn parse(ext: Option<&RawExt>) -> AdapterResult<Self> {
        let bytes = ext.map(RawExt::as_bytes).unwrap_or_default();
        Ok(serde_json::from_slice(bytes)?)
    }

    pub(crate) fn bid_type(&self) -> AdapterResult<BidType> {
        match self.media_type {
            0 => Ok(BidType::Banner),
            other => Err(AdapterError::UnknownMediaType(i64::from(other))),
        }
    }
}
