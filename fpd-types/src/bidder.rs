use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a bidder integration, as it appears in request extensions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BidderName(String);

impl BidderName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BidderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BidderName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BidderName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for BidderName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Media type of a typed bid returned by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidType {
    Banner,
    Video,
    Audio,
    Native,
}
