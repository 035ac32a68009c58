//! Request-level `ext` declarations that carry first-party data.
//!
//! Publishers declare FPD routing under `ext.prebid`:
//!
//! ```json
//! {
//!   "prebid": {
//!     "data": { "bidders": ["appnexus"] },
//!     "bidderconfig": [
//!       { "bidders": ["rubicon"], "config": { "ortb2": { "site": { "keywords": "kw" } } } }
//!     ]
//!   }
//! }
//! ```
//!
//! Keys that are not modelled here are kept in the `other` maps so an
//! extension can be decoded, cleaned and re-encoded without losing them.

use crate::{App, Site, User};
use serde::{Deserialize, Serialize};

/// The request `ext` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtRequest {
    /// `None` when the key is missing or `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prebid: Option<ExtRequestPrebid>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// The `ext.prebid` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtRequestPrebid {
    /// Bidders allowed to receive global first-party data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ExtRequestPrebidData>,
    /// Ordered bidder-specific FPD blocks; later blocks win.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidderconfig: Option<Vec<BidderConfig>>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// The `ext.prebid.data` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtRequestPrebidData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bidders: Vec<String>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// One `ext.prebid.bidderconfig[]` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidderConfig {
    pub bidders: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BidderConfigBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidderConfigBody {
    #[serde(rename = "ortb2", skip_serializing_if = "Option::is_none")]
    pub fpd: Option<FpdData>,
}

/// First-party data entities for one bidder.
///
/// Used both for bidder-specific overrides declared in a config block and
/// for the fully resolved entities handed to an adapter. A `None` entity
/// means "nothing declared for this entity type".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FpdData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl FpdData {
    /// Returns true when no entity is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.site.is_none() && self.app.is_none() && self.user.is_none()
    }
}
