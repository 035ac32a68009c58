use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity that can carry raw global FPD under `ext.data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKey {
    Site,
    App,
    User,
}

impl EntityKey {
    /// All keys, in extraction order.
    pub const ALL: [Self; 3] = [Self::Site, Self::App, Self::User];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::App => "app",
            Self::User => "user",
        }
    }

    /// Path of the raw FPD object inside the request: `<entity>.ext.data`.
    #[must_use]
    pub const fn ext_data_path(self) -> [&'static str; 3] {
        [self.as_str(), "ext", "data"]
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of a structured `data` array in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StructuredKey {
    /// `user.data`
    #[serde(rename = "userData")]
    UserData,
    /// `site.content.data`
    #[serde(rename = "siteContentData")]
    SiteContentData,
    /// `app.content.data`
    #[serde(rename = "appContentData")]
    AppContentData,
}

impl StructuredKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserData => "userData",
            Self::SiteContentData => "siteContentData",
            Self::AppContentData => "appContentData",
        }
    }
}

impl fmt::Display for StructuredKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
