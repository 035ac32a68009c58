use serde::{Deserialize, Serialize};

/// Host configuration for one adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Endpoint the adapter posts requests to.
    pub endpoint: String,
    /// Adapter-specific settings as a JSON string; each adapter parses its own.
    pub extra_adapter_info: String,
}

impl AdapterConfig {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            extra_adapter_info: String::new(),
        }
    }

    /// Sets the adapter-specific settings.
    #[must_use]
    pub fn with_extra_info(mut self, extra_adapter_info: impl Into<String>) -> Self {
        self.extra_adapter_info = extra_adapter_info.into();
        self
    }
}
