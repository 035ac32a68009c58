use crate::{AdapterError, AdapterResult};
use serde::{Deserialize, Serialize};

/// Adcamp settings carried in `extra_adapter_info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdcampConfig {
    #[serde(default)]
    pub token: String,
}

impl AdcampConfig {
    pub(crate) fn parse(extra_adapter_info: &str) -> AdapterResult<Self> {
        serde_json::from_str(extra_adapter_info).map_err(|e| AdapterError::Config(e.to_string()))
    }
}
