//! Configuration structures.
//!
//! Configuration is plain data; callers typically construct it in code or
//! deserialize it from their own config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// SDK configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Base URL all HTTP paths are appended to. Paths always begin with `/`,
    /// so a bare prefix like `"/api"` or a full origin both work.
    pub base_url: String,

    /// Optional deadline applied by [`crate::sdk::Sdk::invoke_with_timeout`]
    /// callers that read it from configuration. Plain `invoke` never times
    /// out regardless of this value.
    #[serde(default, with = "humantime_serde::option")]
    pub job_timeout: Option<Duration>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            job_timeout: None,
        }
    }
}
