//! Live optimization backend over the hosted HTTP API.

use async_trait::async_trait;

use mediaforge_core::asset::GeneratedAsset;
use mediaforge_core::platform::Platform;

use crate::api::OptimizationApi;
use crate::backend::{OptimizeBackend, OptimizedVariant};
use crate::config::OptimizerConfig;
use crate::error::OptimizerError;

/// Backend that calls the hosted optimization service.
pub struct LiveOptimizeBackend {
    api: OptimizationApi,
}

impl LiveOptimizeBackend {
    /// Build a live backend from configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        let api = OptimizationApi::new(
            config.api_url,
            config.api_key.unwrap_or_default(),
        );
        Self { api }
    }

    /// Build a live backend reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: OptimizerConfig) -> Self {
        let api = OptimizationApi::with_client(
            client,
            config.api_url,
            config.api_key.unwrap_or_default(),
        );
        Self { api }
    }
}

#[async_trait]
impl OptimizeBackend for LiveOptimizeBackend {
    fn name(&self) -> &'static str {
        "live"
    }

    async fn optimize(
        &self,
        asset: &GeneratedAsset,
        platform: Platform,
    ) -> Result<OptimizedVariant, OptimizerError> {
        let response = self
            .api
            .optimize(&asset.url, asset.modality, platform)
            .await?;

        Ok(OptimizedVariant {
            url: response.url,
            size_bytes: response.size_bytes,
        })
    }
}
