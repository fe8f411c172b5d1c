//! REST client for the hosted media generation endpoints.
//!
//! Wraps the per-modality generation routes (`/images/generate`,
//! `/videos/generate`, `/3d/generate`) using [`reqwest`].

use serde::{Deserialize, Serialize};

use mediaforge_core::asset::Modality;

use crate::plan::AssetPlan;

/// HTTP client for the generation service.
pub struct GenerationApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// JSON body sent to every generation endpoint. Fields that do not apply to
/// the modality are omitted.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    complexity: Option<&'a str>,
    quality: &'a str,
    format: &'a str,
    style_preset: &'a str,
}

/// Response returned by every generation endpoint.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    /// CDN URL of the generated asset.
    pub url: String,
    /// Preview thumbnail URL, when the provider renders one.
    pub thumbnail_url: Option<String>,
    /// Size of the generated file in bytes, when the provider reports it.
    pub file_size: Option<u64>,
}

/// Errors from the generation REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GenerationApiError {
    /// The request never produced a response (connection, DNS, TLS).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("generation API error ({status}): {body}")]
    Api {
        /// Status code returned by the service.
        status: u16,
        /// Response body text, kept for diagnostics.
        body: String,
    },
}

impl GenerationApi {
    /// Create a new API client for the generation service.
    ///
    /// * `api_url` - base HTTP URL, e.g. `https://api.runwayml.com/v1`.
    /// * `api_key` - bearer credential sent with every request.
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Create a client on top of an existing [`reqwest::Client`] so several
    /// API wrappers can share one connection pool.
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }

    /// Request one asset from the modality's generation endpoint.
    ///
    /// Sends a `POST` to the route selected by `plan.modality` with the
    /// plan's prompt and parameters, and returns the provider's asset
    /// descriptor.
    pub async fn generate(
        &self,
        plan: &AssetPlan,
        model: &str,
        style_preset: &str,
    ) -> Result<GenerateResponse, GenerationApiError> {
        let body = GenerateRequest {
            model,
            prompt: &plan.prompt,
            width: plan.dimensions.map(|d| d.width),
            height: plan.dimensions.map(|d| d.height),
            duration: plan.duration_secs,
            complexity: plan.complexity.map(|c| c.as_str()),
            quality: plan.quality.as_str(),
            format: plan.format,
            style_preset,
        };

        let response = self
            .client
            .post(format!("{}{}", self.api_url, endpoint_for(plan.modality)))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Check the status code before consuming the body. A non-2xx response
    /// becomes [`GenerationApiError::Api`] with the body text captured.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GenerationApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenerationApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode the JSON body once the status check passes.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GenerationApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Generation route for a modality.
fn endpoint_for(modality: Modality) -> &'static str {
    match modality {
        Modality::Image => "/images/generate",
        Modality::Video => "/videos/generate",
        Modality::ThreeD => "/3d/generate",
    }
}
