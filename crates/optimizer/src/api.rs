//! REST client for the hosted optimization endpoint.
//!
//! One `POST /optimize` route handles every modality; the request body
//! carries the platform profile for the asset's media type.

use serde::Deserialize;

use mediaforge_core::asset::Modality;
use mediaforge_core::platform::Platform;
use mediaforge_core::profiles;

/// HTTP client for the optimization service.
pub struct OptimizationApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// Response returned by the optimization endpoint.
#[derive(Debug, Deserialize)]
pub struct OptimizeResponse {
    /// CDN URL of the optimized variant.
    pub url: String,
    /// Size of the optimized file in bytes.
    pub size_bytes: u64,
}

/// Errors from the optimization REST layer.
#[derive(Debug, thiserror::Error)]
pub enum OptimizationApiError {
    /// Transport-level failure before any status code was received.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("optimization API error ({status}): {body}")]
    Api {
        /// Non-success HTTP status.
        status: u16,
        /// Body text of the error response.
        body: String,
    },
}

impl OptimizationApi {
    /// Create a new API client for the optimization service.
    ///
    /// * `api_url` - base HTTP URL, e.g. `https://api.tinify.com/v1`.
    /// * `api_key` - bearer credential sent with every request.
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Build the client around a shared [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }

    /// Request one platform variant of an asset.
    ///
    /// Sends a `POST /optimize` with the source URL and the platform profile
    /// for the asset's modality, and returns the service's variant
    /// descriptor.
    pub async fn optimize(
        &self,
        source_url: &str,
        modality: Modality,
        platform: Platform,
    ) -> Result<OptimizeResponse, OptimizationApiError> {
        let body = optimize_body(source_url, modality, platform);

        let response = self
            .client
            .post(format!("{}/optimize", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Map a non-success response to [`OptimizationApiError::Api`], reading
    /// the body for the error message.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, OptimizationApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OptimizationApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Run the status check, then deserialize the JSON body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, OptimizationApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// JSON body for one asset/platform pair. The `params` block is the platform
/// profile for the asset's modality.
fn optimize_body(source_url: &str, modality: Modality, platform: Platform) -> serde_json::Value {
    let params = match modality {
        Modality::Image => serde_json::json!(profiles::image_profile(platform)),
        Modality::Video => serde_json::json!(profiles::video_profile(platform)),
        Modality::ThreeD => serde_json::json!(profiles::mesh_profile(platform)),
    };

    serde_json::json!({
        "source_url": source_url,
        "media_type": modality.as_str(),
        "platform": platform.as_str(),
        "params": params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_body_carries_resize_profile() {
        let body = optimize_body("https://cdn.example.com/hero.webp", Modality::Image, Platform::Web);

        assert_eq!(body["source_url"], "https://cdn.example.com/hero.webp");
        assert_eq!(body["media_type"], "image");
        assert_eq!(body["platform"], "web");
        assert_eq!(body["params"]["max_width"], 1920);
        assert_eq!(body["params"]["max_height"], 1080);
        assert_eq!(body["params"]["quality"], 85);
    }

    #[test]
    fn video_body_carries_transcode_profile() {
        let body = optimize_body("https://cdn.example.com/demo.mp4", Modality::Video, Platform::Mobile);

        assert_eq!(body["media_type"], "video");
        assert_eq!(body["platform"], "mobile");
        assert_eq!(body["params"]["resolution"], "720p");
        assert_eq!(body["params"]["bitrate"], "1M");
        assert_eq!(body["params"]["codec"], "h264");
    }

    #[test]
    fn mesh_body_carries_reduction_profile() {
        let body = optimize_body("https://cdn.example.com/scene.gltf", Modality::ThreeD, Platform::Vr);

        assert_eq!(body["media_type"], "3d");
        assert_eq!(body["params"]["vertex_reduction"], 0.0);
        assert_eq!(body["params"]["texture_size"], 4096);
        assert_eq!(body["params"]["compression"], "none");
    }
}
