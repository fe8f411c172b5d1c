//! Optimizer configuration sourced from the process environment.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Placeholder key that keeps the engine in demo mode.
pub const DEMO_KEY_SENTINEL: &str = "demo-key";

/// Default base URL for the live optimization service.
pub const DEFAULT_OPTIMIZER_URL: &str = "https://api.tinify.com/v1";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Settings for the optimization service connection.
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// API key for the live optimization service, if configured.
    pub api_key: Option<String>,
    /// Base URL of the optimization service.
    pub api_url: String,
}

impl OptimizerConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable                      | Default                         |
    /// |-------------------------------|---------------------------------|
    /// | `MEDIAFORGE_OPTIMIZER_API_KEY`| unset (demo mode)               |
    /// | `MEDIAFORGE_OPTIMIZER_API_URL`| `https://api.tinify.com/v1`     |
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("MEDIAFORGE_OPTIMIZER_API_KEY").ok(),
            api_url: std::env::var("MEDIAFORGE_OPTIMIZER_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPTIMIZER_URL.into()),
        }
    }

    /// Whether the engine should run in demo mode.
    ///
    /// Demo mode is active when no key is configured, the key is empty, or the
    /// key is the documented placeholder value.
    pub fn is_demo(&self) -> bool {
        match self.api_key.as_deref() {
            None | Some("") => true,
            Some(key) => key == DEMO_KEY_SENTINEL,
        }
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_OPTIMIZER_URL.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
