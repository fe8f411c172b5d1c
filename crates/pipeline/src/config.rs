//! Combined configuration for a pipeline manager.

use mediaforge_optimizer::OptimizerConfig;
use mediaforge_providers::GeneratorConfig;

/// Settings for every component the pipeline constructs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub generator: GeneratorConfig,
    pub optimizer: OptimizerConfig,
}

impl PipelineConfig {
    /// Read both component configurations from the environment.
    ///
    /// See [`GeneratorConfig::from_env`] and [`OptimizerConfig::from_env`]
    /// for the recognized variables.
    pub fn from_env() -> Self {
        Self {
            generator: GeneratorConfig::from_env(),
            optimizer: OptimizerConfig::from_env(),
        }
    }
}
