//! Platform-aware optimization of generated media assets.
//!
//! Takes the raw assets produced by the generator crate, produces per-platform
//! variants (resized, re-encoded, or mesh-reduced depending on modality), and
//! assembles the categorized delivery package with byte accounting.

pub mod api;
pub mod backend;
pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod live;

pub use backend::{OptimizeBackend, OptimizedVariant};
pub use config::OptimizerConfig;
pub use demo::DemoOptimizeBackend;
pub use engine::{OptimizationEngine, OptimizationOutcome};
pub use error::OptimizerError;
pub use live::LiveOptimizeBackend;
