//! Generator clients for the three media modalities.
//!
//! Each client expands a default asset plan from the request context and
//! drives a [`GenerationBackend`] one plan at a time. The backend is either
//! the live HTTP service or deterministic demo synthesis, selected once at
//! construction; a failing live call degrades to the demo asset for that
//! plan, so a batch always completes. The only error a client surfaces is a
//! contract violation in its inputs.

pub mod api;
pub mod backend;
pub mod config;
pub mod demo;
pub mod error;
pub mod image;
pub mod live;
pub mod plan;
pub mod three_d;
pub mod video;

pub use backend::GenerationBackend;
pub use config::GeneratorConfig;
pub use demo::DemoBackend;
pub use error::ProviderError;
pub use image::ImageGenerator;
pub use live::LiveBackend;
pub use plan::{AssetPlan, GenerationContext};
pub use three_d::ThreeDGenerator;
pub use video::VideoGenerator;
