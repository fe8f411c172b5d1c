//! Domain types and pure logic for the media generation pipeline.
//!
//! Everything in this crate is synchronous and side-effect free: request
//! validation, platform/theme types, asset and package shapes, the fixed
//! optimization profile table, prompt-keyword categorization, pipeline stage
//! windows, and quality/analytics scoring. The async crates (providers,
//! optimizer, pipeline) build on these.

pub mod analytics;
pub mod asset;
pub mod categorize;
pub mod error;
pub mod package;
pub mod platform;
pub mod profiles;
pub mod progress;
pub mod quality;
pub mod request;
pub mod theme;
pub mod types;
