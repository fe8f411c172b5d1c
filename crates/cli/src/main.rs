//! One-shot pipeline runner.
//!
//! Usage: `mediaforge [app_name] [category] [description] [platforms]`
//! where `platforms` is a comma-separated list (`web,mobile,desktop,vr`).
//! Omitted arguments fall back to demo values, so a bare `mediaforge`
//! produces a complete demo package. The finished package is printed as
//! JSON to stdout; progress and diagnostics go to stderr via tracing.

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mediaforge_core::error::CoreError;
use mediaforge_core::platform::{parse_platform_list, Platform};
use mediaforge_core::request::MediaGenerationRequest;
use mediaforge_events::ProgressUpdate;
use mediaforge_pipeline::{PipelineConfig, PipelineManager};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "mediaforge_cli=info,mediaforge_pipeline=info,mediaforge_providers=info,mediaforge_optimizer=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Configuration ---
    let config = PipelineConfig::from_env();
    tracing::info!(
        demo_generation = config.generator.is_demo(),
        demo_optimization = config.optimizer.is_demo(),
        "Loaded pipeline configuration"
    );

    // --- Request ---
    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = match build_request(&args) {
        Ok(request) => request,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("usage: mediaforge [app_name] [category] [description] [platforms]");
            std::process::exit(2);
        }
    };
    tracing::info!(
        app_name = %request.app_name,
        platforms = ?request.target_platforms,
        "Submitting generation request"
    );

    // --- Cancellation on Ctrl-C ---
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received SIGINT (Ctrl-C), cancelling pipeline run");
            signal_cancel.cancel();
        }
    });

    // --- Run ---
    let progress = |update: ProgressUpdate| {
        tracing::info!(stage = %update.label, percent = update.percent, "Progress");
    };

    let manager = PipelineManager::from_config(config);
    match manager
        .generate_with_cancellation(&request, &progress, &cancel)
        .await
    {
        Ok(package) => {
            let json =
                serde_json::to_string_pretty(&package).expect("package serializes to JSON");
            println!("{json}");
        }
        Err(error) => {
            tracing::error!(%error, "Media generation failed");
            std::process::exit(1);
        }
    }
}

/// Build the generation request from positional arguments, substituting demo
/// defaults for anything omitted.
fn build_request(args: &[String]) -> Result<MediaGenerationRequest, CoreError> {
    let target_platforms = match args.get(3) {
        Some(list) => parse_platform_list(list)?,
        None => vec![Platform::Web, Platform::Mobile],
    };

    let request = MediaGenerationRequest {
        app_name: args
            .first()
            .cloned()
            .unwrap_or_else(|| "Aurora Tasks".to_string()),
        category: args
            .get(1)
            .cloned()
            .unwrap_or_else(|| "productivity".to_string()),
        description: args
            .get(2)
            .cloned()
            .unwrap_or_else(|| "Collaborative task board with realtime sync".to_string()),
        target_platforms,
        theme: None,
        requirements: None,
    };
    request.validate()?;
    Ok(request)
}
