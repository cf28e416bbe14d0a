use anyhow::Result;
use seasoning_coverage::config::AppConfig;
use seasoning_coverage::errors::error_logging;
use seasoning_coverage::{image_io, observability, CoverageReport, SeasoningAnalyzer};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

const USAGE: &str = "Usage: seasoning-coverage <input-image> [output-image]";

/// Load and validate configuration at startup
fn load_configuration() -> Result<AppConfig> {
    let config = AppConfig::from_env().map_err(|e| {
        error_logging::log_config_error(&e, "environment", "load_configuration");
        anyhow::anyhow!("Configuration loading failed: {}", e)
    })?;

    config.validate().map_err(|e| {
        anyhow::anyhow!("Configuration validation failed: {}. Please check your environment values.", e)
    })?;

    Ok(config)
}

/// Default output path: `<stem>_coverage.png` next to the input
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{}_coverage.png", stem))
}

fn main() -> Result<()> {
    // Load environment variables from .env file first
    dotenvy::dotenv().ok();

    let mut args = env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("Missing input image. {}", USAGE))?;
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(&input));
    if args.next().is_some() {
        return Err(anyhow::anyhow!("Too many arguments. {}", USAGE));
    }

    let config = load_configuration()?;
    observability::init_tracing_with_config(&config.observability)?;
    info!(summary = %config.summary(), "Configuration loaded");
    let metrics_handle = observability::init_metrics_with_config(&config.observability)?;

    let image = image_io::load_image(&input)?;
    let pixel_count = image.width() as u64 * image.height() as u64;

    let start_time = Instant::now();
    let analysis = SeasoningAnalyzer::new(config.analyzer).analyze(&image);
    if let Some(handle) = &metrics_handle {
        observability::record_analysis_metrics(
            analysis.triangle_found(),
            analysis.coverage,
            start_time.elapsed(),
            pixel_count,
        );
        info!(metrics = %handle.render(), "Analysis metrics");
    }

    image_io::save_visualization(&output, &analysis.visualization)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        coverage = analysis.coverage,
        "Visualization written"
    );

    let report = CoverageReport::from_analysis(&analysis);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
