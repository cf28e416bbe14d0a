//! # Observability
//!
//! Structured logging setup, tracing spans and analysis metrics.
//!
//! Metrics go through the `metrics` facade. The binary installs a Prometheus
//! recorder when metrics are enabled; library users install their own.

use anyhow::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;
use tracing_subscriber::prelude::*;

use crate::observability_config::ObservabilityConfig;

/// Target shared by the per-stage timing events
pub const STAGE_TARGET: &str = "seasoning_analysis";

/// Filter enabling the crate's modules and its stage events at the configured level
pub fn build_env_filter(config: &ObservabilityConfig) -> Result<tracing_subscriber::EnvFilter> {
    let level = config.log_level.to_lowercase();
    Ok(tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("seasoning_coverage={}", level).parse()?)
        .add_directive(format!("{}={}", STAGE_TARGET, level).parse()?))
}

/// Initialize structured logging with tracing and configuration
pub fn init_tracing_with_config(config: &ObservabilityConfig) -> Result<()> {
    let filter = build_env_filter(config)?;

    // Pretty for development, JSON otherwise
    if config.is_development() || config.log_format == "pretty" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true),
            )
            .try_init()?;
    }

    tracing::info!(
        environment = %config.environment,
        log_level = %config.log_level,
        log_format = %config.log_format,
        "Tracing initialized with structured logging"
    );
    Ok(())
}

/// Install the Prometheus recorder when metrics are enabled
pub fn init_metrics_with_config(config: &ObservabilityConfig) -> Result<Option<PrometheusHandle>> {
    if !config.enable_metrics {
        return Ok(None);
    }
    let handle = PrometheusBuilder::new().install_recorder()?;

    tracing::info!(metrics_enabled = %config.enable_metrics, "Metrics collection initialized");
    Ok(Some(handle))
}

/// Create a span for one analysis call
pub fn analysis_span(operation: &str) -> tracing::Span {
    tracing::info_span!("seasoning_analysis", operation = operation, component = "analyzer")
}

/// Record the outcome of one analysis call
pub fn record_analysis_metrics(
    triangle_found: bool,
    coverage: f64,
    duration: Duration,
    pixel_count: u64,
) {
    metrics::counter!(
        "seasoning_analyses_total",
        "result" => if triangle_found { "triangle" } else { "no_triangle" }
    )
    .increment(1);
    metrics::histogram!("seasoning_analysis_duration_seconds").record(duration.as_secs_f64());
    metrics::histogram!("seasoning_image_pixels").record(pixel_count as f64);
    if triangle_found {
        metrics::histogram!("seasoning_coverage_percent").record(coverage);
    }
}
