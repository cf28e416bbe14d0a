//! # Unified Application Configuration
//!
//! This module consolidates the analyzer's tuning constants and the observability
//! settings into one configuration object. The analyzer defaults reproduce the
//! fixed detection behavior; changing them changes which shapes and pixels are
//! detected.

use crate::errors::{AppError, AppResult};
use crate::observability_config::ObservabilityConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Tuning constants for the seasoning analyzer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Grayscale intensity at or above which a pixel is background
    pub foreground_threshold: u8,
    /// Polygon approximation tolerance as a fraction of the contour perimeter
    pub approximation_ratio: f64,
    /// Lowest seasoned hue, on the 8-bit [0, 180) hue scale
    pub hue_min: u8,
    /// Highest seasoned hue, on the 8-bit [0, 180) hue scale
    pub hue_max: u8,
    /// Minimum saturation for a seasoned pixel
    pub saturation_min: u8,
    /// Minimum value (brightness) for a seasoned pixel
    pub value_min: u8,
    /// Width in pixels of the triangle outline in the visualization
    pub outline_thickness: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            foreground_threshold: 240,
            approximation_ratio: 0.03,
            hue_min: 0,
            hue_max: 25,
            saturation_min: 50,
            value_min: 50,
            outline_thickness: 2,
        }
    }
}

impl AnalyzerConfig {
    /// Upper bound (exclusive) of the 8-bit hue scale
    pub const HUE_SCALE: u8 = 180;

    /// Maximum supported outline width
    pub const MAX_OUTLINE_THICKNESS: u32 = 16;

    /// Load analyzer settings from environment variables, falling back to defaults
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            foreground_threshold: env_or("FOREGROUND_THRESHOLD", defaults.foreground_threshold)?,
            approximation_ratio: env_or("APPROXIMATION_RATIO", defaults.approximation_ratio)?,
            hue_min: env_or("SEASONED_HUE_MIN", defaults.hue_min)?,
            hue_max: env_or("SEASONED_HUE_MAX", defaults.hue_max)?,
            saturation_min: env_or("SEASONED_SATURATION_MIN", defaults.saturation_min)?,
            value_min: env_or("SEASONED_VALUE_MIN", defaults.value_min)?,
            outline_thickness: env_or("OUTLINE_THICKNESS", defaults.outline_thickness)?,
        })
    }

    /// Validate analyzer configuration
    pub fn validate(&self) -> AppResult<()> {
        if !self.approximation_ratio.is_finite()
            || self.approximation_ratio <= 0.0
            || self.approximation_ratio >= 1.0
        {
            return Err(AppError::Config(format!(
                "Approximation ratio {} must be between 0 and 1 (exclusive)",
                self.approximation_ratio
            )));
        }

        if self.hue_max >= Self::HUE_SCALE {
            return Err(AppError::Config(format!(
                "Seasoned hue max {} must be below {}",
                self.hue_max,
                Self::HUE_SCALE
            )));
        }

        if self.hue_min > self.hue_max {
            return Err(AppError::Config(format!(
                "Seasoned hue min {} cannot be greater than hue max {}",
                self.hue_min, self.hue_max
            )));
        }

        if self.outline_thickness == 0 || self.outline_thickness > Self::MAX_OUTLINE_THICKNESS {
            return Err(AppError::Config(format!(
                "Outline thickness {} must be between 1 and {}",
                self.outline_thickness,
                Self::MAX_OUTLINE_THICKNESS
            )));
        }

        Ok(())
    }
}

/// Parse an environment variable, using `default` when it is unset
fn env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a valid number, got '{}'", key, raw))),
        Err(_) => Ok(default),
    }
}

/// Unified application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Analyzer tuning constants
    pub analyzer: AnalyzerConfig,
    /// Observability configuration
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            analyzer: AnalyzerConfig::from_env()?,
            observability: ObservabilityConfig::from_env(),
        })
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> AppResult<()> {
        self.analyzer.validate()?;
        self.observability.validate()?;
        Ok(())
    }

    /// Get a summary of the current configuration for logging
    pub fn summary(&self) -> String {
        format!(
            "Configuration: threshold={}, approximation_ratio={}, hue={}..={}, saturation_min={}, value_min={}, environment={}, metrics_enabled={}",
            self.analyzer.foreground_threshold,
            self.analyzer.approximation_ratio,
            self.analyzer.hue_min,
            self.analyzer.hue_max,
            self.analyzer.saturation_min,
            self.analyzer.value_min,
            self.observability.environment,
            self.observability.enable_metrics
        )
    }
}
