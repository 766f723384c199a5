//! Session settings, loadable from a JSON file.
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use hoverscan_ocr::OcrConfig;
use serde::{Deserialize, Serialize};

use crate::geometry::HeightScaling;

/// Configuration for a hover session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Side of the square read around the pointer, in display pixels.
    pub box_size: f64,
    /// Minimum spacing between recognition starts.
    pub throttle_ms: u64,
    pub height_scaling: HeightScaling,
    pub ocr: OcrConfig,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            box_size: 40.0,
            throttle_ms: 250,
            height_scaling: HeightScaling::Vertical,
            ocr: OcrConfig::digits_only(),
        }
    }
}

impl HoverConfig {
    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }
}
