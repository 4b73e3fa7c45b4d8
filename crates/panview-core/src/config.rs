use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MAX_ZOOM, DEFAULT_MIN_WINDOW_SIZE, DEFAULT_MIN_ZOOM, DEFAULT_PINCH_STEP,
    DEFAULT_PINCH_THRESHOLD, DEFAULT_WINDOW_SIZE, DEFAULT_ZOOM_IN_FACTOR,
    DEFAULT_ZOOM_OUT_FACTOR,
};
use crate::error::{PanViewError, Result};

/// Viewer settings, loadable from a TOML file. Missing sections and keys take
/// their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Multiplier for zoom-in (button and double-click).
    pub zoom_in_factor: f64,
    /// Multiplier for the zoom-out button.
    pub zoom_out_factor: f64,
    /// Pinch requests further than this from the current zoom are smoothed.
    pub pinch_threshold: f64,
    /// Step taken toward a smoothed pinch request.
    pub pinch_step: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
            pinch_threshold: DEFAULT_PINCH_THRESHOLD,
            pinch_step: DEFAULT_PINCH_STEP,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl ZoomConfig {
    /// Clamp a zoom factor into `[min_zoom, max_zoom]`.
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial size in logical pixels (width, height).
    pub size: [f32; 2],
    pub min_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Image Viewer".to_string(),
            size: DEFAULT_WINDOW_SIZE,
            min_size: DEFAULT_MIN_WINDOW_SIZE,
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ViewerConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let z = &self.zoom;
        let positive = [
            ("zoom_in_factor", z.zoom_in_factor),
            ("zoom_out_factor", z.zoom_out_factor),
            ("pinch_threshold", z.pinch_threshold),
            ("pinch_step", z.pinch_step),
            ("min_zoom", z.min_zoom),
            ("max_zoom", z.max_zoom),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PanViewError::InvalidConfig(format!(
                    "zoom.{name} must be a positive number, got {value}"
                )));
            }
        }
        if z.min_zoom > z.max_zoom {
            return Err(PanViewError::InvalidConfig(format!(
                "zoom.min_zoom ({}) exceeds zoom.max_zoom ({})",
                z.min_zoom, z.max_zoom
            )));
        }
        if !(z.min_zoom..=z.max_zoom).contains(&1.0) {
            return Err(PanViewError::InvalidConfig(
                "zoom range must include 1.0, the reset zoom".to_string(),
            ));
        }

        let w = &self.window;
        if w.size.iter().chain(&w.min_size).any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(PanViewError::InvalidConfig(
                "window sizes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
