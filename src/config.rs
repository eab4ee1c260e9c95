//! Plot configuration: compiled-in defaults plus optional JSON overrides.
//!
//! With nothing overridden the plot uses blue markers at alpha `0.2`, size
//! `10` (points², matplotlib convention) over the continental US window
//! `x ∈ [-126, -66]`, `y ∈ [23, 50]`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::AxisRange;

/// Longitude envelope of the continental United States.
pub const CONUS_LONGITUDE: AxisRange = AxisRange {
    min: -126.0,
    max: -66.0,
};
/// Latitude envelope of the continental United States.
pub const CONUS_LATITUDE: AxisRange = AxisRange {
    min: 23.0,
    max: 50.0,
};

pub const DEFAULT_ALPHA: f64 = 0.2;
pub const DEFAULT_COLOR: &str = "b";
pub const DEFAULT_MARKER_SIZE: f64 = 10.0;
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
/// Largest canvas side accepted, in pixels.
pub const MAX_CANVAS_PX: u32 = 8192;

/// Input used when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "top_5000_locations.csv";

/// How each point is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerStyle {
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Single-letter code (`b`, `r`, …), a name (`blue`) or `#rrggbb`.
    pub color: String,
    /// Marker area in points².
    pub size: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            color: DEFAULT_COLOR.to_string(),
            size: DEFAULT_MARKER_SIZE,
        }
    }
}

/// Everything the pipeline needs to render and clip the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub marker: MarkerStyle,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            marker: MarkerStyle::default(),
            x_range: CONUS_LONGITUDE,
            y_range: CONUS_LATITUDE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl PlotConfig {
    /// Read a (possibly partial) JSON config; missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        let cfg: PlotConfig = serde_json::from_str(&text)
            .map_err(|e| Error::InvalidConfig(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let m = &self.marker;
        if !(0.0..=1.0).contains(&m.alpha) {
            return Err(Error::InvalidConfig(format!(
                "alpha must be within [0, 1], got {}",
                m.alpha
            )));
        }
        if !m.size.is_finite() || m.size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "marker size must be positive, got {}",
                m.size
            )));
        }
        crate::viz::util::parse_color(&m.color)?;
        self.x_range.validate()?;
        self.y_range.validate()?;
        if self.width < 100 || self.height < 100 {
            return Err(Error::InvalidConfig(format!(
                "canvas must be at least 100x100 px, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_CANVAS_PX || self.height > MAX_CANVAS_PX {
            return Err(Error::InvalidConfig(format!(
                "canvas must be at most {MAX_CANVAS_PX}x{MAX_CANVAS_PX} px, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
