//! Utility functions for visualization: colors, marker sizing, autoscaling.

use plotters::style::RGBColor;

use crate::error::{Error, Result};
use crate::models::{AxisRange, Point};

/// Pixels per inch assumed when turning point-based marker sizes into pixels.
pub const DPI: f64 = 100.0;

/// Fraction of the data span added on each side when autoscaling.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

/// Matplotlib's single-letter base colors.
const BASE_COLORS: [(char, RGBColor); 8] = [
    ('b', RGBColor(0, 0, 255)),
    ('g', RGBColor(0, 128, 0)),
    ('r', RGBColor(255, 0, 0)),
    ('c', RGBColor(0, 191, 191)),
    ('m', RGBColor(191, 0, 191)),
    ('y', RGBColor(191, 191, 0)),
    ('k', RGBColor(0, 0, 0)),
    ('w', RGBColor(255, 255, 255)),
];

/// Resolve a color spec: one base letter (`b`), a name (`blue`) or `#rrggbb`.
pub fn parse_color(spec: &str) -> Result<RGBColor> {
    let s = spec.trim().to_ascii_lowercase();
    let bad = || Error::InvalidConfig(format!("unrecognized color {spec:?}"));

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            return Err(bad());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        return Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?));
    }

    let letter = match s.as_str() {
        "blue" => "b",
        "green" => "g",
        "red" => "r",
        "cyan" => "c",
        "magenta" => "m",
        "yellow" => "y",
        "black" => "k",
        "white" => "w",
        other => other,
    };
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => BASE_COLORS
            .iter()
            .find(|(k, _)| *k == c)
            .map(|(_, rgb)| *rgb)
            .ok_or_else(bad),
        _ => Err(bad()),
    }
}

/// Marker radius in pixels for an area given in points² (diameter = √size pt).
pub fn marker_radius_px(size: f64) -> u32 {
    let radius = size.max(0.0).sqrt() / 2.0 * DPI / 72.0;
    (radius.round() as u32).max(1)
}

/// Data extent of the finite points, padded like matplotlib's default view.
///
/// Falls back to `[0, 1]` on an axis with no finite data.
pub fn autoscale(points: &[Point]) -> (AxisRange, AxisRange) {
    let finite: Vec<&Point> = points.iter().filter(|p| p.is_finite()).collect();
    let axis = |vals: Vec<f64>| {
        if vals.is_empty() {
            return AxisRange { min: 0.0, max: 1.0 };
        }
        let (mut min, mut max) = (
            vals.iter().cloned().fold(f64::INFINITY, f64::min),
            vals.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        );
        if (max - min).abs() < f64::EPSILON {
            min -= 1.0;
            max += 1.0;
        }
        let pad = (max - min) * AUTOSCALE_MARGIN;
        AxisRange {
            min: min - pad,
            max: max + pad,
        }
    };
    (
        axis(finite.iter().map(|p| p.longitude).collect()),
        axis(finite.iter().map(|p| p.latitude).collect()),
    )
}

/// Tick label: whole degrees without decimals, otherwise up to two places.
pub fn degree_label(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
