use serde::{Deserialize, Serialize};

use crate::models::{AxisRange, Point};

/// Summary of a point set against a visible window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// Points with a missing or non-finite coordinate.
    pub non_finite: usize,
    /// Points inside the window.
    pub visible: usize,
    pub min_longitude: Option<f64>,
    pub max_longitude: Option<f64>,
    pub min_latitude: Option<f64>,
    pub max_latitude: Option<f64>,
}

/// Count and bound the points; extents consider finite points only.
pub fn summarize(points: &[Point], x_range: AxisRange, y_range: AxisRange) -> Summary {
    let mut s = Summary {
        count: points.len(),
        non_finite: 0,
        visible: 0,
        min_longitude: None,
        max_longitude: None,
        min_latitude: None,
        max_latitude: None,
    };
    for p in points {
        if !p.is_finite() {
            s.non_finite += 1;
            continue;
        }
        if x_range.contains(p.longitude) && y_range.contains(p.latitude) {
            s.visible += 1;
        }
        s.min_longitude = Some(s.min_longitude.map_or(p.longitude, |v| v.min(p.longitude)));
        s.max_longitude = Some(s.max_longitude.map_or(p.longitude, |v| v.max(p.longitude)));
        s.min_latitude = Some(s.min_latitude.map_or(p.latitude, |v| v.min(p.latitude)));
        s.max_latitude = Some(s.max_latitude.map_or(p.latitude, |v| v.max(p.latitude)));
    }
    s
}
