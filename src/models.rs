use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One (longitude, latitude) pair taken from a dataset record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub longitude: f64,
    pub latitude: f64,
}

impl Point {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Both coordinates are finite numbers (empty cells load as `NaN`).
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}

/// Closed interval `[min, max]` used for one axis of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Build a range, rejecting empty, inverted or non-finite bounds.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "axis bounds must be finite, got {}:{}",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(Error::InvalidConfig(format!(
                "axis minimum must be below maximum, got {}:{}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl std::str::FromStr for AxisRange {
    type Err = Error;

    /// Parse `MIN:MAX`, e.g. `-126:-66`.
    fn from_str(s: &str) -> Result<Self> {
        let (a, b) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidConfig(format!("expected MIN:MAX, got {s:?}")))?;
        let parse = |t: &str| {
            t.trim()
                .parse::<f64>()
                .map_err(|_| Error::InvalidConfig(format!("not a number: {t:?}")))
        };
        AxisRange::new(parse(a)?, parse(b)?)
    }
}
