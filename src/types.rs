//! Numeric primitives shared by the layout passes.
//!
//! Pixel coordinates are plain `f64` once they leave an axis; what this module
//! adds is validation for user-provided numbers, the two rounding modes the
//! tile shapes use, and an axis-aligned bounding box for hit-testing.

use std::fmt;

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Accept any finite value.
#[inline]
pub fn try_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Accept a finite value that is zero or greater.
#[inline]
pub fn try_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = try_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Accept a finite value strictly greater than zero.
#[inline]
pub fn try_positive(val: f64) -> Result<f64, NumericError> {
    let val = try_non_negative(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else {
        Ok(val)
    }
}

/// How a raw axis position is snapped to a whole pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Round toward negative infinity.
    Floor,
    /// Round to nearest, halves toward positive infinity (`-2.5` becomes `-2`).
    HalfUp,
}

impl Rounding {
    #[inline]
    pub fn apply(self, val: f64) -> f64 {
        match self {
            Rounding::Floor => val.floor(),
            Rounding::HalfUp => round_half_up(val),
        }
    }
}

/// Round to nearest with ties going up, unlike `f64::round` which ties away from zero.
#[inline]
pub fn round_half_up(val: f64) -> f64 {
    (val + 0.5).floor()
}

/// Axis-aligned bounding box in pixel space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        Bounds {
            min: dvec2(f64::MAX, f64::MAX),
            max: dvec2(f64::MIN, f64::MIN),
        }
    }

    /// Create a box from its top-left corner and size.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Bounds {
            min: dvec2(x, y),
            max: dvec2(x + width, y + height),
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }

    /// Width over height, `None` for a box with no height.
    pub fn aspect_ratio(&self) -> Option<f64> {
        let h = self.height();
        if h == 0.0 || self.is_empty() {
            None
        } else {
            Some(self.width() / h)
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}
