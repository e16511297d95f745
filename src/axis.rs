//! Axis coordinate transforms.
//!
//! The charting host owns its axes; tile layout only needs to map a grid-unit
//! value to a pixel, know the axis pixel length, and know whether the axis is
//! reversed. [`LinearAxis`] is a ready-made implementation for hosts (and
//! tests) that do not bring their own.

use std::fmt;

use crate::errors::TilemapError;
use crate::types::{NumericError, Rounding, try_finite, try_non_negative};

/// Coordinate transform provided by the charting host.
pub trait Axis {
    /// Map a grid-unit value to a pixel coordinate. Direction and reversal
    /// are already applied.
    fn to_pixel(&self, value: f64) -> f64;

    /// Pixel length of the axis.
    fn pixel_len(&self) -> f64;

    /// Whether the axis runs against its natural direction.
    fn is_reversed(&self) -> bool;
}

impl<A: Axis + ?Sized> Axis for &A {
    fn to_pixel(&self, value: f64) -> f64 {
        (**self).to_pixel(value)
    }

    fn pixel_len(&self) -> f64 {
        (**self).pixel_len()
    }

    fn is_reversed(&self) -> bool {
        (**self).is_reversed()
    }
}

/// Which of a series' two axes a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisRole {
    X,
    Y,
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRole::X => write!(f, "x"),
            AxisRole::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Pixels grow with the value (left to right).
    Horizontal,
    /// Pixels shrink as the value grows, like a chart's value axis.
    Vertical,
}

/// Linear mapping from a value range onto `[0, len]` pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAxis {
    min: f64,
    max: f64,
    len: f64,
    orientation: Orientation,
    reversed: bool,
}

impl LinearAxis {
    /// Create an axis, rejecting non-finite bounds, an empty range and a
    /// negative pixel length.
    pub fn try_new(
        min: f64,
        max: f64,
        len: f64,
        orientation: Orientation,
    ) -> Result<Self, NumericError> {
        let min = try_finite(min)?;
        let max = try_finite(max)?;
        if max == min {
            return Err(NumericError::Zero);
        }
        let len = try_non_negative(len)?;
        Ok(LinearAxis {
            min,
            max,
            len,
            orientation,
            reversed: false,
        })
    }

    pub fn horizontal(min: f64, max: f64, len: f64) -> Result<Self, NumericError> {
        Self::try_new(min, max, len, Orientation::Horizontal)
    }

    pub fn vertical(min: f64, max: f64, len: f64) -> Result<Self, NumericError> {
        Self::try_new(min, max, len, Orientation::Vertical)
    }

    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Axis for LinearAxis {
    fn to_pixel(&self, value: f64) -> f64 {
        let pos = (value - self.min) / (self.max - self.min) * self.len;
        let flip = self.reversed != (self.orientation == Orientation::Vertical);
        if flip { self.len - pos } else { pos }
    }

    fn pixel_len(&self) -> f64 {
        self.len
    }

    fn is_reversed(&self) -> bool {
        self.reversed
    }
}

/// The x/y axis pair of one translate pass, validated up front.
///
/// Every edge a tile shape computes goes through [`AxisFrame::x_edge`] or
/// [`AxisFrame::y_edge`]: mapped, snapped to a whole pixel, then clamped to
/// `[-len, 2 * len]` so far off-screen data cannot produce runaway geometry.
#[derive(Clone, Copy)]
pub struct AxisFrame<'a> {
    x: &'a dyn Axis,
    y: &'a dyn Axis,
    /// Pixel lengths as validated when the frame was built
    x_len: f64,
    y_len: f64,
}

impl<'a> AxisFrame<'a> {
    pub fn new(x: &'a dyn Axis, y: &'a dyn Axis) -> Result<Self, TilemapError> {
        let x_len = try_non_negative(x.pixel_len())
            .map_err(|source| TilemapError::InvalidAxis { axis: AxisRole::X, source })?;
        let y_len = try_non_negative(y.pixel_len())
            .map_err(|source| TilemapError::InvalidAxis { axis: AxisRole::Y, source })?;
        Ok(AxisFrame { x, y, x_len, y_len })
    }

    pub fn x_edge(&self, value: f64, rounding: Rounding) -> Result<f64, TilemapError> {
        edge(self.x, AxisRole::X, self.x_len, value, rounding)
    }

    pub fn y_edge(&self, value: f64, rounding: Rounding) -> Result<f64, TilemapError> {
        edge(self.y, AxisRole::Y, self.y_len, value, rounding)
    }

    pub fn x_reversed(&self) -> bool {
        self.x.is_reversed()
    }

    pub fn y_reversed(&self) -> bool {
        self.y.is_reversed()
    }

    /// `-value` on a reversed x axis, `value` otherwise.
    pub fn x_signed(&self, value: f64) -> f64 {
        if self.x_reversed() { -value } else { value }
    }

    /// `-value` on a reversed y axis, `value` otherwise.
    pub fn y_signed(&self, value: f64) -> f64 {
        if self.y_reversed() { -value } else { value }
    }
}

fn edge(axis: &dyn Axis, role: AxisRole, len: f64, value: f64, rounding: Rounding) -> Result<f64, TilemapError> {
    let raw = axis.to_pixel(value);
    if raw.is_nan() {
        return Err(TilemapError::NonFiniteTransform { axis: role, value });
    }
    Ok(rounding.apply(raw).clamp(-len, 2.0 * len))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NanAxis;

    impl Axis for NanAxis {
        fn to_pixel(&self, _value: f64) -> f64 {
            f64::NAN
        }
        fn pixel_len(&self) -> f64 {
            100.0
        }
        fn is_reversed(&self) -> bool {
            false
        }
    }

    #[test]
    fn horizontal_axis_grows_left_to_right() {
        let axis = LinearAxis::horizontal(0.0, 10.0, 500.0).unwrap();
        assert_eq!(axis.to_pixel(0.0), 0.0);
        assert_eq!(axis.to_pixel(2.0), 100.0);
        assert_eq!(axis.reversed(true).to_pixel(2.0), 400.0);
    }

    #[test]
    fn vertical_axis_grows_upward() {
        let axis = LinearAxis::vertical(0.0, 10.0, 400.0).unwrap();
        assert_eq!(axis.to_pixel(0.0), 400.0);
        assert_eq!(axis.to_pixel(3.0), 280.0);
        assert_eq!(axis.reversed(true).to_pixel(3.0), 120.0);
    }

    #[test]
    fn linear_axis_rejects_bad_input() {
        assert_eq!(LinearAxis::horizontal(1.0, 1.0, 10.0), Err(NumericError::Zero));
        assert_eq!(LinearAxis::horizontal(0.0, 1.0, -10.0), Err(NumericError::Negative));
        assert_eq!(LinearAxis::horizontal(f64::NAN, 1.0, 10.0), Err(NumericError::NaN));
    }

    #[test]
    fn edges_clamp_to_axis_bounds() {
        let x = LinearAxis::horizontal(0.0, 10.0, 500.0).unwrap();
        let y = LinearAxis::vertical(0.0, 10.0, 400.0).unwrap();
        let frame = AxisFrame::new(&x, &y).unwrap();

        assert_eq!(frame.x_edge(100.0, Rounding::Floor).unwrap(), 1000.0);
        assert_eq!(frame.x_edge(-100.0, Rounding::Floor).unwrap(), -500.0);
        assert_eq!(frame.y_edge(100.0, Rounding::HalfUp).unwrap(), -400.0);
        assert_eq!(frame.x_edge(f64::INFINITY, Rounding::Floor).unwrap(), 1000.0);
    }

    #[test]
    fn nan_transform_is_an_error() {
        let y = LinearAxis::vertical(0.0, 10.0, 400.0).unwrap();
        let frame = AxisFrame::new(&NanAxis, &y).unwrap();
        let err = frame.x_edge(1.0, Rounding::Floor).unwrap_err();
        assert_eq!(err, TilemapError::NonFiniteTransform { axis: AxisRole::X, value: 1.0 });
    }

    #[test]
    fn frame_rejects_negative_length() {
        struct Short;
        impl Axis for Short {
            fn to_pixel(&self, value: f64) -> f64 {
                value
            }
            fn pixel_len(&self) -> f64 {
                -1.0
            }
            fn is_reversed(&self) -> bool {
                false
            }
        }
        let y = LinearAxis::vertical(0.0, 10.0, 400.0).unwrap();
        assert!(matches!(
            AxisFrame::new(&y, &Short),
            Err(TilemapError::InvalidAxis { axis: AxisRole::Y, source: NumericError::Negative })
        ));
    }

    /// Reports a valid length once, then NaN
    struct FlakyLen {
        calls: std::cell::Cell<u32>,
    }

    impl Axis for FlakyLen {
        fn to_pixel(&self, value: f64) -> f64 {
            value * 10.0
        }
        fn pixel_len(&self) -> f64 {
            let calls = self.calls.get();
            self.calls.set(calls + 1);
            if calls == 0 { 100.0 } else { f64::NAN }
        }
        fn is_reversed(&self) -> bool {
            false
        }
    }

    #[test]
    fn edges_clamp_to_the_validated_length() {
        let x = FlakyLen { calls: std::cell::Cell::new(0) };
        let y = LinearAxis::vertical(0.0, 10.0, 400.0).unwrap();
        let frame = AxisFrame::new(&x, &y).unwrap();

        assert_eq!(frame.x_edge(5.0, Rounding::Floor).unwrap(), 50.0);
        assert_eq!(frame.x_edge(50.0, Rounding::Floor).unwrap(), 200.0);
        assert_eq!(x.calls.get(), 1);
    }
}
