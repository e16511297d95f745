//! Data label alignment.
//!
//! A label is aligned against a box: a zero-size box at the point anchor for
//! marker-like tiles, or the tile rectangle for square cells. The alignment
//! factors are 0 / 0.5 / 1 for start / centre / end, and the result is snapped
//! to whole pixels.

use glam::{DVec2, dvec2};

use crate::types::{Bounds, round_half_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    fn factor(self) -> f64 {
        match self {
            Align::Left => 0.0,
            Align::Center => 0.5,
            Align::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl VerticalAlign {
    fn factor(self) -> f64 {
        match self {
            VerticalAlign::Top => 0.0,
            VerticalAlign::Middle => 0.5,
            VerticalAlign::Bottom => 1.0,
        }
    }
}

/// Label placement options; defaults centre the label on its tile
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataLabelOptions {
    pub align: Align,
    pub vertical_align: VerticalAlign,
    /// Extra horizontal offset in pixels.
    pub x: f64,
    /// Extra vertical offset in pixels.
    pub y: f64,
}

impl DataLabelOptions {
    pub fn new(align: Align, vertical_align: VerticalAlign) -> Self {
        DataLabelOptions {
            align,
            vertical_align,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// Top-left corner of a `label_size` label aligned inside `target`.
pub fn align_in_bounds(target: &Bounds, label_size: DVec2, options: &DataLabelOptions) -> DVec2 {
    let x = target.min.x + options.x + (target.width() - label_size.x) * options.align.factor();
    let y = target.min.y + options.y + (target.height() - label_size.y) * options.vertical_align.factor();
    dvec2(round_half_up(x), round_half_up(y))
}

/// Top-left corner of a label aligned against the single point `anchor`.
pub fn align_to_anchor(anchor: DVec2, label_size: DVec2, options: &DataLabelOptions) -> DVec2 {
    let target = Bounds {
        min: anchor,
        max: anchor,
    };
    align_in_bounds(&target, label_size, options)
}
