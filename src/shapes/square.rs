//! Square tiles, laid out as plain heatmap cells

use glam::{DVec2, dvec2};

use super::{Padding, TileShape, TileShapeKind, halo_disabled};
use crate::axis::AxisFrame;
use crate::errors::TilemapError;
use crate::label::{DataLabelOptions, align_in_bounds};
use crate::path::Path;
use crate::series::{GridPoint, SeriesConfig, ShapeArgs, TileGeometry};
use crate::types::Rounding;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareShape;

/// Order two pixel edges and pull them together by `padding` on each side.
/// Returns `(start, length)`; the length never goes negative.
fn padded_span(a: f64, b: f64, padding: f64) -> (f64, f64) {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let (start, end) = (start + padding, end - padding);
    (start, (end - start).max(0.0))
}

impl TileShape for SquareShape {
    fn kind(&self) -> TileShapeKind {
        TileShapeKind::Square
    }

    fn series_padding(&self, _config: &SeriesConfig) -> Option<Padding> {
        None
    }

    fn halo_path(&self, point: &GridPoint, size: f64) -> Path {
        if halo_disabled(size) {
            return Path::new();
        }
        let Some(&ShapeArgs::Rect { x, y, width, height }) = point.shape_args() else {
            return Path::new();
        };

        Path::new()
            .m(x - size, y - size)
            .l(x - size, y + height + size)
            .l(x + width + size, y + height + size)
            .l(x + width + size, y - size)
            .z()
    }

    fn layout(
        &self,
        frame: &AxisFrame<'_>,
        config: &SeriesConfig,
        points: &[GridPoint],
    ) -> Result<Vec<TileGeometry>, TilemapError> {
        let half_col = config.colsize() / 2.0;
        let half_row = config.rowsize() / 2.0;

        points
            .iter()
            .map(|point| -> Result<TileGeometry, TilemapError> {
                let (x, y) = (point.x as f64, point.y as f64);
                let padding = config.padding_for(point);

                let (left, width) = padded_span(
                    frame.x_edge(x - half_col, Rounding::HalfUp)?,
                    frame.x_edge(x + half_col, Rounding::HalfUp)?,
                    padding,
                );
                let (top, height) = padded_span(
                    frame.y_edge(y - half_row, Rounding::HalfUp)?,
                    frame.y_edge(y + half_row, Rounding::HalfUp)?,
                    padding,
                );

                let center = dvec2(left + width / 2.0, top + height / 2.0);
                Ok(TileGeometry::new(
                    center.x,
                    center.y,
                    ShapeArgs::Rect {
                        x: left,
                        y: top,
                        width,
                        height,
                    },
                ))
            })
            .collect()
    }

    fn align_data_label(&self, point: &GridPoint, label_size: DVec2, options: &DataLabelOptions) -> Option<DVec2> {
        point
            .bounds()
            .map(|cell| align_in_bounds(&cell, label_size, options))
    }
}
