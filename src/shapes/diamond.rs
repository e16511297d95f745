//! Diamond tiles, a full column wide on each side of the centre

use glam::DVec2;

use super::defaults::{DIAMOND_X_DIVISOR, DIAMOND_Y_DIVISOR};
use super::{Padding, TileShape, TileShapeKind, halo_disabled, slant_padding, tile_padding};
use crate::axis::AxisFrame;
use crate::errors::TilemapError;
use crate::label::{DataLabelOptions, align_to_anchor};
use crate::path::Path;
use crate::series::{GridPoint, SeriesConfig, ShapeArgs, TileEdges, TileGeometry};
use crate::types::Rounding;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiamondShape;

impl TileShape for DiamondShape {
    fn kind(&self) -> TileShapeKind {
        TileShapeKind::Diamond
    }

    fn series_padding(&self, config: &SeriesConfig) -> Option<Padding> {
        Some(tile_padding(config, DIAMOND_X_DIVISOR, DIAMOND_Y_DIVISOR))
    }

    fn halo_path(&self, point: &GridPoint, size: f64) -> Path {
        if halo_disabled(size) {
            return Path::new();
        }
        let Some(&TileEdges::Diamond { x1, x2, x3, y1, y2, y3 }) = point.tile_edges() else {
            return Path::new();
        };

        Path::new()
            .m(x2, y1 + size)
            .l(x3 + size, y2)
            .l(x2, y3 - size)
            .l(x1 - size, y2)
            .z()
    }

    fn layout(
        &self,
        frame: &AxisFrame<'_>,
        config: &SeriesConfig,
        points: &[GridPoint],
    ) -> Result<Vec<TileGeometry>, TilemapError> {
        let x_pad = config.colsize();
        let y_pad = config.rowsize() / DIAMOND_Y_DIVISOR;

        points
            .iter()
            .map(|point| -> Result<TileGeometry, TilemapError> {
                let (x, y) = (point.x as f64, point.y as f64);

                let mut x1 = frame.x_edge(x - x_pad, Rounding::HalfUp)?;
                let x2 = frame.x_edge(x, Rounding::HalfUp)?;
                let mut x3 = frame.x_edge(x + x_pad, Rounding::HalfUp)?;
                let mut y1 = frame.y_edge(y - y_pad, Rounding::HalfUp)?;
                let mut y2 = frame.y_edge(y, Rounding::HalfUp)?;
                let mut y3 = frame.y_edge(y + y_pad, Rounding::HalfUp)?;

                let padding = config.padding_for(point);
                let x_padding = frame.x_signed(slant_padding(padding, x2 - x1, y3 - y2));
                let y_padding = frame.y_signed(padding);

                if point.is_odd_column() {
                    let y_shift = frame.y_signed((y3 - y1).abs() / 2.0);
                    y1 += y_shift;
                    y2 += y_shift;
                    y3 += y_shift;
                }

                let (plot_x, plot_y) = (x2, y2);

                x1 += x_padding;
                x3 -= x_padding;
                y1 -= y_padding;
                y3 += y_padding;

                let path = Path::new().m(x2, y1).l(x3, y2).l(x2, y3).l(x1, y2).z();

                Ok(TileGeometry::new(plot_x, plot_y, ShapeArgs::Path(path))
                    .with_edges(TileEdges::Diamond { x1, x2, x3, y1, y2, y3 }))
            })
            .collect()
    }

    fn align_data_label(&self, point: &GridPoint, label_size: DVec2, options: &DataLabelOptions) -> Option<DVec2> {
        point
            .geometry()
            .map(|geometry| align_to_anchor(geometry.anchor(), label_size, options))
    }
}
