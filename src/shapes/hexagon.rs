//! Hexagon tiles in a brick layout (odd columns sit half a tile lower)
//!
//! ```text
//!       x1  x2    x3  x4
//!   y1      ______
//!          /      \
//!   y2    /        \
//!         \        /
//!   y3     \______/
//! ```

use glam::DVec2;

use super::defaults::{HEXAGON_HALO_SLANT, HEXAGON_X_DIVISOR, HEXAGON_Y_DIVISOR};
use super::{Padding, TileShape, TileShapeKind, halo_disabled, slant_padding, tile_padding};
use crate::axis::AxisFrame;
use crate::errors::TilemapError;
use crate::label::{DataLabelOptions, align_to_anchor};
use crate::path::Path;
use crate::series::{GridPoint, SeriesConfig, ShapeArgs, TileEdges, TileGeometry};
use crate::types::{Rounding, round_half_up};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexagonShape;

impl TileShape for HexagonShape {
    fn kind(&self) -> TileShapeKind {
        TileShapeKind::Hexagon
    }

    fn series_padding(&self, config: &SeriesConfig) -> Option<Padding> {
        Some(tile_padding(config, HEXAGON_X_DIVISOR, HEXAGON_Y_DIVISOR))
    }

    fn halo_path(&self, point: &GridPoint, size: f64) -> Path {
        if halo_disabled(size) {
            return Path::new();
        }
        let Some(&TileEdges::Hexagon { x1, x2, x3, x4, y1, y2, y3 }) = point.tile_edges() else {
            return Path::new();
        };

        Path::new()
            .m(x2 - size, y1 + size)
            .l(x3 + size, y1 + size)
            .l(x4 + size * HEXAGON_HALO_SLANT, y2)
            .l(x3 + size, y3 - size)
            .l(x2 - size, y3 - size)
            .l(x1 - size * HEXAGON_HALO_SLANT, y2)
            .z()
    }

    fn layout(
        &self,
        frame: &AxisFrame<'_>,
        config: &SeriesConfig,
        points: &[GridPoint],
    ) -> Result<Vec<TileGeometry>, TilemapError> {
        let x_pad = config.colsize() / HEXAGON_X_DIVISOR;
        let y_pad = config.rowsize() / HEXAGON_Y_DIVISOR;

        // Shared by every odd column once known
        let mut y_shift = 0.0;
        let mut tiles = Vec::with_capacity(points.len());

        for point in points {
            let (x, y) = (point.x as f64, point.y as f64);

            let mut x1 = frame.x_edge(x - x_pad * 2.0, Rounding::Floor)?;
            let mut x2 = frame.x_edge(x - x_pad, Rounding::Floor)?;
            let mut x3 = frame.x_edge(x + x_pad, Rounding::Floor)?;
            let mut x4 = frame.x_edge(x + x_pad * 2.0, Rounding::Floor)?;
            let mut y1 = frame.y_edge(y - y_pad, Rounding::Floor)?;
            let mut y2 = frame.y_edge(y, Rounding::Floor)?;
            let mut y3 = frame.y_edge(y + y_pad, Rounding::Floor)?;

            let padding = config.padding_for(point);
            let mid_padding = slant_padding(padding, x2 - x1, y3 - y2);
            let x_mid_padding = frame.x_signed(mid_padding);
            let x_padding = frame.x_signed(padding);
            let y_padding = frame.y_signed(padding);

            if point.is_odd_column() {
                if y_shift == 0.0 {
                    y_shift = frame.y_signed(round_half_up((y3 - y1).abs() / 2.0));
                }
                y1 += y_shift;
                y2 += y_shift;
                y3 += y_shift;
            }

            let plot_x = (x2 + x3) / 2.0;
            let plot_y = y2;

            x1 += x_mid_padding + x_padding;
            x2 += x_padding;
            x3 -= x_padding;
            x4 -= x_mid_padding + x_padding;
            y1 -= y_padding;
            y3 += y_padding;

            let path = Path::new()
                .m(x2, y1)
                .l(x3, y1)
                .l(x4, y2)
                .l(x3, y3)
                .l(x2, y3)
                .l(x1, y2)
                .z();

            tiles.push(
                TileGeometry::new(plot_x, plot_y, ShapeArgs::Path(path))
                    .with_edges(TileEdges::Hexagon { x1, x2, x3, x4, y1, y2, y3 }),
            );
        }

        Ok(tiles)
    }

    fn align_data_label(&self, point: &GridPoint, label_size: DVec2, options: &DataLabelOptions) -> Option<DVec2> {
        point
            .geometry()
            .map(|geometry| align_to_anchor(geometry.anchor(), label_size, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::LinearAxis;
    use glam::dvec2;

    fn layout(points: &[GridPoint], config: SeriesConfig, y_reversed: bool) -> Vec<TileGeometry> {
        let x = LinearAxis::horizontal(0.0, 10.0, 500.0).unwrap();
        let y = LinearAxis::vertical(0.0, 10.0, 400.0).unwrap().reversed(y_reversed);
        let frame = AxisFrame::new(&x, &y).unwrap();
        HexagonShape.layout(&frame, &config, points).unwrap()
    }

    fn edges(tile: &TileGeometry) -> (f64, f64, f64, f64, f64, f64, f64) {
        match tile.edges {
            Some(TileEdges::Hexagon { x1, x2, x3, x4, y1, y2, y3 }) => (x1, x2, x3, x4, y1, y2, y3),
            other => panic!("expected hexagon edges, got {:?}", other),
        }
    }

    #[test]
    fn even_column_edges() {
        let tiles = layout(&[GridPoint::new(2, 3)], SeriesConfig::default(), false);
        assert_eq!(edges(&tiles[0]), (66.0, 83.0, 116.0, 133.0, 300.0, 280.0, 260.0));
        assert_eq!(tiles[0].anchor(), dvec2(99.5, 280.0));
        assert_eq!(
            tiles[0].shape,
            ShapeArgs::Path(Path::new().m(83.0, 300.0).l(116.0, 300.0).l(133.0, 280.0).l(116.0, 260.0).l(83.0, 260.0).l(66.0, 280.0).z())
        );
    }

    #[test]
    fn odd_column_shifts_by_half_height() {
        let tiles = layout(&[GridPoint::new(2, 3), GridPoint::new(3, 3)], SeriesConfig::default(), false);
        let (_, _, _, _, y1, _, y3) = edges(&tiles[0]);
        assert_eq!(tiles[1].plot_y - tiles[0].plot_y, (y3 - y1).abs() / 2.0);
        assert_eq!(edges(&tiles[1]), (116.0, 133.0, 166.0, 183.0, 320.0, 300.0, 280.0));
    }

    #[test]
    fn odd_column_shift_flips_on_reversed_axis() {
        let tiles = layout(&[GridPoint::new(2, 3), GridPoint::new(3, 3)], SeriesConfig::default(), true);
        assert_eq!(tiles[0].plot_y, 120.0);
        assert_eq!(tiles[1].plot_y, 100.0);
    }

    #[test]
    fn padding_keeps_slanted_edge_angle() {
        let plain = layout(&[GridPoint::new(2, 3)], SeriesConfig::default(), false);
        let padded = layout(&[GridPoint::new(2, 3).with_padding(2.0).unwrap()], SeriesConfig::default(), false);

        let slope = |t: &TileGeometry| {
            let (x1, x2, _, _, y1, y2, _) = edges(t);
            (x2 - x1) / (y1 - y2)
        };
        assert!((slope(&plain[0]) - slope(&padded[0])).abs() < 1e-9);
        assert_eq!(padded[0].anchor(), plain[0].anchor());

        let (x1, x2, x3, x4, y1, y2, y3) = edges(&padded[0]);
        assert!((x1 - 69.7).abs() < 1e-9);
        assert!((x4 - 129.3).abs() < 1e-9);
        assert_eq!((x2, x3, y1, y2, y3), (85.0, 114.0, 298.0, 280.0, 262.0));
    }

    #[test]
    fn halo_grows_outward() {
        let mut point = GridPoint::new(2, 3);
        point.set_geometry(layout(&[point.clone()], SeriesConfig::default(), false).remove(0));

        let halo = HexagonShape.halo_path(&point, 4.0);
        assert_eq!(halo.to_string(), "M79,304L120,304L139,280L120,256L79,256L60,280Z");
        assert!(HexagonShape.halo_path(&point, 0.0).is_empty());
    }

    #[test]
    fn halo_needs_hexagon_edges() {
        assert!(HexagonShape.halo_path(&GridPoint::new(0, 0), 5.0).is_empty());
    }
}
