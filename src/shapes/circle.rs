//! Circle tiles packed in offset columns
//!
//! Odd columns drop by a full row radius, so each circle touches its
//! diagonal neighbours:
//!
//! ```text
//!        (2)
//!                  (3)
//!                   |  y_radius_px
//!   (1) ------------'
//!         colsize_px
//! ```
//!
//! The distance from (1) to (3) is the hypotenuse of `colsize_px` and
//! `y_radius_px`, so half of it is the largest radius that avoids overlap. If
//! (1) and (2) are closer than that, `y_radius_px` wins instead.

use std::ops::Range;

use glam::{DVec2, dvec2};

use super::defaults::{CIRCLE_X_DIVISOR, CIRCLE_Y_DIVISOR};
use super::{Padding, TileShape, TileShapeKind, halo_disabled, tile_padding};
use crate::axis::AxisFrame;
use crate::errors::TilemapError;
use crate::label::{DataLabelOptions, align_to_anchor};
use crate::path::Path;
use crate::series::{GridPoint, SeriesConfig, ShapeArgs, TileGeometry};
use crate::types::Rounding;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CircleShape;

/// Pixel measurements one radius is derived from
#[derive(Debug, Clone, Copy, PartialEq)]
struct RadiusMetrics {
    y_radius_px: f64,
    radius: f64,
}

impl RadiusMetrics {
    fn measure(
        frame: &AxisFrame<'_>,
        config: &SeriesConfig,
        point: &GridPoint,
        center: DVec2,
        padding: f64,
    ) -> Result<Self, TilemapError> {
        let (x, y) = (point.x as f64, point.y as f64);
        let colsize_px = (frame.x_edge(x + config.colsize(), Rounding::Floor)? - center.x).abs();
        let y_radius_px =
            (frame.y_edge(y + config.rowsize() / 2.0, Rounding::Floor)? - center.y).abs();
        let x_radius_px = ((colsize_px * colsize_px + y_radius_px * y_radius_px).sqrt() / 2.0).floor();
        let radius = colsize_px.min(x_radius_px).min(y_radius_px) - padding;

        crate::log::debug!(
            x = point.x,
            y = point.y,
            colsize_px = colsize_px,
            y_radius_px = y_radius_px,
            radius = radius,
            "circle radius"
        );
        Ok(RadiusMetrics { y_radius_px, radius })
    }
}

/// Split points into runs that share one radius.
///
/// A run starts at the first point, at every point with its own padding, and
/// at the point right after one, so a radius computed under an override is
/// never reused for a point without it.
fn radius_groups(points: &[GridPoint]) -> Vec<Range<usize>> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..points.len() {
        if points[i].point_padding().is_some() || points[i - 1].point_padding().is_some() {
            groups.push(start..i);
            start = i;
        }
    }
    if !points.is_empty() {
        groups.push(start..points.len());
    }
    groups
}

fn tile_center(frame: &AxisFrame<'_>, point: &GridPoint) -> Result<DVec2, TilemapError> {
    Ok(dvec2(
        frame.x_edge(point.x as f64, Rounding::HalfUp)?,
        frame.y_edge(point.y as f64, Rounding::HalfUp)?,
    ))
}

impl TileShape for CircleShape {
    fn kind(&self) -> TileShapeKind {
        TileShapeKind::Circle
    }

    fn series_padding(&self, config: &SeriesConfig) -> Option<Padding> {
        Some(tile_padding(config, CIRCLE_X_DIVISOR, CIRCLE_Y_DIVISOR))
    }

    /// Generic circular halo around the tile: `size` plus the tile radius.
    fn halo_path(&self, point: &GridPoint, size: f64) -> Path {
        let Some(geometry) = point.geometry() else {
            return Path::new();
        };
        if halo_disabled(size) {
            return Path::circle(dvec2(geometry.plot_x.floor(), geometry.plot_y), 0.0);
        }
        let radius = geometry.radius.unwrap_or(0.0);
        Path::circle(dvec2(geometry.plot_x.floor(), geometry.plot_y), size + radius)
    }

    fn layout(
        &self,
        frame: &AxisFrame<'_>,
        config: &SeriesConfig,
        points: &[GridPoint],
    ) -> Result<Vec<TileGeometry>, TilemapError> {
        let mut tiles = Vec::with_capacity(points.len());

        for group in radius_groups(points) {
            let mut metrics: Option<RadiusMetrics> = None;

            for point in &points[group] {
                let mut center = tile_center(frame, point)?;

                // A zero radius is never reused
                let current = match metrics {
                    Some(m) if m.radius != 0.0 => m,
                    _ => RadiusMetrics::measure(frame, config, point, center, config.padding_for(point))?,
                };
                metrics = Some(current);

                if point.is_odd_column() {
                    center.y += frame.y_signed(current.y_radius_px);
                }

                tiles.push(
                    TileGeometry::new(
                        center.x,
                        center.y,
                        ShapeArgs::Circle {
                            x: center.x,
                            y: center.y,
                            r: current.radius,
                        },
                    )
                    .with_radius(current.radius),
                );
            }
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

    fn layout(points: &[GridPoint], config: SeriesConfig) -> Vec<TileGeometry> {
        let x = LinearAxis::horizontal(0.0, 10.0, 500.0).unwrap();
        let y = LinearAxis::vertical(0.0, 10.0, 400.0).unwrap();
        let frame = AxisFrame::new(&x, &y).unwrap();
        CircleShape.layout(&frame, &config, points).unwrap()
    }

    fn padded(x: i64, y: i64, padding: f64) -> GridPoint {
        GridPoint::new(x, y).with_padding(padding).unwrap()
    }

    #[test]
    fn groups_split_around_overrides() {
        let points = [
            GridPoint::new(0, 0),
            GridPoint::new(1, 0),
            padded(2, 0, 3.0),
            GridPoint::new(3, 0),
            GridPoint::new(4, 0),
            padded(5, 0, 1.0),
            padded(6, 0, 1.0),
        ];
        assert_eq!(radius_groups(&points), vec![0..2, 2..3, 3..5, 5..6, 6..7]);
        assert!(radius_groups(&[]).is_empty());
    }

    #[test]
    fn radius_is_smallest_candidate() {
        // colsize_px = 50, y_radius_px = 20, x_radius_px = floor(sqrt(2900) / 2) = 26
        let tiles = layout(&[GridPoint::new(2, 3)], SeriesConfig::default());
        assert_eq!(tiles[0].radius, Some(20.0));
        assert_eq!(tiles[0].shape, ShapeArgs::Circle { x: 100.0, y: 280.0, r: 20.0 });
    }

    #[test]
    fn series_padding_shrinks_radius() {
        let tiles = layout(&[GridPoint::new(2, 3)], SeriesConfig::try_new(1.0, 1.0, 4.0).unwrap());
        assert_eq!(tiles[0].radius, Some(16.0));
    }

    #[test]
    fn odd_column_drops_by_row_radius() {
        let tiles = layout(&[GridPoint::new(2, 3), GridPoint::new(3, 3)], SeriesConfig::default());
        assert_eq!(tiles[1].plot_y - tiles[0].plot_y, 20.0);
    }

    #[test]
    fn override_does_not_leak_into_following_points() {
        let tiles = layout(
            &[
                GridPoint::new(0, 0),
                padded(1, 0, 5.0),
                padded(2, 0, 7.0),
                GridPoint::new(3, 0),
                GridPoint::new(4, 0),
            ],
            SeriesConfig::default(),
        );
        let radii: Vec<_> = tiles.iter().map(|t| t.radius.unwrap()).collect();
        assert_eq!(radii, vec![20.0, 15.0, 13.0, 20.0, 20.0]);
    }

    #[test]
    fn zero_radius_is_measured_again() {
        // Padding of exactly the natural radius gives zero
        let tiles = layout(
            &[GridPoint::new(0, 0), GridPoint::new(2, 0)],
            SeriesConfig::try_new(1.0, 1.0, 20.0).unwrap(),
        );
        assert_eq!(tiles[0].radius, Some(0.0));
        assert_eq!(tiles[1].radius, Some(0.0));
    }

    #[test]
    fn halo_adds_radius_only_for_non_zero_size() {
        let mut point = GridPoint::new(2, 3);
        point.set_geometry(layout(&[point.clone()], SeriesConfig::default()).remove(0));

        assert_eq!(
            CircleShape.halo_path(&point, 5.0).to_string(),
            "M75,280A25,25 0 1 1 125,280A25,25 0 1 1 75,280Z"
        );
        assert_eq!(
            CircleShape.halo_path(&point, 0.0).to_string(),
            "M100,280A0,0 0 1 1 100,280A0,0 0 1 1 100,280Z"
        );
        assert_eq!(
            CircleShape.halo_path(&point, f64::NAN).to_string(),
            "M100,280A0,0 0 1 1 100,280A0,0 0 1 1 100,280Z"
        );
    }
}
