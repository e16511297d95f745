//! Tile-grid layout for tilemap charts.
//!
//! Grid points `(column, row)` are turned into pixel geometry for one of four
//! tile topologies: hexagon, diamond, circle and square. The host charting
//! engine supplies the axes and owns rendering; this crate computes anchors,
//! shape descriptors, hover halos and label positions.
//!
//! ```
//! use tilemap::{GridPoint, LinearAxis, Series, SeriesConfig, TileShapeKind, translate_series};
//!
//! let x = LinearAxis::horizontal(0.0, 10.0, 500.0)?;
//! let y = LinearAxis::vertical(0.0, 10.0, 400.0)?;
//! let mut series = Series::new(SeriesConfig::default(), x, y)
//!     .with_points([GridPoint::new(2, 3), GridPoint::new(3, 3)]);
//!
//! translate_series(TileShapeKind::Hexagon, &mut series)?;
//! assert_eq!(series.points[0].plot_y(), Some(280.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod axis;
pub mod errors;
pub mod label;
mod log;
pub mod path;
pub mod series;
pub mod shapes;
pub mod types;

pub use axis::{Axis, AxisFrame, AxisRole, LinearAxis, Orientation};
pub use errors::TilemapError;
pub use label::{Align, DataLabelOptions, VerticalAlign};
pub use path::{Path, PathSegment};
pub use series::{GridPoint, Series, SeriesConfig, ShapeArgs, ShapeType, TileEdges, TileGeometry, TileSeries};
pub use shapes::{Padding, SHAPES, ShapeDefinition, ShapeRegistry, TileShape, TileShapeKind};
pub use types::{Bounds, NumericError, Rounding};

/// Translate `series` with the shared registry's definition for `kind`.
pub fn translate_series(kind: TileShapeKind, series: &mut dyn TileSeries) -> Result<(), TilemapError> {
    SHAPES[kind].translate(series)
}
