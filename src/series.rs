//! Series configuration, grid points and the per-point geometry record.

use glam::{DVec2, dvec2};

use crate::axis::Axis;
use crate::errors::TilemapError;
use crate::path::Path;
use crate::types::{Bounds, try_finite, try_positive};

pub const DEFAULT_COLSIZE: f64 = 1.0;
pub const DEFAULT_ROWSIZE: f64 = 1.0;
pub const DEFAULT_POINT_PADDING: f64 = 0.0;

/// Read-only per-series settings, in grid units (padding is in pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesConfig {
    colsize: f64,
    rowsize: f64,
    point_padding: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig {
            colsize: DEFAULT_COLSIZE,
            rowsize: DEFAULT_ROWSIZE,
            point_padding: DEFAULT_POINT_PADDING,
        }
    }
}

impl SeriesConfig {
    pub fn try_new(colsize: f64, rowsize: f64, point_padding: f64) -> Result<Self, TilemapError> {
        SeriesConfig::default()
            .with_colsize(colsize)?
            .with_rowsize(rowsize)?
            .with_point_padding(point_padding)
    }

    pub fn with_colsize(mut self, colsize: f64) -> Result<Self, TilemapError> {
        self.colsize = try_positive(colsize)
            .map_err(|source| TilemapError::InvalidOption { field: "colsize", source })?;
        Ok(self)
    }

    pub fn with_rowsize(mut self, rowsize: f64) -> Result<Self, TilemapError> {
        self.rowsize = try_positive(rowsize)
            .map_err(|source| TilemapError::InvalidOption { field: "rowsize", source })?;
        Ok(self)
    }

    /// Negative padding is allowed and grows each tile.
    pub fn with_point_padding(mut self, point_padding: f64) -> Result<Self, TilemapError> {
        self.point_padding = try_finite(point_padding)
            .map_err(|source| TilemapError::InvalidOption { field: "pointPadding", source })?;
        Ok(self)
    }

    pub fn colsize(&self) -> f64 {
        self.colsize
    }

    pub fn rowsize(&self) -> f64 {
        self.rowsize
    }

    pub fn point_padding(&self) -> f64 {
        self.point_padding
    }

    /// Padding for `point`: its own override, or the series default.
    pub fn padding_for(&self, point: &GridPoint) -> f64 {
        point.point_padding().unwrap_or(self.point_padding)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Path,
    Circle,
    Rect,
}

/// What a renderer needs to draw one tile
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeArgs {
    Path(Path),
    Circle { x: f64, y: f64, r: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
}

impl ShapeArgs {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeArgs::Path(_) => ShapeType::Path,
            ShapeArgs::Circle { .. } => ShapeType::Circle,
            ShapeArgs::Rect { .. } => ShapeType::Rect,
        }
    }

    pub fn bounds(&self) -> Bounds {
        match *self {
            ShapeArgs::Path(ref path) => path.bounds(),
            ShapeArgs::Circle { x, y, r } => {
                let r = r.abs();
                Bounds::from_rect(x - r, y - r, 2.0 * r, 2.0 * r)
            }
            ShapeArgs::Rect { x, y, width, height } => Bounds::from_rect(x, y, width, height),
        }
    }

    /// Hit test in pixel space.
    pub fn contains(&self, p: DVec2) -> bool {
        match *self {
            ShapeArgs::Path(ref path) => path.contains(p),
            ShapeArgs::Circle { x, y, r } => p.distance(dvec2(x, y)) <= r,
            ShapeArgs::Rect { .. } => self.bounds().contains(p),
        }
    }
}

/// Named pixel edges kept for halo drawing on hover
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileEdges {
    Hexagon {
        x1: f64,
        x2: f64,
        x3: f64,
        x4: f64,
        y1: f64,
        y2: f64,
        y3: f64,
    },
    Diamond {
        x1: f64,
        x2: f64,
        x3: f64,
        y1: f64,
        y2: f64,
        y3: f64,
    },
}

/// Everything one translate pass computes for a point.
///
/// Replaced wholesale on every pass, so anchor, shape and edges always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGeometry {
    pub plot_x: f64,
    pub plot_y: f64,
    pub shape: ShapeArgs,
    pub edges: Option<TileEdges>,
    pub radius: Option<f64>,
}

impl TileGeometry {
    pub fn new(plot_x: f64, plot_y: f64, shape: ShapeArgs) -> Self {
        TileGeometry {
            plot_x,
            plot_y,
            shape,
            edges: None,
            radius: None,
        }
    }

    pub fn with_edges(mut self, edges: TileEdges) -> Self {
        self.edges = Some(edges);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn anchor(&self) -> DVec2 {
        dvec2(self.plot_x, self.plot_y)
    }
}

/// A data point on the tile grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridPoint {
    /// Column
    pub x: i64,
    /// Row
    pub y: i64,
    point_padding: Option<f64>,
    geometry: Option<TileGeometry>,
}

impl GridPoint {
    pub fn new(x: i64, y: i64) -> Self {
        GridPoint {
            x,
            y,
            point_padding: None,
            geometry: None,
        }
    }

    /// Override the series padding for this point only.
    pub fn with_padding(mut self, padding: f64) -> Result<Self, TilemapError> {
        let padding = try_finite(padding)
            .map_err(|source| TilemapError::InvalidOption { field: "pointPadding", source })?;
        self.point_padding = Some(padding);
        Ok(self)
    }

    pub fn point_padding(&self) -> Option<f64> {
        self.point_padding
    }

    /// Odd columns are the ones shifted half a tile down.
    pub fn is_odd_column(&self) -> bool {
        self.x % 2 != 0
    }

    pub fn geometry(&self) -> Option<&TileGeometry> {
        self.geometry.as_ref()
    }

    pub(crate) fn set_geometry(&mut self, geometry: TileGeometry) {
        self.geometry = Some(geometry);
    }

    pub fn plot_x(&self) -> Option<f64> {
        self.geometry.as_ref().map(|g| g.plot_x)
    }

    pub fn plot_y(&self) -> Option<f64> {
        self.geometry.as_ref().map(|g| g.plot_y)
    }

    pub fn shape_type(&self) -> Option<ShapeType> {
        self.geometry.as_ref().map(|g| g.shape.shape_type())
    }

    pub fn shape_args(&self) -> Option<&ShapeArgs> {
        self.geometry.as_ref().map(|g| &g.shape)
    }

    pub fn tile_edges(&self) -> Option<&TileEdges> {
        self.geometry.as_ref().and_then(|g| g.edges.as_ref())
    }

    pub fn radius(&self) -> Option<f64> {
        self.geometry.as_ref().and_then(|g| g.radius)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.shape_args().map(ShapeArgs::bounds)
    }
}

/// A series as seen by the tile shapes.
///
/// The host implements this to hand over its configuration, axes and points.
/// `generate_points` runs before geometry is computed and `translate_colors`
/// after it has been stored; both default to doing nothing.
pub trait TileSeries {
    fn config(&self) -> &SeriesConfig;
    fn x_axis(&self) -> &dyn Axis;
    fn y_axis(&self) -> &dyn Axis;
    fn points(&self) -> &[GridPoint];
    fn points_mut(&mut self) -> &mut [GridPoint];

    fn generate_points(&mut self) {}

    fn translate_colors(&mut self) {}
}

/// A self-contained series with owned axes
#[derive(Debug, Clone)]
pub struct Series<X, Y> {
    pub config: SeriesConfig,
    pub x_axis: X,
    pub y_axis: Y,
    pub points: Vec<GridPoint>,
}

impl<X: Axis, Y: Axis> Series<X, Y> {
    pub fn new(config: SeriesConfig, x_axis: X, y_axis: Y) -> Self {
        Series {
            config,
            x_axis,
            y_axis,
            points: Vec::new(),
        }
    }

    pub fn with_points(mut self, points: impl IntoIterator<Item = GridPoint>) -> Self {
        self.points.extend(points);
        self
    }

    /// The point at column `x`, row `y`, if present.
    pub fn point(&self, x: i64, y: i64) -> Option<&GridPoint> {
        self.points.iter().find(|p| p.x == x && p.y == y)
    }

    /// Topmost point whose tile contains the pixel `p`.
    pub fn hit_test(&self, p: DVec2) -> Option<&GridPoint> {
        self.points
            .iter()
            .rev()
            .find(|point| point.shape_args().is_some_and(|shape| shape.contains(p)))
    }
}

impl<X: Axis, Y: Axis> TileSeries for Series<X, Y> {
    fn config(&self) -> &SeriesConfig {
        &self.config
    }

    fn x_axis(&self) -> &dyn Axis {
        &self.x_axis
    }

    fn y_axis(&self) -> &dyn Axis {
        &self.y_axis
    }

    fn points(&self) -> &[GridPoint] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut [GridPoint] {
        &mut self.points
    }
}
