//! Tile shape strategies
//!
//! Each topology is its own type that knows how to:
//! - Report the grid padding its tiles need at the series edges
//! - Translate every point of a series into pixel-space geometry
//! - Outline a hovered tile with a halo
//! - Place a data label relative to its tile

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::axis::AxisFrame;
use crate::errors::TilemapError;
use crate::label::DataLabelOptions;
use crate::path::Path;
use crate::series::{GridPoint, SeriesConfig, TileGeometry, TileSeries};

pub mod circle;
pub mod defaults;
pub mod diamond;
pub mod hexagon;
pub mod square;

pub use circle::CircleShape;
pub use diamond::DiamondShape;
pub use hexagon::HexagonShape;
pub use square::SquareShape;

/// Grid-unit half extents a topology adds around the data range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub x_pad: f64,
    pub y_pad: f64,
}

/// Padding from tile size, `{ colsize / -x_div, rowsize / -y_div }`.
pub fn tile_padding(config: &SeriesConfig, x_div: f64, y_div: f64) -> Padding {
    Padding {
        x_pad: config.colsize() / -x_div,
        y_pad: config.rowsize() / -y_div,
    }
}

/// Padding for slanted edges, `padding * |dx| / |dy|`, keeping the edge angle
/// while the tile shrinks. A zero `dy` (coincident rows, typically clamped
/// off-screen tiles) gets no slant padding.
pub(crate) fn slant_padding(padding: f64, dx: f64, dy: f64) -> f64 {
    if padding == 0.0 {
        return 0.0;
    }
    if dy == 0.0 {
        crate::log::warn!(padding = padding, dx = dx, "degenerate tile rows, skipping slant padding");
        return 0.0;
    }
    padding * dx.abs() / dy.abs()
}

/// Halo sizes of zero or NaN disable the halo.
pub(crate) fn halo_disabled(size: f64) -> bool {
    size == 0.0 || size.is_nan()
}

/// Common behavior for all tile topologies
#[enum_dispatch]
pub trait TileShape {
    fn kind(&self) -> TileShapeKind;

    /// Axis padding for the series, `None` when the topology needs none.
    fn series_padding(&self, config: &SeriesConfig) -> Option<Padding>;

    /// Outline around a translated tile, grown outward by `size` pixels.
    fn halo_path(&self, point: &GridPoint, size: f64) -> Path;

    /// Compute geometry for every point, in order, without touching them.
    fn layout(
        &self,
        frame: &AxisFrame<'_>,
        config: &SeriesConfig,
        points: &[GridPoint],
    ) -> Result<Vec<TileGeometry>, TilemapError>;

    /// Top-left corner for a label of `label_size`, `None` if the point was
    /// never translated.
    fn align_data_label(&self, point: &GridPoint, label_size: DVec2, options: &DataLabelOptions) -> Option<DVec2>;

    /// Translate every point of `series` into pixel geometry.
    ///
    /// Geometry is only written once the whole series has been laid out, so
    /// an axis failure leaves every point as it was.
    fn translate(&self, series: &mut dyn TileSeries) -> Result<(), TilemapError> {
        series.generate_points();

        let geometry = {
            let frame = AxisFrame::new(series.x_axis(), series.y_axis())?;
            self.layout(&frame, series.config(), series.points())?
        };

        crate::log::debug!(shape = %self.kind(), points = geometry.len(), "translated tile series");

        for (point, geometry) in series.points_mut().iter_mut().zip(geometry) {
            point.set_geometry(geometry);
        }

        series.translate_colors();
        Ok(())
    }
}

/// One definition per supported topology
#[enum_dispatch(TileShape)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeDefinition {
    Hexagon(HexagonShape),
    Diamond(DiamondShape),
    Circle(CircleShape),
    Square(SquareShape),
}

/// Topology names as they appear in series options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileShapeKind {
    Hexagon,
    Diamond,
    Circle,
    Square,
}

impl TileShapeKind {
    pub const ALL: [TileShapeKind; 4] = [
        TileShapeKind::Hexagon,
        TileShapeKind::Diamond,
        TileShapeKind::Circle,
        TileShapeKind::Square,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TileShapeKind::Hexagon => "hexagon",
            TileShapeKind::Diamond => "diamond",
            TileShapeKind::Circle => "circle",
            TileShapeKind::Square => "square",
        }
    }
}

impl fmt::Display for TileShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileShapeKind {
    type Err = TilemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TileShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| TilemapError::UnknownShape { name: s.to_string() })
    }
}

/// Dispatch table from topology to its definition
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    definitions: [ShapeDefinition; 4],
}

impl ShapeRegistry {
    pub const fn new() -> Self {
        ShapeRegistry {
            definitions: [
                ShapeDefinition::Hexagon(HexagonShape),
                ShapeDefinition::Diamond(DiamondShape),
                ShapeDefinition::Circle(CircleShape),
                ShapeDefinition::Square(SquareShape),
            ],
        }
    }

    pub fn get(&self, kind: TileShapeKind) -> &ShapeDefinition {
        match kind {
            TileShapeKind::Hexagon => &self.definitions[0],
            TileShapeKind::Diamond => &self.definitions[1],
            TileShapeKind::Circle => &self.definitions[2],
            TileShapeKind::Square => &self.definitions[3],
        }
    }

    /// Exact, case-sensitive lookup by topology name.
    pub fn lookup(&self, name: &str) -> Result<&ShapeDefinition, TilemapError> {
        Ok(self.get(name.parse()?))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeDefinition> {
        self.definitions.iter()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<TileShapeKind> for ShapeRegistry {
    type Output = ShapeDefinition;

    fn index(&self, kind: TileShapeKind) -> &ShapeDefinition {
        self.get(kind)
    }
}

/// Registry shared by callers that do not need their own.
pub static SHAPES: ShapeRegistry = ShapeRegistry::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_maps_every_kind_to_its_definition() {
        let registry = ShapeRegistry::new();
        for kind in TileShapeKind::ALL {
            assert_eq!(registry.get(kind).kind(), kind);
            assert_eq!(registry[kind].kind(), kind);
        }
        assert_eq!(registry.iter().count(), 4);
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(SHAPES.lookup("hexagon").unwrap().kind(), TileShapeKind::Hexagon);
        assert_eq!(SHAPES.lookup("square").unwrap().kind(), TileShapeKind::Square);
        assert_eq!(
            SHAPES.lookup("Hexagon").unwrap_err(),
            TilemapError::UnknownShape { name: "Hexagon".to_string() }
        );
        assert!(SHAPES.lookup("triangle").is_err());
    }

    #[test]
    fn kind_names_round_trip_through_display() {
        for kind in TileShapeKind::ALL {
            assert_eq!(kind.to_string().parse::<TileShapeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn tile_padding_divides_and_negates() {
        let config = SeriesConfig::try_new(3.0, 4.0, 0.0).unwrap();
        assert_eq!(tile_padding(&config, 3.0, 2.0), Padding { x_pad: -1.0, y_pad: -2.0 });
    }

    #[test]
    fn slant_padding_scales_by_edge_slope() {
        assert_eq!(slant_padding(2.0, 50.0, -20.0), 5.0);
        assert_eq!(slant_padding(2.0, 50.0, 0.0), 0.0);
        assert_eq!(slant_padding(0.0, 50.0, 0.0), 0.0);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn coincident_rows_warn_only_when_padding_is_set() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use tracing_subscriber::layer::{Context, SubscriberExt};

        struct CountWarnings(Arc<AtomicUsize>);

        impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CountWarnings {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                if *event.metadata().level() == tracing::Level::WARN {
                    self.0.fetch_add(1, Ordering::SeqCst);
                }
            }
        }

        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountWarnings(warnings.clone()));
        tracing::subscriber::with_default(subscriber, || {
            slant_padding(0.0, 50.0, 0.0);
            slant_padding(2.0, 50.0, 0.0);
        });
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn series_padding_per_topology() {
        let config = SeriesConfig::try_new(6.0, 4.0, 0.0).unwrap();
        assert_eq!(
            SHAPES[TileShapeKind::Hexagon].series_padding(&config),
            Some(Padding { x_pad: -2.0, y_pad: -2.0 })
        );
        assert_eq!(
            SHAPES[TileShapeKind::Diamond].series_padding(&config),
            Some(Padding { x_pad: -3.0, y_pad: -2.0 })
        );
        assert_eq!(
            SHAPES[TileShapeKind::Circle].series_padding(&config),
            Some(Padding { x_pad: -3.0, y_pad: -2.0 })
        );
        assert_eq!(SHAPES[TileShapeKind::Square].series_padding(&config), None);
    }
}
