//! Error types with miette diagnostics
//!
//! Tile geometry never fails on out-of-range data (coordinates are clamped).
//! These errors cover malformed configuration and malformed axes only.

use miette::Diagnostic;
use thiserror::Error;

use crate::axis::AxisRole;
use crate::types::NumericError;

/// Errors raised while configuring or translating a tile series
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum TilemapError {
    #[error("invalid {field}: {source}")]
    #[diagnostic(
        code(tilemap::config::invalid_option),
        help("colsize and rowsize must be positive; padding must be finite")
    )]
    InvalidOption {
        field: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("invalid {axis} axis length: {source}")]
    #[diagnostic(
        code(tilemap::axis::invalid),
        help("axis pixel length must be a finite, non-negative number")
    )]
    InvalidAxis {
        axis: AxisRole,
        #[source]
        source: NumericError,
    },

    #[error("{axis} axis mapped {value} to NaN")]
    #[diagnostic(code(tilemap::axis::non_finite))]
    NonFiniteTransform { axis: AxisRole, value: f64 },

    #[error("unknown tile shape: {name}")]
    #[diagnostic(
        code(tilemap::registry::unknown_shape),
        help("expected one of: hexagon, diamond, circle, square")
    )]
    UnknownShape { name: String },
}
