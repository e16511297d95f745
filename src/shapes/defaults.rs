//! Per-topology constants

/// Hexagons are three edge-steps wide and two tall.
pub const HEXAGON_X_DIVISOR: f64 = 3.0;
pub const HEXAGON_Y_DIVISOR: f64 = 2.0;
pub const DIAMOND_X_DIVISOR: f64 = 2.0;
pub const DIAMOND_Y_DIVISOR: f64 = 2.0;
pub const CIRCLE_X_DIVISOR: f64 = 2.0;
pub const CIRCLE_Y_DIVISOR: f64 = 2.0;

/// Outward offset of the hexagon's side vertices, relative to the halo size.
pub const HEXAGON_HALO_SLANT: f64 = 1.5;
