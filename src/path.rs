//! Renderer-agnostic path descriptors.
//!
//! A [`Path`] is an ordered list of drawing commands in pixel space, built with
//! the same fluent `m`/`l`/`a`/`z` calls an SVG path builder uses. Its
//! `Display` output is SVG path data (`M83,300L116,300...Z`), but nothing here
//! depends on a particular renderer.

use std::fmt;

use glam::{DVec2, dvec2};

use crate::types::Bounds;

/// One drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathSegment {
    /// The point this command ends at, `None` for `Close`.
    pub fn end_point(&self) -> Option<DVec2> {
        match *self {
            PathSegment::MoveTo { x, y }
            | PathSegment::LineTo { x, y }
            | PathSegment::Arc { x, y, .. } => Some(dvec2(x, y)),
            PathSegment::Close => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.segments.push(PathSegment::MoveTo { x, y });
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.segments.push(PathSegment::LineTo { x, y });
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn a(mut self, rx: f64, ry: f64, rotation: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> Self {
        self.segments.push(PathSegment::Arc {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            x,
            y,
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Closed polygon through `vertices`; empty input gives an empty path.
    pub fn polygon(vertices: &[DVec2]) -> Self {
        let Some((first, rest)) = vertices.split_first() else {
            return Path::new();
        };
        rest.iter()
            .fold(Path::new().m(first.x, first.y), |path, v| path.l(v.x, v.y))
            .z()
    }

    /// Full circle as two half arcs.
    pub fn circle(center: DVec2, r: f64) -> Self {
        Path::new()
            .m(center.x - r, center.y)
            .a(r, r, 0.0, true, true, center.x + r, center.y)
            .a(r, r, 0.0, true, true, center.x - r, center.y)
            .z()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// End points of every command, in order.
    pub fn vertices(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.segments.iter().filter_map(PathSegment::end_point)
    }

    /// Extent of the command end points. Arcs are not sampled, so this is only
    /// exact for straight-edged paths.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new();
        for v in self.vertices() {
            bounds.expand_point(v);
        }
        bounds
    }

    /// Even-odd containment test treating the vertices as a polygon.
    pub fn contains(&self, p: DVec2) -> bool {
        let mut vertices: Vec<DVec2> = self.vertices().collect();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = vertices.len() - 1;
        for i in 0..vertices.len() {
            let (a, b) = (vertices[i], vertices[j]);
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo { x, y } => write!(f, "M{},{}", x, y)?,
                PathSegment::LineTo { x, y } => write!(f, "L{},{}", x, y)?,
                PathSegment::Arc {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => write!(
                    f,
                    "A{},{} {} {} {} {},{}",
                    rx, ry, rotation, large_arc as u8, sweep as u8, x, y
                )?,
                PathSegment::Close => write!(f, "Z")?,
            }
        }
        Ok(())
    }
}
