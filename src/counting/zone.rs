//! Static polygonal zones and point containment.

use super::Point;
use crate::error::{Error, Result};

/// Tolerance, in pixels, for treating a point as lying on an edge.
const EDGE_EPSILON: f64 = 1e-6;

/// Where a point lies relative to a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Inside,
    OnBoundary,
    Outside,
}

impl Containment {
    /// Edges count as contained.
    #[inline]
    pub fn is_contained(self) -> bool {
        !matches!(self, Containment::Outside)
    }
}

/// A named simple polygon in frame coordinates.
///
/// Vertices are validated once on construction; the zone is immutable after.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    name: String,
    vertices: Vec<Point>,
}

impl Zone {
    pub fn new(name: impl Into<String>, vertices: Vec<Point>) -> Result<Self> {
        let name = name.into();
        if vertices.len() < 3 {
            return Err(Error::InvalidGeometry {
                zone: name,
                reason: format!("polygon needs at least 3 vertices, got {}", vertices.len()),
            });
        }
        if vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
            return Err(Error::InvalidGeometry {
                zone: name,
                reason: "vertex coordinates must be finite".to_string(),
            });
        }
        Ok(Self { name, vertices })
    }

    /// Build a zone from integer pixel pairs, the way zones are usually drawn.
    pub fn from_pixels(name: impl Into<String>, pixels: &[(i32, i32)]) -> Result<Self> {
        let vertices = pixels
            .iter()
            .map(|&(x, y)| Point::new(x as f32, y as f32))
            .collect();
        Self::new(name, vertices)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Classify `point` against the polygon (even-odd rule, edges checked first).
    pub fn contains(&self, point: Point) -> Containment {
        let (px, py) = (point.x as f64, point.y as f64);
        if !px.is_finite() || !py.is_finite() {
            return Containment::Outside;
        }

        let mut inside = false;
        let n = self.vertices.len();
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let (ax, ay) = (a.x as f64, a.y as f64);
            let (bx, by) = (b.x as f64, b.y as f64);

            if on_segment(ax, ay, bx, by, px, py) {
                return Containment::OnBoundary;
            }

            if (ay > py) != (by > py) {
                let x_cross = ax + (py - ay) * (bx - ax) / (by - ay);
                if px < x_cross {
                    inside = !inside;
                }
            }
        }

        if inside {
            Containment::Inside
        } else {
            Containment::Outside
        }
    }
}

fn on_segment(ax: f64, ay: f64, bx: f64, by: f64, px: f64, py: f64) -> bool {
    let cross = (bx - ax) * (py - ay) - (by - ay) * (px - ax);
    let len = ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt();
    if cross.abs() > EDGE_EPSILON * len.max(1.0) {
        return false;
    }
    px >= ax.min(bx) - EDGE_EPSILON
        && px <= ax.max(bx) + EDGE_EPSILON
        && py >= ay.min(by) - EDGE_EPSILON
        && py <= ay.max(by) + EDGE_EPSILON
}
