//! Separating Axis Theorem
//!
//! Overlap tests for convex polygons and circles. Every test returns a
//! [`Collision`] record:
//! - `distance` is `max(amin, bmin) - min(amax, bmax)` on the reported
//!   axis: positive is the gap between separated shapes, zero or negative
//!   is the penetration depth of overlapping ones
//! - `separating_axis` is a unit vector oriented from the first shape
//!   towards the second
//!
//! Polygon–polygon tests only use the edge normals of the *first* polygon.
//! This is cheaper than full SAT but can report overlap for some pairs that
//! a second set of axes would separate. Callers that care should test both
//! orders.

use std::fmt;

use crate::math::Vector2;

use super::{Shape, ShapeKind};

/// Closed scalar range produced by projecting a shape onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.min > other.max || other.min > self.max)
    }

    /// Length of the shared range, zero when disjoint.
    pub fn intersection(&self, other: &Interval) -> f32 {
        if self.overlaps(other) {
            self.max.min(other.max) - self.min.max(other.min)
        } else {
            0.0
        }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        self.min.max(value.min(self.max))
    }
}

/// Outcome of an overlap test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub overlapped: bool,
    pub separating_axis: Option<Vector2>,
    /// Gap (positive) or penetration (zero/negative) along the axis
    pub distance: f32,
}

impl Collision {
    /// Result for shapes that share no axis at all.
    pub fn none() -> Self {
        Self {
            overlapped: false,
            separating_axis: None,
            distance: 0.0,
        }
    }

    /// Translation that moves the first shape out of the second, if they
    /// overlap.
    pub fn mtv(&self) -> Option<Vector2> {
        match (self.overlapped, self.separating_axis) {
            (true, Some(axis)) => Some(axis * self.distance),
            _ => None,
        }
    }

    /// Same result seen from the second shape.
    pub fn flipped(&self) -> Self {
        Self {
            separating_axis: self.separating_axis.map(|a| -a),
            ..*self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionError {
    /// No overlap test exists for this pair of shape kinds.
    UnsupportedShapePair { first: ShapeKind, second: ShapeKind },
}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionError::UnsupportedShapePair { first, second } => {
                write!(f, "unsupported shape pair: {:?} vs {:?}", first, second)
            }
        }
    }
}

impl std::error::Error for CollisionError {}

/// Unit edge normals of a polygon, one per edge `p[i] - p[i-1]`.
/// Zero-length edges contribute no axis.
pub fn get_axes(poly: &[Vector2]) -> Vec<Vector2> {
    let n = poly.len();
    let mut axes = Vec::with_capacity(n);
    for i in 0..n {
        let prev = poly[(i + n - 1) % n];
        let mut axis = poly[i] - prev;
        if axis.length_squared() == 0.0 {
            continue;
        }
        axis.normalize().perpend_left();
        axes.push(axis);
    }
    axes
}

/// Projection of every vertex onto `axis`.
pub fn get_projection(poly: &[Vector2], axis: Vector2) -> Interval {
    poly.iter().fold(
        Interval::new(f32::INFINITY, f32::NEG_INFINITY),
        |acc, p| {
            let d = p.dot(axis);
            Interval::new(acc.min.min(d), acc.max.max(d))
        },
    )
}

/// Shared SAT loop: exits on the first separating axis, otherwise reports
/// the axis with the smallest penetration.
fn separate(
    axes: impl IntoIterator<Item = Vector2>,
    project_a: impl Fn(Vector2) -> Interval,
    project_b: impl Fn(Vector2) -> Interval,
    towards: Vector2,
) -> Collision {
    let orient = |axis: Vector2| if axis.dot(towards) < 0.0 { -axis } else { axis };
    let mut best: Option<(Vector2, f32)> = None;

    for axis in axes {
        let a = project_a(axis);
        let b = project_b(axis);
        let dist = a.min.max(b.min) - a.max.min(b.max);

        if a.max < b.min || b.max < a.min {
            return Collision {
                overlapped: false,
                separating_axis: Some(orient(axis)),
                distance: dist,
            };
        }

        if best.map_or(true, |(_, d)| dist > d) {
            best = Some((axis, dist));
        }
    }

    match best {
        Some((axis, dist)) => Collision {
            overlapped: true,
            separating_axis: Some(orient(axis)),
            distance: dist,
        },
        None => Collision::none(),
    }
}

fn centroid(poly: &[Vector2]) -> Vector2 {
    if poly.is_empty() {
        return Vector2::ZERO;
    }
    poly.iter().fold(Vector2::ZERO, |acc, p| acc + *p) / poly.len() as f32
}

/// Polygon–polygon test using the edge normals of `poly1`.
pub fn get_separating_axis(poly1: &[Vector2], poly2: &[Vector2]) -> Collision {
    let towards = centroid(poly2) - centroid(poly1);
    separate(
        get_axes(poly1),
        |axis| get_projection(poly1, axis),
        |axis| get_projection(poly2, axis),
        towards,
    )
}

/// Circle–polygon test: the polygon's edge normals plus the axis from the
/// circle center to the nearest vertex.
pub fn circle_polygon(center: Vector2, radius: f32, poly: &[Vector2]) -> Collision {
    let mut axes = get_axes(poly);

    let nearest = poly.iter().copied().min_by(|a, b| {
        let da = (*a - center).length_squared();
        let db = (*b - center).length_squared();
        da.total_cmp(&db)
    });
    if let Some(vertex) = nearest {
        let axis = (vertex - center).normalized();
        if axis != Vector2::ZERO {
            axes.push(axis);
        }
    }

    separate(
        axes,
        |axis| {
            let c = center.dot(axis);
            Interval::new(c - radius, c + radius)
        },
        |axis| get_projection(poly, axis),
        centroid(poly) - center,
    )
}

/// Circle–circle test. Squared center distance is compared with the
/// squared radius sum; touching circles overlap.
pub fn circle_circle(c1: Vector2, r1: f32, c2: Vector2, r2: f32) -> Collision {
    let delta = c2 - c1;
    let dist_sq = delta.length_squared();
    let radii = r1 + r2;

    let axis = if dist_sq == 0.0 {
        Vector2::new(1.0, 0.0)
    } else {
        delta.normalized()
    };

    Collision {
        overlapped: dist_sq <= radii * radii,
        separating_axis: Some(axis),
        distance: dist_sq.sqrt() - radii,
    }
}

/// Gives a two-vertex polygon some thickness so it has edge normals in
/// both directions.
fn solid_points(points: &[Vector2]) -> Vec<Vector2> {
    if points.len() != 2 {
        return points.to_vec();
    }
    let (a, b) = (points[0], points[1]);
    let mut normal = b - a;
    normal.normalize().perpend_left();
    vec![a, b, b + normal, a + normal]
}

/// Overlap test between any two shapes.
///
/// Shapes without area or extent (empty or single-vertex polygons) have no
/// meaningful test and are rejected.
pub fn collide(a: &Shape, b: &Shape) -> Result<Collision, CollisionError> {
    let supported = |kind: ShapeKind| !matches!(kind, ShapeKind::Empty | ShapeKind::Point);
    if !supported(a.kind()) || !supported(b.kind()) {
        return Err(CollisionError::UnsupportedShapePair {
            first: a.kind(),
            second: b.kind(),
        });
    }

    Ok(match (a, b) {
        (Shape::Polygon(p1), Shape::Polygon(p2)) => {
            get_separating_axis(&solid_points(p1.points()), &solid_points(p2.points()))
        }
        (Shape::Circle(c), Shape::Polygon(p)) => {
            circle_polygon(c.position, c.scaled_radius(), &solid_points(p.points()))
        }
        (Shape::Polygon(p), Shape::Circle(c)) => {
            circle_polygon(c.position, c.scaled_radius(), &solid_points(p.points())).flipped()
        }
        (Shape::Circle(c1), Shape::Circle(c2)) => {
            circle_circle(c1.position, c1.scaled_radius(), c2.position, c2.scaled_radius())
        }
    })
}
