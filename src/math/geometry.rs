//! Scalar geometry helpers
//!
//! Free functions shared by paths and the SAT code. Points are `Vector2`s;
//! angles are degrees.

use std::f32::consts::PI;

use super::Vector2;

pub fn dot(a: Vector2, b: Vector2) -> f32 {
    a.x * b.x + a.y * b.y
}

pub fn cross(a: Vector2, b: Vector2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Radius of a circle with the given circumference.
pub fn radius_of(circumference: f32) -> f32 {
    circumference / PI / 2.0
}

/// Diameter of a circle with the given circumference.
pub fn diameter_of(circumference: f32) -> f32 {
    circumference / PI
}

pub fn circumference(radius: f32) -> f32 {
    2.0 * PI * radius
}

/// Offset at `distance` along `direction` degrees.
pub fn lengthdir(direction: f32, distance: f32) -> Vector2 {
    let r = direction.to_radians();
    Vector2::new(r.cos() * distance, r.sin() * distance)
}

pub fn distance_squared(a: Vector2, b: Vector2) -> f32 {
    (b - a).length_squared()
}

pub fn distance(a: Vector2, b: Vector2) -> f32 {
    distance_squared(a, b).sqrt()
}

/// Angle from `a` towards `b`, measured with y pointing up.
pub fn direction(a: Vector2, b: Vector2) -> f32 {
    let dx = b.x - a.x;
    let dy = a.y - b.y;
    dy.atan2(dx).to_degrees()
}

pub fn lerp(a: f32, b: f32, ratio: f32) -> f32 {
    a + (b - a) * ratio
}

pub fn lerp2d(a: Vector2, b: Vector2, ratio: f32) -> Vector2 {
    a.lerp(b, ratio)
}

/// Point on segment `(l1, l2)` closest to `p`.
///
/// A zero-length segment returns `l1`.
pub fn point_line_nearest_point(p: Vector2, l1: Vector2, l2: Vector2) -> Vector2 {
    let d = l2 - l1;
    let len_sq = d.length_squared();
    if len_sq == 0.0 {
        return l1;
    }

    let param = (p - l1).dot(d) / len_sq;
    if param < 0.0 {
        l1
    } else if param > 1.0 {
        l2
    } else {
        l1 + d * param
    }
}

/// Shortest distance between `p` and segment `(l1, l2)`.
pub fn point_line_distance(p: Vector2, l1: Vector2, l2: Vector2) -> f32 {
    distance(p, point_line_nearest_point(p, l1, l2))
}

/// Intersection point of segments `(a1, a2)` and `(b1, b2)`, if any.
/// Parallel segments never intersect.
pub fn line_line_intersection(a1: Vector2, a2: Vector2, b1: Vector2, b2: Vector2) -> Option<Vector2> {
    let denom = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
    if denom == 0.0 {
        return None;
    }

    let ua = ((b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x)) / denom;
    let ub = ((a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x)) / denom;

    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        Some(lerp2d(a1, a2, ua))
    } else {
        None
    }
}

/// Points where the infinite line through `(l1, l2)` crosses the circle
/// `(center, radius)`. Returns zero, one (tangent) or two points.
pub fn circle_line_intersection(l1: Vector2, l2: Vector2, center: Vector2, radius: f32) -> Vec<Vector2> {
    let p1 = l1 - center;
    let d = l2 - l1;

    let a = d.length_squared();
    if a == 0.0 {
        return Vec::new();
    }
    let b = 2.0 * d.dot(p1);
    let c = p1.length_squared() - radius * radius;
    let delta = b * b - 4.0 * a * c;

    if delta < 0.0 {
        Vec::new()
    } else if delta == 0.0 {
        vec![l1 + d * (-b / (2.0 * a))]
    } else {
        let sqrt_delta = delta.sqrt();
        let u1 = (-b + sqrt_delta) / (2.0 * a);
        let u2 = (-b - sqrt_delta) / (2.0 * a);
        vec![l1 + d * u1, l1 + d * u2]
    }
}
