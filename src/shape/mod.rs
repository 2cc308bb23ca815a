//! Collision shapes
//!
//! An actor's body is either a convex [`Polygon`] or a [`Circle`]. Both
//! keep a world-space form for collision and a camera-relative form for
//! drawing; [`sat`] tests any pair of them.

pub mod circle;
pub mod polygon;
pub mod sat;

pub use circle::Circle;
pub use polygon::Polygon;
pub use sat::{collide, Collision, CollisionError, Interval};

use macroquad::color::Color;

use crate::math::Vector2;

/// Classification used to pick an overlap test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Polygon without vertices
    Empty,
    /// Single-vertex polygon
    Point,
    /// Two-vertex polygon
    Segment,
    Polygon,
    Circle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    Circle(Circle),
}

impl Shape {
    /// Overlap-test classification, from the vertex count for polygons.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(p) => match p.refpoints().len() {
                0 => ShapeKind::Empty,
                1 => ShapeKind::Point,
                2 => ShapeKind::Segment,
                _ => ShapeKind::Polygon,
            },
        }
    }

    /// Anchor point in room space.
    pub fn position(&self) -> Vector2 {
        match self {
            Shape::Polygon(p) => p.position,
            Shape::Circle(c) => c.position,
        }
    }

    /// Mutable anchor point; call `update` afterwards.
    pub fn position_mut(&mut self) -> &mut Vector2 {
        match self {
            Shape::Polygon(p) => &mut p.position,
            Shape::Circle(c) => &mut c.position,
        }
    }

    /// Rotation in degrees. Circles are rotation invariant and report 0.
    pub fn rotation(&self) -> f32 {
        match self {
            Shape::Polygon(p) => p.rotation,
            Shape::Circle(_) => 0.0,
        }
    }

    /// Sets the rotation in degrees, wrapped to [0, 360). No-op on circles.
    pub fn set_rotation(&mut self, degrees: f32) {
        if let Shape::Polygon(p) = self {
            p.rotation = degrees.rem_euclid(360.0);
        }
    }

    /// Adds `degrees` to the rotation. No-op on circles.
    pub fn rotate(&mut self, degrees: f32) {
        if let Shape::Polygon(p) = self {
            p.rotate(degrees);
        }
    }

    /// Per-axis scale factors.
    pub fn scale(&self) -> Vector2 {
        match self {
            Shape::Polygon(p) => p.scale,
            Shape::Circle(c) => c.scale,
        }
    }

    /// Mutable scale factors.
    pub fn scale_mut(&mut self) -> &mut Vector2 {
        match self {
            Shape::Polygon(p) => &mut p.scale,
            Shape::Circle(c) => &mut c.scale,
        }
    }

    /// Fill color.
    pub fn fill(&self) -> Color {
        match self {
            Shape::Polygon(p) => p.fill,
            Shape::Circle(c) => c.fill,
        }
    }

    /// Mutable fill color.
    pub fn fill_mut(&mut self) -> &mut Color {
        match self {
            Shape::Polygon(p) => &mut p.fill,
            Shape::Circle(c) => &mut c.fill,
        }
    }

    /// Outline color.
    pub fn line(&self) -> Color {
        match self {
            Shape::Polygon(p) => p.line,
            Shape::Circle(c) => c.line,
        }
    }

    /// Mutable outline color.
    pub fn line_mut(&mut self) -> &mut Color {
        match self {
            Shape::Polygon(p) => &mut p.line,
            Shape::Circle(c) => &mut c.line,
        }
    }

    /// Moves the anchor by `motion`.
    pub fn translate(&mut self, motion: Vector2) {
        *self.position_mut() += motion;
    }

    /// Recomputes world-space geometry and camera-relative draw data.
    pub fn update(&mut self, camera: Vector2) {
        match self {
            Shape::Polygon(p) => p.update(camera),
            Shape::Circle(c) => c.update(camera),
        }
    }

    /// Recomputes only the camera-relative draw data.
    pub fn sync_draw(&mut self, camera: Vector2) {
        match self {
            Shape::Polygon(p) => p.sync_draw(camera),
            Shape::Circle(c) => c.sync_draw(camera),
        }
    }

    /// Overlap test against `other`, see [`collide`].
    pub fn collide_with(&self, other: &Shape) -> Result<Collision, CollisionError> {
        collide(self, other)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_vertex_count() {
        let make = |n: usize| {
            Shape::Polygon(Polygon::new(Vector2::ZERO, 0.0, Vector2::ONE, vec![Vector2::ONE; n]))
        };
        assert_eq!(make(0).kind(), ShapeKind::Empty);
        assert_eq!(make(1).kind(), ShapeKind::Point);
        assert_eq!(make(2).kind(), ShapeKind::Segment);
        assert_eq!(make(5).kind(), ShapeKind::Polygon);
        assert_eq!(Shape::from(Circle::new(Vector2::ZERO, 1.0)).kind(), ShapeKind::Circle);
    }

    #[test]
    fn test_translate_then_update_moves_points() {
        let mut shape = Shape::from(Polygon::rectangle(Vector2::ZERO, Vector2::new(2.0, 2.0)));
        shape.translate(Vector2::new(3.0, 4.0));
        shape.update(Vector2::new(1.0, 1.0));
        match &shape {
            Shape::Polygon(p) => {
                assert_eq!(p.points()[0], Vector2::new(3.0, 4.0));
                assert_eq!(p.draw_points()[0], Vector2::new(2.0, 3.0));
            }
            Shape::Circle(_) => unreachable!(),
        }
    }

    #[test]
    fn test_circle_ignores_rotation() {
        let mut shape = Shape::from(Circle::new(Vector2::ZERO, 1.0));
        shape.set_rotation(45.0);
        assert_eq!(shape.rotation(), 0.0);
    }
}
