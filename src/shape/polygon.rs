//! Convex polygon with a per-frame transform pipeline
//!
//! `refpoints` is the local-space template fixed at construction. Every
//! `update()` rebuilds `points` (world space: scale, then rotate, then
//! translate) and `draw_points` (world minus camera position).

use macroquad::color::{Color, GRAY, WHITE};

use crate::math::Vector2;

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub position: Vector2,
    /// Rotation in degrees
    pub rotation: f32,
    pub scale: Vector2,
    pub fill: Color,
    pub line: Color,
    refpoints: Vec<Vector2>,
    points: Vec<Vector2>,
    draw_points: Vec<Vector2>,
}

impl Polygon {
    pub fn new(position: Vector2, rotation: f32, scale: Vector2, refpoints: Vec<Vector2>) -> Self {
        let count = refpoints.len();
        let mut polygon = Self {
            position,
            rotation,
            scale,
            fill: GRAY,
            line: WHITE,
            refpoints,
            points: vec![Vector2::ZERO; count],
            draw_points: vec![Vector2::ZERO; count],
        };
        polygon.update(Vector2::ZERO);
        polygon
    }

    /// Axis-aligned rectangle whose top-left corner is `position`.
    ///
    /// The template is the unit square, so `scale` is the rectangle size.
    pub fn rectangle(position: Vector2, size: Vector2) -> Self {
        Self::new(
            position,
            0.0,
            size,
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 0.0),
                Vector2::new(1.0, 1.0),
                Vector2::new(0.0, 1.0),
            ],
        )
    }

    /// Unit square centered on the origin, sized by `scale`.
    pub fn square(position: Vector2, rotation: f32, scale: Vector2) -> Self {
        Self::new(
            position,
            rotation,
            scale,
            vec![
                Vector2::new(-0.5, -0.5),
                Vector2::new(0.5, -0.5),
                Vector2::new(0.5, 0.5),
                Vector2::new(-0.5, 0.5),
            ],
        )
    }

    pub fn with_colors(mut self, fill: Color, line: Color) -> Self {
        self.fill = fill;
        self.line = line;
        self
    }

    pub fn refpoints(&self) -> &[Vector2] {
        &self.refpoints
    }

    /// World-space vertices as of the last `update()`.
    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    /// Camera-relative vertices as of the last `update()`/`sync_draw()`.
    pub fn draw_points(&self) -> &[Vector2] {
        &self.draw_points
    }

    /// Average of the world-space vertices.
    pub fn centroid(&self) -> Vector2 {
        if self.points.is_empty() {
            return self.position;
        }
        let sum = self.points.iter().fold(Vector2::ZERO, |acc, p| acc + *p);
        sum / self.points.len() as f32
    }

    /// Recomputes world and draw points.
    pub fn update(&mut self, camera: Vector2) {
        let rad = self.rotation.to_radians();
        let (sin, cos) = rad.sin_cos();

        for (i, refpoint) in self.refpoints.iter().enumerate() {
            let mut p = *refpoint;
            p.rescale(self.scale).fast_rotate(cos, sin).translate(self.position);
            self.points[i] = p;
        }
        self.sync_draw(camera);
    }

    /// Recomputes only the draw points, for a camera that moved after
    /// `update()`.
    pub fn sync_draw(&mut self, camera: Vector2) {
        for (draw, point) in self.draw_points.iter_mut().zip(&self.points) {
            *draw = *point - camera;
        }
    }

    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        self.rotation = (self.rotation + angle).rem_euclid(360.0);
        self
    }

    pub fn translate(&mut self, motion: Vector2) -> &mut Self {
        self.position += motion;
        self
    }

    pub fn set_scale(&mut self, size: Vector2) -> &mut Self {
        self.scale.set(size);
        self
    }
}
