//! Circle shape

use macroquad::color::{Color, GRAY, WHITE};

use crate::math::Vector2;

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub position: Vector2,
    /// Base radius before scaling
    pub radius: f32,
    pub scale: Vector2,
    pub fill: Color,
    pub line: Color,
    draw_position: Vector2,
}

impl Circle {
    pub fn new(position: Vector2, radius: f32) -> Self {
        Self {
            position,
            radius,
            scale: Vector2::ONE,
            fill: GRAY,
            line: WHITE,
            draw_position: position,
        }
    }

    pub fn with_colors(mut self, fill: Color, line: Color) -> Self {
        self.fill = fill;
        self.line = line;
        self
    }

    /// Radius after applying the larger scale component.
    pub fn scaled_radius(&self) -> f32 {
        self.radius * self.scale.x.abs().max(self.scale.y.abs())
    }

    /// Camera-relative center as of the last `update()`.
    pub fn draw_position(&self) -> Vector2 {
        self.draw_position
    }

    pub fn update(&mut self, camera: Vector2) {
        self.sync_draw(camera);
    }

    pub fn sync_draw(&mut self, camera: Vector2) {
        self.draw_position = self.position - camera;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_radius_uses_largest_component() {
        let mut c = Circle::new(Vector2::ZERO, 4.0);
        assert_eq!(c.scaled_radius(), 4.0);
        c.set_scale(Vector2::new(0.5, -2.0));
        assert_eq!(c.scaled_radius(), 8.0);
    }

    #[test]
    fn test_draw_position() {
        let mut c = Circle::new(Vector2::new(50.0, 60.0), 1.0);
        c.update(Vector2::new(40.0, 40.0));
        assert_eq!(c.draw_position(), Vector2::new(10.0, 20.0));
    }
}
