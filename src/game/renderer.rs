//! Room renderer
//!
//! Draws a room with macroquad immediate-mode calls: parallax layers
//! first, then every actor in update order. Polygons are filled as a
//! triangle fan from their first vertex, so they must be convex.

use macroquad::prelude::*;

use crate::asset::AssetRegistry;
use crate::math::Vector2;
use crate::shape::{Circle, Polygon, Shape, ShapeKind};

use super::room::Room;
use super::view::View;

/// Outline thickness in pixels
const LINE_THICKNESS: f32 = 1.0;

/// Draws the view's parallax layers and every actor of `room`.
pub fn draw_room<G>(room: &Room<G>, textures: &AssetRegistry<Texture2D>) {
    draw_parallax(room.view(), textures);
    for (_, actor) in room.actors() {
        draw_shape(&actor.shape);
    }
}

/// Tiles each parallax texture across the view, offset by its scroll.
pub fn draw_parallax(view: &View, textures: &AssetRegistry<Texture2D>) {
    let size = view.size();
    for layer in view.parallax() {
        let Some(texture) = textures.get(&layer.texture) else {
            log::warn!("parallax texture '{}' is not loaded", layer.texture);
            continue;
        };
        let tile = Vector2::new(texture.width(), texture.height());
        if tile.x <= 0.0 || tile.y <= 0.0 {
            continue;
        }

        let offset = layer.scroll(view.position(), tile);
        let mut y = -offset.y;
        while y < size.y {
            let mut x = -offset.x;
            while x < size.x {
                draw_texture(texture, x, y, WHITE);
                x += tile.x;
            }
            y += tile.y;
        }
    }
}

pub fn draw_shape(shape: &Shape) {
    match shape {
        Shape::Polygon(polygon) => draw_polygon(polygon, shape.kind()),
        Shape::Circle(circle) => draw_circle_shape(circle),
    }
}

fn draw_polygon(polygon: &Polygon, kind: ShapeKind) {
    let points: Vec<Vec2> = polygon.draw_points().iter().map(|p| Vec2::from(*p)).collect();

    match kind {
        ShapeKind::Empty => {}
        ShapeKind::Point => draw_circle(points[0].x, points[0].y, LINE_THICKNESS, polygon.line),
        ShapeKind::Segment => draw_line(points[0].x, points[0].y, points[1].x, points[1].y, LINE_THICKNESS, polygon.line),
        _ => {
            for i in 1..points.len() - 1 {
                draw_triangle(points[0], points[i], points[i + 1], polygon.fill);
            }
            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                draw_line(a.x, a.y, b.x, b.y, LINE_THICKNESS, polygon.line);
            }
        }
    }
}

fn draw_circle_shape(circle: &Circle) {
    let center = circle.draw_position();
    let radius = circle.scaled_radius();
    draw_circle(center.x, center.y, radius, circle.fill);
    draw_circle_lines(center.x, center.y, radius, LINE_THICKNESS, circle.line);
}

/// Frame counter and actor stats in the top-left corner.
pub fn draw_stats<G>(room: &Room<G>, color: Color) {
    let text = format!(
        "frame {}  actors {}  visible {}  fps {}",
        room.frame(),
        room.len(),
        room.visible_count(),
        get_fps()
    );
    draw_text(&text, 8.0, 20.0, 20.0, color);
}
