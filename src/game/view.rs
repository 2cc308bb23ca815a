//! View (camera)
//!
//! The view is an axis-aligned rectangle in room space. Its top-left corner
//! is the camera position subtracted from every actor when computing draw
//! points, and its rectangle is the frustum used for visibility. The view
//! is itself an [`Actor`] body so it can move by motion or along paths.

use crate::anim::PathError;
use crate::math::Vector2;
use crate::shape::{Polygon, Shape};

use super::actor::{Actor, Attribute};

/// Point of a rectangle used for alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    MiddleLeft,
    #[default]
    Middle,
    MiddleRight,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// Offset of this anchor from the top-left corner of a `size` rectangle.
    pub fn offset(self, size: Vector2) -> Vector2 {
        let (w, h) = (size.x, size.y);
        let (x, y) = match self {
            Anchor::TopLeft => (0.0, 0.0),
            Anchor::Top => (w / 2.0, 0.0),
            Anchor::TopRight => (w, 0.0),
            Anchor::MiddleLeft => (0.0, h / 2.0),
            Anchor::Middle => (w / 2.0, h / 2.0),
            Anchor::MiddleRight => (w, h / 2.0),
            Anchor::BottomLeft => (0.0, h),
            Anchor::Bottom => (w / 2.0, h),
            Anchor::BottomRight => (w, h),
        };
        Vector2::new(x, y)
    }
}

/// Background layer scrolling at a fraction of the view's speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Parallax {
    /// Key into the asset registry
    pub texture: String,
    /// 0 stays fixed on screen, 1 scrolls with the room
    pub scroll_ratio: Vector2,
}

impl Parallax {
    pub fn new(texture: impl Into<String>, scroll_ratio: Vector2) -> Self {
        Self { texture: texture.into(), scroll_ratio }
    }

    /// Texture offset for a view at `view_position`, wrapped into
    /// `image_size`. Zero-sized axes do not scroll.
    pub fn scroll(&self, view_position: Vector2, image_size: Vector2) -> Vector2 {
        let raw = view_position * self.scroll_ratio;
        let wrap = |v: f32, size: f32| if size > 0.0 { v.rem_euclid(size) } else { 0.0 };
        Vector2::new(wrap(raw.x, image_size.x), wrap(raw.y, image_size.y))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    body: Actor,
    /// Point of the view kept on the target by [`View::follow`]
    pub anchor: Anchor,
    parallax: Vec<Parallax>,
}

impl View {
    pub fn new(position: Vector2, size: Vector2) -> Self {
        Self {
            body: Actor::new(Polygon::rectangle(position, size)),
            anchor: Anchor::default(),
            parallax: Vec::new(),
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Top-left corner in room space.
    pub fn position(&self) -> Vector2 {
        self.body.position()
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.body.set_position(position);
        self.refresh();
    }

    pub fn size(&self) -> Vector2 {
        self.body.shape.scale()
    }

    /// Matches the view to new window dimensions.
    pub fn resize(&mut self, size: Vector2) {
        if self.size() != size {
            log::debug!("view resized to {}", size);
            *self.body.shape.scale_mut() = size;
            self.refresh();
        }
    }

    /// Moves the view so its anchor point sits on `target`.
    pub fn follow(&mut self, target: Vector2) {
        let offset = self.anchor.offset(self.size());
        self.set_position(target - offset);
    }

    /// View-relative point to room space.
    pub fn to_room(&self, point: Vector2) -> Vector2 {
        point + self.position()
    }

    /// Room-space point to view-relative.
    pub fn to_view(&self, point: Vector2) -> Vector2 {
        point - self.position()
    }

    pub fn contains(&self, point: Vector2) -> bool {
        let min = self.position();
        let max = min + self.size();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Rectangle used for visibility tests.
    pub fn frustum(&self) -> &Shape {
        &self.body.shape
    }

    /// The view's own actor, for attaching paths or motion.
    pub fn body(&self) -> &Actor {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Actor {
        &mut self.body
    }

    /// Advances the view's own path animations.
    pub fn animate(&mut self) -> Result<Vec<Attribute>, PathError> {
        self.body.animate()
    }

    /// Integrates motion and refreshes the frustum.
    pub fn update(&mut self) {
        self.body.update(Vector2::ZERO);
    }

    fn refresh(&mut self) {
        self.body.shape.update(Vector2::ZERO);
    }

    pub fn add_parallax(&mut self, layer: Parallax) {
        self.parallax.push(layer);
    }

    pub fn parallax(&self) -> &[Parallax] {
        &self.parallax
    }

    pub fn clear_parallax(&mut self) {
        self.parallax.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_offsets() {
        let size = Vector2::new(100.0, 50.0);
        assert_eq!(Anchor::TopLeft.offset(size), Vector2::ZERO);
        assert_eq!(Anchor::TopRight.offset(size), Vector2::new(100.0, 0.0));
        assert_eq!(Anchor::Middle.offset(size), Vector2::new(50.0, 25.0));
        assert_eq!(Anchor::BottomLeft.offset(size), Vector2::new(0.0, 50.0));
        assert_eq!(Anchor::BottomRight.offset(size), size);
    }

    #[test]
    fn test_follow_centers_target() {
        let mut view = View::new(Vector2::ZERO, Vector2::new(800.0, 600.0));
        view.follow(Vector2::new(1000.0, 1000.0));
        assert_eq!(view.position(), Vector2::new(600.0, 700.0));
        assert!(view.contains(Vector2::new(1000.0, 1000.0)));

        view.anchor = Anchor::TopLeft;
        view.follow(Vector2::new(10.0, 20.0));
        assert_eq!(view.position(), Vector2::new(10.0, 20.0));
    }

    #[test]
    fn test_coordinate_conversion() {
        let view = View::new(Vector2::new(100.0, 200.0), Vector2::new(320.0, 240.0));
        let room = view.to_room(Vector2::new(5.0, 5.0));
        assert_eq!(room, Vector2::new(105.0, 205.0));
        assert_eq!(view.to_view(room), Vector2::new(5.0, 5.0));
    }

    #[test]
    fn test_resize_updates_frustum() {
        let mut view = View::new(Vector2::ZERO, Vector2::new(10.0, 10.0));
        view.resize(Vector2::new(40.0, 30.0));
        match view.frustum() {
            Shape::Polygon(p) => assert_eq!(p.points()[2], Vector2::new(40.0, 30.0)),
            Shape::Circle(_) => unreachable!(),
        }
    }

    #[test]
    fn test_view_motion() {
        let mut view = View::new(Vector2::ZERO, Vector2::new(10.0, 10.0));
        view.body_mut().motion = Vector2::new(2.0, 0.0);
        view.update();
        view.update();
        assert_eq!(view.position(), Vector2::new(4.0, 0.0));
    }

    #[test]
    fn test_parallax_scroll_wraps() {
        let layer = Parallax::new("stars", Vector2::new(0.5, 0.25));
        let offset = layer.scroll(Vector2::new(300.0, -40.0), Vector2::new(128.0, 64.0));
        assert_eq!(offset, Vector2::new(22.0, 54.0));
        assert_eq!(layer.scroll(Vector2::new(300.0, 0.0), Vector2::ZERO), Vector2::ZERO);
    }
}
