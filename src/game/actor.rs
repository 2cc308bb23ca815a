//! Actors
//!
//! An actor is a shape plus everything that moves it: a motion vector,
//! optional path animations on a fixed set of attributes, and an optional
//! command chord it answers to. Per-actor game logic lives in a
//! [`super::Behavior`] the room stores next to it.

use macroquad::color::Color;

use crate::anim::state::{DEFAULT_STEPS, REPEAT_FOREVER};
use crate::anim::{AssignMode, Path, PathError, PathState, PathValue, ValueKind};
use crate::input::Command;
use crate::math::Vector2;
use crate::shape::Shape;

// =============================================================================
// Attributes
// =============================================================================

/// Actor attributes a path can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Position,
    Rotation,
    Scale,
    Motion,
    FillColor,
    LineColor,
}

impl Attribute {
    pub const COUNT: usize = 6;

    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::Position,
        Attribute::Rotation,
        Attribute::Scale,
        Attribute::Motion,
        Attribute::FillColor,
        Attribute::LineColor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Position => "position",
            Attribute::Rotation => "rotation",
            Attribute::Scale => "scale",
            Attribute::Motion => "motion",
            Attribute::FillColor => "fill_color",
            Attribute::LineColor => "line_color",
        }
    }

    /// Kind of value the attribute holds.
    pub fn kind(self) -> ValueKind {
        match self {
            Attribute::Rotation => ValueKind::Scalar,
            Attribute::Position | Attribute::Scale | Attribute::Motion => ValueKind::Vector,
            Attribute::FillColor | Attribute::LineColor => ValueKind::Color,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// One optional animation per attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributePaths {
    slots: [Option<PathState>; Attribute::COUNT],
}

impl AttributePaths {
    pub fn get(&self, attr: Attribute) -> Option<&PathState> {
        self.slots[attr.slot()].as_ref()
    }

    pub fn get_mut(&mut self, attr: Attribute) -> Option<&mut PathState> {
        self.slots[attr.slot()].as_mut()
    }

    fn insert(&mut self, attr: Attribute, state: PathState) -> &mut PathState {
        self.slots[attr.slot()].insert(state)
    }

    fn remove(&mut self, attr: Attribute) -> Option<PathState> {
        self.slots[attr.slot()].take()
    }

    /// Attributes that currently have a path, in declaration order.
    pub fn active(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL.into_iter().filter(move |a| self.slots[a.slot()].is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

// =============================================================================
// Actor
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub shape: Shape,
    /// Displacement applied every frame when position is not path-driven
    pub motion: Vector2,
    /// Chord that triggers `on_command`-style shortcuts for this actor
    pub command: Option<Command>,
    paths: AttributePaths,
    destroyed: bool,
}

impl Actor {
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            motion: Vector2::ZERO,
            command: None,
            paths: AttributePaths::default(),
            destroyed: false,
        }
    }

    pub fn with_motion(mut self, motion: Vector2) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    pub fn position(&self) -> Vector2 {
        self.shape.position()
    }

    pub fn set_position(&mut self, position: Vector2) {
        *self.shape.position_mut() = position;
    }

    /// Adds an impulse of `length` towards `angle` degrees.
    pub fn motion_add(&mut self, length: f32, angle: f32) {
        self.motion += Vector2::length_angle(length, angle);
    }

    pub fn responds_to(&self, command: &Command) -> bool {
        self.command.as_ref() == Some(command)
    }

    // -------------------------------------------------------------------------
    // Paths
    // -------------------------------------------------------------------------

    /// Binds `path` to `attr`, replacing any previous path. Playback starts
    /// at step 0 over one second at 60 fps; adjust it through the returned
    /// state.
    pub fn set_path(
        &mut self,
        attr: Attribute,
        path: impl Into<Path>,
        mode: AssignMode,
        repeats: i32,
    ) -> Result<&mut PathState, PathError> {
        let path = path.into();
        if path.kind() != attr.kind() {
            return Err(PathError::KindMismatch {
                target: attr.name(),
                expected: attr.kind(),
                found: path.kind(),
            });
        }
        if mode == AssignMode::VectorUpdate && attr.kind() != ValueKind::Vector {
            return Err(PathError::AssignModeMismatch { target: attr.name() });
        }

        log::debug!("path attached to {} ({} repeats)", attr.name(), repeats);
        let mut state = PathState::new(path, mode);
        state.set_animation(DEFAULT_STEPS, 1.0, repeats);
        Ok(self.paths.insert(attr, state))
    }

    /// Binds a looping path with direct assignment.
    pub fn set_looping_path(&mut self, attr: Attribute, path: impl Into<Path>) -> Result<&mut PathState, PathError> {
        self.set_path(attr, path, AssignMode::DirectValue, REPEAT_FOREVER)
    }

    pub fn clear_path(&mut self, attr: Attribute) -> Option<PathState> {
        let removed = self.paths.remove(attr);
        if removed.is_some() {
            log::debug!("path removed from {}", attr.name());
        }
        removed
    }

    pub fn path(&self, attr: Attribute) -> Option<&PathState> {
        self.paths.get(attr)
    }

    pub fn path_mut(&mut self, attr: Attribute) -> Option<&mut PathState> {
        self.paths.get_mut(attr)
    }

    pub fn paths(&self) -> &AttributePaths {
        &self.paths
    }

    /// Advances every running path one step and writes the sampled values.
    /// Returns the attributes whose animation finished this frame.
    pub fn animate(&mut self) -> Result<Vec<Attribute>, PathError> {
        let mut finished = Vec::new();

        for attr in Attribute::ALL {
            let Some(state) = self.paths.get_mut(attr) else { continue };
            if !state.is_animating() {
                continue;
            }
            if state.animate() {
                finished.push(attr);
            }
            let mode = state.mode();
            let value = state.position()?;
            self.assign(attr, value, mode)?;
        }

        for attr in &finished {
            log::debug!("animation on {} finished", attr.name());
        }
        Ok(finished)
    }

    fn assign(&mut self, attr: Attribute, value: PathValue, mode: AssignMode) -> Result<(), PathError> {
        let mismatch = || PathError::KindMismatch {
            target: attr.name(),
            expected: attr.kind(),
            found: value.kind(),
        };

        match attr {
            Attribute::Rotation => {
                let degrees = value.as_scalar().ok_or_else(mismatch)?;
                self.shape.set_rotation(degrees);
            }
            Attribute::Position | Attribute::Scale | Attribute::Motion => {
                let v = value.as_vector().ok_or_else(mismatch)?;
                let target = match attr {
                    Attribute::Position => self.shape.position_mut(),
                    Attribute::Scale => self.shape.scale_mut(),
                    _ => &mut self.motion,
                };
                match mode {
                    AssignMode::DirectValue => *target = v,
                    AssignMode::VectorUpdate => {
                        target.set(v);
                    }
                }
            }
            Attribute::FillColor | Attribute::LineColor => {
                let color: Color = value.as_color().ok_or_else(mismatch)?;
                if attr == Attribute::FillColor {
                    *self.shape.fill_mut() = color;
                } else {
                    *self.shape.line_mut() = color;
                }
            }
        }
        Ok(())
    }

    /// Integrates motion (unless a path drives position) and recomputes the
    /// shape against the camera position.
    pub fn update(&mut self, camera: Vector2) {
        if self.paths.get(Attribute::Position).is_none() {
            self.shape.translate(self.motion);
        }
        self.shape.update(camera);
    }

    // -------------------------------------------------------------------------
    // Lifetime
    // -------------------------------------------------------------------------

    /// Marks the actor for removal at the end of the current frame.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
