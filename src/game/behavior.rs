//! Actor callbacks
//!
//! A room drives each actor's [`Behavior`] at fixed points of the frame.
//! Every callback has an empty default, so a behavior only implements the
//! hooks it cares about. `G` is the game-wide context the caller threads
//! through `Room::update` (scene switching, score, quit flag and so on).

use macroquad::input::KeyCode;

use super::actor::{Actor, Attribute};
use super::entity::ActorId;
use super::view::View;
use crate::input::{Command, KeySnapshot, PointerPosition};
use crate::math::Vector2;
use crate::shape::Collision;

#[allow(unused_variables)]
pub trait Behavior<G> {
    /// Called once when the actor is added to a room.
    fn on_initialize(&mut self, actor: &mut Actor) {}

    /// A finite animation on `attr` reached its last step this frame.
    fn on_animation_end(&mut self, actor: &mut Actor, attr: Attribute, game: &mut G) {}

    /// `actor` overlaps `other`. Both actors of a pair receive the same
    /// record, whose axis points from the earlier actor in room order
    /// towards the later one.
    fn on_collision(
        &mut self,
        actor: &mut Actor,
        other_id: ActorId,
        other: &Actor,
        collision: &Collision,
        game: &mut G,
    ) {
    }

    /// Called every frame with the keys currently held.
    fn on_keydown(&mut self, actor: &mut Actor, keys: &KeySnapshot, game: &mut G) {}

    fn on_keyup(&mut self, actor: &mut Actor, key: KeyCode, game: &mut G) {}

    /// A key press decoded into a chord. Every actor sees every chord;
    /// compare with [`Actor::responds_to`] to filter.
    fn on_command(&mut self, actor: &mut Actor, command: &Command, game: &mut G) {}

    fn on_left_click(&mut self, actor: &mut Actor, pointer: &PointerPosition, game: &mut G) {}

    fn on_right_click(&mut self, actor: &mut Actor, pointer: &PointerPosition, game: &mut G) {}

    fn on_middle_click(&mut self, actor: &mut Actor, pointer: &PointerPosition, game: &mut G) {}

    fn on_roll_up(&mut self, actor: &mut Actor, pointer: &PointerPosition, game: &mut G) {}

    fn on_roll_down(&mut self, actor: &mut Actor, pointer: &PointerPosition, game: &mut G) {}

    fn on_mouse_move(&mut self, actor: &mut Actor, pointer: &PointerPosition, delta: Vector2, game: &mut G) {}

    fn on_enter_view(&mut self, actor: &mut Actor, view: &View, game: &mut G) {}

    fn on_leave_view(&mut self, actor: &mut Actor, view: &View, game: &mut G) {}

    /// Last hook before drawing, after collision and visibility. The view
    /// may be moved here (camera follow).
    fn on_prerender(&mut self, actor: &mut Actor, view: &mut View, game: &mut G) {}
}

/// Behavior that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passive;

impl<G> Behavior<G> for Passive {}
