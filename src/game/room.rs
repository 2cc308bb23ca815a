//! Room: the per-frame orchestrator
//!
//! A room owns a list of actors (each paired with its [`Behavior`]), the
//! [`View`] and the set of actors currently inside the view. One call to
//! [`Room::update`] runs a full frame in a fixed phase order:
//!
//! 1. Event dispatch: every queued input event goes to every actor
//! 2. Motion: view animation, then per actor `on_keydown`, path animation
//!    and motion integration
//! 3. Collision: every unordered pair, both actors notified
//! 4. Visibility: edge-triggered enter/leave against the view frustum
//! 5. Pre-render: last per-actor hook (camera follow)
//!
//! Actors marked with [`Actor::destroy`] or queued with [`Room::despawn`]
//! are removed after pre-render, so the actor list never changes while a
//! phase iterates it. Draw points are then synced to the final view
//! position.

use std::collections::HashSet;
use std::fmt;

use crate::anim::PathError;
use crate::input::{Command, InputEvent, KeySnapshot, PointerButton, PointerPosition};
use crate::shape::CollisionError;

use super::actor::Actor;
use super::behavior::Behavior;
use super::entity::{ActorAllocator, ActorId};
use super::event::EventQueue;
use super::view::View;

// =============================================================================
// Errors
// =============================================================================

/// Structural errors that abort a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    Path(PathError),
    Collision(CollisionError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Path(e) => write!(f, "animation error: {}", e),
            GameError::Collision(e) => write!(f, "collision error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Path(e) => Some(e),
            GameError::Collision(e) => Some(e),
        }
    }
}

impl From<PathError> for GameError {
    fn from(e: PathError) -> Self {
        GameError::Path(e)
    }
}

impl From<CollisionError> for GameError {
    fn from(e: CollisionError) -> Self {
        GameError::Collision(e)
    }
}

// =============================================================================
// Room
// =============================================================================

struct ActorSlot<G> {
    id: ActorId,
    actor: Actor,
    behavior: Box<dyn Behavior<G>>,
}

pub struct Room<G> {
    slots: Vec<ActorSlot<G>>,
    allocator: ActorAllocator,
    view: View,
    visible: HashSet<ActorId>,
    despawn_queue: Vec<ActorId>,
    frame: u64,
}

impl<G> Room<G> {
    /// Empty room looking through `view`.
    pub fn new(view: View) -> Self {
        Self {
            slots: Vec::new(),
            allocator: ActorAllocator::new(),
            view,
            visible: HashSet::new(),
            despawn_queue: Vec::new(),
            frame: 0,
        }
    }

    /// Appends an actor at the end of the update order.
    pub fn add(&mut self, mut actor: Actor, behavior: impl Behavior<G> + 'static) -> ActorId {
        let mut behavior: Box<dyn Behavior<G>> = Box::new(behavior);
        behavior.on_initialize(&mut actor);
        actor.shape.update(self.view.position());

        let id = self.allocator.allocate();
        self.slots.push(ActorSlot { id, actor, behavior });
        log::debug!("{} added ({} actors)", id, self.slots.len());
        id
    }

    /// Queues `id` for removal at the end of the next frame. Returns false
    /// for stale ids.
    pub fn despawn(&mut self, id: ActorId) -> bool {
        if !self.allocator.is_alive(id) {
            return false;
        }
        if !self.despawn_queue.contains(&id) {
            self.despawn_queue.push(id);
        }
        true
    }

    /// Removes every actor at once. The view is kept.
    pub fn clear(&mut self) {
        log::debug!("room cleared ({} actors)", self.slots.len());
        self.slots.clear();
        self.allocator.clear();
        self.visible.clear();
        self.despawn_queue.clear();
    }

    /// Actor behind `id`, if still in the room.
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.slots.iter().find(|s| s.id == id).map(|s| &s.actor)
    }

    /// Mutable actor behind `id`, if still in the room.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.slots.iter_mut().find(|s| s.id == id).map(|s| &mut s.actor)
    }

    /// Actors in update order.
    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.slots.iter().map(|s| (s.id, &s.actor))
    }

    /// Ids in update order.
    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.slots.iter().map(|s| s.id)
    }

    /// Whether `id` refers to a live actor.
    pub fn contains(&self, id: ActorId) -> bool {
        self.allocator.is_alive(id)
    }

    /// Number of actors, including ones awaiting removal.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no actors remain.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether `id` was inside the view at the last visibility phase.
    pub fn is_visible(&self, id: ActorId) -> bool {
        self.visible.contains(&id)
    }

    /// Number of actors inside the view.
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// The room's camera.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Mutable camera, for resizing or repositioning.
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Number of completed updates.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Runs one frame. `events` is drained; `keys` is the held-key state.
    ///
    /// Stops at the first structural error (empty path, unsupported shape
    /// pair); the room is left mid-frame in that case.
    pub fn update(
        &mut self,
        events: &mut EventQueue<InputEvent>,
        keys: &KeySnapshot,
        game: &mut G,
    ) -> Result<(), GameError> {
        self.dispatch_events(events, game);
        self.motion_phase(keys, game)?;
        let hits = self.collision_phase(game)?;
        self.visibility_phase(game)?;
        self.prerender_phase(game);
        let removed = self.flush_despawns();

        let camera = self.view.position();
        for slot in &mut self.slots {
            slot.actor.shape.sync_draw(camera);
        }

        self.frame += 1;
        log::trace!(
            "frame {}: {} actors, {} collisions, {} visible, {} removed",
            self.frame,
            self.slots.len(),
            hits,
            self.visible.len(),
            removed
        );
        Ok(())
    }

    fn dispatch_events(&mut self, events: &mut EventQueue<InputEvent>, game: &mut G) {
        for event in events.drain() {
            match event {
                InputEvent::KeyDown { key, modifiers } => {
                    let command = Command::decode(key, modifiers);
                    for slot in &mut self.slots {
                        slot.behavior.on_command(&mut slot.actor, &command, game);
                    }
                }
                InputEvent::KeyUp { key, .. } => {
                    for slot in &mut self.slots {
                        slot.behavior.on_keyup(&mut slot.actor, key, game);
                    }
                }
                InputEvent::MouseMove { position, delta } => {
                    let pointer = PointerPosition { room: self.view.to_room(position), view: position };
                    for slot in &mut self.slots {
                        slot.behavior.on_mouse_move(&mut slot.actor, &pointer, delta, game);
                    }
                }
                InputEvent::MouseDown { button, position } => {
                    let Some(button) = PointerButton::from_index(button) else {
                        log::warn!("ignoring unknown mouse button {}", button);
                        continue;
                    };
                    let pointer = PointerPosition { room: self.view.to_room(position), view: position };
                    for slot in &mut self.slots {
                        let (actor, behavior) = (&mut slot.actor, &mut slot.behavior);
                        match button {
                            PointerButton::Left => behavior.on_left_click(actor, &pointer, game),
                            PointerButton::Middle => behavior.on_middle_click(actor, &pointer, game),
                            PointerButton::Right => behavior.on_right_click(actor, &pointer, game),
                            PointerButton::WheelUp => behavior.on_roll_up(actor, &pointer, game),
                            PointerButton::WheelDown => behavior.on_roll_down(actor, &pointer, game),
                        }
                    }
                }
            }
        }
    }

    fn motion_phase(&mut self, keys: &KeySnapshot, game: &mut G) -> Result<(), GameError> {
        for attr in self.view.animate()? {
            log::debug!("view animation on {} finished", attr.name());
        }
        self.view.update();

        let camera = self.view.position();
        for slot in &mut self.slots {
            slot.behavior.on_keydown(&mut slot.actor, keys, game);
            for attr in slot.actor.animate()? {
                slot.behavior.on_animation_end(&mut slot.actor, attr, game);
            }
            slot.actor.update(camera);
        }
        Ok(())
    }

    /// Tests each unordered pair once. Actors already marked destroyed
    /// are skipped here and in the visibility phase.
    fn collision_phase(&mut self, game: &mut G) -> Result<usize, GameError> {
        let mut hits = 0;
        for i in 0..self.slots.len() {
            let (head, tail) = self.slots.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if a.actor.is_destroyed() || b.actor.is_destroyed() {
                    continue;
                }
                let collision = a.actor.shape.collide_with(&b.actor.shape)?;
                if !collision.overlapped {
                    continue;
                }
                hits += 1;
                a.behavior.on_collision(&mut a.actor, b.id, &b.actor, &collision, game);
                b.behavior.on_collision(&mut b.actor, a.id, &a.actor, &collision, game);
            }
        }
        Ok(hits)
    }

    fn visibility_phase(&mut self, game: &mut G) -> Result<(), GameError> {
        let view = &self.view;
        for slot in &mut self.slots {
            if slot.actor.is_destroyed() {
                continue;
            }
            let inside = view.frustum().collide_with(&slot.actor.shape)?.overlapped;
            let was_inside = self.visible.contains(&slot.id);

            if inside && !was_inside {
                self.visible.insert(slot.id);
                log::debug!("{} entered view", slot.id);
                slot.behavior.on_enter_view(&mut slot.actor, view, game);
            } else if !inside && was_inside {
                self.visible.remove(&slot.id);
                log::debug!("{} left view", slot.id);
                slot.behavior.on_leave_view(&mut slot.actor, view, game);
            }
        }
        Ok(())
    }

    fn prerender_phase(&mut self, game: &mut G) {
        for slot in &mut self.slots {
            slot.behavior.on_prerender(&mut slot.actor, &mut self.view, game);
        }
    }

    /// Removes destroyed and queued actors. Returns how many were removed.
    fn flush_despawns(&mut self) -> usize {
        let queued = std::mem::take(&mut self.despawn_queue);
        let before = self.slots.len();

        let allocator = &mut self.allocator;
        let visible = &mut self.visible;
        self.slots.retain(|slot| {
            let remove = slot.actor.is_destroyed() || queued.contains(&slot.id);
            if remove {
                allocator.free(slot.id);
                visible.remove(&slot.id);
                log::debug!("{} removed", slot.id);
            }
            !remove
        });

        before - self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{AssignMode, Path1d, Path2d, REPEAT_FOREVER};
    use crate::game::actor::Attribute;
    use crate::game::behavior::Passive;
    use crate::input::Modifiers;
    use crate::math::Vector2;
    use crate::shape::{Circle, Collision, Polygon, ShapeKind};
    use macroquad::input::KeyCode;

    /// Everything the test behaviors observed, in call order.
    #[derive(Default)]
    struct Journal {
        entries: Vec<(&'static str, String)>,
        quit: bool,
    }

    impl Journal {
        fn count(&self, name: &str, event: &str) -> usize {
            self.entries.iter().filter(|(n, e)| *n == name && e == event).count()
        }
    }

    struct Recorder {
        name: &'static str,
        destroy_on_collision: bool,
    }

    impl Recorder {
        fn new(name: &'static str) -> Self {
            Self { name, destroy_on_collision: false }
        }
    }

    impl Behavior<Journal> for Recorder {
        fn on_animation_end(&mut self, _actor: &mut Actor, attr: Attribute, game: &mut Journal) {
            game.entries.push((self.name, format!("end:{}", attr.name())));
        }

        fn on_collision(
            &mut self,
            actor: &mut Actor,
            other_id: ActorId,
            _other: &Actor,
            _collision: &Collision,
            game: &mut Journal,
        ) {
            game.entries.push((self.name, format!("hit:{}", other_id)));
            if self.destroy_on_collision {
                actor.destroy();
            }
        }

        fn on_command(&mut self, actor: &mut Actor, command: &Command, game: &mut Journal) {
            game.entries.push((self.name, format!("cmd:{}", command)));
            if actor.responds_to(command) {
                game.quit = true;
            }
        }

        fn on_keyup(&mut self, _actor: &mut Actor, key: KeyCode, game: &mut Journal) {
            game.entries.push((self.name, format!("up:{:?}", key)));
        }

        fn on_left_click(&mut self, _actor: &mut Actor, pointer: &PointerPosition, game: &mut Journal) {
            game.entries.push((self.name, format!("left:{}", pointer.room)));
        }

        fn on_right_click(&mut self, _actor: &mut Actor, pointer: &PointerPosition, game: &mut Journal) {
            game.entries.push((self.name, format!("right:{}", pointer.room)));
        }

        fn on_middle_click(&mut self, _actor: &mut Actor, pointer: &PointerPosition, game: &mut Journal) {
            game.entries.push((self.name, format!("middle:{}", pointer.room)));
        }

        fn on_roll_up(&mut self, _actor: &mut Actor, _pointer: &PointerPosition, game: &mut Journal) {
            game.entries.push((self.name, "roll_up".to_string()));
        }

        fn on_roll_down(&mut self, _actor: &mut Actor, _pointer: &PointerPosition, game: &mut Journal) {
            game.entries.push((self.name, "roll_down".to_string()));
        }

        fn on_mouse_move(&mut self, _actor: &mut Actor, pointer: &PointerPosition, delta: Vector2, game: &mut Journal) {
            game.entries.push((self.name, format!("move:{}:{}:{}", pointer.room, pointer.view, delta)));
        }

        fn on_keydown(&mut self, _actor: &mut Actor, keys: &KeySnapshot, game: &mut Journal) {
            if keys.is_down(KeyCode::W) {
                game.entries.push((self.name, "held:W".to_string()));
            }
        }

        fn on_enter_view(&mut self, _actor: &mut Actor, _view: &View, game: &mut Journal) {
            game.entries.push((self.name, "enter".to_string()));
        }

        fn on_leave_view(&mut self, _actor: &mut Actor, _view: &View, game: &mut Journal) {
            game.entries.push((self.name, "leave".to_string()));
        }
    }

    /// Logs one entry per callback kind, to check phase order.
    struct Tracer(&'static str);

    impl Behavior<Journal> for Tracer {
        fn on_command(&mut self, _actor: &mut Actor, _command: &Command, game: &mut Journal) {
            game.entries.push((self.0, "command".to_string()));
        }

        fn on_keydown(&mut self, _actor: &mut Actor, _keys: &KeySnapshot, game: &mut Journal) {
            game.entries.push((self.0, "keydown".to_string()));
        }

        fn on_collision(
            &mut self,
            _actor: &mut Actor,
            _other_id: ActorId,
            _other: &Actor,
            _collision: &Collision,
            game: &mut Journal,
        ) {
            game.entries.push((self.0, "collision".to_string()));
        }

        fn on_enter_view(&mut self, _actor: &mut Actor, _view: &View, game: &mut Journal) {
            game.entries.push((self.0, "enter".to_string()));
        }

        fn on_prerender(&mut self, _actor: &mut Actor, _view: &mut View, game: &mut Journal) {
            game.entries.push((self.0, "prerender".to_string()));
        }
    }

    struct Follow;

    impl Behavior<Journal> for Follow {
        fn on_prerender(&mut self, actor: &mut Actor, view: &mut View, _game: &mut Journal) {
            view.follow(actor.position());
        }
    }

    fn room() -> Room<Journal> {
        Room::new(View::new(Vector2::ZERO, Vector2::new(100.0, 100.0)))
    }

    fn square_at(x: f32, y: f32) -> Actor {
        Actor::new(Polygon::square(Vector2::new(x, y), 0.0, Vector2::new(10.0, 10.0)))
    }

    fn step(room: &mut Room<Journal>, game: &mut Journal) {
        room.update(&mut EventQueue::new(), &KeySnapshot::new(), game).unwrap();
    }

    #[test]
    fn test_visibility_is_edge_triggered() {
        let mut room = room();
        let mut game = Journal::default();
        let id = room.add(square_at(-50.0, 50.0).with_motion(Vector2::new(10.0, 0.0)), Recorder::new("ship"));

        for _ in 0..4 {
            step(&mut room, &mut game);
        }
        assert!(!room.is_visible(id));
        assert_eq!(game.count("ship", "enter"), 0);

        // Enters on frame 5 and stays inside for several frames
        for _ in 0..8 {
            step(&mut room, &mut game);
        }
        assert!(room.is_visible(id));
        assert_eq!(game.count("ship", "enter"), 1);
        assert_eq!(game.count("ship", "leave"), 0);

        for _ in 0..8 {
            step(&mut room, &mut game);
        }
        assert!(!room.is_visible(id));
        assert_eq!(game.count("ship", "enter"), 1);
        assert_eq!(game.count("ship", "leave"), 1);
    }

    #[test]
    fn test_frame_runs_phases_in_order() {
        let mut room = room();
        let mut game = Journal::default();
        room.add(square_at(20.0, 20.0), Tracer("a"));
        room.add(square_at(24.0, 20.0), Tracer("b"));

        let mut events = EventQueue::new();
        events.send(InputEvent::KeyDown { key: KeyCode::Space, modifiers: Modifiers::NONE });
        room.update(&mut events, &KeySnapshot::new(), &mut game).unwrap();

        let seen: Vec<(&str, &str)> = game.entries.iter().map(|(n, e)| (*n, e.as_str())).collect();
        assert_eq!(
            seen,
            vec![
                ("a", "command"),
                ("b", "command"),
                ("a", "keydown"),
                ("b", "keydown"),
                ("a", "collision"),
                ("b", "collision"),
                ("a", "enter"),
                ("b", "enter"),
                ("a", "prerender"),
                ("b", "prerender"),
            ]
        );
    }

    #[test]
    fn test_view_paths_animate_during_update() {
        let mut room = room();
        let mut game = Journal::default();
        room.view_mut()
            .body_mut()
            .set_path(
                Attribute::Position,
                Path2d::new(vec![Vector2::ZERO, Vector2::new(40.0, 0.0)], false),
                AssignMode::DirectValue,
                0,
            )
            .unwrap()
            .set_animation(5, 1.0, 0);

        step(&mut room, &mut game);
        step(&mut room, &mut game);
        assert!((room.view().position() - Vector2::new(20.0, 0.0)).length() < 1e-4);

        for _ in 0..4 {
            step(&mut room, &mut game);
        }
        assert!((room.view().position() - Vector2::new(40.0, 0.0)).length() < 1e-4);
        assert!(!room.view().body().path(Attribute::Position).unwrap().is_animating());
    }

    #[test]
    fn test_keydown_sees_held_keys() {
        let mut room = room();
        let mut game = Journal::default();
        room.add(square_at(0.0, 0.0), Recorder::new("pilot"));

        step(&mut room, &mut game);
        assert_eq!(game.count("pilot", "held:W"), 0);

        let mut keys = KeySnapshot::new();
        keys.press(KeyCode::W);
        room.update(&mut EventQueue::new(), &keys, &mut game).unwrap();
        room.update(&mut EventQueue::new(), &keys, &mut game).unwrap();
        assert_eq!(game.count("pilot", "held:W"), 2);

        keys.release(KeyCode::W);
        room.update(&mut EventQueue::new(), &keys, &mut game).unwrap();
        assert_eq!(game.count("pilot", "held:W"), 2);
    }

    #[test]
    fn test_collision_pairs_are_unique_and_never_self() {
        let mut room = room();
        let mut game = Journal::default();
        let a = room.add(square_at(10.0, 10.0), Recorder::new("a"));
        let b = room.add(square_at(12.0, 10.0), Recorder::new("b"));
        let c = room.add(square_at(14.0, 10.0), Recorder::new("c"));
        let far = room.add(square_at(80.0, 80.0), Recorder::new("far"));

        step(&mut room, &mut game);

        let hits: Vec<_> = game.entries.iter().filter(|(_, e)| e.starts_with("hit:")).collect();
        assert_eq!(hits.len(), 6);
        for (name, own) in [("a", a), ("b", b), ("c", c)] {
            assert_eq!(game.count(name, &format!("hit:{}", own)), 0);
        }
        assert_eq!(game.count("a", &format!("hit:{}", b)), 1);
        assert_eq!(game.count("b", &format!("hit:{}", a)), 1);
        assert_eq!(game.count("c", &format!("hit:{}", a)), 1);
        assert_eq!(game.entries.iter().filter(|(n, e)| *n == "far" && e.starts_with("hit:")).count(), 0);
        assert!(room.contains(far));
    }

    #[test]
    fn test_scale_animation_scenario() {
        let mut room = room();
        let mut game = Journal::default();
        let mut square = Actor::new(Polygon::square(Vector2::new(50.0, 50.0), 0.0, Vector2::new(20.0, 30.0)));
        let points = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(50.0, 10.0),
            Vector2::new(10.0, 50.0),
            Vector2::new(100.0, 100.0),
            Vector2::new(0.0, 0.0),
        ];
        let steps = square
            .set_path(Attribute::Scale, Path2d::new(points, false), AssignMode::VectorUpdate, REPEAT_FOREVER)
            .unwrap()
            .steps();
        let id = room.add(square, Recorder::new("square"));

        for _ in 0..steps {
            step(&mut room, &mut game);
        }
        assert_eq!(room.actor(id).unwrap().shape.scale(), Vector2::ZERO);

        for _ in 0..steps * 10 {
            step(&mut room, &mut game);
        }
        assert_eq!(game.count("square", "end:scale"), 0);
        assert!(room.actor(id).unwrap().path(Attribute::Scale).unwrap().is_animating());
    }

    #[test]
    fn test_one_shot_animation_notifies_behavior() {
        let mut room = room();
        let mut game = Journal::default();
        let mut actor = square_at(50.0, 50.0);
        actor
            .set_path(Attribute::Rotation, Path1d::new(vec![0.0, 45.0], false), AssignMode::DirectValue, 0)
            .unwrap()
            .set_animation(5, 1.0, 0);
        room.add(actor, Recorder::new("spinner"));

        for _ in 0..10 {
            step(&mut room, &mut game);
        }
        assert_eq!(game.count("spinner", "end:rotation"), 1);
    }

    #[test]
    fn test_key_events_become_commands() {
        let mut room = room();
        let mut game = Journal::default();
        room.add(square_at(0.0, 0.0).with_command(Command::key(KeyCode::Escape)), Recorder::new("menu"));
        room.add(square_at(50.0, 0.0), Recorder::new("other"));

        let mut events = EventQueue::new();
        events.send(InputEvent::KeyDown { key: KeyCode::S, modifiers: Modifiers::ctrl() });
        events.send(InputEvent::KeyUp { key: KeyCode::S, modifiers: Modifiers::NONE });
        room.update(&mut events, &KeySnapshot::new(), &mut game).unwrap();
        assert!(events.is_empty());
        assert!(!game.quit);
        assert_eq!(game.count("menu", "cmd:LeftControl+S"), 1);
        assert_eq!(game.count("other", "cmd:LeftControl+S"), 1);
        assert_eq!(game.count("other", "up:S"), 1);

        events.send(InputEvent::KeyDown { key: KeyCode::Escape, modifiers: Modifiers::NONE });
        room.update(&mut events, &KeySnapshot::new(), &mut game).unwrap();
        assert!(game.quit);
    }

    #[test]
    fn test_mouse_buttons_use_room_coordinates() {
        let mut room = room();
        let mut game = Journal::default();
        room.view_mut().set_position(Vector2::new(100.0, 0.0));
        room.add(square_at(0.0, 0.0), Recorder::new("ui"));

        let mut events = EventQueue::new();
        events.send(InputEvent::MouseDown { button: 1, position: Vector2::new(10.0, 10.0) });
        events.send(InputEvent::MouseDown { button: 2, position: Vector2::new(20.0, 5.0) });
        events.send(InputEvent::MouseDown { button: 3, position: Vector2::new(0.0, 30.0) });
        events.send(InputEvent::MouseDown { button: 4, position: Vector2::ZERO });
        events.send(InputEvent::MouseDown { button: 5, position: Vector2::ZERO });
        events.send(InputEvent::MouseDown { button: 9, position: Vector2::ZERO });
        events.send(InputEvent::MouseMove { position: Vector2::new(15.0, 25.0), delta: Vector2::new(3.0, -2.0) });
        room.update(&mut events, &KeySnapshot::new(), &mut game).unwrap();

        assert_eq!(game.count("ui", "left:(110.0000, 10.0000)"), 1);
        assert_eq!(game.count("ui", "middle:(120.0000, 5.0000)"), 1);
        assert_eq!(game.count("ui", "right:(100.0000, 30.0000)"), 1);
        assert_eq!(game.count("ui", "roll_up"), 1);
        assert_eq!(game.count("ui", "roll_down"), 1);
        assert_eq!(
            game.count("ui", "move:(115.0000, 25.0000):(15.0000, 25.0000):(3.0000, -2.0000)"),
            1
        );
        assert_eq!(game.entries.len(), 6);
    }

    #[test]
    fn test_destroyed_actors_are_removed_after_the_frame() {
        let mut room = room();
        let mut game = Journal::default();
        let bullet = room.add(
            square_at(50.0, 50.0),
            Recorder { name: "bullet", destroy_on_collision: true },
        );
        let wall = room.add(square_at(52.0, 50.0), Recorder::new("wall"));

        step(&mut room, &mut game);
        assert!(!room.contains(bullet));
        assert!(room.actor(bullet).is_none());
        assert!(!room.is_visible(bullet));
        assert_eq!(room.len(), 1);
        assert_eq!(game.count("bullet", "leave"), 0);
        assert_eq!(game.count("bullet", "enter"), 0);
        assert_eq!(game.count("wall", "enter"), 1);

        assert!(room.despawn(wall));
        assert!(room.contains(wall));
        step(&mut room, &mut game);
        assert!(room.is_empty());
        assert_eq!(room.visible_count(), 0);
        assert!(!room.despawn(wall));

        // New actor may reuse the slot but never the id
        let next = room.add(square_at(0.0, 0.0), Passive);
        assert_ne!(next, bullet);
        assert_ne!(next, wall);
    }

    #[test]
    fn test_prerender_follow_syncs_draw_points() {
        let mut room = room();
        let mut game = Journal::default();
        let id = room.add(Actor::new(Circle::new(Vector2::new(500.0, 500.0), 4.0)), Follow);

        step(&mut room, &mut game);
        assert_eq!(room.view().position(), Vector2::new(450.0, 450.0));
        match &room.actor(id).unwrap().shape {
            crate::shape::Shape::Circle(c) => assert_eq!(c.draw_position(), Vector2::new(50.0, 50.0)),
            crate::shape::Shape::Polygon(_) => unreachable!(),
        }
    }

    #[test]
    fn test_structural_errors_abort_the_frame() {
        let mut room = room();
        let mut game = Journal::default();
        room.add(
            Actor::new(Polygon::new(Vector2::ZERO, 0.0, Vector2::ONE, vec![Vector2::ZERO])),
            Passive,
        );
        let err = room.update(&mut EventQueue::new(), &KeySnapshot::new(), &mut game).unwrap_err();
        assert_eq!(
            err,
            GameError::Collision(CollisionError::UnsupportedShapePair {
                first: ShapeKind::Polygon,
                second: ShapeKind::Point,
            })
        );

        room.clear();
        let mut actor = square_at(0.0, 0.0);
        actor.set_looping_path(Attribute::Position, Path2d::new(Vec::new(), false)).unwrap();
        room.add(actor, Passive);
        let err = room.update(&mut EventQueue::new(), &KeySnapshot::new(), &mut game).unwrap_err();
        assert!(matches!(err, GameError::Path(PathError::Empty { .. })));
    }

    #[test]
    fn test_clear_keeps_view() {
        let mut room = room();
        room.view_mut().set_position(Vector2::new(7.0, 7.0));
        let id = room.add(square_at(0.0, 0.0), Passive);
        room.clear();
        assert!(room.is_empty());
        assert!(!room.contains(id));
        assert_eq!(room.view().position(), Vector2::new(7.0, 7.0));
    }
}
