//! spacegame demo
//!
//! One scene: a square whose scale loops along a path, a few spinning
//! rocks, and a player circle the camera follows. Arrow keys or WASD
//! steer, left click teleports, Escape quits.

use macroquad::prelude::*;

use spacegame::anim::{AssignMode, Path1d, Path2d, PathTone, REPEAT_FOREVER};
use spacegame::asset::AssetRegistry;
use spacegame::config::{EngineConfig, CONFIG_FILE};
use spacegame::game::renderer::{draw_room, draw_stats};
use spacegame::game::{Actor, ActorId, Anchor, Attribute, Behavior, EventQueue, Parallax, Room, View};
use spacegame::input::{Command, InputState, KeySnapshot, PointerPosition};
use spacegame::math::Vector2;
use spacegame::shape::{Circle, Collision, Polygon};

/// Player acceleration per frame
const THRUST: f32 = 0.4;
/// Fraction of motion kept every frame
const DRAG: f32 = 0.92;

/// Scene-wide state shared with every behavior.
#[derive(Debug, Default)]
struct Game {
    quit: bool,
    bumps: u32,
}

struct Player;

impl Behavior<Game> for Player {
    fn on_keydown(&mut self, actor: &mut Actor, keys: &KeySnapshot, _game: &mut Game) {
        let steer = [
            (&[KeyCode::Up, KeyCode::W], 270.0),
            (&[KeyCode::Down, KeyCode::S], 90.0),
            (&[KeyCode::Left, KeyCode::A], 180.0),
            (&[KeyCode::Right, KeyCode::D], 0.0),
        ];
        for (keys_for_dir, angle) in steer {
            if keys.any_down(keys_for_dir) {
                actor.motion_add(THRUST, angle);
            }
        }
        actor.motion *= DRAG;
    }

    fn on_command(&mut self, actor: &mut Actor, command: &Command, game: &mut Game) {
        if actor.responds_to(command) {
            log::info!("{} pressed, quitting", command);
            game.quit = true;
        }
    }

    fn on_left_click(&mut self, actor: &mut Actor, pointer: &PointerPosition, _game: &mut Game) {
        actor.set_position(pointer.room);
        actor.motion = Vector2::ZERO;
    }

    fn on_collision(
        &mut self,
        actor: &mut Actor,
        _other_id: ActorId,
        other: &Actor,
        collision: &Collision,
        game: &mut Game,
    ) {
        game.bumps += 1;
        actor.motion = actor.motion.negate();
        if let Some(mut axis) = collision.separating_axis {
            // Push the player away from the other actor
            if axis.dot(actor.position() - other.position()) < 0.0 {
                axis = -axis;
            }
            actor.shape.translate(axis * -collision.distance.min(0.0));
        }
    }

    fn on_prerender(&mut self, actor: &mut Actor, view: &mut View, _game: &mut Game) {
        view.follow(actor.position());
    }
}

struct Rock;

impl Behavior<Game> for Rock {
    fn on_enter_view(&mut self, actor: &mut Actor, _view: &View, _game: &mut Game) {
        actor.shape.fill_mut().a = 1.0;
    }

    fn on_leave_view(&mut self, actor: &mut Actor, _view: &View, _game: &mut Game) {
        actor.shape.fill_mut().a = 0.5;
    }
}

/// Square with a looping scale animation.
struct Square;

impl Behavior<Game> for Square {
    fn on_animation_end(&mut self, _actor: &mut Actor, attr: Attribute, _game: &mut Game) {
        log::debug!("square finished animating {}", attr.name());
    }
}

fn load_config() -> EngineConfig {
    EngineConfig::load_or_default(CONFIG_FILE).unwrap_or_else(|e| {
        eprintln!("ignoring {}: {}", CONFIG_FILE, e);
        EngineConfig::default()
    })
}

fn window_conf() -> Conf {
    load_config().window.conf()
}

fn build_room(config: &EngineConfig) -> Result<Room<Game>, spacegame::anim::PathError> {
    let size = Vector2::new(config.window.width as f32, config.window.height as f32);
    let mut view = View::new(Vector2::ZERO, size).with_anchor(Anchor::Middle);
    if config.textures.contains_key("stars") {
        view.add_parallax(Parallax::new("stars", Vector2::new(0.5, 0.5)));
    }
    let mut room = Room::new(view);

    let mut square = Actor::new(Polygon::square(Vector2::new(50.0, 50.0), 0.0, Vector2::new(20.0, 30.0)));
    let scale_path = Path2d::new(
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(50.0, 10.0),
            Vector2::new(10.0, 50.0),
            Vector2::new(100.0, 100.0),
            Vector2::new(0.0, 0.0),
        ],
        false,
    );
    square
        .set_path(Attribute::Scale, scale_path, AssignMode::VectorUpdate, REPEAT_FOREVER)?
        .set_animation(config.animation.frame_rate, config.animation.seconds, REPEAT_FOREVER);
    room.add(square, Square);

    for _ in 0..12 {
        let position = Vector2::random() * 1200.0 - Vector2::new(600.0, 600.0);
        let size = 20.0 + Vector2::random().x * 40.0;
        let mut rock = Actor::new(
            Polygon::new(
                position,
                0.0,
                Vector2::new(size, size),
                vec![
                    Vector2::new(0.0, -0.5),
                    Vector2::new(0.45, -0.2),
                    Vector2::new(0.3, 0.45),
                    Vector2::new(-0.3, 0.45),
                    Vector2::new(-0.45, -0.2),
                ],
            )
            .with_colors(Color::new(0.45, 0.35, 0.3, 0.5), LIGHTGRAY),
        )
        .with_motion(Vector2::random_normal() * 0.3);

        let closed = Vector2::random().x < 0.5;
        rock.set_looping_path(Attribute::Rotation, Path1d::new(vec![0.0, 360.0], closed))?
            .set_animation(config.animation.frame_rate, config.animation.seconds * 6.0, REPEAT_FOREVER);
        room.add(rock, Rock);
    }

    let mut player = Actor::new(Circle::new(Vector2::new(200.0, 200.0), 12.0).with_colors(SKYBLUE, WHITE))
        .with_command(Command::key(KeyCode::Escape));
    player
        .set_looping_path(Attribute::LineColor, PathTone::new(vec![WHITE, GOLD, ORANGE]))?
        .set_animation(config.animation.frame_rate, config.animation.seconds * 2.0, REPEAT_FOREVER);
    room.add(player, Player);

    Ok(room)
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = load_config();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let env = env_logger::Env::default().default_filter_or(config.log_filter.as_str());
        let _ = env_logger::Builder::from_env(env).try_init();
    }
    log::info!("spacegame v{}", spacegame::VERSION);

    let mut textures: AssetRegistry<Texture2D> = AssetRegistry::new();
    if let Err(e) = textures.load_textures(&config.textures).await {
        log::warn!("{}", e);
    }

    let mut room = match build_room(&config) {
        Ok(room) => room,
        Err(e) => {
            log::error!("failed to build scene: {}", e);
            return;
        }
    };

    let mut input = InputState::new();
    let mut events = EventQueue::new();
    let mut game = Game::default();

    loop {
        let frame_start = get_time();

        room.view_mut().resize(Vector2::new(screen_width(), screen_height()));
        let keys = input.poll(&mut events);
        if let Err(e) = room.update(&mut events, &keys, &mut game) {
            log::error!("frame {} aborted: {}", room.frame(), e);
            break;
        }
        if game.quit {
            break;
        }

        clear_background(Color::new(0.0, 0.0, 0.06, 1.0));
        draw_room(&room, &textures);
        draw_stats(&room, GRAY);

        #[cfg(not(target_arch = "wasm32"))]
        {
            let budget = 1.0 / config.frame_rate as f64;
            let elapsed = get_time() - frame_start;
            if elapsed < budget {
                std::thread::sleep(std::time::Duration::from_secs_f64(budget - elapsed));
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = frame_start;

        next_frame().await;
    }

    log::info!("bye after {} frames, {} bumps", room.frame(), game.bumps);
}
