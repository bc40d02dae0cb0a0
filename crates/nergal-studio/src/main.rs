//! Headless studio run: assembles the demo stage and drives the player one
//! full patrol lap, recording draw commands instead of opening a window.

use std::time::Duration;

use anyhow::Result;
use nergal_memory::{StaticHandle, UniqueHandle};
use nergal_scene::actor::Actor;
use nergal_scene::component::{Shape, ShapeKind, Transform};
use nergal_scene::coords::Vec2;
use nergal_scene::draw::DrawSurface;
use nergal_scene::inspect;
use nergal_scene::logging::{LoggingConfig, init_logging};
use nergal_scene::notify::{Notifier, Severity};
use nergal_scene::resources::ResourceRegistry;
use nergal_scene::stage::Stage;
use nergal_scene::time::FrameClock;

/// Track corners the player visits, in patrol order.
const WAYPOINTS: [Vec2; 4] = [
    Vec2::new(25.0, 560.0),
    Vec2::new(25.0, 20.0),
    Vec2::new(700.0, 20.0),
    Vec2::new(700.0, 560.0),
];

const PLAYER_START: Vec2 = Vec2::new(650.0, 560.0);

/// Patrol speed in logical pixels per second.
const PATROL_SPEED: f32 = 200.0;

/// Distance at which a corner counts as reached.
const ARRIVAL_RANGE: f32 = 10.0;

/// Fixed simulation step; headless runs want identical laps every time.
const FRAME_STEP: Duration = Duration::from_millis(16);

/// Stall guard, roughly four times the frames one lap needs.
const FRAME_CAP: u64 = 4000;

const NOTIFICATION_LOG: &str = "Data.txt";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║        NERGAL STAGE PREVIEW v0.1       ║");
    println!("  ║   headless draw stream · no window     ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut notifier = Notifier::new();
    let outcome = run(&mut notifier);
    if let Err(error) = &outcome {
        notifier.push(Severity::Error, format!("studio run aborted: {error:#}"));
    }

    // The transcript is saved on both exits, so a failed run still leaves
    // its trace on disk.
    if let Err(save_error) = notifier.save_to_file(NOTIFICATION_LOG) {
        log::error!("could not save the notification log: {save_error:#}");
    }

    outcome
}

fn run(notifier: &mut Notifier) -> Result<()> {
    let mut registry = ResourceRegistry::new();

    let mut stage: StaticHandle<Stage> = StaticHandle::empty();
    stage.set(build_stage(&mut registry));
    notifier.push(Severity::Normal, "All programs were initialized correctly");

    let player = stage.find("Player");
    anyhow::ensure!(!player.is_null(), "stage has no Player actor");
    let steering = player.component::<Transform>();
    anyhow::ensure!(!steering.is_null(), "Player actor has no Transform");

    let mut surface = UniqueHandle::new(DrawSurface::new());
    let mut clock = FrameClock::fixed(FRAME_STEP);
    let mut patrol = Patrol::new();

    let frames = loop {
        let frame = clock.tick();
        stage.update(frame.dt);

        if let Some(corner) = patrol.drive(&steering, frame.dt) {
            notifier.push(
                Severity::Normal,
                format!("Player reached corner {corner} at frame {}", frame.frame_index),
            );
        }

        surface.clear();
        stage.render(&mut surface);

        if patrol.lap_complete() {
            break frame.frame_index + 1;
        }
        if frame.frame_index + 1 >= FRAME_CAP {
            notifier.push(Severity::Warning, "frame cap reached before the lap finished");
            break frame.frame_index + 1;
        }
    };

    log::info!(
        "lap finished in {frames} frame(s); last frame recorded {} draw command(s)",
        surface.len()
    );
    print!("{}", inspect::stage_outline(&stage));

    Ok(())
}

/// Spawns the demo cast: the stretched track backdrop, the patrolling
/// player, and two textured landmarks.
fn build_stage(registry: &mut ResourceRegistry) -> Stage {
    let mut stage = Stage::new();

    let track = stage.spawn(Actor::new("Track"));
    let shape = track.component::<Shape>();
    shape.create_shape(ShapeKind::Rectangle);
    shape.set_texture(registry.load_texture("Map002", "png"));
    track
        .component::<Transform>()
        .set_transform(Vec2::zero(), 0.0, Vec2::new(40.0, 60.0));

    let player = stage.spawn(Actor::new("Player"));
    let shape = player.component::<Shape>();
    shape.create_shape(ShapeKind::Circle);
    shape.set_texture(registry.load_texture("Playa2", "png"));
    player
        .component::<Transform>()
        .set_transform(PLAYER_START, 0.0, Vec2::one());

    let landmark = stage.spawn(Actor::new("Triangle"));
    let shape = landmark.component::<Shape>();
    shape.create_shape(ShapeKind::Triangle);
    shape.set_texture(registry.load_texture("jaua23", "png"));
    landmark
        .component::<Transform>()
        .set_transform(Vec2::new(150.0, 200.0), 0.0, Vec2::one());

    let square = stage.spawn(Actor::new("Square"));
    let shape = square.component::<Shape>();
    shape.create_shape(ShapeKind::Rectangle);
    shape.set_texture(registry.load_texture("SquareTexture", "png"));
    square
        .component::<Transform>()
        .set_transform(Vec2::new(300.0, 300.0), 0.0, Vec2::one());

    stage
}

/// Steers a transform through [`WAYPOINTS`] corner by corner, wrapping after
/// the last one.
struct Patrol {
    current: usize,
    visited: usize,
}

impl Patrol {
    fn new() -> Self {
        Self {
            current: 0,
            visited: 0,
        }
    }

    /// Seeks the current corner for one frame. Returns the corner's index
    /// when this frame arrived at it.
    fn drive(&mut self, transform: &Transform, dt: f32) -> Option<usize> {
        let target = WAYPOINTS[self.current];
        transform.seek(target, PATROL_SPEED, dt, ARRIVAL_RANGE);

        if transform.position().distance(target) <= ARRIVAL_RANGE {
            let reached = self.current;
            self.current = (self.current + 1) % WAYPOINTS.len();
            self.visited += 1;
            Some(reached)
        } else {
            None
        }
    }

    /// Whether every corner has been reached at least once.
    fn lap_complete(&self) -> bool {
        self.visited >= WAYPOINTS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ticks the patrol until it reports a corner, with a step budget.
    fn drive_to_next_corner(patrol: &mut Patrol, transform: &Transform) -> usize {
        for _ in 0..10_000 {
            if let Some(corner) = patrol.drive(transform, FRAME_STEP.as_secs_f32()) {
                return corner;
            }
        }
        panic!("patrol never arrived at corner {}", patrol.current);
    }

    #[test]
    fn patrol_visits_corners_in_order_and_wraps() {
        let transform = Transform::new();
        transform.set_position(PLAYER_START);
        let mut patrol = Patrol::new();

        for expected in [0, 1, 2, 3, 0] {
            assert_eq!(drive_to_next_corner(&mut patrol, &transform), expected);
        }
    }

    #[test]
    fn lap_completes_after_four_corners() {
        let transform = Transform::new();
        transform.set_position(PLAYER_START);
        let mut patrol = Patrol::new();

        for _ in 0..4 {
            assert!(!patrol.lap_complete());
            drive_to_next_corner(&mut patrol, &transform);
        }
        assert!(patrol.lap_complete());
    }

    #[test]
    fn arrival_leaves_the_player_near_the_corner() {
        let transform = Transform::new();
        transform.set_position(PLAYER_START);
        let mut patrol = Patrol::new();

        drive_to_next_corner(&mut patrol, &transform);
        assert!(transform.position().distance(WAYPOINTS[0]) <= ARRIVAL_RANGE);
    }

    #[test]
    fn demo_stage_spawns_the_full_cast() {
        let mut registry = ResourceRegistry::new();
        let stage = build_stage(&mut registry);

        assert_eq!(stage.len(), 4);
        for name in ["Track", "Player", "Triangle", "Square"] {
            assert!(!stage.find(name).is_null(), "missing actor '{name}'");
        }

        let track_shape = stage.find("Track").component::<Shape>();
        assert_eq!(track_shape.shape_kind(), ShapeKind::Rectangle);
        assert_eq!(track_shape.texture().file_name(), "Map002.png");
    }
}
