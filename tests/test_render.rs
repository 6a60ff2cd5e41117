mod support;

use star_shooter::compute::init_state;
use star_shooter::config::Config;
use star_shooter::entities::*;
use star_shooter::render::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

use support::RecordingSurface;

fn empty_state() -> GameState {
    let config = Config { star_count: 0, ..Config::default() };
    init_state(&config, &mut StdRng::seed_from_u64(7))
}

fn busy_state() -> GameState {
    let mut s = empty_state();
    s.stars.push(Star { x: 10.0, y: 20.0, radius: 1.5, speed: 2.0 });
    s.stars.push(Star { x: 30.0, y: 40.0, radius: 2.5, speed: 1.0 });
    s.bullets.push(Bullet { x: 100.0, y: 200.0, speed: 10.0, width: 4.0, height: 15.0, half_extent: 2.0 });
    s.enemies.push(Enemy {
        x: 300.0,
        y: 150.0,
        kind: EnemyKind::Robot,
        size: 30.0,
        speed: 3.0,
        half_extent: 15.0,
    });
    s
}

#[test]
fn empty_field_still_draws_background_and_player() {
    let commands = frame(&empty_state());
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0], DrawCommand::Clear { color: C_BACKGROUND });
    assert!(matches!(commands[1], DrawCommand::FillPolygon { .. }));
}

#[test]
fn draws_back_to_front() {
    let commands = frame(&busy_state());
    assert_eq!(commands.len(), 6);
    assert!(matches!(commands[0], DrawCommand::Clear { .. }));
    assert!(matches!(commands[1], DrawCommand::FillCircle { .. }));
    assert!(matches!(commands[2], DrawCommand::FillCircle { .. }));
    assert!(matches!(commands[3], DrawCommand::FillPolygon { .. }));
    assert!(matches!(commands[4], DrawCommand::FillRect { .. }));
    assert!(matches!(commands[5], DrawCommand::FillText { .. }));
}

#[test]
fn star_is_a_white_circle_of_its_radius() {
    let commands = frame(&busy_state());
    assert_eq!(
        commands[1],
        DrawCommand::FillCircle { x: 10.0, y: 20.0, radius: 1.5, color: C_STAR }
    );
}

#[test]
fn player_is_an_upward_triangle() {
    let commands = frame(&empty_state()); // player at (400, 540), size 40
    assert_eq!(
        commands[1],
        DrawCommand::FillPolygon {
            points: vec![(400.0, 520.0), (380.0, 560.0), (420.0, 560.0)],
            color: C_PLAYER,
        }
    );
}

#[test]
fn bullet_is_a_vertical_bar_centred_on_x() {
    let commands = frame(&busy_state());
    assert_eq!(
        commands[4],
        DrawCommand::FillRect { x: 98.0, y: 200.0, w: 4.0, h: 15.0, color: C_BULLET }
    );
}

#[test]
fn enemy_is_its_glyph_at_its_position() {
    let commands = frame(&busy_state());
    match &commands[5] {
        DrawCommand::FillText { x, y, text, .. } => {
            assert_eq!((*x, *y), (300.0, 150.0));
            assert_eq!(text, EnemyKind::Robot.glyph());
        }
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn paint_replays_frame_onto_surface() {
    let state = busy_state();
    let mut surface = RecordingSurface::default();
    paint(&mut surface, &state);
    assert_eq!(surface.commands, frame(&state));
    assert_eq!(surface.frames, 1);
}

#[test]
fn rendering_does_not_touch_state() {
    let state = busy_state();
    let before = state.clone();
    let _ = frame(&state);
    let mut surface = RecordingSurface::default();
    paint(&mut surface, &state);
    assert_eq!(state, before);
}
