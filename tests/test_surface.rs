use plane_shooter::compute::{fire_bullet, new_session};
use plane_shooter::config::GameConfig;
use plane_shooter::entities::{Bullet, EnemyPlane, Rgb};
use plane_shooter::render::{draw_enemy, draw_frame, draw_player};
use plane_shooter::surface::*;

const RED: Rgb = Rgb::from_hex(0xff0000);

// ── PixelCanvas ───────────────────────────────────────────────────────────────

#[test]
fn fill_rect_covers_pixel_centres() {
    let mut canvas = PixelCanvas::new(10, 10);
    canvas.set_fill(RED);
    canvas.fill_rect(2.0, 2.0, 3.0, 3.0);

    assert_eq!(canvas.pixel(2, 2), Some(RED));
    assert_eq!(canvas.pixel(4, 4), Some(RED));
    assert_eq!(canvas.pixel(5, 5), Some(Rgb::BLACK));
    assert_eq!(canvas.pixel(1, 1), Some(Rgb::BLACK));
}

#[test]
fn fill_rect_is_clipped() {
    let mut canvas = PixelCanvas::new(10, 10);
    canvas.set_fill(RED);
    canvas.fill_rect(-5.0, -5.0, 7.0, 7.0);
    canvas.fill_rect(8.0, 8.0, 100.0, 100.0);

    assert_eq!(canvas.pixel(0, 0), Some(RED));
    assert_eq!(canvas.pixel(1, 1), Some(RED));
    assert_eq!(canvas.pixel(2, 2), Some(Rgb::BLACK));
    assert_eq!(canvas.pixel(9, 9), Some(RED));
    assert_eq!(canvas.pixel(10, 0), None);
}

#[test]
fn clear_rect_restores_background() {
    let mut canvas = PixelCanvas::new(4, 4);
    canvas.set_fill(RED);
    canvas.fill_rect(0.0, 0.0, 4.0, 4.0);
    canvas.clear_rect(0.0, 0.0, 2.0, 4.0);
    assert_eq!(canvas.pixel(1, 3), Some(Rgb::BLACK));
    assert_eq!(canvas.pixel(2, 0), Some(RED));
}

#[test]
fn triangle_path_fills_interior_only() {
    let mut canvas = PixelCanvas::new(10, 10);
    canvas.set_fill(RED);
    canvas.begin_path();
    canvas.move_to(0.0, 0.0);
    canvas.line_to(10.0, 0.0);
    canvas.line_to(0.0, 10.0);
    canvas.close_path();
    canvas.fill();

    assert_eq!(canvas.pixel(1, 1), Some(RED));
    assert_eq!(canvas.pixel(0, 8), Some(RED));
    assert_eq!(canvas.pixel(8, 8), Some(Rgb::BLACK));
    assert_eq!(canvas.pixel(9, 5), Some(Rgb::BLACK));
}

#[test]
fn degenerate_path_draws_nothing() {
    let mut canvas = PixelCanvas::new(4, 4);
    canvas.set_fill(RED);
    canvas.begin_path();
    canvas.move_to(0.0, 0.0);
    canvas.line_to(4.0, 4.0);
    canvas.fill();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(canvas.pixel(x, y), Some(Rgb::BLACK));
        }
    }
}

// ── Entity drawing ────────────────────────────────────────────────────────────

#[test]
fn player_is_body_plus_nose() {
    let cfg = GameConfig::default();
    let player = new_session(&cfg).player;
    let mut surface = RecordingSurface::new(480.0, 640.0);
    draw_player(&mut surface, &player);

    assert_eq!(
        surface.commands,
        vec![
            DrawCommand::FillRect {
                x: 215.0,
                y: 560.0,
                width: 50.0,
                height: 60.0,
                color: cfg.player_color,
            },
            DrawCommand::FillPath {
                subpaths: vec![vec![(240.0, 550.0), (215.0, 560.0), (265.0, 560.0)]],
                color: cfg.player_color,
            },
        ]
    );
}

#[test]
fn nose_tip_and_shot_origin_share_the_configured_height() {
    let cfg = GameConfig { nose_height: 24.0, ..GameConfig::default() };
    let player = new_session(&cfg).player;
    let mut surface = RecordingSurface::new(480.0, 640.0);
    draw_player(&mut surface, &player);

    let apex = match &surface.commands[1] {
        DrawCommand::FillPath { subpaths, .. } => subpaths[0][0],
        other => panic!("expected the nose path, got {other:?}"),
    };
    let shot = fire_bullet(&player, &cfg);
    assert_eq!(apex, (240.0, 536.0));
    assert_eq!(shot.y, apex.1);
    assert_eq!(shot.x + shot.width / 2.0, apex.0);
}

#[test]
fn enemy_is_body_plus_tail() {
    let enemy = EnemyPlane {
        x: 100.0,
        y: 20.0,
        width: 40.0,
        height: 50.0,
        speed: 3.0,
        hit_points: 1,
        color: RED,
    };
    let mut surface = RecordingSurface::new(480.0, 640.0);
    draw_enemy(&mut surface, &enemy);

    assert_eq!(
        surface.commands[1],
        DrawCommand::FillPath {
            subpaths: vec![vec![(120.0, 80.0), (110.0, 70.0), (130.0, 70.0)]],
            color: RED,
        }
    );
}

#[test]
fn enemy_tail_shows_up_on_the_canvas() {
    let enemy = EnemyPlane {
        x: 0.0,
        y: 0.0,
        width: 40.0,
        height: 50.0,
        speed: 3.0,
        hit_points: 1,
        color: RED,
    };
    let mut canvas = PixelCanvas::new(40, 70);
    draw_enemy(&mut canvas, &enemy);

    assert_eq!(canvas.pixel(20, 51), Some(RED)); // just under the body, centre
    assert_eq!(canvas.pixel(5, 51), Some(Rgb::BLACK)); // outside the tail base
    assert_eq!(canvas.pixel(20, 65), Some(Rgb::BLACK)); // below the tip
}

#[test]
fn frame_draws_every_entity() {
    let cfg = GameConfig::default();
    let mut state = new_session(&cfg);
    let bullet = Bullet {
        x: 10.0,
        y: 10.0,
        width: 4.0,
        height: 10.0,
        color: cfg.bullet_color,
        speed: 10.0,
    };
    state.player.bullets = vec![bullet.clone(), Bullet { x: 30.0, ..bullet }];
    state.enemies.push(EnemyPlane {
        x: 0.0,
        y: 0.0,
        width: 40.0,
        height: 50.0,
        speed: 2.0,
        hit_points: 1,
        color: cfg.enemy_color,
    });

    let mut surface = RecordingSurface::new(480.0, 640.0);
    draw_frame(&mut surface, &state);

    assert!(matches!(surface.commands[0], DrawCommand::Clear { .. }));
    assert_eq!(surface.fill_rects_of(cfg.player_color), 1);
    assert_eq!(surface.fill_rects_of(cfg.bullet_color), 2);
    assert_eq!(surface.fill_rects_of(cfg.enemy_color), 1);
    let paths = surface
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillPath { .. }))
        .count();
    assert_eq!(paths, 2);
}
