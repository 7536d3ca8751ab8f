use bird_survivor::compute::{change_state, init_state};
use bird_survivor::config::Settings;
use bird_survivor::display::*;
use bird_survivor::entities::*;
use bird_survivor::geometry::Rect;

fn render_to_string(state: &GameState) -> String {
    let mut buf: Vec<u8> = Vec::new();
    render(&mut buf, state, 80, 24).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn viewport_maps_world_corners_into_play_area() {
    let state = init_state(&Settings::default());
    let view = Viewport::new(80, 24, &state);
    assert_eq!(view.cell((0.0, 0.0)), (1, 2));
    assert_eq!(view.cell((1600.0, 900.0)), (78, 21));
    assert_eq!(view.cell((800.0, 450.0)), (40, 12));
}

#[test]
fn player_drawn_with_facing_glyph() {
    let mut state = init_state(&Settings::default());
    let out = render_to_string(&state);
    assert!(out.contains('→'));

    state.player.direction = Direction::UpLeft;
    let out = render_to_string(&state);
    assert!(out.contains(PLAYER_GLYPHS[Direction::UpLeft.index()]));
}

#[test]
fn hyper_tag_shows_remaining_life() {
    let mut state = init_state(&Settings::default());
    state.player = change_state(&state.player, PlayerMode::Hyper, 42);
    let out = render_to_string(&state);
    assert!(out.contains("[HYPER  42]"));

    state.player = change_state(&state.player, PlayerMode::Normal, -1);
    let out = render_to_string(&state);
    assert!(!out.contains("[HYPER"));
}

#[test]
fn reaction_replaces_sprite() {
    let mut state = init_state(&Settings::default());
    state.player.reaction = Some(Reaction::Sad);
    let out = render_to_string(&state);
    assert!(out.contains("(T_T)"));
    assert!(!out.contains('→'));
}

#[test]
fn entities_and_hud_are_drawn() {
    let mut state = init_state(&Settings::default());
    state.frame = 123;
    state.flames.push(Flame {
        rect: Rect::from_center((100.0, 100.0), 40.0, 40.0),
        vx: 0.0,
        vy: 1.0,
        speed: FLAME_SPEED,
    });
    state.explosions.push(Explosion {
        rect: Rect::from_center((1200.0, 700.0), 100.0, 100.0),
        life: 100,
    });
    let out = render_to_string(&state);
    assert!(out.contains("Tick:   123"));
    assert!(out.contains('✹'));
    assert!(out.contains("✶✷✶"));
}

#[test]
fn game_over_overlay() {
    let mut state = init_state(&Settings::default());
    assert!(!render_to_string(&state).contains("GAME  OVER"));
    state.status = GameStatus::Ended(EndCause::Defeated);
    assert!(render_to_string(&state).contains("GAME  OVER"));
}
