use bird_survivor::compute::init_state;
use bird_survivor::config::Settings;
use bird_survivor::entities::*;
use bird_survivor::geometry::{on_screen, Rect};
use bird_survivor::spawn::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn player() -> Player {
    init_state(&Settings::default()).player // centre (900, 400), 100×100
}

// ── Spread ────────────────────────────────────────────────────────────────────

#[test]
fn spread_of_five_covers_the_arc() {
    let angles = spread_angles(5);
    let expected = [-50.0, -24.75, 0.5, 25.75, 51.0];
    assert_eq!(angles.len(), 5);
    for (got, want) in angles.iter().zip(expected) {
        assert!(approx(*got, want), "{angles:?}");
    }
}

#[test]
fn spread_of_two_is_the_endpoints() {
    assert_eq!(spread_angles(2), vec![-50.0, 51.0]);
}

#[test]
fn spread_degenerate_counts() {
    assert!(spread_angles(0).is_empty());
    assert_eq!(spread_angles(1), vec![0.0]);
}

#[test]
fn spread_beams_fan_out() {
    let beams = spread_beams(&player(), 5);
    assert_eq!(beams.len(), 5);
    // Facing right: the first beam leans down, the last leans up.
    assert!(beams[0].vy > 0.0);
    assert!(beams[4].vy < 0.0);
    for b in &beams {
        assert!(approx(b.vx * b.vx + b.vy * b.vy, 1.0));
    }
}

// ── Beam ──────────────────────────────────────────────────────────────────────

#[test]
fn beam_leaves_from_sprite_edge() {
    let b = beam(&player(), 0.0);
    assert!(approx(b.vx, 1.0));
    assert!(approx(b.vy, 0.0));
    let (cx, cy) = b.rect.center();
    assert!(approx(cx, 950.0));
    assert!(approx(cy, 400.0));
    assert_eq!(b.speed, BEAM_SPEED);
}

#[test]
fn beam_follows_facing() {
    let mut p = player();
    p.direction = Direction::Up;
    let b = beam(&p, 0.0);
    assert!(approx(b.vx, 0.0));
    assert!(approx(b.vy, -1.0));
    let (cx, cy) = b.rect.center();
    assert!(approx(cx, 900.0));
    assert!(approx(cy, 350.0));
}

#[test]
fn diagonal_beam_is_unit_speed() {
    let mut p = player();
    p.direction = Direction::DownLeft;
    let b = beam(&p, 0.0);
    let s = std::f32::consts::FRAC_1_SQRT_2;
    assert!(approx(b.vx, -s));
    assert!(approx(b.vy, s));
}

// ── Enemy / Boss ──────────────────────────────────────────────────────────────

#[test]
fn enemies_enter_along_the_top_edge() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let e = enemy(1600.0, &mut rng);
        assert_eq!(e.rect.top(), 0.0);
        assert!(on_screen(&e.rect, 1600.0, 900.0));
        assert!((5.0..=10.0).contains(&e.vx));
        assert!((5.0..=10.0).contains(&e.vy));
        assert!(e.variant < ENEMY_VARIANTS);
        assert_eq!(e.speed, ENEMY_SPEED);
    }
}

#[test]
fn bosses_spawn_fully_on_screen() {
    let mut rng = StdRng::seed_from_u64(11);
    let p = player();
    for _ in 0..200 {
        let b = boss(1600.0, 900.0, 50, &p.rect, &mut rng);
        assert!(on_screen(&b.rect, 1600.0, 900.0));
        assert_eq!((b.rect.w, b.rect.h), BOSS_SIZE);
        assert_eq!((b.vx, b.vy), (1.0, 1.0));
        assert_eq!(b.fire_interval, 50);
    }
}

#[test]
fn bosses_spawn_clear_of_the_player() {
    let p = player();
    let zone = boss_exclusion_zone(&p.rect);
    for seed in 0..500 {
        let mut rng = StdRng::seed_from_u64(seed);
        let b = boss(1600.0, 900.0, 50, &p.rect, &mut rng);
        assert!(!b.rect.colliderect(&zone), "seed {seed}: {:?}", b.rect);
        // Its first flame cannot start on top of the player either.
        assert!(!flame(&b, &p).rect.colliderect(&p.rect), "seed {seed}");
    }
}

#[test]
fn cramped_world_still_spawns_a_boss() {
    let mut rng = StdRng::seed_from_u64(3);
    let everywhere = Rect::new(0.0, 0.0, 300.0, 300.0);
    let b = boss(300.0, 300.0, 50, &everywhere, &mut rng);
    assert!(on_screen(&b.rect, 300.0, 300.0));
}

// ── Flame / Explosion ─────────────────────────────────────────────────────────

#[test]
fn flame_aims_at_player_from_boss_bottom() {
    let b = Boss {
        rect: Rect::from_center((600.0, 0.0), 210.0, 210.0),
        vx: 1.0,
        vy: 1.0,
        fire_interval: 50,
    };
    // Player centre (900, 400): offset (300, 400) from the boss centre.
    let f = flame(&b, &player());
    assert!(approx(f.vx, 0.6));
    assert!(approx(f.vy, 0.8));
    assert_eq!(f.rect.center(), (600.0, 105.0));
    assert_eq!(f.speed, FLAME_SPEED);
}

#[test]
fn explosion_is_centred_on_destroyed_entity() {
    let destroyed = Rect::new(100.0, 200.0, 210.0, 210.0);
    let e = explosion(&destroyed, BOSS_EXPLOSION_LIFE);
    assert_eq!(e.rect.center(), destroyed.center());
    assert_eq!(e.life, 100);
}
