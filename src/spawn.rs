//! Entity constructors.
//!
//! Everything random goes through the injected `rng`, so seeded callers get
//! reproducible waves.

use rand::Rng;

use crate::entities::{
    Beam, Boss, Enemy, Explosion, Flame, Player, BEAM_SIZE, BEAM_SPEED, BOSS_SIZE, ENEMY_SIZE,
    ENEMY_SPEED, ENEMY_VARIANTS, EXPLOSION_SIZE, FLAME_SIZE, FLAME_SPEED,
};
use crate::geometry::{calc_orientation, Rect};

/// First and last angle of the spread attack, in degrees.
pub const SPREAD_START: f32 = -50.0;
pub const SPREAD_END: f32 = 51.0;

/// Explosion lifetimes, in ticks.
pub const BOSS_EXPLOSION_LIFE: i32 = 100;
pub const FLAME_EXPLOSION_LIFE: i32 = 50;

// ── Beams ────────────────────────────────────────────────────────────────────

/// A beam fired along the player's facing, rotated by `offset` degrees.
///
/// It starts half a sprite away from the player's centre so it leaves from
/// the edge of the sprite.
pub fn beam(player: &Player, offset: f32) -> Beam {
    let angle = (player.direction.angle_degrees() + offset).to_radians();
    let vx = angle.cos();
    let vy = -angle.sin();
    let (cx, cy) = player.rect.center();
    let center = (
        cx + player.rect.w / 2.0 * vx,
        cy + player.rect.h / 2.0 * vy,
    );
    Beam {
        rect: Rect::from_center(center, BEAM_SIZE.0, BEAM_SIZE.1),
        vx,
        vy,
        speed: BEAM_SPEED,
    }
}

/// `n` angle offsets spread evenly from `SPREAD_START` to `SPREAD_END`.
pub fn spread_angles(n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let interval = (SPREAD_END - SPREAD_START) / (n - 1) as f32;
            (0..n).map(|i| SPREAD_START + i as f32 * interval).collect()
        }
    }
}

/// One beam per spread angle, all fired in the same tick.
pub fn spread_beams(player: &Player, n: usize) -> Vec<Beam> {
    spread_angles(n)
        .into_iter()
        .map(|offset| beam(player, offset))
        .collect()
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// An enemy entering along the top edge, drifting down and to the right.
pub fn enemy(width: f32, rng: &mut impl Rng) -> Enemy {
    let (w, h) = ENEMY_SIZE;
    let x = rng.gen_range(0.0..=(width - w).max(0.0));
    Enemy {
        rect: Rect::new(x, 0.0, w, h),
        variant: rng.gen_range(0..ENEMY_VARIANTS),
        vx: rng.gen_range(5..=10) as f32,
        vy: rng.gen_range(5..=10) as f32,
        speed: ENEMY_SPEED,
    }
}

/// Draws tried before a boss spawn gives up on keeping clear of the player.
pub const BOSS_PLACEMENT_ATTEMPTS: usize = 32;

/// `player` grown by a flame on every side.  A boss outside this area can
/// neither touch the player nor fire a flame that starts on top of them.
pub fn boss_exclusion_zone(player: &Rect) -> Rect {
    let (fw, fh) = FLAME_SIZE;
    Rect::new(
        player.x - fw,
        player.y - fh,
        player.w + 2.0 * fw,
        player.h + 2.0 * fh,
    )
}

/// A boss placed anywhere it fits fully on screen, away from `player`.
///
/// Falls back to the last draw when the world is too cramped to find a
/// clear spot.
pub fn boss(
    width: f32,
    height: f32,
    fire_interval: u64,
    player: &Rect,
    rng: &mut impl Rng,
) -> Boss {
    let (w, h) = BOSS_SIZE;
    let keep_clear = boss_exclusion_zone(player);
    let mut rect = Rect::new(0.0, 0.0, w, h);
    for _ in 0..BOSS_PLACEMENT_ATTEMPTS {
        let x = rng.gen_range(0.0..=(width - w).max(0.0));
        let y = rng.gen_range(0.0..=(height - h).max(0.0));
        rect = Rect::new(x, y, w, h);
        if !rect.colliderect(&keep_clear) {
            break;
        }
    }
    if rect.colliderect(&keep_clear) {
        log::debug!("no clear boss spawn found, placing it over the player");
    }
    Boss {
        rect,
        vx: 1.0,
        vy: 1.0,
        fire_interval,
    }
}

/// A flame leaving the bottom of `boss`, aimed at where the player is now.
pub fn flame(boss: &Boss, player: &Player) -> Flame {
    let (vx, vy) = calc_orientation(&boss.rect, &player.rect);
    let (cx, cy) = boss.rect.center();
    Flame {
        rect: Rect::from_center((cx, cy + boss.rect.h / 2.0), FLAME_SIZE.0, FLAME_SIZE.1),
        vx,
        vy,
        speed: FLAME_SPEED,
    }
}

// ── Effects ──────────────────────────────────────────────────────────────────

/// An explosion centred on whatever was just destroyed.
pub fn explosion(destroyed: &Rect, life: i32) -> Explosion {
    Explosion {
        rect: Rect::from_center(destroyed.center(), EXPLOSION_SIZE.0, EXPLOSION_SIZE.1),
        life,
    }
}
