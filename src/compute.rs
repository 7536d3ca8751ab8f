//! Pure game-logic functions.
//!
//! Every public function takes immutable inputs and returns a brand-new
//! value.  Side effects are limited to the injected RNG and `log` output.

use rand::Rng;

use crate::collision;
use crate::config::Settings;
use crate::entities::{
    Direction, EndCause, GameState, GameStatus, Player, PlayerMode, PLAYER_BOOST_SPEED,
    PLAYER_SIZE, PLAYER_SPEED,
};
use crate::geometry::{on_screen, Rect};
use crate::spawn;

// ── Input ────────────────────────────────────────────────────────────────────

/// Keys held down during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Modifier held: double speed, and fire becomes the spread attack.
    pub boost: bool,
}

impl HeldKeys {
    /// Sum of the unit steps of every held direction key.
    pub fn summed_delta(&self) -> (i32, i32) {
        let mut sum = (0, 0);
        for (held, dir) in [
            (self.up, Direction::Up),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ] {
            if held {
                let (dx, dy) = dir.delta();
                sum.0 += dx;
                sum.1 += dy;
            }
        }
        sum
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireCommand {
    /// One beam along the player's facing.
    Single,
    /// The multi-beam spread attack.
    Spread,
}

/// Everything the loop collected from the player for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickInput {
    pub keys: HeldKeys,
    /// Fire presses in arrival order.
    pub fire: Vec<FireCommand>,
    pub quit: bool,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the session state at game start.
pub fn init_state(settings: &Settings) -> GameState {
    GameState {
        player: Player {
            rect: Rect::from_center(settings.player_start, PLAYER_SIZE.0, PLAYER_SIZE.1),
            direction: Direction::Right,
            speed: PLAYER_SPEED,
            mode: PlayerMode::Normal,
            hyper_life: -1,
            reaction: None,
        },
        beams: Vec::new(),
        enemies: Vec::new(),
        bosses: Vec::new(),
        flames: Vec::new(),
        explosions: Vec::new(),
        status: GameStatus::Running,
        frame: 0,
        width: settings.width as f32,
        height: settings.height as f32,
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Set the player's mode and remaining hyper ticks.  No validation: an active
/// boost can be re-triggered or extended at will.
pub fn change_state(player: &Player, mode: PlayerMode, hyper_life: i32) -> Player {
    Player {
        mode,
        hyper_life,
        ..player.clone()
    }
}

/// Move the player by the held keys.
///
/// A move that would put any part of the sprite off-screen is rejected as a
/// whole, not clamped per axis.
pub fn update_player(player: &Player, keys: &HeldKeys, width: f32, height: f32) -> Player {
    let speed = if keys.boost {
        PLAYER_BOOST_SPEED
    } else {
        PLAYER_SPEED
    };
    let (dx, dy) = keys.summed_delta();

    let mut rect = player.rect;
    rect.move_by(speed * dx as f32, speed * dy as f32);
    if !on_screen(&rect, width, height) {
        rect = player.rect;
    }

    let mut next = Player {
        rect,
        speed,
        ..player.clone()
    };
    if let Some(direction) = Direction::from_delta((dx, dy)) {
        next.direction = direction;
        next.reaction = None;
    }
    if next.mode == PlayerMode::Hyper {
        next.hyper_life -= 1;
    }
    if next.hyper_life < 0 {
        next = change_state(&next, PlayerMode::Normal, -1);
    }
    next
}

/// Apply one fire press.
pub fn fire(state: &GameState, command: FireCommand, settings: &Settings) -> GameState {
    let mut beams = state.beams.clone();
    match command {
        FireCommand::Single => beams.push(spawn::beam(&state.player, 0.0)),
        FireCommand::Spread => {
            beams.extend(spawn::spread_beams(&state.player, settings.spread_count))
        }
    }
    GameState {
        beams,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// An ended session is returned unchanged.
pub fn tick(
    state: &GameState,
    input: &TickInput,
    settings: &Settings,
    rng: &mut impl Rng,
) -> GameState {
    if state.status != GameStatus::Running {
        return state.clone();
    }

    // ── 1. Quit ──────────────────────────────────────────────────────────────
    if input.quit {
        log::info!("quit requested at tick {}", state.frame);
        return GameState {
            status: GameStatus::Ended(EndCause::Quit),
            ..state.clone()
        };
    }

    // ── 2. Fire ──────────────────────────────────────────────────────────────
    let mut next = input
        .fire
        .iter()
        .fold(state.clone(), |s, &cmd| fire(&s, cmd, settings));

    // ── 3. Spawners ──────────────────────────────────────────────────────────
    next = spawn_wave(&next, settings, rng);

    // ── 4. Collisions ────────────────────────────────────────────────────────
    collision::player_vs_bosses(&mut next);
    collision::bosses_vs_beams(&mut next);
    if collision::player_vs_flames(&mut next) {
        log::info!("player hit by a flame at tick {}", next.frame);
        next.status = GameStatus::Ended(EndCause::Defeated);
        return next;
    }
    collision::flames_vs_beams(&mut next);

    // ── 5. Movement ──────────────────────────────────────────────────────────
    next.player = update_player(&next.player, &input.keys, next.width, next.height);
    advance_entities(&mut next);

    next.frame += 1;
    next
}

/// Timer-driven spawns for the current tick: enemies, bosses, then one flame
/// per live boss whose fire interval divides the tick.
pub fn spawn_wave(state: &GameState, settings: &Settings, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    let frame = next.frame;

    if frame % settings.enemy_interval == 0 {
        next.enemies.push(spawn::enemy(next.width, rng));
        log::debug!("tick {frame}: enemy spawned");
    }

    if frame % settings.boss_interval == 0 {
        if settings.allow_multiple_bosses || next.bosses.is_empty() {
            let boss = spawn::boss(
                next.width,
                next.height,
                settings.flame_interval,
                &next.player.rect,
                rng,
            );
            next.bosses.push(boss);
            log::debug!("tick {frame}: boss spawned");
        } else {
            log::debug!("tick {frame}: boss already alive, spawn skipped");
        }
    }

    let flames: Vec<_> = next
        .bosses
        .iter()
        .filter(|b| frame % b.fire_interval.max(1) == 0)
        .map(|b| spawn::flame(b, &next.player))
        .collect();
    next.flames.extend(flames);
    next
}

/// Move every non-player entity one step and drop whatever left the screen
/// or burnt out.
fn advance_entities(state: &mut GameState) {
    let (w, h) = (state.width, state.height);

    for beam in &mut state.beams {
        beam.rect.move_by(beam.speed * beam.vx, beam.speed * beam.vy);
    }
    state.beams.retain(|b| on_screen(&b.rect, w, h));

    for enemy in &mut state.enemies {
        enemy.rect.move_by(enemy.speed * enemy.vx, enemy.speed * enemy.vy);
    }
    state.enemies.retain(|e| on_screen(&e.rect, w, h));

    for explosion in &mut state.explosions {
        explosion.life -= 1;
    }
    state.explosions.retain(|e| e.life >= 0);

    for boss in &mut state.bosses {
        boss.rect.move_by(boss.vx, boss.vy);
    }
    state.bosses.retain(|b| on_screen(&b.rect, w, h));

    for flame in &mut state.flames {
        flame.rect.move_by(flame.speed * flame.vx, flame.speed * flame.vy);
    }
    state.flames.retain(|f| on_screen(&f.rect, w, h));
}
