//! All game entity types — pure data, no game rules.
//!
//! Behaviour lives in `spawn`, `collision` and `compute`; this module only
//! describes what each entity carries between ticks.

use crate::geometry::Rect;

// ── Sprite bounding boxes (world units) ──────────────────────────────────────

pub const PLAYER_SIZE: (f32, f32) = (100.0, 100.0);
pub const BEAM_SIZE: (f32, f32) = (40.0, 40.0);
pub const ENEMY_SIZE: (f32, f32) = (70.0, 70.0);
pub const BOSS_SIZE: (f32, f32) = (210.0, 210.0);
pub const FLAME_SIZE: (f32, f32) = (40.0, 40.0);
pub const EXPLOSION_SIZE: (f32, f32) = (100.0, 100.0);

// ── Speeds (world units per tick) ────────────────────────────────────────────

pub const PLAYER_SPEED: f32 = 10.0;
pub const PLAYER_BOOST_SPEED: f32 = 20.0;
pub const BEAM_SPEED: f32 = 10.0;
pub const ENEMY_SPEED: f32 = 1.0;
pub const FLAME_SPEED: f32 = 5.0;

/// Number of enemy sprite variants.
pub const ENEMY_VARIANTS: u8 = 3;

// ── Facing ───────────────────────────────────────────────────────────────────

/// The eight directions the player sprite can face.
///
/// Discriminants double as indices into per-direction lookup tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right = 0,
    UpRight = 1,
    Up = 2,
    UpLeft = 3,
    Left = 4,
    DownLeft = 5,
    Down = 6,
    DownRight = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Screen-space step for this direction (y grows downward).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::UpRight => (1, -1),
            Direction::Up => (0, -1),
            Direction::UpLeft => (-1, -1),
            Direction::Left => (-1, 0),
            Direction::DownLeft => (-1, 1),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// `None` for the zero delta or anything outside {-1, 0, 1}².
    pub fn from_delta(delta: (i32, i32)) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.delta() == delta)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Counter-clockwise angle from +x, measured with y pointing up.
    pub fn angle_degrees(self) -> f32 {
        self.index() as f32 * 45.0
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerMode {
    Normal,
    /// Boosted mode, drawn with a filter until `hyper_life` runs out.
    Hyper,
}

/// Temporary face shown in place of the oriented sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    Sad,
    Happy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Last non-zero movement direction.
    pub direction: Direction,
    pub speed: f32,
    pub mode: PlayerMode,
    /// Remaining hyper ticks; -1 while normal.
    pub hyper_life: i32,
    /// Cleared as soon as the player moves again.
    pub reaction: Option<Reaction>,
}

// ── Projectiles ──────────────────────────────────────────────────────────────

/// Player-fired projectile.
#[derive(Clone, Debug, PartialEq)]
pub struct Beam {
    pub rect: Rect,
    /// Unit velocity.
    pub vx: f32,
    pub vy: f32,
    pub speed: f32,
}

/// Boss-fired projectile, aimed once when created.
#[derive(Clone, Debug, PartialEq)]
pub struct Flame {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub speed: f32,
}

// ── Enemies ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    /// Sprite variant, `0..ENEMY_VARIANTS`.
    pub variant: u8,
    pub vx: f32,
    pub vy: f32,
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    /// Ticks between flames.
    pub fire_interval: u64,
}

// ── Effects ──────────────────────────────────────────────────────────────────

/// Two-frame explosion flipbook.
#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub rect: Rect,
    /// Remaining ticks; removed once negative.
    pub life: i32,
}

impl Explosion {
    /// Which of the two flipbook frames is showing.
    pub fn frame(&self) -> usize {
        (self.life.max(0) / 10 % 2) as usize
    }
}

// ── Session state ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndCause {
    Quit,
    Defeated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Ended(EndCause),
}

/// The whole session.  Each entity is owned by exactly one collection.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub beams: Vec<Beam>,
    pub enemies: Vec<Enemy>,
    pub bosses: Vec<Boss>,
    pub flames: Vec<Flame>,
    pub explosions: Vec<Explosion>,
    pub status: GameStatus,
    /// Ticks processed so far.
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}
