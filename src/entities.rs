//! All game entity types — pure data, no logic.
//!
//! World coordinates are `f32` in an 800×600 field, origin top-left,
//! y growing downward.  Time is counted in frame ticks (60 per second);
//! the tick counter is the only time base in the whole simulation.

/// The two game variants, picked from the start menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Unarmed chase: outrun the collectors, score is seconds survived.
    Chase,
    /// Armed: throw loaves at the collectors, combat scoring.
    Armed,
}

/// How points are awarded.  The two policies are deliberately kept
/// separate instead of merged into one formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScorePolicy {
    /// +1 point per second survived.
    Survival,
    /// +50 per collector destroyed, +10 per second survived.
    Combat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// True while resting on a platform top (set by the physics step).
    pub grounded: bool,
    pub alive: bool,
}

// ── Collectors ────────────────────────────────────────────────────────────────

/// Decorative ₺ sign a collector carries.  Owned exclusively by its
/// collector and destroyed together with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub glyph: char,
}

/// A pursuing enemy.  Spawns at the top of the field and falls in.
#[derive(Clone, Debug, PartialEq)]
pub struct Collector {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub grounded: bool,
    /// Attached lazily the first frame the collector is grounded.
    pub badge: Option<Badge>,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A thrown loaf.  Flies level (no gravity) and deactivates on leaving
/// the field.  Lives in a bounded pool; inactive slots are reused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Loaf {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub active: bool,
}

// ── Static geometry ───────────────────────────────────────────────────────────

/// A static platform, stored as center + extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Platform {
    pub cx: f32,
    pub cy: f32,
    pub w: f32,
    pub h: f32,
}

impl Platform {
    pub fn top(&self) -> f32 {
        self.cy - self.h / 2.0
    }

    pub fn left(&self) -> f32 {
        self.cx - self.w / 2.0
    }

    pub fn right(&self) -> f32 {
        self.cx + self.w / 2.0
    }
}

// ── Input snapshot ────────────────────────────────────────────────────────────

/// Held-key snapshot handed to the controller once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub fire: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state.  Cloneable so the pure update function can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub collectors: Vec<Collector>,
    /// Bounded loaf pool — never grows past its cap, slots are reused.
    pub loaves: Vec<Loaf>,
    pub platforms: Vec<Platform>,
    /// The escalating bread price, in TL.  Never decreases.
    pub bread_price: u64,
    pub score: u32,
    /// Loaves in hand, always within [0, MAX_AMMO].  Unused in Chase mode.
    pub ammo: u32,
    /// Tick of the last accepted shot, for the fire cooldown.
    pub last_shot: Option<u64>,
    pub tick: u64,
    pub mode: Mode,
    pub status: GameStatus,
}
