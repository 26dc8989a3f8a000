//! Pure game-logic functions — the per-frame state controller.
//!
//! Every public function takes an immutable reference to the current
//! [`GameState`] (and, where needed, an RNG handle) and returns a brand-new
//! state.  Side effects are limited to the injected RNG, so a seeded RNG
//! makes whole sessions reproducible tick for tick.

use rand::Rng;

use crate::entities::{
    Badge, Collector, GameState, GameStatus, InputState, Loaf, Mode, Player, ScorePolicy,
};
use crate::physics::{self, Contact};

// ── Tuning ────────────────────────────────────────────────────────────────────

pub const TICKS_PER_SECOND: u64 = 60;

/// Horizontal run speed, world units per second.
pub const PLAYER_RUN_SPEED: f32 = 160.0;
/// Jump impulse (negative is up).
pub const PLAYER_JUMP_SPEED: f32 = -330.0;
/// Hop impulse a grounded collector gets when the player is above it.
pub const COLLECTOR_JUMP_SPEED: f32 = -200.0;

/// Loaf muzzle velocity, always thrown forward.
pub const LOAF_SPEED: f32 = 400.0;
/// Loaf pool cap; slots are reused, the pool never grows past this.
pub const MAX_LOAVES: usize = 10;

pub const MAX_AMMO: u32 = 10;
/// Loaves handed back on every spawn interval (Armed mode).
pub const AMMO_REFILL: u32 = 5;
/// 500 ms between accepted shots, counted in ticks.
pub const FIRE_COOLDOWN_TICKS: u64 = 30;

/// Points for a collector destroyed by a loaf (combat scoring).
pub const KILL_SCORE: u32 = 50;

/// Where a run starts: 40 TL for a loaf of bread.
pub const STARTING_PRICE: u64 = 40;

// ── Mode tables ───────────────────────────────────────────────────────────────

/// Horizontal pursuit speed of a collector.
pub fn collector_speed(mode: Mode) -> f32 {
    match mode {
        Mode::Chase => 80.0,
        Mode::Armed => 100.0,
    }
}

/// Ticks between collector spawns; the bread price and the ammo refill
/// run on the same cadence.
pub fn spawn_interval(mode: Mode) -> u64 {
    match mode {
        Mode::Chase => 180,
        Mode::Armed => 300,
    }
}

pub fn score_policy(mode: Mode) -> ScorePolicy {
    match mode {
        Mode::Chase => ScorePolicy::Survival,
        Mode::Armed => ScorePolicy::Combat,
    }
}

/// Points granted every full second survived.
fn survival_points(mode: Mode) -> u32 {
    match score_policy(mode) {
        ScorePolicy::Survival => 1,
        ScorePolicy::Combat => 10,
    }
}

fn shooting_enabled(mode: Mode) -> bool {
    mode == Mode::Armed
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial state for a fresh run.
pub fn init_state(mode: Mode) -> GameState {
    GameState {
        player: Player {
            x: 100.0,
            y: 450.0,
            vx: 0.0,
            vy: 0.0,
            grounded: false,
            alive: true,
        },
        collectors: Vec::new(),
        loaves: Vec::with_capacity(MAX_LOAVES),
        platforms: physics::default_platforms(),
        bread_price: STARTING_PRICE,
        score: 0,
        ammo: if shooting_enabled(mode) { MAX_AMMO } else { 0 },
        last_shot: None,
        tick: 0,
        mode,
        status: GameStatus::Running,
    }
}

// ── Steering rules (pure) ────────────────────────────────────────────────────

/// Movement rule: vx is a ternary step of the held keys (left wins when
/// both are held); a jump impulse is applied only when up is held and the
/// player is grounded, so there is no mid-air double jump.
pub fn steer_player(player: &mut Player, input: &InputState) {
    player.vx = if input.left {
        -PLAYER_RUN_SPEED
    } else if input.right {
        PLAYER_RUN_SPEED
    } else {
        0.0
    };
    if input.up && player.grounded {
        player.vy = PLAYER_JUMP_SPEED;
    }
}

/// Pursuit rule: constant-speed sign-of-direction chase, plus a hop when
/// the player is above a grounded collector.
pub fn steer_collector(c: &mut Collector, player_x: f32, player_y: f32, speed: f32) {
    c.vx = if player_x > c.x { speed } else { -speed };
    if player_y < c.y && c.grounded {
        c.vy = COLLECTOR_JUMP_SPEED;
    }
}

// ── Economy rule (pure) ──────────────────────────────────────────────────────

/// One escalation step: `floor(price * (1 + u * 0.5))` for a uniform draw
/// `u` in [0, 1).  The price rises by up to 50% and never decreases.
pub fn escalate_price(price: u64, u: f64) -> u64 {
    (price as f64 * (1.0 + u * 0.5)).floor() as u64
}

// ── Per-frame tick (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by one tick.
///
/// Once the run is over the state is returned untouched: no rule executes
/// after the terminal transition.
pub fn tick(state: &GameState, input: &InputState, rng: &mut impl Rng) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    let mut next = state.clone();
    next.tick += 1;
    let now = next.tick;

    // ── 1. Movement rule ─────────────────────────────────────────────────────
    steer_player(&mut next.player, input);

    // ── 2. Pursuit rule ──────────────────────────────────────────────────────
    let (px, py) = (next.player.x, next.player.y);
    let speed = collector_speed(next.mode);
    for c in &mut next.collectors {
        steer_collector(c, px, py, speed);
        // A collector earns its ₺ badge the first time it lands
        if c.grounded && c.badge.is_none() {
            c.badge = Some(Badge { glyph: '₺' });
        }
    }

    // ── 3. Physics step ──────────────────────────────────────────────────────
    physics::step(&mut next);

    // ── 4. Fire rule ─────────────────────────────────────────────────────────
    if input.fire && shooting_enabled(next.mode) {
        try_fire(&mut next);
    }

    // ── 5. Contact handlers ──────────────────────────────────────────────────
    let contacts = physics::contacts(&next);
    apply_contacts(&mut next, &contacts);
    if next.status == GameStatus::GameOver {
        return next;
    }

    // ── 6. Spawn / price / ammo cadence ──────────────────────────────────────
    if now % spawn_interval(next.mode) == 0 {
        let x = rng.gen_range(0.0..physics::WORLD_W);
        next.collectors.push(Collector {
            x,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            grounded: false,
            badge: None,
        });
        next.bread_price = escalate_price(next.bread_price, rng.gen::<f64>());
        if shooting_enabled(next.mode) {
            next.ammo = (next.ammo + AMMO_REFILL).min(MAX_AMMO);
        }
    }

    // ── 7. Score cadence ─────────────────────────────────────────────────────
    if now % TICKS_PER_SECOND == 0 {
        next.score += survival_points(next.mode);
    }

    next
}

// ── Fire handling ────────────────────────────────────────────────────────────

/// Accept the shot only with ammo in hand, the cooldown elapsed, and a
/// pool slot free.  An accepted shot costs one loaf of ammo and activates
/// exactly one slot at the player's position.
fn try_fire(state: &mut GameState) {
    if state.ammo == 0 {
        return;
    }
    if let Some(last) = state.last_shot {
        if state.tick < last + FIRE_COOLDOWN_TICKS {
            return;
        }
    }

    let loaf = Loaf {
        x: state.player.x,
        y: state.player.y,
        vx: LOAF_SPEED,
        active: true,
    };
    if let Some(slot) = state.loaves.iter_mut().find(|l| !l.active) {
        *slot = loaf;
    } else if state.loaves.len() < MAX_LOAVES {
        state.loaves.push(loaf);
    } else {
        return;
    }

    state.ammo -= 1;
    state.last_shot = Some(state.tick);
}

// ── Contact outcomes ─────────────────────────────────────────────────────────

/// Resolve this frame's contacts.  Removal is deferred: hits are marked
/// during the pass and the collector pool is compacted once at the end,
/// so the contact indices stay valid throughout.
fn apply_contacts(state: &mut GameState, contacts: &[Contact]) {
    let mut killed: Vec<usize> = Vec::new();
    let mut spent: Vec<usize> = Vec::new();

    for contact in contacts {
        if let Contact::LoafCollector { loaf, collector } = contact {
            if killed.contains(collector) || spent.contains(loaf) {
                continue;
            }
            killed.push(*collector);
            spent.push(*loaf);
            if score_policy(state.mode) == ScorePolicy::Combat {
                state.score += KILL_SCORE;
            }
        }
    }

    for &i in &spent {
        state.loaves[i].active = false;
    }
    if !killed.is_empty() {
        state.collectors = state
            .collectors
            .iter()
            .enumerate()
            .filter(|(i, _)| !killed.contains(i))
            .map(|(_, c)| c.clone())
            .collect();
    }

    if contacts.iter().any(|c| matches!(c, Contact::PlayerCollector)) {
        catch_player(state);
    }
}

/// The terminal transition: the collectors got the player.  All motion
/// freezes and the status flips one-way to GameOver.
fn catch_player(state: &mut GameState) {
    state.status = GameStatus::GameOver;
    state.player.alive = false;
    state.player.vx = 0.0;
    state.player.vy = 0.0;
    for c in &mut state.collectors {
        c.vx = 0.0;
        c.vy = 0.0;
    }
    for loaf in &mut state.loaves {
        loaf.active = false;
    }
}
