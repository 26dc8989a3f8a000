//! Stand-in for the engine's arcade physics: gravity, Euler integration,
//! one-way platform landing, and AABB contact detection.
//!
//! The controller in [`crate::compute`] only assigns velocities and reacts
//! to the [`Contact`] events reported here; it never integrates positions
//! itself.

use crate::entities::{GameState, Platform};

// ── World tuning ──────────────────────────────────────────────────────────────

pub const WORLD_W: f32 = 800.0;
pub const WORLD_H: f32 = 600.0;

/// Downward acceleration in world units per second squared.
pub const GRAVITY: f32 = 300.0;

/// Fixed simulation step: one tick at 60 ticks per second.
pub const DT: f32 = 1.0 / 60.0;

// Body extents (AABB width × height, positions are centers)
pub const PLAYER_W: f32 = 32.0;
pub const PLAYER_H: f32 = 48.0;
pub const COLLECTOR_W: f32 = 32.0;
pub const COLLECTOR_H: f32 = 44.0;
pub const LOAF_W: f32 = 12.0;
pub const LOAF_H: f32 = 8.0;

/// The fixed stage: ground slab plus three floating platforms.
pub fn default_platforms() -> Vec<Platform> {
    vec![
        Platform { cx: 400.0, cy: 568.0, w: 800.0, h: 64.0 },
        Platform { cx: 600.0, cy: 400.0, w: 200.0, h: 20.0 },
        Platform { cx: 200.0, cy: 300.0, w: 200.0, h: 20.0 },
        Platform { cx: 400.0, cy: 200.0, w: 200.0, h: 20.0 },
    ]
}

// ── Integration ───────────────────────────────────────────────────────────────

/// Advance one falling body by a single tick.
///
/// Applies gravity, integrates, clamps to the side walls, and lands the
/// body on a platform top when it crosses one from above this tick.
/// Platforms are one-way: a body moving upward passes straight through.
/// Returns the new `(x, y, vy, grounded)`.
fn fall_step(
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    half_w: f32,
    half_h: f32,
    platforms: &[Platform],
) -> (f32, f32, f32, bool) {
    let mut vy = vy + GRAVITY * DT;
    let prev_bottom = y + half_h;

    let mut x = x + vx * DT;
    let mut y = y + vy * DT;

    // Side walls
    if x < half_w {
        x = half_w;
    } else if x > WORLD_W - half_w {
        x = WORLD_W - half_w;
    }

    let mut grounded = false;
    if vy >= 0.0 {
        // Of all platform tops crossed this tick, land on the highest one
        let mut landing: Option<f32> = None;
        for p in platforms {
            let top = p.top();
            if x + half_w > p.left()
                && x - half_w < p.right()
                && prev_bottom <= top
                && y + half_h >= top
            {
                landing = Some(landing.map_or(top, |best: f32| best.min(top)));
            }
        }
        if let Some(top) = landing {
            y = top - half_h;
            vy = 0.0;
            grounded = true;
        }
    }

    // The field floor is a last-resort support below the ground slab
    if y + half_h > WORLD_H {
        y = WORLD_H - half_h;
        vy = 0.0;
        grounded = true;
    }

    (x, y, vy, grounded)
}

/// Integrate every body by one tick.  Velocities are whatever the
/// controller assigned this frame; this function never changes `vx`.
pub fn step(state: &mut GameState) {
    let (x, y, vy, grounded) = fall_step(
        state.player.x,
        state.player.y,
        state.player.vx,
        state.player.vy,
        PLAYER_W / 2.0,
        PLAYER_H / 2.0,
        &state.platforms,
    );
    state.player.x = x;
    state.player.y = y;
    state.player.vy = vy;
    state.player.grounded = grounded;

    for i in 0..state.collectors.len() {
        let c = &state.collectors[i];
        let (x, y, vy, grounded) = fall_step(
            c.x,
            c.y,
            c.vx,
            c.vy,
            COLLECTOR_W / 2.0,
            COLLECTOR_H / 2.0,
            &state.platforms,
        );
        let c = &mut state.collectors[i];
        c.x = x;
        c.y = y;
        c.vy = vy;
        c.grounded = grounded;
    }

    // Loaves fly level and die at the field edges
    for loaf in &mut state.loaves {
        if !loaf.active {
            continue;
        }
        loaf.x += loaf.vx * DT;
        if loaf.x < 0.0 || loaf.x > WORLD_W {
            loaf.active = false;
        }
    }
}

// ── Contact detection ─────────────────────────────────────────────────────────

/// A contact observed this frame.  Indices refer to the pools as they
/// stand when [`contacts`] is called; the controller defers removal so
/// they stay valid for the whole pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// An active loaf overlaps a collector.
    LoafCollector { loaf: usize, collector: usize },
    /// A collector has reached the player.
    PlayerCollector,
}

fn overlaps(ax: f32, ay: f32, aw: f32, ah: f32, bx: f32, by: f32, bw: f32, bh: f32) -> bool {
    (ax - bx).abs() * 2.0 < aw + bw && (ay - by).abs() * 2.0 < ah + bh
}

/// Report every contact present in the current state.  At most one
/// collector per loaf; the player contact is reported once.
pub fn contacts(state: &GameState) -> Vec<Contact> {
    let mut events = Vec::new();

    for (li, loaf) in state.loaves.iter().enumerate() {
        if !loaf.active {
            continue;
        }
        for (ci, c) in state.collectors.iter().enumerate() {
            if overlaps(loaf.x, loaf.y, LOAF_W, LOAF_H, c.x, c.y, COLLECTOR_W, COLLECTOR_H) {
                events.push(Contact::LoafCollector { loaf: li, collector: ci });
                break;
            }
        }
    }

    let p = &state.player;
    for c in &state.collectors {
        if overlaps(p.x, p.y, PLAYER_W, PLAYER_H, c.x, c.y, COLLECTOR_W, COLLECTOR_H) {
            events.push(Contact::PlayerCollector);
            break;
        }
    }

    events
}
