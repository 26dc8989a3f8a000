use enflasyon_kackini::compute::init_state;
use enflasyon_kackini::entities::*;
use enflasyon_kackini::physics::{self, Contact};

fn collector_at(x: f32, y: f32) -> Collector {
    Collector {
        x,
        y,
        vx: 0.0,
        vy: 0.0,
        grounded: false,
        badge: None,
    }
}

// ── Falling & landing ─────────────────────────────────────────────────────────

#[test]
fn player_falls_and_lands_on_the_ground_slab() {
    let mut s = init_state(Mode::Chase); // player starts at (100, 450), in the air
    for _ in 0..300 {
        physics::step(&mut s);
    }
    assert!(s.player.grounded);
    assert_eq!(s.player.y, 512.0); // ground top 536 minus half the body height
    assert_eq!(s.player.vy, 0.0);
}

#[test]
fn collector_lands_on_a_floating_platform() {
    let mut s = init_state(Mode::Chase);
    // Above the (600, 400) platform, whose top is at 390
    s.collectors.push(collector_at(600.0, 360.0));
    for _ in 0..120 {
        physics::step(&mut s);
    }
    let c = &s.collectors[0];
    assert!(c.grounded);
    assert_eq!(c.y, 368.0); // 390 minus half the body height
}

#[test]
fn platforms_are_one_way_from_below() {
    let mut s = init_state(Mode::Chase);
    // Jumping up through the (200, 300) platform, top at 290
    s.player.x = 200.0;
    s.player.y = 320.0;
    s.player.vy = -200.0;

    physics::step(&mut s);
    assert!(!s.player.grounded); // passed through, no snag on the way up
    assert!(s.player.y < 320.0);

    // Falling back down it lands on the very platform it passed through
    for _ in 0..200 {
        physics::step(&mut s);
    }
    assert!(s.player.grounded);
    assert_eq!(s.player.y, 266.0); // 290 minus half the body height
}

#[test]
fn side_walls_clamp_horizontal_motion() {
    let mut s = init_state(Mode::Chase);
    s.player.x = 16.0; // already flush with the left wall
    s.player.vx = -160.0;
    physics::step(&mut s);
    assert_eq!(s.player.x, 16.0);

    s.player.x = 784.0;
    s.player.vx = 160.0;
    physics::step(&mut s);
    assert_eq!(s.player.x, 784.0);
}

#[test]
fn world_floor_is_a_last_resort_support() {
    let mut s = init_state(Mode::Chase);
    s.platforms.clear();
    for _ in 0..600 {
        physics::step(&mut s);
    }
    assert!(s.player.grounded);
    assert_eq!(s.player.y, 576.0); // 600 minus half the body height
}

// ── Loaf flight ───────────────────────────────────────────────────────────────

#[test]
fn loaf_flies_level() {
    let mut s = init_state(Mode::Armed);
    s.loaves.push(Loaf { x: 100.0, y: 300.0, vx: 400.0, active: true });
    physics::step(&mut s);
    let l = &s.loaves[0];
    assert!(l.active);
    assert_eq!(l.y, 300.0); // no gravity on loaves
    assert!((l.x - (100.0 + 400.0 * physics::DT)).abs() < 1e-3);
}

#[test]
fn loaf_despawns_at_the_field_edge() {
    let mut s = init_state(Mode::Armed);
    s.loaves.push(Loaf { x: 798.0, y: 300.0, vx: 400.0, active: true });
    physics::step(&mut s);
    assert!(!s.loaves[0].active);
}

// ── Contact detection ─────────────────────────────────────────────────────────

#[test]
fn player_collector_contact_is_reported() {
    let mut s = init_state(Mode::Chase);
    s.player.y = 512.0;
    s.collectors.push(collector_at(110.0, 514.0));
    let events = physics::contacts(&s);
    assert!(events.contains(&Contact::PlayerCollector));
}

#[test]
fn no_contact_when_everyone_is_apart() {
    let mut s = init_state(Mode::Chase);
    s.player.y = 512.0;
    s.collectors.push(collector_at(400.0, 514.0));
    assert!(physics::contacts(&s).is_empty());
}

#[test]
fn loaf_collector_contact_is_reported_with_indices() {
    let mut s = init_state(Mode::Armed);
    s.player.y = 512.0;
    s.collectors.push(collector_at(305.0, 514.0));
    s.loaves.push(Loaf { x: 300.0, y: 510.0, vx: 400.0, active: true });
    let events = physics::contacts(&s);
    assert_eq!(events, vec![Contact::LoafCollector { loaf: 0, collector: 0 }]);
}

#[test]
fn inactive_loaves_never_hit_anything() {
    let mut s = init_state(Mode::Armed);
    s.player.y = 512.0;
    s.collectors.push(collector_at(305.0, 514.0));
    s.loaves.push(Loaf { x: 305.0, y: 514.0, vx: 400.0, active: false });
    assert!(physics::contacts(&s).is_empty());
}
