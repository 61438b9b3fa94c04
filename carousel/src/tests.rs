use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_f64(&mut self, start: f64, end: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        start + (end - start) * unit
    }
}

const FRAME_MS: u64 = 16;

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Distance to the nearest equivalent point on the circle of circumference `half_width`.
fn wrapped_distance(a: f64, b: f64, half_width: f64) -> f64 {
    let d = (a - b).rem_euclid(half_width);
    d.min(half_width - d)
}

fn measured_engine(options: CarouselOptions, half_width: f64) -> Engine {
    let mut e = Engine::new(options);
    e.reset(3);
    e.set_half_width(half_width);
    e
}

/// Ticks every `FRAME_MS` from `from_ms` (exclusive) up to `to_ms` (inclusive).
fn run_frames(e: &mut Engine, from_ms: u64, to_ms: u64) {
    let mut now = from_ms;
    while now < to_ms {
        now = (now + FRAME_MS).min(to_ms);
        e.tick(now);
    }
}

#[test]
fn normalize_stays_in_half_open_range_and_is_idempotent() {
    let mut rng = Lcg::new(7);
    for _ in 0..10_000 {
        let half_width = rng.gen_f64(1.0, 5_000.0);
        let x = rng.gen_f64(-1.0e6, 1.0e6);
        let n = normalize(x, half_width);
        assert!(n > -half_width && n <= 0.0, "x={x} hw={half_width} n={n}");
        assert_eq!(normalize(n, half_width), n);
        assert!(wrapped_distance(n, x, half_width) < 1e-6);
    }
}

#[test]
fn normalize_edges() {
    assert_eq!(normalize(0.0, 900.0), 0.0);
    assert_eq!(normalize(-0.0, 900.0).to_bits(), 0.0f64.to_bits());
    assert_eq!(normalize(-900.0, 900.0), 0.0);
    assert_eq!(normalize(900.0, 900.0), 0.0);
    assert_eq!(normalize(10.0, 900.0), -890.0);
    assert_eq!(normalize(-910.0, 900.0), -10.0);
    // Tiny positive remainders must not round onto the excluded bound.
    let n = normalize(1e-14, 900.0);
    assert!(n > -900.0 && n <= 0.0);
    assert_eq!(normalize(f64::NAN, 900.0), 0.0);
}

#[test]
fn normalize_is_identity_until_measured() {
    assert_eq!(normalize(123.0, 0.0), 123.0);
    assert_eq!(normalize(-5_000.0, 0.0), -5_000.0);
    assert_eq!(normalize(42.0, f64::NAN), 42.0);
}

#[test]
fn position_model_renormalizes_when_modulus_shrinks() {
    let mut m = PositionModel::new();
    m.set(-50.0);
    assert_eq!(m.position(), 0.0, "writes are no-ops before measurement");

    m.set_half_width(900.0);
    m.set(-850.0);
    assert_eq!(m.position(), -850.0);

    m.set_half_width(600.0);
    assert!(approx(m.position(), -250.0, 1e-9));

    m.offset_by(-400.0);
    assert!(approx(m.position(), -50.0, 1e-9));
}

#[test]
fn loop_has_two_copies_with_stable_keys() {
    let items = ["a", "b", "c"];
    let looped = build_loop(&items);
    assert_eq!(looped.len(), 6);
    for i in 0..items.len() {
        assert_eq!(looped[i].item, looped[i + items.len()].item);
        assert_eq!(looped[i].source_index(items.len()), i);
        assert_eq!(looped[i + items.len()].source_index(items.len()), i);
    }
    let keys: Vec<_> = looped.iter().map(|it| it.key(|s| *s)).collect();
    assert_eq!(keys[1], ("b", 1));
    assert_eq!(keys[4], ("b", 4));
}

#[test]
fn loop_of_empty_list_is_empty() {
    let items: [u32; 0] = [];
    assert!(build_loop(&items).is_empty());
}

#[test]
fn size_oracle_reports_only_changes() {
    let mut oracle = SizeOracle::new();
    assert!(!oracle.extent().is_measured());
    assert_eq!(
        oracle.observe(1800.0),
        Some(TrackExtent { half_width: 900.0 })
    );
    assert_eq!(oracle.observe(1800.0), None);
    assert_eq!(oracle.observe(-1.0), Some(TrackExtent::default()));
    assert_eq!(oracle.observe(f64::INFINITY), None);
    assert_eq!(TrackExtent::estimate(3, 280.0, 20.0).half_width, 900.0);
}

#[test]
fn velocity_tracker_uses_latest_pair_and_detects_stop() {
    let mut t = VelocityTracker::new();
    t.add_sample(0, 100.0);
    t.add_sample(100, 55.0);
    assert!(approx(t.velocity(), -450.0, 1e-9));
    t.add_sample(150, 40.0);
    t.add_sample(150, 40.0);
    assert!(approx(t.velocity(), -300.0, 1e-9));
    assert!(approx(t.release_velocity(150, 100), -300.0, 1e-9));
    assert_eq!(t.release_velocity(400, 100), 0.0);
}

#[test]
fn click_guard_is_strictly_one_shot() {
    let mut g = ClickGuard::new();
    g.arm(100, 50);
    assert!(g.is_armed());
    assert!(g.take(110));
    assert!(!g.take(111));

    g.arm(200, 50);
    g.expire(250);
    assert!(g.is_armed());
    g.expire(251);
    assert!(!g.is_armed());
    assert!(!g.take(252));
}

#[test]
fn options_validate_and_sanitize() {
    assert!(CarouselOptions::banner().validate().is_ok());
    assert!(CarouselOptions::video().validate().is_ok());

    let bad = CarouselOptions::banner()
        .with_speed_seconds(0.0)
        .with_friction(1.5, 60.0);
    assert_eq!(bad.validate(), Err(OptionsError::Speed(0.0)));
    assert!(Engine::try_new(bad).is_err());

    let fixed = bad.sanitized();
    assert!(fixed.validate().is_ok());
    assert_eq!(fixed.speed_seconds, 30.0);
    assert_eq!(fixed.friction_per_tick, 0.92);

    let inverted = CarouselOptions::banner().with_release_velocity(10.0, 5.0);
    assert_eq!(
        inverted.validate(),
        Err(OptionsError::ReleaseVelocity {
            min: 10.0,
            max: 5.0
        })
    );

    // Without decay, momentum would never hand control back to auto-scroll.
    let frictionless = CarouselOptions::banner().with_friction(1.0, 60.0);
    assert_eq!(frictionless.validate(), Err(OptionsError::Friction(1.0)));
    assert_eq!(frictionless.sanitized().friction_per_tick, 0.92);
}

#[test]
fn engine_is_idle_until_measured() {
    let mut e = Engine::new(CarouselOptions::banner());
    e.reset(3);
    assert_eq!(e.tick(0), None);
    assert_eq!(e.tick(16), None);
    assert_eq!(e.dispatch(InputEvent::Wheel { delta: 100.0 }, 20), Dispatch::Handled);
    assert_eq!(e.position(), 0.0);

    e.observe_track_width(1800.0);
    assert_eq!(e.tick(32), Some(e.position()));
}

#[test]
fn auto_scroll_covers_one_half_width_per_speed_period() {
    let opts = CarouselOptions::banner().with_speed_seconds(30.0);
    let mut e = measured_engine(opts, 900.0);
    e.tick(0);
    run_frames(&mut e, 0, 30_000);
    assert!(
        wrapped_distance(e.position(), 0.0, 900.0) < 1e-6,
        "position={}",
        e.position()
    );
}

#[test]
fn scenario_idle_half_period() {
    let opts = CarouselOptions::banner().with_speed_seconds(30.0);
    let mut e = measured_engine(opts, 900.0);
    e.tick(0);
    run_frames(&mut e, 0, 15_000);
    assert!(approx(e.position(), -450.0, 1e-6), "position={}", e.position());
    assert_eq!(e.motion_owner(), MotionOwner::Auto);
}

#[test]
fn frame_dt_is_clamped() {
    let mut e = measured_engine(CarouselOptions::banner().with_speed_seconds(30.0), 900.0);
    e.tick(0);
    // A backgrounded tab: 10 s between frames moves at most `max_frame_dt` worth.
    e.tick(10_000);
    assert!(approx(e.position(), -900.0 / 30.0 * 0.1, 1e-9));
}

#[test]
fn hover_freezes_auto_scroll_and_leave_resumes() {
    let mut e = measured_engine(CarouselOptions::banner(), 900.0);
    e.tick(0);
    e.tick(100);
    let before = e.position();

    e.dispatch(InputEvent::PointerEnter, 100);
    assert_eq!(e.motion_owner(), MotionOwner::HoverPaused);
    run_frames(&mut e, 100, 2_000);
    assert_eq!(e.position(), before);

    e.dispatch(InputEvent::PointerLeave, 2_000);
    assert_eq!(e.motion_owner(), MotionOwner::Auto);
    e.tick(2_016);
    assert!(e.position() < before);
}

#[test]
fn scenario_drag_follows_pointer_then_seeds_momentum() {
    let mut e = measured_engine(CarouselOptions::banner(), 900.0);
    e.tick(0);
    assert_eq!(e.position(), 0.0);

    e.dispatch(InputEvent::PointerDown { x: 100.0 }, 0);
    assert_eq!(e.motion_owner(), MotionOwner::Dragging);
    assert_eq!(
        e.drag_anchor(),
        Some(DragAnchor {
            start_pointer_x: 100.0,
            start_position: 0.0
        })
    );

    e.dispatch(InputEvent::PointerMove { x: 55.0 }, 100);
    e.dispatch(InputEvent::PointerMove { x: 40.0 }, 150);
    assert_eq!(e.position(), normalize(-60.0, 900.0));
    assert_eq!(e.max_drag_displacement(), 60.0);

    // Frames during the drag leave the position alone.
    e.tick(140);
    assert_eq!(e.position(), -60.0);
    assert_eq!(e.velocity(), 0.0);

    let verdict = e.dispatch(InputEvent::PointerUp { x: 40.0 }, 150);
    assert_eq!(verdict, Dispatch::Gesture(GestureVerdict::Drag));
    assert!(approx(e.velocity(), -300.0, 1e-9));
    assert_eq!(e.motion_owner(), MotionOwner::HoverPaused);

    // v = v0 * f^t with f = 0.92^60 per second; the first frame after release covers the
    // 10 ms since the frame at 140 ms, then ten 100 ms frames follow.
    let friction = CarouselOptions::banner().friction_per_second();
    let mut last = e.position();
    e.tick(150);
    for i in 1..=10u64 {
        e.tick(150 + i * 100);
        assert!(e.position() != last || e.velocity() == 0.0);
        last = e.position();
    }
    let expected = -300.0 * friction.powf(1.01);
    assert!(approx(e.velocity(), expected, 1e-6), "v={}", e.velocity());
}

#[test]
fn momentum_decays_below_floor_then_auto_scroll_resumes() {
    let mut e = measured_engine(CarouselOptions::banner(), 900.0);
    e.tick(0);
    e.dispatch(InputEvent::PointerDown { x: 0.0 }, 0);
    e.dispatch(InputEvent::PointerMove { x: 200.0 }, 50);
    e.dispatch(InputEvent::PointerUp { x: 200.0 }, 50);
    e.dispatch(InputEvent::PointerLeave, 50);
    assert!(approx(e.velocity(), 4_000.0, 1e-9));
    assert_eq!(e.motion_owner(), MotionOwner::Auto);

    let mut now = 50;
    e.tick(now);
    while e.velocity() != 0.0 {
        now += FRAME_MS;
        e.tick(now);
        assert!(now < 10_000, "momentum never settled");
    }
    // Momentum moved the track forward; auto-scroll now moves it backward.
    let settled = e.position();
    now += FRAME_MS;
    e.tick(now);
    let step = wrapped_distance(e.position(), settled, 900.0);
    assert!(approx(step, 900.0 / 30.0 * 0.016, 1e-6));
}

#[test]
fn momentum_decay_is_frame_rate_independent() {
    let mut released = measured_engine(CarouselOptions::banner(), 900.0);
    released.dispatch(InputEvent::PointerDown { x: 0.0 }, 0);
    released.dispatch(InputEvent::PointerMove { x: 200.0 }, 50);
    released.dispatch(InputEvent::PointerUp { x: 200.0 }, 50);
    released.dispatch(InputEvent::PointerLeave, 50);
    assert!(approx(released.velocity(), 4_000.0, 1e-9));

    // The same 0.48 s at 60 Hz and at 120 Hz.
    let mut at_60 = released.clone();
    for _ in 0..30 {
        at_60.advance(0.016);
    }
    let mut at_120 = released.clone();
    for _ in 0..60 {
        at_120.advance(0.008);
    }

    let friction = CarouselOptions::banner().friction_per_second();
    let expected = 4_000.0 * friction.powf(0.48);
    assert!(expected > 1.0, "still coasting");
    assert!(approx(at_60.velocity(), expected, 1e-6), "v={}", at_60.velocity());
    assert!(approx(at_120.velocity(), expected, 1e-6), "v={}", at_120.velocity());

    // A per-frame factor would decay twice as fast at 120 Hz.
    let per_frame_at_120 = 4_000.0 * 0.92f64.powi(60);
    assert!(!approx(at_120.velocity(), per_frame_at_120, 1.0));
}

#[test]
fn slow_release_does_not_creep() {
    let mut e = measured_engine(CarouselOptions::banner(), 900.0);
    e.dispatch(InputEvent::PointerDown { x: 0.0 }, 0);
    e.dispatch(InputEvent::PointerMove { x: 30.0 }, 100);
    // Pointer held still for a while before lifting.
    e.dispatch(InputEvent::PointerUp { x: 30.0 }, 600);
    assert_eq!(e.velocity(), 0.0);

    let before = e.position();
    e.tick(600);
    e.tick(616);
    assert_eq!(e.position(), before, "hovered and no momentum");
}

#[test]
fn tap_below_threshold_allows_click() {
    let opts = CarouselOptions::banner().with_tap_threshold(5.0);
    let mut e = measured_engine(opts, 900.0);
    e.dispatch(InputEvent::PointerDown { x: 10.0 }, 0);
    e.dispatch(InputEvent::PointerMove { x: 13.0 }, 10);
    let up = e.dispatch(InputEvent::PointerUp { x: 12.0 }, 20);
    assert_eq!(up, Dispatch::Gesture(GestureVerdict::Tap));
    assert_eq!(e.max_drag_displacement(), 3.0);
    assert_eq!(
        e.dispatch(InputEvent::Click, 20),
        Dispatch::Click(ClickDecision::Allow)
    );
}

#[test]
fn drag_above_threshold_suppresses_exactly_one_click() {
    let opts = CarouselOptions::banner().with_tap_threshold(5.0);
    let mut e = measured_engine(opts, 900.0);
    e.dispatch(InputEvent::PointerDown { x: 10.0 }, 0);
    e.dispatch(InputEvent::PointerMove { x: 22.0 }, 10);
    let up = e.dispatch(InputEvent::PointerUp { x: 22.0 }, 20);
    assert_eq!(up, Dispatch::Gesture(GestureVerdict::Drag));
    assert_eq!(
        e.dispatch(InputEvent::Click, 20),
        Dispatch::Click(ClickDecision::Suppress)
    );
    for now in [21, 30, 500] {
        assert_eq!(
            e.dispatch(InputEvent::Click, now),
            Dispatch::Click(ClickDecision::Allow)
        );
    }
}

#[test]
fn click_guard_self_cancels_without_a_click() {
    let mut e = measured_engine(CarouselOptions::banner(), 900.0);
    e.dispatch(InputEvent::PointerDown { x: 0.0 }, 0);
    e.dispatch(InputEvent::PointerMove { x: 40.0 }, 10);
    e.dispatch(InputEvent::PointerCancel, 20);
    assert!(e.arbiter().is_click_guard_armed());

    e.tick(20);
    e.tick(200);
    assert!(!e.arbiter().is_click_guard_armed());
    assert_eq!(
        e.dispatch(InputEvent::Click, 300),
        Dispatch::Click(ClickDecision::Allow)
    );
}

#[test]
fn rapid_redrag_does_not_leak_suppression() {
    let mut e = measured_engine(CarouselOptions::banner(), 900.0);
    e.dispatch(InputEvent::PointerDown { x: 0.0 }, 0);
    e.dispatch(InputEvent::PointerMove { x: 40.0 }, 10);
    e.dispatch(InputEvent::PointerUp { x: 40.0 }, 20);
    assert!(e.arbiter().is_click_guard_armed());

    // Pressed again before the guard's deadline, then a clean tap.
    e.dispatch(InputEvent::PointerDown { x: 40.0 }, 25);
    assert!(!e.arbiter().is_click_guard_armed());
    let up = e.dispatch(InputEvent::PointerUp { x: 41.0 }, 30);
    assert_eq!(up, Dispatch::Gesture(GestureVerdict::Tap));
    assert_eq!(
        e.dispatch(InputEvent::Click, 30),
        Dispatch::Click(ClickDecision::Allow)
    );
}

#[test]
fn scenario_wheel_nudges_then_reverts_to_auto() {
    let opts = CarouselOptions::banner().with_wheel(0.9, 250);
    let mut e = measured_engine(opts, 900.0);
    e.tick(0);
    assert_eq!(e.position(), 0.0);

    assert_eq!(e.dispatch(InputEvent::Wheel { delta: 100.0 }, 0), Dispatch::Handled);
    assert!(approx(e.position(), -90.0, 1e-9));
    assert_eq!(e.motion_owner(), MotionOwner::HoverPaused);

    // Frozen during the idle window.
    let nudged = e.position();
    e.tick(100);
    e.tick(200);
    assert_eq!(e.position(), nudged);

    // A second wheel event re-arms the window.
    e.dispatch(InputEvent::Wheel { delta: 0.0 }, 200);
    e.tick(300);
    assert_eq!(e.motion_owner(), MotionOwner::HoverPaused);
    assert_eq!(e.position(), nudged);
    e.tick(450);
    assert_eq!(e.motion_owner(), MotionOwner::Auto);
    e.tick(466);
    assert!(e.position() < nudged);
}

#[test]
fn wheel_is_ignored_while_dragging() {
    let mut e = measured_engine(CarouselOptions::banner(), 900.0);
    e.dispatch(InputEvent::PointerDown { x: 0.0 }, 0);
    e.dispatch(InputEvent::PointerMove { x: -20.0 }, 10);
    assert_eq!(e.dispatch(InputEvent::Wheel { delta: 500.0 }, 12), Dispatch::Ignored);
    assert_eq!(e.position(), -20.0);
}

#[test]
fn suspend_freezes_and_resume_has_no_jump() {
    let mut e = measured_engine(CarouselOptions::banner(), 900.0);
    e.tick(0);
    e.tick(1_000);
    let frozen = e.position();

    e.set_suspended(true);
    for now in (1_016..5_000).step_by(16) {
        assert_eq!(e.tick(now), None);
    }
    assert_eq!(e.dispatch(InputEvent::PointerDown { x: 0.0 }, 5_000), Dispatch::Ignored);
    assert_eq!(e.dispatch(InputEvent::Wheel { delta: 50.0 }, 5_000), Dispatch::Ignored);
    assert_eq!(e.position(), frozen);

    e.set_suspended(false);
    assert_eq!(e.tick(60_000), Some(frozen));
    e.tick(60_016);
    assert!(approx(frozen - e.position(), 900.0 / 30.0 * 0.016, 1e-9));
}

#[test]
fn suspend_mid_drag_drops_the_drag_without_momentum() {
    let mut e = measured_engine(CarouselOptions::banner(), 900.0);
    e.dispatch(InputEvent::PointerEnter, 0);
    e.dispatch(InputEvent::PointerDown { x: 0.0 }, 0);
    e.dispatch(InputEvent::PointerMove { x: -100.0 }, 20);
    e.dispatch(InputEvent::Wheel { delta: 1.0 }, 20);
    e.set_suspended(true);
    assert_eq!(e.drag_anchor(), None);
    assert_eq!(e.velocity(), 0.0);
    assert!(!e.arbiter().is_click_guard_armed());
    e.set_suspended(false);
    assert_eq!(e.motion_owner(), MotionOwner::Auto);
}

#[test]
fn geometry_change_renormalizes_immediately() {
    let mut e = measured_engine(CarouselOptions::banner(), 900.0);
    e.dispatch(InputEvent::PointerDown { x: 0.0 }, 0);
    e.dispatch(InputEvent::PointerMove { x: -800.0 }, 10);
    assert_eq!(e.position(), -800.0);

    e.observe_track_width(1_200.0);
    assert_eq!(e.half_width(), 600.0);
    assert!(approx(e.position(), -200.0, 1e-9));
}

#[test]
fn reset_returns_to_origin_and_keeps_hover() {
    let mut e = measured_engine(CarouselOptions::banner(), 900.0);
    e.dispatch(InputEvent::PointerEnter, 0);
    e.dispatch(InputEvent::Wheel { delta: 200.0 }, 0);
    e.reset(5);
    assert_eq!(e.position(), 0.0);
    assert_eq!(e.velocity(), 0.0);
    assert_eq!(e.item_count(), 5);
    assert_eq!(e.motion_owner(), MotionOwner::HoverPaused);
}

#[test]
fn clear_input_drops_hover_momentum_and_timers() {
    let mut e = measured_engine(CarouselOptions::banner(), 900.0);
    e.dispatch(InputEvent::Wheel { delta: 10.0 }, 0);
    e.dispatch(InputEvent::PointerDown { x: 0.0 }, 10);
    e.dispatch(InputEvent::PointerMove { x: 200.0 }, 60);
    e.dispatch(InputEvent::PointerUp { x: 200.0 }, 60);
    assert!(e.velocity() > 0.0);
    assert!(e.arbiter().is_click_guard_armed());
    assert!(e.arbiter().wheel_resume_at_ms().is_some());
    assert_eq!(e.motion_owner(), MotionOwner::HoverPaused);

    let position = e.position();
    e.clear_input();
    assert_eq!(e.velocity(), 0.0);
    assert!(!e.arbiter().is_click_guard_armed());
    assert_eq!(e.arbiter().wheel_resume_at_ms(), None);
    assert_eq!(e.motion_owner(), MotionOwner::Auto);
    assert_eq!(e.position(), position);
}

#[test]
fn active_index_tracks_nearest_card_without_feedback() {
    let opts = CarouselOptions::video().with_card_width(280.0).with_gap(20.0);
    let mut e = measured_engine(opts, 900.0);
    assert_eq!(e.active_index(), Some(0));

    e.dispatch(InputEvent::PointerDown { x: 0.0 }, 0);
    e.dispatch(InputEvent::PointerMove { x: -290.0 }, 10);
    e.tick(10);
    assert_eq!(e.active_index(), Some(1));
    assert_eq!(e.position(), -290.0);

    e.dispatch(InputEvent::PointerMove { x: -880.0 }, 20);
    e.tick(20);
    assert_eq!(e.active_index(), Some(0), "slot 3 wraps to 0");

    let banner = measured_engine(CarouselOptions::banner(), 900.0);
    assert_eq!(banner.active_index(), None);
}

#[test]
fn state_snapshot_reflects_engine() {
    let mut e = measured_engine(CarouselOptions::video(), 900.0);
    e.dispatch(InputEvent::PointerDown { x: 5.0 }, 0);
    let s = e.state();
    assert_eq!(s.motion_owner, MotionOwner::Dragging);
    assert_eq!(s.half_width, 900.0);
    assert!(s.drag_anchor.is_some());
    assert!(!s.suspended);
    assert_eq!(s.active_index, Some(0));
}

#[test]
fn set_options_rederives_card_span() {
    let mut e = measured_engine(CarouselOptions::video(), 900.0);
    assert_eq!(e.card_span(), 336.0);
    e.set_options(CarouselOptions::video().with_card_width(280.0).with_gap(20.0));
    assert_eq!(e.card_span(), 300.0);
    e.set_options(CarouselOptions::video().with_card_width(-1.0));
    // Invalid width falls back to the banner width, the gap is kept.
    assert_eq!(e.card_span(), 280.0 + 16.0);
}

#[test]
fn example_banner_sim_smoke() {
    let options = CarouselOptions::banner();
    let mut e = Engine::new(options);
    e.reset(3);
    let extent = TrackExtent::estimate(3, options.card_width_px, options.gap_px);
    assert_eq!(extent.half_width, 900.0);
    e.observe_track_width(extent.half_width * 2.0);

    let mut released = None;
    for frame in 0..240u64 {
        let now = (frame + 1) * FRAME_MS;
        let d = match frame {
            60 => e.dispatch(InputEvent::PointerDown { x: 400.0 }, now),
            61..=70 => {
                let x = 400.0 + (frame - 60) as f64 * 25.0;
                e.dispatch(InputEvent::PointerMove { x }, now)
            }
            71 => e.dispatch(InputEvent::PointerUp { x: 675.0 }, now),
            72 => e.dispatch(InputEvent::PointerLeave, now),
            _ => Dispatch::Ignored,
        };
        if let Dispatch::Gesture(v) = d {
            released = Some((v, e.velocity()));
        }
        let p = e.tick(now).unwrap();
        assert!(p <= 0.0 && p > -900.0, "position {p} escaped the loop range");
    }

    let (verdict, velocity) = released.unwrap();
    assert_eq!(verdict, GestureVerdict::Drag);
    assert!(approx(velocity, 1562.5, 1e-9));
    assert_eq!(e.motion_owner(), MotionOwner::Auto);
}
