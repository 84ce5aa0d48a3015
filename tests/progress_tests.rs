#![allow(dead_code)]
mod common;

use common::core::progress::*;
use common::{at_progress, metrics};

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn raw_progress_is_clamped() {
    assert_eq!(raw_progress(-50.0, 1000.0), 0.0);
    assert_eq!(raw_progress(0.0, 1000.0), 0.0);
    assert_eq!(raw_progress(500.0, 1000.0), 0.5);
    assert_eq!(raw_progress(1000.0, 1000.0), 1.0);
    assert_eq!(raw_progress(5000.0, 1000.0), 1.0);
}

#[test]
fn zero_or_invalid_extent_yields_zero() {
    assert_eq!(raw_progress(100.0, 0.0), 0.0);
    assert_eq!(raw_progress(100.0, -10.0), 0.0);
    assert_eq!(raw_progress(100.0, f64::NAN), 0.0);
    assert_eq!(raw_progress(f64::NAN, 100.0), 0.0);
}

#[test]
fn metrics_map_start_start_to_end_end() {
    // track top at viewport top
    assert_eq!(metrics(0.0, 5000.0, 1000.0).progress(), 0.0);
    // track not reached yet: top below the viewport top
    let before = ScrollMetrics {
        container_top: 300.0,
        container_height: 5000.0,
        viewport_height: 1000.0,
    };
    assert_eq!(before.progress(), 0.0);
    // bottom meets viewport bottom
    assert_eq!(metrics(4000.0, 5000.0, 1000.0).progress(), 1.0);
    assert!((metrics(1000.0, 5000.0, 1000.0).progress() - 0.25).abs() < 1e-6);
}

#[test]
fn container_no_taller_than_viewport_reports_zero() {
    let m = metrics(200.0, 800.0, 1000.0);
    assert_eq!(m.scrollable_extent(), 0.0);
    assert_eq!(m.progress(), 0.0);
}

#[test]
fn default_spring_is_overdamped_and_valid() {
    let p = SpringParams::default();
    assert!(p.validate().is_ok());
    assert!(p.damping_ratio() > 1.0);
}

#[test]
fn invalid_spring_params_are_rejected() {
    let mut p = SpringParams::default();
    p.mass = 0.0;
    assert!(p.validate().is_err());
    let mut p = SpringParams::default();
    p.stiffness = f32::NAN;
    assert!(p.validate().is_err());
    let mut p = SpringParams::default();
    p.damping = -1.0;
    assert!(p.validate().is_err());
}

#[test]
fn prime_adopts_position_without_animating() {
    let mut t = ProgressTracker::new(SpringParams::default());
    t.prime(at_progress(0.6));
    assert!((t.smoothed() - 0.6).abs() < 1e-6);
    assert!(t.is_settled());
    let after = t.advance(FRAME);
    assert!((after - 0.6).abs() < 1e-6);
}

#[test]
fn large_jump_moves_monotonically_without_overshoot() {
    let mut t = ProgressTracker::new(SpringParams::default());
    t.prime(at_progress(0.1));
    t.record(at_progress(0.9));

    let mut prev = t.smoothed();
    let mut settled_at = None;
    for frame in 0..300 {
        let p = t.advance(FRAME);
        assert!(p >= prev - 1e-6, "went backwards at frame {}: {} -> {}", frame, prev, p);
        assert!(p <= 0.9 + 1e-6, "overshot at frame {}: {}", frame, p);
        prev = p;
        if settled_at.is_none() && t.is_settled() {
            settled_at = Some(frame);
        }
    }
    assert!(settled_at.is_some(), "did not converge within 300 frames");
    assert!((t.smoothed() - 0.9).abs() < 1e-6);
}

#[test]
fn smoothing_lags_behind_a_jump() {
    let mut t = ProgressTracker::new(SpringParams::default());
    t.prime(at_progress(0.0));
    t.record(at_progress(1.0));
    let first = t.advance(FRAME);
    assert!(first > 0.0 && first < 0.1, "first frame moved {}", first);
}

#[test]
fn only_newest_raw_value_counts() {
    let mut a = ProgressTracker::new(SpringParams::default());
    let mut b = ProgressTracker::new(SpringParams::default());
    a.record(at_progress(0.2));
    a.record(at_progress(0.7));
    b.record(at_progress(0.7));
    for _ in 0..10 {
        assert_eq!(a.advance(FRAME), b.advance(FRAME));
    }
}

#[test]
fn trajectory_is_close_across_frame_rates() {
    let run = |fps: f32| {
        let mut t = ProgressTracker::new(SpringParams::default());
        t.record(at_progress(1.0));
        let frames = (fps * 0.5) as usize;
        for _ in 0..frames {
            t.advance(1.0 / fps);
        }
        t.smoothed()
    };
    let slow = run(30.0);
    let fast = run(120.0);
    assert!((slow - fast).abs() < 0.02, "30 fps {} vs 120 fps {}", slow, fast);
}

#[test]
fn long_stall_is_capped() {
    let mut t = ProgressTracker::new(SpringParams::default());
    t.record(at_progress(1.0));
    let p = t.advance(10.0);
    assert!(p.is_finite());
    assert!(p < 1.0);
}

#[test]
fn nan_and_negative_dt_do_not_move() {
    let mut t = ProgressTracker::new(SpringParams::default());
    t.record(at_progress(1.0));
    assert_eq!(t.advance(f32::NAN), 0.0);
    assert_eq!(t.advance(-1.0), 0.0);
}

#[test]
fn smoothed_value_stays_in_unit_range() {
    let mut t = ProgressTracker::new(SpringParams::default());
    for target in [1.0, 0.0, 1.0, 0.3, 0.0] {
        t.record(at_progress(target));
        for _ in 0..30 {
            let p = t.advance(FRAME);
            assert!((0.0..=1.0).contains(&p));
        }
    }
}
