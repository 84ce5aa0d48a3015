#![allow(dead_code)]
mod common;

use common::core::constants::AMBIENT_DENSITY_PEAK;
use common::core::quality::*;
use common::core::scene::*;

const FRAME: f32 = 1.0 / 60.0;
const SURFACE: Option<SurfaceSize> = Some(SurfaceSize {
    width: 1280,
    height: 720,
});

fn compositor() -> SceneCompositor {
    SceneCompositor::new(SceneConfig::default()).unwrap()
}

#[test]
fn target_offset_is_monotone_and_clamped() {
    let travel = 70.0;
    let mut prev = target_offset(0.0, travel);
    for i in 1..=100 {
        let y = target_offset(i as f32 / 100.0, travel);
        assert!(y >= prev);
        prev = y;
    }
    assert_eq!(target_offset(1.0, travel), 70.0);
    assert_eq!(target_offset(2.0, travel), 70.0);
    assert_eq!(target_offset(-1.0, travel), 0.0);
    assert_eq!(target_offset(f32::NAN, travel), 0.0);
}

#[test]
fn lerp_alpha_is_frame_rate_independent() {
    // two half frames cover the same remaining distance as one full frame
    let rate = 6.32;
    let full = 1.0 - lerp_alpha(rate, FRAME);
    let half = 1.0 - lerp_alpha(rate, FRAME / 2.0);
    assert!((full - half * half).abs() < 1e-6);
    // about 0.1 per frame at 60 Hz
    assert!((lerp_alpha(rate, FRAME) - 0.1).abs() < 0.005);
    assert_eq!(lerp_alpha(rate, 0.0), 0.0);
}

#[test]
fn root_approaches_target_without_passing_it() {
    let mut c = compositor();
    let target = target_offset(0.5, c.config().travel_distance);
    let mut prev = c.pose().root_offset;
    for i in 0..240 {
        let (pose, _) = c.frame(0.5, FRAME, i as f32 * FRAME, SURFACE).unwrap();
        assert!(pose.root_offset >= prev);
        assert!(pose.root_offset <= target + 1e-4);
        prev = pose.root_offset;
    }
    assert!((prev - target).abs() < 0.01);
}

#[test]
fn sway_stays_within_amplitude() {
    let mut c = compositor();
    let amp = c.config().sway_amplitude;
    for i in 0..600 {
        let (pose, _) = c.frame(0.0, FRAME, i as f32 * 0.5, SURFACE).unwrap();
        assert!(pose.sway.abs() <= amp + 1e-6);
    }
}

#[test]
fn zero_size_surface_skips_without_touching_state() {
    let mut c = compositor();
    c.prime(0.2);
    let before = c.pose();
    assert!(c.frame(0.9, FRAME, 1.0, None).is_none());
    assert!(c
        .frame(0.9, FRAME, 1.0, Some(SurfaceSize { width: 0, height: 0 }))
        .is_none());
    assert!(c
        .frame(0.9, FRAME, 1.0, Some(SurfaceSize { width: 800, height: 0 }))
        .is_none());
    assert_eq!(c.pose(), before);

    // resumes once the surface has area again
    let (pose, _) = c.frame(0.9, FRAME, 1.0, SURFACE).unwrap();
    assert!(pose.root_offset > before.root_offset);
}

#[test]
fn prime_places_root_without_easing() {
    let mut c = compositor();
    c.prime(1.0);
    assert_eq!(c.pose().root_offset, c.config().travel_distance);
}

#[test]
fn elements_are_static_across_frames() {
    let mut c = compositor();
    let before: Vec<_> = c.elements().iter().map(|e| e.transform).collect();
    for i in 0..30 {
        c.frame(i as f32 / 30.0, FRAME, i as f32 * FRAME, SURFACE);
    }
    let after: Vec<_> = c.elements().iter().map(|e| e.transform).collect();
    assert_eq!(before, after);
}

#[test]
fn scene_is_deterministic_for_a_seed() {
    let a = compositor();
    let b = compositor();
    let ta: Vec<_> = a.elements().iter().map(|e| e.transform).collect();
    let tb: Vec<_> = b.elements().iter().map(|e| e.transform).collect();
    assert_eq!(ta, tb);
}

#[test]
fn every_zone_is_populated() {
    let c = compositor();
    for zone in 0..4 {
        assert!(
            c.elements().iter().any(|e| e.zone == Some(zone)),
            "zone {} empty",
            zone
        );
    }
    let sparkles = c
        .elements()
        .iter()
        .filter(|e| e.kind == ElementKind::Sparkle)
        .count();
    assert_eq!(sparkles, c.config().sparkle_count);
}

#[test]
fn instances_follow_the_root_pose() {
    let c = compositor();
    let at_rest = c.instances(ScenePose::default());
    assert_eq!(at_rest.len(), c.elements().len());
    let moved = c.instances(ScenePose {
        root_offset: 10.0,
        sway: 0.0,
    });
    // translation lives in the fourth column
    let dy = moved[0].model[3][1] - at_rest[0].model[3][1];
    assert!((dy - 10.0).abs() < 1e-4);
}

#[test]
fn slow_frames_decline_quality_and_thin_sparkles() {
    let mut c = compositor();
    let full = c.instances(ScenePose::default()).len();
    let mut change = None;
    for i in 0..QualityConfig::default().sample_frames {
        if let Some((_, q)) = c.frame(0.0, 1.0 / 30.0, i as f32, SURFACE) {
            change = change.or(q);
        }
    }
    assert!(matches!(change, Some(QualityChange::Declined(_))));
    assert_eq!(c.quality(), QualityConfig::default().low);

    let thinned = c.instances(ScenePose::default()).len();
    let sparkles = c.config().sparkle_count;
    assert_eq!(full - thinned, sparkles - sparkles / 2);
}

#[test]
fn ambient_density_scales_the_sparkle_field() {
    let mut c = compositor();
    let sparkles = c.config().sparkle_count;
    let full = c.instances(ScenePose::default()).len();
    let fixed = full - sparkles;

    c.set_ambient_density(AMBIENT_DENSITY_PEAK);
    assert_eq!(c.instances(ScenePose::default()).len(), full);

    c.set_ambient_density(AMBIENT_DENSITY_PEAK / 2.0);
    let half = c.instances(ScenePose::default()).len();
    assert_eq!(half - fixed, sparkles.div_ceil(2));

    // a broken preset keeps the last good value
    c.set_ambient_density(f32::NAN);
    assert_eq!(c.instances(ScenePose::default()).len(), half);

    c.set_ambient_density(0.0);
    assert_eq!(c.instances(ScenePose::default()).len(), fixed);
}

#[test]
fn governor_has_hysteresis() {
    let cfg = QualityConfig::default();
    let mut g = QualityGovernor::new(cfg);
    assert_eq!(g.level(), cfg.high);

    let window = |g: &mut QualityGovernor, fps: f32| {
        let mut out = None;
        for _ in 0..cfg.sample_frames {
            out = out.or(g.record_frame(1.0 / fps));
        }
        out
    };
    // between the bounds nothing changes in either state
    assert_eq!(window(&mut g, 50.0), None);
    assert_eq!(window(&mut g, 30.0), Some(QualityChange::Declined(cfg.low)));
    assert_eq!(window(&mut g, 50.0), None);
    assert_eq!(window(&mut g, 60.0), Some(QualityChange::Inclined(cfg.high)));
    assert_eq!(g.level(), cfg.high);
}

#[test]
fn governor_ignores_bogus_frame_times() {
    let mut g = QualityGovernor::new(QualityConfig::default());
    for _ in 0..1000 {
        assert_eq!(g.record_frame(0.0), None);
        assert_eq!(g.record_frame(f32::NAN), None);
    }
}

#[test]
fn invalid_scene_config_is_rejected() {
    let mut cfg = SceneConfig::default();
    cfg.lerp_rate = 0.0;
    assert!(SceneCompositor::new(cfg).is_err());
    let mut cfg = SceneConfig::default();
    cfg.quality.fps_lower = 70.0;
    assert!(SceneCompositor::new(cfg).is_err());
}

#[test]
fn hex_color_converts_to_linear() {
    assert_eq!(hex_color(0x000000, 1.0), [0.0, 0.0, 0.0, 1.0]);
    let white = hex_color(0xffffff, 0.5);
    assert!((white[0] - 1.0).abs() < 1e-6);
    assert_eq!(white[3], 0.5);
    let mid = hex_color(0x808080, 1.0);
    assert!(mid[0] > 0.2 && mid[0] < 0.25);
}
