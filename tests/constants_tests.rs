// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_never_overshoots() {
    let zeta = SPRING_DAMPING / (2.0 * (SPRING_STIFFNESS * SPRING_MASS).sqrt());
    assert!(zeta >= 1.0, "damping ratio {}", zeta);
    assert!(SPRING_MAX_SUBSTEP_SEC > 0.0 && SPRING_MAX_SUBSTEP_SEC < SPRING_MAX_DT_SEC);
    assert!(SPRING_REST_DELTA > 0.0 && SPRING_REST_SPEED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn quality_bounds_have_hysteresis() {
    assert!(QUALITY_FPS_LOWER < QUALITY_FPS_UPPER);
    assert!(QUALITY_PIXEL_RATIO_LOW < QUALITY_PIXEL_RATIO_HIGH);
    assert!(QUALITY_DENSITY_LOW > 0.0 && QUALITY_DENSITY_LOW < QUALITY_DENSITY_HIGH);
    assert!(QUALITY_DENSITY_HIGH <= 1.0);
    assert!(QUALITY_SAMPLE_FRAMES > 0);
}

#[test]
fn zone_anchors_descend_within_travel() {
    for pair in ZONE_ANCHORS.windows(2) {
        assert!(pair[1][1] < pair[0][1]);
    }
    let deepest = ZONE_ANCHORS[ZONE_ANCHORS.len() - 1][1];
    assert!(-deepest <= TRAVEL_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn overlay_and_section_tuning() {
    assert!(TRANSITION_SECS > 0.0);
    assert!(OVERLAY_SLIDE_PX > 0.0);
    assert!(SECTION_THRESHOLD > 0.0 && SECTION_THRESHOLD <= 1.0);
    assert_eq!(SECTION_ROOT_MARGIN.split_whitespace().count(), 4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_and_fog_ranges() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_Z);
    assert!(CAMERA_FAR > TRAVEL_DISTANCE);
    assert!(FOG_START < FOG_END && FOG_END <= CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(BACKGROUND_RGB.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        SLIDER_TRACK_ID,
        SLIDER_CANVAS_ID,
        OVERLAY_ROOT_ID,
        HEADER_ID,
        PRODUCT_SHOWCASE_ID,
        CATALOGUE_IMAGE_ID,
        CATALOGUE_TITLE_ID,
        CATALOGUE_COUNTER_ID,
        CATALOGUE_PREV_ID,
        CATALOGUE_NEXT_ID,
        CATALOGUE_OPEN_ID,
        CATALOGUE_LIGHTBOX_ID,
        CATALOGUE_LIGHTBOX_IMAGE_ID,
        CATALOGUE_CLOSE_ID,
        CATALOGUE_LIGHTBOX_PREV_ID,
        CATALOGUE_LIGHTBOX_NEXT_ID,
        CONTACT_FORM_ID,
        CONTACT_SUBMIT_ID,
        CONTACT_STATUS_ID,
    ];
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[test]
fn catalogue_has_pages() {
    assert!(!CATALOGUE_PAGES.is_empty());
    assert!(CATALOGUE_PAGES.iter().all(|(t, src)| !t.is_empty() && src.starts_with('/')));
}

#[test]
fn every_product_has_detail_images() {
    for (title, images) in PRODUCT_DETAILS {
        assert!(!title.is_empty());
        assert!(!images.is_empty(), "{} has no detail images", title);
        assert!(images.iter().all(|src| src.starts_with('/')));
    }
}

#[test]
fn zoom_tops_out_at_three() {
    let max = 1.0 + ZOOM_STEP * f32::from(ZOOM_MAX_STEPS);
    assert!((max - 3.0).abs() < 1e-5);
}
