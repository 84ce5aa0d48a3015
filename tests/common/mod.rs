// The main crate is wasm-only, so the pure-Rust core is included directly.
#![allow(dead_code)]

pub mod core {
    pub mod accordion {
        include!("../../src/core/accordion.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod contact {
        include!("../../src/core/contact.rs");
    }
    pub mod error {
        include!("../../src/core/error.rs");
    }
    pub mod gallery {
        include!("../../src/core/gallery.rs");
    }
    pub mod header {
        include!("../../src/core/header.rs");
    }
    pub mod lifecycle {
        include!("../../src/core/lifecycle.rs");
    }
    pub mod pipeline {
        include!("../../src/core/pipeline.rs");
    }
    pub mod presenter {
        include!("../../src/core/presenter.rs");
    }
    pub mod progress {
        include!("../../src/core/progress.rs");
    }
    pub mod quality {
        include!("../../src/core/quality.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }
    pub mod sections {
        include!("../../src/core/sections.rs");
    }
    pub mod stages {
        include!("../../src/core/stages.rs");
    }
    pub mod theme {
        include!("../../src/core/theme.rs");
    }
}

use self::core::progress::ScrollMetrics;

/// Metrics for a track of `height` px in a `viewport` px window, scrolled
/// `scrolled` px past its top.
pub fn metrics(scrolled: f64, height: f64, viewport: f64) -> ScrollMetrics {
    ScrollMetrics {
        container_top: -scrolled,
        container_height: height,
        viewport_height: viewport,
    }
}

/// Metrics at normalized progress `p` on a 5000 px track in a 1000 px window.
pub fn at_progress(p: f64) -> ScrollMetrics {
    metrics(p * 4000.0, 5000.0, 1000.0)
}
