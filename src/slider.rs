use crate::constants::{SLIDER_CANVAS_ID, SLIDER_TRACK_ID};
use crate::core::lifecycle::{ListenerKind, OnTeardown, Scope};
use crate::core::theme::ThemeReader;
use crate::core::{SliderConfig, SliderPipeline};
use crate::events;
use crate::frame::{self, FrameContext};
use crate::overlay::OverlayDom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mount the hero slider. Every registration lands in `scope`.
pub fn mount(
    document: &web::Document,
    config: SliderConfig,
    theme: ThemeReader,
    scope: &mut Scope,
) -> anyhow::Result<()> {
    let track = document
        .get_element_by_id(SLIDER_TRACK_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SLIDER_TRACK_ID))?;
    let pixel_ratio_cap = config.scene.quality.high.pixel_ratio;

    let mut pipeline = SliderPipeline::new(config)?;
    pipeline.prime(events::measure(&track));
    log::info!(
        "[slider] mounted: {} stages, starting at {}",
        pipeline.stages().len(),
        pipeline.active_stage()
    );
    let mut overlay = OverlayDom::bind(document, pipeline.stages())?;
    overlay.apply(&pipeline.presenter().layers());
    let pipeline = Rc::new(RefCell::new(pipeline));

    // Registered first so it runs last, after every listener is gone.
    {
        let pipeline = pipeline.clone();
        scope.adopt(
            ListenerKind::AnimationFrame,
            OnTeardown(move || pipeline.borrow_mut().teardown()),
        );
    }
    overlay.wire_ctas(&pipeline, scope)?;
    events::wire_slider_scroll(&track, &pipeline, scope)?;

    let canvas = document
        .get_element_by_id(SLIDER_CANVAS_ID)
        .and_then(|e| e.dyn_into::<web::HtmlCanvasElement>().ok());
    let gpu = Rc::new(RefCell::new(None));
    let alive = Rc::new(Cell::new(true));
    match &canvas {
        Some(c) => frame::init_gpu(c.clone(), gpu.clone(), alive.clone()),
        None => log::warn!("[slider] no #{}; overlay only", SLIDER_CANVAS_ID),
    }

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        pipeline,
        overlay,
        canvas,
        gpu,
        theme_seen: u64::MAX,
        theme,
        pixel_ratio_cap,
        started: now,
        last_instant: now,
    }));
    scope.adopt(
        ListenerKind::AnimationFrame,
        frame::start_loop(frame_ctx, alive),
    );
    Ok(())
}
