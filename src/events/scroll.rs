use crate::core::lifecycle::{ListenerKind, Scope};
use crate::core::progress::ScrollMetrics;
use crate::core::SliderPipeline;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Read the track's position relative to the viewport.
pub fn measure(track: &web::Element) -> ScrollMetrics {
    let rect = track.get_bounding_client_rect();
    ScrollMetrics {
        container_top: rect.top(),
        container_height: rect.height(),
        viewport_height: dom::viewport_height(),
    }
}

/// Scroll and resize only record raw progress; smoothing happens per frame.
pub fn wire_slider_scroll(
    track: &web::Element,
    pipeline: &Rc<RefCell<SliderPipeline>>,
    scope: &mut Scope,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    for (event, kind) in [
        ("scroll", ListenerKind::Scroll),
        ("resize", ListenerKind::Resize),
    ] {
        let track = track.clone();
        let pipeline = pipeline.clone();
        let listener = dom::EventListener::attach(&window, event, move |_| {
            pipeline.borrow_mut().on_scroll(measure(&track));
        })?;
        scope.adopt(kind, listener);
    }
    Ok(())
}
