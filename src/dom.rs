use crate::core::lifecycle::Teardown;
use crate::core::scene::SurfaceSize;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))
}

/// A registered DOM event listener. Removed from its target on teardown;
/// the closure is freed when the guard drops.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Teardown for EventListener {
    fn teardown(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Click listener on `#element_id`; `None` when the element is absent.
pub fn click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<EventListener> {
    let el = document.get_element_by_id(element_id)?;
    match EventListener::attach(&el, "click", move |_| handler()) {
        Ok(l) => Some(l),
        Err(e) => {
            log::warn!("[dom] #{}: {:?}", element_id, e);
            None
        }
    }
}

pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio, capped at `max_pixel_ratio`. Only writes when the size changed.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    max_pixel_ratio: f32,
) -> SurfaceSize {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .min(max_pixel_ratio as f64)
        .max(0.5);
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    if w_px == 0 || h_px == 0 {
        // not laid out yet; report as not drawable
        return SurfaceSize::default();
    }
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    SurfaceSize {
        width: w_px,
        height: h_px,
    }
}

/// Smooth-scroll the page so `#anchor` is at the top of the viewport.
/// Returns false when there is no such element.
pub fn scroll_to_anchor(anchor: &str) -> bool {
    let Some(el) = window_document().and_then(|d| d.get_element_by_id(anchor)) else {
        log::warn!("[dom] scroll target #{} not found", anchor);
        return false;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1(crate::constants::HIDDEN_CLASS);
    } else {
        _ = cl.remove_1(crate::constants::HIDDEN_CLASS);
    }
}
