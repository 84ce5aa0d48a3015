#![cfg(target_arch = "wasm32")]
//! Scroll-driven hero slider and page widgets for the steel pipe
//! manufacturer's marketing site.
//!
//! The host page provides:
//! - `#slider-track`: tall scroll container whose scroll range drives the slider
//! - `#slider-canvas`: sticky canvas for the WebGPU scene (optional)
//! - `#slider-overlay` with one `[data-stage="i"]` block per stage, each holding
//!   `[data-role="badge|heading|body|cta"]` children
//! - section anchors `#home`, `#about`, `#products`, `#clients`, `#contact`
//!
//! Call `unmount()` before removing the page's markup; `mount_page()` remounts.
use crate::core::lifecycle::Scope;
use crate::core::theme::{self, ThemeWriter};
use crate::core::SliderConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod slider;

struct Page {
    scope: Scope,
    theme: Rc<RefCell<ThemeWriter>>,
}

impl Drop for Page {
    fn drop(&mut self) {
        self.scope.close();
        self.theme.borrow_mut().reset();
        log::info!("[page] unmounted");
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("steelpipe-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Mount (or remount) everything on the current document.
#[wasm_bindgen]
pub fn mount_page() -> Result<(), JsValue> {
    init().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Release every listener, observer, timer and frame callback.
#[wasm_bindgen]
pub fn unmount() {
    // Take first so Page::drop runs outside the thread-local borrow.
    let page = PAGE.with(|p| p.borrow_mut().take());
    drop(page);
}

fn init() -> anyhow::Result<()> {
    unmount();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = SliderConfig::default();
    config.validate()?;

    let mut scope = Scope::new("page");
    let (writer, reader) = theme::ambient_theme();
    let writer = Rc::new(RefCell::new(writer));

    if let Err(e) =
        events::wire_section_watcher(&document, &config.sections, writer.clone(), &mut scope)
    {
        log::warn!("[sections] disabled: {:?}", e);
    }

    if document
        .get_element_by_id(constants::SLIDER_TRACK_ID)
        .is_some()
    {
        slider::mount(&document, config, reader, &mut scope)?;
    }

    events::wire_widgets(&document, &mut scope);

    log::info!("[page] mounted with {} registrations", scope.live_count());
    PAGE.with(|p| *p.borrow_mut() = Some(Page { scope, theme: writer }));
    Ok(())
}
