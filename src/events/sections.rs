use crate::core::lifecycle::{ListenerKind, Scope, Teardown};
use crate::core::sections::{SectionConfig, SectionEntry, SectionWatcher};
use crate::core::theme::ThemeWriter;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

struct ObserverHandle {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl Teardown for ObserverHandle {
    fn teardown(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe each page section and push the dominant one into the ambient theme.
pub fn wire_section_watcher(
    document: &web::Document,
    config: &SectionConfig,
    theme: Rc<RefCell<ThemeWriter>>,
    scope: &mut Scope,
) -> anyhow::Result<()> {
    let mut watcher = SectionWatcher::new(config)?;
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let batch: SmallVec<[(String, f64, bool); 4]> = entries
                .iter()
                .filter_map(|v| v.dyn_into::<web::IntersectionObserverEntry>().ok())
                .map(|e| (e.target().id(), e.intersection_ratio(), e.is_intersecting()))
                .collect();
            let dominant = watcher.observe(batch.iter().map(|(id, ratio, hit)| SectionEntry {
                id: id.as_str(),
                ratio: *ratio,
                intersecting: *hit,
            }));
            if let Some(id) = dominant {
                if theme.borrow_mut().set_section(id) {
                    log::info!("[sections] ambient -> {}", id);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(&config.root_margin);
    init.set_threshold(&JsValue::from_f64(config.threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;

    let mut observed = 0;
    for id in &config.ids {
        match document.get_element_by_id(id) {
            Some(el) => {
                observer.observe(&el);
                observed += 1;
            }
            None => log::warn!("[sections] #{} not found", id),
        }
    }
    log::debug!("[sections] observing {} of {}", observed, config.ids.len());

    scope.adopt(
        ListenerKind::Intersection,
        ObserverHandle {
            observer,
            _callback: callback,
        },
    );
    Ok(())
}
