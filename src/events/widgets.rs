use crate::constants::*;
use crate::core::accordion::{product_number, Accordion, AccordionAction};
use crate::core::contact::{ContactForm, Field, SubmitState};
use crate::core::gallery::{DetailViewer, Lightbox, Pager};
use crate::core::header::{HeaderVisibility, MobileMenu};
use crate::core::lifecycle::{ListenerKind, OnTeardown, Scope};
use crate::dom::{self, EventListener};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the page's secondary widgets. Each one is optional: a page without
/// the matching markup simply skips it.
pub fn wire_widgets(document: &web::Document, scope: &mut Scope) {
    wire_header(document, scope);
    wire_navigation(document, scope);
    wire_accordion(document, scope);
    wire_product_modal(document, scope);
    wire_catalogue(document, scope);
    wire_contact_form(document, scope);
}

fn adopt_or_log(scope: &mut Scope, kind: ListenerKind, what: &str, l: anyhow::Result<EventListener>) {
    match l {
        Ok(l) => scope.adopt(kind, l),
        Err(e) => log::warn!("[widgets] {}: {:?}", what, e),
    }
}

fn wire_header(document: &web::Document, scope: &mut Scope) {
    let (Some(window), Some(header)) = (web::window(), document.get_element_by_id(HEADER_ID))
    else {
        return;
    };
    let mut visibility = HeaderVisibility::default();
    let win = window.clone();
    let l = EventListener::attach(&window, "scroll", move |_| {
        let y = win.scroll_y().unwrap_or(0.0);
        if visibility.update(y) {
            let cl = header.class_list();
            _ = if visibility.is_hidden() {
                cl.add_1(HEADER_HIDDEN_CLASS)
            } else {
                cl.remove_1(HEADER_HIDDEN_CLASS)
            };
        }
    });
    adopt_or_log(scope, ListenerKind::Scroll, "header", l);
}

fn elements_with(document: &web::Document, attr: &str) -> Vec<web::Element> {
    let Ok(nodes) = document.query_selector_all(&format!("[{}]", attr)) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

// Nav links smooth-scroll to their section; on narrow screens they also
// fold the menu away.
fn wire_navigation(document: &web::Document, scope: &mut Scope) {
    let menu = Rc::new(Cell::new(MobileMenu::default()));

    let toggle = {
        let menu = menu.clone();
        let doc = document.clone();
        dom::click_listener(document, MOBILE_MENU_TOGGLE_ID, move || {
            let mut m = menu.get();
            m.toggle();
            menu.set(m);
            render_menu(&doc, &m);
        })
    };
    if let Some(l) = toggle {
        scope.adopt(ListenerKind::Click, l);
    }

    for link in elements_with(document, NAV_TARGET_ATTR) {
        let Some(target) = link.get_attribute(NAV_TARGET_ATTR) else {
            continue;
        };
        let menu = menu.clone();
        let doc = document.clone();
        let l = EventListener::attach(&link, "click", move |ev| {
            ev.prevent_default();
            if dom::scroll_to_anchor(&target) {
                let mut m = menu.get();
                if m.close() {
                    menu.set(m);
                    render_menu(&doc, &m);
                }
            }
        });
        adopt_or_log(scope, ListenerKind::Click, "nav link", l);
    }
}

fn render_menu(document: &web::Document, menu: &MobileMenu) {
    if let Some(el) = document.get_element_by_id(MOBILE_MENU_ID) {
        let cl = el.class_list();
        _ = if menu.is_open() {
            cl.add_1(MENU_OPEN_CLASS)
        } else {
            cl.remove_1(MENU_OPEN_CLASS)
        };
    }
    if let Some(btn) = document.get_element_by_id(MOBILE_MENU_TOGGLE_ID) {
        _ = btn.set_attribute("aria-expanded", if menu.is_open() { "true" } else { "false" });
    }
}

// ---------------- Product accordion ----------------

fn wire_accordion(document: &web::Document, scope: &mut Scope) {
    let items = elements_with(document, ACCORDION_ITEM_ATTR);
    if items.is_empty() {
        return;
    }
    let ids: Vec<String> = items
        .iter()
        .filter_map(|el| el.get_attribute(ACCORDION_ITEM_ATTR))
        .collect();
    let accordion = Rc::new(RefCell::new(Accordion::new(ids, Some(DEFAULT_OPEN_PRODUCT))));
    let items = Rc::new(items);
    render_accordion(document, &accordion.borrow(), &items);

    for el in items.iter() {
        let Some(id) = el.get_attribute(ACCORDION_ITEM_ATTR) else {
            continue;
        };
        let trigger = el
            .query_selector("[data-accordion-trigger]")
            .ok()
            .flatten()
            .unwrap_or_else(|| el.clone());
        let accordion = accordion.clone();
        let items = items.clone();
        let document = document.clone();
        let l = EventListener::attach(&trigger, "click", move |_| {
            let mut acc = accordion.borrow_mut();
            if let Some(open) = acc.reduce(AccordionAction::Toggle(id.clone())) {
                log::debug!("[accordion] open {}", open);
            }
            render_accordion(&document, &acc, &items);
        });
        adopt_or_log(scope, ListenerKind::Click, "accordion", l);
    }
}

fn render_accordion(document: &web::Document, acc: &Accordion, elements: &[web::Element]) {
    for (item, el) in acc.items().iter().zip(elements) {
        let cl = el.class_list();
        _ = if item.open {
            cl.add_1("is-open")
        } else {
            cl.remove_1("is-open")
        };
        _ = el.set_attribute("aria-expanded", if item.open { "true" } else { "false" });
    }
    if let Some(showcase) = document.get_element_by_id(PRODUCT_SHOWCASE_ID) {
        match acc.open_item().and_then(product_number) {
            Some(n) => {
                _ = showcase.set_attribute("data-active-product", &n.to_string());
            }
            None => {
                _ = showcase.remove_attribute("data-active-product");
            }
        }
    }
}

// ---------------- Product detail modal ----------------

fn wire_product_modal(document: &web::Document, scope: &mut Scope) {
    if document.get_element_by_id(PRODUCT_MODAL_ID).is_none() {
        return;
    }
    let viewer = Rc::new(Cell::new(DetailViewer::default()));
    render_product_modal(document, &viewer.get());

    for button in elements_with(document, PRODUCT_DETAIL_ATTR) {
        // "Read More" buttons are numbered from 1
        let Some(product) = button
            .get_attribute(PRODUCT_DETAIL_ATTR)
            .and_then(|n| n.trim().parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .filter(|&i| i < PRODUCT_DETAILS.len())
        else {
            continue;
        };
        let viewer = viewer.clone();
        let doc = document.clone();
        let l = EventListener::attach(&button, "click", move |_| {
            let mut v = viewer.get();
            v.open(product, PRODUCT_DETAILS[product].1.len());
            viewer.set(v);
            render_product_modal(&doc, &v);
        });
        adopt_or_log(scope, ListenerKind::Click, "product detail", l);
    }

    let buttons: [(&str, fn(&mut DetailViewer)); 5] = [
        (PRODUCT_MODAL_CLOSE_ID, |v: &mut DetailViewer| v.close()),
        (PRODUCT_MODAL_PREV_ID, |v: &mut DetailViewer| {
            v.prev();
        }),
        (PRODUCT_MODAL_NEXT_ID, |v: &mut DetailViewer| {
            v.next();
        }),
        (PRODUCT_ZOOM_IN_ID, |v: &mut DetailViewer| {
            v.zoom_mut().zoom_in();
        }),
        (PRODUCT_ZOOM_OUT_ID, |v: &mut DetailViewer| {
            v.zoom_mut().zoom_out();
        }),
    ];
    for (id, action) in buttons {
        let viewer = viewer.clone();
        let doc = document.clone();
        if let Some(l) = dom::click_listener(document, id, move || {
            let mut v = viewer.get();
            action(&mut v);
            viewer.set(v);
            render_product_modal(&doc, &v);
        }) {
            scope.adopt(ListenerKind::Click, l);
        }
    }
}

fn render_product_modal(document: &web::Document, v: &DetailViewer) {
    if let Some(modal) = document.get_element_by_id(PRODUCT_MODAL_ID) {
        dom::set_hidden(&modal, v.product().is_none());
    }
    let Some((title, images)) = v.product().and_then(|i| PRODUCT_DETAILS.get(i)) else {
        return;
    };
    let index = v.image_index();
    if let (Some(img), Some(src)) = (
        document.get_element_by_id(PRODUCT_MODAL_IMAGE_ID),
        images.get(index),
    ) {
        _ = img.set_attribute("src", src);
        _ = img.set_attribute("alt", &format!("{} detail {}", title, index + 1));
        _ = img.set_attribute("style", &format!("transform: scale({:.1})", v.zoom().scale()));
    }
    if let Some(el) = document.get_element_by_id(PRODUCT_MODAL_COUNTER_ID) {
        el.set_text_content(Some(&format!("{} / {}", index + 1, v.image_count())));
    }
}

// ---------------- Digital catalogue ----------------

struct Catalogue {
    pager: Pager,
    lightbox: Lightbox,
}

fn wire_catalogue(document: &web::Document, scope: &mut Scope) {
    if document.get_element_by_id(CATALOGUE_IMAGE_ID).is_none() {
        return;
    }
    let state = Rc::new(RefCell::new(Catalogue {
        pager: Pager::new(CATALOGUE_PAGES.len()),
        lightbox: Lightbox::default(),
    }));
    render_catalogue(document, &state.borrow());

    let buttons: [(&str, fn(&mut Catalogue)); 6] = [
        (CATALOGUE_PREV_ID, |c: &mut Catalogue| {
            c.pager.prev();
        }),
        (CATALOGUE_NEXT_ID, |c: &mut Catalogue| {
            c.pager.next();
        }),
        (CATALOGUE_OPEN_ID, |c: &mut Catalogue| {
            c.lightbox.open_at(c.pager.len(), c.pager.index());
        }),
        (CATALOGUE_CLOSE_ID, |c: &mut Catalogue| c.lightbox.close()),
        (CATALOGUE_LIGHTBOX_PREV_ID, |c: &mut Catalogue| {
            c.lightbox.prev();
        }),
        (CATALOGUE_LIGHTBOX_NEXT_ID, |c: &mut Catalogue| {
            c.lightbox.next();
        }),
    ];
    for (id, action) in buttons {
        let state = state.clone();
        let doc = document.clone();
        if let Some(l) = dom::click_listener(document, id, move || {
            action(&mut state.borrow_mut());
            render_catalogue(&doc, &state.borrow());
        }) {
            scope.adopt(ListenerKind::Click, l);
        }
    }
}

fn render_catalogue(document: &web::Document, c: &Catalogue) {
    let Some(&(title, src)) = CATALOGUE_PAGES.get(c.pager.index()) else {
        return;
    };
    if let Some(img) = document.get_element_by_id(CATALOGUE_IMAGE_ID) {
        _ = img.set_attribute("src", src);
        _ = img.set_attribute("alt", title);
    }
    if let Some(el) = document.get_element_by_id(CATALOGUE_TITLE_ID) {
        el.set_text_content(Some(title));
    }
    if let Some(el) = document.get_element_by_id(CATALOGUE_COUNTER_ID) {
        el.set_text_content(Some(&format!("{} / {}", c.pager.index() + 1, c.pager.len())));
    }
    if let Some(lb) = document.get_element_by_id(CATALOGUE_LIGHTBOX_ID) {
        dom::set_hidden(&lb, !c.lightbox.is_open());
    }
    if c.lightbox.is_open() {
        let lb_page = CATALOGUE_PAGES.get(c.lightbox.pager().index());
        if let (Some(img), Some(&(title, src))) = (
            document.get_element_by_id(CATALOGUE_LIGHTBOX_IMAGE_ID),
            lb_page,
        ) {
            _ = img.set_attribute("src", src);
            _ = img.set_attribute("alt", title);
        }
    }
}

// ---------------- Contact form ----------------

/// The simulated send in flight. Owns its callback so unmount can free it
/// even when the timeout never fires.
#[derive(Default)]
struct SendTimer {
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl SendTimer {
    fn cancel(&mut self) {
        if let (Some(handle), Some(w)) = (self.handle.take(), web::window()) {
            w.clear_timeout_with_handle(handle);
        }
        self.callback.take();
    }
}

fn wire_contact_form(document: &web::Document, scope: &mut Scope) {
    let Some(form_el) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return;
    };
    let form = Rc::new(RefCell::new(ContactForm::default()));
    let timer = Rc::new(RefCell::new(SendTimer::default()));

    // Typing into a field stores the value and clears its error.
    {
        let form = form.clone();
        let form_el2 = form_el.clone();
        let l = EventListener::attach(&form_el, "input", move |ev| {
            let Some((name, value)) = ev.target().and_then(|t| input_name_value(&t)) else {
                return;
            };
            if let Some(field) = Field::from_input_name(&name) {
                form.borrow_mut().set(field, &value);
                render_field_error(&form_el2, field, None);
            }
        });
        adopt_or_log(scope, ListenerKind::Input, "contact input", l);
    }

    {
        let form = form.clone();
        let form_el2 = form_el.clone();
        let timer_slot = timer.clone();
        let document = document.clone();
        let l = EventListener::attach(&form_el, "submit", move |ev| {
            ev.prevent_default();
            let started = form.borrow_mut().submit();
            for field in Field::ALL {
                render_field_error(&form_el2, field, form.borrow().error(field));
            }
            if !started {
                return;
            }
            set_submitting(&document, true);
            let form = form.clone();
            let form_el3 = form_el2.clone();
            let document = document.clone();
            let fired: Weak<RefCell<SendTimer>> = Rc::downgrade(&timer_slot);
            let done: Closure<dyn FnMut()> = Closure::once(move || {
                // the callback itself stays owned by the slot until the next send or unmount
                if let Some(t) = fired.upgrade() {
                    t.borrow_mut().handle = None;
                }
                form.borrow_mut().complete();
                if form.borrow().state() == SubmitState::Sent {
                    clear_inputs(&form_el3);
                    if let Some(status) = document.get_element_by_id(CONTACT_STATUS_ID) {
                        status.set_text_content(Some(CONTACT_SENT_TEXT));
                    }
                    log::info!("[contact] message sent");
                }
                set_submitting(&document, false);
            });
            let Some(w) = web::window() else {
                return;
            };
            let mut slot = timer_slot.borrow_mut();
            slot.cancel();
            match w.set_timeout_with_callback_and_timeout_and_arguments_0(
                done.as_ref().unchecked_ref(),
                CONTACT_SEND_DELAY_MS,
            ) {
                Ok(handle) => {
                    slot.handle = Some(handle);
                    slot.callback = Some(done);
                }
                Err(e) => log::warn!("[contact] could not schedule send: {:?}", e),
            }
        });
        adopt_or_log(scope, ListenerKind::Submit, "contact submit", l);
    }

    // A pending simulated send must not fire after unmount.
    scope.adopt(
        ListenerKind::Timer,
        OnTeardown(move || timer.borrow_mut().cancel()),
    );
}

fn input_name_value(target: &web::EventTarget) -> Option<(String, String)> {
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    target
        .dyn_ref::<web::HtmlTextAreaElement>()
        .map(|t| (t.name(), t.value()))
}

fn render_field_error(form_el: &web::Element, field: Field, error: Option<&str>) {
    let selector = format!("[data-error-for=\"{}\"]", field.input_name());
    if let Ok(Some(el)) = form_el.query_selector(&selector) {
        el.set_text_content(error);
        dom::set_hidden(&el, error.is_none());
    }
}

fn clear_inputs(form_el: &web::Element) {
    for field in Field::ALL {
        let selector = format!("[name=\"{}\"]", field.input_name());
        let Ok(Some(el)) = form_el.query_selector(&selector) else {
            continue;
        };
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value("");
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.set_value("");
        }
    }
}

fn set_submitting(document: &web::Document, submitting: bool) {
    if let Some(btn) = document.get_element_by_id(CONTACT_SUBMIT_ID) {
        _ = if submitting {
            btn.set_attribute("disabled", "")
        } else {
            btn.remove_attribute("disabled")
        };
        btn.set_text_content(Some(if submitting { "Sending..." } else { "Send Message" }));
    }
}
