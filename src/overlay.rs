use crate::constants::OVERLAY_ROOT_ID;
use crate::core::lifecycle::{ListenerKind, Scope};
use crate::core::presenter::OverlayLayer;
use crate::core::stages::{StageContent, StageTable};
use crate::core::SliderPipeline;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Hidden blocks keep their layout box so the overlay never reflows.
const HIDDEN_STYLE: &str = "opacity:0;transform:translateX(0px);pointer-events:none;visibility:hidden";

struct StageBlock {
    root: web::HtmlElement,
    cta: Option<web::Element>,
    last_style: String,
}

/// DOM side of the stage overlay: one `[data-stage="i"]` block per stage.
pub struct OverlayDom {
    blocks: Vec<StageBlock>,
}

impl OverlayDom {
    pub fn bind(document: &web::Document, table: &StageTable) -> anyhow::Result<Self> {
        dom::element_by_id(document, OVERLAY_ROOT_ID)?;
        let mut blocks = Vec::with_capacity(table.len());
        for (i, stage) in table.iter().enumerate() {
            let selector = format!("#{} [data-stage=\"{}\"]", OVERLAY_ROOT_ID, i);
            let root = document
                .query_selector(&selector)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .ok_or_else(|| anyhow::anyhow!("missing overlay block {}", selector))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            fill_content(document, &root, &stage.content);
            let cta = role(&root, "cta");
            _ = root.set_attribute("style", HIDDEN_STYLE);
            blocks.push(StageBlock {
                root,
                cta,
                last_style: HIDDEN_STYLE.to_string(),
            });
        }
        Ok(Self { blocks })
    }

    /// Write presenter layers to the DOM; blocks without a layer are hidden.
    pub fn apply(&mut self, layers: &[OverlayLayer]) {
        for (i, block) in self.blocks.iter_mut().enumerate() {
            let style = match layers.iter().find(|l| l.stage == i) {
                Some(l) => format!(
                    "opacity:{:.3};transform:translateX({:.1}px);pointer-events:{};visibility:visible",
                    l.opacity,
                    l.offset_px,
                    if l.interactive { "auto" } else { "none" }
                ),
                None => HIDDEN_STYLE.to_string(),
            };
            if style != block.last_style {
                _ = block.root.set_attribute("style", &style);
                block.last_style = style;
            }
        }
    }

    /// Route CTA clicks through the presenter; only the interactive stage
    /// produces a navigation.
    pub fn wire_ctas(
        &self,
        pipeline: &Rc<RefCell<SliderPipeline>>,
        scope: &mut Scope,
    ) -> anyhow::Result<()> {
        for (i, block) in self.blocks.iter().enumerate() {
            let Some(cta) = &block.cta else {
                continue;
            };
            let pipeline = pipeline.clone();
            let listener = dom::EventListener::attach(cta, "click", move |ev| {
                ev.prevent_default();
                if let Some(req) = pipeline.borrow().activate_cta(i) {
                    log::info!("[slider] cta {} -> #{}", i, req.anchor);
                    dom::scroll_to_anchor(&req.anchor);
                }
            })?;
            scope.adopt(ListenerKind::Click, listener);
        }
        Ok(())
    }
}

fn role(root: &web::Element, name: &str) -> Option<web::Element> {
    root.query_selector(&format!("[data-role=\"{}\"]", name))
        .ok()
        .flatten()
}

fn fill_content(document: &web::Document, root: &web::Element, content: &StageContent) {
    if let Some(el) = role(root, "badge") {
        el.set_text_content(Some(&content.badge));
    }
    if let Some(el) = role(root, "heading") {
        el.set_text_content(None);
        for (k, (word, accent)) in content.heading_words().into_iter().enumerate() {
            if k > 0 {
                _ = el.append_with_str_1(" ");
            }
            match document.create_element("span") {
                Ok(span) => {
                    if accent {
                        _ = span.class_list().add_1("accent");
                    }
                    span.set_text_content(Some(word));
                    _ = el.append_child(&span);
                }
                Err(_) => {
                    _ = el.append_with_str_1(word);
                }
            }
        }
    }
    if let Some(el) = role(root, "body") {
        el.set_text_content(Some(&content.body));
    }
    if let Some(el) = role(root, "cta") {
        el.set_text_content(Some(&content.cta_label));
    }
}
