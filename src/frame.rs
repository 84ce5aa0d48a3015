use crate::camera::Camera;
use crate::core::lifecycle::Teardown;
use crate::core::presenter::OverlayEvent;
use crate::core::quality::QualityChange;
use crate::core::theme::ThemeReader;
use crate::core::{FrameInput, SliderPipeline};
use crate::dom;
use crate::overlay::OverlayDom;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub pipeline: Rc<RefCell<SliderPipeline>>,
    pub overlay: OverlayDom,
    pub canvas: Option<web::HtmlCanvasElement>,
    /// Filled asynchronously once WebGPU is up; stays `None` if it fails.
    pub gpu: Rc<RefCell<Option<render::GpuState>>>,
    pub theme: ThemeReader,
    pub theme_seen: u64,
    pub pixel_ratio_cap: f32,
    pub started: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed_sec = (now - self.started).as_secs_f32();

        let surface = self
            .canvas
            .as_ref()
            .filter(|c| c.is_connected())
            .map(|c| dom::sync_canvas_backing_size(c, self.pixel_ratio_cap));

        let out = self.pipeline.borrow_mut().frame(FrameInput {
            dt_sec,
            elapsed_sec,
            surface,
        });

        if let Some(stage) = out.stage_changed {
            log::info!("[slider] stage {} at progress {:.3}", stage, out.progress);
        }
        for ev in &out.overlay_events {
            if let OverlayEvent::Settled { stage } = ev {
                log::debug!("[slider] overlay settled on {}", stage);
            }
        }
        let layers = self.pipeline.borrow().presenter().layers();
        self.overlay.apply(&layers);

        if let Some(change) = out.quality {
            let level = match change {
                QualityChange::Declined(l) => {
                    log::info!("[quality] declined: dpr<={} density={}", l.pixel_ratio, l.density);
                    l
                }
                QualityChange::Inclined(l) => {
                    log::info!("[quality] inclined: dpr<={} density={}", l.pixel_ratio, l.density);
                    l
                }
            };
            self.pixel_ratio_cap = level.pixel_ratio;
        }

        let (Some(pose), Some(size)) = (out.scene, surface) else {
            return;
        };
        let mut gpu = self.gpu.borrow_mut();
        let Some(g) = gpu.as_mut() else {
            return;
        };
        if self.theme.version() != self.theme_seen {
            self.theme_seen = self.theme.version();
            let preset = self.theme.preset();
            g.set_ambient(preset);
            self.pipeline.borrow_mut().set_ambient_density(preset.density);
            log::debug!("[scene] ambient {} density {}", preset.key, preset.density);
        }
        let instances = self.pipeline.borrow().instances(pose);
        g.resize_if_needed(size.width, size.height);
        let camera = Camera::slider(size.aspect());
        match g.render(&camera, &instances) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// Create the renderer in the background. The slot stays empty if WebGPU is
/// unavailable or the view was unmounted before the device arrived.
pub fn init_gpu(
    canvas: web::HtmlCanvasElement,
    slot: Rc<RefCell<Option<render::GpuState>>>,
    alive: Rc<Cell<bool>>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match render::GpuState::new(&canvas).await {
            Ok(g) if alive.get() => {
                log::info!("[gpu] ready");
                *slot.borrow_mut() = Some(g);
            }
            Ok(_) => log::debug!("[gpu] discarded: view unmounted"),
            Err(e) => log::error!("WebGPU init error: {:?}; overlay only", e),
        }
    });
}

type TickClosure = Closure<dyn FnMut()>;

/// Handle for a running requestAnimationFrame loop.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<TickClosure>>>,
    handle: Rc<Cell<Option<i32>>>,
    alive: Rc<Cell<bool>>,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, alive: Rc<Cell<bool>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    let alive_tick = alive.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_clone.set(None);
        if !alive_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            handle_clone.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        handle.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
    FrameLoop {
        tick,
        handle,
        alive,
    }
}

impl Teardown for FrameLoop {
    fn teardown(&mut self) {
        self.alive.set(false);
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // drops the closure, which owns the frame context
        self.tick.borrow_mut().take();
    }
}
