#![allow(dead_code)]
mod common;

use common::core::lifecycle::*;
use common::core::pipeline::{FrameInput, SliderPipeline};
use common::core::presenter::OverlayState;
use common::core::scene::SurfaceSize;
use common::core::config::SliderConfig;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Stand-in for a platform registration: counts itself live until torn down.
struct FakeRegistration {
    live: Rc<Cell<usize>>,
    order: Rc<RefCell<Vec<&'static str>>>,
    name: &'static str,
    released: bool,
}

impl FakeRegistration {
    fn new(live: &Rc<Cell<usize>>, order: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Self {
        live.set(live.get() + 1);
        Self {
            live: live.clone(),
            order: order.clone(),
            name,
            released: false,
        }
    }
}

impl Teardown for FakeRegistration {
    fn teardown(&mut self) {
        if !self.released {
            self.released = true;
            self.live.set(self.live.get() - 1);
            self.order.borrow_mut().push(self.name);
        }
    }
}

fn fixtures() -> (Rc<Cell<usize>>, Rc<RefCell<Vec<&'static str>>>) {
    (Rc::new(Cell::new(0)), Rc::new(RefCell::new(Vec::new())))
}

#[test]
fn close_releases_everything_in_reverse_order() {
    let (live, order) = fixtures();
    let mut scope = Scope::new("test");
    scope.adopt(ListenerKind::Scroll, FakeRegistration::new(&live, &order, "scroll"));
    scope.adopt(ListenerKind::Resize, FakeRegistration::new(&live, &order, "resize"));
    scope.adopt(
        ListenerKind::AnimationFrame,
        FakeRegistration::new(&live, &order, "raf"),
    );
    assert_eq!(scope.live_count(), 3);
    assert_eq!(scope.live_of(ListenerKind::Scroll), 1);

    scope.close();
    assert_eq!(live.get(), 0);
    assert_eq!(scope.live_count(), 0);
    assert_eq!(scope.live_of(ListenerKind::AnimationFrame), 0);
    assert_eq!(*order.borrow(), ["raf", "resize", "scroll"]);
}

#[test]
fn drop_without_close_still_releases() {
    let (live, order) = fixtures();
    {
        let mut scope = Scope::new("dropped");
        scope.adopt(ListenerKind::Intersection, FakeRegistration::new(&live, &order, "io"));
        scope.adopt(ListenerKind::Timer, FakeRegistration::new(&live, &order, "timer"));
        assert_eq!(live.get(), 2);
    }
    assert_eq!(live.get(), 0);
}

#[test]
fn close_is_idempotent() {
    let (live, order) = fixtures();
    let mut scope = Scope::new("twice");
    scope.adopt(ListenerKind::Click, FakeRegistration::new(&live, &order, "click"));
    scope.close();
    scope.close();
    assert_eq!(order.borrow().len(), 1);
}

#[test]
fn live_counts_are_kept_per_kind() {
    let (live, order) = fixtures();
    let mut scope = Scope::new("contact");
    scope.adopt(ListenerKind::Input, FakeRegistration::new(&live, &order, "input"));
    scope.adopt(ListenerKind::Submit, FakeRegistration::new(&live, &order, "submit"));
    scope.adopt(ListenerKind::Timer, FakeRegistration::new(&live, &order, "timer"));
    assert_eq!(scope.live_of(ListenerKind::Submit), 1);
    assert_eq!(scope.live_of(ListenerKind::Click), 0);
    assert_eq!(scope.live_of(ListenerKind::Input), 1);
    assert_eq!(scope.live_count(), 3);
    scope.close();
    assert_eq!(scope.live_of(ListenerKind::Submit), 0);
    assert_eq!(live.get(), 0);
}

#[test]
fn repeated_mount_unmount_leaves_nothing_behind() {
    let (live, order) = fixtures();
    for _ in 0..50 {
        let mut scope = Scope::new("page");
        for kind in [
            ListenerKind::Scroll,
            ListenerKind::Resize,
            ListenerKind::Intersection,
            ListenerKind::AnimationFrame,
            ListenerKind::Click,
            ListenerKind::Input,
            ListenerKind::Submit,
            ListenerKind::Timer,
        ] {
            scope.adopt(kind, FakeRegistration::new(&live, &order, "x"));
        }
        scope.close();
    }
    assert_eq!(live.get(), 0);
}

#[test]
fn unmount_mid_transition_clears_the_slider() {
    let (live, order) = fixtures();
    let pipeline = Rc::new(RefCell::new(SliderPipeline::new(SliderConfig::default()).unwrap()));
    let mut scope = Scope::new("slider");
    {
        let pipeline = pipeline.clone();
        scope.adopt(
            ListenerKind::AnimationFrame,
            OnTeardown(move || pipeline.borrow_mut().teardown()),
        );
    }
    scope.adopt(ListenerKind::Scroll, FakeRegistration::new(&live, &order, "scroll"));

    pipeline.borrow_mut().on_scroll(common::at_progress(0.5));
    let surface = Some(SurfaceSize {
        width: 640,
        height: 480,
    });
    // run until the overlay starts moving
    for _ in 0..120 {
        pipeline.borrow_mut().frame(FrameInput {
            dt_sec: 1.0 / 60.0,
            elapsed_sec: 0.0,
            surface,
        });
        if pipeline.borrow().presenter().is_transitioning() {
            break;
        }
    }
    assert!(pipeline.borrow().presenter().is_transitioning());

    scope.close();
    assert_eq!(live.get(), 0);
    assert_eq!(pipeline.borrow().presenter().state(), OverlayState::Idle);
    assert_eq!(Rc::strong_count(&pipeline), 1);
}
