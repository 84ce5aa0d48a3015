use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Scroll,
    Resize,
    Intersection,
    AnimationFrame,
    Click,
    Input,
    Submit,
    Timer,
}

/// Something registered with the platform that must be unregistered.
pub trait Teardown {
    fn teardown(&mut self);
}

/// Adapter for ad-hoc cleanup closures.
pub struct OnTeardown<F: FnMut()>(pub F);

impl<F: FnMut()> Teardown for OnTeardown<F> {
    fn teardown(&mut self) {
        (self.0)()
    }
}

/// Owner of every registration made while a view is mounted.
///
/// Handles are torn down in reverse registration order by [`Scope::close`],
/// and by `Drop` if the scope is abandoned without an explicit close.
pub struct Scope {
    name: &'static str,
    entries: Vec<(ListenerKind, Box<dyn Teardown>)>,
    live: FnvHashMap<ListenerKind, usize>,
}

impl Scope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
            live: FnvHashMap::default(),
        }
    }

    pub fn adopt(&mut self, kind: ListenerKind, handle: impl Teardown + 'static) {
        self.entries.push((kind, Box::new(handle)));
        *self.live.entry(kind).or_insert(0) += 1;
    }

    pub fn live_count(&self) -> usize {
        self.entries.len()
    }

    pub fn live_of(&self, kind: ListenerKind) -> usize {
        self.live.get(&kind).copied().unwrap_or(0)
    }

    pub fn close(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let n = self.entries.len();
        while let Some((kind, mut handle)) = self.entries.pop() {
            handle.teardown();
            if let Some(c) = self.live.get_mut(&kind) {
                *c = c.saturating_sub(1);
            }
        }
        self.live.clear();
        log::debug!("[scope] {}: released {} registrations", self.name, n);
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.close();
    }
}
