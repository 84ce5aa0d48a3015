// Paging for the digital catalogue and the product detail images.

use super::constants::{ZOOM_MAX_STEPS, ZOOM_STEP};

/// Wrap-around index over `len` pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    len: usize,
    index: usize,
}

impl Pager {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

/// Full-screen viewer over a pager. Opening always starts at the first image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    open: bool,
    pager: Pager,
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn open(&mut self, image_count: usize) {
        self.pager = Pager::new(image_count);
        self.open = image_count > 0;
    }

    /// Open on a specific page (catalogue "maximize" keeps the current page).
    pub fn open_at(&mut self, image_count: usize, index: usize) {
        self.open(image_count);
        self.pager.go_to(index);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.pager = Pager::default();
    }

    pub fn next(&mut self) -> Option<usize> {
        self.open.then(|| self.pager.next())
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.open.then(|| self.pager.prev())
    }
}

/// Image magnification from 1x to 3x. Kept as a step count so repeated
/// presses land exactly on the bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zoom {
    steps: u8,
}

impl Zoom {
    pub fn scale(&self) -> f32 {
        1.0 + ZOOM_STEP * f32::from(self.steps)
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.steps = (self.steps + 1).min(ZOOM_MAX_STEPS);
        self.scale()
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.steps = self.steps.saturating_sub(1);
        self.scale()
    }

    pub fn reset(&mut self) {
        self.steps = 0;
    }
}

/// "Read more" modal over one product's detail images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetailViewer {
    product: Option<usize>,
    lightbox: Lightbox,
    zoom: Zoom,
}

impl DetailViewer {
    pub fn product(&self) -> Option<usize> {
        self.product.filter(|_| self.lightbox.is_open())
    }

    pub fn image_index(&self) -> usize {
        self.lightbox.pager().index()
    }

    pub fn image_count(&self) -> usize {
        self.lightbox.pager().len()
    }

    pub fn zoom(&self) -> &Zoom {
        &self.zoom
    }

    pub fn zoom_mut(&mut self) -> &mut Zoom {
        &mut self.zoom
    }

    /// Opens on the first image at 1x. A product without images stays closed.
    pub fn open(&mut self, product: usize, image_count: usize) {
        self.lightbox.open(image_count);
        self.product = self.lightbox.is_open().then_some(product);
        self.zoom.reset();
    }

    pub fn close(&mut self) {
        self.lightbox.close();
        self.product = None;
        self.zoom.reset();
    }

    pub fn next(&mut self) -> Option<usize> {
        self.lightbox.next()
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.lightbox.prev()
    }
}
