use super::constants::HEADER_HIDE_AFTER_PX;

/// Fixed header that slides away while the user scrolls down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderVisibility {
    last_y: f64,
    hidden: bool,
}

impl HeaderVisibility {
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Feed the window scroll offset; returns true if visibility flipped.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        if !scroll_y.is_finite() {
            return false;
        }
        let hide = scroll_y > self.last_y && scroll_y > HEADER_HIDE_AFTER_PX;
        self.last_y = scroll_y;
        let flipped = hide != self.hidden;
        self.hidden = hide;
        flipped
    }
}

/// Collapsible navigation for narrow screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::take(&mut self.open)
    }
}
