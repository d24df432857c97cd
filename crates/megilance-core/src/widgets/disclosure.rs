//! Open/closed state shared by tooltips, accordion items and menus.

/// A two-state show/hide toggle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}
