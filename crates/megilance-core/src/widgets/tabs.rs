//! Tab strip selection with roving keyboard focus.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TabKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

/// Selected index among `count` tabs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TabsState {
    selected: usize,
    count: usize,
}

impl TabsState {
    /// `default_index` is clamped into range.
    pub fn new(count: usize, default_index: usize) -> Self {
        Self {
            selected: default_index.min(count.saturating_sub(1)),
            count,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn select(&mut self, index: usize) {
        if index < self.count {
            self.selected = index;
        }
    }

    /// Arrow keys wrap around. Returns the new index if it changed.
    pub fn handle_key(&mut self, key: TabKey) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let next = match key {
            TabKey::ArrowRight => (self.selected + 1) % self.count,
            TabKey::ArrowLeft => (self.selected + self.count - 1) % self.count,
            TabKey::Home => 0,
            TabKey::End => self.count - 1,
        };
        if next == self.selected {
            None
        } else {
            self.selected = next;
            Some(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_wrap() {
        let mut tabs = TabsState::new(3, 0);
        assert_eq!(tabs.handle_key(TabKey::ArrowLeft), Some(2));
        assert_eq!(tabs.handle_key(TabKey::ArrowRight), Some(0));
    }

    #[test]
    fn home_end() {
        let mut tabs = TabsState::new(4, 1);
        assert_eq!(tabs.handle_key(TabKey::End), Some(3));
        assert_eq!(tabs.handle_key(TabKey::End), None);
        assert_eq!(tabs.handle_key(TabKey::Home), Some(0));
    }

    #[test]
    fn empty_strip_ignores_keys() {
        let mut tabs = TabsState::new(0, 5);
        assert_eq!(tabs.selected(), 0);
        assert_eq!(tabs.handle_key(TabKey::ArrowRight), None);
    }

    #[test]
    fn default_index_is_clamped() {
        assert_eq!(TabsState::new(2, 9).selected(), 1);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut tabs = TabsState::new(2, 0);
        tabs.select(5);
        assert_eq!(tabs.selected(), 0);
        tabs.select(1);
        assert_eq!(tabs.selected(), 1);
    }
}
