//! Caller-controlled pagination.

/// Current page and total, both 1-based. The widget never owns the page;
/// it only derives which controls are enabled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pager {
    pub current: u32,
    pub total: u32,
}

impl Pager {
    pub fn new(current: u32, total: u32) -> Self {
        Self { current, total }
    }

    /// Nothing is rendered for a single page (or none).
    pub fn is_visible(&self) -> bool {
        self.total > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Target page for "previous", if enabled.
    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current - 1)
    }

    /// Target page for "next", if enabled.
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current + 1)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_is_hidden() {
        assert!(!Pager::new(1, 1).is_visible());
        assert!(!Pager::new(1, 0).is_visible());
    }

    #[test]
    fn first_of_five() {
        let pager = Pager::new(1, 5);
        assert!(pager.is_visible());
        assert!(!pager.has_previous());
        assert!(pager.has_next());
        assert_eq!(pager.previous(), None);
        assert_eq!(pager.next(), Some(2));
    }

    #[test]
    fn last_of_five() {
        let pager = Pager::new(5, 5);
        assert!(pager.has_previous());
        assert!(!pager.has_next());
        assert_eq!(pager.previous(), Some(4));
        assert_eq!(pager.next(), None);
    }

    #[test]
    fn label_text() {
        assert_eq!(Pager::new(2, 7).label(), "Page 2 of 7");
    }
}
