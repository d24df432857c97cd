//! Dropdown open-state and selection.

use serde::{Deserialize, Serialize};

/// One selectable entry.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Open/closed flag plus the current selection.
///
/// Selecting an option or clicking outside always closes the list. Only
/// [`DropdownState::select`] yields a value for the caller's callback, so a
/// callback fires exactly once per user selection.
#[derive(Clone, PartialEq, Debug)]
pub struct DropdownState<T> {
    open: bool,
    selected: Option<T>,
}

impl<T> Default for DropdownState<T> {
    fn default() -> Self {
        Self {
            open: false,
            selected: None,
        }
    }
}

impl<T: Clone> DropdownState<T> {
    pub fn new(selected: Option<T>) -> Self {
        Self {
            open: false,
            selected,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Trigger clicked.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// An option was clicked. Closes the list and returns the value to hand
    /// to the selection callback.
    pub fn select(&mut self, option: T) -> T {
        self.selected = Some(option.clone());
        self.open = false;
        option
    }

    /// A click landed outside the widget. Closes without selecting.
    pub fn click_outside(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<DropdownOption> {
        vec![
            DropdownOption::new("hourly", "Hourly"),
            DropdownOption::new("fixed", "Fixed price"),
        ]
    }

    #[test]
    fn select_returns_option_and_closes() {
        let opts = options();
        let mut state = DropdownState::default();
        state.toggle();
        assert!(state.is_open());

        let picked = state.select(opts[1].clone());
        assert_eq!(picked, opts[1]);
        assert_eq!(state.selected(), Some(&opts[1]));
        assert!(!state.is_open());
    }

    #[test]
    fn click_outside_closes_without_selecting() {
        let mut state: DropdownState<DropdownOption> = DropdownState::default();
        state.toggle();
        state.click_outside();
        assert!(!state.is_open());
        assert!(state.selected().is_none());
    }

    #[test]
    fn click_outside_keeps_previous_selection() {
        let opts = options();
        let mut state = DropdownState::new(Some(opts[0].clone()));
        state.toggle();
        state.click_outside();
        assert_eq!(state.selected(), Some(&opts[0]));
    }
}
