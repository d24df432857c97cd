//! Modal visibility and Escape-key listener lifetime.
//!
//! [`KeyListeners`] owns the Escape handlers. The provider forwards every
//! Escape press to [`KeyListeners::dispatch_escape`], which runs the most
//! recently attached handler. A handler stays registered exactly as long as
//! its [`ListenerGuard`] lives, so a closed or unmounted modal cannot leak one.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Handler = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Registry of live Escape handlers.
#[derive(Clone, Default)]
pub struct KeyListeners {
    registry: Rc<RefCell<Registry>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `on_escape`; it stays live until the guard is dropped.
    pub fn attach(&self, on_escape: impl Fn() + 'static) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.handlers.push((id, Rc::new(on_escape)));
        ListenerGuard {
            id,
            registry: self.registry.clone(),
        }
    }

    /// Number of handlers currently attached.
    pub fn active(&self) -> usize {
        self.registry.borrow().handlers.len()
    }

    /// Run the newest handler (the topmost modal). Returns whether one ran.
    pub fn dispatch_escape(&self) -> bool {
        // Cloned out first: the handler may close the modal and drop its guard.
        let handler = self.registry.borrow().handlers.last().map(|(_, h)| h.clone());
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for KeyListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyListeners").field("active", &self.active()).finish()
    }
}

/// One attached handler. Detaches on drop.
pub struct ListenerGuard {
    id: u64,
    registry: Rc<RefCell<Registry>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let id = self.id;
        self.registry.borrow_mut().handlers.retain(|(h, _)| *h != id);
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

/// Follows the caller-controlled `open` prop and holds the Escape handler
/// while open.
#[derive(Debug, Default)]
pub struct ModalState {
    listener: Option<ListenerGuard>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile with the current `open` prop. Attaching twice is a no-op;
    /// closing drops the handler.
    pub fn sync(&mut self, open: bool, listeners: &KeyListeners, on_escape: impl Fn() + 'static) {
        match (open, self.listener.is_some()) {
            (true, false) => self.listener = Some(listeners.attach(on_escape)),
            (false, true) => self.listener = None,
            _ => {}
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let inner = hits.clone();
        (hits, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn listener_only_while_open() {
        let listeners = KeyListeners::new();
        let mut modal = ModalState::new();
        let (hits, on_escape) = counter();
        let on_escape = Rc::new(on_escape);

        let h = on_escape.clone();
        modal.sync(false, &listeners, move || h());
        assert_eq!(listeners.active(), 0);
        assert!(!listeners.dispatch_escape());

        let h = on_escape.clone();
        modal.sync(true, &listeners, move || h());
        assert_eq!(listeners.active(), 1);
        assert!(listeners.dispatch_escape());
        assert_eq!(hits.get(), 1);

        // Re-render while still open does not double attach
        let h = on_escape.clone();
        modal.sync(true, &listeners, move || h());
        assert_eq!(listeners.active(), 1);

        modal.sync(false, &listeners, || {});
        assert_eq!(listeners.active(), 0);
        assert!(!listeners.dispatch_escape());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn drop_detaches() {
        let listeners = KeyListeners::new();
        let (hits, on_escape) = counter();
        {
            let mut modal = ModalState::new();
            modal.sync(true, &listeners, on_escape);
            assert_eq!(listeners.active(), 1);
        }
        assert_eq!(listeners.active(), 0);
        assert!(!listeners.dispatch_escape());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn escape_goes_to_topmost() {
        let listeners = KeyListeners::new();
        let (outer_hits, outer) = counter();
        let (inner_hits, inner) = counter();
        let _outer = listeners.attach(outer);
        let inner_guard = listeners.attach(inner);

        listeners.dispatch_escape();
        assert_eq!((outer_hits.get(), inner_hits.get()), (0, 1));

        drop(inner_guard);
        listeners.dispatch_escape();
        assert_eq!((outer_hits.get(), inner_hits.get()), (1, 1));
    }

    #[test]
    fn handler_may_drop_its_own_guard() {
        let listeners = KeyListeners::new();
        let slot: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));
        let closer = slot.clone();
        *slot.borrow_mut() = Some(listeners.attach(move || {
            closer.borrow_mut().take();
        }));

        assert!(listeners.dispatch_escape());
        assert_eq!(listeners.active(), 0);
    }
}
