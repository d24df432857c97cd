//! Caller-controlled dialog.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use megilance_core::widgets::ModalState;
use megilance_core::Component;

use crate::context::{use_class_set, use_key_listeners};

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: EventHandler<()>,
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Dialog over a dimmed overlay.
///
/// The Escape handler is registered with the provider's key listeners after
/// render while `open` is true, and released when `open` turns false or the
/// modal unmounts. Clicking the overlay also closes.
#[component]
pub fn Modal(props: ModalProps) -> Element {
    let listeners = use_key_listeners();
    let state = use_hook(|| Rc::new(RefCell::new(ModalState::new())));
    let classes = use_class_set(Component::Modal);

    let sync_state = state.clone();
    let close_on_escape = props.on_close;
    use_effect(use_reactive((&props.open,), move |(open,)| {
        sync_state
            .borrow_mut()
            .sync(open, &listeners, move || close_on_escape.call(()));
    }));

    let drop_state = state.clone();
    use_drop(move || {
        // Releasing the guard detaches the listener
        *drop_state.borrow_mut() = ModalState::new();
    });

    if !props.open {
        return rsx! {};
    }
    let Some(classes) = classes else {
        return rsx! {};
    };
    let classes = classes.with_override(props.class.as_deref());
    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "{classes}",
                role: "dialog",
                "aria-modal": "true",
                tabindex: "-1",
                onmounted: move |evt| async move {
                    let _ = evt.set_focus(true).await;
                },
                onclick: move |e| e.stop_propagation(),

                if let Some(title) = &props.title {
                    header { class: "modal__header",
                        h2 { class: "modal__title", "{title}" }
                        button {
                            class: "modal__close",
                            r#type: "button",
                            "aria-label": "Close",
                            onclick: move |_| on_close.call(()),
                            "\u{00D7}"
                        }
                    }
                }
                div { class: "modal__body", {props.children} }
            }
        }
    }
}
