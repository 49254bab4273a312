//! Document-level listeners scoped to a component's lifetime.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use reportdesk_core::outside::{PointerHit, Subtree, classify};
use tracing::trace;
use wasm_bindgen::JsCast;

/// A mounted DOM subtree.
struct DomSubtree(web_sys::Node);

impl Subtree for DomSubtree {
    type Node = web_sys::Node;

    fn contains(&self, node: &web_sys::Node) -> bool {
        self.0.contains(Some(node))
    }
}

/// Call `on_outside` for every pointer-down whose target is not inside `root`.
///
/// One listener per call, removed when the calling component's owner is
/// cleaned up. The callback is read at event time, so passing a signal that
/// later holds a different callback never runs the old one. Nothing fires
/// while `root` is unbound.
pub fn use_click_outside(
    root: NodeRef<html::Div>,
    on_outside: impl Into<Signal<Callback<()>>>,
) {
    let on_outside = on_outside.into();

    let handle = window_event_listener(ev::pointerdown, move |event| {
        let root = root.get_untracked().map(|el| DomSubtree(el.into()));
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());

        if let Some(PointerHit::Outside) = classify(root.as_ref(), target.as_ref()) {
            trace!("outside pointer-down");
            on_outside.get_untracked().run(());
        }
    });

    on_cleanup(move || handle.remove());
}

/// Call `on_escape` whenever Escape is pressed, for the caller's lifetime.
pub fn use_escape_key(on_escape: Callback<()>) {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_escape.run(());
        }
    });

    on_cleanup(move || handle.remove());
}
