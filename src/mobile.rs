//! Viewport Detection
//!
//! Tracks whether the window is narrow enough for the mobile layout.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::MOBILE_BREAKPOINT_PX;
use crate::models::Viewport;
use crate::store::{UiStateStoreFields, UiStore};

/// Viewport class for the current window width
pub fn current_viewport() -> Viewport {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map_or(Viewport::Desktop, |width| Viewport::from_width(width, MOBILE_BREAKPOINT_PX))
}

/// Keep `store.viewport` in sync with window resizes
pub fn bind_viewport_listener(store: UiStore) {
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        let viewport = current_viewport();
        if store.viewport().get_untracked() != viewport {
            log::debug!("[APP] viewport is now {:?}", viewport);
            store.viewport().set(viewport);
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}
