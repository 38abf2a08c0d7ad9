//! Leptos DragDrop Utilities
//!
//! Free-form drag-and-drop for Leptos using pointer events.
//! Uses movement threshold to distinguish click from drag, and reports
//! the pointer delta between press and release so callers can reposition
//! whatever was dragged.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Pointer position in viewport (client) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerPos {
    pub x: i32,
    pub y: i32,
}

impl PointerPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn from_event(ev: &web_sys::MouseEvent) -> Self {
        Self::new(ev.client_x(), ev.client_y())
    }

    /// Offset of `self` relative to `origin`
    pub fn delta_from(self, origin: PointerPos) -> DragDelta {
        DragDelta {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }
}

/// Pointer movement between two positions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragDelta {
    pub dx: i32,
    pub dy: i32,
}

/// True once the pointer has travelled far enough to count as a drag
pub fn exceeds_threshold(start: PointerPos, current: PointerPos) -> bool {
    let delta = current.delta_from(start);
    delta.dx.abs() > DRAG_THRESHOLD_PX || delta.dy.abs() > DRAG_THRESHOLD_PX
}

/// A finished drag, handed to the drop callback
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease<T> {
    pub payload: T,
    pub start: PointerPos,
    pub end: PointerPos,
}

impl<T> DragRelease<T> {
    pub fn delta(&self) -> DragDelta {
        self.end.delta_from(self.start)
    }
}

/// DnD state signals, generic over what is being dragged
pub struct DndSignals<T: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<T>>,
    pub dragging_write: WriteSignal<Option<T>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending payload (pointerdown but not yet dragging)
    pub pending_read: ReadSignal<Option<T>>,
    pub pending_write: WriteSignal<Option<T>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<PointerPos>,
    pub start_write: WriteSignal<PointerPos>,
    /// Latest pointer position while dragging
    pub pointer_read: ReadSignal<PointerPos>,
    pub pointer_write: WriteSignal<PointerPos>,
}

impl<T: Send + Sync + 'static> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DndSignals<T> {}

impl<T: Copy + Send + Sync + 'static> DndSignals<T> {
    /// Live offset of the current drag, zero when nothing is dragging
    pub fn live_delta(&self) -> DragDelta {
        if self.dragging_read.get().is_none() {
            return DragDelta::default();
        }
        self.pointer_read.get().delta_from(self.start_read.get())
    }
}

pub fn create_dnd_signals<T: Send + Sync + 'static>() -> DndSignals<T> {
    let (dragging_read, dragging_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<T>);
    let (start_read, start_write) = signal(PointerPos::default());
    let (pointer_read, pointer_write) = signal(PointerPos::default());
    DndSignals {
        dragging_read,
        dragging_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
        pointer_read,
        pointer_write,
    }
}

/// End drag operation
pub fn end_drag<T: Send + Sync + 'static>(dnd: &DndSignals<T>) {
    dnd.dragging_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    // Swallow the click that follows a real drag
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create pointerdown handler for draggable sources
/// Records pending drag with start position
pub fn make_on_pointerdown<T>(dnd: DndSignals<T>, payload: T) -> impl Fn(web_sys::PointerEvent) + Copy + 'static
where
    T: Copy + Send + Sync + 'static,
{
    move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        let pos = PointerPos::from_event(&ev);
        dnd.pending_write.set(Some(payload));
        dnd.start_write.set(pos);
        dnd.pointer_write.set(pos);
    }
}

/// Payload whose drag begins at `pos`, if this movement crosses the threshold
pub fn drag_begins<T: Copy>(pending: Option<T>, dragging: Option<T>, start: PointerPos, pos: PointerPos) -> Option<T> {
    match (pending, dragging) {
        (Some(payload), None) if exceeds_threshold(start, pos) => Some(payload),
        _ => None,
    }
}

/// Bind global pointermove handler - starts drag if moved enough
///
/// `on_start` fires once per drag, when the threshold is crossed.
pub fn bind_global_pointermove<T, S>(dnd: DndSignals<T>, on_start: S)
where
    T: Copy + Send + Sync + 'static,
    S: Fn(T) + 'static,
{
    let on_pointermove = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        let pending = dnd.pending_read.get_untracked();
        if pending.is_none() {
            return;
        }
        let pos = PointerPos::from_event(&ev);
        dnd.pointer_write.set(pos);

        if let Some(payload) = drag_begins(pending, dnd.dragging_read.get_untracked(), dnd.start_read.get_untracked(), pos) {
            log::debug!("[DND] drag started");
            dnd.dragging_write.set(Some(payload));
            on_start(payload);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("pointermove", on_pointermove.as_ref().unchecked_ref());
    }
    on_pointermove.forget();
}

/// Bind global pointerup handler for drop detection
///
/// `on_drop` only fires for real drags; a press released inside the
/// threshold is left to the element's own click handler. A
/// `pointercancel` abandons the drag without a drop.
pub fn bind_global_pointerup<T, S, F>(dnd: DndSignals<T>, on_start: S, on_drop: F)
where
    T: Copy + Send + Sync + 'static,
    S: Fn(T) + 'static,
    F: Fn(DragRelease<T>) + 'static,
{
    let on_pointerup = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let start = dnd.start_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);

        if let Some(payload) = dragging {
            end_drag(&dnd);
            on_drop(DragRelease {
                payload,
                start,
                end: PointerPos::from_event(&ev),
            });
        }
    });

    let on_pointercancel = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |_: web_sys::PointerEvent| {
        dnd.pending_write.set(None);
        if dnd.dragging_read.get_untracked().is_some() {
            log::debug!("[DND] drag cancelled");
            end_drag(&dnd);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("pointerup", on_pointerup.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("pointercancel", on_pointercancel.as_ref().unchecked_ref());
    }
    on_pointerup.forget();
    on_pointercancel.forget();

    // Also bind global pointermove
    bind_global_pointermove(dnd, on_start);
}

struct GestureListeners {
    on_move: Closure<dyn FnMut(web_sys::PointerEvent)>,
    on_up: Closure<dyn FnMut(web_sys::PointerEvent)>,
}

impl GestureListeners {
    fn detach(&self, doc: &web_sys::Document) {
        let _ = doc.remove_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
        let _ = doc.remove_event_listener_with_callback("pointerup", self.on_up.as_ref().unchecked_ref());
        let _ = doc.remove_event_listener_with_callback("pointercancel", self.on_up.as_ref().unchecked_ref());
    }
}

/// Track a single pointer gesture (e.g. a resize handle)
///
/// Global pointermove/pointerup listeners live only for the duration of
/// the gesture: `on_move` fires for every movement, `on_end` once on
/// release or cancel, after which the listeners are removed.
pub fn track_gesture<M, E>(on_move: M, on_end: E)
where
    M: Fn(PointerPos) + 'static,
    E: Fn(PointerPos) + 'static,
{
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let slot: Rc<RefCell<Option<GestureListeners>>> = Rc::new(RefCell::new(None));

    let on_move = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        on_move(PointerPos::from_event(&ev));
    });

    let up_slot = slot.clone();
    let up_doc = doc.clone();
    let on_up = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        on_end(PointerPos::from_event(&ev));
        let Some(listeners) = up_slot.borrow_mut().take() else {
            return;
        };
        listeners.detach(&up_doc);
        // Dropping the running closure is fine: wasm-bindgen frees it once the call returns
        drop(listeners);
    });

    let _ = doc.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("pointerup", on_up.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("pointercancel", on_up.as_ref().unchecked_ref());
    *slot.borrow_mut() = Some(GestureListeners { on_move, on_up });
}
