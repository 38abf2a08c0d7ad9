//! Palette Component
//!
//! Lists addable controls. On desktop each entry is a drag source; on
//! mobile a tap adds the control straight into the next grid slot.

use leptos::prelude::*;
use leptos_dragdrop::make_on_pointerdown;

use crate::context::{use_board, DragPayload};
use crate::models::{ComponentKind, Viewport};
use crate::store::UiStateStoreFields;

#[component]
pub fn Palette() -> impl IntoView {
    let ctx = use_board();
    let ui = ctx.ui();
    let is_mobile = move || ui.viewport().get() == Viewport::Mobile;

    let palette_class = move || {
        let mut c = String::from("palette");
        if is_mobile() {
            c.push_str(" drawer");
            if ui.show_toolbar().get() { c.push_str(" open"); }
        }
        c
    };

    view! {
        <aside class=palette_class>
            <h2 class="palette-title">{move || if is_mobile() { "Tap to Add" } else { "Components" }}</h2>
            {ComponentKind::ALL.into_iter().map(|kind| view! { <PaletteEntry kind=kind /> }).collect_view()}
        </aside>
    }
}

#[component]
fn PaletteEntry(kind: ComponentKind) -> impl IntoView {
    let ctx = use_board();
    let ui = ctx.ui();
    let dnd = ctx.dnd;
    let start_drag = make_on_pointerdown(dnd, DragPayload::Palette(kind));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ui.viewport().get_untracked() == Viewport::Desktop {
            ev.prevent_default();
            start_drag(ev);
        }
    };

    let on_click = move |_| {
        if ui.viewport().get_untracked() == Viewport::Mobile {
            ctx.add_tapped(kind);
            ui.show_toolbar().set(false);
        }
    };

    let is_dragging = move || dnd.dragging_read.get() == Some(DragPayload::Palette(kind));

    view! {
        <div
            class=move || if is_dragging() { "palette-entry dragging" } else { "palette-entry" }
            on:pointerdown=on_pointerdown
            on:click=on_click
        >
            <span class="palette-icon">{kind.icon()}</span>
            <span class="palette-label">{kind.label()}</span>
        </div>
    }
}

/// Floating preview that follows the pointer during a palette drag
#[component]
pub fn PaletteGhost() -> impl IntoView {
    let dnd = use_board().dnd;
    let dragged_kind = move || match dnd.dragging_read.get() {
        Some(DragPayload::Palette(kind)) => Some(kind),
        _ => None,
    };

    move || {
        dragged_kind().map(|kind| {
            let style = move || {
                let pos = dnd.pointer_read.get();
                format!("left: {}px; top: {}px;", pos.x, pos.y)
            };
            view! {
                <div class="palette-ghost" style=style>
                    <span class="palette-icon">{kind.icon()}</span>
                    <span class="palette-label">{kind.label()}</span>
                </div>
            }
        })
    }
}
