//! Board Header Component
//!
//! Title bar with layout actions and the mobile palette toggle.

use leptos::prelude::*;

use crate::context::use_board;
use crate::models::Viewport;
use crate::store::{store_toggle_toolbar, UiStateStoreFields};

#[component]
pub fn BoardHeader() -> impl IntoView {
    let ctx = use_board();
    let ui = ctx.ui();
    let is_mobile = move || ui.viewport().get() == Viewport::Mobile;

    view! {
        <header class="board-header">
            <div class="board-header-title">
                <Show when=is_mobile>
                    <button
                        class=move || if ui.show_toolbar().get() { "menu-btn active" } else { "menu-btn" }
                        aria-label="Toggle toolbar"
                        on:click=move |_| store_toggle_toolbar(&ui)
                    >
                        "☰"
                    </button>
                </Show>
                <h1>"IoT Control Board"</h1>
            </div>
            <div class="board-header-actions">
                <button class="header-btn save" on:click=move |_| ctx.save()>"Save"</button>
                <button class="header-btn load" on:click=move |_| ctx.load()>"Load"</button>
                <button
                    class="header-btn clear"
                    disabled=move || ctx.board.with(|b| b.is_empty())
                    on:click=move |_| ctx.clear()
                >
                    "Clear"
                </button>
            </div>
        </header>
    }
}
