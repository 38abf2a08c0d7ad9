//! Board App
//!
//! Header over a palette + board split, with the notice toast on top.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BoardArea, BoardHeader, NoticeToast, Palette, PaletteGhost};
use crate::context::BoardContext;
use crate::mobile::{bind_viewport_listener, current_viewport};
use crate::store::UiState;

#[component]
pub fn App() -> impl IntoView {
    let ui = Store::new(UiState::new(current_viewport()));
    provide_context(ui);
    provide_context(BoardContext::new(ui));
    bind_viewport_listener(ui);

    view! {
        <div class="board-layout">
            <BoardHeader />
            <div class="board-body">
                <Palette />
                <BoardArea />
            </div>
            <PaletteGhost />
            <NoticeToast />
        </div>
    }
}
