//! Board Area Component
//!
//! The drop surface. Owns the global pointer bindings for drags that start
//! in the palette or on a placed item.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_pointerup, DragRelease};

use crate::components::BoardItem;
use crate::context::{use_board, DragPayload};
use crate::models::{BoardRect, Point, Viewport};
use crate::store::UiStateStoreFields;

/// DOM id of the board surface
const BOARD_ELEMENT_ID: &str = "board";

/// Bounding box of the board surface, if it is mounted
pub fn board_rect() -> Option<BoardRect> {
    let el = web_sys::window()?.document()?.get_element_by_id(BOARD_ELEMENT_ID)?;
    let rect = el.get_bounding_client_rect();
    Some(BoardRect {
        left: rect.left(),
        top: rect.top(),
        scroll_left: f64::from(el.scroll_left()),
        scroll_top: f64::from(el.scroll_top()),
    })
}

/// True when the client point lies over the visible board surface
fn is_over_board(point: Point) -> bool {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(BOARD_ELEMENT_ID))
    else {
        return false;
    };
    let rect = el.get_bounding_client_rect();
    let (x, y) = (f64::from(point.x), f64::from(point.y));
    x >= rect.left() && x <= rect.right() && y >= rect.top() && y <= rect.bottom()
}

#[component]
pub fn BoardArea() -> impl IntoView {
    let ctx = use_board();
    let ui = ctx.ui();

    let on_drag_start = move |payload: DragPayload| {
        if let DragPayload::Item(id) = payload {
            ctx.bring_to_front(id);
        }
    };

    bind_global_pointerup(ctx.dnd, on_drag_start, move |release: DragRelease<DragPayload>| match release.payload {
        DragPayload::Palette(kind) => {
            let at = Point::new(release.end.x, release.end.y);
            if is_over_board(at) {
                log::debug!("[DND] palette drop: {:?} at ({}, {})", kind, at.x, at.y);
                ctx.add_dropped(kind, at, board_rect());
            }
        }
        DragPayload::Item(id) => {
            let delta = release.delta();
            log::debug!("[DND] item drop: {} by ({}, {})", id, delta.dx, delta.dy);
            ctx.move_by(id, delta);
        }
    });

    let hint = move || {
        if ui.viewport().get() == Viewport::Mobile {
            "Tap the menu icon and add components to the board"
        } else {
            "Drag components from the toolbar to the board"
        }
    };

    view! {
        <div id=BOARD_ELEMENT_ID class="board-area">
            <For
                each=move || ctx.ids()
                key=|id| *id
                children=move |id| view! { <BoardItem id=id /> }
            />
            <Show when=move || ctx.board.with(|b| b.is_empty())>
                <div class="board-empty-hint">{hint}</div>
            </Show>
        </div>
    }
}
