//! Board Context
//!
//! Shared board state and the actions the components call, provided via
//! Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals, DragDelta};
use uuid::Uuid;

use crate::board::Board;
use crate::layout_store::{load_layout, save_layout, BrowserStorage, LayoutError};
use crate::models::{BoardRect, ComponentKind, ControlValue, Offset, Point, Size};
use crate::store::{store_show_notice, NoticeKind, UiStore, UiStateStoreFields};

/// What a drag is carrying
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPayload {
    /// New control dragged out of the palette
    Palette(ComponentKind),
    /// Existing control being repositioned
    Item(Uuid),
}

/// Board-wide signals and actions provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Component collection and z-index counter
    pub board: RwSignal<Board>,
    /// Drag state shared by palette and board items
    pub dnd: DndSignals<DragPayload>,
    ui: UiStore,
}

impl BoardContext {
    pub fn new(ui: UiStore) -> Self {
        Self {
            board: RwSignal::new(Board::new()),
            dnd: create_dnd_signals(),
            ui,
        }
    }

    pub fn ui(&self) -> UiStore {
        self.ui
    }

    /// Ids in insertion order
    pub fn ids(&self) -> Vec<Uuid> {
        self.board.with(|b| b.components().iter().map(|c| c.id).collect())
    }

    pub fn add_dropped(&self, kind: ComponentKind, at: Point, rect: Option<BoardRect>) {
        let viewport = self.ui.viewport().get_untracked();
        self.board.update(|b| {
            b.add_from_palette(kind, at, rect, viewport);
        });
    }

    pub fn add_tapped(&self, kind: ComponentKind) {
        let viewport = self.ui.viewport().get_untracked();
        self.board.update(|b| {
            b.add_at_next_slot(kind, viewport);
        });
    }

    pub fn move_by(&self, id: Uuid, delta: DragDelta) {
        self.board.update(|b| {
            b.move_existing(id, Offset::new(delta.dx, delta.dy));
        });
    }

    pub fn change_value(&self, id: Uuid, value: ControlValue) {
        self.board.update(|b| {
            b.change_value(id, value);
        });
    }

    pub fn delete(&self, id: Uuid) {
        self.board.update(|b| {
            if b.delete_component(id) {
                log::info!("[BOARD] deleted {}", id);
            }
        });
    }

    pub fn resize(&self, id: Uuid, size: Size) {
        self.board.update(|b| {
            b.resize(id, size.width, size.height);
        });
    }

    pub fn bring_to_front(&self, id: Uuid) {
        self.board.update(|b| {
            b.bring_to_front(id);
        });
    }

    pub fn clear(&self) {
        self.board.update(Board::clear);
        store_show_notice(&self.ui, NoticeKind::Info, "Board cleared");
    }

    pub fn save(&self) {
        let result = BrowserStorage::open().and_then(|storage| self.board.with_untracked(|b| save_layout(b, &storage)));
        match result {
            Ok(count) => store_show_notice(&self.ui, NoticeKind::Success, format!("Layout saved ({} components)", count)),
            Err(e) => {
                log::error!("[STORE] save failed: {}", e);
                store_show_notice(&self.ui, NoticeKind::Error, format!("Could not save layout: {}", e));
            }
        }
    }

    pub fn load(&self) {
        let storage = match BrowserStorage::open() {
            Ok(storage) => storage,
            Err(e) => {
                store_show_notice(&self.ui, NoticeKind::Error, format!("Could not load layout: {}", e));
                return;
            }
        };
        // Load into a copy so a failed load does not notify subscribers
        let mut next = self.board.get_untracked();
        match load_layout(&mut next, &storage) {
            Ok(count) => {
                self.board.set(next);
                store_show_notice(&self.ui, NoticeKind::Success, format!("Layout loaded ({} components)", count));
            }
            Err(LayoutError::NotFound) => {
                store_show_notice(&self.ui, NoticeKind::Info, "No saved layout found");
            }
            Err(e) => {
                log::error!("[STORE] load failed: {}", e);
                store_show_notice(&self.ui, NoticeKind::Error, format!("Could not load layout: {}", e));
            }
        }
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
