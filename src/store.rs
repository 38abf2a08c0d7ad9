//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Board contents
//! live in `BoardContext`; this store holds the chrome around the board.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::NOTICE_DURATION_MS;
use crate::models::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// A transient message shown over the board
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Palette drawer visibility (mobile only)
    pub show_toolbar: bool,
    /// Notice currently on screen
    pub notice: Option<Notice>,
    /// Monotonic notice counter so stale timers don't hide newer notices
    pub notice_seq: u32,
    pub viewport: Viewport,
}

impl UiState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }
}

pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a notice and dismiss it after a few seconds
pub fn store_show_notice(store: &UiStore, kind: NoticeKind, text: impl Into<String>) {
    let id = {
        let seq_field = store.notice_seq();
        let mut seq = seq_field.write();
        *seq += 1;
        *seq
    };
    store.notice().set(Some(Notice {
        id,
        kind,
        text: text.into(),
    }));

    let store = *store;
    Timeout::new(NOTICE_DURATION_MS, move || {
        if store.notice().get_untracked().is_some_and(|n| n.id == id) {
            store.notice().set(None);
        }
    })
    .forget();
}

pub fn store_dismiss_notice(store: &UiStore) {
    store.notice().set(None);
}

pub fn store_toggle_toolbar(store: &UiStore) {
    store.show_toolbar().update(|open| *open = !*open);
}
