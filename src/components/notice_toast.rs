//! Notice Toast Component

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_ui_store, NoticeKind, UiStateStoreFields};

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ui = use_ui_store();

    move || {
        ui.notice().get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice success",
                NoticeKind::Info => "notice info",
                NoticeKind::Error => "notice error",
            };
            view! {
                <div class=class role="status" on:click=move |_| store_dismiss_notice(&ui)>
                    {notice.text}
                </div>
            }
        })
    }
}
