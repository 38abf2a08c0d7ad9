//! Switch Control
//!
//! On/off toggle with a device status line.

use leptos::prelude::*;

#[component]
pub fn SwitchControl(
    #[prop(into)] value: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="control switch-control">
            <div class="switch-row">
                <span class="switch-label">{move || if value.get() { "ON" } else { "OFF" }}</span>
                <button
                    class=move || if value.get() { "switch-track on" } else { "switch-track" }
                    role="switch"
                    aria-checked=move || value.get().to_string()
                    on:click=move |_| on_change.run(!value.get_untracked())
                >
                    <span class="switch-thumb" />
                </button>
            </div>
            <div class=move || if value.get() { "switch-status running" } else { "switch-status" }>
                {move || if value.get() { "Status: Device is running" } else { "Status: Device is stopped" }}
            </div>
        </div>
    }
}
