//! Push Button Control
//!
//! Latching ON/OFF button, round or rectangular.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonShape {
    Circle,
    Rectangle,
}

#[component]
pub fn PushButton(
    #[prop(into)] value: Signal<bool>,
    on_change: Callback<bool>,
    shape: ButtonShape,
) -> impl IntoView {
    let base = match shape {
        ButtonShape::Circle => "push-btn circle",
        ButtonShape::Rectangle => "push-btn rectangle",
    };

    view! {
        <div class="control push-button-control">
            <button
                class=move || if value.get() { format!("{} on", base) } else { base.to_string() }
                on:click=move |_| on_change.run(!value.get_untracked())
            >
                {move || if value.get() { "ON" } else { "OFF" }}
            </button>
        </div>
    }
}
