//! Stepper Control
//!
//! Increment/decrement pair, laid out horizontally or vertically.

use leptos::prelude::*;

use crate::controls::{stepper_next, StepDirection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[component]
pub fn StepperControl(
    #[prop(into)] value: Signal<f64>,
    on_change: Callback<f64>,
    orientation: Orientation,
) -> impl IntoView {
    let step = move |direction: StepDirection| {
        if let Some(next) = stepper_next(value.get_untracked(), direction) {
            on_change.run(next);
        }
    };

    let (class, label, up_icon, down_icon) = match orientation {
        Orientation::Horizontal => ("control stepper-control horizontal", "STEP H", "→", "←"),
        Orientation::Vertical => ("control stepper-control vertical", "STEP V", "↑", "↓"),
    };

    let decrement = view! {
        <button class="stepper-btn" on:click=move |_| step(StepDirection::Decrement)>{down_icon}</button>
    };
    let increment = view! {
        <button class="stepper-btn" on:click=move |_| step(StepDirection::Increment)>{up_icon}</button>
    };

    // Horizontal reads left-to-right (− then +), vertical top-to-bottom (+ then −)
    let buttons = match orientation {
        Orientation::Horizontal => view! { <div class="stepper-buttons">{decrement}{increment}</div> }.into_any(),
        Orientation::Vertical => view! { <div class="stepper-buttons">{increment}{decrement}</div> }.into_any(),
    };

    view! {
        <div class=class>
            <div class="stepper-value">{move || format!("{}: {}", label, value.get())}</div>
            {buttons}
        </div>
    }
}
