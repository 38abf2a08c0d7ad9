//! Slider Control
//!
//! Temperature setpoint, 0-100 °C in whole degrees.

use leptos::prelude::*;

use crate::config::{CONTROL_MAX, CONTROL_MIN, CONTROL_STEP};
use crate::controls::slider_value;

#[component]
pub fn SliderControl(
    #[prop(into)] value: Signal<f64>,
    on_change: Callback<f64>,
) -> impl IntoView {
    view! {
        <div class="control slider-control">
            <label class="slider-label">{move || format!("Temperature: {}°C", value.get())}</label>
            <input
                type="range"
                min=CONTROL_MIN.to_string()
                max=CONTROL_MAX.to_string()
                step=CONTROL_STEP.to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    let raw = event_target_value(&ev).parse::<f64>().unwrap_or(CONTROL_MIN);
                    on_change.run(slider_value(raw));
                }
            />
            <div class="slider-scale">
                <span>"0°C"</span>
                <span>"50°C"</span>
                <span>"100°C"</span>
            </div>
        </div>
    }
}
