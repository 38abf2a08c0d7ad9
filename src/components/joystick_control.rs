//! Joystick Control
//!
//! Two-axis pad for manual positioning. Deflection follows the pointer
//! while held and springs back to centre on release.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::{track_gesture, PointerPos};

use crate::controls::joystick_point;
use crate::models::JoystickPoint;

/// Knob travel as a share of the pad, in percent
const KNOB_TRAVEL_PCT: f64 = 35.0;

#[component]
pub fn JoystickControl(
    #[prop(into)] value: Signal<JoystickPoint>,
    on_change: Callback<JoystickPoint>,
) -> impl IntoView {
    let pad = NodeRef::<Div>::new();

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        // Keep the board from treating this as an item drag
        ev.stop_propagation();
        ev.prevent_default();
        let Some(el) = pad.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let centre_x = rect.left() + rect.width() / 2.0;
        let centre_y = rect.top() + rect.height() / 2.0;
        let radius = rect.width().min(rect.height()) / 2.0;
        let deflect = move |pos: PointerPos| {
            joystick_point(f64::from(pos.x) - centre_x, f64::from(pos.y) - centre_y, radius)
        };

        on_change.run(deflect(PointerPos::from_event(&ev)));
        track_gesture(
            move |pos| on_change.run(deflect(pos)),
            move |_| on_change.run(JoystickPoint::default()),
        );
    };

    let knob_style = move || {
        let p = value.get();
        format!(
            "left: {:.1}%; top: {:.1}%;",
            50.0 + p.x * KNOB_TRAVEL_PCT,
            50.0 - p.y * KNOB_TRAVEL_PCT,
        )
    };

    view! {
        <div class="control joystick-control">
            <div class="joystick-pad" node_ref=pad on:pointerdown=on_pointerdown>
                <div class="joystick-knob" style=knob_style />
            </div>
            <div class="joystick-readout">{move || {
                let p = value.get();
                format!("X {:+.2}  Y {:+.2}", p.x, p.y)
            }}</div>
        </div>
    }
}
