//! Board Item Component
//!
//! Renders one placed control at its stored geometry, with drag-to-move,
//! click-to-front, and delete/resize affordances.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_pointerdown, track_gesture, PointerPos};
use uuid::Uuid;

use crate::board::ResizeGesture;
use crate::components::{
    ButtonShape, JoystickControl, Orientation, PushButton, SliderControl, StepperControl, SwitchControl, TimerControl,
};
use crate::config::MOBILE_CONTROLS_HIDE_MS;
use crate::context::{use_board, DragPayload};
use crate::models::{ComponentKind, ControlValue, JoystickPoint, PlacedComponent, Point, Size, Viewport};
use crate::store::UiStateStoreFields;

fn to_point(pos: PointerPos) -> Point {
    Point::new(pos.x, pos.y)
}

#[component]
pub fn BoardItem(id: Uuid) -> impl IntoView {
    let ctx = use_board();
    let ui = ctx.ui();
    let dnd = ctx.dnd;
    let is_mobile = move || ui.viewport().get() == Viewport::Mobile;

    let component = Memo::new(move |_| ctx.board.with(|b| b.get(id).cloned()));
    // A placed control never changes type
    let kind = component.get_untracked().map(|c| c.kind);
    let (show_controls, set_show_controls) = signal(false);

    let is_dragging = move || dnd.dragging_read.get() == Some(DragPayload::Item(id));

    let item_style = move || {
        let Some(comp) = component.get() else {
            return String::new();
        };
        let mut style = format!(
            "left: {}px; top: {}px; width: {}px; height: {}px; z-index: {};",
            comp.left,
            comp.top,
            comp.width_or_default(),
            comp.height_or_default(),
            comp.z_index_or_default(),
        );
        if is_dragging() {
            let delta = dnd.live_delta();
            style.push_str(&format!(" transform: translate({}px, {}px);", delta.dx, delta.dy));
        }
        style
    };

    let item_class = move || {
        let mut c = String::from("board-item");
        if is_dragging() { c.push_str(" dragging"); }
        if show_controls.get() { c.push_str(" active"); }
        if is_mobile() { c.push_str(" compact"); }
        c
    };

    let start_drag = make_on_pointerdown(dnd, DragPayload::Item(id));
    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ui.viewport().get_untracked() == Viewport::Mobile {
            set_show_controls.set(true);
        }
        start_drag(ev);
    };
    let on_pointerup = move |_: web_sys::PointerEvent| {
        if ui.viewport().get_untracked() == Viewport::Mobile {
            Timeout::new(MOBILE_CONTROLS_HIDE_MS, move || {
                let _ = set_show_controls.try_set(false);
            })
            .forget();
        }
    };
    let on_pointerenter = move |_: web_sys::PointerEvent| {
        if ui.viewport().get_untracked() == Viewport::Desktop {
            set_show_controls.set(true);
        }
    };
    let on_pointerleave = move |_: web_sys::PointerEvent| {
        if ui.viewport().get_untracked() == Viewport::Desktop {
            set_show_controls.set(false);
        }
    };

    let on_click = move |_| {
        // The click that ends a drag was already handled as a move
        if !dnd.drag_just_ended_read.get_untracked() {
            ctx.bring_to_front(id);
        }
    };

    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.delete(id);
    };

    let on_resize_start = move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        let Some(comp) = component.get_untracked() else {
            return;
        };
        let gesture = ResizeGesture::begin(
            to_point(PointerPos::from_event(&ev)),
            Size::new(comp.width_or_default(), comp.height_or_default()),
        );
        track_gesture(
            move |pos| ctx.resize(id, gesture.size_at(to_point(pos))),
            move |_| log::debug!("[BOARD] resize of {} finished", id),
        );
    };

    view! {
        <div
            class=item_class
            style=item_style
            on:pointerdown=on_pointerdown
            on:pointerup=on_pointerup
            on:pointerenter=on_pointerenter
            on:pointerleave=on_pointerleave
            on:click=on_click
        >
            <Show when=move || show_controls.get()>
                <div class="item-actions">
                    <button class="item-delete-btn" title="Delete" on:click=on_delete>"🗑"</button>
                </div>
            </Show>
            <div class="item-body">
                {kind.map(|kind| render_control(kind, id))}
            </div>
            <Show when=move || show_controls.get()>
                <div class="item-resize-handle" on:pointerdown=on_resize_start />
            </Show>
        </div>
    }
}

/// Map a component's type to its control, bound to the stored value
fn render_control(kind: ComponentKind, id: Uuid) -> AnyView {
    let ctx = use_board();
    let flag = Signal::derive(move || ctx.board.with(|b| b.get(id).is_some_and(PlacedComponent::flag)));
    let number = Signal::derive(move || ctx.board.with(|b| b.get(id).map_or(0.0, PlacedComponent::number)));
    let point = Signal::derive(move || ctx.board.with(|b| b.get(id).map(PlacedComponent::point).unwrap_or_default()));

    let set_flag = Callback::new(move |on: bool| ctx.change_value(id, ControlValue::Flag(on)));
    let set_number = Callback::new(move |n: f64| ctx.change_value(id, ControlValue::Number(n)));

    match kind {
        ComponentKind::Switch => view! { <SwitchControl value=flag on_change=set_flag /> }.into_any(),
        ComponentKind::Slider => view! { <SliderControl value=number on_change=set_number /> }.into_any(),
        ComponentKind::Button => {
            view! { <PushButton value=flag on_change=set_flag shape=ButtonShape::Circle /> }.into_any()
        }
        ComponentKind::RectangleButton => {
            view! { <PushButton value=flag on_change=set_flag shape=ButtonShape::Rectangle /> }.into_any()
        }
        ComponentKind::StepperH => {
            view! { <StepperControl value=number on_change=set_number orientation=Orientation::Horizontal /> }.into_any()
        }
        ComponentKind::StepperV => {
            view! { <StepperControl value=number on_change=set_number orientation=Orientation::Vertical /> }.into_any()
        }
        ComponentKind::Joystick => {
            let set_point = Callback::new(move |p: JoystickPoint| ctx.change_value(id, ControlValue::Point(p)));
            view! { <JoystickControl value=point on_change=set_point /> }.into_any()
        }
        ComponentKind::Timer => view! { <TimerControl value=number on_change=set_number /> }.into_any(),
    }
}
