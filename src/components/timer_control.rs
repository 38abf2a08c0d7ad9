//! Timer Control
//!
//! Process countdown. The remaining seconds are the stored value; the
//! running state is local to the control. A running countdown stops as
//! soon as the stored value is written from elsewhere (load, reset).

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::config::TIMER_DEFAULT_SECS;
use crate::controls::{format_clock, timer_overridden, timer_remaining};

const TICK_MS: u32 = 250;

#[component]
pub fn TimerControl(
    #[prop(into)] value: Signal<f64>,
    on_change: Callback<f64>,
) -> impl IntoView {
    let ticker = StoredValue::new_local(None::<Interval>);
    let last_written = StoredValue::new(value.get_untracked());
    let (running, set_running) = signal(false);

    let stop = move || {
        ticker.set_value(None);
        set_running.set(false);
    };

    let start = move || {
        let remaining = value.get_untracked();
        if remaining <= 0.0 {
            return;
        }
        last_written.set_value(remaining);
        let deadline = js_sys::Date::now() + remaining * 1000.0;
        let interval = Interval::new(TICK_MS, move || {
            let left = timer_remaining(deadline, js_sys::Date::now());
            if value.get_untracked() != left {
                last_written.set_value(left);
                on_change.run(left);
            }
            if left <= 0.0 {
                log::info!("[BOARD] timer elapsed");
                // Dropping the running closure is fine: wasm-bindgen frees it once the call returns
                ticker.set_value(None);
                set_running.set(false);
            }
        });
        ticker.set_value(Some(interval));
        set_running.set(true);
    };

    Effect::new(move |_| {
        let stored = value.get();
        if timer_overridden(running.get_untracked(), stored, last_written.get_value()) {
            log::info!("[BOARD] timer stopped: value replaced with {}", stored);
            stop();
        }
    });

    let reset = move || {
        stop();
        on_change.run(TIMER_DEFAULT_SECS);
    };

    on_cleanup(move || {
        ticker.try_update_value(|t| *t = None);
    });

    view! {
        <div class="control timer-control">
            <div class=move || if value.get() <= 0.0 { "timer-clock done" } else { "timer-clock" }>
                {move || format_clock(value.get())}
            </div>
            <div class="timer-buttons">
                <button
                    class="timer-btn"
                    on:click=move |_| if running.get_untracked() { stop() } else { start() }
                >
                    {move || if running.get() { "Pause" } else { "Start" }}
                </button>
                <button class="timer-btn" on:click=move |_| reset()>"Reset"</button>
            </div>
        </div>
    }
}
