//! Control Value Rules
//!
//! Range handling lives with the controls, not the board: the board stores
//! whatever a control reports.

use crate::config::{CONTROL_MAX, CONTROL_MIN, CONTROL_STEP};
use crate::models::JoystickPoint;

/// Snap a raw slider reading onto the 0..=100 step grid
pub fn slider_value(raw: f64) -> f64 {
    if raw.is_nan() {
        return CONTROL_MIN;
    }
    let snapped = (raw / CONTROL_STEP).round() * CONTROL_STEP;
    snapped.clamp(CONTROL_MIN, CONTROL_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Increment,
    Decrement,
}

/// Next stepper value, or `None` when the step would leave the range
pub fn stepper_next(current: f64, direction: StepDirection) -> Option<f64> {
    let next = match direction {
        StepDirection::Increment => current + CONTROL_STEP,
        StepDirection::Decrement => current - CONTROL_STEP,
    };
    (CONTROL_MIN..=CONTROL_MAX).contains(&next).then_some(next)
}

/// Map a pointer offset from the pad centre to a deflection on the unit disc
pub fn joystick_point(dx: f64, dy: f64, radius: f64) -> JoystickPoint {
    if radius <= 0.0 {
        return JoystickPoint::default();
    }
    let x = dx / radius;
    // Screen y grows downwards; joystick "up" is positive
    let y = -dy / radius;
    let length = x.hypot(y);
    if length > 1.0 {
        JoystickPoint { x: x / length, y: y / length }
    } else {
        JoystickPoint { x, y }
    }
}

/// Whole seconds left until `deadline_ms`, never negative
pub fn timer_remaining(deadline_ms: f64, now_ms: f64) -> f64 {
    ((deadline_ms - now_ms) / 1000.0).ceil().max(0.0)
}

/// True when a running countdown's stored value was replaced by someone else
pub fn timer_overridden(running: bool, stored: f64, last_written: f64) -> bool {
    running && stored != last_written
}

/// Render seconds as `m:ss`
pub fn format_clock(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
