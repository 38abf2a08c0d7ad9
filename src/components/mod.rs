//! UI Components
//!
//! Board chrome, the palette, placed items and the controls they render.

mod board_header;
mod palette;
mod board_area;
mod board_item;
mod notice_toast;
mod switch_control;
mod slider_control;
mod push_button;
mod stepper_control;
mod joystick_control;
mod timer_control;

pub use board_header::BoardHeader;
pub use palette::{Palette, PaletteGhost};
pub use board_area::{board_rect, BoardArea};
pub use board_item::BoardItem;
pub use notice_toast::NoticeToast;
pub use switch_control::SwitchControl;
pub use slider_control::SliderControl;
pub use push_button::{ButtonShape, PushButton};
pub use stepper_control::{Orientation, StepperControl};
pub use joystick_control::JoystickControl;
pub use timer_control::TimerControl;
