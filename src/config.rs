//! Board Configuration
//!
//! Fixed tunables shared by the model and the UI.

/// Local storage key holding the saved layout
pub const LAYOUT_STORAGE_KEY: &str = "iot-board-layout";

/// Viewports narrower than this use the mobile layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Resize floor for placed components
pub const MIN_ITEM_WIDTH: i32 = 100;
pub const MIN_ITEM_HEIGHT: i32 = 60;

/// Mobile tap-to-add grid
pub const GRID_COLUMNS: usize = 2;
pub const GRID_GAP: i32 = 20;
pub const GRID_CELL_WIDTH: i32 = 160;
pub const GRID_CELL_HEIGHT: i32 = 150;

/// Render fallbacks for layouts saved without geometry
pub const DEFAULT_ITEM_WIDTH: i32 = 180;
pub const DEFAULT_ITEM_HEIGHT: i32 = 100;
pub const DEFAULT_Z_INDEX: u32 = 1;

/// Highest stacking value handed out; CSS z-index is a signed 32-bit integer
pub const MAX_Z_INDEX: u32 = i32::MAX as u32;

/// How long notices stay on screen
pub const NOTICE_DURATION_MS: u32 = 3000;

/// How long item controls stay visible after a tap on mobile
pub const MOBILE_CONTROLS_HIDE_MS: u32 = 3000;

/// Slider and stepper range
pub const CONTROL_MIN: f64 = 0.0;
pub const CONTROL_MAX: f64 = 100.0;
pub const CONTROL_STEP: f64 = 1.0;

/// Timer control starting value, in seconds
pub const TIMER_DEFAULT_SECS: f64 = 60.0;
