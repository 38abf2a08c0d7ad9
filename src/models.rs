//! Board Models
//!
//! Geometry and layout data for placed controls. This is exactly what is
//! written to local storage, so the serde shape is the persisted format.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{DEFAULT_ITEM_HEIGHT, DEFAULT_ITEM_WIDTH, DEFAULT_Z_INDEX, TIMER_DEFAULT_SECS};

/// Control types that can be placed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Switch,
    Slider,
    Button,
    RectangleButton,
    StepperH,
    StepperV,
    Joystick,
    Timer,
}

impl ComponentKind {
    /// Palette order
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Switch,
        ComponentKind::Slider,
        ComponentKind::Button,
        ComponentKind::RectangleButton,
        ComponentKind::StepperH,
        ComponentKind::StepperV,
        ComponentKind::Joystick,
        ComponentKind::Timer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Switch => "Switch",
            ComponentKind::Slider => "Slider",
            ComponentKind::Button => "Button",
            ComponentKind::RectangleButton => "Rect Button",
            ComponentKind::StepperH => "Stepper H",
            ComponentKind::StepperV => "Stepper V",
            ComponentKind::Joystick => "Joystick",
            ComponentKind::Timer => "Timer",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ComponentKind::Switch => "⏻",
            ComponentKind::Slider => "🌡",
            ComponentKind::Button => "⭘",
            ComponentKind::RectangleButton => "▢",
            ComponentKind::StepperH => "⇄",
            ComponentKind::StepperV => "⇅",
            ComponentKind::Joystick => "✥",
            ComponentKind::Timer => "⏱",
        }
    }

    /// Default (width, height) for a freshly added control
    pub fn default_size(self, viewport: Viewport) -> Size {
        let mobile = viewport == Viewport::Mobile;
        let pick = |desktop: i32, phone: i32| if mobile { phone } else { desktop };
        match self {
            ComponentKind::Switch | ComponentKind::RectangleButton => Size::new(pick(180, 150), 100),
            ComponentKind::Slider => Size::new(pick(200, 160), 120),
            ComponentKind::Button => Size::new(pick(120, 100), pick(120, 100)),
            ComponentKind::StepperH => Size::new(pick(200, 160), 100),
            ComponentKind::StepperV => Size::new(pick(120, 100), pick(180, 150)),
            ComponentKind::Joystick => Size::new(pick(180, 150), pick(180, 150)),
            ComponentKind::Timer => Size::new(pick(180, 150), pick(120, 100)),
        }
    }

    pub fn default_value(self) -> ControlValue {
        match self {
            ComponentKind::Switch | ComponentKind::Button | ComponentKind::RectangleButton => ControlValue::Flag(false),
            ComponentKind::Slider => ControlValue::Number(50.0),
            ComponentKind::StepperH | ComponentKind::StepperV => ControlValue::Number(0.0),
            ComponentKind::Joystick => ControlValue::Point(JoystickPoint::default()),
            ComponentKind::Timer => ControlValue::Number(TIMER_DEFAULT_SECS),
        }
    }
}

/// The value a control mirrors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    Flag(bool),
    Number(f64),
    Point(JoystickPoint),
}

/// Joystick deflection, each axis in -1.0..=1.0
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JoystickPoint {
    pub x: f64,
    pub y: f64,
}

/// A control placed on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedComponent {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub left: i32,
    pub top: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ControlValue>,
}

impl PlacedComponent {
    pub fn width_or_default(&self) -> i32 {
        self.width.unwrap_or(DEFAULT_ITEM_WIDTH)
    }

    pub fn height_or_default(&self) -> i32 {
        self.height.unwrap_or(DEFAULT_ITEM_HEIGHT)
    }

    pub fn z_index_or_default(&self) -> u32 {
        self.z_index.unwrap_or(DEFAULT_Z_INDEX)
    }

    pub fn value_or_default(&self) -> ControlValue {
        self.value.unwrap_or_else(|| self.kind.default_value())
    }

    /// Boolean view of the value (switches and buttons)
    pub fn flag(&self) -> bool {
        match self.value_or_default() {
            ControlValue::Flag(on) => on,
            ControlValue::Number(n) => n != 0.0,
            ControlValue::Point(_) => false,
        }
    }

    /// Numeric view of the value (sliders, steppers, timers)
    pub fn number(&self) -> f64 {
        match self.value_or_default() {
            ControlValue::Number(n) => n,
            ControlValue::Flag(on) => f64::from(u8::from(on)),
            ControlValue::Point(_) => 0.0,
        }
    }

    pub fn point(&self) -> JoystickPoint {
        match self.value_or_default() {
            ControlValue::Point(p) => p,
            _ => JoystickPoint::default(),
        }
    }
}

/// Which default-geometry column applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

impl Viewport {
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }
}

/// Viewport (client) coordinates of a pointer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Relative movement in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Board bounding box in client coordinates plus its scroll position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoardRect {
    pub left: f64,
    pub top: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

impl BoardRect {
    /// Board-relative pixel position of a client point
    pub fn to_board(&self, point: Point) -> (i32, i32) {
        let left = f64::from(point.x) - self.left + self.scroll_left;
        let top = f64::from(point.y) - self.top + self.scroll_top;
        (left.round() as i32, top.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&ComponentKind::RectangleButton).unwrap();
        assert_eq!(json, "\"rectangle-button\"");
        let kind: ComponentKind = serde_json::from_str("\"stepper-v\"").unwrap();
        assert_eq!(kind, ComponentKind::StepperV);
    }

    #[test]
    fn test_default_geometry_table() {
        let d = Viewport::Desktop;
        let m = Viewport::Mobile;
        assert_eq!(ComponentKind::Switch.default_size(d), Size::new(180, 100));
        assert_eq!(ComponentKind::Switch.default_size(m), Size::new(150, 100));
        assert_eq!(ComponentKind::Slider.default_size(d), Size::new(200, 120));
        assert_eq!(ComponentKind::Button.default_size(m), Size::new(100, 100));
        assert_eq!(ComponentKind::StepperV.default_size(d), Size::new(120, 180));
        assert_eq!(ComponentKind::StepperV.default_size(m), Size::new(100, 150));

        assert_eq!(ComponentKind::Switch.default_value(), ControlValue::Flag(false));
        assert_eq!(ComponentKind::Slider.default_value(), ControlValue::Number(50.0));
        assert_eq!(ComponentKind::StepperH.default_value(), ControlValue::Number(0.0));
    }

    #[test]
    fn test_optional_fields_default_at_render_time() {
        let json = r#"{"id":"6f1c7b0e-5f7d-4f8e-9a51-1d2b3c4d5e6f","type":"slider","left":10,"top":20}"#;
        let comp: PlacedComponent = serde_json::from_str(json).unwrap();
        assert_eq!(comp.width_or_default(), 180);
        assert_eq!(comp.height_or_default(), 100);
        assert_eq!(comp.z_index_or_default(), 1);
        assert_eq!(comp.number(), 50.0);
    }

    #[test]
    fn test_value_shapes() {
        let flag: ControlValue = serde_json::from_str("true").unwrap();
        assert_eq!(flag, ControlValue::Flag(true));
        let num: ControlValue = serde_json::from_str("42").unwrap();
        assert_eq!(num, ControlValue::Number(42.0));
        let point: ControlValue = serde_json::from_str(r#"{"x":0.5,"y":-0.25}"#).unwrap();
        assert_eq!(point, ControlValue::Point(JoystickPoint { x: 0.5, y: -0.25 }));
    }

    #[test]
    fn test_board_rect_accounts_for_scroll() {
        let rect = BoardRect { left: 144.0, top: 60.4, scroll_left: 0.0, scroll_top: 30.0 };
        assert_eq!(rect.to_board(Point::new(200, 100)), (56, 70));
    }

    #[test]
    fn test_viewport_breakpoint() {
        assert_eq!(Viewport::from_width(767.0, 768.0), Viewport::Mobile);
        assert_eq!(Viewport::from_width(768.0, 768.0), Viewport::Desktop);
    }
}
