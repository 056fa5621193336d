/// Minimum zoom level.
pub const ZOOM_MIN: f64 = 0.0;

/// Maximum zoom level.
pub const ZOOM_MAX: f64 = 20.0;

/// Zoom level every panel starts at.
pub const ZOOM_DEFAULT: f64 = 10.0;

/// Slider step.
pub const ZOOM_STEP: f64 = 0.1;

/// Zoom change per +/- key press.
pub const KEY_ZOOM_STEP: f64 = 0.5;

/// Zoom change per scroll-wheel notch on a panel.
pub const SCROLL_ZOOM_STEP: f64 = 0.25;

/// Zoom change applied by a double-click on a panel.
pub const DOUBLE_CLICK_ZOOM_STEP: f64 = 1.0;

/// Seconds without further scroll input before a scroll gesture counts as
/// finished and its final zoom is reported.
pub const GESTURE_SETTLE_SECS: f64 = 0.2;

/// Two zoom values closer than this are the same value; keeps equal-value
/// propagation from re-driving panels.
pub const ZOOM_EPSILON: f64 = 1e-6;

/// Minimum panel width in pixels before the grid drops to one column.
pub const MIN_PANEL_WIDTH: f32 = 440.0;

/// Fixed height of each map panel in pixels.
pub const PANEL_HEIGHT: f32 = 400.0;
