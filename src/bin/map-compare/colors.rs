//! Color constants for the map panels and UI elements.

use eframe::egui::Color32;

// Panel background
pub const PANEL_FILL: Color32 = Color32::from_rgb(28, 36, 44);

// Graticule lines
pub const GRATICULE: Color32 = Color32::from_rgba_premultiplied(90, 110, 128, 90);
pub const GRATICULE_AXIS: Color32 = Color32::from_rgba_premultiplied(140, 160, 178, 140);

// City marker
pub const MARKER_FILL: Color32 = Color32::from_rgb(220, 70, 60);
pub const MARKER_STROKE: Color32 = Color32::from_rgb(120, 20, 16);

// Text colors
pub const CAPTION_TEXT: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 230);
pub const CAPTION_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 180);
pub const ZOOM_READOUT: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 160);
