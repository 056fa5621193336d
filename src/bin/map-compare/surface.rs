//! The map rendering surface backing one panel.
//!
//! A surface is initialized with a center and zoom and from then on OWNS its
//! zoom state: scroll and double-click gestures mutate it directly, and the
//! only way to change it from outside is the explicit [`MapSurface::set_zoom`]
//! call. Panels read the zoom back and re-impose the shared value through
//! that call; merely rendering with a different value has no effect.
//!
//! Gestures are reported on completion, not per frame: scroll input stamps
//! the gesture with the input time and [`MapSurface::poll_settled`] reports
//! the final zoom once no scroll has arrived for [`GESTURE_SETTLE_SECS`].

use crate::colors;
use crate::constants::{
    DOUBLE_CLICK_ZOOM_STEP, GESTURE_SETTLE_SECS, PANEL_HEIGHT, SCROLL_ZOOM_STEP, ZOOM_MAX,
    ZOOM_MIN,
};
use eframe::egui;

/// Pixel size of one Web Mercator tile at zoom 0.
const TILE_SIZE: f64 = 256.0;

/// Latitude bound of the Web Mercator projection.
const MAX_LATITUDE: f64 = 85.0511287798;

/// Scroll points per wheel notch, matching egui's wheel line scrolling.
const POINTS_PER_NOTCH: f64 = 50.0;

/// Target on-screen spacing between graticule lines in pixels.
const GRATICULE_SPACING: f64 = 160.0;

/// Width of the Mercator world in pixels at the given zoom.
fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2f64.powf(zoom)
}

/// Projects (lat, lon) degrees to world pixel coordinates at `zoom`.
pub fn project(lat: f64, lon: f64, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let sin = lat.to_radians().sin();
    let x = (lon + 180.0) / 360.0 * size;
    let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * std::f64::consts::PI)) * size;
    (x, y)
}

/// Inverse of [`project`].
pub fn unproject(x: f64, y: f64, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lon = x / size * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * y / size);
    let lat = n.sinh().atan().to_degrees();
    (lat, lon)
}

/// Picks a graticule step in degrees giving roughly [`GRATICULE_SPACING`]
/// pixels between lines, snapped to a 1/2/5 decade.
fn graticule_step(zoom: f64) -> f64 {
    let px_per_degree = world_size(zoom) / 360.0;
    let raw = GRATICULE_SPACING / px_per_degree;
    let base = 10f64.powf(raw.log10().floor());
    let mantissa = raw / base;
    let nice = if mantissa < 1.5 {
        1.0
    } else if mantissa < 3.5 {
        2.0
    } else if mantissa < 7.5 {
        5.0
    } else {
        10.0
    };
    (nice * base).min(45.0)
}

/// Progress of a user zoom gesture on this surface.
#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    /// No gesture in flight.
    Idle,
    /// Scroll input seen; holds the time of the most recent delta.
    Scrolling { last_input: f64 },
    /// Gesture finished, final zoom not yet reported.
    Settled,
}

/// One panel's rendering surface. See the module docs for the ownership
/// contract.
pub struct MapSurface {
    /// Current view center; moves freely under drag panning.
    center: (f64, f64),
    /// The fixed coordinate this panel was created for; the marker stays here.
    home: (f64, f64),
    zoom: f64,
    gesture: GestureState,
}

impl MapSurface {
    pub fn new(lat: f64, lon: f64, zoom: f64) -> Self {
        let center = (lat.clamp(-MAX_LATITUDE, MAX_LATITUDE), lon.clamp(-180.0, 180.0));
        Self {
            center,
            home: center,
            zoom: zoom.clamp(ZOOM_MIN, ZOOM_MAX),
            gesture: GestureState::Idle,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// True while a user gesture is in flight or awaiting report; imposed
    /// zoom changes are held off until then so they cannot fight the user's
    /// hand mid-gesture.
    pub fn gesture_active(&self) -> bool {
        self.gesture != GestureState::Idle
    }

    /// Imperatively drives the surface to `zoom` (clamped). This is the
    /// external imposition path; it never counts as a user gesture.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Re-centers the view on the panel's home coordinate.
    pub fn recenter(&mut self) {
        self.center = self.home;
    }

    /// Applies scroll input of `notches` wheel notches at time `now`,
    /// starting or extending a zoom gesture.
    pub fn apply_scroll(&mut self, notches: f64, now: f64) {
        self.zoom = (self.zoom + notches * SCROLL_ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
        self.gesture = GestureState::Scrolling { last_input: now };
    }

    /// Applies a double-click zoom step. Double clicks are discrete, so the
    /// gesture settles immediately.
    pub fn apply_double_click(&mut self) {
        self.zoom = (self.zoom + DOUBLE_CLICK_ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
        self.gesture = GestureState::Settled;
    }

    /// Moves the view center by a screen-pixel delta at the current zoom.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let (x, y) = project(self.center.0, self.center.1, self.zoom);
        let (lat, lon) = unproject(x - dx, y - dy, self.zoom);
        self.center = (lat.clamp(-MAX_LATITUDE, MAX_LATITUDE), lon.clamp(-180.0, 180.0));
    }

    /// Reports the final zoom of a completed gesture, at most once per
    /// gesture. A scroll gesture counts as complete once no further scroll
    /// input has arrived for [`GESTURE_SETTLE_SECS`].
    pub fn poll_settled(&mut self, now: f64) -> Option<f64> {
        match self.gesture {
            GestureState::Scrolling { last_input }
                if now - last_input >= GESTURE_SETTLE_SECS =>
            {
                self.gesture = GestureState::Idle;
                Some(self.zoom)
            }
            GestureState::Settled => {
                self.gesture = GestureState::Idle;
                Some(self.zoom)
            }
            _ => None,
        }
    }

    /// Renders the surface and harvests its input: scroll zoom while
    /// hovered, double-click zoom, drag panning.
    pub fn show(&mut self, ui: &mut egui::Ui, caption: &str) {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), PANEL_HEIGHT),
            egui::Sense::click_and_drag(),
        );
        let now = ui.input(|i| i.time);

        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                self.apply_scroll(f64::from(scroll) / POINTS_PER_NOTCH, now);
            }
        }
        if response.double_clicked() {
            self.apply_double_click();
        }
        if response.dragged() {
            let delta = response.drag_delta();
            self.pan_by(f64::from(delta.x), f64::from(delta.y));
        }

        self.paint(ui, rect, caption);
    }

    fn paint(&self, ui: &mut egui::Ui, rect: egui::Rect, caption: &str) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 4.0, colors::PANEL_FILL);

        self.paint_graticule(&painter, rect);
        self.paint_marker(&painter, rect);

        // Shadowed caption so it stays readable over the graticule
        let caption_pos = rect.left_top() + egui::vec2(10.0, 8.0);
        let font_id = egui::FontId::proportional(16.0);
        painter.text(
            caption_pos + egui::vec2(1.0, 1.0),
            egui::Align2::LEFT_TOP,
            caption,
            font_id.clone(),
            colors::CAPTION_SHADOW,
        );
        painter.text(
            caption_pos,
            egui::Align2::LEFT_TOP,
            caption,
            font_id,
            colors::CAPTION_TEXT,
        );

        painter.text(
            rect.right_bottom() + egui::vec2(-8.0, -6.0),
            egui::Align2::RIGHT_BOTTOM,
            format!("z {:.1}", self.zoom),
            egui::FontId::monospace(12.0),
            colors::ZOOM_READOUT,
        );
    }

    fn paint_graticule(&self, painter: &egui::Painter, rect: egui::Rect) {
        let step = graticule_step(self.zoom);
        let (cx, cy) = project(self.center.0, self.center.1, self.zoom);
        let left = cx - f64::from(rect.width()) / 2.0;
        let top = cy - f64::from(rect.height()) / 2.0;
        let (lat_top, lon_left) = unproject(left, top, self.zoom);
        let (lat_bottom, lon_right) =
            unproject(left + f64::from(rect.width()), top + f64::from(rect.height()), self.zoom);

        // Meridians
        let mut lon = (lon_left / step).floor() * step;
        while lon <= lon_right {
            let (x, _) = project(0.0, lon, self.zoom);
            let sx = rect.left() + (x - left) as f32;
            let color = if lon.abs() < step / 2.0 {
                colors::GRATICULE_AXIS
            } else {
                colors::GRATICULE
            };
            painter.line_segment(
                [egui::pos2(sx, rect.top()), egui::pos2(sx, rect.bottom())],
                egui::Stroke::new(1.0, color),
            );
            lon += step;
        }

        // Parallels; lat decreases as screen y grows
        let mut lat = (lat_bottom / step).floor() * step;
        while lat <= lat_top {
            if lat.abs() <= MAX_LATITUDE {
                let (_, y) = project(lat, 0.0, self.zoom);
                let sy = rect.top() + (y - top) as f32;
                let color = if lat.abs() < step / 2.0 {
                    colors::GRATICULE_AXIS
                } else {
                    colors::GRATICULE
                };
                painter.line_segment(
                    [egui::pos2(rect.left(), sy), egui::pos2(rect.right(), sy)],
                    egui::Stroke::new(1.0, color),
                );
            }
            lat += step;
        }
    }

    fn paint_marker(&self, painter: &egui::Painter, rect: egui::Rect) {
        let (cx, cy) = project(self.center.0, self.center.1, self.zoom);
        let (hx, hy) = project(self.home.0, self.home.1, self.zoom);
        let pos = rect.center() + egui::vec2((hx - cx) as f32, (hy - cy) as f32);

        if rect.expand(20.0).contains(pos) {
            painter.circle(
                pos,
                6.0,
                colors::MARKER_FILL,
                egui::Stroke::new(1.5, colors::MARKER_STROKE),
            );
        }
    }
}
