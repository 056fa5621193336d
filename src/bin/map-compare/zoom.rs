//! The single authoritative zoom value shared by the slider and every panel.

use crate::constants::{ZOOM_DEFAULT, ZOOM_EPSILON, ZOOM_MAX, ZOOM_MIN};

/// Owns the shared zoom level. Every zoom change in the application flows
/// through [`ZoomStore::set`]; panels and the slider only ever read it back.
pub struct ZoomStore {
    zoom: f64,
}

impl ZoomStore {
    pub fn new() -> Self {
        Self { zoom: ZOOM_DEFAULT }
    }

    pub fn get(&self) -> f64 {
        self.zoom
    }

    /// Clamps `zoom` to the valid range and stores it. Returns `true` if the
    /// stored value actually changed; setting the current value again is a
    /// no-op so equal-value writes never cause a propagation storm.
    pub fn set(&mut self, zoom: f64) -> bool {
        let clamped = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        if (clamped - self.zoom).abs() < ZOOM_EPSILON {
            return false;
        }
        log::debug!("zoom {:.2} -> {:.2}", self.zoom, clamped);
        self.zoom = clamped;
        true
    }

    /// Restores the startup zoom level.
    pub fn reset(&mut self) -> bool {
        self.set(ZOOM_DEFAULT)
    }
}

impl Default for ZoomStore {
    fn default() -> Self {
        Self::new()
    }
}
