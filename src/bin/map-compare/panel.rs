//! Viewport adapter: binds one map surface to a configured location and to
//! the shared zoom store.
//!
//! The adapter never copies the store's value eagerly. Each frame the
//! propagation pass calls [`MapPanel::sync_to`], which issues an imperative
//! `set_zoom` on the surface only when the surface actually disagrees with
//! the store. After a panel's own gesture its surface already holds the value
//! that was written into the store, so the originating panel is never re-set
//! and its gesture path cannot re-trigger.

use crate::constants::ZOOM_EPSILON;
use crate::surface::MapSurface;
use crate::zoom::ZoomStore;
use eframe::egui;
use map_compare::Location;

/// One map panel of the grid.
pub struct MapPanel {
    pub location: Location,
    surface: MapSurface,
}

impl MapPanel {
    pub fn new(location: Location, zoom: f64) -> Self {
        let surface = MapSurface::new(location.latitude, location.longitude, zoom);
        Self { location, surface }
    }

    /// The surface's current zoom, as the panel itself reports it.
    pub fn zoom(&self) -> f64 {
        self.surface.zoom()
    }

    /// Renders the panel with its localized caption and collects user input.
    pub fn show(&mut self, ui: &mut egui::Ui, lang: &str) {
        let caption = self.location.name.get(lang).to_owned();
        self.surface.show(ui, &caption);
    }

    /// Reports the final zoom of a completed user gesture on this panel,
    /// exactly once per gesture.
    pub fn poll_gesture(&mut self, now: f64) -> Option<f64> {
        self.surface.poll_settled(now)
    }

    /// True while a gesture is in flight on this panel.
    pub fn gesture_active(&self) -> bool {
        self.surface.gesture_active()
    }

    /// Drives the surface to `zoom` if it disagrees and no gesture is in
    /// flight. Returns whether an imperative set was actually issued.
    pub fn sync_to(&mut self, zoom: f64) -> bool {
        if self.surface.gesture_active() {
            return false;
        }
        if (self.surface.zoom() - zoom).abs() < ZOOM_EPSILON {
            return false;
        }
        self.surface.set_zoom(zoom);
        true
    }

    /// Re-centers the panel on its configured coordinate.
    pub fn recenter(&mut self) {
        self.surface.recenter();
    }
}

/// Propagation pass: imperatively applies the store's zoom to every panel
/// that disagrees. Returns the number of sets issued; zero means the grid is
/// settled.
pub fn propagate(store: &ZoomStore, panels: &mut [MapPanel]) -> usize {
    let zoom = store.get();
    let mut driven = 0;
    for panel in panels {
        if panel.sync_to(zoom) {
            driven += 1;
        }
    }
    driven
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GESTURE_SETTLE_SECS, ZOOM_DEFAULT};
    use map_compare::LocalizedText;

    fn city(key: &str, lat: f64, lon: f64) -> Location {
        let name = LocalizedText(
            [("en".to_string(), key.to_string())].into_iter().collect(),
        );
        Location {
            key: key.to_string(),
            name,
            latitude: lat,
            longitude: lon,
        }
    }

    fn four_cities(zoom: f64) -> Vec<MapPanel> {
        vec![
            MapPanel::new(city("beijing", 39.9042, 116.4074), zoom),
            MapPanel::new(city("shanghai", 31.2304, 121.4737), zoom),
            MapPanel::new(city("guangzhou", 23.1291, 113.2644), zoom),
            MapPanel::new(city("shenzhen", 22.5429, 114.0596), zoom),
        ]
    }

    fn assert_settled(store: &ZoomStore, panels: &[MapPanel]) {
        for panel in panels {
            assert_eq!(
                panel.zoom(),
                store.get(),
                "panel {} disagrees with the store",
                panel.location.key
            );
        }
    }

    #[test]
    fn slider_change_reaches_every_panel() {
        let mut store = ZoomStore::new();
        let mut panels = four_cities(store.get());

        store.set(15.0);
        assert_eq!(propagate(&store, &mut panels), 4);
        assert_settled(&store, &panels);
    }

    #[test]
    fn propagate_counts_only_the_panels_it_drives() {
        let mut store = ZoomStore::new();
        let mut panels = four_cities(store.get());

        // One panel already agrees with the new value; propagate must drive
        // the other three through their mutable sync path and say so
        store.set(12.0);
        assert!(panels[0].sync_to(store.get()));
        assert_eq!(propagate(&store, &mut panels), 3);
        assert_settled(&store, &panels);
        assert_eq!(propagate(&store, &mut panels), 0);
    }

    #[test]
    fn propagation_is_idempotent_once_settled() {
        let mut store = ZoomStore::new();
        let mut panels = four_cities(store.get());

        store.set(15.0);
        propagate(&store, &mut panels);
        // Same value again: no panel is touched
        store.set(15.0);
        assert_eq!(propagate(&store, &mut panels), 0);
        assert_settled(&store, &panels);
    }

    #[test]
    fn gesture_on_one_panel_drives_only_the_others() {
        let mut store = ZoomStore::new();
        let mut panels = four_cities(store.get());
        store.set(15.0);
        propagate(&store, &mut panels);

        // Scroll-zoom Shenzhen from 15 to 16 (four quarter-step notches)
        panels[3].surface.apply_scroll(4.0, 0.0);
        assert_eq!(panels[3].zoom(), 16.0);

        // Mid-gesture the other panels are untouched and the store is stale
        assert_eq!(store.get(), 15.0);
        assert_eq!(propagate(&store, &mut panels), 0);

        // Gesture settles: exactly one store write
        let reported = panels[3].poll_gesture(GESTURE_SETTLE_SECS);
        assert_eq!(reported, Some(16.0));
        assert!(store.set(reported.unwrap()));

        // Exactly the three other panels receive an imperative set; the
        // originator already agrees and is left alone
        assert_eq!(propagate(&store, &mut panels), 3);
        assert_settled(&store, &panels);

        // No echo: converged, nothing left to report or to set
        assert_eq!(panels[3].poll_gesture(100.0), None);
        assert_eq!(propagate(&store, &mut panels), 0);
    }

    #[test]
    fn imposed_sync_waits_for_an_in_flight_gesture() {
        let mut store = ZoomStore::new();
        let mut panels = four_cities(store.get());

        panels[0].surface.apply_scroll(1.0, 0.0);
        store.set(4.0);
        // The gesturing panel is skipped, the rest are driven
        assert_eq!(propagate(&store, &mut panels), 3);
        assert!(panels[0].gesture_active());

        // After the gesture resolves the panel's own value wins the store
        let reported = panels[0].poll_gesture(GESTURE_SETTLE_SECS).unwrap();
        store.set(reported);
        propagate(&store, &mut panels);
        assert_settled(&store, &panels);
    }

    #[test]
    fn ordered_slider_values_apply_in_order() {
        let mut store = ZoomStore::new();
        let mut panels = four_cities(store.get());

        for target in [11.0, 12.5, 9.0] {
            store.set(target);
            propagate(&store, &mut panels);
            assert_settled(&store, &panels);
        }
        assert_eq!(store.get(), 9.0);
    }

    #[test]
    fn end_to_end_four_city_scenario() {
        // Initial zoom 10, four panels
        let mut store = ZoomStore::new();
        assert_eq!(store.get(), ZOOM_DEFAULT);
        let mut panels = four_cities(store.get());

        // User drags the control to 15.0
        store.set(15.0);
        propagate(&store, &mut panels);
        assert_settled(&store, &panels);
        assert_eq!(
            crate::scale::ScaleFormula::ZoomValue.label(store.get()),
            "15.0"
        );

        // User scroll-zooms the Shenzhen panel to 16.0
        panels[3].surface.apply_scroll(4.0, 1.0);
        let reported = panels[3].poll_gesture(1.0 + GESTURE_SETTLE_SECS).unwrap();
        store.set(reported);
        assert_eq!(store.get(), 16.0);

        assert_eq!(propagate(&store, &mut panels), 3);
        for panel in &panels {
            assert_eq!(panel.zoom(), 16.0);
        }
        // The control reads the store directly, so it now displays 16.0
        assert_eq!(
            crate::scale::ScaleFormula::ZoomValue.label(store.get()),
            "16.0"
        );
    }
}
