#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod colors;
mod constants;
mod i18n;
mod panel;
mod scale;
mod surface;
mod ui;
mod zoom;

use assets::load_cities;
use constants::GESTURE_SETTLE_SECS;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use panel::{MapPanel, propagate};
use scale::ScaleFormula;
use std::time::Duration;
use zoom::ZoomStore;

/// Main application state for the MapCompare viewer.
pub struct MapCompareApp {
    panels: Vec<MapPanel>,
    store: ZoomStore,
    formula: ScaleFormula,
    lang: String,
    dark_mode: bool,
    toasts: Toasts,
}

impl MapCompareApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let store = ZoomStore::new();
        let panels = match load_cities() {
            Ok(cities) => {
                log::info!("loaded {} city panels", cities.len());
                cities
                    .into_iter()
                    .map(|location| MapPanel::new(location, store.get()))
                    .collect()
            }
            Err(err) => {
                toasts.add(Toast {
                    kind: ToastKind::Error,
                    text: err.to_string().into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(10.0)
                        .show_icon(true),
                    ..Default::default()
                });
                Vec::new()
            }
        };

        Self {
            panels,
            store,
            formula: ScaleFormula::default(),
            lang: map_compare::FALLBACK_LANG.to_string(),
            dark_mode: true,
            toasts,
        }
    }

    /// Collects finished panel gestures into the store, then imperatively
    /// re-applies the store's zoom to every panel that disagrees. One call
    /// per frame takes the grid from Propagating back to Settled.
    fn sync_panels(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);

        for panel in &mut self.panels {
            if let Some(zoom) = panel.poll_gesture(now) {
                log::debug!("panel {} gesture settled at {zoom:.2}", panel.location.key);
                self.store.set(zoom);
            }
        }

        if propagate(&self.store, &mut self.panels) > 0 {
            ctx.request_repaint();
        }

        // Settled invariant: every non-gesturing panel now agrees with the store
        debug_assert!(
            self.panels.iter().all(|p| p.gesture_active()
                || (p.zoom() - self.store.get()).abs() < constants::ZOOM_EPSILON)
        );

        // Keep frames coming while a gesture waits on its settle interval
        if self.panels.iter().any(MapPanel::gesture_active) {
            ctx.request_repaint_after(Duration::from_secs_f64(GESTURE_SETTLE_SECS / 2.0));
        }
    }
}

impl eframe::App for MapCompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);

        self.show_top_bar(ctx);
        self.show_status_bar(ctx);
        self.show_central_panel(ctx);

        self.sync_panels(ctx);

        self.toasts.show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 960.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MapCompare",
        options,
        Box::new(|cc| Ok(Box::new(MapCompareApp::new(cc)))),
    )
}
