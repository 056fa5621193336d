//! UI rendering methods for the MapCompare application.

use crate::MapCompareApp;
use crate::constants::{KEY_ZOOM_STEP, MIN_PANEL_WIDTH, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use crate::i18n::{LANGUAGES, UiText, ui_text};
use crate::scale::ScaleFormula;
use eframe::egui;

impl MapCompareApp {
    /// Handles keyboard shortcuts: +/- step the shared zoom, 0 resets it.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                self.store.set(self.store.get() + KEY_ZOOM_STEP);
            }
            if i.key_pressed(egui::Key::Minus) {
                self.store.set(self.store.get() - KEY_ZOOM_STEP);
            }
            if i.key_pressed(egui::Key::Num0) {
                self.store.reset();
                for panel in &mut self.panels {
                    panel.recenter();
                }
            }
        });
    }

    /// Renders the top bar: title, language selector, theme toggle.
    pub fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong(ui_text(UiText::Title, &self.lang));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = if self.dark_mode { "☀" } else { "🌙" };
                    if ui.button(theme_icon).clicked() {
                        self.dark_mode = !self.dark_mode;
                        ctx.set_visuals(if self.dark_mode {
                            egui::Visuals::dark()
                        } else {
                            egui::Visuals::light()
                        });
                    }

                    let selected_name = LANGUAGES
                        .iter()
                        .find(|(code, _)| *code == self.lang)
                        .map_or("English", |(_, name)| *name);
                    egui::ComboBox::from_id_salt("language")
                        .selected_text(selected_name)
                        .show_ui(ui, |ui| {
                            for &(code, name) in LANGUAGES {
                                ui.selectable_value(&mut self.lang, code.to_string(), name);
                            }
                        });
                });
            });
        });
    }

    /// Renders the bottom status bar with the interaction hints.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(ui_text(UiText::StatusHint, &self.lang));
        });
    }

    /// Renders the central panel: shared zoom control, scale label, and the
    /// panel grid.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_zoom_control(ui);
            ui.separator();

            if self.panels.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(ui_text(UiText::NoConfig, &self.lang));
                });
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_grid(ui);
            });
        });
    }

    /// Renders the shared slider and the derived scale label. The slider is
    /// a controlled value: it reads the store and every drag delta is
    /// written straight back, with no debouncing.
    fn show_zoom_control(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!(
                "{}: {}",
                ui_text(UiText::CurrentScale, &self.lang),
                self.formula.label(self.store.get())
            ));

            let mut zoom = self.store.get();
            let response = ui.add(
                egui::Slider::new(&mut zoom, ZOOM_MIN..=ZOOM_MAX)
                    .step_by(ZOOM_STEP)
                    .show_value(true),
            );
            if response.changed() {
                self.store.set(zoom);
            }

            if ui.button(ui_text(UiText::Reset, &self.lang)).clicked() {
                self.store.reset();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for formula in [ScaleFormula::ZoomValue, ScaleFormula::Denominator] {
                    if ui
                        .selectable_label(self.formula == formula, formula.name())
                        .clicked()
                    {
                        self.formula = formula;
                    }
                }
            });
        });
    }

    /// Renders the responsive panel grid: two columns, dropping to one when
    /// the window is narrow. Column count never affects synchronization.
    fn show_grid(&mut self, ui: &mut egui::Ui) {
        let columns = if ui.available_width() < 2.0 * MIN_PANEL_WIDTH {
            1
        } else {
            2
        };

        let lang = self.lang.clone();
        ui.columns(columns, |cols| {
            for (index, panel) in self.panels.iter_mut().enumerate() {
                let column = &mut cols[index % columns];
                panel.show(column, &lang);
                column.add_space(8.0);
            }
        });
    }
}
