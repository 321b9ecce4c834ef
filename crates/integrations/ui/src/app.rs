use crate::recorder::{create_recorder_for_identifier, BindingRecorder};
use eframe::egui;
use shortcut_bridge::{MediaAction, ShortcutService};
use std::rc::Rc;

/// Preferences-style window with one recorder row per action.
pub struct RecorderApp {
    service: Rc<ShortcutService>,
    recorders: Vec<BindingRecorder>,
}

impl RecorderApp {
    pub fn new(service: Rc<ShortcutService>) -> Self {
        let recorders = MediaAction::ALL
            .iter()
            .filter_map(|action| {
                create_recorder_for_identifier(action.identifier(), service.clone())
            })
            .collect();

        Self { service, recorders }
    }
}

impl eframe::App for RecorderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Keyboard Shortcuts");
            ui.add_space(8.0);

            egui::Grid::new("shortcut_rows")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    for recorder in &mut self.recorders {
                        ui.label(recorder.action().display_name());
                        recorder.ui(ui);
                        ui.end_row();
                    }
                });

            ui.add_space(12.0);
            if ui.button("Restore Defaults").clicked() {
                self.service.reset();
            }
        });
    }
}

pub fn create_window_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(false)
            .with_inner_size([360.0, 260.0]),
        ..Default::default()
    }
}
