use crate::QuestApp;
use egui::{CentralPanel, Context};

pub fn ui_pending_update(app: &mut QuestApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(
                egui::RichText::new(&app.message)
                    .heading()
                    .color(egui::Color32::YELLOW)
                    .strong(),
            );
            ui.add_space(20.0);
            ui.add(egui::Spinner::new());
            ui.add_space(60.0);
        });
    });

    // Lanza el hilo de descarga solo la primera vez
    app.ensure_update_thread();
}
