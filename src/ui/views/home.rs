use crate::QuestApp;
use crate::model::AppState;
use crate::update::check_latest_release;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_home(app: &mut QuestApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 540.0;
        let content_width = ui.available_width().min(max_width);

        // Centrar verticalmente
        let estimated_h = 280.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(content_width);

                    ui.heading("👋 ¡Bienvenido a ICT Quest Lab!");
                    ui.add_space(6.0);
                    ui.label("Roadmap gamificado y quiz de práctica para HSC ICT.");
                    ui.add_space(18.0);

                    let btn_w = (content_width * 0.9).clamp(120.0, 400.0);
                    let btn_h = 40.0;

                    ui.vertical_centered(|ui| {
                        let btn_quests =
                            ui.add_sized([btn_w, btn_h], Button::new("🗺 Quest Roadmap"));
                        ui.add_space(5.0);
                        let btn_quiz =
                            ui.add_sized([btn_w, btn_h], Button::new("❓ ICT Quiz Arena"));
                        ui.add_space(5.0);
                        let btn_exit = ui.add_sized([btn_w, btn_h], Button::new("🔙 Salir"));

                        if btn_quests.clicked() {
                            app.message.clear();
                            app.state = AppState::QuestMap;
                        }
                        if btn_quiz.clicked() {
                            app.empezar_quiz();
                        }
                        if btn_exit.clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }

                        ui.add_space(16.0);

                        // Comprobamos si hay una actualización pendiente
                        if app.has_update.is_none() {
                            app.has_update = match check_latest_release() {
                                Ok(Some(new_ver)) => Some(new_ver),
                                _ => Some(String::new()),
                            };
                        }
                        if let Some(ver) = app.has_update.clone() {
                            if !ver.is_empty() {
                                let update_btn = ui.add_sized(
                                    [btn_w, btn_h],
                                    Button::new(format!("⬇ Actualizar a {ver}")),
                                );
                                if update_btn.clicked() {
                                    app.message = "Iniciando actualización…".to_string();
                                    app.state = AppState::PendingUpdate;
                                    ctx.request_repaint();
                                }
                                ui.add_space(10.0);
                            }
                        }
                    });

                    // Mensaje de error / info
                    if !app.message.is_empty() {
                        ui.add_space(10.0);
                        ui.label(
                            RichText::new(&app.message)
                                .color(egui::Color32::YELLOW)
                                .strong(),
                        );
                    }
                });
        });

        ui.add_space(vs / 2.0);
    });
}
