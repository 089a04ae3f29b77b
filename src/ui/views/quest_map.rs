use crate::QuestApp;
use crate::model::Track;
use crate::progress::QuestState;
use crate::ui::helpers::{big_list_button, feedback_label};
use egui::{CentralPanel, Context, ScrollArea};

pub fn ui_quest_map(app: &mut QuestApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 600.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading("🗺 Quest Roadmap");
                    ui.add_space(4.0);
                    ui.label("Completa el nivel activo para desbloquear el siguiente.");
                    ui.add_space(10.0);

                    // Selector de track
                    ui.horizontal(|ui| {
                        for track in [Track::Html, Track::C] {
                            let selected = app.active_track == track;
                            if ui.selectable_label(selected, track.label()).clicked() && !selected
                            {
                                app.seleccionar_track(track);
                            }
                        }
                        if app.store.track_cleared(app.active_track) {
                            ui.label("🏆 ¡Track completado!");
                        }
                    });
                    ui.add_space(10.0);

                    feedback_label(ui, &app.message, app.feedback);
                    ui.add_space(6.0);

                    let cards = app.quest_cards();
                    let mut abrir: Option<u32> = None;

                    ScrollArea::vertical().max_height(480.0).show(ui, |ui| {
                        for card in &cards {
                            let enabled = card.state != QuestState::Locked;
                            if big_list_button(ui, card.label(), panel_width - 24.0, 44.0, enabled)
                            {
                                abrir = Some(card.id);
                            }
                            ui.label(card.subtitle());
                            ui.add_space(6.0);
                        }
                    });

                    if let Some(id) = abrir {
                        app.abrir_quest(id);
                    }
                });
        });
    });
}
