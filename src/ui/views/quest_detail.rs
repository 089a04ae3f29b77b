use crate::QuestApp;
use crate::code_utils::{c_syntax, html_syntax};
use crate::model::Track;
use crate::ui::helpers::feedback_label;
use crate::ui::layout::{code_editor_input, code_editor_solution, two_button_row};
use egui::{Align, CentralPanel, Context, ScrollArea};

pub fn ui_quest_detail(app: &mut QuestApp, ctx: &Context) {
    // Sin quest abierto no hay nada que pintar; volvemos al mapa
    let Some(quest) = app.quest_abierto().cloned() else {
        app.volver_al_mapa();
        return;
    };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 12))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading(format!(
                        "Lvl_{} · {}  ({} XP)",
                        quest.id, quest.title, quest.xp
                    ));
                    ui.label(format!(
                        "{} · {}",
                        quest.category,
                        quest.difficulty.label()
                    ));
                    ui.add_space(8.0);

                    // Enunciado con scroll acotado
                    let prompt_max_height = 120.0;
                    ui.allocate_ui_with_layout(
                        egui::vec2(panel_width, prompt_max_height),
                        egui::Layout::top_down(Align::Min),
                        |ui| {
                            ScrollArea::vertical()
                                .max_height(prompt_max_height)
                                .show(ui, |ui| {
                                    ui.label(&quest.problem);
                                });
                        },
                    );
                    ui.add_space(5.0);

                    ui.checkbox(&mut app.show_hint, "💡 Pista");
                    if app.show_hint {
                        ui.label(format!("💡 {}", quest.hint));
                    }
                    ui.add_space(5.0);

                    let syntax = match app.active_track {
                        Track::C => c_syntax(),
                        Track::Html => html_syntax(),
                    };
                    let max_input_height = 245.0;
                    let code_rows = 12;
                    let font_id = egui::TextStyle::Monospace.resolve(ui.style());
                    let line_height = ui.fonts(|f| f.row_height(&font_id));

                    if !app.show_solution {
                        if ui.button("Ver solución").clicked() {
                            app.show_solution = true;
                        }
                        code_editor_input(
                            ui,
                            "quest_input",
                            panel_width,
                            code_rows,
                            line_height,
                            syntax.clone(),
                            &mut app.quest_input,
                            max_input_height,
                        );
                    } else {
                        if ui.button("Ocultar solución").clicked() {
                            app.show_solution = false;
                        }
                        code_editor_solution(
                            ui,
                            panel_width,
                            code_rows,
                            line_height,
                            syntax.clone(),
                            &quest.solution,
                            max_input_height,
                        );
                    }

                    ui.add_space(8.0);
                    feedback_label(ui, &app.message, app.feedback);
                    ui.add_space(8.0);

                    let (enviar, volver) =
                        two_button_row(ui, panel_width, "🚀 Enviar solución", "🔙 Volver al mapa");
                    if enviar {
                        app.procesar_respuesta_quest();
                    }
                    if volver {
                        app.volver_al_mapa();
                    }
                });
        });
    });
}
