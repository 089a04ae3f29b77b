use crate::QuestApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, RichText};

pub fn ui_quiz(app: &mut QuestApp, ctx: &Context) {
    let Some(question) = app.pregunta_actual().cloned() else {
        // Banco vacío: no hay sesión posible
        app.terminar_quiz();
        return;
    };
    let total = app.quiz_bank.len();
    let score = app.score();

    centered_panel(ctx, 420.0, 650.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "Pregunta {}/{}",
                    app.current_question + 1,
                    total
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("✔ {}", score.correct)).color(Color32::LIGHT_GREEN),
                    );
                    ui.label(RichText::new(format!("✘ {}", score.wrong)).color(Color32::LIGHT_RED));
                });
            });
            ui.add_space(10.0);

            ui.heading(&question.question);
            ui.add_space(14.0);

            let correct = question.correct_answer;
            for (i, option) in question.options.iter().enumerate() {
                let marked = app.selected_option == Some(i);
                let text = if app.submitted {
                    if i == correct {
                        RichText::new(format!("✔ {option}")).color(Color32::LIGHT_GREEN)
                    } else if marked {
                        RichText::new(format!("✘ {option}")).color(Color32::LIGHT_RED)
                    } else {
                        RichText::new(option)
                    }
                } else if marked {
                    RichText::new(format!("▶ {option}")).strong()
                } else {
                    RichText::new(option)
                };

                let btn = ui.add_sized([ui.available_width().min(560.0), 36.0], Button::new(text));
                if btn.clicked() && !app.submitted {
                    app.selected_option = Some(i);
                }
            }

            ui.add_space(16.0);

            if !app.submitted {
                let enviar = ui.add_enabled(
                    app.selected_option.is_some(),
                    Button::new("Enviar respuesta").min_size([220.0, 40.0].into()),
                );
                if enviar.clicked() {
                    app.procesar_respuesta_quiz();
                }
            } else {
                let label = if app.es_ultima_pregunta() {
                    "🏁 Terminar examen"
                } else {
                    "➡ Siguiente pregunta"
                };
                if ui
                    .add(Button::new(label).min_size([220.0, 40.0].into()))
                    .clicked()
                {
                    app.siguiente_pregunta();
                }
            }

            ui.add_space(10.0);
            if ui.button("Cerrar y ver resumen").clicked() {
                app.terminar_quiz();
            }
        });
    });
}
