use crate::QuestApp;
use crate::ui::helpers::feedback_label;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, Grid};

pub fn ui_quiz_summary(app: &mut QuestApp, ctx: &Context) {
    let score = app.score();

    centered_panel(ctx, 380.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("📊 QUIZ Report");
            ui.add_space(12.0);

            Grid::new("quiz_summary_grid")
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Total respondidas");
                    ui.label(score.answered.to_string());
                    ui.end_row();

                    ui.label("Correctas");
                    ui.label(score.correct.to_string());
                    ui.end_row();

                    ui.label("Incorrectas");
                    ui.label(score.wrong.to_string());
                    ui.end_row();

                    ui.label("Nota final");
                    ui.label(score.correct.to_string());
                    ui.end_row();

                    ui.label("Acierto");
                    ui.label(format!("{}%", score.correct_rate()));
                    ui.end_row();
                });

            ui.add_space(16.0);
            feedback_label(ui, &app.message, app.feedback);
            ui.add_space(8.0);

            let btn_w = 280.0;
            if ui
                .add_sized([btn_w, 40.0], Button::new("📄 Guardar informe imprimible"))
                .clicked()
            {
                app.guardar_informe();
            }
            ui.add_space(5.0);
            if ui
                .add_sized([btn_w, 40.0], Button::new("🔁 Re-entrar a la arena"))
                .clicked()
            {
                app.empezar_quiz();
            }
            ui.add_space(5.0);
            if ui.add_sized([btn_w, 40.0], Button::new("🔙 Inicio")).clicked() {
                app.volver_a_inicio();
            }
        });
    });
}
