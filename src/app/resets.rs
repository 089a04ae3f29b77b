use super::*;
use eframe::egui;

impl QuestApp {
    /// Borra punteros y XP de ambos tracks y vuelve al mapa.
    pub fn reiniciar_progreso(&mut self) {
        self.store.reset_all();
        self.selected_quest = None;
        self.quest_input.clear();
        self.confirm_reset = false;
        self.message.clear();
        self.feedback = Feedback::None;
        self.state = AppState::QuestMap;
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres borrar todo tu progreso y XP? ¡Esta acción no se puede deshacer!");
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.reiniciar_progreso();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
