use super::*;
use crate::model::{Quest, ScoreSummary};
use crate::report::summarize;

impl QuestApp {
    /// Quest actualmente abierto en el detalle.
    pub fn quest_abierto(&self) -> Option<&Quest> {
        let id = self.selected_quest?;
        self.quest_book.quest(self.active_track, id)
    }

    /// Pregunta de quiz en curso.
    pub fn pregunta_actual(&self) -> Option<&QuizQuestion> {
        self.quiz_bank.get(self.current_question)
    }

    /// Registro de la pregunta en curso (tras enviar).
    pub fn respuesta_actual(&self) -> Option<&AnswerRecord> {
        self.answers.get(self.current_question)
    }

    /// Marcador en vivo de la sesión de quiz.
    pub fn score(&self) -> ScoreSummary {
        summarize(&self.answers)
    }

    pub fn es_ultima_pregunta(&self) -> bool {
        self.current_question + 1 >= self.quiz_bank.len()
    }

    /// ¿Queda progreso que merezca confirmación antes de borrar?
    pub fn hay_progreso_guardado(&self) -> bool {
        self.store.xp_total() > 0
            || self.store.progress(Track::Html).unlocked_up_to > 1
            || self.store.progress(Track::C).unlocked_up_to > 1
    }
}
