use super::*;
use crate::progress::QuestState;
use crate::report::compile_report;
use crate::verify::{PatternRule, check_choice, verify_submission};

impl QuestApp {
    // ---------- Roadmap de quests ----------

    /// Abre un quest del track activo. Los bloqueados no se abren.
    pub fn abrir_quest(&mut self, id: u32) {
        if self.store.quest_state(self.active_track, id) == QuestState::Locked {
            self.message = "🔒 Completa antes el nivel activo para desbloquear este.".into();
            self.feedback = Feedback::Error;
            return;
        }
        let Some(boilerplate) = self
            .quest_book
            .quest(self.active_track, id)
            .map(|q| q.boilerplate.clone())
        else {
            return;
        };
        self.quest_input = boilerplate.unwrap_or_default();
        self.selected_quest = Some(id);
        self.show_solution = false;
        self.show_hint = false;
        self.message.clear();
        self.feedback = Feedback::None;
        self.state = AppState::QuestDetail;
    }

    pub fn volver_al_mapa(&mut self) {
        self.selected_quest = None;
        self.quest_input.clear();
        self.message.clear();
        self.feedback = Feedback::None;
        self.state = AppState::QuestMap;
    }

    /// Verifica el envío del quest abierto y, si pasa y era el nivel
    /// activo, avanza el puntero y suma XP. Reintentos sobre niveles ya
    /// completados dan feedback positivo pero no tocan el estado.
    pub fn procesar_respuesta_quest(&mut self) {
        let Some(id) = self.selected_quest else {
            return;
        };
        let track = self.active_track;
        let Some(quest) = self.quest_book.quest(track, id).cloned() else {
            return;
        };

        if self.quest_input.trim().is_empty() {
            self.message = "⚠ Debes escribir una respuesta antes de enviar.".into();
            self.feedback = Feedback::Error;
            return;
        }

        let rule = PatternRule::new(&quest.pattern);
        if !verify_submission(&rule, &self.quest_input) {
            self.message = "❌ Logic mismatch. Relee los requisitos de la misión.".into();
            self.feedback = Feedback::Error;
            return;
        }

        let reward = quest.xp;
        if self.store.record_success(track, id, reward) {
            self.message = format!("✅ ¡Superado! +{reward} XP");
        } else {
            // Correcto pero ya completado: sin doble recompensa
            self.message = "✅ Correcto (nivel ya completado, sin XP nuevo).".into();
        }
        self.feedback = Feedback::Success;
    }

    // ---------- Sesión de quiz ----------

    pub fn empezar_quiz(&mut self) {
        self.answers = (0..self.quiz_bank.len())
            .map(|i| AnswerRecord {
                question_index: i,
                selected: None,
                is_correct: false,
            })
            .collect();
        self.current_question = 0;
        self.selected_option = None;
        self.submitted = false;
        self.message.clear();
        self.feedback = Feedback::None;
        self.state = AppState::Quiz;
    }

    /// Corrige la opción marcada de la pregunta en curso y la registra.
    pub fn procesar_respuesta_quiz(&mut self) {
        if self.submitted || self.selected_option.is_none() {
            return;
        }
        let Some(correct_index) = self
            .quiz_bank
            .get(self.current_question)
            .map(|q| q.correct_answer)
        else {
            return;
        };
        let outcome = check_choice(self.selected_option, correct_index);
        if let Some(record) = self.answers.get_mut(self.current_question) {
            record.selected = self.selected_option;
            record.is_correct = outcome.is_correct;
        }
        self.submitted = true;
    }

    pub fn siguiente_pregunta(&mut self) {
        if self.current_question + 1 < self.quiz_bank.len() {
            self.current_question += 1;
            self.selected_option = None;
            self.submitted = false;
        } else {
            self.terminar_quiz();
        }
    }

    pub fn terminar_quiz(&mut self) {
        self.state = AppState::QuizSummary;
        self.message.clear();
        self.feedback = Feedback::None;
    }

    /// Compila el informe imprimible y lo deja en un fichero junto a la
    /// app. Un fallo de escritura se informa, nunca rompe la sesión.
    pub fn guardar_informe(&mut self) {
        let generated_at = chrono::Local::now().format("%d/%m/%Y %H:%M").to_string();
        let doc = compile_report(&self.quiz_bank, &self.answers, &generated_at);

        let path = "ict_quiz_report.html";
        match std::fs::write(path, doc) {
            Ok(()) => {
                self.message = format!("📄 Informe guardado en {path} (ábrelo e imprímelo).");
                self.feedback = Feedback::Success;
            }
            Err(e) => {
                log::warn!("no se pudo guardar el informe: {e}");
                self.message = "⚠ No se pudo guardar el informe en disco.".into();
                self.feedback = Feedback::Error;
            }
        }
    }

    pub fn volver_a_inicio(&mut self) {
        self.selected_quest = None;
        self.message.clear();
        self.feedback = Feedback::None;
        self.state = AppState::Home;
    }
}
