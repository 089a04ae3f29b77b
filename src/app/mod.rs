use std::collections::HashMap;

use crate::data::{QuestBook, read_quests_embedded, read_quiz_embedded};
use crate::model::{AnswerRecord, AppState, QuizQuestion, Track};
use crate::progress::QuestProgressStore;
use crate::storage::{FileStorage, KeyValueStorage};

// Submódulos
pub mod actions;
pub mod queries;
pub mod resets;
pub mod updates;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::QuestCardInfo;

/// Fichero junto a la app donde vive el progreso persistido.
pub const PROGRESS_FILE: &str = "ict_quest_progress.json";

/// Feedback de la última verificación, para colorear el mensaje.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Feedback {
    None,
    Success,
    Error,
}

pub struct QuestApp {
    // Núcleo
    pub store: QuestProgressStore,
    pub quest_book: QuestBook,
    pub quiz_bank: Vec<QuizQuestion>,

    // Roadmap de quests
    pub active_track: Track,
    pub selected_quest: Option<u32>, // id dentro del track activo
    pub quest_input: String,
    pub show_solution: bool,
    pub show_hint: bool,

    // Sesión de quiz (efímera, no se persiste)
    pub current_question: usize,
    pub selected_option: Option<usize>,
    pub submitted: bool,
    pub answers: Vec<AnswerRecord>,

    pub message: String,
    pub feedback: Feedback,
    pub state: AppState,
    pub confirm_reset: bool,
    pub has_update: Option<String>,
    pub update_thread_launched: bool,
}

impl QuestApp {
    pub fn new() -> Self {
        Self::with_storage(Box::new(FileStorage::new(PROGRESS_FILE)))
    }

    /// El almacén se inyecta para poder falsearlo en tests.
    pub fn with_storage(storage: Box<dyn KeyValueStorage>) -> Self {
        let quest_book = read_quests_embedded();
        let quiz_bank = read_quiz_embedded();

        let level_counts = HashMap::from([
            (Track::Html, quest_book.level_count(Track::Html)),
            (Track::C, quest_book.level_count(Track::C)),
        ]);
        let store = QuestProgressStore::new(storage, level_counts);

        let mut app = Self {
            store,
            quest_book,
            quiz_bank,
            active_track: Track::Html,
            selected_quest: None,
            quest_input: String::new(),
            show_solution: false,
            show_hint: false,
            current_question: 0,
            selected_option: None,
            submitted: false,
            answers: Vec::new(),
            message: String::new(),
            feedback: Feedback::None,
            state: AppState::Home,
            confirm_reset: false,
            has_update: None,
            update_thread_launched: false,
        };

        // Señal que deja el updater tras reemplazar el binario
        let signal_path = std::path::Path::new(".update_success");
        if signal_path.exists() {
            app.message = format!(
                "¡Actualización a versión {} completada!",
                env!("CARGO_PKG_VERSION")
            );
            let _ = std::fs::remove_file(signal_path);
        }

        app
    }

    /// Cambia de track y cierra cualquier quest abierto.
    pub fn seleccionar_track(&mut self, track: Track) {
        self.active_track = track;
        self.selected_quest = None;
        self.quest_input.clear();
        self.show_solution = false;
        self.show_hint = false;
        self.message.clear();
        self.feedback = Feedback::None;
    }
}

impl Default for QuestApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppState;
    use crate::storage::MemoryStorage;

    fn test_app() -> QuestApp {
        QuestApp::with_storage(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn quest_flow_awards_xp_once() {
        let mut app = test_app();
        app.active_track = Track::Html;
        app.abrir_quest(1);
        assert!(matches!(app.state, AppState::QuestDetail));

        let xp = app.quest_abierto().expect("quest abierto").xp;
        app.quest_input =
            "<html>\n  <body>\n    Standard Page Content\n  </body>\n</html>".to_owned();
        app.procesar_respuesta_quest();
        assert_eq!(app.store.xp_total(), u64::from(xp));
        assert_eq!(app.store.progress(Track::Html).unlocked_up_to, 2);

        // Reintento del mismo nivel: correcto pero sin XP nuevo
        app.procesar_respuesta_quest();
        assert_eq!(app.store.xp_total(), u64::from(xp));
        assert_eq!(app.store.progress(Track::Html).unlocked_up_to, 2);
    }

    #[test]
    fn wrong_submission_changes_nothing() {
        let mut app = test_app();
        app.abrir_quest(1);
        app.quest_input = "texto que no cumple el patrón".to_owned();
        app.procesar_respuesta_quest();
        assert_eq!(app.store.xp_total(), 0);
        assert_eq!(app.store.progress(Track::Html).unlocked_up_to, 1);
        assert_eq!(app.feedback, Feedback::Error);
    }

    #[test]
    fn locked_quest_does_not_open() {
        let mut app = test_app();
        app.abrir_quest(3);
        assert!(matches!(app.state, AppState::Home));
        assert!(app.selected_quest.is_none());
    }

    #[test]
    fn quiz_session_records_and_summarizes() {
        let mut app = test_app();
        app.empezar_quiz();
        assert_eq!(app.answers.len(), app.quiz_bank.len());

        // Primera pregunta: respuesta correcta
        let correct = app.quiz_bank[0].correct_answer;
        app.selected_option = Some(correct);
        app.procesar_respuesta_quiz();
        assert!(app.answers[0].is_correct);

        // Segunda: incorrecta a propósito
        app.siguiente_pregunta();
        let correct = app.quiz_bank[1].correct_answer;
        app.selected_option = Some((correct + 1) % 4);
        app.procesar_respuesta_quiz();
        assert!(!app.answers[1].is_correct);

        app.terminar_quiz();
        let score = app.score();
        assert_eq!((score.answered, score.correct, score.wrong), (2, 1, 1));
    }

    #[test]
    fn submit_without_selection_is_a_noop() {
        let mut app = test_app();
        app.empezar_quiz();
        app.procesar_respuesta_quiz();
        assert!(!app.submitted);
        assert_eq!(app.score().answered, 0);
    }
}
