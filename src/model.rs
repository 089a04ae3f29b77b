use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Track {
    Html,
    C,
}

impl Track {
    pub fn label(&self) -> &'static str {
        match self {
            Track::Html => "HTML",
            Track::C => "Lenguaje C",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Master,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Master => "Master",
        }
    }
}

/// Un quest del roadmap: ejercicio libre con regla de aceptación por patrón.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Quest {
    pub id: u32, // denso 1..N dentro de su track
    pub title: String,
    pub category: String,
    pub problem: String,  // Enunciado
    pub hint: String,     // Pista
    pub solution: String, // Solución de referencia
    #[serde(default)]
    pub boilerplate: Option<String>,
    pub difficulty: Difficulty,
    pub xp: u32,
    pub pattern: String, // Regex de aceptación (fuente, se compila al verificar)
}

/// Pregunta de opción múltiple del banco de quiz.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize, // índice 0..options.len()
}

/// Resultado registrado de una pregunta mostrada en la sesión de quiz.
/// `selected == None` significa que el alumno no llegó a responderla.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected: Option<usize>,
    pub is_correct: bool,
}

/// Marcador agregado de la sesión de quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSummary {
    pub answered: u32,
    pub correct: u32,
    pub wrong: u32,
}

impl ScoreSummary {
    pub fn correct_rate(&self) -> u32 {
        if self.answered == 0 {
            0
        } else {
            (self.correct * 100 + self.answered / 2) / self.answered
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum AppState {
    Home,
    QuestMap,
    QuestDetail,
    Quiz,
    QuizSummary,
    PendingUpdate,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home
    }
}
