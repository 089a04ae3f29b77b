// src/data.rs

use serde::Deserialize;

use crate::model::{Quest, QuizQuestion, Track};

/// Banco de quests embebido, un vector denso (ids 1..N) por track.
#[derive(Deserialize, Debug, Clone)]
pub struct QuestBook {
    pub html: Vec<Quest>,
    pub c: Vec<Quest>,
}

impl QuestBook {
    pub fn quests(&self, track: Track) -> &[Quest] {
        match track {
            Track::Html => &self.html,
            Track::C => &self.c,
        }
    }

    pub fn quest(&self, track: Track, id: u32) -> Option<&Quest> {
        self.quests(track).iter().find(|q| q.id == id)
    }

    pub fn level_count(&self, track: Track) -> u32 {
        self.quests(track).len() as u32
    }
}

/// Carga el banco de quests desde el YAML embebido
pub fn read_quests_embedded() -> QuestBook {
    let file_content = include_str!("data/quests.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de quests YAML")
}

/// Carga el banco de preguntas de quiz desde el YAML embebido
pub fn read_quiz_embedded() -> Vec<QuizQuestion> {
    let file_content = include_str!("data/quiz_questions.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de quiz YAML")
}
