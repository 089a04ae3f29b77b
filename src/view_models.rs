// src/view_models.rs

use crate::model::Difficulty;
use crate::progress::QuestState;

/// Tarjeta de quest para el roadmap: todo lo que la vista necesita pintar.
#[derive(Clone, Debug)]
pub struct QuestCardInfo {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub xp: u32,
    pub state: QuestState,
}

impl QuestCardInfo {
    pub fn label(&self) -> String {
        match self.state {
            QuestState::Completed => format!("Lvl_{} ✅  {}", self.id, self.title),
            QuestState::Active => format!("Lvl_{} 🔓  {}", self.id, self.title),
            QuestState::Locked => format!("Lvl_{} 🔒  {}", self.id, self.title),
        }
    }

    pub fn subtitle(&self) -> String {
        format!("{} · {} · {} XP", self.category, self.difficulty.label(), self.xp)
    }
}
