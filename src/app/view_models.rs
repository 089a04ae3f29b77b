use super::*;

impl QuestApp {
    /// Tarjetas del roadmap para el track activo, con su estado derivado
    /// del puntero de desbloqueo.
    pub fn quest_cards(&self) -> Vec<QuestCardInfo> {
        let track = self.active_track;
        self.quest_book
            .quests(track)
            .iter()
            .map(|q| QuestCardInfo {
                id: q.id,
                title: q.title.clone(),
                category: q.category.clone(),
                difficulty: q.difficulty,
                xp: q.xp,
                state: self.store.quest_state(track, q.id),
            })
            .collect()
    }

    /// Etiqueta del marcador de XP para el panel superior.
    pub fn xp_label(&self) -> String {
        format!("⚡ {} XP", self.store.xp_total())
    }
}
