use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Track;
use crate::storage::KeyValueStorage;

pub const PROGRESS_KEY: &str = "ict_quest_progress_v1";
pub const XP_KEY: &str = "ict_total_xp_v1";

/// Progreso de un track: primer nivel todavía no completado.
/// `id < unlocked_up_to` completado, `id == unlocked_up_to` activo,
/// `id > unlocked_up_to` bloqueado.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub unlocked_up_to: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self { unlocked_up_to: 1 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct ProgressBlob {
    tracks: HashMap<Track, Progress>,
}

/// Estado derivado de un nivel según el puntero de desbloqueo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestState {
    Locked,
    Active,
    Completed,
}

/// Almacén de progreso y XP por track, sobre un `KeyValueStorage` inyectado.
///
/// El puntero de cada track solo avanza en 1 al completar el nivel activo;
/// intentos fuera de orden o repetidos no tocan el estado ni dan XP.
pub struct QuestProgressStore {
    storage: Box<dyn KeyValueStorage>,
    level_counts: HashMap<Track, u32>,
    tracks: HashMap<Track, Progress>,
    xp_total: u64,
}

impl QuestProgressStore {
    pub fn new(storage: Box<dyn KeyValueStorage>, level_counts: HashMap<Track, u32>) -> Self {
        let mut store = Self {
            storage,
            level_counts,
            tracks: HashMap::new(),
            xp_total: 0,
        };
        store.load();
        store
    }

    /// Lee el estado persistido; ausente o corrupto degrada a los
    /// valores por defecto (puntero 1, XP 0), nunca falla.
    fn load(&mut self) {
        let blob: ProgressBlob = self
            .storage
            .get(PROGRESS_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();

        self.tracks.clear();
        for (&track, &count) in &self.level_counts {
            let loaded = blob.tracks.get(&track).copied().unwrap_or_default();
            // Se acota el puntero a [1, N+1] por si el blob viene dañado
            let clamped = loaded.unlocked_up_to.clamp(1, count + 1);
            self.tracks.insert(
                track,
                Progress {
                    unlocked_up_to: clamped,
                },
            );
        }

        self.xp_total = self
            .storage
            .get(XP_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0);
    }

    fn persist(&mut self) {
        let blob = ProgressBlob {
            tracks: self.tracks.clone(),
        };
        match serde_json::to_string(&blob) {
            Ok(json) => self.storage.set(PROGRESS_KEY, &json),
            Err(e) => log::warn!("no se pudo serializar el progreso: {e}"),
        }
        self.storage.set(XP_KEY, &self.xp_total.to_string());
    }

    pub fn progress(&self, track: Track) -> Progress {
        self.tracks.get(&track).copied().unwrap_or_default()
    }

    pub fn xp_total(&self) -> u64 {
        self.xp_total
    }

    pub fn level_count(&self, track: Track) -> u32 {
        self.level_counts.get(&track).copied().unwrap_or(0)
    }

    /// Estado Locked/Active/Completed de un nivel concreto.
    pub fn quest_state(&self, track: Track, level_id: u32) -> QuestState {
        let pointer = self.progress(track).unlocked_up_to;
        if level_id < pointer {
            QuestState::Completed
        } else if level_id == pointer {
            QuestState::Active
        } else {
            QuestState::Locked
        }
    }

    /// ¿Todos los niveles del track completados?
    pub fn track_cleared(&self, track: Track) -> bool {
        self.progress(track).unlocked_up_to > self.level_count(track)
    }

    /// Registra una verificación superada. Solo muta estado si `level_id`
    /// es exactamente el nivel activo y existe en el track: entonces el
    /// puntero avanza 1, el XP suma `reward` una única vez y ambos se
    /// persisten juntos. Devuelve `true` si hubo avance.
    pub fn record_success(&mut self, track: Track, level_id: u32, reward: u32) -> bool {
        let count = self.level_count(track);
        let Some(progress) = self.tracks.get_mut(&track) else {
            return false;
        };
        if level_id != progress.unlocked_up_to || level_id > count {
            return false;
        }

        progress.unlocked_up_to += 1;
        self.xp_total = self.xp_total.saturating_add(u64::from(reward));
        self.persist();
        true
    }

    /// Borra todo: punteros a 1 y XP a 0, persistido.
    pub fn reset_all(&mut self) {
        for progress in self.tracks.values_mut() {
            *progress = Progress::default();
        }
        self.xp_total = 0;
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store_with_counts(html: u32, c: u32) -> QuestProgressStore {
        let counts = HashMap::from([(Track::Html, html), (Track::C, c)]);
        QuestProgressStore::new(Box::new(MemoryStorage::new()), counts)
    }

    #[test]
    fn defaults_on_empty_storage() {
        let store = store_with_counts(3, 3);
        assert_eq!(store.progress(Track::Html).unlocked_up_to, 1);
        assert_eq!(store.progress(Track::C).unlocked_up_to, 1);
        assert_eq!(store.xp_total(), 0);
    }

    #[test]
    fn tres_niveles_con_recompensa() {
        // Track HTML con niveles 1..3 y recompensa 50 cada uno
        let mut store = store_with_counts(3, 3);

        assert!(store.record_success(Track::Html, 1, 50));
        assert_eq!(store.progress(Track::Html).unlocked_up_to, 2);
        assert_eq!(store.xp_total(), 50);

        // Saltarse el nivel 2 no cambia nada
        assert!(!store.record_success(Track::Html, 3, 50));
        assert_eq!(store.progress(Track::Html).unlocked_up_to, 2);
        assert_eq!(store.xp_total(), 50);

        assert!(store.record_success(Track::Html, 2, 50));
        assert_eq!(store.progress(Track::Html).unlocked_up_to, 3);
        assert_eq!(store.xp_total(), 100);

        // Reintentar el nivel 1 ya completado: sin doble recompensa
        assert!(!store.record_success(Track::Html, 1, 50));
        assert_eq!(store.progress(Track::Html).unlocked_up_to, 3);
        assert_eq!(store.xp_total(), 100);
    }

    #[test]
    fn pointer_is_monotonic_and_steps_by_one() {
        let mut store = store_with_counts(5, 5);
        let mut last = store.progress(Track::C).unlocked_up_to;
        for id in [3, 1, 1, 2, 5, 2, 4, 3] {
            store.record_success(Track::C, id, 10);
            let now = store.progress(Track::C).unlocked_up_to;
            assert!(now >= last && now - last <= 1);
            last = now;
        }
    }

    #[test]
    fn tracks_are_independent() {
        let mut store = store_with_counts(3, 3);
        assert!(store.record_success(Track::C, 1, 15));
        assert_eq!(store.progress(Track::Html).unlocked_up_to, 1);
        assert_eq!(store.progress(Track::C).unlocked_up_to, 2);
        assert_eq!(store.xp_total(), 15);
    }

    #[test]
    fn terminal_state_accepts_no_more_successes() {
        let mut store = store_with_counts(2, 2);
        assert!(store.record_success(Track::Html, 1, 10));
        assert!(store.record_success(Track::Html, 2, 10));
        assert!(store.track_cleared(Track::Html));

        // Fuera de rango: no-op
        assert!(!store.record_success(Track::Html, 3, 10));
        assert_eq!(store.progress(Track::Html).unlocked_up_to, 3);
        assert_eq!(store.xp_total(), 20);
    }

    #[test]
    fn quest_state_derivation() {
        let mut store = store_with_counts(3, 3);
        store.record_success(Track::Html, 1, 50);
        assert_eq!(store.quest_state(Track::Html, 1), QuestState::Completed);
        assert_eq!(store.quest_state(Track::Html, 2), QuestState::Active);
        assert_eq!(store.quest_state(Track::Html, 3), QuestState::Locked);
    }

    #[test]
    fn persists_and_reloads_through_storage() {
        let mut backing = MemoryStorage::new();
        let counts = HashMap::from([(Track::Html, 3u32), (Track::C, 3u32)]);
        {
            let mut store =
                QuestProgressStore::new(Box::new(MemoryStorage::new()), counts.clone());
            store.record_success(Track::Html, 1, 50);
            // Copia manual del estado persistido al backing compartido
            backing.set(PROGRESS_KEY, &store.storage.get(PROGRESS_KEY).unwrap());
            backing.set(XP_KEY, &store.storage.get(XP_KEY).unwrap());
        }
        let reloaded = QuestProgressStore::new(Box::new(backing), counts);
        assert_eq!(reloaded.progress(Track::Html).unlocked_up_to, 2);
        assert_eq!(reloaded.xp_total(), 50);
    }

    #[test]
    fn corrupt_blobs_degrade_to_defaults() {
        let mut backing = MemoryStorage::new();
        backing.set(PROGRESS_KEY, "]]not json[[");
        backing.set(XP_KEY, "tres mil");
        let counts = HashMap::from([(Track::Html, 3u32), (Track::C, 3u32)]);
        let store = QuestProgressStore::new(Box::new(backing), counts);
        assert_eq!(store.progress(Track::Html).unlocked_up_to, 1);
        assert_eq!(store.xp_total(), 0);
    }

    #[test]
    fn out_of_range_pointer_is_clamped_on_load() {
        let mut backing = MemoryStorage::new();
        backing.set(
            PROGRESS_KEY,
            r#"{"tracks":{"Html":{"unlocked_up_to":99},"C":{"unlocked_up_to":0}}}"#,
        );
        let counts = HashMap::from([(Track::Html, 3u32), (Track::C, 3u32)]);
        let store = QuestProgressStore::new(Box::new(backing), counts);
        assert_eq!(store.progress(Track::Html).unlocked_up_to, 4); // N + 1
        assert_eq!(store.progress(Track::C).unlocked_up_to, 1);
    }

    #[test]
    fn reset_all_restores_defaults() {
        let mut store = store_with_counts(3, 3);
        store.record_success(Track::Html, 1, 50);
        store.record_success(Track::C, 1, 15);
        store.reset_all();
        assert_eq!(store.progress(Track::Html).unlocked_up_to, 1);
        assert_eq!(store.progress(Track::C).unlocked_up_to, 1);
        assert_eq!(store.xp_total(), 0);

        // Y lo persistido también queda a cero
        assert_eq!(store.storage.get(XP_KEY).as_deref(), Some("0"));
    }
}
