use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Almacén clave-valor durable (valores string). La app inyecta una
/// implementación real; los tests una falsa en memoria.
pub trait KeyValueStorage {
    /// `None` si la clave no existe o el almacén no está disponible.
    fn get(&self, key: &str) -> Option<String>;
    /// Los fallos de escritura se tragan: el progreso en memoria sigue
    /// avanzando aunque la próxima sesión pueda no verlo.
    fn set(&mut self, key: &str, value: &str);
}

/// Almacén respaldado por un único fichero JSON plano junto a la app,
/// al estilo `quiz_progress.json`.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_map(&self) -> BTreeMap<String, String> {
        let Ok(json) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        // Fichero corrupto == fichero ausente
        serde_json::from_str(&json).unwrap_or_default()
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        let mut map = self.read_map();
        map.insert(key.to_owned(), value.to_owned());
        match serde_json::to_string_pretty(&map) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    log::warn!("no se pudo guardar {}: {e}", self.path.display());
                }
            }
            Err(e) => log::warn!("no se pudo serializar el progreso: {e}"),
        }
    }
}

/// Almacén en memoria para tests.
#[derive(Default)]
pub struct MemoryStorage {
    map: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_owned(), value.to_owned());
    }
}
