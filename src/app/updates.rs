use super::*;
use crate::update::descargar_binario_nuevo;

impl QuestApp {
    pub fn ensure_update_thread(&mut self) {
        if self.update_thread_launched {
            return;
        }
        self.update_thread_launched = true;

        // El nombre del updater según plataforma
        let updater = if cfg!(windows) {
            "ict_quest_updater.exe".to_string()
        } else {
            "./ict_quest_updater".to_string()
        };

        // Hilo que descarga y arranca el updater
        std::thread::spawn(move || {
            match descargar_binario_nuevo() {
                Ok(()) => {
                    // Pequeña pausa para que el mensaje se vea
                    std::thread::sleep(std::time::Duration::from_secs(2));
                    match std::process::Command::new(&updater).spawn() {
                        Ok(_) => std::process::exit(0),
                        Err(e) => log::error!("no se pudo lanzar el updater: {e}"),
                    }
                }
                Err(e) => {
                    log::error!("error al descargar actualización: {e}");
                }
            }
        });
    }
}
