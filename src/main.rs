use ict_quest::QuestApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "ICT Quest Lab - Toufiq Sir",
        options,
        Box::new(|_cc| Ok(Box::new(QuestApp::new()))),
    )
}
