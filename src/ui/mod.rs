mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuestApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuestApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // PANEL SUPERIOR: XP, reinicio y volver (no en Home ni durante update)
        if matches!(
            self.state,
            AppState::QuestMap | AppState::QuestDetail | AppState::Quiz | AppState::QuizSummary
        ) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las funciones en views/
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::QuestMap => views::quest_map::ui_quest_map(self, ctx),
            AppState::QuestDetail => views::quest_detail::ui_quest_detail(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::QuizSummary => views::summary::ui_quiz_summary(self, ctx),
            AppState::PendingUpdate => views::pending::ui_pending_update(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }
}
