// src/ui/helpers.rs
use crate::app::Feedback;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Mensaje de feedback coloreado según el resultado de la verificación.
pub fn feedback_label(ui: &mut Ui, message: &str, feedback: Feedback) {
    if message.is_empty() {
        return;
    }
    let color = match feedback {
        Feedback::Success => Color32::LIGHT_GREEN,
        Feedback::Error => Color32::LIGHT_RED,
        Feedback::None => Color32::YELLOW,
    };
    ui.label(RichText::new(message).color(color).strong());
}
