//! Reusable UI components
//!
//! Stateless rendering helpers for the form. They draw whatever buffer they
//! are given and hold no state of their own.

use crate::theme;
use crate::types::{Feedback, FeedbackKind};
use eframe::egui;

/// Field label above an input
pub fn label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(14.0)
                .strong()
                .color(theme::TEXT_LABEL),
        )
        .selectable(false),
    );
}

/// Single-line text input. Highlights its frame while focused.
pub fn input(ui: &mut egui::Ui, id_salt: &str, value: &mut String, hint: &str) -> egui::Response {
    let id = ui.make_persistent_id(id_salt);
    let focused = ui.memory(|m| m.has_focus(id));
    theme::input_frame(focused)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .id(id)
                    .hint_text(egui::RichText::new(hint).color(theme::TEXT_HINT))
                    .text_color(theme::TEXT_PRIMARY)
                    .frame(false)
                    .desired_width(f32::INFINITY),
            )
        })
        .inner
}

/// Multi-line text input with a fixed number of visible rows
pub fn text_area(
    ui: &mut egui::Ui,
    id_salt: &str,
    value: &mut String,
    hint: &str,
    rows: usize,
) -> egui::Response {
    let id = ui.make_persistent_id(id_salt);
    let focused = ui.memory(|m| m.has_focus(id));
    theme::input_frame(focused)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(value)
                    .id(id)
                    .hint_text(egui::RichText::new(hint).color(theme::TEXT_HINT))
                    .text_color(theme::TEXT_PRIMARY)
                    .frame(false)
                    .desired_rows(rows)
                    .desired_width(f32::INFINITY),
            )
        })
        .inner
}

/// Success/error message box
pub fn feedback_banner(ui: &mut egui::Ui, feedback: &Feedback) {
    let success = feedback.kind == FeedbackKind::Success;
    let color = if success {
        theme::SUCCESS_TEXT
    } else {
        theme::ERROR_TEXT
    };
    theme::feedback_frame(success).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(&feedback.text).size(14.0).color(color));
    });
}
