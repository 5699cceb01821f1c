//! Contact form rendering

use super::App;
use crate::constants::*;
use crate::theme;
use crate::ui::components::{feedback_banner, input, label, text_area};
use eframe::egui;

impl App {
    pub(crate) fn render_form(&mut self, ctx: &egui::Context) {
        let busy = self.controller.is_submitting();
        let mut submit = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(theme::FORM_TOP_MARGIN);
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(theme::FORM_MAX_WIDTH);
                            theme::form_frame().show(ui, |ui| {
                                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                    submit |= self.render_fields(ui, busy);

                                    ui.add_space(theme::SPACING_LG);

                                    let text = if busy {
                                        format!("{}  {}", egui_phosphor::regular::HOURGLASS, BUTTON_SUBMITTING)
                                    } else {
                                        format!("{}  {}", egui_phosphor::regular::PAPER_PLANE_TILT, BUTTON_SUBMIT)
                                    };
                                    let button = theme::button_submit(text, busy)
                                        .min_size(egui::vec2(ui.available_width(), theme::BUTTON_HEIGHT));
                                    if ui.add_enabled(!busy, button).clicked() {
                                        submit = true;
                                    }
                                });
                            });
                        });
                        ui.add_space(theme::FORM_TOP_MARGIN);
                    });
            });

        if submit {
            self.submit(ctx);
        }
    }

    /// Inputs and feedback. Disabled and dimmed while a request is in flight.
    /// Returns true if Enter was pressed in a single-line field.
    fn render_fields(&mut self, ui: &mut egui::Ui, busy: bool) -> bool {
        let feedback = self.controller.state().feedback().cloned();
        let fields = self.controller.fields_mut();
        let mut enter_pressed = false;

        ui.add_enabled_ui(!busy, |ui| {
            if busy {
                ui.multiply_opacity(theme::DISABLED_OPACITY);
            }

            let single_line = [
                (LABEL_NAME, "contact_name", &mut fields.name, HINT_NAME),
                (LABEL_EMAIL, "contact_email", &mut fields.email, HINT_EMAIL),
                (LABEL_SUBJECT, "contact_subject", &mut fields.subject, HINT_SUBJECT),
            ];
            for (label_text, id, value, hint) in single_line {
                label(ui, label_text);
                let response = input(ui, id, value, hint);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    enter_pressed = true;
                }
                ui.add_space(theme::SPACING_LG - theme::SPACING_SM);
            }

            label(ui, LABEL_MESSAGE);
            text_area(ui, "contact_message", &mut fields.message, HINT_MESSAGE, MESSAGE_ROWS);

            if let Some(feedback) = &feedback {
                ui.add_space(theme::SPACING_LG - theme::SPACING_SM);
                feedback_banner(ui, feedback);
            }
        });

        enter_pressed
    }
}
