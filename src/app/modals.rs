//! Modal dialogs (blocking notices, rename)

use super::App;
use crate::theme;
use eframe::egui;

impl App {
    /// Blocking informational dialog, dismissed with OK / Escape / backdrop click.
    pub(crate) fn show_notice_modal(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let title = notice.title.clone();
        let text = notice.text.clone();

        let mut dismissed = false;
        let modal_response = egui::Modal::new(egui::Id::new("notice_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(280.0);
                ui.add(
                    egui::Label::new(egui::RichText::new(title).size(16.0).strong())
                        .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);
                ui.separator();
                ui.add_space(theme::SPACING_MD);
                ui.add(
                    egui::Label::new(egui::RichText::new(text).color(theme::TEXT_SECONDARY))
                        .selectable(false),
                );
                ui.add_space(theme::SPACING_XL);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(theme::button_accent("OK")).clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || modal_response.should_close() {
            self.notice = None;
        }
    }

    /// Rename dialog for the list window that requested it.
    pub(crate) fn show_rename_modal(&mut self, ctx: &egui::Context) {
        let Some(rename) = &mut self.rename else {
            return;
        };
        let window_id = rename.window_id;

        let mut confirmed = false;
        let mut cancelled = false;
        let modal_response = egui::Modal::new(egui::Id::new("rename_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(280.0);
                ui.add(
                    egui::Label::new(egui::RichText::new("Enter new title").size(16.0).strong())
                        .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);
                ui.separator();
                ui.add_space(theme::SPACING_MD);

                let field = egui::Frame::new()
                    .fill(theme::BG_INPUT)
                    .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE))
                    .corner_radius(theme::RADIUS_DEFAULT)
                    .inner_margin(egui::Margin::symmetric(8, 6))
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut rename.buffer)
                                .hint_text("Enter the desired title")
                                .frame(false)
                                .desired_width(ui.available_width()),
                        )
                    })
                    .inner;
                if rename.focus_field {
                    rename.focus_field = false;
                    field.request_focus();
                }
                let entered =
                    field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(theme::SPACING_XL);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(theme::button_accent("Rename")).clicked() || entered {
                        confirmed = true;
                    }
                    if ui.add(theme::button("Cancel")).clicked() {
                        cancelled = true;
                    }
                });
            });

        if confirmed {
            let new_title = self
                .rename
                .as_ref()
                .map(|r| r.buffer.trim().to_string())
                .unwrap_or_default();
            // Empty titles are ignored rather than applied
            if !new_title.is_empty() {
                if let Some(win) = self.windows.iter_mut().find(|w| w.id == window_id) {
                    win.title = new_title;
                }
            }
            self.rename = None;
        } else if cancelled || modal_response.should_close() {
            self.rename = None;
        }
    }
}
