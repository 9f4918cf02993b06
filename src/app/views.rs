//! List window rendering

use super::App;
use crate::model::AddError;
use crate::theme;
use crate::types::Notice;
use eframe::egui;
use tracing::debug;

impl App {
    /// Render every open list window inside the main viewport.
    pub(crate) fn show_list_windows(&mut self, ctx: &egui::Context) {
        let mut pending_notice: Option<Notice> = None;
        let mut activated: Option<u64> = None;

        for win in &mut self.windows {
            let mut is_open = win.open;
            let title = if win.dirty {
                format!("{} •", win.title)
            } else {
                win.title.clone()
            };

            let response = egui::Window::new(title)
                .id(egui::Id::new(("list_window", win.id)))
                .open(&mut is_open)
                .default_size([420.0, 460.0])
                .min_width(320.0)
                .min_height(220.0)
                .show(ctx, |ui| {
                    // Entry row: text field + Add button
                    let submitted = ui
                        .horizontal(|ui| {
                            let add_width = 70.0;
                            let entry_id = egui::Id::new(("item_entry", win.id));
                            let entry_response = egui::Frame::new()
                                .fill(theme::BG_INPUT)
                                .stroke(egui::Stroke::new(
                                    theme::STROKE_DEFAULT,
                                    theme::BORDER_SUBTLE,
                                ))
                                .corner_radius(theme::RADIUS_DEFAULT)
                                .inner_margin(egui::Margin::symmetric(8, 6))
                                .show(ui, |ui| {
                                    ui.add(
                                        egui::TextEdit::singleline(&mut win.entry)
                                            .id(entry_id)
                                            .hint_text("Describe new item...")
                                            .frame(false)
                                            .desired_width(
                                                ui.available_width() - add_width - 24.0,
                                            ),
                                    )
                                })
                                .inner;
                            if win.focus_entry {
                                win.focus_entry = false;
                                entry_response.request_focus();
                            }
                            let entered = entry_response.lost_focus()
                                && ui.input(|i| i.key_pressed(egui::Key::Enter));
                            let clicked = ui
                                .add_sized(
                                    [add_width, theme::BUTTON_HEIGHT],
                                    theme::button_accent(format!(
                                        "{} Add",
                                        egui_phosphor::regular::PLUS
                                    )),
                                )
                                .clicked();
                            entered || clicked
                        })
                        .inner;

                    if submitted {
                        match win.list.add(&win.entry) {
                            Ok(()) => {
                                win.entry.clear();
                                win.dirty = true;
                            }
                            Err(e @ AddError::EmptyLabel) => {
                                // Input kept so the user can finish typing
                                pending_notice =
                                    Some(Notice::new("Missing input", e.to_string()));
                            }
                            Err(e @ AddError::Duplicate) => {
                                win.entry.clear();
                                pending_notice =
                                    Some(Notice::new("Already exists", e.to_string()));
                            }
                        }
                        win.focus_entry = true;
                    }

                    ui.add_space(theme::SPACING_SM);

                    // Bulk delete buttons
                    ui.horizontal(|ui| {
                        if ui
                            .add(theme::button(format!(
                                "{} Delete completed items",
                                egui_phosphor::regular::BROOM
                            )))
                            .clicked()
                        {
                            let removed = win.list.delete_completed();
                            if removed > 0 {
                                win.dirty = true;
                                debug!(removed, "Completed items deleted");
                            }
                        }
                        if ui
                            .add(theme::button_danger(format!(
                                "{} Delete All",
                                egui_phosphor::regular::TRASH
                            )))
                            .clicked()
                        {
                            match win.list.delete_all() {
                                Ok(()) => win.dirty = true,
                                Err(e) => {
                                    pending_notice =
                                        Some(Notice::new("No entries", e.to_string()));
                                }
                            }
                        }
                    });

                    ui.add_space(theme::SPACING_SM);
                    ui.separator();

                    // Item rows
                    let footer_height = 22.0;
                    egui::ScrollArea::vertical()
                        .id_salt(("items", win.id))
                        .auto_shrink([false, false])
                        .max_height((ui.available_height() - footer_height).max(40.0))
                        .show(ui, |ui| {
                            if win.list.is_empty() {
                                ui.add_space(theme::SPACING_XL);
                                ui.vertical_centered(|ui| {
                                    ui.add(
                                        egui::Label::new(
                                            egui::RichText::new("No items yet")
                                                .color(theme::TEXT_DIM),
                                        )
                                        .selectable(false),
                                    );
                                });
                                return;
                            }
                            let mut toggled = None;
                            for (idx, item) in win.list.items().iter().enumerate() {
                                if theme::item_row(ui, item.done, &item.label) {
                                    toggled = Some(idx);
                                }
                            }
                            if let Some(idx) = toggled {
                                win.list.toggle(idx);
                                win.dirty = true;
                            }
                        });

                    // Footer: completion summary
                    ui.separator();
                    let summary = format!(
                        "{} of {} done",
                        win.list.completed_count(),
                        win.list.len()
                    );
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(summary).size(11.0).color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });

            win.open = is_open;

            // A press anywhere inside the window makes it the menu target
            if let Some(inner) = response {
                let rect = inner.response.rect;
                let pressed_inside = ctx.input(|i| {
                    i.pointer.any_pressed()
                        && i.pointer.interact_pos().is_some_and(|p| rect.contains(p))
                });
                if pressed_inside {
                    activated = Some(win.id);
                }
            }
        }

        if let Some(id) = activated {
            self.active_window = Some(id);
        }
        self.prune_closed_windows();

        if let Some(notice) = pending_notice {
            self.notice = Some(notice);
        }
    }
}
