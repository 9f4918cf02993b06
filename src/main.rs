#![windows_subsystem = "windows"]
//! Quicklist - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod model;
mod settings;
mod storage;
mod theme;
mod types;

use app::App;
use constants::*;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;
use types::MenuAction;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "quicklist.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,quicklist=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME);

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Quicklist starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(860.0, 640.0)))
        .with_min_inner_size([480.0, 360.0])
        .with_title(APP_NAME);

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Menu bar - actions are collected here and applied below so the
        // menu closure never needs the whole App
        let mut action: Option<MenuAction> = None;
        let has_active = self.active_window.is_some();

        egui::TopBottomPanel::top("menu_bar")
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                egui::menu::bar(ui, |ui| {
                    ui.menu_button("File", |ui| {
                        if ui
                            .button(format!("{}  New", egui_phosphor::regular::FILE_PLUS))
                            .clicked()
                        {
                            action = Some(MenuAction::NewList);
                            ui.close_menu();
                        }
                        if ui
                            .button(format!("{}  Open...", egui_phosphor::regular::FOLDER_OPEN))
                            .clicked()
                        {
                            action = Some(MenuAction::OpenFile);
                            ui.close_menu();
                        }
                        ui.add_enabled_ui(!self.settings.recent_files.is_empty(), |ui| {
                            ui.menu_button(
                                format!("{}  Open Recent", egui_phosphor::regular::CLOCK),
                                |ui| {
                                    for (i, path) in self.settings.recent_files.iter().enumerate()
                                    {
                                        let name = std::path::Path::new(path)
                                            .file_name()
                                            .map(|n| n.to_string_lossy().to_string())
                                            .unwrap_or_else(|| path.clone());
                                        if ui.button(name).on_hover_text(path).clicked() {
                                            action = Some(MenuAction::OpenRecent(i));
                                            ui.close_menu();
                                        }
                                    }
                                },
                            );
                        });
                        ui.separator();
                        if ui
                            .add_enabled(
                                has_active,
                                egui::Button::new(format!(
                                    "{}  Save",
                                    egui_phosphor::regular::FLOPPY_DISK
                                )),
                            )
                            .clicked()
                        {
                            action = Some(MenuAction::Save);
                            ui.close_menu();
                        }
                        if ui
                            .add_enabled(
                                has_active,
                                egui::Button::new(format!(
                                    "{}  Save As...",
                                    egui_phosphor::regular::FLOPPY_DISK_BACK
                                )),
                            )
                            .clicked()
                        {
                            action = Some(MenuAction::SaveAs);
                            ui.close_menu();
                        }
                        if ui
                            .add_enabled(
                                has_active,
                                egui::Button::new(format!(
                                    "{}  Rename",
                                    egui_phosphor::regular::PENCIL_SIMPLE
                                )),
                            )
                            .clicked()
                        {
                            action = Some(MenuAction::Rename);
                            ui.close_menu();
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("v{}", APP_VERSION))
                                    .size(10.0)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                });
            });

        if let Some(action) = action {
            self.handle_menu(action);
        }

        // Backdrop behind the floating list windows
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                if self.windows.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("File  \u{2192}  New to start a list")
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                }
            });

        self.show_list_windows(ctx);

        // Modals last so they overlay everything
        self.show_rename_modal(ctx);
        self.show_notice_modal(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}
