//! App module - contains the main application state and logic

mod modals;
mod views;

use crate::constants::*;
use crate::model::TodoList;
use crate::settings::Settings;
use crate::storage;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use tracing::{error, info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    /// Open list windows, in creation order
    pub(crate) windows: Vec<ListWindow>,
    pub(crate) next_window_id: u64,
    /// Window the File menu commands apply to (last interacted with)
    pub(crate) active_window: Option<u64>,
    // Dialogs
    pub(crate) notice: Option<Notice>,
    pub(crate) rename: Option<RenameDialog>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let mut app = Self {
            windows: Vec::new(),
            next_window_id: 0,
            active_window: None,
            notice: None,
            rename: None,
            settings,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        };
        // Start with one empty list, like a fresh notepad
        app.new_list();
        app
    }

    pub fn save_settings(&self) {
        let mut settings = self.settings.clone();
        settings.window_x = self.window_pos.map(|p| p.x);
        settings.window_y = self.window_pos.map(|p| p.y);
        settings.window_w = self.window_size.map(|s| s.x);
        settings.window_h = self.window_size.map(|s| s.y);
        settings.save(&self.data_dir);
    }

    pub(crate) fn active_window_idx(&self) -> Option<usize> {
        let id = self.active_window?;
        self.windows.iter().position(|w| w.id == id)
    }

    /// Open a fresh, untitled list window and make it active.
    pub fn new_list(&mut self) {
        let id = self.next_window_id;
        self.next_window_id += 1;
        self.windows.push(ListWindow::new(
            id,
            DEFAULT_LIST_TITLE.to_string(),
            TodoList::new(),
            None,
        ));
        self.active_window = Some(id);
    }

    /// Load `path` into a new list window titled by the file stem.
    /// If that file is already open, its window is made active instead.
    pub fn open_list(&mut self, path: PathBuf) {
        if let Some(win) = self.windows.iter().find(|w| w.path.as_deref() == Some(path.as_path())) {
            self.active_window = Some(win.id);
            return;
        }
        match storage::load(&path) {
            Ok(list) => {
                let title = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| DEFAULT_LIST_TITLE.to_string());
                info!(path = %path.display(), items = list.len(), "List opened");
                let id = self.next_window_id;
                self.next_window_id += 1;
                self.windows
                    .push(ListWindow::new(id, title, list, Some(path.clone())));
                self.active_window = Some(id);
                self.settings.remember_file(&path);
                self.save_settings();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to open list");
                self.notice = Some(Notice::new(
                    "Could not open list",
                    format!("{}:\n{}", path.display(), e),
                ));
            }
        }
    }

    pub(crate) fn handle_menu(&mut self, action: MenuAction) {
        match action {
            MenuAction::NewList => self.new_list(),
            MenuAction::OpenFile => {
                let picked = rfd::FileDialog::new()
                    .add_filter("text files", &[LIST_FILE_EXT])
                    .set_directory(self.settings.dialog_dir_or_default())
                    .set_title("Select a list file")
                    .pick_file();
                if let Some(path) = picked {
                    self.open_list(path);
                }
            }
            MenuAction::OpenRecent(i) => {
                if let Some(path) = self.settings.recent_files.get(i).cloned() {
                    self.open_list(PathBuf::from(path));
                }
            }
            MenuAction::Save => self.save_active(false),
            MenuAction::SaveAs => self.save_active(true),
            MenuAction::Rename => {
                if let Some(idx) = self.active_window_idx() {
                    let win = &self.windows[idx];
                    self.rename = Some(RenameDialog {
                        window_id: win.id,
                        buffer: win.title.clone(),
                        focus_field: true,
                    });
                }
            }
        }
    }

    /// Save the active list. Prompts for a destination when the list has no
    /// backing file yet, or always when `force_dialog` is set (Save As).
    fn save_active(&mut self, force_dialog: bool) {
        let Some(idx) = self.active_window_idx() else {
            return;
        };
        let target = if force_dialog || self.windows[idx].path.is_none() {
            rfd::FileDialog::new()
                .add_filter("text files", &[LIST_FILE_EXT])
                .set_directory(self.settings.dialog_dir_or_default())
                .set_file_name(format!("{}.{}", self.windows[idx].title, LIST_FILE_EXT))
                .save_file()
        } else {
            self.windows[idx].path.clone()
        };
        let Some(path) = target else {
            return; // dialog cancelled
        };

        let win = &mut self.windows[idx];
        match storage::save(&win.list, &path) {
            Ok(()) => {
                info!(path = %path.display(), items = win.list.len(), "List saved");
                win.path = Some(path.clone());
                win.dirty = false;
                self.settings.remember_file(&path);
                self.save_settings();
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to save list");
                self.notice = Some(Notice::new(
                    "Could not save list",
                    format!("{}:\n{}", path.display(), e),
                ));
            }
        }
    }

    /// Drop closed windows and keep the active-window id valid.
    pub(crate) fn prune_closed_windows(&mut self) {
        self.windows.retain(|w| w.open);
        if let Some(id) = self.active_window {
            if !self.windows.iter().any(|w| w.id == id) {
                self.active_window = self.windows.last().map(|w| w.id);
            }
        }
    }
}
