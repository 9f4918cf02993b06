//! Common types and data structures

use crate::model::TodoList;
use std::path::PathBuf;

/// One open to-do list and its window-local UI state
pub struct ListWindow {
    pub id: u64,
    pub title: String,
    pub list: TodoList,
    /// File this list was opened from / last saved to
    pub path: Option<PathBuf>,
    /// Contents of the "Describe new item" entry field
    pub entry: String,
    /// Move keyboard focus to the entry field on the next frame
    pub focus_entry: bool,
    /// Unsaved changes since the last save/open
    pub dirty: bool,
    pub open: bool,
}

impl ListWindow {
    pub fn new(id: u64, title: String, list: TodoList, path: Option<PathBuf>) -> Self {
        Self {
            id,
            title,
            list,
            path,
            entry: String::new(),
            focus_entry: true,
            dirty: false,
            open: true,
        }
    }
}

/// Blocking informational dialog, one at a time
pub struct Notice {
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Rename dialog state for one list window
pub struct RenameDialog {
    pub window_id: u64,
    pub buffer: String,
    /// Move keyboard focus to the title field on the next frame
    pub focus_field: bool,
}

/// Menu commands, collected during rendering and applied afterwards
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewList,
    OpenFile,
    OpenRecent(usize),
    Save,
    SaveAs,
    Rename,
}
