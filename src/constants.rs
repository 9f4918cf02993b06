//! Application constants and configuration

pub const APP_NAME: &str = "Quicklist";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Title given to list windows created via File -> New
pub const DEFAULT_LIST_TITLE: &str = "ToDo-List";

/// Extension used for list files in open/save dialogs
pub const LIST_FILE_EXT: &str = "txt";

/// How many entries the File -> Open Recent menu keeps
pub const MAX_RECENT_FILES: usize = 8;
