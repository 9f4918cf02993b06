//! List file persistence
//! One item per line, label and completion flag separated by a single tab:
//! `<label>\t<True|False>\n`. No header, no escaping — a label containing a
//! tab corrupts the file, which the entry field cannot produce.

use crate::model::{Item, TodoList};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed line {line}: {reason}")]
    Format { line: usize, reason: &'static str },
}

/// Write the list to `path`, overwriting any existing file.
pub fn save(list: &TodoList, path: &Path) -> Result<(), StorageError> {
    let mut out = String::new();
    for item in list.items() {
        out.push_str(&item.label);
        out.push('\t');
        out.push_str(if item.done { "True" } else { "False" });
        out.push('\n');
    }
    fs::write(path, out)?;
    debug!(path = %path.display(), items = list.len(), "List saved");
    Ok(())
}

/// Read a list back from `path`, preserving file order.
/// Malformed lines (no tab, or a flag other than True/False) fail the whole
/// load with the 1-based line number instead of silently dropping entries.
pub fn load(path: &Path) -> Result<TodoList, StorageError> {
    let text = fs::read_to_string(path)?;
    let mut items = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let Some((label, flag)) = line.split_once('\t') else {
            return Err(StorageError::Format {
                line: idx + 1,
                reason: "missing tab separator",
            });
        };
        let done = match flag {
            "True" => true,
            "False" => false,
            _ => {
                return Err(StorageError::Format {
                    line: idx + 1,
                    reason: "completion flag is not True or False",
                })
            }
        };
        items.push(Item {
            label: label.to_string(),
            done,
        });
    }
    debug!(path = %path.display(), items = items.len(), "List loaded");
    Ok(TodoList::from_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> TodoList {
        let mut list = TodoList::new();
        list.add("Buy milk").unwrap();
        list.add("Call Bob").unwrap();
        list.toggle(1);
        list
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("groceries.txt");

        let list = sample_list();
        save(&list, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, list);
    }

    #[test]
    fn save_writes_tab_separated_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        save(&sample_list(), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Buy milk\tFalse\nCall Bob\tTrue\n");
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old\tTrue\nstale\tFalse\n").unwrap();

        let mut list = TodoList::new();
        list.add("only").unwrap();
        save(&list, &path).unwrap();

        assert_eq!(load(&path).unwrap().len(), 1);
    }

    #[test]
    fn load_empty_file_gives_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn load_rejects_line_without_tab() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "Buy milk\tFalse\nno separator here\n").unwrap();

        match load(&path) {
            Err(StorageError::Format { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected format error, got {:?}", other.map(|l| l.len())),
        }
    }

    #[test]
    fn load_rejects_unknown_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "Buy milk\tmaybe\n").unwrap();

        match load(&path) {
            Err(StorageError::Format { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected format error, got {:?}", other.map(|l| l.len())),
        }
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load(&dir.path().join("nope.txt")),
            Err(StorageError::Io(_))
        ));
    }
}
