//! In-memory list model: ordered to-do items with unique labels

use thiserror::Error;

/// One to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub label: String,
    pub done: bool,
}

/// Why an item could not be added
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddError {
    #[error("You have to insert an item!")]
    EmptyLabel,
    #[error("The item already exists!")]
    Duplicate,
}

/// Why the list could not be cleared
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClearError {
    #[error("There are no entries to delete")]
    AlreadyEmpty,
}

/// Ordered collection of items shown in one list window.
/// Insertion order is display order; labels are unique case-insensitively.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|it| it.done).count()
    }

    /// Append a new unchecked item. The label is trimmed first; duplicates
    /// are rejected case-insensitively against all existing labels.
    pub fn add(&mut self, label: &str) -> Result<(), AddError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(AddError::EmptyLabel);
        }
        let lower = label.to_lowercase();
        if self.items.iter().any(|it| it.label.to_lowercase() == lower) {
            return Err(AddError::Duplicate);
        }
        self.items.push(Item {
            label: label.to_string(),
            done: false,
        });
        Ok(())
    }

    /// Flip the done flag of the item at `index`. Out-of-range indices are
    /// ignored (stale click after a concurrent delete in the same frame).
    pub fn toggle(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.done = !item.done;
        }
    }

    /// Remove all checked items, keeping the rest in their original order.
    /// Returns how many were removed.
    pub fn delete_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|it| !it.done);
        before - self.items.len()
    }

    /// Remove every item. Signals `AlreadyEmpty` if there was nothing to do.
    pub fn delete_all(&mut self) -> Result<(), ClearError> {
        if self.items.is_empty() {
            return Err(ClearError::AlreadyEmpty);
        }
        self.items.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(labels: &[(&str, bool)]) -> TodoList {
        TodoList::from_items(
            labels
                .iter()
                .map(|(label, done)| Item {
                    label: label.to_string(),
                    done: *done,
                })
                .collect(),
        )
    }

    #[test]
    fn add_appends_unchecked() {
        let mut list = TodoList::new();
        list.add("Buy milk").unwrap();
        list.add("Call Bob").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[0].label, "Buy milk");
        assert!(!list.items()[0].done);
        assert_eq!(list.items()[1].label, "Call Bob");
    }

    #[test]
    fn add_rejects_empty_and_whitespace() {
        let mut list = TodoList::new();
        assert_eq!(list.add(""), Err(AddError::EmptyLabel));
        assert_eq!(list.add("   "), Err(AddError::EmptyLabel));
        assert!(list.is_empty());
    }

    #[test]
    fn add_rejects_case_insensitive_duplicate() {
        let mut list = TodoList::new();
        list.add("Buy milk").unwrap();
        assert_eq!(list.add("buy MILK"), Err(AddError::Duplicate));
        assert_eq!(list.add("Buy milk"), Err(AddError::Duplicate));
        // list unchanged
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].label, "Buy milk");
    }

    #[test]
    fn add_trims_before_checking() {
        let mut list = TodoList::new();
        list.add("  Buy milk  ").unwrap();
        assert_eq!(list.items()[0].label, "Buy milk");
        assert_eq!(list.add(" buy milk "), Err(AddError::Duplicate));
    }

    #[test]
    fn toggle_flips_done() {
        let mut list = list_of(&[("a", false)]);
        list.toggle(0);
        assert!(list.items()[0].done);
        list.toggle(0);
        assert!(!list.items()[0].done);
        // out of range is a no-op
        list.toggle(5);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn delete_completed_keeps_relative_order() {
        let mut list = list_of(&[("first", false), ("second", true), ("third", false)]);
        assert_eq!(list.delete_completed(), 1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[0].label, "first");
        assert_eq!(list.items()[1].label, "third");
    }

    #[test]
    fn delete_completed_on_clean_list_removes_nothing() {
        let mut list = list_of(&[("a", false), ("b", false)]);
        assert_eq!(list.delete_completed(), 0);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn delete_all_empties_nonempty_list() {
        let mut list = list_of(&[("a", false), ("b", true)]);
        assert_eq!(list.delete_all(), Ok(()));
        assert!(list.is_empty());
    }

    #[test]
    fn delete_all_on_empty_list_signals() {
        let mut list = TodoList::new();
        assert_eq!(list.delete_all(), Err(ClearError::AlreadyEmpty));
        assert!(list.is_empty());
    }

    #[test]
    fn completed_count() {
        let list = list_of(&[("a", true), ("b", false), ("c", true)]);
        assert_eq!(list.completed_count(), 2);
    }
}
