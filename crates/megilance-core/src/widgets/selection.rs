//! Row selection for tables and lists, optionally persisted.

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::ClientStorage;

/// Set of selected ids.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Selection<T: Ord> {
    selected: BTreeSet<T>,
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<T: Ord + Clone + Serialize + DeserializeOwned> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from `key`, keeping only ids that still exist. Missing or
    /// unreadable data starts empty.
    pub fn load(storage: &dyn ClientStorage, key: &str, available: &[T]) -> Self {
        let mut selection = Self::new();
        let Some(raw) = storage.get_or_absent(key) else {
            return selection;
        };
        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(ids) => {
                selection.selected = ids.into_iter().collect();
                selection.prune(available);
            }
            Err(e) => tracing::warn!(key, "ignoring stored selection: {}", e),
        }
        selection
    }

    /// Write the selection under `key`; failures are logged and skipped.
    pub fn persist(&self, storage: &dyn ClientStorage, key: &str) {
        let ids: Vec<&T> = self.selected.iter().collect();
        match serde_json::to_string(&ids) {
            Ok(raw) => storage.set_or_skip(key, &raw),
            Err(e) => tracing::warn!(key, "selection not persisted: {}", e),
        }
    }

    pub fn is_selected(&self, id: &T) -> bool {
        self.selected.contains(id)
    }

    pub fn toggle(&mut self, id: T) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn select_many(&mut self, ids: impl IntoIterator<Item = T>) {
        self.selected.extend(ids);
    }

    pub fn deselect_many<'a>(&mut self, ids: impl IntoIterator<Item = &'a T>)
    where
        T: 'a,
    {
        for id in ids {
            self.selected.remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// True when something is selected and every available id is.
    pub fn all_selected(&self, available: &[T]) -> bool {
        !self.selected.is_empty() && available.iter().all(|id| self.selected.contains(id))
    }

    /// Drop ids no longer present (e.g. after filtering).
    pub fn prune(&mut self, available: &[T]) {
        self.selected.retain(|id| available.contains(id));
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.selected.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn toggle_and_all_selected() {
        let all = ids(&["a", "b"]);
        let mut sel = Selection::new();
        assert!(!sel.all_selected(&all));
        sel.toggle("a".to_string());
        sel.toggle("b".to_string());
        assert!(sel.all_selected(&all));
        sel.toggle("a".to_string());
        assert!(!sel.is_selected(&"a".to_string()));
        assert_eq!(sel.count(), 1);
    }

    #[test]
    fn select_and_deselect_many() {
        let mut sel = Selection::new();
        sel.select_many(ids(&["a", "b", "c"]));
        sel.deselect_many(&ids(&["a", "c"]));
        assert_eq!(sel.iter().cloned().collect::<Vec<_>>(), ids(&["b"]));
        sel.clear();
        assert_eq!(sel.count(), 0);
    }

    #[test]
    fn prune_drops_missing() {
        let mut sel = Selection::new();
        sel.select_many(ids(&["a", "b"]));
        sel.prune(&ids(&["b"]));
        assert_eq!(sel.count(), 1);
    }

    #[test]
    fn persist_and_load_prunes() {
        let storage = MemoryStorage::new();
        let mut sel = Selection::new();
        sel.select_many(ids(&["INV-1", "INV-2"]));
        sel.persist(&storage, "invoices_selection");

        let restored: Selection<String> =
            Selection::load(&storage, "invoices_selection", &ids(&["INV-2", "INV-3"]));
        assert_eq!(restored.iter().cloned().collect::<Vec<_>>(), ids(&["INV-2"]));
    }

    #[test]
    fn load_garbage_is_empty() {
        let storage = MemoryStorage::new();
        storage.set("k", "not json").unwrap();
        let sel: Selection<String> = Selection::load(&storage, "k", &[]);
        assert_eq!(sel.count(), 0);
    }
}
