//! Persistence across storage reopen: what a user expects to survive a
//! restart of the desktop client.

use std::sync::Arc;

use megilance_core::storage::{open_or_memory, ClientStorage, RedbStorage};
use megilance_core::theme::{SystemPreference, Theme, ThemeState, ThemeStore, THEME_STORAGE_KEY};
use megilance_core::widgets::{announcement_key, Announcement, Selection};
use tempfile::TempDir;

fn storage_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("client.redb")
}

#[test]
fn theme_choice_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let storage = Arc::new(RedbStorage::open(storage_path(&dir)).unwrap());
        let store = ThemeStore::new(storage);
        assert_eq!(store.hydrate(SystemPreference::default()), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
    }

    let storage = Arc::new(RedbStorage::open(storage_path(&dir)).unwrap());
    assert_eq!(
        storage.get(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("dark")
    );
    let store = ThemeStore::new(storage);
    assert_eq!(store.state(), ThemeState::Unset);
    // Stored choice beats the system hint
    assert_eq!(store.hydrate(SystemPreference(Some(Theme::Light))), Theme::Dark);
}

#[test]
fn system_hint_used_on_first_launch() {
    let dir = TempDir::new().unwrap();
    let store = ThemeStore::new(open_or_memory(storage_path(&dir)));
    let hint = SystemPreference::from_value(Some("dark"));
    assert_eq!(store.hydrate(hint), Theme::Dark);
}

#[test]
fn garbage_theme_value_falls_back() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(RedbStorage::open(storage_path(&dir)).unwrap());
    storage.set(THEME_STORAGE_KEY, "sepia").unwrap();
    let store = ThemeStore::new(storage);
    assert_eq!(store.hydrate(SystemPreference::default()), Theme::Light);
}

#[test]
fn dismissed_announcement_stays_hidden() {
    let dir = TempDir::new().unwrap();

    {
        let storage = RedbStorage::open(storage_path(&dir)).unwrap();
        let mut banner = Announcement::load("launch-2025", &storage);
        assert!(banner.is_visible());
        banner.dismiss(&storage);
        assert!(!banner.is_visible());
    }

    let storage = RedbStorage::open(storage_path(&dir)).unwrap();
    assert_eq!(
        storage.get(&announcement_key("launch-2025")).unwrap().as_deref(),
        Some("1")
    );
    assert!(!Announcement::load("launch-2025", &storage).is_visible());
    // A different id is unaffected
    assert!(Announcement::load("launch-2026", &storage).is_visible());
}

#[test]
fn selection_survives_restart_and_prunes_missing_rows() {
    let dir = TempDir::new().unwrap();
    let rows = vec!["INV-1".to_string(), "INV-2".to_string(), "INV-3".to_string()];

    {
        let storage = RedbStorage::open(storage_path(&dir)).unwrap();
        let mut selection = Selection::new();
        selection.toggle("INV-1".to_string());
        selection.toggle("INV-3".to_string());
        selection.persist(&storage, "invoices.selection");
    }

    let storage = RedbStorage::open(storage_path(&dir)).unwrap();
    let remaining = vec!["INV-1".to_string(), "INV-2".to_string()];
    let selection = Selection::load(&storage, "invoices.selection", &remaining);
    assert_eq!(selection.count(), 1);
    assert!(selection.is_selected(&"INV-1".to_string()));
    assert!(!selection.all_selected(&rows));
}

#[test]
fn unopenable_path_falls_back_to_memory() {
    let dir = TempDir::new().unwrap();
    // A directory where the file should be cannot be opened as a database
    let blocked = dir.path().join("blocked.redb");
    std::fs::create_dir_all(&blocked).unwrap();

    let storage = open_or_memory(&blocked);
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
}
