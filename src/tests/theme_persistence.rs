use crate::theme::{ toggle_view, FileStorage, KeyValueStorage, MemoryStorage, Theme, ThemeStore, THEME_STORAGE_KEY };
use crate::tests::common::setup;

#[test]
fn leaf_survives_a_reload() {
    setup();
    let storage = MemoryStorage::new();

    let mut first_visit = ThemeStore::new(Box::new(storage.clone()));
    assert_eq!(first_visit.resolve(), Theme::Fire);
    first_visit.set(Theme::Leaf);
    drop(first_visit);

    let mut reload = ThemeStore::new(Box::new(storage));
    assert_eq!(reload.current(), None);
    assert_eq!(reload.resolve(), Theme::Leaf);
}

#[test]
fn file_backed_preference_round_trips() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.json");

    let mut store = ThemeStore::new(Box::new(FileStorage::new(&path)));
    assert_eq!(store.toggle(), Theme::Leaf);

    let mut reopened = ThemeStore::new(Box::new(FileStorage::new(&path)));
    assert_eq!(reopened.resolve(), Theme::Leaf);
    assert_eq!(
        FileStorage::new(&path).get(THEME_STORAGE_KEY).unwrap(),
        Some("leaf".to_string())
    );
}

#[test]
fn toggle_view_waits_for_resolution() {
    let mut store = ThemeStore::new(Box::new(MemoryStorage::new()));
    assert!(toggle_view(store.current()).is_none());
    store.resolve();
    let view = toggle_view(store.current()).unwrap();
    assert_eq!(view.current, Theme::Fire);
}

#[test]
fn double_toggle_restores_original() {
    let storage = MemoryStorage::new();
    storage.set(THEME_STORAGE_KEY, "leaf").unwrap();
    let mut store = ThemeStore::new(Box::new(storage.clone()));
    let original = store.resolve();
    store.toggle();
    store.toggle();
    assert_eq!(store.current(), Some(original));
    assert_eq!(storage.get(THEME_STORAGE_KEY).unwrap(), Some("leaf".to_string()));
}
