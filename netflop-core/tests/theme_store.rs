use netflop_core::theme::{THEME_KEY, ThemeStore};
use netflop_model::Theme;
use tempfile::TempDir;

#[test]
fn missing_store_defaults_to_dark() {
    let dir = TempDir::new().unwrap();
    let store = ThemeStore::new(dir.path().join("storage.json"));

    assert_eq!(store.saved().unwrap(), None);
    assert_eq!(store.load(), Theme::Dark);
}

#[test]
fn saved_theme_round_trips_and_keeps_other_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/netflop/storage.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"netflop:volume": 3}"#).unwrap();

    let store = ThemeStore::new(&path);
    store.save(Theme::Light).unwrap();
    assert_eq!(store.load(), Theme::Light);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[THEME_KEY], "light");
    assert_eq!(raw["netflop:volume"], 3);
}

#[test]
fn save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = ThemeStore::new(dir.path().join("a/b/storage.json"));

    store.save(Theme::Dark).unwrap();
    assert_eq!(store.saved().unwrap(), Some(Theme::Dark));
}

#[test]
fn corrupt_store_is_ignored_on_load_and_rewritten_on_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{not json").unwrap();
    let store = ThemeStore::new(&path);

    assert!(store.saved().is_err());
    assert_eq!(store.load(), Theme::Dark);

    store.save(Theme::Light).unwrap();
    assert_eq!(store.saved().unwrap(), Some(Theme::Light));
}

#[test]
fn unknown_saved_value_reads_as_unset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, r#"{"netflop:theme": "sepia"}"#).unwrap();

    let store = ThemeStore::new(&path);
    assert_eq!(store.saved().unwrap(), None);
    assert_eq!(store.load(), Theme::Dark);
}
