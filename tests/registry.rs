use std::{collections::BTreeMap, fs, path::PathBuf};

use ods_rs::{install, registry::Registry, Error};

fn sample() -> Registry {
    let mut dll_names = BTreeMap::new();
    dll_names.insert(
        "vanilla".to_owned(),
        PathBuf::from("/game/oriDE_Data/Managed/Assembly-CSharp.dll"),
    );
    dll_names.insert("mymod".to_owned(), PathBuf::from("/mods/mymod.dll"));
    Registry {
        root: PathBuf::from("/game"),
        dll_names,
    }
}

#[test]
fn save_then_load_roundtrips() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("dll_switcher.json");

    let registry = sample();
    registry.save(&path).unwrap();

    assert_eq!(Registry::load(&path), registry);
}

#[test]
fn missing_document_falls_back_to_defaults() {
    let tmp = tempfile::tempdir().unwrap();

    let registry = Registry::load(tmp.path().join("absent.json"));

    assert!(registry.dll_names.is_empty());
    assert_eq!(registry.root, install::default_root());
}

#[test]
fn broken_json_falls_back_to_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("dll_switcher.json");
    fs::write(&path, b"definitely not json").unwrap();

    let registry = Registry::load(&path);

    assert!(registry.dll_names.is_empty());
    assert_eq!(registry.root, install::default_root());
}

#[test]
fn document_missing_a_field_falls_back_to_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("dll_switcher.json");
    fs::write(&path, br#"{"root": "/game"}"#).unwrap();

    let registry = Registry::load(&path);

    assert!(registry.dll_names.is_empty());
    assert_eq!(registry.root, install::default_root());
}

#[test]
fn set_path_rejects_the_live_target() {
    let live = PathBuf::from("/game/oriDE_Data/Managed/Assembly-CSharp.dll");
    let mut registry = sample();
    let before = registry.clone();

    let err = registry
        .set_path("mymod", live.clone(), &live)
        .unwrap_err();

    assert!(matches!(err, Error::InvalidPath));
    assert_eq!(registry, before);
}

#[test]
fn set_path_accepts_any_other_file() {
    let live = PathBuf::from("/game/oriDE_Data/Managed/Assembly-CSharp.dll");
    let mut registry = Registry::default();

    registry
        .set_path("mymod", PathBuf::from("/mods/mymod.dll"), &live)
        .unwrap();

    assert_eq!(
        registry.get_path("mymod"),
        Some(PathBuf::from("/mods/mymod.dll").as_path())
    );
}

#[test]
fn add_name_keeps_existing_entries() {
    let live = PathBuf::from("/game/oriDE_Data/Managed/Assembly-CSharp.dll");
    let mut registry = Registry::default();

    registry.add_name("mymod");
    registry
        .set_path("mymod", PathBuf::from("/mods/mymod.dll"), &live)
        .unwrap();
    registry.add_name("mymod");

    assert_eq!(
        registry.get_path("mymod"),
        Some(PathBuf::from("/mods/mymod.dll").as_path())
    );
}

#[test]
fn add_name_ignores_empty_names() {
    let mut registry = Registry::default();

    registry.add_name("");

    assert!(registry.dll_names.is_empty());
}

#[test]
fn get_path_hides_names_without_a_file() {
    let mut registry = Registry::default();
    registry.add_name("mymod");

    assert_eq!(registry.get_path("mymod"), None);
    assert_eq!(registry.get_path("unknown"), None);
}
