use std::collections::BTreeMap;

use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);

    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    assert_eq!(store.len(), 1);

    store.remove("k").unwrap();
    assert!(!store.contains("k"));
    assert!(store.is_empty());
}

#[test]
fn remove_of_missing_key_is_ok() {
    let store = MemoryStore::new();
    assert!(store.remove("missing").is_ok());
}

#[test]
fn clones_share_entries() {
    let a = MemoryStore::new();
    let b = a.clone();
    a.set("shared", "yes").unwrap();
    assert_eq!(b.get("shared").unwrap().as_deref(), Some("yes"));
}

#[test]
fn json_helpers_round_trip_a_map() {
    let store = MemoryStore::new();
    let mut map = BTreeMap::new();
    map.insert("title".to_owned(), "Hello".to_owned());

    save_json(&store, "draft", &map).unwrap();
    let loaded: Option<BTreeMap<String, String>> = load_json(&store, "draft").unwrap();
    assert_eq!(loaded, Some(map));
}

#[test]
fn load_json_of_missing_key_is_none() {
    let store = MemoryStore::new();
    let loaded: Option<BTreeMap<String, String>> = load_json(&store, "nothing").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn load_json_reports_malformed_payload() {
    let store = MemoryStore::new();
    store.set("draft", "{not json").unwrap();
    let loaded: Result<Option<BTreeMap<String, String>>, UiError> = load_json(&store, "draft");
    assert!(matches!(loaded, Err(UiError::DraftCodec(_))));
}
