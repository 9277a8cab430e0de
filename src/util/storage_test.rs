use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let mut store = MemoryStorage::new();
    assert!(store.is_empty());
    store.set("authToken", "t-1");
    assert_eq!(store.get("authToken").as_deref(), Some("t-1"));
    store.remove("authToken");
    assert_eq!(store.get("authToken"), None);
    assert!(!store.contains("authToken"));
}

#[test]
fn json_helpers_round_trip() {
    let mut store = MemoryStorage::new();
    save_json(&mut store, "ids", &vec![1, 2, 3]);
    assert_eq!(store.get("ids").as_deref(), Some("[1,2,3]"));
    assert_eq!(load_json::<Vec<i32>>(&store, "ids"), Some(vec![1, 2, 3]));
}

#[test]
fn malformed_json_loads_as_none() {
    let mut store = MemoryStorage::new();
    store.set("userInfo", "{not json");
    assert_eq!(load_json::<serde_json::Value>(&store, "userInfo"), None);
}

#[test]
fn missing_key_loads_as_none() {
    let store = MemoryStorage::new();
    assert_eq!(load_json::<Vec<i32>>(&store, "userRights"), None);
}
