//! JSON document backend: ordering, durability across reopen, concurrent
//! appends and corrupt-file handling.

use std::collections::HashSet;
use std::sync::Arc;

use tempfile::tempdir;
use wishtree_core::{FileWishStore, NewWish, StoreError, WishStore};

fn new_wish(content: &str) -> NewWish {
    NewWish::new(content.to_string(), "tester".to_string())
}

#[tokio::test]
async fn missing_file_lists_empty() {
    let dir = tempdir().unwrap();
    let store = FileWishStore::new(dir.path().join("nope.json"));
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn appends_list_newest_first_with_increasing_ids() {
    let dir = tempdir().unwrap();
    let store = FileWishStore::new(dir.path().join("wishes.json"));

    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(store.append(new_wish(&format!("wish {i}"))).await.unwrap().id);
    }
    assert!(ids.windows(2).all(|w| w[1] > w[0]), "ids not increasing: {ids:?}");

    let listed = store.list_all().await.unwrap();
    assert_eq!(listed.len(), 5);
    assert_eq!(listed[0].content, "wish 4");
    assert_eq!(listed[4].content, "wish 0");
    assert!(listed.windows(2).all(|w| w[0].id > w[1].id));
}

#[tokio::test]
async fn document_is_pretty_printed_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("wishes.json");
    let store = FileWishStore::new(&path);
    store.append(new_wish("a warm winter")).await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.starts_with("[\n"));
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc[0]["content"], "a warm winter");
    assert_eq!(doc[0]["anonymousId"], "tester");
    assert_eq!(doc[0]["status"], "PENDING");
    assert!(!dir.path().join("nested").join("wishes.json.tmp").exists());
}

#[tokio::test]
async fn reopened_store_lists_the_same() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wishes.json");

    let before = {
        let store = FileWishStore::new(&path);
        for c in ["one", "two", "three"] {
            store.append(new_wish(c)).await.unwrap();
        }
        store.list_all().await.unwrap()
    };

    let reopened = FileWishStore::new(&path);
    assert_eq!(reopened.list_all().await.unwrap(), before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_are_all_kept() {
    let dir = tempdir().unwrap();
    let store = Arc::new(FileWishStore::new(dir.path().join("wishes.json")));

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move { store.append(new_wish(&format!("wish {i}"))).await })
        })
        .collect();
    for h in handles {
        h.await.unwrap().unwrap();
    }

    let listed = store.list_all().await.unwrap();
    assert_eq!(listed.len(), 20);
    let ids: HashSet<_> = listed.iter().map(|w| w.id).collect();
    assert_eq!(ids.len(), 20, "duplicate ids");
    let contents: HashSet<_> = listed.iter().map(|w| w.content.as_str()).collect();
    assert_eq!(contents.len(), 20, "lost a wish");
}

#[tokio::test]
async fn corrupt_file_is_an_error_and_left_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wishes.json");
    std::fs::write(&path, "[{\"id\": 1, \"content\": ").unwrap();
    let store = FileWishStore::new(&path);

    assert!(matches!(store.list_all().await, Err(StoreError::Corrupt { .. })));
    assert!(matches!(store.append(new_wish("x")).await, Err(StoreError::Corrupt { .. })));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[{\"id\": 1, \"content\": ");
}
