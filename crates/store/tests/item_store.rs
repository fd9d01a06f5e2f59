//! Integration tests for the item store.
//!
//! Exercises the public store API end to end:
//! - Create / update / delete lifecycle
//! - List bookkeeping across mixed operations
//! - Concurrent writers and readers

use std::sync::Arc;
use std::thread;

use assert_matches::assert_matches;
use shelf_core::error::CoreError;
use shelf_store::models::item::{CreateItem, UpdateItem};
use shelf_store::ItemStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_item(id: impl Into<String>) -> CreateItem {
    CreateItem {
        id: id.into(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn create_update_delete_lifecycle() {
    let store = ItemStore::new();

    let created = store
        .create(CreateItem {
            id: "1".into(),
            name: Some("item_1".into()),
            price: Some(2500),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(created.id, "1");
    assert_eq!(created.price, Some(2500));
    assert_eq!(created.created_at, created.updated_at);

    let updated = store
        .update(
            "1",
            UpdateItem {
                price: Some(3000),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.price, Some(3000));
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    store.delete("1").unwrap();
    assert_matches!(store.get("1"), Err(CoreError::NotFound { .. }));
    assert!(store.list().is_empty());
}

#[test]
fn list_count_tracks_creates_minus_deletes() {
    let store = ItemStore::new();
    let mut creates = 0;
    let mut deletes = 0;

    for i in 0..20 {
        if store.create(new_item(i.to_string())).is_ok() {
            creates += 1;
        }
    }
    // Duplicates do not count.
    for i in 0..5 {
        assert!(store.create(new_item(i.to_string())).is_err());
    }
    for i in (0..20).step_by(3) {
        if store.delete(&i.to_string()).is_ok() {
            deletes += 1;
        }
    }
    // Second delete of the same ids fails.
    for i in (0..20).step_by(3) {
        assert!(store.delete(&i.to_string()).is_err());
    }

    let items = store.list();
    assert_eq!(items.len(), creates - deletes);
    assert!(items.iter().all(|item| item.id.parse::<usize>().unwrap() % 3 != 0));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn concurrent_creates_with_distinct_ids_are_all_kept() {
    let store = Arc::new(ItemStore::new());
    let threads = 8;
    let per_thread = 250;

    thread::scope(|scope| {
        for t in 0..threads {
            let store = Arc::clone(&store);
            scope.spawn(move || {
                for n in 0..per_thread {
                    store.create(new_item(format!("{t}-{n}"))).unwrap();
                }
            });
        }
    });

    assert_eq!(store.len(), threads * per_thread);
    for t in 0..threads {
        for n in 0..per_thread {
            assert!(store.get(&format!("{t}-{n}")).is_ok());
        }
    }
}

#[test]
fn concurrent_creates_of_same_id_have_one_winner() {
    let store = Arc::new(ItemStore::new());

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                scope.spawn(move || store.create(new_item("shared")))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, CoreError::DuplicateId { .. })));
    assert_eq!(store.len(), 1);
}

#[test]
fn readers_never_observe_partial_updates() {
    let store = Arc::new(ItemStore::new());
    store
        .create(CreateItem {
            id: "1".into(),
            price: Some(0),
            stock: Some(0),
            ..Default::default()
        })
        .unwrap();

    thread::scope(|scope| {
        let writer = Arc::clone(&store);
        scope.spawn(move || {
            for n in 1..=500 {
                writer
                    .update(
                        "1",
                        UpdateItem {
                            price: Some(n),
                            stock: Some(n),
                            ..Default::default()
                        },
                    )
                    .unwrap();
            }
        });

        for _ in 0..4 {
            let reader = Arc::clone(&store);
            scope.spawn(move || {
                for _ in 0..500 {
                    let item = reader.get("1").unwrap();
                    assert_eq!(item.price, item.stock);
                    assert!(item.updated_at >= item.created_at);
                }
            });
        }
    });

    assert_eq!(store.get("1").unwrap().price, Some(500));
}
