//! Integration tests for the discount journal.

use discount_journal::{Journal, JournalConfig, Record, RecordStore};

// --- Realistic Workflow Tests ---

#[test]
fn test_add_list_delete_workflow() {
    let mut journal = Journal::new();
    journal.add("Acme", 10, "2025-12-01").unwrap();
    journal.add("acme", 20, "2026-01-01").unwrap();
    journal.add("Zed", 5, "2025-06-15").unwrap();

    // Case-insensitive sort, stable across equal keys: the first-inserted
    // "Acme" stays ahead of "acme", both ahead of "Zed".
    let sorted: Vec<_> = journal
        .list_sorted()
        .iter()
        .map(|r| (r.shop.clone(), r.discount))
        .collect();
    assert_eq!(
        sorted,
        vec![
            ("Acme".to_string(), 10),
            ("acme".to_string(), 20),
            ("Zed".to_string(), 5),
        ]
    );

    assert_eq!(journal.delete_by_shop("ACME"), 2);
    assert_eq!(journal.count(), 1);
    assert_eq!(journal.records()[0].shop, "Zed");
}

#[test]
fn test_push_then_get_deep_equality() {
    let mut store = RecordStore::new();
    let original = Record::new("Corner Shop", 15, "2027-08-31");
    store.push_back(original.clone()).unwrap();

    let stored = store.get(store.len() - 1).unwrap();
    assert_eq!(*stored, original);
}

#[test]
fn test_remove_shifts_following_records() {
    let mut store = RecordStore::new();
    for (i, shop) in ["a", "b", "c", "d"].iter().enumerate() {
        store
            .push_back(Record::new(shop, i as u8, "2025-06-15"))
            .unwrap();
    }

    store.remove_at(1).unwrap();
    // What was at index 2 is now at index 1.
    assert_eq!(store.get(1).unwrap().shop, "c");
    assert_eq!(store.len(), 3);
}

#[test]
fn test_drain_in_reverse_then_reuse() {
    let mut journal = Journal::new();
    for i in 0..10 {
        journal
            .add(&format!("shop-{i}"), i as u8, "2025-06-15")
            .unwrap();
    }

    for shop in (0..10).rev().map(|i| format!("shop-{i}")) {
        assert_eq!(journal.delete_by_shop(&shop), 1);
    }
    assert!(journal.is_empty());

    // Behaves like a fresh journal afterwards.
    journal.add("again", 1, "2025-06-15").unwrap();
    assert_eq!(journal.count(), 1);
    assert_eq!(journal.records()[0].shop, "again");
}

#[test]
fn test_insertion_order_kept_until_sorted() {
    let mut journal = Journal::new();
    journal.add("Zed", 5, "2025-06-15").unwrap();
    journal.add("Acme", 10, "2025-12-01").unwrap();

    let shops: Vec<_> = journal.records().iter().map(|r| r.shop.as_str()).collect();
    assert_eq!(shops, vec!["Zed", "Acme"]);
}

#[test]
fn test_with_config_behaves_like_new() {
    let mut journal = Journal::with_config(JournalConfig {
        initial_capacity: 64,
    })
    .unwrap();
    journal.add("Acme", 10, "2025-12-01").unwrap();
    assert_eq!(journal.count(), 1);
}

// --- Scale ---

#[test]
fn test_many_records_sorted() {
    let mut journal = Journal::new();
    for i in (0..500).rev() {
        journal
            .add(&format!("shop-{i:03}"), (i % 100) as u8, "2026-01-01")
            .unwrap();
    }

    let sorted = journal.list_sorted();
    assert_eq!(sorted.len(), 500);
    for pair in sorted.windows(2) {
        assert!(pair[0].shop <= pair[1].shop);
    }
}

#[test]
fn test_bulk_delete_across_interleaved_shops() {
    let mut journal = Journal::new();
    for i in 0..200 {
        let shop = if i % 2 == 0 { "Target" } else { "Keeper" };
        journal.add(shop, 10, "2026-01-01").unwrap();
    }

    assert_eq!(journal.delete_by_shop("target"), 100);
    assert_eq!(journal.count(), 100);
    assert!(journal.records().iter().all(|r| r.shop == "Keeper"));
}
