use bookstore_core::{BookStore, Literature};

#[test]
fn average_title_length_divides_total_chars_by_item_count() {
    let mut store = BookStore::new("Averages").unwrap();
    store.add_item(Literature::novel("Abcd", 1990).unwrap());
    store.add_item(Literature::magazine("Ab", 1991).unwrap());

    assert_eq!(store.statistics().average_title_length(), 3.0);
}

#[test]
fn average_title_length_is_zero_for_an_empty_store() {
    let mut store = BookStore::new("Empty").unwrap();
    assert_eq!(store.statistics().average_title_length(), 0.0);
}

#[test]
fn average_title_length_counts_chars_not_bytes() {
    let mut store = BookStore::new("Unicode").unwrap();
    store.add_item(Literature::novel("Café", 1942).unwrap());

    assert_eq!(store.statistics().average_title_length(), 4.0);
}

#[test]
fn sort_by_title_uses_natural_case_sensitive_order() {
    let mut store = BookStore::new("Sorted").unwrap();
    store.add_item(Literature::novel("apple", 1990).unwrap());
    store.add_item(Literature::novel("Zebra", 1991).unwrap());

    store.statistics().sort_by_title();

    let titles: Vec<&str> = store.items().iter().map(|item| item.title()).collect();
    // Natural byte order puts uppercase before lowercase; this is the
    // case-sensitive sort, distinct from the alphabetical print.
    assert_eq!(titles, vec!["Zebra", "apple"]);
}
