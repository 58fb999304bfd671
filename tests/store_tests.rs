use trackvec::Collection;

#[test]
fn test_add_and_get() {
    let mut collection = Collection::new();
    collection.add("alpha").add("beta");

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.get(0), Some("alpha"));
    assert_eq!(collection.get(1), Some("beta"));
    assert_eq!(collection.get(2), None);
    assert!(collection.has(1));
    assert!(!collection.has(2));
}

#[test]
fn test_from_elements_establishes_baseline() {
    let collection = Collection::from_elements(vec![1, 2, 3]);

    assert_eq!(collection.len(), 3);
    assert_eq!(collection.original_size(), 3);
    assert!(!collection.changed());
    assert!(collection.new_indices().is_empty());
    assert!(collection.removed_indices().is_empty());
}

#[test]
fn test_add_after_baseline_is_tracked_as_new() {
    let mut collection = Collection::from_elements(vec![1, 2]);
    collection.add(3);

    assert!(collection.changed());
    assert_eq!(collection.new_indices(), vec![2]);
    assert_eq!(collection.original_size(), 2);
}

#[test]
fn test_change_is_noop_on_absent_index() {
    let mut collection = Collection::from_elements(vec!["a"]);
    collection.change(5, "z");

    assert_eq!(collection.elements(), vec!["a"]);
    assert!(!collection.changed());
}

#[test]
fn test_change_with_applies_caller_transform() {
    let mut collection = Collection::from_elements(vec![10, 20]);
    collection.change_with(1, 5, |index, value| value + index as i32);

    assert_eq!(collection.get(1), Some(6));
    assert_eq!(collection.original_at(1), Some(20));
}

#[test]
fn test_remove_renumbers_contiguously() {
    let mut collection = Collection::from_elements(vec!["a", "b", "c"]);
    collection.remove(1);

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.get(0), Some("a"));
    assert_eq!(collection.get(1), Some("c"));
    assert_eq!(collection.removed_indices(), &[1]);
}

#[test]
fn test_remove_of_new_element_leaves_no_trace() {
    let mut collection = Collection::from_elements(vec!["a"]);
    collection.add("x");
    collection.remove(1);

    assert_eq!(collection.elements(), vec!["a"]);
    assert!(collection.removed_indices().is_empty());
    assert_eq!(collection.original_view(), vec!["a"]);
    // The collection still counts as changed: an add happened after baseline.
    assert!(collection.changed());
}

#[test]
fn test_remove_is_noop_on_absent_index() {
    let mut collection = Collection::from_elements(vec![1]);
    collection.remove(9);

    assert_eq!(collection.len(), 1);
    assert!(!collection.changed());
}

#[test]
fn test_set_changes_existing_and_appends_absent() {
    let mut collection = Collection::from_elements(vec![1, 2]);
    collection.set(0, 10);
    collection.set(99, 3);

    assert_eq!(collection.elements(), vec![10, 2, 3]);
    assert_eq!(collection.new_indices(), vec![2]);
}

#[test]
fn test_first_and_last() {
    let collection = Collection::from_elements(vec![7, 8, 9]);
    assert_eq!(collection.first(), Some(7));
    assert_eq!(collection.last(), Some(9));

    let empty: Collection<i32> = Collection::new();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}

#[test]
fn test_append_elements_after_baseline() {
    let mut collection = Collection::from_elements(vec![1]);
    collection.append_elements(vec![2, 3]);

    assert_eq!(collection.elements(), vec![1, 2, 3]);
    assert_eq!(collection.new_indices(), vec![1, 2]);
    assert_eq!(collection.original_size(), 1);
}

#[test]
fn test_iter_yields_indexed_elements() {
    let collection = Collection::from_elements(vec!["a", "b", "c"]);
    let collected: Vec<(usize, &str)> = collection.iter().collect();
    assert_eq!(collected, vec![(0, "a"), (1, "b"), (2, "c")]);

    // Restartable and usable in for loops through IntoIterator.
    let mut seen = 0;
    for (index, _) in &collection {
        assert_eq!(index, seen);
        seen += 1;
    }
    assert_eq!(seen, 3);
}

#[test]
fn test_mutators_chain() {
    let mut collection = Collection::from_elements(vec![1, 2, 3]);
    collection.add(4).change(0, 0).remove(2).restore_all();

    assert_eq!(collection.elements(), vec![1, 2, 3]);
}
