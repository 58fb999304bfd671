use trackvec::Collection;

#[test]
fn test_change_then_restore_one() {
    let mut collection = Collection::from_elements(vec!["a", "b", "c"]);
    collection.change(1, "B");

    assert_eq!(collection.get(1), Some("B"));
    assert_eq!(collection.original_view()[1], "b");
    assert!(collection.changed());

    collection.restore_one(1);
    assert_eq!(collection.get(1), Some("b"));
    assert!(!collection.changed());
}

#[test]
fn test_restore_one_leaves_other_indices_untouched() {
    let mut collection = Collection::from_elements(vec![10, 20, 30, 40]);
    collection.change(1, 21).change(3, 41);

    collection.restore_one(1);
    assert_eq!(collection.get(1), Some(20));
    assert_eq!(collection.get(3), Some(41));
    assert_eq!(collection.get(0), Some(10));
    assert_eq!(collection.get(2), Some(30));
    // One divergence left, so the collection is still changed.
    assert!(collection.changed());
}

#[test]
fn test_restore_all_yields_original_view() {
    let mut collection = Collection::from_elements(vec!["a", "b", "c"]);
    collection.change(0, "A").remove(2).add("x");
    let expected = collection.original_view();

    collection.restore_all();
    assert_eq!(collection.elements(), expected);
    assert_eq!(collection.elements(), vec!["a", "b", "c"]);
    assert!(!collection.changed());
    assert_eq!(collection.original_size(), 3);
}

#[test]
fn test_restore_all_discards_new_elements() {
    let mut collection = Collection::from_elements(vec![1, 2]);
    collection.add(3).add(4);

    collection.restore_all();
    assert_eq!(collection.elements(), vec![1, 2]);
    assert!(collection.new_indices().is_empty());
}

#[test]
fn test_checkpoint_clears_history() {
    let mut collection = Collection::from_elements(vec![1, 2, 3]);
    collection.change(0, 10).remove(1).add(4);
    assert!(collection.changed());

    collection.checkpoint();
    assert!(!collection.changed());
    assert!(collection.new_indices().is_empty());
    assert!(collection.removed_indices().is_empty());
    assert_eq!(collection.original_size(), 3);
    assert_eq!(collection.original_view(), vec![10, 3, 4]);

    // Immediately restoring is a no-op: the history is gone.
    let current = collection.elements();
    collection.restore_all();
    assert_eq!(collection.elements(), current);
}

#[test]
fn test_original_view_after_multiple_removals() {
    let mut collection = Collection::from_elements(vec!["a", "b", "c", "d", "e"]);
    collection.remove(0);
    collection.remove(2); // removes "d" (current numbering)

    assert_eq!(collection.elements(), vec!["b", "c", "e"]);
    assert_eq!(collection.removed_indices(), &[0, 3]);
    assert_eq!(collection.original_view(), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_restore_removed_elements_in_any_order() {
    let mut collection = Collection::from_elements(vec!["a", "b", "c", "d"]);
    collection.remove(3);
    collection.remove(0);
    assert_eq!(collection.elements(), vec!["b", "c"]);

    collection.restore_one(3);
    assert_eq!(collection.elements(), vec!["b", "c", "d"]);

    collection.restore_one(0);
    assert_eq!(collection.elements(), vec!["a", "b", "c", "d"]);
    assert!(!collection.changed());
}

#[test]
fn test_restore_one_shifts_new_elements_after_insertion_point() {
    let mut collection = Collection::from_elements(vec!["a", "b"]);
    collection.remove(0);
    collection.add("x");
    assert_eq!(collection.elements(), vec!["b", "x"]);

    collection.restore_one(0);
    assert_eq!(collection.elements(), vec!["a", "b", "x"]);
    assert_eq!(collection.new_indices(), vec![2]);
    // A new element survives the restore, so the collection stays changed.
    assert!(collection.changed());
}

#[test]
fn test_construct_empty_then_add_and_remove() {
    let mut collection = Collection::new();
    collection.add(1).add(2).remove(0);

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(0), Some(2));
    // The baseline was empty, so nothing is restorable.
    assert!(collection.original_view().is_empty());
    assert!(collection.changed());
}

#[test]
fn test_original_at() {
    let mut collection = Collection::from_elements(vec![5, 6, 7]);
    collection.change(1, 60).remove(2);

    assert_eq!(collection.original_at(0), Some(5));
    assert_eq!(collection.original_at(1), Some(6));
    assert_eq!(collection.original_at(2), Some(7));
    assert_eq!(collection.original_at(3), None);
}

#[test]
fn test_original_view_does_not_mutate_state() {
    let mut collection = Collection::from_elements(vec![1, 2, 3]);
    collection.change(0, 10).remove(1);

    let before = collection.elements();
    let _ = collection.original_view();
    let _ = collection.original_view();
    assert_eq!(collection.elements(), before);
    assert_eq!(collection.removed_indices(), &[1]);
    assert!(collection.changed());
}
