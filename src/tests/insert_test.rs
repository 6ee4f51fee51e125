use super::*;

#[test]
fn empty() {
    let heap: HeapTree<i32> = HeapTree::new();
    assert_eq!(heap.size(), 0);
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);
    heap.check();
}

#[test]
fn one() {
    let mut heap = HeapTree::new();
    heap.insert(7);
    assert_eq!(heap.size(), 1);
    assert_eq!(heap.peek(), Some(&7));
    assert_eq!(heap.cursor(), 0);
    heap.check();
}

#[test]
fn cursor_moves_after_right_child() {
    let mut heap = HeapTree::new();
    heap.insert(1);
    heap.insert(2);
    assert_eq!(heap.cursor(), 0);
    heap.insert(3);
    assert_eq!(heap.cursor(), 1);
    heap.insert(4);
    assert_eq!(heap.cursor(), 1);
    heap.insert(5);
    assert_eq!(heap.cursor(), 2);
    heap.check();
}

#[test]
fn ascending_input_max_first() {
    let mut heap = HeapTree::new();
    for i in 1..=7 {
        heap.insert(i);
        heap.check();
    }
    assert_eq!(heap.to_ordered_listing(), vec![7, 4, 6, 1, 3, 2, 5]);
}

#[test]
fn equal_elements_keep_their_slots() {
    #[derive(Clone, Debug)]
    struct Keyed(u32, &'static str);
    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Keyed {}
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let mut heap = HeapTree::new();
    heap.insert(Keyed(5, "first"));
    heap.insert(Keyed(5, "second"));
    heap.insert(Keyed(5, "third"));
    let tags: Vec<_> = heap.iter().map(|k| k.1).collect();
    assert_eq!(tags, vec!["first", "second", "third"]);
}

#[test]
fn listing_is_repeatable() {
    let mut heap = HeapTree::new();
    heap.extend([9, 3, 11, 3, 0]);
    let first = heap.to_ordered_listing();
    let second = heap.to_ordered_listing();
    assert_eq!(first, second);
    assert_eq!(heap.size(), 5);
}

#[test]
fn iter_matches_listing() {
    let heap = HeapTree::from(vec![2, 8, 5, 1]);
    let iterated: Vec<i32> = heap.iter().copied().collect();
    assert_eq!(iterated, heap.to_ordered_listing());
    assert_eq!(heap.iter().len(), 4);
    let mut count = 0;
    for _ in &heap {
        count += 1;
    }
    assert_eq!(count, 4);
}

#[test]
fn display_prints_one_per_line() {
    let heap = HeapTree::from([1, 2, 3]);
    assert_eq!(heap.to_string(), "3\n1\n2\n");
    let empty: HeapTree<i32> = HeapTree::default();
    assert_eq!(empty.to_string(), "");
}

#[test]
fn clone_is_independent() {
    let mut heap = HeapTree::from([4, 6]);
    let copy = heap.clone();
    heap.insert(10);
    assert_eq!(copy.to_ordered_listing(), vec![6, 4]);
    assert_eq!(heap.peek(), Some(&10));
    copy.check();
}

#[test]
fn extend_by_reference() {
    let mut heap: HeapTree<u8> = HeapTree::new();
    let values = [3u8, 1, 4];
    heap.extend(values.iter());
    assert_eq!(heap.to_ordered_listing(), vec![4, 1, 3]);
}

#[test]
fn both_children_occupied_is_reported() {
    let mut heap = HeapTree::new();
    heap.extend([10, 9, 8]);
    assert_eq!(heap.cursor(), 1);
    heap.store[3] = Some(1);
    heap.store[4] = Some(2);
    match heap.try_insert(5) {
        Err(HeapError::InvariantViolation { cursor, pos }) => {
            assert_eq!(cursor, 1);
            assert_eq!(pos, 4);
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(heap.size(), 3);
    assert_eq!(heap.cursor(), 1);
}

#[test]
fn cursor_past_store_is_reported() {
    let mut heap = HeapTree::with_capacity(4);
    heap.insert(1);
    heap.cursor = 50;
    assert!(matches!(heap.try_insert(2), Err(HeapError::InvariantViolation { cursor: 50, pos: 101 })));
    assert_eq!(heap.size(), 1);
}

#[test]
#[should_panic(expected = "heap insertion failed")]
fn insert_panics_on_corruption() {
    let mut heap = HeapTree::new();
    heap.extend([10, 9, 8]);
    heap.store[3] = Some(1);
    heap.store[4] = Some(2);
    heap.insert(5);
}

#[test]
fn sift_up_rejects_unpopulated_index() {
    let mut heap = HeapTree::new();
    heap.insert(1);
    assert!(matches!(heap.sift_up(1), Err(BubbleErr::OutOfBounds)));
    assert!(matches!(heap.sift_up(0), Ok(BubbleOk::NotChange)));
}

#[test]
fn sift_up_reports_final_slot() {
    let mut heap = HeapTree::new();
    heap.extend([5, 4, 3]);
    heap.store[3] = Some(9);
    heap.count = 4;
    assert!(matches!(heap.sift_up(3), Ok(BubbleOk::EndsAt(0))));
    assert_eq!(heap.to_ordered_listing(), vec![9, 5, 3, 4]);
}
