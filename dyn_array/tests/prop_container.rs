//! Property-based tests for DynamicArray.

use proptest::prelude::*;

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use dyn_array::{DynamicArray, ElementOps, NaturalOps};

/// Element behavior that logs every destroyed element.
#[derive(Default)]
struct Counting {
    destroyed: Rc<RefCell<Vec<u32>>>,
}

impl ElementOps<u32> for Counting {
    fn destroy(&self, element: u32) {
        self.destroyed.borrow_mut().push(element);
    }

    fn stringify(&self, element: &u32) -> String {
        element.to_string()
    }

    fn compare(&self, a: &u32, b: &u32) -> Ordering {
        a.cmp(b)
    }
}

fn counting(capacity: usize) -> (DynamicArray<u32, Counting>, Rc<RefCell<Vec<u32>>>) {
    let ops = Counting::default();
    let log = Rc::clone(&ops.destroyed);
    (DynamicArray::with_capacity(capacity, ops).unwrap(), log)
}

//
// -----------------------------------------------------------------------------
// Push / Pop
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_push_preserves_order(values: Vec<u32>, capacity in 0usize..16) {
        let mut array = DynamicArray::with_capacity(capacity, NaturalOps).unwrap();

        for v in &values {
            array.push(*v).unwrap();
        }

        prop_assert_eq!(array.len(), values.len());
        prop_assert!(array.len() <= array.capacity());

        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(array.get(i), Some(v));
        }
        prop_assert_eq!(array.get(values.len()), None);
    }
}

proptest! {
    #[test]
    fn prop_pop_is_lifo(values: Vec<u32>) {
        let mut array = DynamicArray::new(NaturalOps).unwrap();
        for v in &values {
            array.push(*v).unwrap();
        }

        for v in values.iter().rev() {
            prop_assert_eq!(array.pop(), Some(*v));
        }
        prop_assert_eq!(array.pop(), None);
        prop_assert_eq!(array.len(), 0);
    }
}

//
// -----------------------------------------------------------------------------
// Insert / Remove
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_insert_shifts_right(values: Vec<u32>, index in 0usize..1000, new_val: u32) {
        let mut array = DynamicArray::with_capacity(values.len(), NaturalOps).unwrap();
        for v in &values {
            array.push(*v).unwrap();
        }

        let i = index % (values.len() + 1);
        array.insert(i, new_val).unwrap();

        prop_assert_eq!(array.get(i), Some(&new_val));
        prop_assert_eq!(&array.as_slice()[..i], &values[..i]);
        prop_assert_eq!(&array.as_slice()[i + 1..], &values[i..]);
    }
}

proptest! {
    #[test]
    fn prop_remove_compacts(ref values in prop::collection::vec(any::<u32>(), 1..200), index in 0usize..1000) {
        let (mut array, log) = counting(4);
        for v in values {
            array.push(*v).unwrap();
        }

        let i = index % values.len();
        prop_assert_eq!(array.remove(i), Some(values[i]));
        prop_assert_eq!(array.len(), values.len() - 1);

        if i < array.len() {
            prop_assert_eq!(array.get(i), Some(&values[i + 1]));
        }
        prop_assert!(log.borrow().is_empty());
    }
}

proptest! {
    #[test]
    fn prop_delete_at_destroys_once(ref values in prop::collection::vec(any::<u32>(), 1..100), index in 0usize..1000) {
        let (mut array, log) = counting(0);
        for v in values {
            array.push(*v).unwrap();
        }

        let i = index % values.len();
        array.delete_at(i).unwrap();

        let destroyed = log.borrow();
        prop_assert_eq!(destroyed.as_slice(), &[values[i]]);
        prop_assert_eq!(array.len(), values.len() - 1);
    }
}

//
// -----------------------------------------------------------------------------
// Sorted insertion
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_insert_sorted_keeps_ascending(values: Vec<u32>) {
        let mut array = DynamicArray::with_capacity(1, NaturalOps).unwrap();

        for v in &values {
            array.insert_sorted(*v).unwrap();
            prop_assert!(array.as_slice().windows(2).all(|w| w[0] <= w[1]));
        }

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(array.as_slice(), expected.as_slice());
    }
}

//
// -----------------------------------------------------------------------------
// Capacity management
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_shrink_destroys_truncated(ref values in prop::collection::vec(any::<u32>(), 0..100), new_capacity in 0usize..120) {
        let (mut array, log) = counting(values.len());
        for v in values {
            array.push(*v).unwrap();
        }

        array.resize(new_capacity).unwrap();

        let kept = values.len().min(new_capacity);
        prop_assert_eq!(array.capacity(), new_capacity);
        prop_assert_eq!(array.len(), kept);
        prop_assert_eq!(array.as_slice(), &values[..kept]);
        let destroyed = log.borrow();
        prop_assert_eq!(destroyed.as_slice(), &values[kept..]);
    }
}

proptest! {
    #[test]
    fn prop_grow_always_progresses(capacity in 0usize..10_000) {
        let mut array = DynamicArray::<u32>::with_capacity(capacity, NaturalOps).unwrap();
        array.grow().unwrap();

        prop_assert!(array.capacity() > capacity);
        prop_assert_eq!(array.capacity(), (capacity * 3 / 2).max(capacity + 1));
    }
}

proptest! {
    #[test]
    fn prop_failed_resize_changes_nothing(ref values in prop::collection::vec(any::<u32>(), 0..50)) {
        let (mut array, log) = counting(values.len());
        for v in values {
            array.push(*v).unwrap();
        }

        prop_assert!(array.resize(usize::MAX).is_err());
        prop_assert_eq!(array.len(), values.len());
        prop_assert_eq!(array.capacity(), values.len());
        prop_assert_eq!(array.as_slice(), values.as_slice());
        prop_assert!(log.borrow().is_empty());
    }
}

//
// -----------------------------------------------------------------------------
// Ownership: everything left behind is destroyed exactly once
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_drop_destroys_remaining(ref values in prop::collection::vec(any::<u32>(), 0..100), pops in 0usize..100) {
        let (mut array, log) = counting(2);
        for v in values {
            array.push(*v).unwrap();
        }

        let mut taken = Vec::new();
        for _ in 0..pops {
            match array.pop() {
                Some(v) => taken.push(v),
                None => break,
            }
        }
        drop(array);

        let mut seen = log.borrow().clone();
        seen.extend(taken.iter().rev());
        prop_assert_eq!(seen.as_slice(), values.as_slice());
    }
}

//
// -----------------------------------------------------------------------------
// Find
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_find_by_identity_round_trips(ref values in prop::collection::vec(any::<u32>(), 1..100), index in 0usize..1000) {
        let (mut array, _log) = counting(values.len());
        for v in values {
            array.push(*v).unwrap();
        }

        let i = index % values.len();
        let target = array.get(i).unwrap();
        let found = array.find(|candidate: &u32, key: &u32| std::ptr::eq(candidate, key), target).unwrap();

        prop_assert!(std::ptr::eq(found, array.get(i).unwrap()));
        prop_assert_eq!(array.len(), values.len());
    }
}

proptest! {
    #[test]
    fn prop_find_returns_first_match(values in prop::collection::vec(0u32..8, 0..64), key in 0u32..8) {
        let mut array = DynamicArray::new(NaturalOps).unwrap();
        for v in &values {
            array.push(*v).unwrap();
        }

        let expected = values.iter().position(|v| *v == key);
        prop_assert_eq!(array.position(|a: &u32, b: &u32| a == b, &key), expected);

        let removed = array.find_and_remove(|a: &u32, b: &u32| a == b, &key);
        prop_assert_eq!(removed, expected.map(|i| values[i]));
        prop_assert_eq!(array.len(), values.len() - usize::from(expected.is_some()));
    }
}
