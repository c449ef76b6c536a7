//! Null-safe entry points over an optional array.
//!
//! Every function here accepts `Option<&DynamicArray>` (or `&mut`) and signed
//! sizes and indices, and turns an absent array or a negative argument into a
//! plain failure value: `false`, `-1`, `None`, an empty string or `[]`. This
//! is the calling convention for code that passes "no array" around as a
//! normal state; the methods on [`DynamicArray`] are the primary API.
//!
//! ```
//! use dyn_array::{handle, NaturalOps};
//!
//! let mut array = handle::create_with_capacity(2, NaturalOps);
//! assert!(handle::push(array.as_mut(), 'x').is_ok());
//! assert_eq!(handle::length(array.as_ref()), 1);
//!
//! let missing: Option<&dyn_array::DynamicArray<char>> = None;
//! assert_eq!(handle::length(missing), -1);
//! assert_eq!(handle::to_string(missing), "[]");
//! ```

use crate::{DynamicArray, ElementOps, String, ToString};

fn index_of(index: isize) -> Option<usize> {
    usize::try_from(index).ok()
}

fn signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

/// Array with the default capacity, or `None` if the slots cannot be allocated.
pub fn create<T, O: ElementOps<T>>(ops: O) -> Option<DynamicArray<T, O>> {
    DynamicArray::new(ops).ok()
}

/// `None` if `capacity` is negative or the slots cannot be allocated.
pub fn create_with_capacity<T, O: ElementOps<T>>(
    capacity: isize,
    ops: O,
) -> Option<DynamicArray<T, O>> {
    DynamicArray::with_capacity(index_of(capacity)?, ops).ok()
}

/// Destroys every element of a present array; does nothing otherwise.
pub fn clear<T, O: ElementOps<T>>(array: Option<&mut DynamicArray<T, O>>) {
    if let Some(array) = array {
        array.clear();
    }
}

/// Destroys every element and releases the array, if there is one.
pub fn destroy<T, O: ElementOps<T>>(array: Option<DynamicArray<T, O>>) {
    if let Some(array) = array {
        array.destroy();
    }
}

/// `false` when the array is absent or cannot grow.
pub fn grow<T, O: ElementOps<T>>(array: Option<&mut DynamicArray<T, O>>) -> bool {
    array.is_some_and(|array| array.grow().is_ok())
}

/// `false` when the array is absent, `new_capacity` is negative or the
/// buffer cannot be allocated. Truncated elements are destroyed.
pub fn resize<T, O: ElementOps<T>>(
    array: Option<&mut DynamicArray<T, O>>,
    new_capacity: isize,
) -> bool {
    match (array, index_of(new_capacity)) {
        (Some(array), Some(new_capacity)) => array.resize(new_capacity).is_ok(),
        _ => false,
    }
}

/// Appends `element`; on failure the element comes back in `Err`.
pub fn push<T, O: ElementOps<T>>(array: Option<&mut DynamicArray<T, O>>, element: T) -> Result<(), T> {
    match array {
        Some(array) => array.push(element).map_err(|err| err.into_inner()),
        None => Err(element),
    }
}

/// Inserts at `index`; a missing array, negative or out-of-range index, or
/// failed growth hands the element back in `Err`.
pub fn insert<T, O: ElementOps<T>>(
    array: Option<&mut DynamicArray<T, O>>,
    index: isize,
    element: T,
) -> Result<(), T> {
    match (array, index_of(index)) {
        (Some(array), Some(index)) => array.insert(index, element).map_err(|err| err.into_inner()),
        _ => Err(element),
    }
}

/// Sorted insertion; on failure the element comes back in `Err`.
pub fn insert_sorted<T, O: ElementOps<T>>(
    array: Option<&mut DynamicArray<T, O>>,
    element: T,
) -> Result<(), T> {
    match array {
        Some(array) => array.insert_sorted(element).map_err(|err| err.into_inner()),
        None => Err(element),
    }
}

/// Borrowed element at `index`; `None` for a missing array or bad index.
pub fn get<T, O: ElementOps<T>>(array: Option<&DynamicArray<T, O>>, index: isize) -> Option<&T> {
    array?.get(index_of(index)?)
}

/// Takes the last element.
pub fn pop<T, O: ElementOps<T>>(array: Option<&mut DynamicArray<T, O>>) -> Option<T> {
    array?.pop()
}

/// Takes the element at `index`, closing the gap.
pub fn remove<T, O: ElementOps<T>>(array: Option<&mut DynamicArray<T, O>>, index: isize) -> Option<T> {
    array?.remove(index_of(index)?)
}

/// Removes and destroys the element at `index`; `false` if there is none.
pub fn delete_at<T, O: ElementOps<T>>(array: Option<&mut DynamicArray<T, O>>, index: isize) -> bool {
    match (array, index_of(index)) {
        (Some(array), Some(index)) => array.delete_at(index).is_ok(),
        _ => false,
    }
}

/// First element matching `key`, if the array is present.
pub fn find<'a, T, O: ElementOps<T>, K: ?Sized>(
    array: Option<&'a DynamicArray<T, O>>,
    matches: impl Fn(&T, &K) -> bool,
    key: &K,
) -> Option<&'a T> {
    array?.find(matches, key)
}

/// Takes the first element matching `key`, if the array is present.
pub fn find_and_remove<T, O: ElementOps<T>, K: ?Sized>(
    array: Option<&mut DynamicArray<T, O>>,
    matches: impl Fn(&T, &K) -> bool,
    key: &K,
) -> Option<T> {
    array?.find_and_remove(matches, key)
}

/// Element count, or `-1` when there is no array.
pub fn length<T, O: ElementOps<T>>(array: Option<&DynamicArray<T, O>>) -> isize {
    array.map_or(-1, |array| signed(array.len()))
}

/// Slot count, or `-1` when there is no array.
pub fn capacity<T, O: ElementOps<T>>(array: Option<&DynamicArray<T, O>>) -> isize {
    array.map_or(-1, |array| signed(array.capacity()))
}

/// `false` when there is no array.
pub fn is_empty<T, O: ElementOps<T>>(array: Option<&DynamicArray<T, O>>) -> bool {
    array.is_some_and(|array| array.is_empty())
}

/// `length == capacity`; `false` when there is no array.
pub fn is_full<T, O: ElementOps<T>>(array: Option<&DynamicArray<T, O>>) -> bool {
    array.is_some_and(|array| array.is_full())
}

/// Rendering of one element; empty for a missing array or bad index.
pub fn element_to_string<T, O: ElementOps<T>>(
    array: Option<&DynamicArray<T, O>>,
    index: isize,
) -> String {
    match (array, index_of(index)) {
        (Some(array), Some(index)) => array.element_to_string(index),
        _ => String::new(),
    }
}

/// `[]` when there is no array.
pub fn to_string<T, O: ElementOps<T>>(array: Option<&DynamicArray<T, O>>) -> String {
    array.map_or_else(|| String::from("[]"), |array| array.to_string())
}

/// Prints [`to_string`] and a newline.
#[cfg(feature = "std")]
pub fn print<T, O: ElementOps<T>>(array: Option<&DynamicArray<T, O>>) {
    println!("{}", to_string(array));
}

/// Prints [`element_to_string`] and a newline.
#[cfg(feature = "std")]
pub fn print_index<T, O: ElementOps<T>>(array: Option<&DynamicArray<T, O>>, index: isize) {
    println!("{}", element_to_string(array, index));
}
