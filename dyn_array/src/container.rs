use core::fmt;

use crate::{ArrayConfig, ArrayError, ElementOps, GrowthPolicy, InsertError, NaturalOps, Slots};

/// Owning, growable array with pluggable element behavior.
///
/// `DynamicArray<T, O>` owns every element it holds. Elements move in on
/// insertion and move back out on [`remove`](Self::remove), [`pop`](Self::pop)
/// and [`find_and_remove`](Self::find_and_remove); anything the array discards
/// itself (clearing, deleting, truncating, dropping) is handed to
/// [`ElementOps::destroy`] exactly once.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use dyn_array::{DynamicArray, NaturalOps};
///
/// let mut array = DynamicArray::new(NaturalOps).unwrap();
/// array.push("a").unwrap();
/// array.push("b").unwrap();
/// array.push("c").unwrap();
///
/// assert_eq!(array.remove(1), Some("b"));
/// assert_eq!(array.to_string(), "[a, c]");
/// ```
///
/// ## Sorted insertion
///
/// ```
/// use dyn_array::{DynamicArray, NaturalOps};
///
/// let mut array = DynamicArray::new(NaturalOps).unwrap();
/// for n in [5, 1, 4, 1, 3] {
///     array.insert_sorted(n).unwrap();
/// }
/// assert_eq!(array.as_slice(), &[1, 1, 3, 4, 5]);
/// ```
pub struct DynamicArray<T, O: ElementOps<T> = NaturalOps> {
    slots: Slots<T>,
    ops: O,
    growth: GrowthPolicy,
}

impl<T, O: ElementOps<T>> DynamicArray<T, O> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) slots.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::AllocFailed` if the slot buffer cannot be allocated.
    pub fn new(ops: O) -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::default(), ops)
    }

    /// Creates an empty array with exactly `capacity` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::{DynamicArray, NaturalOps};
    ///
    /// let array = DynamicArray::<u64>::with_capacity(2, NaturalOps).unwrap();
    /// assert_eq!(array.capacity(), 2);
    /// assert!(array.is_empty());
    ///
    /// assert!(DynamicArray::<u64>::with_capacity(usize::MAX, NaturalOps).is_err());
    /// ```
    pub fn with_capacity(capacity: usize, ops: O) -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::new().initial_capacity(capacity), ops)
    }

    pub fn with_config(config: ArrayConfig, ops: O) -> Result<Self, ArrayError> {
        Ok(DynamicArray {
            slots: Slots::with_capacity(config.initial_capacity)?,
            ops,
            growth: config.growth,
        })
    }

    /// The element behavior this array was built with.
    pub fn ops(&self) -> &O {
        &self.ops
    }

    /// Destroys every element, keeping the allocated slots.
    pub fn clear(&mut self) {
        let ops = &self.ops;
        self.slots.drain_into(|element| ops.destroy(element));
    }

    /// Destroys every element and releases the array.
    ///
    /// Dropping the array does the same; this spells it out.
    pub fn destroy(self) {
        drop(self);
    }

    /// Enlarges capacity by the growth factor (at least by one slot).
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::AllocFailed` and leaves the array untouched if no
    /// larger capacity is representable or the larger buffer cannot be
    /// allocated.
    pub fn grow(&mut self) -> Result<(), ArrayError> {
        let from = self.capacity();
        let Some(to) = self.growth.next_capacity(from) else {
            tracing::debug!(from, "capacity cannot grow any further");
            return Err(ArrayError::AllocFailed {
                requested: usize::MAX,
            });
        };
        tracing::trace!(from, to, "growing array");
        self.resize(to)
    }

    /// Sets capacity to exactly `new_capacity`.
    ///
    /// Shrinking below the current length destroys the elements at indices
    /// `new_capacity..len`.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::AllocFailed` if the new buffer cannot be allocated;
    /// length, capacity and every element are then unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::{DynamicArray, NaturalOps};
    ///
    /// let mut array = DynamicArray::new(NaturalOps).unwrap();
    /// for n in 0..5 {
    ///     array.push(n).unwrap();
    /// }
    ///
    /// array.resize(3).unwrap();
    /// assert_eq!(array.as_slice(), &[0, 1, 2]);
    /// assert!(array.is_full());
    ///
    /// assert!(array.resize(usize::MAX).is_err());
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        tracing::trace!(from = self.capacity(), to = new_capacity, "resizing array");
        let ops = &self.ops;
        self.slots.reallocate(new_capacity, |index, element| {
            tracing::trace!(index, "destroying truncated element");
            ops.destroy(element);
        })
    }

    /// Appends an element.
    ///
    /// # Errors
    ///
    /// Returns the element inside an [`InsertError`] if growing fails.
    #[inline]
    pub fn push(&mut self, element: T) -> Result<(), InsertError<T>> {
        self.insert(self.len(), element)
    }

    /// Inserts an element at `index`, shifting later elements right.
    ///
    /// `index == len()` appends. A full array grows first.
    ///
    /// # Errors
    ///
    /// - `ArrayError::IndexOutOfBounds` if `index > len()`
    /// - `ArrayError::AllocFailed` if growing fails
    ///
    /// Either way the array is unchanged and the element is handed back.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), InsertError<T>> {
        let len = self.len();
        if index > len {
            return Err(InsertError::new(
                element,
                ArrayError::IndexOutOfBounds { index, len },
            ));
        }

        if self.is_full() {
            if let Err(kind) = self.grow() {
                return Err(InsertError::new(element, kind));
            }
        }

        self.slots
            .insert(index, element)
            .map_err(|(element, kind)| InsertError::new(element, kind))
    }

    /// Inserts an element before the first existing element that compares
    /// greater than or equal to it.
    ///
    /// Keeps the array ascending only if every insertion goes through here.
    pub fn insert_sorted(&mut self, element: T) -> Result<(), InsertError<T>> {
        let index = self
            .slots
            .as_slice()
            .iter()
            .position(|existing| self.ops.compare(existing, &element).is_ge())
            .unwrap_or(self.len());
        self.insert(index, element)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        self.remove(last)
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// The caller now owns the element; the array does not destroy it.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.slots.remove(index)
    }

    /// Removes the element at `index` and destroys it.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::IndexOutOfBounds` if `index >= len()`.
    pub fn delete_at(&mut self, index: usize) -> Result<(), ArrayError> {
        let len = self.len();
        let element = self
            .remove(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len })?;
        self.ops.destroy(element);
        Ok(())
    }

    /// Index of the first element for which `matches(element, key)` holds.
    pub fn position<K: ?Sized>(&self, matches: impl Fn(&T, &K) -> bool, key: &K) -> Option<usize> {
        self.slots
            .as_slice()
            .iter()
            .position(|candidate| matches(candidate, key))
    }

    /// First element for which `matches(element, key)` holds.
    ///
    /// ```
    /// use dyn_array::{DynamicArray, NaturalOps};
    ///
    /// let mut array = DynamicArray::new(NaturalOps).unwrap();
    /// array.push("apple").unwrap();
    /// array.push("banana").unwrap();
    /// array.push("blueberry").unwrap();
    ///
    /// let found = array.find(|fruit, prefix: &str| fruit.starts_with(prefix), "b");
    /// assert_eq!(found, Some(&"banana"));
    /// ```
    pub fn find<K: ?Sized>(&self, matches: impl Fn(&T, &K) -> bool, key: &K) -> Option<&T> {
        let index = self.position(matches, key)?;
        self.get(index)
    }

    /// Like [`find`](Self::find), but removes the match and hands it to the caller.
    pub fn find_and_remove<K: ?Sized>(
        &mut self,
        matches: impl Fn(&T, &K) -> bool,
        key: &K,
    ) -> Option<T> {
        let index = self.position(matches, key)?;
        self.remove(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `true` when the next insertion has to grow the array.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    pub fn as_slice(&self) -> &[T] {
        self.slots.as_slice()
    }
}

impl<T, O: ElementOps<T>> Drop for DynamicArray<T, O> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, O: ElementOps<T>> core::ops::Index<usize> for DynamicArray<T, O> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("index out of bounds")
    }
}

impl<T, O: ElementOps<T>> core::ops::IndexMut<usize> for DynamicArray<T, O> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("index out of bounds")
    }
}

impl<T: fmt::Debug, O: ElementOps<T>> fmt::Debug for DynamicArray<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}
