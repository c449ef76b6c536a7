use crate::{ArrayError, Vec};

/// The slot buffer behind a [`DynamicArray`](crate::DynamicArray).
///
/// - `live` holds the occupied slots `[0, len)`
/// - `capacity` is the logical slot count; the allocation behind `live` is at
///   least this large, so insertions below `capacity` never reallocate
#[derive(Debug)]
pub struct Slots<T> {
    live: Vec<T>,
    capacity: usize,
}

/// Allocates a buffer able to hold `capacity` elements without panicking or
/// aborting on failure.
fn allocate<T>(capacity: usize) -> Result<Vec<T>, ArrayError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(capacity).map_err(|_| {
        tracing::debug!(requested = capacity, "slot allocation failed");
        ArrayError::AllocFailed {
            requested: capacity,
        }
    })?;
    Ok(buffer)
}

impl<T> Slots<T> {
    /// Create empty storage with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Slots {
            live: allocate(capacity)?,
            capacity,
        })
    }

    /// Return element count
    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.live.len() == self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.live
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.live.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.live.get_mut(index)
    }

    /// Place `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Refuses when the slots are full; growing is the caller's decision.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), (T, ArrayError)> {
        let len = self.len();
        if index > len {
            return Err((value, ArrayError::IndexOutOfBounds { index, len }));
        }
        if self.is_full() {
            return Err((
                value,
                ArrayError::Full {
                    capacity: self.capacity,
                },
            ));
        }
        self.live.insert(index, value);
        Ok(())
    }

    /// Take the element at `index`, shifting `[index + 1, len)` one slot left.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        Some(self.live.remove(index))
    }

    /// Hand every live element to `destroy`, front to back.
    pub fn drain_into(&mut self, mut destroy: impl FnMut(T)) {
        for element in self.live.drain(..) {
            destroy(element);
        }
    }

    /// Move the live elements into a fresh buffer of exactly `new_capacity`
    /// slots, handing any element that no longer fits to `destroy`.
    ///
    /// The fresh buffer is allocated before anything is touched, so on error
    /// the slots are exactly as they were.
    pub fn reallocate(
        &mut self,
        new_capacity: usize,
        mut destroy: impl FnMut(usize, T),
    ) -> Result<(), ArrayError> {
        if new_capacity == self.capacity {
            return Ok(());
        }

        let mut fresh = allocate(new_capacity)?;
        let kept = self.len().min(new_capacity);

        for (offset, element) in self.live.drain(kept..).enumerate() {
            destroy(kept + offset, element);
        }
        fresh.extend(self.live.drain(..));

        self.live = fresh;
        self.capacity = new_capacity;
        Ok(())
    }
}
