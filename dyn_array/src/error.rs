use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// Array errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Index outside the live range (or past the append slot for insertion)
    #[cfg_attr(feature = "std", error("Index {index} out of bounds for length {len}"))]
    IndexOutOfBounds { index: usize, len: usize },

    /// The slot buffer could not be allocated
    #[cfg_attr(feature = "std", error("failed to allocate storage for {requested} elements"))]
    AllocFailed { requested: usize },

    /// Every slot is occupied and the storage was asked to insert without
    /// growing first. [`DynamicArray`](crate::DynamicArray) always grows
    /// before inserting, so only direct [`Slots`](crate::Slots) users see this.
    #[cfg_attr(feature = "std", error("all {capacity} slots are occupied"))]
    Full { capacity: usize },

    /// An element operation was never supplied to the builder
    #[cfg_attr(feature = "std", error("missing element operation: {0}"))]
    MissingOperation(&'static str),

    /// Growth ratio below one or with a zero denominator
    #[cfg_attr(
        feature = "std",
        error("growth factor {numerator}/{denominator} must be at least 1")
    )]
    InvalidGrowthFactor { numerator: usize, denominator: usize },
}

#[cfg(not(feature = "std"))]
impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for length {}", index, len)
            }
            ArrayError::AllocFailed { requested } => {
                write!(f, "failed to allocate storage for {} elements", requested)
            }
            ArrayError::Full { capacity } => write!(f, "all {} slots are occupied", capacity),
            ArrayError::MissingOperation(name) => write!(f, "missing element operation: {}", name),
            ArrayError::InvalidGrowthFactor {
                numerator,
                denominator,
            } => write!(
                f,
                "growth factor {}/{} must be at least 1",
                numerator, denominator
            ),
        }
    }
}

/// A rejected insertion.
///
/// The array never takes ownership of an element it failed to insert, so the
/// element travels back to the caller inside the error.
///
/// ```
/// use dyn_array::{ArrayError, DynamicArray, NaturalOps};
///
/// let mut array = DynamicArray::<u32>::with_capacity(2, NaturalOps).unwrap();
/// let err = array.insert(5, 7).unwrap_err();
///
/// assert_eq!(err.kind(), &ArrayError::IndexOutOfBounds { index: 5, len: 0 });
/// assert_eq!(err.into_inner(), 7);
/// ```
pub struct InsertError<T> {
    element: T,
    kind: ArrayError,
}

impl<T> InsertError<T> {
    pub(crate) fn new(element: T, kind: ArrayError) -> Self {
        Self { element, kind }
    }

    /// Why the insertion failed.
    pub fn kind(&self) -> &ArrayError {
        &self.kind
    }

    /// Returns ownership of the element that was not inserted.
    pub fn into_inner(self) -> T {
        self.element
    }

    /// Splits the error into the element and the failure reason.
    pub fn into_parts(self) -> (T, ArrayError) {
        (self.element, self.kind)
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insertion rejected: {}", self.kind)
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for InsertError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl<T> From<InsertError<T>> for ArrayError {
    fn from(err: InsertError<T>) -> Self {
        err.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn messages_name_the_failure() {
        let err = ArrayError::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Index 4 out of bounds for length 2");

        let err = ArrayError::Full { capacity: 3 };
        assert_eq!(err.to_string(), "all 3 slots are occupied");

        let err = ArrayError::MissingOperation("compare");
        assert_eq!(err.to_string(), "missing element operation: compare");

        let rejected = InsertError::new("x", ArrayError::AllocFailed { requested: 3 });
        assert_eq!(
            rejected.to_string(),
            "insertion rejected: failed to allocate storage for 3 elements"
        );
    }

    #[test]
    fn insert_error_hands_back_the_element() {
        let rejected = InsertError::new(41u8, ArrayError::IndexOutOfBounds { index: 9, len: 0 });
        let (element, kind) = rejected.into_parts();
        assert_eq!(element, 41);
        assert_eq!(kind, ArrayError::IndexOutOfBounds { index: 9, len: 0 });
    }
}
