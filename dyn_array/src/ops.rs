//! Element behavior bundles.
//!
//! A [`DynamicArray`](crate::DynamicArray) never inspects its elements itself.
//! Releasing, rendering and ordering are delegated to an [`ElementOps`]
//! implementation chosen when the array is built.

use core::cmp::Ordering;
use core::fmt;

use crate::{ArrayError, Box, String, ToString};

/// The three capabilities an array needs from its element kind.
pub trait ElementOps<T> {
    /// Releases an element the array owns. Called exactly once per element
    /// that is cleared, deleted or truncated away.
    fn destroy(&self, element: T) {
        drop(element);
    }

    /// Human-readable form of one element.
    fn stringify(&self, element: &T) -> String;

    /// Three-way comparison used by sorted insertion.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Behavior taken from the element's own `Display` and `Ord` impls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOps;

impl<T: fmt::Display + Ord> ElementOps<T> for NaturalOps {
    fn stringify(&self, element: &T) -> String {
        element.to_string()
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

type DestroyFn<T> = Box<dyn Fn(T)>;
type StringifyFn<T> = Box<dyn Fn(&T) -> String>;
type CompareFn<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Behavior assembled at runtime from three closures.
///
/// Use [`FnOps::builder`] to create one; the builder refuses to produce a
/// bundle with any operation missing.
pub struct FnOps<T> {
    destroy: DestroyFn<T>,
    stringify: StringifyFn<T>,
    compare: CompareFn<T>,
}

impl<T> FnOps<T> {
    pub fn builder() -> FnOpsBuilder<T> {
        FnOpsBuilder::new()
    }
}

impl<T> ElementOps<T> for FnOps<T> {
    fn destroy(&self, element: T) {
        (self.destroy)(element)
    }

    fn stringify(&self, element: &T) -> String {
        (self.stringify)(element)
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }
}

impl<T> fmt::Debug for FnOps<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOps").finish_non_exhaustive()
    }
}

/// Fluent builder for [`FnOps`].
///
/// ```
/// use dyn_array::{ArrayError, FnOps};
///
/// let missing = FnOps::<u32>::builder()
///     .stringify(|n| n.to_string())
///     .compare(|a, b| a.cmp(b))
///     .build();
///
/// assert_eq!(missing.unwrap_err(), ArrayError::MissingOperation("destroy"));
/// ```
pub struct FnOpsBuilder<T> {
    destroy: Option<DestroyFn<T>>,
    stringify: Option<StringifyFn<T>>,
    compare: Option<CompareFn<T>>,
}

impl<T> FnOpsBuilder<T> {
    pub fn new() -> Self {
        Self {
            destroy: None,
            stringify: None,
            compare: None,
        }
    }

    pub fn destroy(mut self, f: impl Fn(T) + 'static) -> Self {
        self.destroy = Some(Box::new(f));
        self
    }

    pub fn stringify(mut self, f: impl Fn(&T) -> String + 'static) -> Self {
        self.stringify = Some(Box::new(f));
        self
    }

    pub fn compare(mut self, f: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.compare = Some(Box::new(f));
        self
    }

    /// # Errors
    ///
    /// `ArrayError::MissingOperation` naming the first operation not supplied.
    pub fn build(self) -> Result<FnOps<T>, ArrayError> {
        Ok(FnOps {
            destroy: self.destroy.ok_or(ArrayError::MissingOperation("destroy"))?,
            stringify: self
                .stringify
                .ok_or(ArrayError::MissingOperation("stringify"))?,
            compare: self.compare.ok_or(ArrayError::MissingOperation("compare"))?,
        })
    }
}

impl<T> Default for FnOpsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
