//! Diagnostic text rendering: `[e0, e1, ..., en]`.

use core::fmt;

use crate::{DynamicArray, ElementOps, String};

impl<T, O: ElementOps<T>> DynamicArray<T, O> {
    /// Rendering of the element at `index`, or an empty string when there is
    /// no such element.
    pub fn element_to_string(&self, index: usize) -> String {
        self.get(index)
            .map(|element| self.ops().stringify(element))
            .unwrap_or_default()
    }

    /// Writes the whole array followed by a newline to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("{}", self);
    }

    /// Writes one element followed by a newline to stdout.
    #[cfg(feature = "std")]
    pub fn print_index(&self, index: usize) {
        println!("{}", self.element_to_string(index));
    }
}

impl<T, O: ElementOps<T>> fmt::Display for DynamicArray<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, element) in self.as_slice().iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&self.ops().stringify(element))?;
        }
        f.write_str("]")
    }
}
