//! # dyn_array
//!
//! An owning, growable array whose element behavior (how an element is
//! destroyed, rendered and ordered) is supplied at construction time.
//!
//! ```rust
//! use dyn_array::{DynamicArray, NaturalOps};
//!
//! let mut names = DynamicArray::with_capacity(2, NaturalOps).expect("allocation failed");
//! names.push("x").unwrap();
//! names.push("y").unwrap();
//! names.push("z").unwrap();
//!
//! // 2 * 1.5 = 3
//! assert_eq!(names.capacity(), 3);
//! assert_eq!(names.to_string(), "[x, y, z]");
//! ```
//!
//! ## Custom element behavior
//!
//! ```rust
//! use dyn_array::{DynamicArray, FnOps};
//!
//! let ops = FnOps::builder()
//!     .destroy(|path: String| drop(path))
//!     .stringify(|path: &String| path.to_uppercase())
//!     .compare(|a: &String, b: &String| a.len().cmp(&b.len()))
//!     .build()
//!     .expect("all three operations supplied");
//!
//! let mut paths = DynamicArray::new(ops).unwrap();
//! paths.insert_sorted("/usr/lib".to_string()).unwrap();
//! paths.insert_sorted("/tmp".to_string()).unwrap();
//!
//! assert_eq!(paths.to_string(), "[/TMP, /USR/LIB]");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub(crate) use std::{
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(not(feature = "std"))]
pub(crate) use alloc::{
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};

pub mod config;
pub mod container;
pub mod error;
pub mod handle;
pub mod ops;
mod render;
#[doc(hidden)]
pub mod storage;

pub use config::{ArrayConfig, DEFAULT_CAPACITY, GrowthPolicy};
pub use container::DynamicArray;
pub use error::{ArrayError, InsertError};
pub use ops::{ElementOps, FnOps, FnOpsBuilder, NaturalOps};
pub use storage::Slots;
