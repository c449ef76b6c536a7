//! Capacity configuration: starting capacity and the growth factor.

use crate::ArrayError;

/// Starting capacity used by [`DynamicArray::new`](crate::DynamicArray::new).
pub const DEFAULT_CAPACITY: usize = 8;

/// Growth factor applied when a full array must expand, stored as a ratio so
/// capacities stay integral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    numerator: usize,
    denominator: usize,
}

impl GrowthPolicy {
    /// 1.5x
    pub const DEFAULT: GrowthPolicy = GrowthPolicy {
        numerator: 3,
        denominator: 2,
    };

    /// Creates a growth factor of `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::InvalidGrowthFactor` if the denominator is zero or
    /// the ratio is below one.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::GrowthPolicy;
    ///
    /// let doubling = GrowthPolicy::new(2, 1).unwrap();
    /// assert_eq!(doubling.next_capacity(4), Some(8));
    ///
    /// assert!(GrowthPolicy::new(1, 2).is_err());
    /// ```
    pub fn new(numerator: usize, denominator: usize) -> Result<Self, ArrayError> {
        if denominator == 0 || numerator < denominator {
            return Err(ArrayError::InvalidGrowthFactor {
                numerator,
                denominator,
            });
        }
        Ok(GrowthPolicy {
            numerator,
            denominator,
        })
    }

    /// Capacity after one growth step from `current`.
    ///
    /// Strictly larger than `current`, even when scaling alone would not move
    /// a capacity of 0 or 1. `None` when no larger capacity fits in a `usize`.
    #[inline]
    pub fn next_capacity(&self, current: usize) -> Option<usize> {
        let (num, den) = (self.numerator, self.denominator);
        // c * num / den without overflowing on the intermediate product
        let whole = (current / den).checked_mul(num)?;
        let part = (current % den).checked_mul(num)? / den;
        let scaled = whole.checked_add(part)?;
        Some(scaled.max(current.checked_add(1)?))
    }

    pub fn numerator(&self) -> usize {
        self.numerator
    }

    pub fn denominator(&self) -> usize {
        self.denominator
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Construction-time settings for a [`DynamicArray`](crate::DynamicArray).
///
/// ```
/// use dyn_array::{ArrayConfig, DynamicArray, GrowthPolicy, NaturalOps};
///
/// let config = ArrayConfig::new()
///     .initial_capacity(1)
///     .growth(GrowthPolicy::new(2, 1).unwrap());
///
/// let mut array = DynamicArray::with_config(config, NaturalOps).unwrap();
/// array.push(1u8).unwrap();
/// array.push(2u8).unwrap();
/// array.push(3u8).unwrap();
/// assert_eq!(array.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConfig {
    pub initial_capacity: usize,
    pub growth: GrowthPolicy,
}

impl ArrayConfig {
    pub fn new() -> Self {
        ArrayConfig {
            initial_capacity: DEFAULT_CAPACITY,
            growth: GrowthPolicy::DEFAULT,
        }
    }

    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}
