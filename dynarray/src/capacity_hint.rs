//! Reservation request.
//!
//! A plain value that selects the reservation-only constructor of
//! [`DynamicArray`](crate::DynamicArray) without being mistaken for a number of elements.

/// Requested number of slots.
///
/// # Example
///
/// ```rust
/// use dynarray::{CapacityHint, DynamicArray};
/// let array: DynamicArray<u8> = CapacityHint::new(16).into();
/// assert_eq!((array.len(), array.capacity()), (0, 16));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct CapacityHint {
  capacity: usize,
}

impl CapacityHint {
  /// Wraps `capacity`. Zero is valid and reserves nothing.
  #[inline]
  pub const fn new(capacity: usize) -> Self {
    Self { capacity }
  }

  /// The wrapped number, unchanged.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::CapacityHint;
  /// assert_eq!(CapacityHint::new(0).capacity(), 0);
  /// assert_eq!(CapacityHint::from(42).capacity(), 42);
  /// ```
  #[inline]
  pub const fn capacity(self) -> usize {
    self.capacity
  }
}

impl From<usize> for CapacityHint {
  #[inline]
  fn from(from: usize) -> Self {
    Self::new(from)
  }
}
