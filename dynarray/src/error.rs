use crate::dynamic_array::DynamicArrayError;
use core::{alloc::Layout, fmt};

/// Contains all errors related to dynarray
#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
  /// The global allocator couldn't provide a block of memory for the requested layout
  AllocFailure(Layout),
  /// The number of requested slots doesn't fit in the address space
  ///
  /// ```rust
  /// use dynarray::{DynamicArray, Error};
  /// let mut array = DynamicArray::<u64>::new();
  /// assert_eq!(array.try_reserve(usize::MAX), Err(Error::CapacityOverflow));
  /// assert_eq!(array.capacity(), 0);
  /// ```
  CapacityOverflow,
  /// DynamicArrayError
  DynamicArray(DynamicArrayError),
}

impl fmt::Display for Error {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::AllocFailure(ref x) => write!(f, "AllocFailure({} bytes)", x.size()),
      Self::CapacityOverflow => write!(f, "CapacityOverflow"),
      Self::DynamicArray(ref x) => write!(f, "DynamicArray({})", x),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<DynamicArrayError> for Error {
  #[inline]
  fn from(f: DynamicArrayError) -> Self {
    Self::DynamicArray(f)
  }
}
