use core::fmt;

/// Any error related to `DynamicArray` operations
#[derive(Debug, PartialEq)]
pub enum DynamicArrayError {
  /// The index of a checked access is greater or equal to the number of elements
  ///
  /// ```rust
  /// use dynarray::{doc_tests::dynamic_array_3, dynamic_array::DynamicArrayError};
  /// let array = dynamic_array_3();
  /// assert_eq!(array.at(3), Err(dynarray::Error::DynamicArray(DynamicArrayError::IndexOutOfRange)));
  /// ```
  IndexOutOfRange,
}

impl fmt::Display for DynamicArrayError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match *self {
      Self::IndexOutOfRange => "IndexOutOfRange",
    };
    write!(f, "{}", s)
  }
}

#[cfg(feature = "std")]
impl std::error::Error for DynamicArrayError {}
