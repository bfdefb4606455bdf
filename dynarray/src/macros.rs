/// Creates a [`DynamicArray`](crate::DynamicArray) whose capacity equals its length.
///
/// # Example
///
/// ```rust
/// use dynarray::{dynarray, DynamicArray};
/// let empty: DynamicArray<u8> = dynarray![];
/// assert_eq!(empty.capacity(), 0);
/// assert_eq!(dynarray![7; 3].as_slice(), &[7, 7, 7]);
/// let list = dynarray![1, 2, 3];
/// assert_eq!((list.as_slice(), list.capacity()), (&[1, 2, 3][..], 3));
/// ```
#[macro_export]
macro_rules! dynarray {
  () => {
    $crate::DynamicArray::new()
  };
  ($elem:expr; $n:expr) => {
    $crate::DynamicArray::with_value($n, $elem)
  };
  ($($x:expr),+ $(,)?) => {
    $crate::DynamicArray::from_array([$($x),+])
  };
}
