use crate::dynamic_array::{dynamic_array_raw::RawBuf, DynamicArray};
use core::{
  fmt,
  iter::FusedIterator,
  mem::{self, ManuallyDrop},
  ptr, slice,
};

/// Iterator that moves elements out of a [`DynamicArray`].
///
/// # Example
///
/// ```rust
/// use dynarray::doc_tests::dynamic_array_3;
/// let mut iter = dynamic_array_3().into_iter();
/// assert_eq!(iter.next_back(), Some(3));
/// assert_eq!(iter.as_slice(), &[1, 2]);
/// assert_eq!(iter.len(), 2);
/// ```
pub struct IntoIter<T> {
  buf: RawBuf<T>,
  end: usize,
  start: usize,
}

// SAFETY: Same ownership as `DynamicArray`
unsafe impl<T> Send for IntoIter<T> where T: Send {}
// SAFETY: Same ownership as `DynamicArray`
unsafe impl<T> Sync for IntoIter<T> where T: Sync {}

impl<T> IntoIter<T> {
  /// Remaining elements.
  #[inline]
  pub fn as_slice(&self) -> &[T] {
    // SAFETY: Slots between `start` and `end` are initialized and not yet yielded
    unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) }
  }
}

impl<T> fmt::Debug for IntoIter<T>
where
  T: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
  }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.start == self.end {
      return None;
    }
    self.end -= 1;
    // SAFETY: The slot at `end` is initialized and is now outside the tracked range
    unsafe { Some(ptr::read(self.buf.ptr().add(self.end))) }
  }
}

impl<T> Drop for IntoIter<T> {
  fn drop(&mut self) {
    // SAFETY: Only the slots that weren't yielded are dropped
    unsafe {
      let remaining = self.end - self.start;
      ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr().add(self.start), remaining));
    }
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.start == self.end {
      return None;
    }
    // SAFETY: The slot at `start` is initialized and is now outside the tracked range
    let value = unsafe { ptr::read(self.buf.ptr().add(self.start)) };
    self.start += 1;
    Some(value)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.end - self.start;
    (len, Some(len))
  }
}

impl<T> IntoIterator for DynamicArray<T> {
  type IntoIter = IntoIter<T>;
  type Item = T;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    let mut this = ManuallyDrop::new(self);
    let buf = mem::replace(&mut this.buf, RawBuf::new());
    IntoIter { buf, end: this.len, start: 0 }
  }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
  type IntoIter = slice::Iter<'a, T>;
  type Item = &'a T;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.as_slice().iter()
  }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
  type IntoIter = slice::IterMut<'a, T>;
  type Item = &'a mut T;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.as_mut_slice().iter_mut()
  }
}
