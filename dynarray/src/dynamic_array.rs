//! Dynamic array.
//!
//! A single heap buffer of `capacity` slots where the first `len` slots hold live elements.
//! Appending or inserting into a full buffer doubles its capacity (0 becomes 1) while explicit
//! reservations and resizes allocate exactly what was requested.
//!
//! Every operation that can allocate has a `try_*` counterpart returning [`crate::Result`]. A
//! failed allocation, or a panicking element constructor, leaves the array exactly as it was
//! before the call.

mod dynamic_array_error;
mod dynamic_array_iter;
#[cfg(test)]
mod dynamic_array_quickcheck;
#[cfg(feature = "with-rayon")]
mod dynamic_array_rayon;
mod dynamic_array_raw;
#[cfg(feature = "with-rand")]
mod dynamic_array_rnd;
#[cfg(feature = "with-serde")]
mod dynamic_array_serde;
mod dynamic_array_traits;

use crate::{
  utils::{grown_capacity, infallible},
  CapacityHint, Error,
};
use cl_traits::{Push, WithCapacity};
use core::{
  mem::{self, ManuallyDrop},
  ptr, slice,
};
pub use dynamic_array_error::*;
pub use dynamic_array_iter::*;
use dynamic_array_raw::{PartialFill, RawBuf};

/// Contiguous growable array.
///
/// Dereferences to `[T]`, so slice methods and indexing (which panics out of bounds) are available
/// directly. [`at`](#method.at) is the checked accessor and `get_unchecked` the unchecked one.
///
/// Beware that [`swap`](#method.swap) exchanges whole arrays. Use
/// `as_mut_slice().swap(a, b)` to exchange two elements.
pub struct DynamicArray<T> {
  buf: RawBuf<T>,
  len: usize,
}

// SAFETY: The buffer is exclusively owned, like a `Box<[T]>`
unsafe impl<T> Send for DynamicArray<T> where T: Send {}
// SAFETY: Shared references only hand out shared references to the elements
unsafe impl<T> Sync for DynamicArray<T> where T: Sync {}

impl<T> DynamicArray<T> {
  /// Creates an empty instance without allocating.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::DynamicArray;
  /// let array = DynamicArray::<i32>::new();
  /// assert_eq!((array.len(), array.capacity()), (0, 0));
  /// ```
  #[inline]
  pub const fn new() -> Self {
    Self { buf: RawBuf::new(), len: 0 }
  }

  /// Creates an empty instance with exactly `capacity` slots.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::DynamicArray;
  /// let array = DynamicArray::<i32>::with_capacity(10);
  /// assert_eq!((array.len(), array.capacity()), (0, 10));
  /// ```
  #[inline]
  pub fn with_capacity(capacity: usize) -> Self {
    infallible(Self::try_with_capacity(capacity))
  }

  /// Fallible version of [`with_capacity`](#method.with_capacity).
  #[inline]
  pub fn try_with_capacity(capacity: usize) -> crate::Result<Self> {
    Ok(Self { buf: RawBuf::try_with_capacity(capacity)?, len: 0 })
  }

  /// Creates an empty instance with exactly the number of slots requested by `hint`.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::{CapacityHint, DynamicArray};
  /// let array = DynamicArray::<String>::with_capacity_hint(CapacityHint::new(3));
  /// assert!(array.is_empty());
  /// assert_eq!(array.capacity(), 3);
  /// ```
  #[inline]
  pub fn with_capacity_hint(hint: CapacityHint) -> Self {
    Self::with_capacity(hint.capacity())
  }

  /// Moves all `values` into a new instance whose capacity equals `N`.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::DynamicArray;
  /// let array = DynamicArray::from_array([1, 2, 3]);
  /// assert_eq!(array.as_slice(), &[1, 2, 3]);
  /// assert_eq!(array.capacity(), 3);
  /// ```
  pub fn from_array<const N: usize>(values: [T; N]) -> Self {
    let mut this = Self::with_capacity(N);
    let values = ManuallyDrop::new(values);
    // SAFETY: `this` has `N` uninitialized slots and `values` won't be dropped
    unsafe {
      ptr::copy_nonoverlapping(values.as_ptr(), this.buf.ptr(), N);
    }
    this.len = N;
    this
  }

  /// Number of live elements, also known as size.
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Number of allocated slots, occupied or not.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.buf.capacity()
  }

  /// If there are no live elements.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Raw pointer to the first slot. Dangling but aligned when nothing was allocated.
  #[inline]
  pub fn as_ptr(&self) -> *const T {
    self.buf.ptr()
  }

  /// Immutable view of all live elements.
  #[inline]
  pub fn as_slice(&self) -> &[T] {
    // SAFETY: The first `len` slots are initialized and the pointer is aligned and non-null
    unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
  }

  /// Mutable version of [`as_slice`](#method.as_slice).
  #[inline]
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    // SAFETY: Same as `as_slice`, plus `&mut self` guarantees exclusivity
    unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
  }

  /// Checked access.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::{doc_tests::dynamic_array_3, dynamic_array::DynamicArrayError, Error};
  /// let array = dynamic_array_3();
  /// assert_eq!(array.at(2), Ok(&3));
  /// assert_eq!(array.at(3), Err(Error::DynamicArray(DynamicArrayError::IndexOutOfRange)));
  /// ```
  #[inline]
  pub fn at(&self, idx: usize) -> crate::Result<&T> {
    self.as_slice().get(idx).ok_or(Error::DynamicArray(DynamicArrayError::IndexOutOfRange))
  }

  /// Mutable version of [`at`](#method.at).
  #[inline]
  pub fn at_mut(&mut self, idx: usize) -> crate::Result<&mut T> {
    self.as_mut_slice().get_mut(idx).ok_or(Error::DynamicArray(DynamicArrayError::IndexOutOfRange))
  }

  /// Appends `value` after the last element, doubling the capacity when the buffer is full.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::DynamicArray;
  /// let mut array = DynamicArray::new();
  /// let mut capacities = [0; 5];
  /// for (value, capacity) in (1..6).zip(capacities.iter_mut()) {
  ///   array.push_back(value);
  ///   *capacity = array.capacity();
  /// }
  /// assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
  /// assert_eq!(capacities, [1, 2, 4, 4, 8]);
  /// ```
  #[inline]
  pub fn push_back(&mut self, value: T) {
    infallible(self.try_push_back(value))
  }

  /// Fallible version of [`push_back`](#method.push_back). `value` is dropped on failure.
  #[inline]
  pub fn try_push_back(&mut self, value: T) -> crate::Result<()> {
    self.try_insert(self.len, value).map(|_| ())
  }

  /// Inserts `value` at `idx`, shifting all elements after it one slot toward the end. Returns the
  /// index of the inserted element.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::doc_tests::dynamic_array_3;
  /// let mut array = dynamic_array_3();
  /// assert_eq!(array.insert(1, 99), 1);
  /// assert_eq!(array.as_slice(), &[1, 99, 2, 3]);
  /// ```
  ///
  /// # Assertions
  ///
  /// * `idx` must be equal or less than the number of elements
  /// ```rust,should_panic
  /// use dynarray::doc_tests::dynamic_array_3;
  /// let _ = dynamic_array_3().insert(4, 0);
  /// ```
  #[inline]
  pub fn insert(&mut self, idx: usize, value: T) -> usize {
    infallible(self.try_insert(idx, value))
  }

  /// Fallible version of [`insert`](#method.insert). `value` is dropped on failure.
  pub fn try_insert(&mut self, idx: usize, value: T) -> crate::Result<usize> {
    let len = self.len;
    assert!(idx <= len, "insertion index (is {}) should be <= len (is {})", idx, len);
    if len == self.buf.capacity() {
      let new = RawBuf::try_with_capacity(grown_capacity(len)?)?;
      // SAFETY: `new` has at least `len + 1` slots and the first `len` slots of the current
      // buffer are initialized
      unsafe {
        let src = self.buf.ptr();
        let dst = new.ptr();
        ptr::copy_nonoverlapping(src, dst, idx);
        ptr::write(dst.add(idx), value);
        ptr::copy_nonoverlapping(src.add(idx), dst.add(idx + 1), len - idx);
      }
      self.buf = new;
    } else {
      // SAFETY: There is at least one free slot after the `len` initialized ones
      unsafe {
        let gap = self.buf.ptr().add(idx);
        ptr::copy(gap, gap.add(1), len - idx);
        ptr::write(gap, value);
      }
    }
    self.len = len + 1;
    Ok(idx)
  }

  /// Removes and returns the last element, if any. The capacity is left untouched.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::{doc_tests::dynamic_array_3, DynamicArray};
  /// let mut array = dynamic_array_3();
  /// assert_eq!(array.pop_back(), Some(3));
  /// assert_eq!(array.as_slice(), &[1, 2]);
  /// assert_eq!(DynamicArray::<i32>::new().pop_back(), None);
  /// ```
  #[inline]
  pub fn pop_back(&mut self) -> Option<T> {
    self.len = self.len.checked_sub(1)?;
    // SAFETY: The slot at the old last position is initialized and no longer tracked
    unsafe { Some(ptr::read(self.buf.ptr().add(self.len))) }
  }

  /// Removes and returns the element at `idx`, shifting all elements after it one slot toward
  /// the start.
  ///
  /// # Assertions
  ///
  /// * `idx` must be less than the number of elements
  /// ```rust,should_panic
  /// use dynarray::doc_tests::dynamic_array_3;
  /// let _ = dynamic_array_3().remove(3);
  /// ```
  pub fn remove(&mut self, idx: usize) -> T {
    let len = self.len;
    assert!(idx < len, "removal index (is {}) should be < len (is {})", idx, len);
    // SAFETY: `idx` is within the initialized range and the suffix is moved before `len` shrinks
    unsafe {
      let slot = self.buf.ptr().add(idx);
      let value = ptr::read(slot);
      ptr::copy(slot.add(1), slot, len - idx - 1);
      self.len = len - 1;
      value
    }
  }

  /// Drops the element at `idx` and returns the position of the element that followed it, which
  /// is `idx` itself after the shift.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::doc_tests::dynamic_array_3;
  /// let mut array = dynamic_array_3();
  /// let idx = array.insert(1, 99);
  /// assert_eq!(array.erase(idx), 1);
  /// assert_eq!(array.as_slice(), &[1, 2, 3]);
  /// ```
  ///
  /// # Assertions
  ///
  /// Uses the same assertions of [`remove`](#method.remove).
  #[inline]
  pub fn erase(&mut self, idx: usize) -> usize {
    drop(self.remove(idx));
    idx
  }

  /// Exchanges buffers, lengths and capacities with `other` without touching any element.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::{doc_tests::dynamic_array_3, DynamicArray};
  /// let mut a = dynamic_array_3();
  /// let mut b = DynamicArray::with_capacity(7);
  /// a.swap(&mut b);
  /// assert_eq!((a.len(), a.capacity()), (0, 7));
  /// assert_eq!(b.as_slice(), &[1, 2, 3]);
  /// ```
  #[inline]
  pub fn swap(&mut self, other: &mut Self) {
    mem::swap(self, other);
  }

  /// Transfers the whole buffer to the returned instance, leaving `self` empty and without
  /// capacity.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::doc_tests::dynamic_array_3;
  /// let mut from = dynamic_array_3();
  /// let to = from.take();
  /// assert_eq!((from.len(), from.capacity()), (0, 0));
  /// assert_eq!(to.as_slice(), &[1, 2, 3]);
  /// ```
  #[inline]
  pub fn take(&mut self) -> Self {
    mem::take(self)
  }

  /// Drops every element after the first `len` ones. Does nothing if `len` is greater or equal
  /// to the current number of elements.
  pub fn truncate(&mut self, len: usize) {
    if len >= self.len {
      return;
    }
    let tail_len = self.len - len;
    self.len = len;
    // SAFETY: The tail is initialized and is no longer tracked by `len`
    unsafe {
      ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr().add(len), tail_len));
    }
  }

  /// Drops all elements. The capacity is left untouched.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::doc_tests::dynamic_array_3;
  /// let mut array = dynamic_array_3();
  /// array.clear();
  /// assert_eq!((array.len(), array.capacity()), (0, 3));
  /// ```
  #[inline]
  pub fn clear(&mut self) {
    self.truncate(0);
  }

  /// Ensures a capacity of exactly `new_capacity` slots if the current one is smaller. Otherwise,
  /// nothing happens.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::doc_tests::dynamic_array_3;
  /// let mut array = dynamic_array_3();
  /// array.reserve(2);
  /// assert_eq!(array.capacity(), 3);
  /// array.reserve(10);
  /// assert_eq!(array.capacity(), 10);
  /// assert_eq!(array.as_slice(), &[1, 2, 3]);
  /// ```
  #[inline]
  pub fn reserve(&mut self, new_capacity: usize) {
    infallible(self.try_reserve(new_capacity))
  }

  /// Fallible version of [`reserve`](#method.reserve).
  pub fn try_reserve(&mut self, new_capacity: usize) -> crate::Result<()> {
    if new_capacity > self.buf.capacity() {
      // SAFETY: The first `len` slots are initialized and `len` is less than `new_capacity`
      let _old = unsafe { self.buf.relocate(self.len, new_capacity)? };
    }
    Ok(())
  }

  /// Reallocates the buffer to hold exactly the current elements.
  pub fn shrink_to_fit(&mut self) {
    if self.buf.capacity() > self.len {
      // SAFETY: The first `len` slots are initialized
      let _old = infallible(unsafe { self.buf.relocate(self.len, self.len) });
    }
  }

  /// Changes the number of elements to `new_len`. Missing elements are created by `f` and
  /// surplus elements are dropped.
  ///
  /// The buffer is reallocated to exactly `new_len` slots only when `new_len` is greater than the
  /// current capacity.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::doc_tests::dynamic_array_3;
  /// let mut array = dynamic_array_3();
  /// let mut counter = 3;
  /// array.resize_with(5, || {
  ///   counter += 1;
  ///   counter
  /// });
  /// assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
  /// assert_eq!(array.capacity(), 5);
  /// ```
  #[inline]
  pub fn resize_with<F>(&mut self, new_len: usize, f: F)
  where
    F: FnMut() -> T,
  {
    infallible(self.try_resize_with(new_len, f))
  }

  /// Fallible version of [`resize_with`](#method.resize_with).
  pub fn try_resize_with<F>(&mut self, new_len: usize, mut f: F) -> crate::Result<()>
  where
    F: FnMut() -> T,
  {
    let len = self.len;
    if new_len <= len {
      self.truncate(new_len);
      return Ok(());
    }
    let grown =
      if new_len > self.buf.capacity() { Some(RawBuf::try_with_capacity(new_len)?) } else { None };
    let dst = grown.as_ref().map_or(self.buf.ptr(), RawBuf::ptr);
    // SAFETY: The destination has at least `new_len` slots and the ones after `len` are free
    let mut fill = unsafe { PartialFill::new(dst.add(len)) };
    for _ in len..new_len {
      fill.write(f());
    }
    fill.finish();
    if let Some(new) = grown {
      // SAFETY: Both buffers have at least `len` slots and the new prefix is still free
      unsafe {
        ptr::copy_nonoverlapping(self.buf.ptr(), new.ptr(), len);
      }
      self.buf = new;
    }
    self.len = new_len;
    Ok(())
  }

  /// Copies all elements into any `cl_traits` storage.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::doc_tests::dynamic_array_3;
  /// let vec: Vec<i32> = dynamic_array_3().to_storage();
  /// assert_eq!(vec, vec![1, 2, 3]);
  /// ```
  pub fn to_storage<S>(&self) -> S
  where
    S: Push<Input = T> + WithCapacity<Input = usize>,
    T: Clone,
  {
    let mut storage = S::with_capacity(self.len);
    for elem in self.as_slice().iter().cloned() {
      storage.push(elem);
    }
    storage
  }

  /// # Safety
  ///
  /// There must be at least one free slot.
  #[inline]
  unsafe fn push_within_capacity(&mut self, value: T) {
    debug_assert!(self.len < self.buf.capacity());
    ptr::write(self.buf.ptr().add(self.len), value);
    self.len += 1;
  }
}

impl<T> DynamicArray<T>
where
  T: Default,
{
  /// Creates an instance with `len` default elements and the same capacity.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::DynamicArray;
  /// let array = DynamicArray::<u8>::with_len(4);
  /// assert_eq!(array.as_slice(), &[0, 0, 0, 0]);
  /// assert_eq!(array.capacity(), 4);
  /// ```
  #[inline]
  pub fn with_len(len: usize) -> Self {
    let mut this = Self::with_capacity(len);
    this.resize_with(len, T::default);
    this
  }

  /// [`resize_with`](#method.resize_with) filling new slots with `T::default()`.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::DynamicArray;
  /// let mut array = DynamicArray::with_value(3, 7);
  /// array.resize(5);
  /// assert_eq!(array.as_slice(), &[7, 7, 7, 0, 0]);
  /// array.resize(1);
  /// assert_eq!(array.as_slice(), &[7]);
  /// assert_eq!(array.capacity(), 5);
  /// ```
  #[inline]
  pub fn resize(&mut self, new_len: usize) {
    self.resize_with(new_len, T::default)
  }

  /// Fallible version of [`resize`](#method.resize).
  #[inline]
  pub fn try_resize(&mut self, new_len: usize) -> crate::Result<()> {
    self.try_resize_with(new_len, T::default)
  }
}

impl<T> DynamicArray<T>
where
  T: Clone,
{
  /// Creates an instance with `len` clones of `value` and the same capacity.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::DynamicArray;
  /// let array = DynamicArray::with_value(3, "a");
  /// assert_eq!(array.as_slice(), &["a", "a", "a"]);
  /// ```
  #[inline]
  pub fn with_value(len: usize, value: T) -> Self {
    let mut this = Self::with_capacity(len);
    this.resize_with(len, || value.clone());
    this
  }

  /// Clones all elements of `slice` into a new instance whose capacity equals the slice length.
  pub fn from_slice(slice: &[T]) -> Self {
    let mut this = Self::with_capacity(slice.len());
    for elem in slice {
      let value = elem.clone();
      // SAFETY: The capacity is the length of `slice`
      unsafe {
        this.push_within_capacity(value);
      }
    }
    this
  }
}

impl<T> Drop for DynamicArray<T> {
  fn drop(&mut self) {
    // SAFETY: All tracked elements are initialized. `RawBuf` releases the memory afterwards.
    unsafe {
      ptr::drop_in_place(self.as_mut_slice() as *mut [T]);
    }
  }
}
