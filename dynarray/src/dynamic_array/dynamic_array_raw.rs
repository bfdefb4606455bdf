use crate::Error;
use alloc::alloc::{alloc, dealloc};
use core::{
  alloc::Layout,
  marker::PhantomData,
  mem,
  ptr::{self, NonNull},
};

/// Uninitialized heap slots. Owns the allocation but never the elements: dropping a `RawBuf`
/// releases memory without running any element destructor.
#[derive(Debug)]
pub(crate) struct RawBuf<T> {
  cap: usize,
  ptr: NonNull<T>,
  phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
  #[inline]
  pub(crate) const fn new() -> Self {
    Self { cap: 0, ptr: NonNull::dangling(), phantom: PhantomData }
  }

  /// Allocates exactly `cap` slots. Zero slots or zero-sized types don't touch the allocator.
  pub(crate) fn try_with_capacity(cap: usize) -> crate::Result<Self> {
    if cap == 0 {
      return Ok(Self::new());
    }
    let layout = Layout::array::<T>(cap).map_err(|_| Error::CapacityOverflow)?;
    if layout.size() == 0 {
      return Ok(Self { cap, ptr: NonNull::dangling(), phantom: PhantomData });
    }
    // SAFETY: `layout` has a non-zero size
    let ptr = unsafe { alloc(layout) };
    let ptr = NonNull::new(ptr.cast::<T>()).ok_or(Error::AllocFailure(layout))?;
    Ok(Self { cap, ptr, phantom: PhantomData })
  }

  #[inline]
  pub(crate) fn capacity(&self) -> usize {
    self.cap
  }

  #[inline]
  pub(crate) fn ptr(&self) -> *mut T {
    self.ptr.as_ptr()
  }

  /// Moves the first `len` slots of `self` into a new buffer of `new_cap` slots and returns the
  /// old buffer, which must be dropped by the caller once nothing else refers to it.
  ///
  /// # Safety
  ///
  /// `len` must not exceed both capacities and the first `len` slots must be initialized.
  pub(crate) unsafe fn relocate(&mut self, len: usize, new_cap: usize) -> crate::Result<Self> {
    let new = Self::try_with_capacity(new_cap)?;
    ptr::copy_nonoverlapping(self.ptr(), new.ptr(), len);
    Ok(mem::replace(self, new))
  }
}

impl<T> Drop for RawBuf<T> {
  fn drop(&mut self) {
    let size = mem::size_of::<T>().wrapping_mul(self.cap);
    if size == 0 {
      return;
    }
    // SAFETY: The same layout was successfully created in `try_with_capacity`
    unsafe {
      let layout = Layout::from_size_align_unchecked(size, mem::align_of::<T>());
      dealloc(self.ptr().cast::<u8>(), layout);
    }
  }
}

/// Drops the elements written through it unless `finish` is called. Keeps partially built
/// ranges from leaking or being dropped twice when an element constructor panics.
pub(crate) struct PartialFill<T> {
  filled: usize,
  start: *mut T,
}

impl<T> PartialFill<T> {
  /// # Safety
  ///
  /// `start` must point to enough uninitialized slots for every subsequent `write`.
  #[inline]
  pub(crate) unsafe fn new(start: *mut T) -> Self {
    Self { filled: 0, start }
  }

  #[inline]
  pub(crate) fn write(&mut self, value: T) {
    // SAFETY: Guaranteed by the constructor contract
    unsafe {
      ptr::write(self.start.add(self.filled), value);
    }
    self.filled += 1;
  }

  /// Hands the written elements over to the caller.
  #[inline]
  pub(crate) fn finish(self) {
    mem::forget(self);
  }
}

impl<T> Drop for PartialFill<T> {
  fn drop(&mut self) {
    // SAFETY: Only the first `filled` slots were initialized
    unsafe {
      ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.filled));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::RawBuf;

  #[test]
  fn zero_sized_types_never_allocate() {
    let buf = RawBuf::<()>::try_with_capacity(usize::MAX).unwrap();
    assert_eq!(buf.capacity(), usize::MAX);
  }

  #[test]
  fn relocation_keeps_prefix() {
    let mut buf = RawBuf::<u16>::try_with_capacity(2).unwrap();
    unsafe {
      buf.ptr().write(7);
      buf.ptr().add(1).write(9);
      let old = buf.relocate(2, 5).unwrap();
      assert_eq!(old.capacity(), 2);
      assert_eq!(buf.capacity(), 5);
      assert_eq!(*buf.ptr(), 7);
      assert_eq!(*buf.ptr().add(1), 9);
    }
  }
}
