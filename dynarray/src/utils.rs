use crate::Error;

/// Capacity after a full buffer receives one more element: 0 becomes 1, everything else doubles.
#[inline]
pub fn grown_capacity(capacity: usize) -> crate::Result<usize> {
  if capacity == 0 {
    return Ok(1);
  }
  capacity.checked_mul(2).ok_or(Error::CapacityOverflow)
}

/// Turns the outcome of a fallible allocation into the behavior of the standard collections:
/// allocator failures abort through `handle_alloc_error` and overflows panic.
#[inline]
pub fn infallible<T>(rslt: crate::Result<T>) -> T {
  match rslt {
    Ok(r) => r,
    Err(Error::AllocFailure(layout)) => alloc::alloc::handle_alloc_error(layout),
    Err(err) => panic!("{}", err),
  }
}
